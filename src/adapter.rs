//! Adapter: a meters-only type is exposed through the interface clients expect.

use crate::error::{PatternError, Result};

pub const FEET_PER_METER: f32 = 3.28084;

/// Target interface the client code is written against.
pub trait LengthAdapter {
    fn length(&self) -> f32;
    fn unit(&self) -> &'static str;
}

fn checked_meters(meters: f32) -> Result<f32> {
    if meters.is_finite() && meters >= 0.0 {
        Ok(meters)
    } else {
        Err(PatternError::InvalidLength(meters))
    }
}

/// Already speaks the target interface, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuroLength {
    meters: f32,
}

impl EuroLength {
    pub fn new(meters: f32) -> Result<Self> {
        Ok(Self {
            meters: checked_meters(meters)?,
        })
    }
}

impl LengthAdapter for EuroLength {
    fn length(&self) -> f32 {
        self.meters
    }

    fn unit(&self) -> &'static str {
        "m"
    }
}

/// Adaptee: stores meters behind an incompatible accessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsLength {
    meters: f32,
}

impl UsLength {
    /// Also rejects lengths too large to express in feet.
    pub fn new(meters: f32) -> Result<Self> {
        let meters = checked_meters(meters)?;
        if !(meters * FEET_PER_METER).is_finite() {
            return Err(PatternError::InvalidLength(meters));
        }
        Ok(Self { meters })
    }

    pub fn raw_length(&self) -> f32 {
        self.meters
    }
}

/// Reports a `UsLength` in feet. Conversion never touches the adaptee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthAdapterUs {
    adaptee: UsLength,
}

impl LengthAdapterUs {
    pub fn new(adaptee: UsLength) -> Self {
        Self { adaptee }
    }

    pub fn adaptee(&self) -> &UsLength {
        &self.adaptee
    }
}

impl LengthAdapter for LengthAdapterUs {
    fn length(&self) -> f32 {
        self.adaptee.raw_length() * FEET_PER_METER
    }

    fn unit(&self) -> &'static str {
        "ft"
    }
}

pub fn describe(label: &str, length: &dyn LengthAdapter) -> String {
    let formatted = format!("{:.5}", length.length());
    let value = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("Length in {label}: {value} {}", length.unit())
}
