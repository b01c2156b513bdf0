//! Prototype: new objects are cloned from existing ones through a trait object.
//!
//! `Clone` is not object safe, so each prototype provides `clone_box` and
//! `Box<dyn Prototype>` gets its `Clone` impl from that.

use std::collections::HashMap;

use crate::error::{PatternError, Result};

pub trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn show_data(&self) -> String;
    fn data(&self) -> &str;
    fn set_data(&mut self, data: String);
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcretePrototypeA {
    data: String,
}

impl ConcretePrototypeA {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl Prototype for ConcretePrototypeA {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn show_data(&self) -> String {
        format!("ConcretePrototypeA Data: {}", self.data)
    }

    fn data(&self) -> &str {
        &self.data
    }

    fn set_data(&mut self, data: String) {
        self.data = data;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcretePrototypeB {
    data: String,
}

impl ConcretePrototypeB {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl Prototype for ConcretePrototypeB {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn show_data(&self) -> String {
        format!("ConcretePrototypeB Data: {}", self.data)
    }

    fn data(&self) -> &str {
        &self.data
    }

    fn set_data(&mut self, data: String) {
        self.data = data;
    }
}

/// Named prototypes; every `spawn` returns an independent copy.
#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Box<dyn Prototype>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prototype previously registered under `name`, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        prototype: Box<dyn Prototype>,
    ) -> Option<Box<dyn Prototype>> {
        self.prototypes.insert(name.into(), prototype)
    }

    pub fn spawn(&self, name: &str) -> Result<Box<dyn Prototype>> {
        self.prototypes
            .get(name)
            .map(|prototype| prototype.clone_box())
            .ok_or_else(|| PatternError::unknown("prototype", name))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
