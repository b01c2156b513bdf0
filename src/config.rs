//! Phone profiles loaded from TOML.
//!
//! ```toml
//! [[phone]]
//! name = "Field"
//! screen = "Sunlight-readable Screen"
//! battery = "Hot-swappable Battery"
//! camera = "Thermal Camera"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhoneProfile {
    pub name: String,
    pub screen: String,
    pub battery: String,
    pub camera: String,
}

impl PhoneProfile {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PatternError::Config("phone profile with empty name".to_string()));
        }
        let parts = [
            ("screen", &self.screen),
            ("battery", &self.battery),
            ("camera", &self.camera),
        ];
        for (part, value) in parts {
            if value.trim().is_empty() {
                return Err(PatternError::Config(format!(
                    "phone profile '{}' has an empty {part}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PhoneCatalog {
    #[serde(default, rename = "phone")]
    pub phones: Vec<PhoneProfile>,
}

impl PhoneCatalog {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: PhoneCatalog = toml::from_str(content)?;
        for profile in &catalog.phones {
            profile.validate()?;
        }
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn profile(&self, name: &str) -> Result<&PhoneProfile> {
        self.phones
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PatternError::unknown("phone profile", name))
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}
