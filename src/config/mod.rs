//! Building configuration model and its JSON/YAML loaders.
//!
//! A configuration document maps parameter names to either a bare value or a
//! `{ "value": .., "random": { "enabled", "strength", "range" } }` record.
//! Sizes are `[width, height]` pairs.

mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use types::{BuildingConfig, Param, RandomSetting};

impl BuildingConfig {
    /// Parse a JSON document. Blank input yields the all-zero default.
    pub fn from_json_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a YAML document. Blank input yields the all-zero default.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Load from disk; `.yaml` and `.yml` files are read as YAML, anything
    /// else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
            });
        if yaml {
            Self::from_yaml_str(&source)
        } else {
            Self::from_json_str(&source)
        }
    }
}
