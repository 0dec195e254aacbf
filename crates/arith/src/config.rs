//! Evaluator configuration

use crate::error::Result;
use crate::factorial::OverflowPolicy;
use proven_value::DataType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for arithmetic evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithConfig {
    /// What happens when a product leaves the integer range
    pub overflow: OverflowPolicy,

    /// Integer width used when a caller does not supply a typed value
    pub width: DataType,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Wrapping,
            width: DataType::I32,
        }
    }
}

impl ArithConfig {
    /// Create a new config with the given overflow policy
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self {
            overflow,
            ..Default::default()
        }
    }

    /// Set overflow policy
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set default integer width
    pub fn with_width(mut self, width: DataType) -> Self {
        self.width = width;
        self
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!("Loaded arithmetic config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
