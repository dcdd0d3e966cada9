//! Configuration for the Luhn generator

use crate::generator::{check_length, window};
use crate::{Error, Result, DEFAULT_LENGTH};
use serde::{Deserialize, Serialize};

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Lower bound for the leading digits
    pub lower_bound: i64,

    /// Upper bound for the leading digits
    pub upper_bound: i64,

    /// Length of generated numbers (digits, check digit included)
    pub length: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lower_bound: 0,
            upper_bound: 9,
            length: DEFAULT_LENGTH,
        }
    }
}

impl GeneratorConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded generator config");
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = GeneratorConfig::default();

        if let Ok(value) = std::env::var("LUHN_LOWER_BOUND") {
            config.lower_bound = parse_var("LUHN_LOWER_BOUND", &value)?;
        }

        if let Ok(value) = std::env::var("LUHN_UPPER_BOUND") {
            config.upper_bound = parse_var("LUHN_UPPER_BOUND", &value)?;
        }

        if let Ok(value) = std::env::var("LUHN_LENGTH") {
            config.length = parse_var("LUHN_LENGTH", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check length and bounds
    pub fn validate(&self) -> Result<()> {
        check_length(self.length)?;
        if self.length > 1 {
            window(self.lower_bound, self.upper_bound, self.length)?;
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {}={:?}: {}", name, value, e)))
}
