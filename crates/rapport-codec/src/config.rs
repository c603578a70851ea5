//! Configuration for the codec

use serde::{Deserialize, Serialize};

use crate::grammar;

/// How the parser treats structurally incomplete keys
///
/// Two divergent historical behaviors unified behind one interface: strict
/// parsing for analytical paths that must fail loudly, lenient parsing for
/// interpretation paths that must never stall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    /// Fail on the first missing required group, in canonical order
    Strict,
    /// Substitute documented defaults for anything missing or malformed
    Lenient,
}

impl Default for ParseMode {
    fn default() -> Self {
        ParseMode::Strict
    }
}

/// Configuration for parsing and compression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Parse mode applied to incoming keys
    pub mode: ParseMode,

    /// Ratio literal embedded in produced SuperKey envelopes
    ///
    /// Independent of the actual history length, which only needs to reach
    /// the hard minimum of five keys.
    pub ratio: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Strict,
            ratio: grammar::DEFAULT_RATIO,
        }
    }
}

impl CodecConfig {
    /// Strict preset: fail loudly on malformed keys
    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
            ratio: grammar::DEFAULT_RATIO,
        }
    }

    /// Lenient preset: repair malformed keys with documented defaults
    pub fn lenient() -> Self {
        Self {
            mode: ParseMode::Lenient,
            ratio: grammar::DEFAULT_RATIO,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ratio == 0 {
            return Err("ratio must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_strict() {
        let config = CodecConfig::default();
        assert_eq!(config.mode, ParseMode::Strict);
        assert_eq!(config.ratio, grammar::DEFAULT_RATIO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lenient_preset() {
        let config = CodecConfig::lenient();
        assert_eq!(config.mode, ParseMode::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_ratio_is_invalid() {
        let mut config = CodecConfig::default();
        config.ratio = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CodecConfig::lenient();
        config.ratio = 11;

        let toml_str = config.to_toml().unwrap();
        let parsed = CodecConfig::from_toml(&toml_str).unwrap();

        assert_eq!(parsed.mode, ParseMode::Lenient);
        assert_eq!(parsed.ratio, 11);
    }
}
