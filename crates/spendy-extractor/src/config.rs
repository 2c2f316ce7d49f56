//! Configuration for the extractors

use crate::vocabulary::ACQUISITION_VERBS;
use serde::{Deserialize, Serialize};

/// Shape the reminder prompt asks the LLM to answer in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFormat {
    /// Four double-quoted values: item, price, quantity, due
    #[default]
    Quoted,
    /// A JSON object with the keys item, price, quantity and due
    Json,
}

/// Configuration for the expense and reminder extractors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum transcript length (bytes)
    pub max_transcript_length: usize,

    /// Verb lemmas whose direct objects are products
    pub acquisition_verbs: Vec<String>,

    /// Process sentences on the rayon thread pool
    pub parallel_sentences: bool,

    /// Answer format requested from the LLM for reminders
    pub reminder_format: FieldFormat,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_transcript_length == 0 {
            return Err("max_transcript_length must be greater than 0".to_string());
        }
        if self.acquisition_verbs.is_empty() {
            return Err("acquisition_verbs must not be empty".to_string());
        }
        if let Some(verb) = self.acquisition_verbs.iter().find(|v| v.trim().is_empty()) {
            return Err(format!("acquisition_verbs contains a blank entry: '{}'", verb));
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_transcript_length: 10_000,
            acquisition_verbs: ACQUISITION_VERBS.iter().map(|v| v.to_string()).collect(),
            parallel_sentences: false,
            reminder_format: FieldFormat::Quoted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.acquisition_verbs.len(), 6);
        assert_eq!(config.reminder_format, FieldFormat::Quoted);
    }

    #[test]
    fn test_invalid_max_transcript_length() {
        let mut config = ExtractorConfig::default();
        config.max_transcript_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_verbs() {
        let mut config = ExtractorConfig::default();
        config.acquisition_verbs.clear();
        assert!(config.validate().is_err());

        config.acquisition_verbs = vec!["buy".to_string(), "  ".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ExtractorConfig::default();
        config.reminder_format = FieldFormat::Json;
        config.parallel_sentences = true;

        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("reminder_format = \"json\""));

        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml("acquisition_verbs = [\"order\"]").unwrap();
        assert_eq!(parsed.acquisition_verbs, vec!["order".to_string()]);
        assert_eq!(parsed.max_transcript_length, 10_000);
        assert!(!parsed.parallel_sentences);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(ExtractorConfig::from_toml("reminder_format = \"xml\"").is_err());
    }
}
