//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use spendy_extractor::ExtractorConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extraction settings shared by both commands
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Chat-completions provider used by `remind`
    #[serde(default)]
    pub llm: LlmSettings,

    /// UDPipe service used by `expenses`
    #[serde(default)]
    pub annotator: AnnotatorSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Chat-completions provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// API base URL
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Completion token budget
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Annotator service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorSettings {
    /// UDPipe API base URL
    pub endpoint: String,

    /// UDPipe model name
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".spendy").join("config.toml"))
    }

    /// Resolve `explicit` or fall back to the default path.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::path(),
        }
    }

    /// Load configuration from `path`, or defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: spendy_llm::chat::DEFAULT_ENDPOINT.to_string(),
            model: spendy_llm::chat::DEFAULT_MODEL.to_string(),
            api_key_env: "TOGETHER_API_KEY".to_string(),
            max_tokens: spendy_llm::chat::DEFAULT_MAX_TOKENS,
            temperature: spendy_llm::chat::DEFAULT_TEMPERATURE,
            timeout_secs: spendy_llm::chat::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for AnnotatorSettings {
    fn default() -> Self {
        Self {
            endpoint: spendy_annotator::udpipe::DEFAULT_ENDPOINT.to_string(),
            model: spendy_annotator::udpipe::DEFAULT_MODEL.to_string(),
            timeout_secs: spendy_annotator::udpipe::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
