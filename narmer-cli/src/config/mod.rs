//! Configuration module

use std::path::Path;

use anyhow::{Context, Result};
use narmer_core::{Stage, UnmappedPolicy};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Transcription configuration
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Transcription-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// Default stage when `--stage` is not given
    pub default_stage: String,

    /// Default policy for characters without a production
    pub unmapped: String,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            default_stage: Stage::default().code().to_string(),
            unmapped: UnmappedPolicy::default().as_str().to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn stage(&self) -> Result<Stage> {
        Ok(self.transcription.default_stage.parse()?)
    }

    pub fn unmapped(&self) -> Result<UnmappedPolicy> {
        Ok(self.transcription.unmapped.parse()?)
    }

    pub fn format(&self) -> Result<OutputFormat> {
        self.output.default_format.parse()
    }
}
