//! Configuration API for transcription

use crate::api::Stage;
use crate::domain::UnmappedPolicy;
use crate::error::{Error, Result};

/// Transcription configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) stage: Stage,
    pub(crate) unmapped: UnmappedPolicy,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn unmapped(&self) -> UnmappedPolicy {
        self.unmapped
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    stage: Option<String>,
    unmapped: Option<UnmappedPolicy>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stage by code
    pub fn stage(mut self, code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(Error::InvalidStage(code));
        }
        self.stage = Some(code);
        Ok(self)
    }

    /// Set how characters without a production are handled
    pub fn unmapped(mut self, policy: UnmappedPolicy) -> Self {
        self.unmapped = Some(policy);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.stage {
            config.stage = code.parse()?;
        }

        if let Some(policy) = self.unmapped {
            config.unmapped = policy;
        }

        Ok(config)
    }
}
