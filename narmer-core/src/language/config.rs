//! TOML schema for custom rule tables

use serde::{Deserialize, Serialize};

use crate::api::Stage;
use crate::error::{Error, Result};
use crate::language::production::Production;

/// Root rule table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTableConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub normalization: Normalization,
    #[serde(default)]
    pub productions: Vec<Production>,
}

/// Rule table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    /// Built-in table appended after this table's own productions
    #[serde(default)]
    pub extends: Option<Stage>,
}

/// Extra normalization substitutions, applied after the built-in ones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Normalization {
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Substitution {
    pub from: char,
    pub to: String,
}

impl RuleTableConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Configuration("metadata.code must not be empty".into()));
        }

        if self.productions.is_empty() && self.metadata.extends.is_none() {
            return Err(Error::Configuration(format!(
                "{}: no productions defined and no table to extend",
                self.metadata.code
            )));
        }

        Ok(())
    }
}
