//! Rule table loader
//!
//! Built-in tables are compiled once per process; custom tables come from
//! TOML files or strings.

use std::path::Path;
use std::sync::OnceLock;

use crate::api::Stage;
use crate::domain::normalizer::Normalizer;
use crate::error::{Error, Result};
use crate::language::config::RuleTableConfig;
use crate::language::table::RuleTable;

/// Built-in tables indexed by stage
static BUILTIN: OnceLock<[RuleTable; 4]> = OnceLock::new();

impl RuleTable {
    /// Shared built-in table for a stage
    pub fn for_stage(stage: Stage) -> &'static RuleTable {
        let tables = BUILTIN.get_or_init(|| Stage::ALL.map(RuleTable::builtin));
        &tables[stage.index()]
    }

    /// Load a rule table from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read rule table {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parse a rule table from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: RuleTableConfig = toml::from_str(toml_str)
            .map_err(|e| Error::Configuration(format!("Failed to parse rule table: {e}")))?;
        Self::from_config(config)
    }

    /// Build a rule table from parsed configuration
    ///
    /// Productions from the configuration come first; those of the extended
    /// built-in table, if any, follow.
    pub fn from_config(config: RuleTableConfig) -> Result<Self> {
        config.validate()?;
        let RuleTableConfig {
            metadata,
            normalization,
            mut productions,
        } = config;

        let mut normalizer = match metadata.extends {
            Some(stage) => Normalizer::for_stage(stage),
            None => Normalizer::new(),
        };
        for substitution in normalization.substitutions {
            normalizer = normalizer.with_substitution(substitution.from, substitution.to);
        }

        if let Some(stage) = metadata.extends {
            productions.extend(Self::for_stage(stage).productions().iter().cloned());
        }

        let mut table = Self::new(metadata.code, metadata.name, normalizer, productions)?;
        if let Some(stage) = metadata.extends {
            table = table.based_on(stage);
        }
        table.validate()?;
        Ok(table)
    }
}
