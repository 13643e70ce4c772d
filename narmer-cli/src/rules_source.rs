//! Rule table source management for CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use narmer_core::{RuleTable, Stage, Transcriber, UnmappedPolicy};

/// Source of transcription rules
#[derive(Debug, Clone)]
pub enum RulesSource {
    /// Built-in table for a stage
    BuiltIn(Stage),
    /// External TOML rule table
    External(PathBuf),
}

impl RulesSource {
    /// Select the external table when one is given, else the stage's table
    pub fn new(stage: Stage, rules: Option<PathBuf>) -> Self {
        match rules {
            Some(path) => RulesSource::External(path),
            None => RulesSource::BuiltIn(stage),
        }
    }

    /// Get the display name for the rules source
    pub fn display_name(&self) -> String {
        match self {
            RulesSource::BuiltIn(stage) => format!("Built-in: {} ({})", stage.name(), stage),
            RulesSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Build a transcriber for this source
    pub fn transcriber(&self, unmapped: UnmappedPolicy) -> Result<Transcriber> {
        let transcriber = match self {
            RulesSource::BuiltIn(stage) => Transcriber::with_stage(stage.code())?,
            RulesSource::External(path) => {
                let table = RuleTable::from_file(path).with_context(|| {
                    format!("Failed to load rule table: {}", path.display())
                })?;
                log::info!("Loaded rule table {} ({})", table.code(), table.name());
                Transcriber::from_table(table)
            }
        };
        Ok(transcriber.unmapped(unmapped))
    }
}
