//! Main transcriber implementation

use std::borrow::Cow;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::api::{Config, Stage};
use crate::domain::{Scanner, UnmappedPolicy};
use crate::error::Result;
use crate::language::RuleTable;

/// Word transcriber bound to one rule table and policy
#[derive(Debug, Clone)]
pub struct Transcriber {
    table: Cow<'static, RuleTable>,
    unmapped: UnmappedPolicy,
}

impl Transcriber {
    /// New High German with the default drop policy
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Transcriber for the configured stage and policy
    pub fn with_config(config: Config) -> Self {
        Self {
            table: Cow::Borrowed(RuleTable::for_stage(config.stage)),
            unmapped: config.unmapped,
        }
    }

    /// Transcriber for a stage code such as `"mhg"`
    pub fn with_stage(code: impl Into<String>) -> Result<Self> {
        let config = Config::builder().stage(code)?.build()?;
        Ok(Self::with_config(config))
    }

    /// Transcriber over a custom rule table
    pub fn from_table(table: RuleTable) -> Self {
        Self {
            table: Cow::Owned(table),
            unmapped: UnmappedPolicy::default(),
        }
    }

    pub fn unmapped(mut self, policy: UnmappedPolicy) -> Self {
        self.unmapped = policy;
        self
    }

    /// Transcribe a single word
    pub fn transcribe(&self, word: &str) -> Result<String> {
        let normalized = self.table.normalize(word);
        Scanner::new(&self.table)
            .with_policy(self.unmapped)
            .scan(&normalized)
    }

    /// Transcribe a batch of words, keeping input order
    pub fn transcribe_all<S>(&self, words: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            words
                .par_iter()
                .map(|word| self.transcribe(word.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            words
                .iter()
                .map(|word| self.transcribe(word.as_ref()))
                .collect()
        }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Built-in stage, if this transcriber uses one
    pub fn stage(&self) -> Option<Stage> {
        match &self.table {
            Cow::Borrowed(_) => self.table.code().parse().ok(),
            Cow::Owned(_) => None,
        }
    }
}

impl Default for Transcriber {
    fn default() -> Self {
        Self::new()
    }
}
