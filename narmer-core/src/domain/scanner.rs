//! Left-to-right transduction over a normalized word

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::normalizer::NormalizedWord;
use crate::error::{Error, Result};
use crate::language::RuleTable;

/// What to do with a character no production covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmappedPolicy {
    /// Consume the character and emit nothing
    #[default]
    Drop,
    /// Emit the character lowercased
    PassThrough,
    /// Fail with [`Error::UnmappedCharacter`]
    Reject,
}

impl UnmappedPolicy {
    pub const ALL: [UnmappedPolicy; 3] = [
        UnmappedPolicy::Drop,
        UnmappedPolicy::PassThrough,
        UnmappedPolicy::Reject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnmappedPolicy::Drop => "drop",
            UnmappedPolicy::PassThrough => "pass-through",
            UnmappedPolicy::Reject => "reject",
        }
    }
}

impl FromStr for UnmappedPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(UnmappedPolicy::Drop),
            "pass-through" | "passthrough" | "pass_through" => Ok(UnmappedPolicy::PassThrough),
            "reject" => Ok(UnmappedPolicy::Reject),
            _ => Err(Error::Configuration(format!(
                "unknown unmapped policy '{s}' (expected drop, pass-through or reject)"
            ))),
        }
    }
}

/// Scan engine bound to one rule table
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t> {
    table: &'t RuleTable,
    policy: UnmappedPolicy,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self {
            table,
            policy: UnmappedPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnmappedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Emit the output of the first matching production at each position
    ///
    /// Runs exactly `word.len()` iterations. A production's `consumes`
    /// characters are skipped without output.
    pub fn scan(&self, word: &NormalizedWord) -> Result<String> {
        let chars = word.chars();
        let mut ipa = String::with_capacity(chars.len() * 2);
        let mut skip = 0usize;

        for (pos, &ch) in chars.iter().enumerate() {
            if skip > 0 {
                skip -= 1;
                continue;
            }

            match self.table.select(chars, pos) {
                Some(production) => {
                    ipa.push_str(&production.output);
                    skip = production.consumes;
                }
                None => match self.policy {
                    UnmappedPolicy::Drop => {
                        log::trace!("{}: dropping {ch:?} at {pos}", self.table.code());
                    }
                    UnmappedPolicy::PassThrough => ipa.extend(ch.to_lowercase()),
                    UnmappedPolicy::Reject => {
                        return Err(Error::UnmappedCharacter { ch, position: pos });
                    }
                },
            }
        }

        Ok(ipa)
    }
}

/// Transduce with the default drop policy
pub fn transduce(word: &NormalizedWord, table: &RuleTable) -> String {
    // Drop never fails
    Scanner::new(table).scan(word).unwrap_or_default()
}
