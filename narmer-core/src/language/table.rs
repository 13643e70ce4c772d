//! Compiled rule table with trigger index
//!
//! Productions are bucketed by their first pattern character. Buckets keep
//! authored order, so selecting the first match in a bucket gives the same
//! production as a linear scan over the whole table.

use std::collections::HashMap;

use crate::api::Stage;
use crate::domain::normalizer::{NormalizedWord, Normalizer};
use crate::error::{Error, Result};
use crate::language::production::{CharSet, Production};
use crate::language::tables;

/// A production that can never fire because an earlier one always wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadowed {
    /// Index of the unreachable production
    pub index: usize,
    /// Index of the earlier production that wins instead
    pub by: usize,
}

/// Ordered production table for one stage or custom rule set
#[derive(Debug, Clone)]
pub struct RuleTable {
    code: String,
    name: String,
    normalizer: Normalizer,
    productions: Vec<Production>,
    by_trigger: HashMap<char, Vec<usize>>,
    stage: Option<Stage>,
}

impl RuleTable {
    /// Create a table from ordered productions, rejecting malformed ones
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        normalizer: Normalizer,
        productions: Vec<Production>,
    ) -> Result<Self> {
        let code = code.into();
        for (index, production) in productions.iter().enumerate() {
            production.check().map_err(|e| {
                Error::Configuration(format!("{code}: production #{index}: {e}"))
            })?;
        }
        Ok(Self::compile(code, name.into(), normalizer, productions))
    }

    /// Built-in table for a stage, compiled on every call
    ///
    /// Prefer [`RuleTable::for_stage`], which shares one compiled copy.
    pub fn builtin(stage: Stage) -> Self {
        let productions = tables::sections(stage)
            .iter()
            .flat_map(|section| section.iter().cloned())
            .collect();
        Self::compile(
            stage.code().to_string(),
            stage.name().to_string(),
            Normalizer::for_stage(stage),
            productions,
        )
        .based_on(stage)
    }

    /// Record the built-in stage this table is or extends
    pub(crate) fn based_on(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    fn compile(
        code: String,
        name: String,
        normalizer: Normalizer,
        productions: Vec<Production>,
    ) -> Self {
        let mut by_trigger: HashMap<char, Vec<usize>> = HashMap::new();
        for (index, production) in productions.iter().enumerate() {
            if let Some(trigger) = production.trigger() {
                by_trigger.entry(trigger).or_default().push(index);
            }
        }

        log::debug!(
            "compiled rule table {code} with {} productions over {} triggers",
            productions.len(),
            by_trigger.len()
        );

        Self {
            code,
            name,
            normalizer,
            productions,
            by_trigger,
            stage: None,
        }
    }

    /// First production matching at `pos`, in authored order
    #[inline]
    pub fn select(&self, word: &[char], pos: usize) -> Option<&Production> {
        let candidates = self.by_trigger.get(word.get(pos)?)?;
        candidates
            .iter()
            .map(|&index| &self.productions[index])
            .find(|production| production.matches(word, pos))
    }

    /// Run this table's normalization pre-step
    pub fn normalize(&self, word: &str) -> NormalizedWord {
        self.normalizer.normalize(word)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Built-in stage this table is or extends
    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Productions hidden behind an earlier production
    ///
    /// An earlier production shadows a later one when its pattern is a prefix
    /// of the later pattern and every context it requires is also required by
    /// the later one: whenever the later production matches, so does the
    /// earlier.
    pub fn shadowed(&self) -> Vec<Shadowed> {
        let mut found = Vec::new();
        for indices in self.by_trigger.values() {
            for (k, &later) in indices.iter().enumerate() {
                let candidate = &self.productions[later];
                let winner = indices[..k].iter().copied().find(|&earlier| {
                    let earlier_production = &self.productions[earlier];
                    candidate
                        .pattern
                        .starts_with(&*earlier_production.pattern)
                        && earlier_production
                            .when
                            .iter()
                            .all(|ctx| candidate.when.contains(ctx))
                });
                if let Some(by) = winner {
                    found.push(Shadowed { index: later, by });
                }
            }
        }
        found.sort_by_key(|s| s.index);
        found
    }

    /// Re-check every production and warn about shadowed ones
    ///
    /// Malformed productions are errors. Shadowed productions are only
    /// logged and returned, since an override table shadows its base on
    /// purpose.
    pub fn validate(&self) -> Result<Vec<Shadowed>> {
        for (index, production) in self.productions.iter().enumerate() {
            production.check().map_err(|e| {
                Error::Configuration(format!("{}: production #{index}: {e}", self.code))
            })?;
        }

        let shadowed = self.shadowed();
        for Shadowed { index, by } in &shadowed {
            log::warn!(
                "{}: production #{index} ({}) can never fire, #{by} ({}) always wins",
                self.code,
                self.productions[*index].pattern,
                self.productions[*by].pattern
            );
        }
        Ok(shadowed)
    }

    /// Letters of `alphabet` lacking an unconditional single-letter fallback
    pub fn missing_fallbacks(&self, alphabet: &CharSet) -> Vec<char> {
        alphabet
            .chars()
            .filter(|&letter| {
                !self.by_trigger.get(&letter).is_some_and(|indices| {
                    indices.iter().any(|&index| {
                        let production = &self.productions[index];
                        production.is_unconditional() && production.pattern.chars().count() == 1
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::production::Context;

    const AFTER_A: &[Context] = &[Context::After(CharSet::new("A"))];

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_select_uses_authored_order() {
        let table = RuleTable::new(
            "test",
            "Test",
            Normalizer::new(),
            vec![
                Production::new("S", "s", 0),
                Production::new("SCH", "ʃ", 2),
            ],
        )
        .unwrap();

        // The earlier single-letter rule wins even though SCH would match more
        let word = chars("SCHON");
        assert_eq!(table.select(&word, 0).unwrap().output, "s");
        assert!(table.select(&word, 3).is_none());
        assert!(table.select(&word, 99).is_none());
    }

    #[test]
    fn test_new_rejects_malformed_production() {
        let result = RuleTable::new(
            "broken",
            "Broken",
            Normalizer::new(),
            vec![Production::new("CH", "x", 5)],
        );
        match result {
            Err(Error::Configuration(msg)) => {
                assert!(msg.contains("broken"));
                assert!(msg.contains("#0"));
            }
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_shadowed_detection() {
        let table = RuleTable::new(
            "test",
            "Test",
            Normalizer::new(),
            vec![
                Production::guarded("C", AFTER_A, "x", 0),
                Production::new("C", "k", 0),
                Production::new("CH", "ç", 1),
                Production::guarded("CH", AFTER_A, "x", 1),
            ],
        )
        .unwrap();

        assert_eq!(
            table.shadowed(),
            vec![Shadowed { index: 2, by: 1 }, Shadowed { index: 3, by: 0 }]
        );
    }

    #[test]
    fn test_builtin_tables_have_no_shadowed_productions() {
        for stage in Stage::ALL {
            let table = RuleTable::builtin(stage);
            assert_eq!(table.validate(), Ok(Vec::new()), "{stage}");
        }
    }

    #[test]
    fn test_builtin_tables_are_complete() {
        for stage in Stage::ALL {
            let table = RuleTable::builtin(stage);
            assert_eq!(
                table.missing_fallbacks(&tables::alphabet(stage)),
                Vec::<char>::new(),
                "{stage} lacks fallbacks"
            );
        }
    }

    #[test]
    fn test_missing_fallbacks_reports_gaps() {
        let table = RuleTable::new(
            "test",
            "Test",
            Normalizer::new(),
            vec![
                Production::new("A", "a", 0),
                Production::guarded("B", AFTER_A, "b", 0),
                Production::new("CH", "x", 1),
            ],
        )
        .unwrap();
        assert_eq!(
            table.missing_fallbacks(&CharSet::new("ABC")),
            vec!['B', 'C']
        );
    }

    #[test]
    fn test_builtin_metadata() {
        let table = RuleTable::builtin(Stage::Mhg);
        assert_eq!(table.code(), "mhg");
        assert_eq!(table.name(), "Middle High German");
        assert!(!table.productions().is_empty());
        assert_eq!(table.normalize("hûs").as_str(), "HŪS");
    }
}
