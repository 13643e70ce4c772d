//! Input canonicalization ahead of a scan

use std::borrow::Cow;
use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::api::Stage;
use crate::language::tables::MHG_CIRCUMFLEX_TO_MACRON;

/// Uppercased, NFKC-composed word with substitutions applied
///
/// Keeps the normalized text alongside its character view so that productions
/// can be matched by position without re-decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedWord {
    text: String,
    chars: Vec<char>,
}

impl NormalizedWord {
    fn new(text: String) -> Self {
        let chars = text.chars().collect();
        Self { text, chars }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered single-character substitutions applied after case mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    substitutions: Vec<(char, Cow<'static, str>)>,
}

impl Normalizer {
    /// Normalizer shared by every stage: sharp s becomes SS
    pub fn new() -> Self {
        Self {
            substitutions: vec![('ß', Cow::Borrowed("SS")), ('ẞ', Cow::Borrowed("SS"))],
        }
    }

    /// Normalizer used by the built-in table for `stage`
    pub fn for_stage(stage: Stage) -> Self {
        let mut normalizer = Self::new();
        if stage == Stage::Mhg {
            for (from, to) in MHG_CIRCUMFLEX_TO_MACRON {
                normalizer = normalizer.with_substitution(from, to);
            }
        }
        normalizer
    }

    /// Add a substitution; a later entry for the same character replaces it
    pub fn with_substitution(mut self, from: char, to: impl Into<Cow<'static, str>>) -> Self {
        let to = to.into();
        match self.substitutions.iter_mut().find(|(c, _)| *c == from) {
            Some(existing) => existing.1 = to,
            None => self.substitutions.push((from, to)),
        }
        self
    }

    pub fn substitutions(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.substitutions.iter().map(|(c, s)| (*c, s.as_ref()))
    }

    /// Uppercase, compose and substitute in a single pass
    pub fn normalize(&self, word: &str) -> NormalizedWord {
        let upper = word.to_uppercase();
        let mut text = String::with_capacity(upper.len());
        for ch in upper.nfkc() {
            match self.substitutions.iter().find(|(c, _)| *c == ch) {
                Some((_, to)) => text.push_str(to),
                None => text.push(ch),
            }
        }
        NormalizedWord::new(text)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize `word` the way the built-in table for `stage` expects
pub fn normalize(word: &str, stage: Stage) -> NormalizedWord {
    Normalizer::for_stage(stage).normalize(word)
}
