//! Pattern → phoneme productions
//!
//! A production matches a literal uppercase pattern at the scan position,
//! optionally guarded by contexts on the neighbouring characters, and emits
//! a fixed IPA string. `consumes` counts the characters swallowed after the
//! trigger; pattern characters beyond that are lookahead only.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Immutable character class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharSet(Cow<'static, str>);

impl CharSet {
    pub const fn new(chars: &'static str) -> Self {
        Self(Cow::Borrowed(chars))
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(ch)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CharSet {
    fn from(chars: String) -> Self {
        Self(Cow::Owned(chars))
    }
}

/// Condition on the characters around the scan position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    /// Previous character exists and is in the set
    After(CharSet),
    /// Next character exists and is in the set
    Before(CharSet),
    /// Character at `position + offset` exists and is in the set
    Ahead { offset: usize, set: CharSet },
    /// Scan position is the start of the word
    WordInitial,
}

impl Context {
    #[inline]
    fn holds(&self, word: &[char], pos: usize) -> bool {
        match self {
            Context::After(set) => pos > 0 && set.contains(word[pos - 1]),
            Context::Before(set) => word.get(pos + 1).is_some_and(|&c| set.contains(c)),
            Context::Ahead { offset, set } => {
                word.get(pos + offset).is_some_and(|&c| set.contains(c))
            }
            Context::WordInitial => pos == 0,
        }
    }
}

const NO_CONTEXT: &[Context] = &[];

/// One entry of a rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub pattern: Cow<'static, str>,
    pub output: Cow<'static, str>,
    #[serde(default)]
    pub consumes: usize,
    #[serde(default)]
    pub when: Cow<'static, [Context]>,
}

impl Production {
    /// Unconditional production
    pub const fn new(pattern: &'static str, output: &'static str, consumes: usize) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            output: Cow::Borrowed(output),
            consumes,
            when: Cow::Borrowed(NO_CONTEXT),
        }
    }

    /// Production guarded by contexts
    pub const fn guarded(
        pattern: &'static str,
        when: &'static [Context],
        output: &'static str,
        consumes: usize,
    ) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            output: Cow::Borrowed(output),
            consumes,
            when: Cow::Borrowed(when),
        }
    }

    /// First pattern character
    pub fn trigger(&self) -> Option<char> {
        self.pattern.chars().next()
    }

    pub fn is_unconditional(&self) -> bool {
        self.when.is_empty()
    }

    /// Check pattern and contexts at `pos`
    #[inline]
    pub fn matches(&self, word: &[char], pos: usize) -> bool {
        let Some(rest) = word.get(pos..) else {
            return false;
        };
        let mut rest = rest.iter();
        self.pattern
            .chars()
            .all(|expected| rest.next() == Some(&expected))
            && self.when.iter().all(|ctx| ctx.holds(word, pos))
    }

    /// Structural problems that make the production unusable
    pub(crate) fn check(&self) -> Result<(), String> {
        let len = self.pattern.chars().count();
        if len == 0 {
            return Err("empty pattern".to_string());
        }
        if self.consumes >= len {
            return Err(format!(
                "pattern '{}' has {} characters but consumes {} beyond the trigger",
                self.pattern, len, self.consumes
            ));
        }
        if self
            .when
            .iter()
            .any(|ctx| matches!(ctx, Context::Ahead { offset: 0, .. }))
        {
            return Err(format!(
                "pattern '{}' uses a lookahead at offset 0",
                self.pattern
            ));
        }
        Ok(())
    }
}
