//! Built-in rule tables
//!
//! Each stage is an ordered list of sections. Sections shared between stages
//! are defined here; stage-specific ones live in `modern` (OHG, ENHG and NHG
//! use the same orthographic mapping) and `mhg`.

mod mhg;
mod modern;

use crate::api::Stage;
use crate::language::production::{CharSet, Production};

/// Consonants that map to their lowercase form unconditionally
pub const PASS_THROUGH: CharSet = CharSet::new("BFJKLMR");
/// Vowels that make a following CH velar
pub const BACK_VOWELS: CharSet = CharSet::new("AOU");
/// Vowels that make a preceding C an affricate
pub const C_SOFTENERS: CharSet = CharSet::new("ÄEI");
/// Stops after a word-initial S that make it postalveolar
pub const S_CLUSTER_STOPS: CharSet = CharSet::new("PT");

pub const MODERN_VOWELS: CharSet = CharSet::new("AEIOUYÄÖÜ");
pub const MHG_VOWELS: CharSet = CharSet::new("AEIOUYÄÖÜÆŒĀĒĪŌŪË");

pub const MODERN_ALPHABET: CharSet = CharSet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÜ");
pub const MHG_ALPHABET: CharSet = CharSet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÜĀĒĪŌŪÆŒË");

/// Circumflexed long vowels rewritten to macrons before an MHG scan
pub const MHG_CIRCUMFLEX_TO_MACRON: [(char, &str); 5] = [
    ('Â', "Ā"),
    ('Ê', "Ē"),
    ('Î', "Ī"),
    ('Ô', "Ō"),
    ('Û', "Ū"),
];

const PASS_THROUGH_RULES: &[Production] = &[
    Production::new("B", "b", 0),
    Production::new("F", "f", 0),
    Production::new("J", "j", 0),
    Production::new("K", "k", 0),
    Production::new("L", "l", 0),
    Production::new("M", "m", 0),
    Production::new("R", "r", 0),
];

const D_RULES: &[Production] = &[
    Production::new("DSCH", "dʒ", 3),
    Production::new("DT", "t", 1),
    Production::new("D", "d", 0),
];

const T_AFFRICATES: &[Production] = &[
    Production::new("TSCH", "tʃ", 3),
    Production::new("TZSCH", "tʃ", 4),
];

const T_PLAIN: &[Production] = &[
    Production::new("TZ", "ts", 1),
    Production::new("TH", "t", 1),
    Production::new("T", "t", 0),
];

const V_TO_Z_RULES: &[Production] = &[
    Production::new("V", "f", 0),
    Production::new("W", "v", 0),
    Production::new("X", "ks", 0),
    Production::new("ZSCH", "tʃ", 3),
    Production::new("Z", "ts", 0),
];

static MODERN_SECTIONS: &[&[Production]] = &[
    PASS_THROUGH_RULES,
    modern::C_RULES,
    D_RULES,
    modern::G_TO_P_RULES,
    modern::Q_S_RULES,
    T_AFFRICATES,
    modern::TI_CLUSTER_RULES,
    T_PLAIN,
    V_TO_Z_RULES,
    modern::DIPHTHONGS,
    modern::MONOPHTHONGS,
];

static MHG_SECTIONS: &[&[Production]] = &[
    PASS_THROUGH_RULES,
    mhg::C_RULES,
    D_RULES,
    mhg::G_TO_P_RULES,
    mhg::Q_S_RULES,
    T_AFFRICATES,
    T_PLAIN,
    V_TO_Z_RULES,
    mhg::DIPHTHONGS,
    mhg::MONOPHTHONGS,
];

/// Ordered sections making up a stage's table
pub(crate) fn sections(stage: Stage) -> &'static [&'static [Production]] {
    match stage {
        Stage::Mhg => MHG_SECTIONS,
        Stage::Ohg | Stage::Enhg | Stage::Nhg => MODERN_SECTIONS,
    }
}

/// Letters every production table for the stage must cover
pub fn alphabet(stage: Stage) -> CharSet {
    match stage {
        Stage::Mhg => MHG_ALPHABET,
        Stage::Ohg | Stage::Enhg | Stage::Nhg => MODERN_ALPHABET,
    }
}

/// Vowel class used by the stage's contexts
pub fn vowels(stage: Stage) -> CharSet {
    match stage {
        Stage::Mhg => MHG_VOWELS,
        Stage::Ohg | Stage::Enhg | Stage::Nhg => MODERN_VOWELS,
    }
}
