//! Orthographic mapping shared by OHG, ENHG and NHG
//!
//! Little attention is paid to vowel length or tenseness: doubled vowels and
//! a length-marking H are consumed without separate output.

use super::{BACK_VOWELS, C_SOFTENERS, MODERN_VOWELS, S_CLUSTER_STOPS};
use crate::language::production::{CharSet, Context, Production};

const AFTER_BACK_VOWEL: &[Context] = &[Context::After(BACK_VOWELS)];
const BEFORE_C_SOFTENER: &[Context] = &[Context::Before(C_SOFTENERS)];
const AFTER_I: &[Context] = &[Context::After(CharSet::new("I"))];
const VOWEL_AFTER_QU: &[Context] = &[Context::Ahead {
    offset: 2,
    set: MODERN_VOWELS,
}];
const INITIAL_BEFORE_STOP: &[Context] = &[Context::WordInitial, Context::Before(S_CLUSTER_STOPS)];
const BEFORE_VOWEL: &[Context] = &[Context::Before(MODERN_VOWELS)];

pub(super) const C_RULES: &[Production] = &[
    Production::new("CHS", "ks", 2),
    Production::new("CHEN", "ç", 1),
    Production::guarded("CH", AFTER_BACK_VOWEL, "x", 1),
    Production::new("CH", "ç", 1),
    Production::new("CK", "k", 1),
    Production::guarded("C", BEFORE_C_SOFTENER, "ts", 0),
    Production::new("C", "k", 0),
];

pub(super) const G_TO_P_RULES: &[Production] = &[
    Production::guarded("G", AFTER_I, "ç", 0),
    Production::new("G", "g", 0),
    // post-vocalic H is taken by the vowel rules
    Production::new("H", "h", 0),
    Production::new("NG", "ŋ", 1),
    Production::new("NK", "ŋk", 1),
    Production::new("N", "n", 0),
    Production::new("PH", "f", 1),
    Production::new("P", "p", 0),
];

pub(super) const Q_S_RULES: &[Production] = &[
    Production::guarded("QU", VOWEL_AFTER_QU, "kv", 1),
    Production::new("Q", "k", 0),
    Production::new("SS", "s", 1),
    Production::new("SCH", "ʃ", 2),
    Production::guarded("S", INITIAL_BEFORE_STOP, "ʃ", 0),
    Production::guarded("S", BEFORE_VOWEL, "z", 0),
    Production::new("S", "s", 0),
];

pub(super) const TI_CLUSTER_RULES: &[Production] = &[
    Production::new("TION", "tsi", 1),
    Production::new("TIÄR", "tsi", 1),
    Production::new("TIAL", "tsi", 1),
    Production::new("TIELL", "tsi", 1),
];

pub(super) const DIPHTHONGS: &[Production] = &[
    Production::new("EI", "ai", 1),
    Production::new("AI", "ai", 1),
    Production::new("EY", "ai", 1),
    Production::new("AY", "ai", 1),
    Production::new("EU", "øy", 1),
    Production::new("ÄU", "oy", 1),
    Production::new("AU", "au", 1),
];

pub(super) const MONOPHTHONGS: &[Production] = &[
    Production::new("AA", "a", 1),
    Production::new("AH", "a", 1),
    Production::new("A", "a", 0),
    Production::new("EE", "e", 1),
    Production::new("EH", "e", 1),
    Production::new("E", "e", 0),
    Production::new("IEH", "i", 2),
    Production::new("IE", "i", 1),
    Production::new("IH", "i", 1),
    Production::new("I", "i", 0),
    Production::new("OO", "o", 1),
    Production::new("OH", "o", 1),
    Production::new("O", "o", 0),
    Production::new("UH", "u", 1),
    Production::new("U", "u", 0),
    Production::new("Y", "y", 0),
    Production::new("ÄH", "e", 1),
    Production::new("Ä", "e", 0),
    Production::new("ÖH", "ø", 1),
    Production::new("Ö", "ø", 0),
    Production::new("ÜH", "y", 1),
    Production::new("Ü", "y", 0),
];
