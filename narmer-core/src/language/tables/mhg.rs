//! Middle High German
//!
//! Distinguishes short and long vowels (macron or doubled letter), always
//! realizes CH as a velar fricative and keeps the older affricate readings
//! of NG and PH. The TI+vowel affrication family is absent.

use super::{C_SOFTENERS, MHG_VOWELS, S_CLUSTER_STOPS};
use crate::language::production::{Context, Production};

const BEFORE_C_SOFTENER: &[Context] = &[Context::Before(C_SOFTENERS)];
// Neighbours are read from the normalized input, not from emitted output
const BETWEEN_VOWELS: &[Context] = &[Context::After(MHG_VOWELS), Context::Before(MHG_VOWELS)];
const VOWEL_AFTER_QU: &[Context] = &[Context::Ahead {
    offset: 2,
    set: MHG_VOWELS,
}];
const INITIAL_BEFORE_STOP: &[Context] = &[Context::WordInitial, Context::Before(S_CLUSTER_STOPS)];
const BEFORE_VOWEL: &[Context] = &[Context::Before(MHG_VOWELS)];

pub(super) const C_RULES: &[Production] = &[
    Production::new("CH", "x", 1),
    Production::new("CK", "k", 1),
    Production::guarded("C", BEFORE_C_SOFTENER, "ts", 0),
    Production::new("C", "k", 0),
];

pub(super) const G_TO_P_RULES: &[Production] = &[
    Production::new("G", "g", 0),
    Production::guarded("H", BETWEEN_VOWELS, "h", 0),
    Production::new("H", "x", 0),
    Production::new("NG", "ŋg", 1),
    Production::new("NK", "ŋk", 1),
    Production::new("N", "n", 0),
    Production::new("PH", "pf", 1),
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

pub(super) const DIPHTHONGS: &[Production] = &[
    Production::new("EI", "ei", 1),
    Production::new("EY", "ei", 1),
    Production::new("AI", "ai", 1),
    Production::new("AY", "ai", 1),
    Production::new("IE", "ie", 1),
    Production::new("AU", "au", 1),
    Production::new("ÜE", "yu", 1),
    Production::new("ÖU", "øy", 1),
    Production::new("EU", "øy", 1),
    Production::new("OI", "øy", 1),
];

pub(super) const MONOPHTHONGS: &[Production] = &[
    Production::new("Ā", "aː", 0),
    Production::new("AA", "aː", 1),
    Production::new("A", "a", 0),
    Production::new("Ē", "eː", 0),
    Production::new("EE", "eː", 1),
    Production::new("E", "e", 0),
    Production::new("Ī", "iː", 0),
    Production::new("II", "iː", 1),
    Production::new("I", "i", 0),
    Production::new("Ō", "oː", 0),
    Production::new("OO", "oː", 1),
    Production::new("O", "o", 0),
    Production::new("Ū", "uː", 0),
    Production::new("UU", "uː", 1),
    Production::new("U", "u", 0),
    Production::new("Y", "y", 0),
    Production::new("Æ", "ɛː", 0),
    Production::new("Ä", "ɛ", 0),
    Production::new("Œ", "øː", 0),
    Production::new("Ö", "ø", 0),
    Production::new("Ü", "y", 0),
    Production::new("Ë", "ɛ", 0),
];
