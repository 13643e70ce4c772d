//! Normalization and scanning

pub mod normalizer;
pub mod scanner;

pub use normalizer::{normalize, NormalizedWord, Normalizer};
pub use scanner::{transduce, Scanner, UnmappedPolicy};
