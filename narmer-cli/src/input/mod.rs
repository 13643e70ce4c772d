//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Split text into whitespace-separated words
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
