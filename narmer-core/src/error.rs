//! Error types for transcription and scoring

use thiserror::Error;

/// Errors raised by narmer-core operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Requested historical stage is not one of ohg, mhg, enhg, nhg
    #[error("Invalid stage: {0} (expected one of ohg, mhg, enhg, nhg)")]
    InvalidStage(String),

    /// Non-positive time or ratio passed to the Weissman score
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No production covers a character and the policy is to reject it
    #[error("Unmapped character {ch:?} at position {position}")]
    UnmappedCharacter { ch: char, position: usize },

    /// Rule table or builder configuration could not be used
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for narmer-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidStage("xyz".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid stage: xyz (expected one of ohg, mhg, enhg, nhg)"
        );

        let err = Error::UnmappedCharacter {
            ch: '-',
            position: 3,
        };
        assert_eq!(err.to_string(), "Unmapped character '-' at position 3");

        let err = Error::Configuration("missing field `pattern`".to_string());
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
