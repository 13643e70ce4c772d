//! Exception hierarchy for Python bindings

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyValueError};
use pyo3::prelude::*;
use thiserror::Error;

create_exception!(
    narmer,
    NarmerError,
    PyException,
    "Base exception for all narmer errors."
);
create_exception!(
    narmer,
    InvalidStageError,
    PyValueError,
    "Raised when a stage (period) code is not recognized."
);
create_exception!(
    narmer,
    InvalidArgumentError,
    PyValueError,
    "Raised when a Weissman score input is not positive."
);
create_exception!(
    narmer,
    UnmappedCharacterError,
    NarmerError,
    "Raised when a character has no production and unmapped='reject'."
);
create_exception!(
    narmer,
    ConfigurationError,
    NarmerError,
    "Raised when a rule table or option is invalid."
);

/// Internal error enum for Rust-side error handling
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Core(#[from] narmer_core::Error),
}

impl From<InternalError> for PyErr {
    fn from(err: InternalError) -> PyErr {
        use narmer_core::Error;

        let InternalError::Core(core) = err;
        let msg = core.to_string();
        match core {
            Error::InvalidStage(_) => InvalidStageError::new_err(msg),
            Error::InvalidArgument(_) => InvalidArgumentError::new_err(msg),
            Error::UnmappedCharacter { .. } => UnmappedCharacterError::new_err(msg),
            Error::Configuration(_) => ConfigurationError::new_err(msg),
        }
    }
}

/// Register all exception types with the Python module
pub fn register_exceptions(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("NarmerError", py.get_type::<NarmerError>())?;
    m.add("InvalidStageError", py.get_type::<InvalidStageError>())?;
    m.add("InvalidArgumentError", py.get_type::<InvalidArgumentError>())?;
    m.add(
        "UnmappedCharacterError",
        py.get_type::<UnmappedCharacterError>(),
    )?;
    m.add("ConfigurationError", py.get_type::<ConfigurationError>())?;
    Ok(())
}
