//! Python bindings for narmer
//!
//! Exposes historical German orthography to IPA transcription and the
//! Weissman score.

#![allow(non_local_definitions)]

use pyo3::prelude::*;

mod exceptions;
mod transcriber;

use exceptions::InternalError;
use transcriber::PyTranscriber;

/// Transcribe a German word into IPA
///
/// `period` is one of "ohg", "mhg", "enhg" or "nhg".
#[pyfunction]
#[pyo3(signature = (word, period="nhg"))]
fn german_ipa(word: &str, period: &str) -> PyResult<String> {
    narmer_core::transcribe(word, period).map_err(|e| InternalError::from(e).into())
}

/// Weissman score of a target algorithm against a standard one
#[pyfunction]
#[pyo3(signature = (r_tar, t_tar, r_src, t_src, alpha=narmer_core::DEFAULT_SCALE))]
fn weissman(r_tar: f64, t_tar: f64, r_src: f64, t_src: f64, alpha: f64) -> PyResult<f64> {
    narmer_core::weissman_score(r_tar, t_tar, r_src, t_src, alpha)
        .map_err(|e| InternalError::from(e).into())
}

/// Get list of supported stages
#[pyfunction]
fn supported_periods() -> Vec<&'static str> {
    narmer_core::Stage::ALL.iter().map(|s| s.code()).collect()
}

/// Main Python module for narmer
#[pymodule]
fn narmer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    m.add_class::<PyTranscriber>()?;

    m.add_function(wrap_pyfunction!(german_ipa, m)?)?;
    m.add_function(wrap_pyfunction!(weissman, m)?)?;
    m.add_function(wrap_pyfunction!(supported_periods, m)?)?;

    exceptions::register_exceptions(py, m)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "__doc__",
        "Orthography to IPA transcription for historical stages of German",
    )?;

    Ok(())
}
