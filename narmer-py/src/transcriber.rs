//! Reusable transcriber Python interface

#![allow(non_local_definitions)]

use pyo3::prelude::*;

use narmer_core::{RuleTable, Transcriber, UnmappedPolicy};

use crate::exceptions::InternalError;

/// Transcriber bound to one stage or rule table file
#[pyclass(name = "Transcriber", frozen)]
pub struct PyTranscriber {
    inner: Transcriber,
}

#[pymethods]
impl PyTranscriber {
    /// Create a transcriber for a stage, or for a TOML rule table when `rules` is given
    #[new]
    #[pyo3(signature = (period="nhg", *, unmapped="drop", rules=None))]
    pub fn new(period: &str, unmapped: &str, rules: Option<&str>) -> PyResult<Self> {
        let policy: UnmappedPolicy = unmapped.parse().map_err(InternalError::from)?;
        let inner = match rules {
            Some(path) => Transcriber::from_table(RuleTable::from_file(path).map_err(InternalError::from)?),
            None => Transcriber::with_stage(period).map_err(InternalError::from)?,
        };
        Ok(Self {
            inner: inner.unmapped(policy),
        })
    }

    /// Transcribe one word
    pub fn transcribe(&self, word: &str) -> PyResult<String> {
        self.inner
            .transcribe(word)
            .map_err(|e| InternalError::from(e).into())
    }

    /// Transcribe many words, releasing the GIL while working
    pub fn transcribe_all(&self, words: Vec<String>, py: Python) -> PyResult<Vec<String>> {
        py.allow_threads(|| self.inner.transcribe_all(&words))
            .map_err(|e| InternalError::from(e).into())
    }

    /// Code of the rule table in use
    #[getter]
    pub fn code(&self) -> &str {
        self.inner.table().code()
    }

    fn __repr__(&self) -> String {
        format!("Transcriber(code='{}')", self.inner.table().code())
    }
}
