//! Python bindings for the emojilexer scanner.
//!
//! # Thread Safety
//!
//! A lexer is immutable once built and can be shared across Python threads.
//! `scan_batch` uses Rayon, releasing the GIL for the Rust computation.
//!
//! # Example
//!
//! ```python
//! from emojilexer import Lexer
//!
//! lexer = Lexer.from_hex(["1f929", "1f973", "1f3c3-200d-2640-fe0f"])
//! for kind, text in lexer.scan("party time \U0001f973!"):
//!     print(kind, repr(text))
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Lexer, Span};

fn span_pair(span: Span<'_>) -> (&'static str, String) {
    match span {
        Span::Text(s) => ("text", s.to_string()),
        Span::Token(s) => ("token", s.to_string()),
    }
}

/// Python wrapper for the Rust Lexer.
#[pyclass(name = "Lexer", frozen)]
pub struct PyLexer {
    inner: Lexer,
}

#[pymethods]
impl PyLexer {
    /// Create a lexer from literal dictionary entries.
    ///
    /// Args:
    ///     entries: List of strings, one per emoji
    #[new]
    fn new(entries: Vec<String>) -> Self {
        Self {
            inner: Lexer::new(entries),
        }
    }

    /// Create a lexer from entries in dash-separated hex form.
    ///
    /// Args:
    ///     entries: List of strings such as "1f3c3-200d-2640-fe0f"
    #[staticmethod]
    fn from_hex(entries: Vec<String>) -> PyResult<Self> {
        let inner = Lexer::from_hex(entries).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Create a lexer from a dictionary blob, one hex entry per line.
    #[staticmethod]
    fn from_bytes(data: &[u8]) -> PyResult<Self> {
        let inner = Lexer::from_bytes(data).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Scan text into a list of ("text" | "token", content) pairs.
    fn scan(&self, text: &str) -> Vec<(&'static str, String)> {
        self.inner.scan(text).map(span_pair).collect()
    }

    /// Scan many texts in parallel.
    fn scan_batch(&self, py: Python<'_>, texts: Vec<String>) -> Vec<Vec<(&'static str, String)>> {
        py.allow_threads(|| {
            self.inner
                .scan_batch(&texts)
                .into_iter()
                .map(|spans| spans.into_iter().map(span_pair).collect())
                .collect()
        })
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Lexer(entries={}, nodes={})",
            self.inner.len(),
            self.inner.trie().node_count()
        )
    }
}

/// Encode a string as dash-separated hex code points.
#[pyfunction]
pub fn to_hex(s: &str) -> String {
    crate::core::to_hex(s)
}

/// Decode a dash-separated hex string.
#[pyfunction]
pub fn from_hex(s: &str) -> PyResult<String> {
    crate::core::from_hex(s).map_err(|e| PyValueError::new_err(e.to_string()))
}
