mod bindings;

pub use bindings::PyLexer;

use pyo3::prelude::*;

/// emojilexer - split text into plain runs and dictionary emoji tokens
///
/// - Prefix trie over code points, built once per dictionary
/// - Greedy single-pass scanner with exact round trip of the input
/// - Rayon parallelism for batch scanning
/// - Dash-separated hex codec for writing dictionaries
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLexer>()?;
    m.add_function(wrap_pyfunction!(bindings::to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::from_hex, m)?)?;
    Ok(())
}
