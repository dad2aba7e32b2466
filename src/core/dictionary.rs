//! Loading dictionaries from a hex-encoded text blob.
//!
//! # Format
//!
//! One entry per line, written in the [`hex`](super::hex) form:
//!
//! ```text
//! # running man / running woman
//! 1f3c3
//! 1f3c3-200d-2640-fe0f
//!
//! 1f929
//! ```
//!
//! - Leading and trailing whitespace (including a `\r` from CRLF files) is
//!   trimmed.
//! - Blank lines and lines starting with `#` are skipped.
//! - Entries are returned in file order; duplicates are kept and collapse
//!   when the trie is built.

use thiserror::Error;

use super::hex::{from_hex, ParseError};

/// Errors that can occur when loading a dictionary blob.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("line {line}: {source}")]
    Hex {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("line {line}: invalid UTF-8")]
    InvalidUtf8 { line: usize },
}

/// Parse a dictionary blob into its entries.
///
/// # Errors
/// Fails on the first line that is not UTF-8 or not a valid hex entry. Line
/// numbers are 1-based.
pub fn load_dictionary(data: &[u8]) -> Result<Vec<String>, DictionaryError> {
    let mut entries = Vec::new();

    for (i, raw) in data.split(|&b| b == b'\n').enumerate() {
        let line = i + 1;
        let text = std::str::from_utf8(raw).map_err(|_| DictionaryError::InvalidUtf8 { line })?;
        let text = text.trim();

        if text.is_empty() || text.starts_with('#') {
            tracing::trace!(line, "skipping dictionary line");
            continue;
        }

        let entry = from_hex(text).map_err(|source| DictionaryError::Hex { line, source })?;
        entries.push(entry);
    }

    tracing::debug!(entries = entries.len(), "loaded dictionary");
    Ok(entries)
}
