//! Dash-separated hexadecimal form of a string.
//!
//! Dictionaries and fixtures spell emoji as the hex values of their code
//! points joined by `-`, the same naming Twemoji uses for its asset files.
//! This keeps literal glyphs (and the invisible joiners and variation
//! selectors inside them) out of source text.
//!
//! # Format
//!
//! - Each code point becomes lowercase hexadecimal without leading zeros.
//! - Fields are joined by `-`.
//! - The empty string encodes to the empty string.
//!
//! # Example
//!
//! ```
//! use emojilexer::{from_hex, to_hex};
//!
//! // Running woman: person running, zero width joiner, female sign, VS16
//! let woman = from_hex("1f3c3-200d-2640-fe0f").unwrap();
//! assert_eq!(woman.chars().count(), 4);
//! assert_eq!(to_hex(&woman), "1f3c3-200d-2640-fe0f");
//! ```

use std::fmt::Write;
use std::num::ParseIntError;

use thiserror::Error;

/// A dash-separated field that is not valid base-16.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex field {field:?} at position {index}: {source}")]
pub struct ParseError {
    /// The offending field, as written.
    pub field: String,
    /// Zero-based position of the field in the input.
    pub index: usize,
    #[source]
    pub source: ParseIntError,
}

/// Encode every code point of `s` as lowercase hex, joined by `-`.
pub fn to_hex(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 {
            out.push('-');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{:x}", ch as u32);
    }
    out
}

/// Decode a dash-separated hex string back into text.
///
/// Values that parse but are not Unicode scalar values (surrogates, anything
/// above U+10FFFF) become U+FFFD.
///
/// # Errors
/// Returns [`ParseError`] for the first field that is empty, not hexadecimal,
/// or too large for a `u32`. Nothing decoded before it is returned.
pub fn from_hex(s: &str) -> Result<String, ParseError> {
    if s.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::with_capacity(s.len());
    for (index, field) in s.split('-').enumerate() {
        let value = u32::from_str_radix(field, 16).map_err(|source| ParseError {
            field: field.to_string(),
            index,
            source,
        })?;
        out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    Ok(out)
}
