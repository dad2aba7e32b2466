//! Core matching engine for emojilexer.
//!
//! # Architecture
//!
//! - [`Trie`]: immutable prefix tree over the code points of the dictionary,
//!   stored as an arena of nodes with [`FxHashMap`](rustc_hash::FxHashMap)
//!   transitions
//! - [`Lexer`]: owns a trie and scans inputs into [`Span`]s with a single
//!   greedy pass, one transition per code point
//! - [`hex`]: dash-separated hexadecimal codec used to spell dictionary
//!   entries without literal glyphs
//! - [`dictionary`]: loader for hex-encoded dictionary blobs
//!
//! Scanning never fails and never allocates beyond the iterator itself; batch
//! scanning runs on Rayon against the one shared trie.

pub mod dictionary;
pub mod hex;
mod lexer;
mod trie;

pub use dictionary::{load_dictionary, DictionaryError};
pub use hex::{from_hex, to_hex, ParseError};
pub use lexer::{Lexer, Span, Spans};
pub use trie::{NodeId, Trie};
