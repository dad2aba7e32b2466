pub mod core;
#[cfg(feature = "python")]
mod python;

pub use crate::core::{
    from_hex, load_dictionary, to_hex, DictionaryError, Lexer, NodeId, ParseError, Span, Spans,
    Trie,
};
