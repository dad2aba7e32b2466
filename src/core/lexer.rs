use std::fmt;
use std::str::CharIndices;

use rayon::prelude::*;

use super::dictionary::{load_dictionary, DictionaryError};
use super::hex::{from_hex, ParseError};
use super::trie::{NodeId, Trie};

/// A contiguous slice of the scanned input.
///
/// Concatenating the spans of one scan, in order, gives back the input
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span<'a> {
    /// A run of input that is not a dictionary entry.
    Text(&'a str),
    /// One dictionary entry.
    Token(&'a str),
}

impl<'a> Span<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Span::Text(s) | Span::Token(s) => s,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Span::Text(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Span::Token(_))
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits text into plain runs and dictionary tokens.
///
/// The lexer owns an immutable [`Trie`] built once from the dictionary and
/// can scan any number of inputs, from any number of threads.
///
/// # Example
///
/// ```
/// use emojilexer::{Lexer, Span};
///
/// let lexer = Lexer::new(["\u{1f929}", "\u{1f973}"]);
/// let spans: Vec<Span> = lexer.scan("party\u{1f973}!").collect();
/// assert_eq!(
///     spans,
///     vec![Span::Text("party"), Span::Token("\u{1f973}"), Span::Text("!")]
/// );
/// ```
///
/// # Matching
///
/// Matching is greedy: an attempt keeps extending as long as the trie has a
/// transition, and only then checks whether it stopped on a complete entry.
/// An attempt that runs out of transitions on an incomplete entry produces
/// no token and is not retried from its interior; only the code point that
/// broke it may start a new attempt.
#[derive(Debug, Clone)]
pub struct Lexer {
    trie: Trie,
}

impl Lexer {
    /// Create a lexer from literal dictionary entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = Trie::build(entries);
        tracing::debug!(
            entries = trie.len(),
            nodes = trie.node_count(),
            "built lexer trie"
        );
        Self { trie }
    }

    /// Create a lexer from entries in dash-separated hex form.
    pub fn from_hex<I, S>(entries: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let decoded = entries
            .into_iter()
            .map(|entry| from_hex(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(decoded))
    }

    /// Create a lexer from a dictionary blob, one hex entry per line.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DictionaryError> {
        let entries = load_dictionary(data)?;
        Ok(Self::new(entries))
    }

    /// Scan `input` into an ordered sequence of spans.
    pub fn scan<'a>(&self, input: &'a str) -> Spans<'_, 'a> {
        Spans::new(&self.trie, input)
    }

    /// Scan `input`, calling `on_text` and `on_token` in input order.
    pub fn scan_with<T, E>(&self, input: &str, mut on_text: T, mut on_token: E)
    where
        T: FnMut(&str),
        E: FnMut(&str),
    {
        for span in self.scan(input) {
            match span {
                Span::Text(s) => on_text(s),
                Span::Token(s) => on_token(s),
            }
        }
    }

    /// Scan many inputs in parallel. Results keep the order of `inputs`.
    pub fn scan_batch<'a>(&self, inputs: &'a [String]) -> Vec<Vec<Span<'a>>> {
        inputs
            .par_iter()
            .map(|input| Spans::new(&self.trie, input).collect())
            .collect()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of distinct dictionary entries.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

/// Iterator over the spans of one input, returned by [`Lexer::scan`].
///
/// Each code point drives exactly one transition. A resolved match can
/// produce a text span and a token span at once; the token is held in
/// `queued` until the next call.
pub struct Spans<'t, 'a> {
    trie: &'t Trie,
    input: &'a str,
    chars: CharIndices<'a>,
    text_start: usize,
    match_start: usize,
    cursor: NodeId,
    queued: Option<Span<'a>>,
    done: bool,
}

impl<'t, 'a> Spans<'t, 'a> {
    fn new(trie: &'t Trie, input: &'a str) -> Self {
        Self {
            trie,
            input,
            chars: input.char_indices(),
            text_start: 0,
            match_start: 0,
            cursor: NodeId::ROOT,
            queued: None,
            done: false,
        }
    }

    /// Emit the token `[match_start, end)`, preceded by any pending text.
    fn resolve(&mut self, end: usize) -> Span<'a> {
        let token = Span::Token(&self.input[self.match_start..end]);
        let text_start = std::mem::replace(&mut self.text_start, end);
        if text_start < self.match_start {
            self.queued = Some(token);
            Span::Text(&self.input[text_start..self.match_start])
        } else {
            token
        }
    }

    fn finish(&mut self) -> Span<'a> {
        self.done = true;
        let end = self.input.len();
        if self.cursor != NodeId::ROOT && self.trie.is_terminal(self.cursor) {
            self.resolve(end)
        } else {
            // The only place an empty span can come from: empty input.
            Span::Text(&self.input[self.text_start..end])
        }
    }
}

impl<'a> Iterator for Spans<'_, 'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if let Some(span) = self.queued.take() {
            return Some(span);
        }
        if self.done {
            return None;
        }

        while let Some((j, ch)) = self.chars.next() {
            if let Some(child) = self.trie.child(self.cursor, ch) {
                if self.cursor == NodeId::ROOT {
                    self.match_start = j;
                }
                self.cursor = child;
                continue;
            }

            if self.cursor == NodeId::ROOT {
                continue;
            }

            // The attempt ran out of transitions. Abandoned bytes stay in the
            // pending text run.
            let emitted = if self.trie.is_terminal(self.cursor) {
                Some(self.resolve(j))
            } else {
                None
            };

            self.cursor = NodeId::ROOT;
            if let Some(child) = self.trie.child(NodeId::ROOT, ch) {
                self.match_start = j;
                self.cursor = child;
            }

            if emitted.is_some() {
                return emitted;
            }
        }

        Some(self.finish())
    }
}

impl std::iter::FusedIterator for Spans<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans<'a>(lexer: &Lexer, input: &'a str) -> Vec<Span<'a>> {
        lexer.scan(input).collect()
    }

    #[test]
    fn test_single_token() {
        let lexer = Lexer::new(["ab"]);
        assert_eq!(spans(&lexer, "ab"), vec![Span::Token("ab")]);
    }

    #[test]
    fn test_longest_extension_wins() {
        let lexer = Lexer::new(["a", "ab"]);
        assert_eq!(spans(&lexer, "ab"), vec![Span::Token("ab")]);
    }

    #[test]
    fn test_failed_attempt_is_text() {
        let lexer = Lexer::new(["ab"]);
        assert_eq!(spans(&lexer, "ac"), vec![Span::Text("ac")]);
    }

    #[test]
    fn test_breaking_code_point_restarts() {
        let lexer = Lexer::new(["ab"]);
        assert_eq!(
            spans(&lexer, "aab"),
            vec![Span::Text("a"), Span::Token("ab")]
        );
    }

    #[test]
    fn test_interior_of_abandoned_attempt_is_not_retried() {
        // "bc" sits inside the abandoned "abc" attempt, after its first code
        // point, so it is never tried.
        let lexer = Lexer::new(["abcd", "bc"]);
        assert_eq!(spans(&lexer, "abcx"), vec![Span::Text("abcx")]);
    }

    #[test]
    fn test_shorter_entry_lost_to_longer_incomplete_attempt() {
        let lexer = Lexer::new(["a", "abc"]);
        assert_eq!(spans(&lexer, "abx"), vec![Span::Text("abx")]);
    }

    #[test]
    fn test_adjacent_tokens() {
        let lexer = Lexer::new(["a", "b"]);
        assert_eq!(
            spans(&lexer, "ab"),
            vec![Span::Token("a"), Span::Token("b")]
        );
    }

    #[test]
    fn test_text_around_tokens() {
        let lexer = Lexer::new(["ab"]);
        assert_eq!(
            spans(&lexer, "xaby"),
            vec![Span::Text("x"), Span::Token("ab"), Span::Text("y")]
        );
    }

    #[test]
    fn test_empty_input() {
        let lexer = Lexer::new(["ab"]);
        assert_eq!(spans(&lexer, ""), vec![Span::Text("")]);
    }

    #[test]
    fn test_empty_entry_matches_nothing() {
        let lexer = Lexer::new([""]);
        assert_eq!(lexer.len(), 1);
        assert_eq!(spans(&lexer, "abc"), vec![Span::Text("abc")]);
        assert_eq!(spans(&lexer, ""), vec![Span::Text("")]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let lexer = Lexer::new(["a"]);
        let mut it = lexer.scan("xa");
        assert_eq!(it.next(), Some(Span::Text("x")));
        assert_eq!(it.next(), Some(Span::Token("a")));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_scan_with_matches_scan() {
        let lexer = Lexer::new(["ab", "c"]);
        let out = std::cell::RefCell::new(Vec::new());
        lexer.scan_with(
            "zabcq",
            |s| out.borrow_mut().push(format!("T:{}", s)),
            |s| out.borrow_mut().push(format!("E:{}", s)),
        );
        assert_eq!(out.into_inner(), vec!["T:z", "E:ab", "E:c", "T:q"]);
    }

    #[test]
    fn test_scan_batch_keeps_order() {
        let lexer = Lexer::new(["ab"]);
        let inputs = vec!["ab".to_string(), "".to_string(), "xab".to_string()];
        let batch = lexer.scan_batch(&inputs);
        assert_eq!(batch.len(), 3);
        for (input, spans) in inputs.iter().zip(&batch) {
            assert_eq!(&lexer.scan(input).collect::<Vec<_>>(), spans);
        }
    }

    #[test]
    fn test_from_hex() {
        let lexer = Lexer::from_hex(["61-62"]).unwrap();
        assert_eq!(spans(&lexer, "ab"), vec![Span::Token("ab")]);
        assert!(Lexer::from_hex(["61", "g"]).is_err());
    }

    #[test]
    fn test_from_bytes() {
        let lexer = Lexer::from_bytes(b"# letters\n61-62\n63\n").unwrap();
        assert_eq!(lexer.len(), 2);
        assert!(lexer.trie().contains("c"));
    }

    #[test]
    fn test_span_helpers() {
        let text = Span::Text("x");
        let token = Span::Token("y");
        assert!(text.is_text() && !text.is_token());
        assert!(token.is_token() && !token.is_text());
        assert_eq!(format!("{}{}", text, token), "xy");
        assert_eq!(token.as_str(), "y");
    }
}
