//! Payload record for the cross-reference index: one word plus the ordered
//! line numbers it was sighted on.

use std::fmt;

use itertools::Itertools;

/// An indexed word and its occurrence lines, in sighting order.
///
/// The word is the ordering key of the tree; the line list only ever grows,
/// via [`Token::queue_line`], when the same word is inserted again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    word: String,
    lines: Vec<u32>,
}

impl Token {
    /// Build a token for a single sighting of `word` on `line`.
    pub fn new(word: impl Into<String>, line: u32) -> Self {
        Self {
            word: word.into(),
            lines: vec![line],
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Append a line number at the back of the occurrence list.
    /// Appends unconditionally; callers control ordering by feed order.
    pub fn queue_line(&mut self, line: u32) {
        self.lines.push(line);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.lines.iter().join(", "))
    }
}
