use tracing::instrument;

use crate::arena::IndexTree;
use crate::token::Token;

/// Accumulates word sightings into an [`IndexTree`].
///
/// Construction surface for callers that scan text themselves: feed
/// (word, line) pairs in reading order, then take the finished tree.
/// Repeated words merge into one node with line numbers in feed order.
#[derive(Debug)]
pub struct IndexBuilder {
    tree: IndexTree,
    occurrences: usize,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            tree: IndexTree::new(),
            occurrences: 0,
        }
    }

    /// Record one sighting of `word` on `line`.
    #[instrument(level = "debug", skip(self))]
    pub fn add_occurrence(&mut self, word: &str, line: u32) {
        self.tree.insert(Token::new(word, line));
        self.occurrences += 1;
    }

    #[instrument(level = "debug", skip(self, pairs))]
    pub fn extend<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        for (word, line) in pairs {
            self.add_occurrence(&word, line);
        }
    }

    /// Total sightings recorded, duplicates included.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Distinct words indexed so far.
    pub fn distinct_words(&self) -> usize {
        self.tree.len()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn build(self) -> IndexTree {
        self.tree
    }
}
