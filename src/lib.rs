//! Word cross-reference index backed by an arena-based binary search tree.
//!
//! `rsxref` maps words to the line numbers they occurred on. The tree keeps
//! words in strict order, merges repeated sightings of a word into one node,
//! and renders either a flat ascending listing or a sideways tree view into
//! any `std::io::Write` sink. Parsing input text into (word, line) sightings
//! is the caller's job; [`IndexBuilder`] takes it from there.

pub mod arena;
pub mod builder;
pub mod errors;
pub mod token;
pub mod tree_traits;
pub mod util;

pub use arena::{InOrderIter, IndexNode, IndexTree};
pub use builder::IndexBuilder;
pub use errors::{IndexError, IndexResult};
pub use token::Token;
pub use tree_traits::TreeConvert;
