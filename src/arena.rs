use std::cmp::Ordering;
use std::io::Write;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{IndexError, IndexResult};
use crate::token::Token;

/// Columns added per tree level by the sideways `graph` rendering.
const GRAPH_INDENT_STEP: usize = 8;

/// Delimiter written between entries by the in-order rendering.
const INORDER_DELIMITER: &str = "  ";

/// Tree node in the arena-based search tree.
#[derive(Debug)]
pub struct IndexNode {
    /// Payload for this node's word
    pub token: Token,
    /// Arena index of the left child (words strictly less), None if absent
    pub left: Option<Index>,
    /// Arena index of the right child (words strictly greater), None if absent
    pub right: Option<Index>,
}

/// Arena-based binary search tree keyed by word.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Words are unique within the tree: inserting a word that is already present
/// merges the incoming occurrence lines into the resident token instead of
/// adding a second node. Parent links are not stored; parents are tracked
/// during descent.
///
/// Not designed for concurrent mutation. Removal of a node with two children
/// is a multi-step read-then-splice sequence, so an integrator layering
/// threads on top must hold one exclusive lock across each whole operation.
#[derive(Debug)]
pub struct IndexTree {
    /// Arena storage for all tree nodes
    arena: Arena<IndexNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for IndexTree {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct words in the tree.
    #[instrument(level = "trace", skip(self))]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&IndexNode> {
        self.arena.get(idx)
    }

    /// Check whether `word` is indexed. Read-only descent, no mutation.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Fetch the token for `word`, if indexed.
    #[instrument(level = "debug", skip(self))]
    pub fn get(&self, word: &str) -> Option<&Token> {
        let (found, _) = self.locate(word);
        found.map(|idx| &self.arena[idx].token)
    }

    /// Insert a token, keeping the tree ordered by word.
    ///
    /// A previously absent word gets a fresh node linked under the last node
    /// visited during descent (or becomes the root of an empty tree). A word
    /// already present absorbs the incoming occurrence lines instead; the
    /// node count never grows on a duplicate.
    #[instrument(level = "debug", skip(self, token), fields(word = token.word()))]
    pub fn insert(&mut self, token: Token) {
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            parent = Some(idx);
            match token.word().cmp(self.arena[idx].token.word()) {
                Ordering::Less => cursor = self.arena[idx].left,
                Ordering::Greater => cursor = self.arena[idx].right,
                Ordering::Equal => {
                    // word already indexed: queue the new sightings
                    for &line in token.lines() {
                        self.arena[idx].token.queue_line(line);
                    }
                    return;
                }
            }
        }

        let node_idx = self.arena.insert(IndexNode {
            token,
            left: None,
            right: None,
        });
        if let Some(p) = parent {
            if self.arena[node_idx].token.word() < self.arena[p].token.word() {
                self.arena[p].left = Some(node_idx);
            } else {
                self.arena[p].right = Some(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }
    }

    /// Remove a word from the index.
    ///
    /// A node with zero or one child is spliced out directly: its sole child
    /// (or absence) takes its slot under the parent, or becomes the root.
    /// A node with two children first trades tokens with its in-order
    /// successor (leftmost node of its right subtree), and the successor,
    /// which has at most one child, is spliced out instead. The tree never
    /// rebalances.
    ///
    /// Removing an absent word returns [`IndexError::NotFound`] and leaves
    /// the tree unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, word: &str) -> IndexResult<()> {
        let (found, mut parent) = self.locate(word);
        let mut target = found.ok_or_else(|| IndexError::NotFound(word.to_string()))?;

        let (left, right) = {
            let node = &self.arena[target];
            (node.left, node.right)
        };
        if let (Some(_), Some(right_idx)) = (left, right) {
            // two children: find the in-order successor and its parent
            let mut succ_parent = target;
            let mut succ = right_idx;
            while let Some(next) = self.arena[succ].left {
                succ_parent = succ;
                succ = next;
            }
            // move the successor's content into the target, then splice the
            // successor out through the 0/1-child path below
            if let (Some(t), Some(s)) = self.arena.get2_mut(target, succ) {
                std::mem::swap(&mut t.token, &mut s.token);
            }
            target = succ;
            parent = Some(succ_parent);
        }

        // target now has at most one child
        let subtree = {
            let node = &self.arena[target];
            node.left.or(node.right)
        };
        match parent {
            None => self.root = subtree,
            Some(p) => {
                let parent_node = &mut self.arena[p];
                if parent_node.left == Some(target) {
                    parent_node.left = subtree;
                } else {
                    parent_node.right = subtree;
                }
            }
        }
        self.arena.remove(target);
        Ok(())
    }

    /// Write the ascending in-order listing to `out`: each token's rendering
    /// followed by a fixed delimiter.
    #[instrument(level = "debug", skip(self, out))]
    pub fn inorder<W: Write>(&self, out: &mut W) -> IndexResult<()> {
        self.inorder_aux(out, self.root)
    }

    fn inorder_aux<W: Write>(&self, out: &mut W, subtree: Option<Index>) -> IndexResult<()> {
        if let Some(idx) = subtree {
            let node = &self.arena[idx];
            self.inorder_aux(out, node.left)?;
            write!(out, "{}{}", node.token, INORDER_DELIMITER)?;
            self.inorder_aux(out, node.right)?;
        }
        Ok(())
    }

    /// Write a sideways tree rendering to `out`: right subtree first, one
    /// node per line, each level indented a further fixed step. Inspection
    /// view only, not a storage format.
    #[instrument(level = "debug", skip(self, out))]
    pub fn graph<W: Write>(&self, out: &mut W) -> IndexResult<()> {
        self.graph_aux(out, 0, self.root)
    }

    fn graph_aux<W: Write>(
        &self,
        out: &mut W,
        indent: usize,
        subtree: Option<Index>,
    ) -> IndexResult<()> {
        if let Some(idx) = subtree {
            let node = &self.arena[idx];
            self.graph_aux(out, indent + GRAPH_INDENT_STEP, node.right)?;
            writeln!(out, "{:indent$}{}", "", node.token)?;
            self.graph_aux(out, indent + GRAPH_INDENT_STEP, node.left)?;
        }
        Ok(())
    }

    /// In-order iterator over tokens, ascending by word. Uses an explicit
    /// stack, so iteration depth is independent of call-stack limits.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self)
    }

    /// All distinct words in ascending order.
    #[instrument(level = "trace", skip(self))]
    pub fn words(&self) -> Vec<String> {
        self.iter().map(|token| token.word().to_string()).collect()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.subtree_depth(self.root)
    }

    fn subtree_depth(&self, subtree: Option<Index>) -> usize {
        match subtree {
            Some(idx) => {
                let node = &self.arena[idx];
                1 + self
                    .subtree_depth(node.left)
                    .max(self.subtree_depth(node.right))
            }
            None => 0,
        }
    }

    /// Locate the node holding `word` and its parent. Parents are tracked
    /// during descent since nodes carry no parent links.
    fn locate(&self, word: &str) -> (Option<Index>, Option<Index>) {
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            match word.cmp(self.arena[idx].token.word()) {
                Ordering::Less => {
                    parent = Some(idx);
                    cursor = self.arena[idx].left;
                }
                Ordering::Greater => {
                    parent = Some(idx);
                    cursor = self.arena[idx].right;
                }
                Ordering::Equal => return (cursor, parent),
            }
        }
        (None, parent)
    }
}

pub struct InOrderIter<'a> {
    tree: &'a IndexTree,
    stack: Vec<Index>,
    cursor: Option<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(tree: &'a IndexTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: tree.root,
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        // descend left from the cursor, then yield the deepest pending node
        while let Some(idx) = self.cursor {
            self.stack.push(idx);
            self.cursor = self.tree.arena[idx].left;
        }
        let idx = self.stack.pop()?;
        let node = &self.tree.arena[idx];
        self.cursor = node.right;
        Some(&node.token)
    }
}
