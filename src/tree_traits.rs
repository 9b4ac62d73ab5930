/*
Display conversion lives behind a trait so rendering concerns stay out of the
arena module (same split as inherent-impl restrictions force for foreign
types, see https://doc.rust-lang.org/error_codes/E0116.html).
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::IndexTree;

pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeConvert for IndexTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(index: &IndexTree, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = index.get_node(node_idx) {
                for child_idx in [node.left, node.right].into_iter().flatten() {
                    if let Some(child) = index.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.token.to_string());
                        build_tree(index, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        let root_node = self.root().and_then(|idx| self.get_node(idx));
        match (self.root(), root_node) {
            (Some(root_idx), Some(root)) => {
                let mut tree = Tree::new(root.token.to_string());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            _ => Tree::new("Empty index".to_string()),
        }
    }
}
