/*
termtree views of the balanced tree.

A node with a single child prints that child alone, so each child label carries
its side: in a left-leaning tree a lone child is always the red left one.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::tree::{BalancedTree, Node};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(side: &str, node: &Node) -> String {
    format!("{}{} [{}]", side, node.key(), node.color())
}

fn build_tree(side: &str, node: &Node) -> Tree<String> {
    let mut tree = Tree::new(label(side, node));
    if let Some(left) = node.left() {
        tree.push(build_tree("L: ", left));
    }
    if let Some(right) = node.right() {
        tree.push(build_tree("R: ", right));
    }
    tree
}

impl TreeNodeConvert for Node {
    fn to_tree_string(&self) -> Tree<String> {
        build_tree("", self)
    }
}

impl TreeNodeConvert for BalancedTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
