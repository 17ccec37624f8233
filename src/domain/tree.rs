//! Left-leaning red-black tree keyed by the Hawaiian phrase.
//!
//! Every node owns its two children; there are no parent links. Insertion
//! takes ownership of a subtree, rebuilds it and hands the new subtree root
//! back to the caller, which relinks it. An absent child counts as a black
//! leaf wherever a color is tested.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use tracing::{instrument, trace};

use crate::domain::entry::{AsKey, Entry};
use crate::domain::error::DomainError;

type Link = Option<Box<Node>>;

/// Color of the link from a node's parent to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Tree vertex.
#[derive(Debug)]
pub struct Node {
    entry: Rc<Entry>,
    left: Link,
    right: Link,
    color: Color,
}

impl Node {
    fn new(entry: Rc<Entry>) -> Self {
        Self {
            entry,
            left: None,
            right: None,
            color: Color::Red,
        }
    }

    pub fn entry(&self) -> &Rc<Entry> {
        &self.entry
    }

    pub fn key(&self) -> &str {
        self.entry.key()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }
}

/// Absent children are black.
pub fn is_red(node: Option<&Node>) -> bool {
    node.is_some_and(|n| n.color == Color::Red)
}

/// Ordered, self-balancing store of dictionary entries.
///
/// Keys are unique. Inserting a key that is already present leaves the
/// stored entry untouched and reports `false`.
#[derive(Debug, Default)]
pub struct BalancedTree {
    root: Link,
    len: usize,
}

impl BalancedTree {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Insert `entry` unless its key is already stored.
    ///
    /// Returns `true` when a new node was created. A duplicate key is a
    /// no-op: the existing entry wins and the new one is dropped.
    #[instrument(level = "trace", skip_all, fields(key = %entry.key()))]
    pub fn insert(&mut self, entry: Rc<Entry>) -> bool {
        let (mut root, inserted) = Self::insert_at(self.root.take(), entry);
        root.color = Color::Black;
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_at(link: Link, entry: Rc<Entry>) -> (Box<Node>, bool) {
        let mut node = match link {
            Some(node) => node,
            None => return (Box::new(Node::new(entry)), true),
        };

        let inserted = match entry.key().cmp(node.key()) {
            Ordering::Less => {
                let (left, inserted) = Self::insert_at(node.left.take(), entry);
                node.left = Some(left);
                inserted
            }
            Ordering::Greater => {
                let (right, inserted) = Self::insert_at(node.right.take(), entry);
                node.right = Some(right);
                inserted
            }
            Ordering::Equal => {
                trace!(key = %node.key(), "duplicate key, keeping stored entry");
                return (node, false);
            }
        };

        (balance(node), inserted)
    }

    /// Exact lookup by phrase.
    #[instrument(level = "trace", skip_all, fields(key = %key.as_key()))]
    pub fn search<Q: AsKey + ?Sized>(&self, key: &Q) -> Option<&Rc<Entry>> {
        let key = key.as_key();
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node.entry()),
            }
        }
        None
    }

    pub fn member<Q: AsKey + ?Sized>(&self, key: &Q) -> bool {
        self.search(key).is_some()
    }

    /// Entry with the smallest key.
    #[instrument(level = "trace", skip(self))]
    pub fn first(&self) -> Result<&Rc<Entry>, DomainError> {
        let mut node = self.root().ok_or(DomainError::EmptyTree)?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(node.entry())
    }

    /// Entry with the largest key.
    #[instrument(level = "trace", skip(self))]
    pub fn last(&self) -> Result<&Rc<Entry>, DomainError> {
        let mut node = self.root().ok_or(DomainError::EmptyTree)?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(node.entry())
    }

    /// Entry with the greatest key strictly less than `key`.
    ///
    /// `key` need not be stored.
    #[instrument(level = "trace", skip_all, fields(key = %key.as_key()))]
    pub fn predecessor<Q: AsKey + ?Sized>(&self, key: &Q) -> Option<&Rc<Entry>> {
        let key = key.as_key();
        let mut candidate = None;
        let mut current = self.root();
        while let Some(node) = current {
            if key > node.key() {
                candidate = Some(node.entry());
                current = node.right();
            } else {
                current = node.left();
            }
        }
        candidate
    }

    /// Entry with the least key strictly greater than `key`.
    ///
    /// `key` need not be stored.
    #[instrument(level = "trace", skip_all, fields(key = %key.as_key()))]
    pub fn successor<Q: AsKey + ?Sized>(&self, key: &Q) -> Option<&Rc<Entry>> {
        let key = key.as_key();
        let mut candidate = None;
        let mut current = self.root();
        while let Some(node) = current {
            if key < node.key() {
                candidate = Some(node.entry());
                current = node.left();
            } else {
                current = node.right();
            }
        }
        candidate
    }

    /// Nodes on the longest root-to-leaf path, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        fn calculate_height(node: Option<&Node>) -> usize {
            match node {
                Some(node) => {
                    1 + calculate_height(node.left()).max(calculate_height(node.right()))
                }
                None => 0,
            }
        }
        calculate_height(self.root())
    }

    /// Black links from the root down to an absent child.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root();
        while let Some(node) = current {
            if node.color == Color::Black {
                height += 1;
            }
            current = node.left();
        }
        height
    }

    /// In-order (ascending key) iterator.
    pub fn iter(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    /// Walk the whole tree and verify ordering and color rules.
    ///
    /// Returns the black height on success.
    #[instrument(level = "debug", skip(self))]
    pub fn check_invariants(&self) -> Result<usize, DomainError> {
        if is_red(self.root()) {
            return Err(violation("root is red".to_string()));
        }
        let black_height = validate_subtree(self.root(), None, None)?;

        let counted = self.iter().count();
        if counted != self.len {
            return Err(violation(format!(
                "len is {} but tree holds {} nodes",
                self.len, counted
            )));
        }
        Ok(black_height)
    }
}

impl<'a> IntoIterator for &'a BalancedTree {
    type Item = &'a Rc<Entry>;
    type IntoIter = InOrderIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn violation(message: String) -> DomainError {
    DomainError::InvariantViolation { message }
}

/// Checks the subtree rooted at `node` against the open key interval
/// `(low, high)` and returns its black height.
fn validate_subtree(
    node: Option<&Node>,
    low: Option<&str>,
    high: Option<&str>,
) -> Result<usize, DomainError> {
    let node = match node {
        Some(node) => node,
        None => return Ok(0),
    };

    if low.is_some_and(|low| node.key() <= low) || high.is_some_and(|high| node.key() >= high) {
        return Err(violation(format!("key {:?} out of order", node.key())));
    }
    if is_red(node.right()) {
        return Err(violation(format!("right-leaning red link below {:?}", node.key())));
    }
    if node.color == Color::Red && is_red(node.left()) {
        return Err(violation(format!("consecutive red links at {:?}", node.key())));
    }

    let left = validate_subtree(node.left(), low, Some(node.key()))?;
    let right = validate_subtree(node.right(), Some(node.key()), high)?;
    if left != right {
        return Err(violation(format!(
            "unbalanced black links at {:?}: {} vs {}",
            node.key(),
            left,
            right
        )));
    }

    Ok(left + usize::from(node.color == Color::Black))
}

/// Applies the three left-leaning fixups, in order, once each.
fn balance(mut node: Box<Node>) -> Box<Node> {
    if is_red(node.right()) && !is_red(node.left()) {
        node = rotate_left(node);
    }
    if is_red(node.left()) && is_red(node.left().and_then(Node::left)) {
        node = rotate_right(node);
    }
    if is_red(node.left()) && is_red(node.right()) {
        flip_colors(&mut node);
    }
    node
}

//        node                 x
//        /  \                / \
//       a   (x)    =>     (node) c
//           / \            / \
//          b   c          a   b
//
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    // only reached with a red right child
    let Some(mut x) = node.right.take() else {
        return node;
    };
    node.right = x.left.take();
    x.color = node.color;
    node.color = Color::Red;
    x.left = Some(node);
    x
}

//          node             x
//          /  \            / \
//        (x)   c    =>    a  (node)
//        / \                 / \
//       a   b               b   c
//
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    // only reached with a red left child
    let Some(mut x) = node.left.take() else {
        return node;
    };
    node.left = x.right.take();
    x.color = node.color;
    node.color = Color::Red;
    x.right = Some(node);
    x
}

fn flip_colors(node: &mut Node) {
    node.color = Color::Red;
    if let Some(left) = node.left.as_mut() {
        left.color = Color::Black;
    }
    if let Some(right) = node.right.as_mut() {
        right.color = Color::Black;
    }
}

/// Explicit-stack in-order traversal.
pub struct InOrderIterator<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrderIterator<'a> {
    fn new(tree: &'a BalancedTree) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = &'a Rc<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.entry())
    }
}
