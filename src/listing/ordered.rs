//! Ordered aggregation of entries by modification time
//!
//! `OrderedEntries` is an unbalanced binary search tree keyed by
//! [`modified_order`]. Nodes live in an arena owned by the tree and refer to
//! their children by index, so the whole tree is released at once when it is
//! dropped. Insertion and traversal are iterative; an already-sorted input
//! degenerates into a list but never grows the call stack.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::entry::{Entry, modified_order};
use super::sink::EntrySink;

type NodeId = usize;

#[derive(Debug)]
struct Node {
    entry: Entry,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn leaf(entry: Entry) -> Self {
        Self {
            entry,
            left: None,
            right: None,
        }
    }
}

/// Entries kept in ascending (modification time, name) order.
#[derive(Debug, Default)]
pub struct OrderedEntries {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl OrderedEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert an entry as a new leaf.
    ///
    /// Entries that compare less than a node go to its left subtree, all
    /// others to its right.
    pub fn insert(&mut self, entry: Entry) {
        let id = self.nodes.len();

        let Some(mut current) = self.root else {
            self.nodes.push(Node::leaf(entry));
            self.root = Some(id);
            return;
        };

        loop {
            let node = &mut self.nodes[current];
            let slot = match modified_order(&entry, &node.entry) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(id);
                    break;
                }
            }
        }

        self.nodes.push(Node::leaf(entry));
    }

    /// In-order traversal, ascending by modification time then name.
    ///
    /// Each call starts a fresh traversal from the root.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
            remaining: self.nodes.len(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, level)) = pending.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[id];
            pending.extend(node.left.map(|child| (child, level + 1)));
            pending.extend(node.right.map(|child| (child, level + 1)));
        }

        deepest
    }

    /// Release every node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl EntrySink for OrderedEntries {
    fn push_entry(&mut self, entry: Entry) {
        self.insert(entry);
    }
}

impl Extend<Entry> for OrderedEntries {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<Entry> for OrderedEntries {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a OrderedEntries {
    type Item = &'a Entry;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy in-order iterator over an [`OrderedEntries`] tree.
///
/// Holds the path of nodes whose left subtree has been entered but which
/// have not been yielded yet.
pub struct InOrder<'a> {
    nodes: &'a [Node],
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.nodes[id].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

impl FusedIterator for InOrder<'_> {}
