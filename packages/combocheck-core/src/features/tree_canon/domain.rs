//! Canonical names for unlabeled rooted trees
//!
//! A leaf is `"10"`. An internal node is `"1"`, then the canonical names of
//! its children sorted in descending byte order and concatenated, then
//! `"0"`. Sorting makes the name independent of sibling order, so two trees
//! are isomorphic (children as unordered multisets) exactly when their names
//! are equal.

use crate::domain::{Score, TreeNode, UNAVAILABLE};
use std::collections::VecDeque;

/// Name under construction; wrapping a child is a push at each end
type Name = VecDeque<u8>;

/// A node whose children are still being named
struct Frame<'t> {
    node: Box<dyn TreeNode<'t> + 't>,
    next_child: usize,
    names: Vec<Name>,
}

impl<'t> Frame<'t> {
    fn new(node: Box<dyn TreeNode<'t> + 't>) -> Self {
        let names = Vec::with_capacity(node.child_count());
        Self {
            node,
            next_child: 0,
            names,
        }
    }

    fn into_name(mut self) -> Name {
        self.names.sort_unstable_by(|a, b| b.cmp(a));

        // grow the largest child's name in place
        let mut names = self.names.into_iter();
        let mut name = names.next().unwrap_or_default();
        name.push_front(b'1');
        for child in names {
            name.extend(child);
        }
        name.push_back(b'0');
        name
    }
}

/// Canonical name of the tree rooted at `root`.
///
/// Post-order over an explicit stack, so depth is bounded by memory and not
/// by the thread stack. Returns `None` if a node reports a child it cannot
/// produce.
pub fn canonical_name<'t>(root: Box<dyn TreeNode<'t> + 't>) -> Option<String> {
    let mut stack = vec![Frame::new(root)];
    while let Some(frame) = stack.last_mut() {
        if frame.next_child < frame.node.child_count() {
            let child = frame.node.child(frame.next_child)?;
            frame.next_child += 1;
            stack.push(Frame::new(child));
            continue;
        }

        let name = stack.pop()?.into_name();
        match stack.last_mut() {
            Some(parent) => parent.names.push(name),
            None => return Some(name.into_iter().map(char::from).collect()),
        }
    }
    None
}

/// Are the two trees isomorphic up to sibling order?
///
/// Trees that cannot be fully navigated are never isomorphic.
pub fn isomorphic<'t>(a: Box<dyn TreeNode<'t> + 't>, b: Box<dyn TreeNode<'t> + 't>) -> bool {
    match (canonical_name(a), canonical_name(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// 0 when both names exist and match, 1 when they differ, sentinel when either is missing
pub fn isomorphism_score(a: Option<&str>, b: Option<&str>) -> Score {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 0,
        (Some(_), Some(_)) => 1,
        _ => UNAVAILABLE,
    }
}
