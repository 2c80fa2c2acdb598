// Copyright (c) 2025 Lehia Radix Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the radix tree.
//!
//! Nodes map string-fragment edge labels to exclusively owned child nodes.
//! A `BTreeMap` keeps children in lexicographic (codepoint) order, which is
//! what makes enumeration and autocomplete output deterministic.
//!
//! Nodes do no validation of their own: the radix invariant (no two sibling
//! labels share a non-empty common prefix) is maintained entirely by the
//! edit algorithms in the parent module.

use std::collections::BTreeMap;

/// A node in the radix tree.
///
/// Each edge into a child is labeled with a non-empty string fragment; the
/// concatenation of labels from the root to a terminal node is a complete
/// stored string.
#[derive(Debug, Clone, Default)]
pub(crate) struct RadixNode {
    /// Map of edge labels to child nodes, sorted lexicographically.
    pub children: BTreeMap<String, RadixNode>,

    /// Whether the root-to-here path is a complete stored string.
    pub is_terminal: bool,
}

impl RadixNode {
    /// Creates a new non-terminal node with no children.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_terminal: false,
        }
    }

    /// Attaches a fresh leaf under `label` with the given terminal flag,
    /// replacing any existing entry with that exact label.
    pub fn add_leaf(&mut self, label: impl Into<String>, is_terminal: bool) {
        self.children.insert(
            label.into(),
            RadixNode {
                children: BTreeMap::new(),
                is_terminal,
            },
        );
    }

    /// Attaches an existing node (and its whole subtree) under `label`,
    /// replacing any existing entry with that exact label.
    pub fn add_child(&mut self, label: impl Into<String>, node: RadixNode) {
        self.children.insert(label.into(), node);
    }

    /// Removes the child with exactly this label. Absent labels are a no-op.
    pub fn remove_child(&mut self, label: &str) {
        self.children.remove(label);
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
