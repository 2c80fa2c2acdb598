// Copyright (c) 2025 Lehia Radix Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Compressed radix tree ("radix trie") string index.
//!
//! This module provides the core data structure of the crate: an
//! edge-labeled compressed trie storing a set of strings, with prefix-based
//! autocomplete accelerated by a completion cache.
//!
//! Key features:
//! * Edge labels are string fragments, not single characters, so chains of
//!   single-child nodes are compressed away.
//! * Deterministic enumeration and autocomplete output (children are kept in
//!   lexicographic codepoint order).
//! * Memoized autocomplete through a [`CompletionCache`], per-instance by
//!   default and explicitly shareable between trees.
//!
//! # Example
//!
//! ```
//! use lehia_radix::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! tree.insert("car");
//! tree.insert("cart");
//! tree.insert("card");
//!
//! assert!(tree.contains("car"));
//! assert!(!tree.contains("ca"));
//!
//! let completions = tree.autocomplete("car", 10);
//! assert_eq!(completions, vec!["car", "card", "cart"]);
//! ```
//!
//! # Concurrency
//!
//! Only the completion cache is synchronized. Structural mutation takes
//! `&mut self`, so sharing a tree across threads requires external
//! synchronization chosen by the caller (for example an `RwLock` around the
//! tree). Read-side operations, including `autocomplete`, take `&self`; the
//! cache writes they perform go through the cache's own mutex.

mod cache;
mod node;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::trace;

pub use cache::CompletionCache;
use cache::CacheMap;
use node::RadixNode;

/// Returns the longest common prefix of two strings, sliced from `a`,
/// comparing codepoint by codepoint.
pub(crate) fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    &a[..end]
}

/// A compressed-trie string index with cached prefix autocomplete.
///
/// The tree stores a set of strings. Every structural mutation keeps the
/// radix invariant: no two children of one node have labels sharing a
/// non-empty common prefix. Lookup, insertion, and deletion all descend from
/// the root following edges that are literal prefixes of the remaining
/// input, splitting or pruning edges as needed.
///
/// `size` counts distinct stored strings: re-inserting an existing string
/// and removing an absent one leave it unchanged. (The implementation this
/// crate was ported from counted insert/remove calls instead; see
/// DESIGN.md.)
#[derive(Debug)]
pub struct RadixTree {
    root: RadixNode,
    size: usize,
    cache: Arc<CompletionCache>,
}

impl RadixTree {
    /// Creates an empty tree with its own private completion cache.
    pub fn new() -> Self {
        Self::with_cache(Arc::new(CompletionCache::new()))
    }

    /// Creates an empty tree using the given completion cache.
    ///
    /// Passing the same handle to several trees makes them share cached
    /// completions, including the insert-time patches each tree applies. See
    /// the [cache module docs](CompletionCache) for what sharing implies,
    /// and [`CompletionCache::process_shared`] for the process-wide variant.
    pub fn with_cache(cache: Arc<CompletionCache>) -> Self {
        Self {
            root: RadixNode::new(),
            size: 0,
            cache,
        }
    }

    /// Returns a handle to this tree's completion cache.
    pub fn cache(&self) -> Arc<CompletionCache> {
        Arc::clone(&self.cache)
    }

    /// Inserts a string, returning `true` if it was not already stored.
    ///
    /// The empty string is a well-defined edge case stored on the root node
    /// itself. Before descending, every relevant completion-cache entry is
    /// patched to include the new string (this runs even when the string
    /// turns out to already exist).
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            let inserted = !self.root.is_terminal;
            self.root.is_terminal = true;
            if inserted {
                self.size += 1;
            }
            return inserted;
        }
        // An empty tree takes the whole string as a single edge.
        if self.root.is_leaf() {
            self.root.add_leaf(word, true);
            self.size += 1;
            return true;
        }
        self.cache.absorb(word);
        let inserted = Self::insert_at(&mut self.root, word);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Recursive insertion step: `rest` is the unconsumed part of the input
    /// at `node`. Returns `true` if a string was newly stored.
    fn insert_at(node: &mut RadixNode, rest: &str) -> bool {
        // An edge consumes the whole remainder: flip the terminal flag.
        if let Some(child) = node.children.get_mut(rest) {
            let inserted = !child.is_terminal;
            child.is_terminal = true;
            return inserted;
        }

        // An edge is a proper prefix of the remainder: descend past it.
        let descend = node
            .children
            .keys()
            .find(|label| rest.starts_with(label.as_str()))
            .cloned();
        if let Some(label) = descend {
            if let Some(child) = node.children.get_mut(&label) {
                return Self::insert_at(child, &rest[label.len()..]);
            }
        }

        // An edge shares a non-empty common prefix with the remainder (by
        // the radix invariant at most one can): split it.
        let split = node.children.keys().find_map(|label| {
            let prefix = common_prefix(label, rest);
            if prefix.is_empty() {
                None
            } else {
                Some((label.clone(), prefix.to_string()))
            }
        });
        if let Some((label, prefix)) = split {
            if let Some(existing) = node.children.remove(&label) {
                let mut intermediate = RadixNode::new();
                intermediate.add_child(label[prefix.len()..].to_string(), existing);
                let leftover = &rest[prefix.len()..];
                if leftover.is_empty() {
                    // The remainder is itself the shared prefix; the
                    // intermediate node is the stored string. Labels stay
                    // non-empty.
                    intermediate.is_terminal = true;
                } else {
                    intermediate.add_leaf(leftover, true);
                }
                node.add_child(prefix, intermediate);
            }
            return true;
        }

        // Nothing in common with any edge: attach the remainder directly.
        node.add_leaf(rest, true);
        true
    }

    /// Removes a string, returning `true` if it was stored.
    ///
    /// Removing an absent string is a silent no-op. Nodes that become
    /// non-terminal leaves are pruned on the way back up; a surviving node
    /// left with a single child is deliberately not re-merged, so the tree
    /// may end up less than maximally compressed. The completion-cache entry
    /// keyed exactly by `word` is evicted; other cached lists that mention
    /// `word` are left stale (see the [cache docs](CompletionCache)).
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = if word.is_empty() {
            let was_terminal = self.root.is_terminal;
            self.root.is_terminal = false;
            was_terminal
        } else {
            Self::remove_at(&mut self.root, word)
        };
        self.cache.evict(word);
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Recursive removal step mirroring the navigation rule of
    /// [`insert_at`](Self::insert_at). Returns `true` if a stored string was
    /// cleared.
    fn remove_at(node: &mut RadixNode, rest: &str) -> bool {
        // An edge consumes the whole remainder.
        if let Some(child) = node.children.get_mut(rest) {
            let was_terminal = child.is_terminal;
            child.is_terminal = false;
            if child.is_leaf() {
                node.remove_child(rest);
            }
            return was_terminal;
        }

        // An edge is a proper prefix of the remainder: descend, then prune
        // the child if the removal turned it into a non-terminal leaf.
        let descend = node
            .children
            .keys()
            .find(|label| rest.starts_with(label.as_str()))
            .cloned();
        if let Some(label) = descend {
            let removed = match node.children.get_mut(&label) {
                Some(child) => Self::remove_at(child, &rest[label.len()..]),
                None => false,
            };
            let prune = node
                .children
                .get(&label)
                .map(|child| child.is_leaf() && !child.is_terminal)
                .unwrap_or(false);
            if prune {
                node.remove_child(&label);
            }
            return removed;
        }

        false
    }

    /// Returns `true` if the exact string is stored.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        let mut rest = word;
        loop {
            if rest.is_empty() {
                return node.is_terminal;
            }
            let next = node
                .children
                .iter()
                .find(|(label, _)| rest.starts_with(label.as_str()));
            match next {
                Some((label, child)) => {
                    rest = &rest[label.len()..];
                    node = child;
                }
                None => return false,
            }
        }
    }

    /// Returns every stored string, in lexicographic (codepoint) order.
    pub fn strings(&self) -> Vec<String> {
        let mut results = Vec::new();
        Self::collect_strings(&self.root, String::new(), &mut results);
        results
    }

    fn collect_strings(node: &RadixNode, path: String, results: &mut Vec<String>) {
        if node.is_terminal {
            results.push(path.clone());
        }
        for (label, child) in &node.children {
            Self::collect_strings(child, format!("{path}{label}"), results);
        }
    }

    /// Number of distinct stored strings.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no strings are stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Total node count, root included (an empty tree counts 1).
    pub fn node_count(&self) -> usize {
        Self::count_nodes(&self.root)
    }

    fn count_nodes(node: &RadixNode) -> usize {
        1 + node.children.values().map(Self::count_nodes).sum::<usize>()
    }

    /// Removes every stored string and purges this tree's completion cache.
    ///
    /// With a shared cache this purges the shared map, affecting every tree
    /// holding the same handle.
    pub fn clear(&mut self) {
        self.root = RadixNode::new();
        self.size = 0;
        self.cache.clear();
    }

    /// Purges the completion cache without touching stored strings.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Returns up to `limit` stored strings starting with `prefix`.
    ///
    /// Results come from the completion cache when the exact prefix was
    /// queried (or patched) before; otherwise the tree is walked and the
    /// cache populated along the way, one entry per visited subtree plus one
    /// for the queried prefix itself. Fewer than `limit` matches return as
    /// many as exist; an oversized `limit` is not an error.
    ///
    /// Freshly computed results are in lexicographic order. A cached entry
    /// that has been patched by later inserts keeps its patch order and may
    /// include near-miss strings, as described in the
    /// [cache docs](CompletionCache).
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut entries = self.cache.lock();
        if let Some(hit) = entries.get(prefix) {
            trace!(prefix, "completion cache hit");
            let mut results = hit.clone();
            results.truncate(limit);
            return results;
        }
        trace!(prefix, "completion cache miss");

        // Descend, consuming the prefix against edge labels.
        let mut node = &self.root;
        let mut path = String::new();
        let mut rest = prefix;
        let mut diverged = false;
        'descend: while !rest.is_empty() {
            for (label, child) in &node.children {
                if common_prefix(label, rest).is_empty() {
                    continue;
                }
                if rest.starts_with(label.as_str()) {
                    rest = &rest[label.len()..];
                } else if label.starts_with(rest) {
                    // The query ends part-way through this edge.
                    rest = "";
                } else {
                    // Shared prefix shorter than both sides: nothing stored
                    // extends the query.
                    diverged = true;
                    break 'descend;
                }
                path.push_str(label);
                node = child;
                continue 'descend;
            }
            // No edge shares a prefix with the remaining query.
            break;
        }

        let mut results = if diverged {
            Vec::new()
        } else if !rest.is_empty() {
            if std::ptr::eq(node, &self.root) {
                // Never left the root: collect the whole vocabulary and
                // filter down to the query.
                Self::collect_completions(&mut entries, &self.root, String::new())
                    .into_iter()
                    .filter(|word| word.starts_with(prefix))
                    .collect()
            } else {
                Vec::new()
            }
        } else {
            Self::collect_completions(&mut entries, node, path)
        };

        entries.insert(prefix.to_string(), results.clone());
        results.truncate(limit);
        results
    }

    /// Collects every stored string at or below `node`, whose root-to-node
    /// path is `path`. Subtrees already cached are taken from the cache
    /// instead of being recomputed; freshly computed subtrees are cached
    /// keyed by their accumulated path. The caller holds the cache lock for
    /// the whole collection.
    fn collect_completions(entries: &mut CacheMap, node: &RadixNode, path: String) -> Vec<String> {
        let mut results = Vec::new();
        if node.is_terminal {
            results.push(path.clone());
        }
        for (label, child) in &node.children {
            let full = format!("{path}{label}");
            if let Some(cached) = entries.get(&full) {
                results.extend(cached.iter().cloned());
            } else {
                let sub = Self::collect_completions(entries, child, full.clone());
                entries.insert(full, sub.clone());
                results.extend(sub);
            }
        }
        results
    }
}

impl Default for RadixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<String> for RadixTree {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.insert(&word);
        }
    }
}

impl FromIterator<String> for RadixTree {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
