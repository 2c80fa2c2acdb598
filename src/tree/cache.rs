// Copyright (c) 2025 Lehia Radix Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Completion cache for the radix tree.
//!
//! The cache memoizes autocomplete results: a mapping from a query prefix to
//! the ordered list of complete matching strings previously discovered under
//! that prefix. It is the only synchronized part of the crate — a single
//! mutex guards all reads and writes, and every tree operation that touches
//! the cache holds the guard for the whole critical section so release is
//! guaranteed on every exit path.
//!
//! # Invalidation policy
//!
//! Entries are invalidated lazily and partially, mirroring the mutation
//! hooks in [`RadixTree`](super::RadixTree):
//!
//! * On insert of `s`, every existing key that shares a non-empty prefix
//!   with `s` and is no longer than `s` gets `s` appended to its list. This
//!   is an additive patch with no re-sorting and no re-validation against
//!   the tree, so a patched list can pick up near-miss strings (inserting
//!   `"cat"` patches an existing `"car"` entry). Callers that need exact
//!   results can [`clear`](CompletionCache::clear) and recompute.
//! * On delete of `s`, only the entry keyed exactly `s` is evicted; other
//!   cached lists that contain `s` as a completion go stale until they are
//!   cleared or recomputed.
//!
//! # Sharing
//!
//! Each tree owns its cache by default. Callers that want several trees to
//! share completions can pass the same [`CompletionCache`] handle to each
//! tree, or use [`CompletionCache::process_shared`] for the lazily created
//! process-wide instance that matches the original implementation this crate
//! was ported from (where the cache was implicit global state and two
//! independent trees could corrupt each other's results — sharing here is
//! opt-in and explicit for exactly that reason).

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};

use super::common_prefix;

/// Map from query prefix to the completions discovered under it.
pub(crate) type CacheMap = HashMap<String, Vec<String>>;

/// Process-wide cache used by [`CompletionCache::process_shared`].
static PROCESS_CACHE: Lazy<Arc<CompletionCache>> =
    Lazy::new(|| Arc::new(CompletionCache::new()));

/// A synchronized prefix-to-completions map shared by autocomplete queries.
///
/// See the [module documentation](self) for the invalidation policy and the
/// sharing contract.
#[derive(Debug, Default)]
pub struct CompletionCache {
    entries: Mutex<CacheMap>,
}

impl CompletionCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the process-wide shared cache, creating it on first use.
    ///
    /// Every tree constructed with this handle reads and writes the same
    /// map, reproducing the original implementation's global-cache behavior.
    /// Prefer per-instance caches unless cross-tree sharing is genuinely
    /// wanted.
    pub fn process_shared() -> Arc<CompletionCache> {
        Arc::clone(&PROCESS_CACHE)
    }

    /// Number of cached prefixes.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if no prefixes are cached.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Removes every cached entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Locks the underlying map for a multi-step read/populate sequence.
    pub(crate) fn lock(&self) -> MutexGuard<'_, CacheMap> {
        self.entries.lock()
    }

    /// Insert-time patch: appends `word` to every cached list whose key
    /// shares a non-empty prefix with `word` and is no longer than `word`
    /// (lengths compared in codepoints).
    pub(crate) fn absorb(&self, word: &str) {
        let word_len = word.chars().count();
        let mut entries = self.entries.lock();
        for (key, completions) in entries.iter_mut() {
            if key.chars().count() <= word_len && !common_prefix(key, word).is_empty() {
                completions.push(word.to_string());
            }
        }
    }

    /// Delete-time eviction: drops the entry keyed exactly `word`, if any.
    pub(crate) fn evict(&self, word: &str) {
        self.entries.lock().remove(word);
    }

    /// Snapshot of the entry for `prefix`, if cached. Test support.
    #[cfg(test)]
    pub(crate) fn get(&self, prefix: &str) -> Option<Vec<String>> {
        self.entries.lock().get(prefix).cloned()
    }
}
