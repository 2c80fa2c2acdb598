// Copyright (c) 2025 Lehia Radix Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lehia Radix Library
//!
//! A compressed radix tree ("radix trie") string index with prefix-based
//! autocomplete and result caching. The crate serves callers that store a
//! vocabulary and repeatedly query short prefixes for completion
//! suggestions at low latency.
//!
//! # Architecture
//!
//! The crate has two components:
//! - [`tree`]: the radix tree itself — the structural edit algorithms
//!   (insert-with-split, delete-with-prune), membership testing,
//!   enumeration, and autocomplete backed by a [`CompletionCache`].
//! - [`words`]: a thin line-delimited text layer for loading a vocabulary
//!   into a tree and writing one back out.
//!
//! Design principles carried throughout:
//! - No payloads: nodes carry a terminal flag, nothing else.
//! - Deterministic output: children iterate in lexicographic order.
//! - Minimal synchronization: only the completion cache is locked; the tree
//!   structure relies on Rust ownership for mutation safety.
//!
//! # Example
//!
//! ```
//! use lehia_radix::RadixTree;
//!
//! let mut tree = RadixTree::new();
//! for word in ["care", "cart", "card", "car"] {
//!     tree.insert(word);
//! }
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.autocomplete("care", 10), vec!["care"]);
//!
//! tree.remove("cart");
//! assert!(!tree.contains("cart"));
//! assert!(tree.contains("card"));
//! ```

pub mod tree;
pub mod words;

pub use tree::{CompletionCache, RadixTree};
pub use words::{WordFileError, WordFileOptions};

/// Version information for the Lehia Radix library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
