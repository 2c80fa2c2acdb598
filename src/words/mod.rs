// Copyright (c) 2025 Lehia Radix Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Line-delimited word-file loading and saving.
//!
//! This module is a thin text layer over the tree's `insert`/`strings`
//! interface. A word file is plain text with several words per line,
//! separated by a single-character field delimiter (default `|`):
//!
//! ```text
//! maybe|hey|over here
//! hello|no|yes
//! ```
//!
//! # Format limitations
//!
//! There is no escaping: a stored string containing the delimiter character
//! is written as-is and will read back as several words. [`write_words`]
//! logs a warning when that happens. Empty fields (as produced by adjacent
//! delimiters or trailing delimiters) are skipped on read rather than being
//! stored as empty strings.

mod error;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::tree::RadixTree;

pub use error::WordFileError;

/// Options controlling the word-file text format.
///
/// The defaults match the original format this crate was ported from:
/// `|` as the field delimiter and five words per written line.
#[derive(Debug, Clone)]
pub struct WordFileOptions {
    delimiter: char,
    words_per_line: usize,
}

impl WordFileOptions {
    /// Creates options with the default delimiter (`|`) and line width (5).
    pub fn new() -> Self {
        Self {
            delimiter: '|',
            words_per_line: 5,
        }
    }

    /// Sets the field delimiter separating words within a line.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets how many words [`write_words`] puts on each line.
    /// A width of zero is treated as one word per line.
    pub fn with_words_per_line(mut self, words_per_line: usize) -> Self {
        self.words_per_line = words_per_line;
        self
    }

    /// The configured field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The configured write-side line width.
    pub fn words_per_line(&self) -> usize {
        self.words_per_line
    }
}

impl Default for WordFileOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads delimiter-separated words from `reader`, inserting each into
/// `tree`. Returns the number of words read (duplicates included).
pub fn read_words<R: BufRead>(
    reader: R,
    tree: &mut RadixTree,
    options: &WordFileOptions,
) -> Result<usize, WordFileError> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        for word in line.split(options.delimiter) {
            if word.is_empty() {
                continue;
            }
            tree.insert(word);
            count += 1;
        }
    }
    debug!(count, "loaded words into tree");
    Ok(count)
}

/// Reads a word file from disk into `tree`. See [`read_words`].
pub fn load_words<P: AsRef<Path>>(
    path: P,
    tree: &mut RadixTree,
    options: &WordFileOptions,
) -> Result<usize, WordFileError> {
    let file = File::open(path)?;
    read_words(BufReader::new(file), tree, options)
}

/// Writes every stored string to `writer`, batched into lines of
/// `words_per_line` words joined by the delimiter.
pub fn write_words<W: Write>(
    mut writer: W,
    tree: &RadixTree,
    options: &WordFileOptions,
) -> Result<(), WordFileError> {
    let words = tree.strings();
    let per_line = options.words_per_line.max(1);
    let delimiter = options.delimiter.to_string();
    for word in &words {
        if word.contains(options.delimiter) {
            warn!(word = %word, delimiter = %options.delimiter, "word contains the field delimiter and will not round-trip");
        }
    }
    for line in words.chunks(per_line) {
        writeln!(writer, "{}", line.join(&delimiter))?;
    }
    writer.flush()?;
    debug!(count = words.len(), "wrote words from tree");
    Ok(())
}

/// Writes a word file to disk from `tree`. See [`write_words`].
pub fn save_words<P: AsRef<Path>>(
    path: P,
    tree: &RadixTree,
    options: &WordFileOptions,
) -> Result<(), WordFileError> {
    let file = File::create(path)?;
    write_words(BufWriter::new(file), tree, options)
}
