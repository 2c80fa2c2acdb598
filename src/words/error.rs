// Copyright (c) 2025 Lehia Radix Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for word-file loading and saving.

/// Errors that can occur while reading or writing word files.
///
/// I/O failures (missing file, permissions) are surfaced as-is and never
/// retried; the tree operations themselves are infallible.
#[derive(Debug, thiserror::Error)]
pub enum WordFileError {
    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WordFileError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing words file",
        ));
        assert_eq!(err.to_string(), "I/O error: missing words file");
    }
}
