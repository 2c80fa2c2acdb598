// Copyright (c) 2025 Lehia Radix Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Integration tests for word-file loading and saving through the public
//! crate API.

use std::fs;

use lehia_radix::{words, RadixTree, WordFileError, WordFileOptions};

#[test]
fn test_load_save_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("words.txt");
    fs::write(&path, "hello|no|yes\nmaybe|hey|over here\n").expect("fixture write");

    let mut tree = RadixTree::new();
    let options = WordFileOptions::new();
    let count = words::load_words(&path, &mut tree, &options).expect("load should succeed");
    assert_eq!(count, 6);
    assert!(tree.contains("maybe"));
    assert_eq!(tree.autocomplete("he", 10), vec!["hello", "hey"]);

    let out_path = dir.path().join("out.txt");
    words::save_words(&out_path, &tree, &options).expect("save should succeed");

    let mut restored = RadixTree::new();
    words::load_words(&out_path, &mut restored, &options).expect("reload should succeed");
    assert_eq!(restored.strings(), tree.strings());
}

#[test]
fn test_save_uses_configured_line_width() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("narrow.txt");

    let mut tree = RadixTree::new();
    for word in ["ant", "bee", "cat", "dog", "eel", "fox", "gnu"] {
        tree.insert(word);
    }

    let options = WordFileOptions::new().with_words_per_line(3);
    words::save_words(&path, &tree, &options).expect("save should succeed");

    let text = fs::read_to_string(&path).expect("read back");
    assert_eq!(text, "ant|bee|cat\ndog|eel|fox\ngnu\n");
}

#[test]
fn test_missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let missing = dir.path().join("no-such-file.txt");

    let mut tree = RadixTree::new();
    let err = words::load_words(&missing, &mut tree, &WordFileOptions::new())
        .expect_err("load of a missing file should fail");
    assert!(matches!(err, WordFileError::Io(_)));
    assert!(tree.is_empty());
}
