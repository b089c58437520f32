// tests/fingerprint.rs

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;
use std::path::Path;

use tempfile::tempdir;

use depwatch::fs::mock::MockFileSystem;
use depwatch::fs::RealFileSystem;
use depwatch::watch::{fingerprint, Fingerprint};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn same_content_gives_same_fingerprint() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let file = dir.path().join("a.txt");
    fs::write(&file, "hello")?;

    let first = fingerprint(&RealFileSystem, &file);
    let second = fingerprint(&RealFileSystem, &file);

    assert_eq!(first, second);
    assert!(!first.is_absent());
    Ok(())
}

#[test]
fn different_content_gives_different_fingerprint() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let file = dir.path().join("a.txt");

    fs::write(&file, "hello")?;
    let before = fingerprint(&RealFileSystem, &file);

    fs::write(&file, "HELLO")?;
    let after = fingerprint(&RealFileSystem, &file);

    assert_ne!(before, after);
    Ok(())
}

#[test]
fn fingerprint_matches_in_memory_digest() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let file = dir.path().join("big.bin");
    // Larger than the read buffer, so several chunks are fed to the hasher.
    let content: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&file, &content)?;

    assert_eq!(fingerprint(&RealFileSystem, &file), Fingerprint::of_bytes(&content));
    Ok(())
}

#[test]
fn missing_file_is_absent() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let fp = fingerprint(&RealFileSystem, &dir.path().join("nope.txt"));

    assert_eq!(fp, Fingerprint::Absent);
    Ok(())
}

#[test]
fn absent_differs_from_digest_of_empty_file() {
    init_tracing();

    assert_ne!(Fingerprint::Absent, Fingerprint::of_bytes(b""));
}

#[test]
fn unreadable_file_is_absent_not_an_error() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_unreadable("/secret.txt");

    assert_eq!(fingerprint(&fs, Path::new("/secret.txt")), Fingerprint::Absent);
}

#[test]
fn deleting_a_file_turns_it_absent() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("/a.txt", "content");
    let before = fingerprint(&fs, Path::new("/a.txt"));

    fs.remove_file("/a.txt");
    let after = fingerprint(&fs, Path::new("/a.txt"));

    assert_eq!(before, Fingerprint::of_bytes(b"content"));
    assert_eq!(after, Fingerprint::Absent);
}
