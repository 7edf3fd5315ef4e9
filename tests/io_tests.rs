use possort::io::{ReadError, read_codes};
use possort::prelude::*;
use std::fs;
use std::path::PathBuf;

struct TempFile(PathBuf);

impl TempFile {
    fn with_contents(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("possort-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn test_read_exact_count() {
    let file = TempFile::with_contents("ok.txt", "B2C001\nA1B002\nB2C000\n");

    let codes: Vec<Poscode<6>> = read_codes(&file.0, 3).unwrap();
    assert_eq!(codes.len(), 3);
    assert_eq!(codes[0].data(), b"B2C001");
    assert_eq!(codes[2].data(), b"B2C000");
}

#[test]
fn test_read_ignores_extra_lines() {
    let file = TempFile::with_contents("extra.txt", "B2C001\nA1B002\nB2C000\n");

    let codes: Vec<Poscode<6>> = read_codes(&file.0, 2).unwrap();
    assert_eq!(codes.len(), 2);
}

#[test]
fn test_read_strips_carriage_returns() {
    let file = TempFile::with_contents("crlf.txt", "B2C001\r\nA1B002\r\n");

    let codes: Vec<Poscode<6>> = read_codes(&file.0, 2).unwrap();
    assert_eq!(codes[1].data(), b"A1B002");
}

#[test]
fn test_read_too_few_lines() {
    let file = TempFile::with_contents("short.txt", "B2C001\nA1B002\n");

    let result: Result<Vec<Poscode<6>>, ReadError> = read_codes(&file.0, 5);
    match result.unwrap_err() {
        ReadError::TooFewLines {
            expected, found, ..
        } => {
            assert_eq!(expected, 5);
            assert_eq!(found, 2);
        }
        other => panic!("expected TooFewLines, got {other}"),
    }
}

#[test]
fn test_read_malformed_line() {
    let file = TempFile::with_contents("bad.txt", "B2C001\nA1B0\n");

    let result: Result<Vec<Poscode<6>>, ReadError> = read_codes(&file.0, 2);
    match result.unwrap_err() {
        ReadError::BadCode { line, source, .. } => {
            assert_eq!(line, 2);
            assert_eq!(source, CodeError { expected: 6, got: 4 });
        }
        other => panic!("expected BadCode, got {other}"),
    }
}

#[test]
fn test_read_missing_file() {
    let path = std::env::temp_dir().join("possort-definitely-missing.txt");
    let result: Result<Vec<Poscode<6>>, ReadError> = read_codes(&path, 1);
    assert!(matches!(result.unwrap_err(), ReadError::Open { .. }));
}
