//! Drive the commands against files on disk.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use vibec::commands::{check_file, parse_file};
use vibec::{CliError, CliOptions};

fn write_source(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("vibec-{}-{name}.vibe", std::process::id()));
    std::fs::write(&path, source).unwrap();
    path
}

fn options(path: &PathBuf, extra: &[&str]) -> CliOptions {
    let mut args = vec![path.to_string_lossy().into_owned()];
    args.extend(extra.iter().map(|s| (*s).to_string()));
    CliOptions::parse(&args).unwrap()
}

#[test]
fn check_accepts_valid_file() {
    let path = write_source("valid", "def greet(name: String)\n  puts(name)\nend\n");
    assert!(check_file(&options(&path, &["--color=never"])).unwrap());
    let _ = std::fs::remove_file(path);
}

#[test]
fn check_rejects_invalid_file() {
    let path = write_source("invalid", "if ready\n  go()\n");
    assert!(!check_file(&options(&path, &["--color=never"])).unwrap());
    assert!(!parse_file(&options(&path, &["--fail-fast", "--color=never"])).unwrap());
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_is_a_read_error() {
    let options = CliOptions::parse(&["/definitely/not/here.vibe"]).unwrap();
    assert!(matches!(check_file(&options), Err(CliError::Read { .. })));
}
