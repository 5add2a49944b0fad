// tests/common/mod.rs
//! 共通テストユーティリティ

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding a single source file.
pub struct SourceFile {
    _dir: TempDir,
    path: PathBuf,
}

impl SourceFile {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
        let path = dir.path().join("input.c");
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to create test file at {path:?}: {e}"));
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

pub fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_syntax_sanity"))
}
