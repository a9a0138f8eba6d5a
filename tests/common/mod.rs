//! Common test utilities for integration tests.
//!
//! This module provides fixture helpers for exercising truename resolution
//! against a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates a scratch directory for a test.
///
/// The directory is cleaned up when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Canonical form of `path`, for building expected resolver output.
///
/// Scratch directories may themselves sit behind symlinks (e.g. `/var` on
/// macOS), so fixtures canonicalize their roots before deriving inputs.
#[allow(dead_code)]
pub fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize fixture path")
}

/// Host-string form of `path`.
#[allow(dead_code)]
pub fn host_str(path: &Path) -> String {
    path.to_str().expect("fixture path is valid UTF-8").to_string()
}

/// Creates a symlink at `link` pointing to `target`.
#[cfg(unix)]
#[allow(dead_code)]
pub fn symlink(target: &Path, link: &Path) {
    std::os::unix::fs::symlink(target, link).expect("create symlink");
}
