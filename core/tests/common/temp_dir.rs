// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary event lists for integration tests.
//!
//! The directory and everything in it is removed when dropped.

use std::fs;
use std::path::PathBuf;

use daysuntil_core::Source;
use tempfile::TempDir;

/// A temporary directory holding event list files.
#[derive(Debug)]
#[allow(dead_code)]
pub struct TempEvents {
    dir: TempDir,
}

#[allow(dead_code)]
impl TempEvents {
    /// Creates an empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Writes an event list and returns it as a source.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write(&self, name: &str, content: &str) -> Result<Source, Box<dyn std::error::Error>> {
        let path = self.path(name);
        fs::write(&path, content)?;
        Ok(Source::File(path))
    }

    /// Path of a file inside the directory, whether it exists or not.
    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
