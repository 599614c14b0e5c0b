// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

/// Errors raised while loading event lists or building a report.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input source could not be opened.
    #[error("cannot read {name}: {source}")]
    SourceUnreadable {
        /// Display name of the source, `-` for standard input.
        name: String,
        #[source]
        source: io::Error,
    },

    /// Reading from an opened source failed part way through.
    #[error("malformed input in {name}: {source}")]
    MalformedInput {
        /// Display name of the source, `-` for standard input.
        name: String,
        #[source]
        source: io::Error,
    },

    /// A line has the shape of an event but its date does not exist.
    #[error("{name}:{line}: invalid date: {reason}")]
    InvalidDate {
        /// Display name of the source.
        name: String,
        /// 1-based line number.
        line: usize,
        /// What is wrong with the date.
        reason: String,
    },

    /// An option value is out of its accepted range.
    #[error("{0}")]
    InvalidArgument(String),

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
