// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the fallible collaborators.
//!
//! The index itself never fails. Errors only come from the edges: reading a
//! store dump, loading or saving the local state file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or persisting data around the index.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem failure at a known path
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File contents are not the expected JSON shape
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Store dump parsed but is unusable
    #[error("Invalid store dump: {reason}")]
    InvalidStoreDump {
        /// What was wrong with it
        reason: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
