// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Atelier portfolio site.

use thiserror::Error;

/// The primary error type used across the Atelier workspace.
///
/// Request-level outcomes (not found, validation, bad credentials) are not
/// errors here -- handlers express those directly as responses. This enum
/// covers infrastructure failures only.
#[derive(Debug, Error)]
pub enum AtelierError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Upload handling errors (filesystem write failure under the public dir).
    #[error("upload error: {message}")]
    Upload {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HTTP server errors (bind failure, accept loop failure).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
