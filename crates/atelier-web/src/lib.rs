// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP layer for the Atelier portfolio site.
//!
//! Builds the axum router, resolves the request language, gates the admin
//! panel behind a signed session cookie, handles file uploads, and renders
//! the trilingual HTML pages.

use std::path::PathBuf;
use std::sync::Arc;

use atelier_config::AtelierConfig;
use atelier_i18n::Catalog;
use atelier_storage::Database;

use crate::session::SessionStore;

pub mod auth;
pub mod error;
pub mod handlers;
pub mod locale;
pub mod server;
pub mod session;
pub mod uploads;
pub mod views;

pub use error::WebError;
pub use server::{build_router, start_server};

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the SQLite store.
    pub db: Database,
    /// In-process session store for the admin flag.
    pub sessions: SessionStore,
    /// Trilingual UI string catalog.
    pub catalog: Arc<Catalog>,
    /// Full site configuration.
    pub config: Arc<AtelierConfig>,
}

impl AppState {
    /// The directory served at `/public`.
    pub fn public_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.uploads.public_dir)
    }

    /// The directory uploaded files are written to.
    pub fn uploads_dir(&self) -> PathBuf {
        self.config.uploads.uploads_dir()
    }
}
