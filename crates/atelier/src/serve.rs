// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `atelier serve` command implementation.
//!
//! Wires the subsystems together: data directories, SQLite storage with
//! migrations, the embedded translation catalog, the session store, and the
//! HTTP server. Supports graceful shutdown via signal handlers.

use std::path::Path;
use std::sync::Arc;

use atelier_config::AtelierConfig;
use atelier_core::AtelierError;
use atelier_i18n::Catalog;
use atelier_storage::Database;
use atelier_web::{AppState, session::SessionStore};
use tracing::{info, warn};
use uuid::Uuid;

use crate::shutdown;

/// Runs the `atelier serve` command.
pub async fn run_serve(config: AtelierConfig) -> Result<(), AtelierError> {
    init_tracing(&config.server.log_level);
    info!("starting atelier serve");

    if config.admin.uses_default_credentials() {
        warn!(
            "admin credentials are still the defaults; set [admin] user and pass in atelier.toml"
        );
    }

    prepare_directories(&config)?;

    let db = Database::open(&config.storage.database_path).await?;
    let catalog = Catalog::load()?;
    let sessions = SessionStore::new(session_secret(&config).as_bytes(), config.session.ttl_secs);

    let state = AppState {
        db: db.clone(),
        sessions,
        catalog: Arc::new(catalog),
        config: Arc::new(config),
    };

    let cancel = shutdown::install_signal_handler();
    let result = atelier_web::start_server(state, cancel).await;

    if let Err(e) = db.close().await {
        warn!(error = %e, "WAL checkpoint on shutdown failed");
    }
    info!("atelier serve shutdown complete");
    result
}

/// The HMAC key for session cookies: the configured secret, or an ephemeral
/// one for this process.
fn session_secret(config: &AtelierConfig) -> String {
    match &config.session.secret {
        Some(secret) if !secret.is_empty() => secret.clone(),
        _ => {
            warn!("no session.secret configured; sessions will not survive a restart");
            Uuid::new_v4().simple().to_string()
        }
    }
}

/// Create the database parent directory and the uploads directory.
fn prepare_directories(config: &AtelierConfig) -> Result<(), AtelierError> {
    if let Some(parent) = Path::new(&config.storage.database_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AtelierError::Server {
            message: format!("cannot create database directory {}", parent.display()),
            source: Some(Box::new(e)),
        })?;
    }

    let uploads = config.uploads.uploads_dir();
    std::fs::create_dir_all(&uploads).map_err(|e| AtelierError::Server {
        message: format!("cannot create uploads directory {}", uploads.display()),
        source: Some(Box::new(e)),
    })?;

    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "atelier={l},atelier_web={l},atelier_storage={l},atelier_i18n={l},\
             atelier_config={l},atelier_core={l},tower_http={l},warn",
            l = log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
