// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./atelier.toml` > `~/.config/atelier/atelier.toml` > `/etc/atelier/atelier.toml`
//! with environment variable overrides via `ATELIER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AtelierConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/atelier/atelier.toml` (system-wide)
/// 3. `~/.config/atelier/atelier.toml` (user XDG config)
/// 4. `./atelier.toml` (local directory)
/// 5. `ATELIER_*` environment variables
pub fn load_config() -> Result<AtelierConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(Toml::file("/etc/atelier/atelier.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("atelier/atelier.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("atelier.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config file specification.
pub fn load_config_from_str(toml_content: &str) -> Result<AtelierConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AtelierConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because several key names
/// contain underscores themselves: `ATELIER_STORAGE_DATABASE_PATH` must map
/// to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("ATELIER_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: ATELIER_ADMIN_PASS -> "admin_pass" -> "admin.pass"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("site_", "site.", 1)
            .replacen("admin_", "admin.", 1)
            .replacen("session_", "session.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("uploads_", "uploads.", 1);
        mapped.into()
    })
}
