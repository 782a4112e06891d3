// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Atelier portfolio site.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use atelier_core::Language;
use serde::{Deserialize, Serialize};

/// Top-level Atelier configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AtelierConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Per-language site name shown in the layout.
    #[serde(default)]
    pub site: SiteConfig,

    /// Admin panel credentials.
    #[serde(default)]
    pub admin: AdminConfig,

    /// Session cookie signing and lifetime settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Upload and static file settings.
    #[serde(default)]
    pub uploads: UploadsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Per-language site name configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name shown when the page language is Arabic.
    #[serde(default)]
    pub name_ar: Option<String>,

    /// Site name shown when the page language is English.
    #[serde(default)]
    pub name_en: Option<String>,

    /// Site name shown when the page language is Italian.
    #[serde(default)]
    pub name_it: Option<String>,
}

impl SiteConfig {
    /// Fallback site name when no per-language name is configured.
    pub const FALLBACK_NAME: &'static str = "Atelier";

    /// The site name for the given page language.
    pub fn display_name(&self, lang: Language) -> &str {
        let name = match lang {
            Language::Ar => &self.name_ar,
            Language::En => &self.name_en,
            Language::It => &self.name_it,
        };
        name.as_deref().unwrap_or(Self::FALLBACK_NAME)
    }
}

/// Admin panel credential configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Admin username.
    #[serde(default = "default_admin_user")]
    pub user: String,

    /// Admin password.
    #[serde(default = "default_admin_pass")]
    pub pass: String,
}

impl AdminConfig {
    /// True when both credentials are still the compiled-in defaults.
    /// The server warns loudly at startup in that case.
    pub fn uses_default_credentials(&self) -> bool {
        self.user == default_admin_user() && self.pass == default_admin_pass()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            user: default_admin_user(),
            pass: default_admin_pass(),
        }
    }
}

fn default_admin_user() -> String {
    "admin".to_string()
}

fn default_admin_pass() -> String {
    "atelier".to_string()
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// HMAC key for signing session cookies. When unset, an ephemeral
    /// random secret is generated at startup and sessions do not survive
    /// a restart.
    #[serde(default)]
    pub secret: Option<String>,

    /// Session lifetime in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    86400
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file. The parent directory is created
    /// at startup when missing.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "data/atelier.db".to_string()
}

/// Upload and static file configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UploadsConfig {
    /// Directory served at `/public`. Uploaded files land in its `uploads/`
    /// subdirectory, which is created at startup when missing.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl UploadsConfig {
    /// The directory uploaded files are written to.
    pub fn uploads_dir(&self) -> PathBuf {
        PathBuf::from(&self.public_dir).join("uploads")
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
        }
    }
}

fn default_public_dir() -> String {
    "public".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_configured_language() {
        let site = SiteConfig {
            name_ar: Some("ونيس".to_string()),
            name_en: Some("Wanis".to_string()),
            name_it: None,
        };
        assert_eq!(site.display_name(Language::Ar), "ونيس");
        assert_eq!(site.display_name(Language::En), "Wanis");
        assert_eq!(site.display_name(Language::It), SiteConfig::FALLBACK_NAME);
    }

    #[test]
    fn default_credentials_are_flagged() {
        assert!(AdminConfig::default().uses_default_credentials());
        let custom = AdminConfig {
            user: "admin".to_string(),
            pass: "s3cret".to_string(),
        };
        assert!(!custom.uses_default_credentials());
    }

    #[test]
    fn uploads_dir_is_under_public_dir() {
        let uploads = UploadsConfig {
            public_dir: "/srv/atelier/public".to_string(),
        };
        assert_eq!(
            uploads.uploads_dir(),
            PathBuf::from("/srv/atelier/public/uploads")
        );
    }
}
