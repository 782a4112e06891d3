// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, non-empty paths, and a nonzero
//! session lifetime.

use crate::diagnostic::ConfigError;
use crate::model::AtelierConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &AtelierConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        // Accept valid IPv4, IPv6, or hostname patterns
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.admin.user.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "admin.user must not be empty".to_string(),
        });
    }

    if config.admin.pass.is_empty() {
        errors.push(ConfigError::Validation {
            message: "admin.pass must not be empty".to_string(),
        });
    }

    if config.session.ttl_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "session.ttl_secs must be at least 1".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.uploads.public_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "uploads.public_dir must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AtelierConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_host_fails_validation() {
        let mut config = AtelierConfig::default();
        config.server.host = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("server.host")))
        );
    }

    #[test]
    fn garbage_host_fails_validation() {
        let mut config = AtelierConfig::default();
        config.server.host = "not a host!".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("server.host")))
        );
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = AtelierConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("database_path")))
        );
    }

    #[test]
    fn zero_ttl_fails_validation() {
        let mut config = AtelierConfig::default();
        config.session.ttl_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("ttl_secs")))
        );
    }

    #[test]
    fn all_failures_are_collected() {
        let mut config = AtelierConfig::default();
        config.server.host = "".to_string();
        config.admin.pass = "".to_string();
        config.session.ttl_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3, "collects every failure, got: {errors:?}");
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = AtelierConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.admin.pass = "s3cret".to_string();
        config.storage.database_path = "/tmp/atelier.db".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn partial_section_fills_remaining_fields_with_defaults() {
        let toml_str = r#"
[server]
port = 8080
"#;
        let config: AtelierConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.log_level, "info");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn session_section_denies_unknown_fields() {
        let toml_str = r#"
[session]
secert = "oops"
"#;
        let result = toml::from_str::<AtelierConfig>(toml_str);
        assert!(result.is_err());
    }
}
