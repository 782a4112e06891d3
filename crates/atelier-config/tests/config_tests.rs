// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Atelier configuration system.

use atelier_config::diagnostic::{ConfigError, suggest_key};
use atelier_config::model::AtelierConfig;
use atelier_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_atelier_config() {
    let toml = r#"
[server]
host = "127.0.0.1"
port = 8080
log_level = "debug"

[site]
name_ar = "ونيس"
name_en = "Wanis"
name_it = "Wanis"

[admin]
user = "owner"
pass = "hunter2"

[session]
secret = "0123456789abcdef"
ttl_secs = 3600

[storage]
database_path = "/tmp/test.db"

[uploads]
public_dir = "/tmp/public"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.log_level, "debug");
    assert_eq!(config.site.name_en.as_deref(), Some("Wanis"));
    assert_eq!(config.admin.user, "owner");
    assert_eq!(config.admin.pass, "hunter2");
    assert_eq!(config.session.secret.as_deref(), Some("0123456789abcdef"));
    assert_eq!(config.session.ttl_secs, 3600);
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert_eq!(config.uploads.public_dir, "/tmp/public");
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.log_level, "info");
    assert!(config.site.name_ar.is_none());
    assert!(config.site.name_en.is_none());
    assert!(config.site.name_it.is_none());
    assert_eq!(config.admin.user, "admin");
    assert_eq!(config.admin.pass, "atelier");
    assert!(config.session.secret.is_none());
    assert_eq!(config.session.ttl_secs, 86400);
    assert_eq!(config.storage.database_path, "data/atelier.db");
    assert_eq!(config.uploads.public_dir, "public");
}

/// Unknown field in [admin] section produces an error.
#[test]
fn unknown_field_in_admin_produces_error() {
    let toml = r#"
[admin]
pasword = "x"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("pasword"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[metrics]
enabled = true
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("metrics"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dot-notation overrides merge over TOML values, which is how the
/// `ATELIER_*` env provider feeds Figment.
#[test]
fn dotted_override_wins_over_toml() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[admin]
pass = "from-toml"
"#;

    let config: AtelierConfig = Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("admin.pass", "from-env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.admin.pass, "from-env");
}

/// ATELIER_STORAGE_DATABASE_PATH must map to storage.database_path,
/// not storage.database.path.
#[test]
fn dotted_override_handles_underscored_keys() {
    use figment::{Figment, providers::Serialized};

    let config: AtelierConfig = Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(("storage.database_path", "/tmp/elsewhere.db"))
        .extract()
        .expect("should set database_path via dot notation");

    assert_eq!(config.storage.database_path, "/tmp/elsewhere.db");
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: AtelierConfig = Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(Toml::file("/nonexistent/path/atelier.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.server.port, 3000);
}

// ============================================================================
// Diagnostic tests
// ============================================================================

/// Unknown key "prot" in [server] produces suggestion "did you mean `port`?"
#[test]
fn diagnostic_prot_suggests_port() {
    let valid_keys = &["host", "port", "log_level"];
    let suggestion = suggest_key("prot", valid_keys);
    assert_eq!(suggestion, Some("port".to_string()));
}

/// Unknown key "zzzzzz" with no close match does NOT produce a suggestion.
#[test]
fn diagnostic_no_suggestion_for_distant_typo() {
    let valid_keys = &["host", "port", "log_level"];
    let suggestion = suggest_key("zzzzzz", valid_keys);
    assert!(suggestion.is_none(), "should not suggest for distant typo");
}

/// Error output from load_and_validate_str includes the unknown key name.
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[server]
prot = 8080
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "prot"
                && suggestion.as_deref() == Some("port")
                && valid_keys.contains("host")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'prot' with suggestion 'port', got: {errors:?}"
    );
}

/// Invalid type (string where number expected) produces clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[server]
port = "not_a_number"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("port"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic (can be rendered).
#[test]
fn config_error_implements_diagnostic() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "prot".to_string(),
        suggestion: Some("port".to_string()),
        valid_keys: "host, port, log_level".to_string(),
        span: None,
        src: None,
    };

    let code = error.code();
    assert!(code.is_some(), "should have diagnostic code");

    let help = error.help();
    assert!(help.is_some(), "should have help text");
    let help_str = help.unwrap().to_string();
    assert!(
        help_str.contains("did you mean `port`"),
        "help should contain suggestion, got: {help_str}"
    );
}

/// ConfigError can be rendered using miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::UnknownKey {
        key: "prot".to_string(),
        suggestion: Some("port".to_string()),
        valid_keys: "host, port, log_level".to_string(),
        span: None,
        src: None,
    };

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(!buf.is_empty(), "rendered report should not be empty");
    assert!(buf.contains("prot"), "rendered report should mention the key");
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[admin]
user = "owner"
pass = "hunter2"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.admin.user, "owner");
}

/// Validation catches a zero session lifetime.
#[test]
fn validation_catches_zero_ttl() {
    let toml = r#"
[session]
ttl_secs = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero ttl should fail");
    let has_validation_error = errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("ttl_secs")));
    assert!(has_validation_error, "should have validation error for zero ttl");
}
