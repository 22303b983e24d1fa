use serial_test::serial;
use std::fs;
use tempfile::tempdir;
use vibe_domain::config::AppConfig;
use vibe_kernel::config::{ConfigError, load_config};

#[test]
#[serial]
fn defaults_apply_without_a_config_file() {
    // The default `server` file is optional; pure defaults must be complete.
    let cfg: AppConfig = load_config::<_, &str>(None).expect("defaults alone are valid");
    assert_eq!(cfg.server.port, 8787);
    assert!(cfg.features.public);
    assert!(!cfg.features.auth);
    assert!(!cfg.environment.is_production());
}

#[test]
fn file_overrides_defaults_per_field() {
    let tmp = tempdir().expect("temp dir");
    fs::write(
        tmp.path().join("server.toml"),
        r#"
            environment = "production"

            [server]
            port = 9443

            [features]
            auth = true
            billing = true

            [services]
            billing_secret_key = "am_sk_live"
        "#,
    )
    .expect("write config");

    let cfg: AppConfig = load_config(Some(tmp.path().join("server"))).expect("file loads");
    assert_eq!(cfg.server.port, 9443);
    assert!(cfg.environment.is_production());
    assert!(cfg.features.auth && cfg.features.billing);
    // Untouched fields keep their defaults at field granularity.
    assert!(cfg.features.public);
    assert_eq!(cfg.services.auth_url, "http://localhost:5173");
    assert_eq!(cfg.services.billing_secret_key, "am_sk_live");
    assert_eq!(cfg.site.name, "Agentic Streamers by YeetLabs");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let tmp = tempdir().expect("temp dir");
    let err = load_config::<AppConfig, _>(Some(tmp.path().join("nope"))).expect_err("must fail");
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn malformed_flag_value_is_an_error() {
    let tmp = tempdir().expect("temp dir");
    fs::write(tmp.path().join("server.toml"), "[features]\nauth = \"maybe\"\n")
        .expect("write config");

    let err = load_config::<AppConfig, _>(Some(tmp.path().join("server"))).expect_err("must fail");
    assert!(matches!(err, ConfigError::Load(_)));
}
