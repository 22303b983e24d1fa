use serde_json::json;
use vibe_domain::config::{
    AppConfig, Environment, FeatureFlags, ServerConfig, ServiceConfig, SiteConfig,
};
use vibe_domain::features::{ConstraintSet, Feature, FeatureSet};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8787);
    assert!(server.ssl.is_none());

    let site = SiteConfig::default();
    assert_eq!(site.name, "Agentic Streamers by YeetLabs");
    assert_eq!(site.contact.company, "YeetLabs");
    assert_eq!(site.legal.privacy_policy, "/privacy");

    let services = ServiceConfig::default();
    assert_eq!(services.auth_url, "http://localhost:5173");
    assert!(services.billing_secret_key.is_empty(), "missing secret stays a placeholder");

    assert_eq!(Environment::default(), Environment::Development);
}

#[test]
fn default_flags_enable_only_public() {
    let flags = FeatureFlags::default();
    assert_eq!(flags.as_set(), FeatureSet::PUBLIC);
    assert!(flags.raw(Feature::Public));
    assert!(!flags.raw(Feature::Auth));
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 9000 },
        "site": { "name": "Test Site" },
        "features": { "auth": true, "billing": true },
        "services": { "billing_secret_key": "am_sk_test" },
        "environment": "production"
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.site.name, "Test Site");
    // Absent override fields keep their defaults at field granularity.
    assert_eq!(cfg.site.contact.email, "support@yeetlabs.ai");
    assert_eq!(cfg.services.auth_url, "http://localhost:5173");
    assert_eq!(cfg.services.billing_secret_key, "am_sk_test");
    assert!(cfg.environment.is_production());
    assert_eq!(cfg.features.as_set(), FeatureSet::AUTH | FeatureSet::BILLING | FeatureSet::PUBLIC);
}

#[test]
fn resolver_is_derived_from_the_snapshot() {
    let raw = json!({ "features": { "auth": true, "billing": true } });
    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");

    let resolver = cfg.resolver(ConstraintSet::defaults());
    assert!(resolver.is_enabled(Feature::Billing));

    // Two resolvers over the same snapshot always agree.
    let again = cfg.resolver(ConstraintSet::defaults());
    assert_eq!(resolver, again);
}
