use crate::features::{ConstraintSet, Feature, FeatureResolver, FeatureSet};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration: one authoritative snapshot of site,
/// feature, service, and environment settings.
///
/// Built exactly once at startup from defaults plus overrides, read-only
/// afterwards. Every field has a defined value; there is no partially
/// populated state.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub features: FeatureFlags,
    pub services: ServiceConfig,
    pub assets: AssetsConfig,
    pub environment: Environment,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl AppConfig {
    /// Builds the resolver for this configuration snapshot. A rebuilt
    /// configuration gets a brand-new resolver; nothing is mutated in place.
    #[must_use]
    pub fn resolver(&self, constraints: ConstraintSet) -> FeatureResolver {
        FeatureResolver::new(self.features.as_set(), constraints)
    }
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Site metadata surfaced to the frontend and the public config endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub og_image: String,
    pub twitter_handle: String,
    pub contact: ContactConfig,
    pub legal: LegalConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub company: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LegalConfig {
    pub privacy_policy: String,
    pub terms_of_service: String,
}

/// The raw flag map: one boolean per flag, total by construction.
///
/// Field names are lower-case so the layered loader's environment mapping
/// works (`VIBE__FEATURES__AUTH`); the canonical upper-case identifiers live
/// in [`Feature::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Authentication system.
    pub auth: bool,
    /// Subscription and billing management (intended to require auth).
    pub billing: bool,
    /// Usage tracking and analytics (intended to require auth).
    pub usage: bool,
    /// Experimental features.
    pub experimental: bool,
    /// Public API routes.
    pub public: bool,
}

impl Default for FeatureFlags {
    /// Everything off except the public routes, matching a fresh deployment.
    fn default() -> Self {
        Self { auth: false, billing: false, usage: false, experimental: false, public: true }
    }
}

impl FeatureFlags {
    /// The flag's raw configured value, before dependency validation.
    #[must_use]
    pub const fn raw(&self, flag: Feature) -> bool {
        match flag {
            Feature::Auth => self.auth,
            Feature::Billing => self.billing,
            Feature::Usage => self.usage,
            Feature::Experimental => self.experimental,
            Feature::Public => self.public,
        }
    }

    /// The raw map as a bit set.
    #[must_use]
    pub fn as_set(&self) -> FeatureSet {
        Feature::ALL
            .into_iter()
            .filter(|flag| self.raw(*flag))
            .fold(FeatureSet::empty(), |set, flag| set | flag.bit())
    }
}

/// Third-party service endpoints and secrets.
///
/// Deliberately not serializable: values of this type must never reach a
/// public response. A missing production secret stays an empty placeholder;
/// consumers treat it as a disabled capability instead of crashing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub auth_url: String,
    pub billing_secret_key: String,
}

/// Static asset serving (SPA bundle).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub static_dir: PathBuf,
}

/// Environment classification. One canonical value instead of the
/// development/production boolean pair it replaces.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 8787, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Agentic Streamers by YeetLabs".to_owned(),
            tagline: "YeetLabs-born Rick and Morty AI streams on pump.fun".to_owned(),
            description: "Agentic Streamers by YeetLabs warps you into a neon Rick and Morty \
                          multiverse where interdimensional AI broadcasts and pump.fun market \
                          chaos converge in real time."
                .to_owned(),
            og_image: "/og-image.png".to_owned(),
            twitter_handle: "yeetlabs".to_owned(),
            contact: ContactConfig::default(),
            legal: LegalConfig::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "support@yeetlabs.ai".to_owned(),
            company: "YeetLabs".to_owned(),
            address: "Quantum Hub, Dimension C-137".to_owned(),
        }
    }
}

impl Default for LegalConfig {
    fn default() -> Self {
        Self { privacy_policy: "/privacy".to_owned(), terms_of_service: "/terms".to_owned() }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { auth_url: "http://localhost:5173".to_owned(), billing_secret_key: String::new() }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { static_dir: PathBuf::from("public") }
    }
}
