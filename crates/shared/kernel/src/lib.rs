//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it provides layered config loading, the
//! shared application state, and the feature gate that guards every flagged
//! route.
//!
//! ## Config loading
//! ```rust,ignore
//! use vibe_kernel::config::load_config;
//! let cfg: vibe_domain::config::AppConfig = load_config::<_, &str>(None)?;
//! ```
//!
//! ## Gating a router
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use vibe_kernel::server::gate::require_feature;
//!
//! let gated = router.layer(from_fn_with_state((gate_state, Feature::Billing), require_feature));
//! ```

pub mod config;
pub mod prelude;
pub mod server;

pub use vibe_domain as domain;
