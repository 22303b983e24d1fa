//! Facade crate for the vibe-stack feature slices and shared modules.
//! Re-exports domain/kernel primitives and aggregates slice initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] once at startup to build every feature slice; extend the
//!   list as new slices appear.
//! - Nest each slice's router behind its gate in the server router.

pub use vibe_domain as domain;
use vibe_domain::config::AppConfig;
pub use vibe_kernel as kernel;

pub mod server {
    pub mod router {
        pub use vibe_kernel::server::router::system_router;
    }
}

/// Feature slice registry.
pub mod features {
    pub use vibe_auth as auth;
    pub use vibe_billing as billing;
    pub use vibe_public as public;
    pub use vibe_usage as usage;
}

/// Initialize all feature slices.
///
/// Every slice is built regardless of its flag state; flags only gate the
/// routes, not the state behind them. Flipping a flag therefore never
/// requires a restart path that re-runs initialization.
///
/// # Errors
/// Returns an error if any slice initialization fails.
pub fn init(
    config: &AppConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Authentication
    slices.push(features::auth::init(config)?);

    // Billing catalog
    slices.push(features::billing::init(config)?);

    // Usage metering
    slices.push(features::usage::init()?);

    // Public introspection
    slices.push(features::public::init()?);

    Ok(slices)
}
