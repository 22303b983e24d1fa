//! Billing feature slice: BILLING-gated subscription routes.
//!
//! BILLING is declared to require AUTH in the default constraint set, so the
//! gate only admits requests when both flags are effective. Payment provider
//! internals stay external; the slice carries the product catalog and
//! whether checkout is usable at all.

mod catalog;
mod error;
mod handler;

pub use crate::catalog::Product;
pub use crate::error::BillingError;

use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vibe_kernel::prelude::*;

/// Billing feature state.
#[derive(Debug, Clone)]
pub struct Billing {
    inner: Arc<BillingInner>,
}

#[derive(Debug)]
pub struct BillingInner {
    pub products: Vec<Product>,
    /// False while the provider secret is an empty placeholder; the
    /// capability degrades instead of crashing the process.
    pub checkout_enabled: bool,
}

impl Billing {
    #[must_use]
    pub fn new(inner: BillingInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Billing {
    type Target = BillingInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Billing {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the billing slice from the configuration snapshot.
///
/// # Errors
/// Reserved for future provider wiring; currently infallible.
pub fn init(config: &AppConfig) -> Result<InitializedSlice, BillingError> {
    let checkout_enabled = !config.services.billing_secret_key.is_empty();

    if config.features.billing && !checkout_enabled {
        tracing::warn!(
            "billing is enabled but no billing secret is configured; checkout stays disabled"
        );
    }

    tracing::info!(checkout_enabled, "Billing slice initialized");

    let inner = BillingInner { products: catalog::default_products(), checkout_enabled };

    Ok(InitializedSlice::gated(Feature::Billing, Billing::new(inner)))
}

/// Routes mounted under `/api/billing`, guarded by the BILLING gate.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handler::products_handler))
}
