//! Public feature slice: PUBLIC-gated, unauthenticated routes.
//!
//! Carries the read-only configuration introspection endpoint the frontend
//! bootstraps from. The wire types here are a deliberate allow-list: service
//! secrets are not serializable and can never leak through this surface.

mod error;
mod handler;

pub use crate::error::PublicError;
pub use crate::handler::{PublicConfigResponse, PublicContact, PublicLegal, PublicSite};

use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vibe_kernel::prelude::*;

/// Public feature state.
#[derive(Debug, Clone)]
pub struct Public {
    inner: Arc<PublicInner>,
}

#[derive(Debug)]
pub struct PublicInner {}

impl Public {
    #[must_use]
    pub fn new(inner: PublicInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Public {
    type Target = PublicInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Public {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the public slice.
///
/// # Errors
/// Reserved for future wiring; currently infallible.
pub fn init() -> Result<InitializedSlice, PublicError> {
    tracing::info!("Public slice initialized");

    Ok(InitializedSlice::gated(Feature::Public, Public::new(PublicInner {})))
}

/// Routes mounted under `/public`, guarded by the PUBLIC gate.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handler::config_handler))
}
