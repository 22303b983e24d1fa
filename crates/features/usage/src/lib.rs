//! Usage tracking feature slice: USAGE-gated analytics routes.
//!
//! USAGE requires AUTH in the default constraint set. Metering storage is an
//! external collaborator; the routes currently serve the fixed figures the
//! frontend dashboard is built against.

mod error;
mod handler;

pub use crate::error::UsageError;

use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vibe_kernel::prelude::*;

/// Usage feature state.
#[derive(Debug, Clone)]
pub struct Usage {
    inner: Arc<UsageInner>,
}

#[derive(Debug)]
pub struct UsageInner {}

impl Usage {
    #[must_use]
    pub fn new(inner: UsageInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Usage {
    type Target = UsageInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Usage {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the usage slice.
///
/// # Errors
/// Reserved for future metering wiring; currently infallible.
pub fn init() -> Result<InitializedSlice, UsageError> {
    tracing::info!("Usage slice initialized");

    Ok(InitializedSlice::gated(Feature::Usage, Usage::new(UsageInner {})))
}

/// Routes mounted under `/api/usage`, guarded by the USAGE gate.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handler::usage_handler))
}
