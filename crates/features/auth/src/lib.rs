//! Auth feature slice: AUTH-gated session routes.
//!
//! Provider internals (credential flows, token issuance) live with the
//! external auth service; this slice only carries the state the gated
//! routes need.

mod error;
mod handler;

pub use crate::error::AuthError;

use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vibe_kernel::prelude::*;

/// Auth feature state.
#[derive(Debug, Clone)]
pub struct Auth {
    inner: Arc<AuthInner>,
}

#[derive(Debug)]
pub struct AuthInner {
    /// Base URL of the external auth provider.
    pub auth_url: String,
}

impl Auth {
    #[must_use]
    pub fn new(inner: AuthInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Auth {
    type Target = AuthInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Auth {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the auth slice from the configuration snapshot.
///
/// # Errors
/// Reserved for future provider wiring; currently infallible.
pub fn init(config: &AppConfig) -> Result<InitializedSlice, AuthError> {
    tracing::info!(auth_url = %config.services.auth_url, "Auth slice initialized");

    let inner = AuthInner { auth_url: config.services.auth_url.clone() };

    Ok(InitializedSlice::gated(Feature::Auth, Auth::new(inner)))
}

/// Routes mounted under `/api/auth`, guarded by the AUTH gate.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handler::session_handler))
}
