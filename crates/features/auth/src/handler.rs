use crate::Auth;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;
use vibe_domain::constants::AUTH_TAG;
use vibe_kernel::prelude::AppState;

/// Session state for the caller
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionResponse {
    /// Whether a provider session is attached to the request
    authenticated: bool,
    /// Where to start a sign-in flow
    sign_in_url: String,
}

#[utoipa::path(
    get,
    path = "/session",
    responses((status = OK, description = "Current session state", body = SessionResponse)),
    tag = AUTH_TAG,
)]
pub(crate) async fn session_handler(State(state): State<AppState>) -> Response {
    match state.try_get_slice::<Auth>() {
        Ok(auth) => {
            // Session validation is the provider's job; without one the
            // caller is anonymous.
            let body = SessionResponse {
                authenticated: false,
                sign_in_url: format!("{}/sign-in", auth.auth_url.trim_end_matches('/')),
            };
            Json(body).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "auth slice missing from state");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
