use crate::{Billing, Product};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;
use vibe_domain::constants::BILLING_TAG;
use vibe_kernel::prelude::AppState;

/// Plan catalog response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductsResponse {
    products: Vec<Product>,
    /// False while the billing provider secret is missing
    checkout_enabled: bool,
}

#[utoipa::path(
    get,
    path = "/products",
    responses((status = OK, description = "Available subscription plans", body = ProductsResponse)),
    tag = BILLING_TAG,
)]
pub(crate) async fn products_handler(State(state): State<AppState>) -> Response {
    match state.try_get_slice::<Billing>() {
        Ok(billing) => Json(ProductsResponse {
            products: billing.products.clone(),
            checkout_enabled: billing.checkout_enabled,
        })
        .into_response(),
        Err(error) => {
            tracing::error!(%error, "billing slice missing from state");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
