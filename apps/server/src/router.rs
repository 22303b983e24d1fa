use axum::Router;
use axum::middleware::from_fn_with_state;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use vibe::domain::features::Feature;
use vibe::kernel::server::gate::require_feature;
use vibe::kernel::server::state::AppState;

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: AppState) -> Router {
    let api = ApiDoc::openapi();
    let gate = state.gate_state();

    // Every flagged slice is nested behind its own request gate; the gate
    // snapshot is Copy, so each layer captures its own pair.
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(vibe::server::router::system_router())
        .nest(
            "/api/auth",
            vibe::features::auth::router()
                .layer(from_fn_with_state((gate, Feature::Auth), require_feature)),
        )
        .nest(
            "/api/billing",
            vibe::features::billing::router()
                .layer(from_fn_with_state((gate, Feature::Billing), require_feature)),
        )
        .nest(
            "/api/usage",
            vibe::features::usage::router()
                .layer(from_fn_with_state((gate, Feature::Usage), require_feature)),
        )
        .nest(
            "/public",
            vibe::features::public::router()
                .layer(from_fn_with_state((gate, Feature::Public), require_feature)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Unknown paths fall back to the SPA bundle; the index document serves
    // every client-side route.
    let static_dir = &state.config.assets.static_dir;
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new().merge(openapi_routes).merge(scalar_routes).fallback_service(spa)
}
