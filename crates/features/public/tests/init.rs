use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use vibe_kernel::prelude::*;
use vibe_public::{Public, init};

fn state_with(config: AppConfig) -> AppState {
    AppState::builder()
        .config(config.clone())
        .features(config.resolver(ConstraintSet::defaults()))
        .build()
        .expect("state")
}

#[test]
fn init_creates_a_gated_slice() {
    let slice = init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Public>());
    assert_eq!(slice.gate, Some(Feature::Public));
}

#[tokio::test]
async fn config_endpoint_reports_site_and_enabled_features() {
    let mut config = AppConfig::default();
    config.features.auth = true;

    let app: Router =
        vibe_public::router().split_for_parts().0.with_state(state_with(config));
    let response = app
        .oneshot(Request::get("/config").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json");

    assert_eq!(json["site"]["name"], "Agentic Streamers by YeetLabs");
    assert_eq!(json["environment"], "development");
    assert_eq!(
        json["features"],
        serde_json::json!(["AUTH", "PUBLIC"]),
        "effective flags in declaration order"
    );
}

#[tokio::test]
async fn config_endpoint_never_exposes_secrets() {
    let mut config = AppConfig::default();
    config.services.billing_secret_key = "am_sk_live_super_secret".to_owned();

    let app: Router =
        vibe_public::router().split_for_parts().0.with_state(state_with(config));
    let response = app
        .oneshot(Request::get("/config").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = String::from_utf8_lossy(&bytes);
    assert!(!body.contains("am_sk_live_super_secret"));
    assert!(!body.contains("billingSecretKey") && !body.contains("billing_secret_key"));
}
