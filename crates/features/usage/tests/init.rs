use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use vibe_kernel::prelude::*;
use vibe_usage::{Usage, init};

#[test]
fn init_creates_a_gated_slice() {
    let slice = init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Usage>());
    assert_eq!(slice.gate, Some(Feature::Usage));
}

#[tokio::test]
async fn usage_summary_echoes_the_user_id() {
    let config = AppConfig::default();
    let state = AppState::builder()
        .config(config.clone())
        .features(config.resolver(ConstraintSet::defaults()))
        .build()
        .expect("state");

    let app: Router = vibe_usage::router().split_for_parts().0.with_state(state);
    let response = app
        .oneshot(Request::get("/u_42").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(json["userId"], "u_42");
    assert_eq!(json["projects"], 3);
    assert_eq!(json["apiCalls"], 1425);
}
