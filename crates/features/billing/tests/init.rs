use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use vibe_billing::{Billing, init};
use vibe_kernel::prelude::*;

#[test]
fn init_creates_a_gated_slice() {
    let config = AppConfig::default();
    let slice = init(&config).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Billing>());
    assert_eq!(slice.gate, Some(Feature::Billing));
}

#[test]
fn empty_secret_disables_checkout_without_failing() {
    let config = AppConfig::default();
    assert!(config.services.billing_secret_key.is_empty());

    let slice = init(&config).expect("an empty secret must not abort startup");
    let billing = slice.state.as_any().downcast_ref::<Billing>().expect("billing state");
    assert!(!billing.checkout_enabled);
    assert!(!billing.products.is_empty(), "catalog is still served");
}

#[test]
fn configured_secret_enables_checkout() {
    let mut config = AppConfig::default();
    config.services.billing_secret_key = "am_sk_test".to_owned();

    let slice = init(&config).expect("init should succeed");
    let billing = slice.state.as_any().downcast_ref::<Billing>().expect("billing state");
    assert!(billing.checkout_enabled);
}

#[tokio::test]
async fn products_endpoint_serves_the_catalog() {
    let config = AppConfig::default();
    let state = AppState::builder()
        .config(config.clone())
        .features(config.resolver(ConstraintSet::defaults()))
        .register_slice(init(&config).expect("init"))
        .build()
        .expect("state");

    let app = vibe_billing::router().split_for_parts().0.with_state(state);
    let response = app
        .oneshot(Request::get("/products").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(json["products"][0]["id"], "free");
    assert_eq!(json["products"][1]["priceCents"], 1900);
    assert_eq!(json["checkoutEnabled"], false);
}
