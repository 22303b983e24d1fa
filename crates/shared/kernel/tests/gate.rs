use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use tower::ServiceExt;
use vibe_kernel::prelude::*;

fn billing_app(raw: FeatureSet, overrides: FlagOverrides) -> Router {
    let gate = GateState { features: FeatureResolver::new(raw, ConstraintSet::defaults()), overrides };
    Router::new()
        .route("/api/billing/products", get(|| async { "catalog" }))
        .layer(from_fn_with_state((gate, Feature::Billing), require_feature))
}

async fn send(app: Router) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get("/api/billing/products").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn enabled_feature_lets_the_request_through() {
    let app = billing_app(FeatureSet::AUTH | FeatureSet::BILLING, FlagOverrides::default());
    let (status, body) = send(app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "catalog");
}

#[tokio::test]
async fn disabled_feature_is_rejected_with_structured_503() {
    let app = billing_app(FeatureSet::PUBLIC, FlagOverrides::default());
    let (status, body) = send(app).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("\"error\":\"Feature Disabled\""), "body: {body}");
    assert!(body.contains("BILLING"), "message must name the flag: {body}");
}

#[tokio::test]
async fn unsatisfied_prerequisite_rejects_even_when_raw_is_true() {
    // BILLING raw true but AUTH off: effective state governs the gate.
    let app = billing_app(FeatureSet::BILLING, FlagOverrides::default());
    let (status, _) = send(app).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn override_signal_wins_over_configuration() {
    let mut force_on = FlagOverrides::default();
    force_on.set(Feature::Billing, true);
    let (status, _) = send(billing_app(FeatureSet::empty(), force_on)).await;
    assert_eq!(status, StatusCode::OK, "override=true must allow the request");

    let mut force_off = FlagOverrides::default();
    force_off.set(Feature::Billing, false);
    let (status, _) = send(billing_app(FeatureSet::AUTH | FeatureSet::BILLING, force_off)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "override=false must reject");
}

#[tokio::test]
async fn both_gate_surfaces_agree() {
    // The render-side select and the request-side gate derive from the same
    // resolver, so their decisions must match for every flag.
    let gate = GateState {
        features: FeatureResolver::new(
            FeatureSet::AUTH | FeatureSet::BILLING | FeatureSet::PUBLIC,
            ConstraintSet::defaults(),
        ),
        overrides: FlagOverrides::default(),
    };

    for flag in Feature::ALL {
        let rendered = gate.features.select(flag, || "on", || "off");
        assert_eq!(rendered == "on", gate.allows(flag), "gates diverge for {flag}");
    }
}
