//! The request-side feature gate.
//!
//! Every flagged route is wrapped in [`require_feature`], which consults the
//! same [`FeatureResolver`] the render-side gate uses, so the two surfaces
//! cannot diverge. An operational override signal, when present, wins
//! outright over the configured value.

use crate::config::ConfigError;
use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::ffi::OsString;
use utoipa::ToSchema;
use vibe_domain::features::{Feature, FeatureResolver};

/// Environment variable prefix for per-flag operational overrides
/// (e.g., `VIBE_FEATURE_BILLING=false` as a kill-switch).
pub const OVERRIDE_PREFIX: &str = "VIBE_FEATURE_";

/// Per-deployment override signals, one optional boolean per flag.
///
/// Parsed once at startup; a malformed value is a fatal configuration error
/// rather than a silently ignored toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    values: [Option<bool>; Feature::ALL.len()],
}

impl FlagOverrides {
    /// Reads `VIBE_FEATURE_<FLAG>` for every flag in the closed set.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidOverride`] for any value other than the
    /// strict `true`/`false`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Parses override signals from an arbitrary variable lookup.
    ///
    /// [`FlagOverrides::from_env`] delegates here with the process
    /// environment; tests supply their own lookup instead of mutating it.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidOverride`] for any present value other
    /// than the strict `true`/`false`, including non-unicode values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut overrides = Self::default();
        for flag in Feature::ALL {
            let name = format!("{OVERRIDE_PREFIX}{flag}");
            let Some(value) = lookup(&name) else { continue };
            match value.to_str() {
                Some("true") => overrides.set(flag, true),
                Some("false") => overrides.set(flag, false),
                Some(other) => {
                    return Err(ConfigError::InvalidOverride { name, value: other.to_owned() });
                }
                None => {
                    return Err(ConfigError::InvalidOverride {
                        name,
                        value: "<non-unicode>".to_owned(),
                    });
                }
            }
        }
        Ok(overrides)
    }

    pub fn set(&mut self, flag: Feature, value: bool) {
        self.values[flag as usize] = Some(value);
    }

    #[must_use]
    pub const fn get(&self, flag: Feature) -> Option<bool> {
        self.values[flag as usize]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// Everything the request gate needs: the resolver plus override signals.
/// Copyable so each gated router captures its own tiny snapshot.
#[derive(Debug, Clone, Copy)]
pub struct GateState {
    pub features: FeatureResolver,
    pub overrides: FlagOverrides,
}

impl GateState {
    /// Override signal first, resolver second.
    #[must_use]
    pub fn allows(&self, flag: Feature) -> bool {
        self.overrides.get(flag).unwrap_or_else(|| self.features.is_enabled(flag))
    }
}

/// Structured rejection body for a disabled feature. Deliberately 503: the
/// route exists but is configurably off, which is neither 403 nor 404.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeatureDisabled {
    /// Always `"Feature Disabled"`.
    pub error: &'static str,
    /// Human-readable message naming the flag.
    pub message: String,
}

/// The rejection response for `flag`. A gate rejection is an expected
/// outcome, not a failure; it is never logged as an error.
#[must_use]
pub fn feature_disabled(flag: Feature) -> (StatusCode, Json<FeatureDisabled>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(FeatureDisabled {
            error: "Feature Disabled",
            message: format!(
                "{flag} is currently disabled. Set {OVERRIDE_PREFIX}{flag}=true to enable."
            ),
        }),
    )
}

/// Middleware guarding a flagged router.
///
/// Wire it with [`axum::middleware::from_fn_with_state`], passing the
/// `(GateState, Feature)` pair as the middleware state:
///
/// ```rust,ignore
/// router.layer(from_fn_with_state((gate, Feature::Billing), require_feature))
/// ```
pub async fn require_feature(
    State((gate, flag)): State<(GateState, Feature)>,
    request: Request,
    next: Next,
) -> Response {
    if gate.allows(flag) {
        next.run(request).await
    } else {
        tracing::debug!(flag = %flag, "request rejected by feature gate");
        feature_disabled(flag).into_response()
    }
}
