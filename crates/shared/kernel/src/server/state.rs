use crate::server::gate::{FlagOverrides, GateState};
use axum::extract::FromRef;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::ops::Deref;
use std::sync::Arc;
use vibe_domain::config::AppConfig;
use vibe_domain::features::FeatureResolver;
use vibe_domain::registry::{FeatureSlice, InitializedSlice};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("state validation error: {0}")]
    Validation(&'static str),
    #[error("state missing feature slice: {0}")]
    MissingSlice(&'static str),
}

/// Read-only shared state behind every request handler.
///
/// All fields are immutable after [`AppStateBuilder::build`]; concurrent
/// reads need no locking. Rebuilding configuration means building a whole
/// new state and swapping the reference.
#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
    pub features: FeatureResolver,
    pub overrides: FlagOverrides,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner
            .slices
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, StateError> {
        self.get_slice::<T>()
            .ok_or_else(|| StateError::MissingSlice(std::any::type_name::<T>()))
    }

    /// The resolver/override pair the request gates run on.
    #[must_use]
    pub fn gate_state(&self) -> GateState {
        GateState { features: self.inner.features, overrides: self.inner.overrides }
    }

    /// Iterates over registered slices (for diagnostics).
    pub fn slices(&self) -> impl Iterator<Item = &InitializedSlice> {
        self.inner.slices.values()
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<AppState> for FeatureResolver {
    fn from_ref(state: &AppState) -> Self {
        state.inner.features
    }
}

impl FromRef<AppState> for GateState {
    fn from_ref(state: &AppState) -> Self {
        state.gate_state()
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    features: Option<FeatureResolver>,
    overrides: FlagOverrides,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn features(mut self, features: FeatureResolver) -> Self {
        self.features = Some(features);
        self
    }

    #[must_use]
    pub fn overrides(mut self, overrides: FlagOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// Finalizes the immutable state.
    ///
    /// # Errors
    /// Returns [`StateError::Validation`] if the configuration or the
    /// resolver was not provided.
    pub fn build(self) -> Result<AppState, StateError> {
        let config = self.config.ok_or(StateError::Validation("AppConfig not provided"))?;
        let features =
            self.features.ok_or(StateError::Validation("FeatureResolver not provided"))?;

        Ok(AppState {
            inner: Arc::new(AppStateInner {
                config,
                features,
                overrides: self.overrides,
                slices: self.slices,
            }),
        })
    }
}
