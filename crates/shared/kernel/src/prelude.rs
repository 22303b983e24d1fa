//! Convenience re-exports for slice and application crates.

pub use crate::config::{ConfigError, load_config};
pub use crate::server::gate::{FlagOverrides, GateState, require_feature};
pub use crate::server::state::{AppState, AppStateBuilder, StateError};
pub use vibe_domain::config::AppConfig;
pub use vibe_domain::features::{ConstraintSet, Feature, FeatureResolver, FeatureSet};
pub use vibe_domain::registry::{FeatureSlice, InitializedSlice};
