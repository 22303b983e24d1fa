pub mod gate;
mod health;
pub mod router;
pub mod state;

pub use gate::{FlagOverrides, GateState, require_feature};
pub use state::{AppState, AppStateBuilder, StateError};
