//! Slice registry for modular features.
//! A minimal type-erased container for pre-initialized feature slice state,
//! annotated with the flag that gates the slice's routes (if any).

use crate::features::Feature;
use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for feature slice state shared across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized feature slice.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    /// The flag guarding this slice's routes; `None` for ungated slices.
    pub gate: Option<Feature>,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Wraps a concrete slice state gated by `flag`.
    pub fn gated<T: FeatureSlice>(flag: Feature, state: T) -> Self {
        Self { id: TypeId::of::<T>(), gate: Some(flag), state: Box::new(state) }
    }

    /// Wraps a concrete slice state with no gating flag.
    pub fn ungated<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), gate: None, state: Box::new(state) }
    }
}
