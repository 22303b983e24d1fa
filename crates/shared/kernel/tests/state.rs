use std::any::Any;
use vibe_kernel::prelude::*;

#[derive(Debug)]
struct Diagnostics {
    build: &'static str,
}

impl FeatureSlice for Diagnostics {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Metering;

impl FeatureSlice for Metering {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn state() -> AppState {
    let config = AppConfig::default();
    let mut overrides = FlagOverrides::default();
    overrides.set(Feature::Billing, true);

    AppState::builder()
        .config(config.clone())
        .features(config.resolver(ConstraintSet::defaults()))
        .overrides(overrides)
        .register_slice(InitializedSlice::ungated(Diagnostics { build: "abc123" }))
        .register_slice(InitializedSlice::gated(Feature::Usage, Metering))
        .build()
        .expect("state")
}

#[test]
fn gate_snapshot_comes_from_the_state() {
    let gate = state().gate_state();

    // Default flags leave only PUBLIC on; the BILLING override wins anyway.
    assert!(gate.allows(Feature::Public));
    assert!(gate.allows(Feature::Billing), "override must win over configuration");
    assert!(!gate.allows(Feature::Auth));
}

#[test]
fn registered_slices_are_retrievable() {
    let state = state();

    let diagnostics = state.try_get_slice::<Diagnostics>().expect("registered");
    assert_eq!(diagnostics.build, "abc123");
    assert!(state.get_slice::<Metering>().is_some());

    let err = state.try_get_slice::<UnregisteredSlice>().expect_err("never registered");
    assert!(matches!(err, StateError::MissingSlice(_)));
}

#[test]
fn slice_iteration_reports_gates() {
    let state = state();

    let mut gates: Vec<Option<Feature>> = state.slices().map(|slice| slice.gate).collect();
    gates.sort_by_key(|gate| gate.map(|flag| flag as usize));
    assert_eq!(gates, vec![None, Some(Feature::Usage)]);
}

#[derive(Debug)]
struct UnregisteredSlice;

impl FeatureSlice for UnregisteredSlice {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
