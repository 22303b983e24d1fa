use crate::constants::{AUTH, BILLING, EXPERIMENTAL, PUBLIC, USAGE};
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Represents a set of feature flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const AUTH = 1 << 0;
        const BILLING = 1 << 1;
        const USAGE = 1 << 2;
        const EXPERIMENTAL = 1 << 3;
        const PUBLIC = 1 << 4;

        const ALL = Self::AUTH.bits()
            | Self::BILLING.bits()
            | Self::USAGE.bits()
            | Self::EXPERIMENTAL.bits()
            | Self::PUBLIC.bits();
    }
}

/// A single named capability switch.
///
/// The set is closed and versioned: adding a variant is a breaking interface
/// change that every gate, document, and override variable must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Feature {
    Auth,
    Billing,
    Usage,
    Experimental,
    Public,
}

impl Feature {
    /// All flags in declaration order. Introspection output follows it.
    pub const ALL: [Self; 5] =
        [Self::Auth, Self::Billing, Self::Usage, Self::Experimental, Self::Public];

    /// The flag's bit in a [`FeatureSet`].
    #[must_use]
    pub const fn bit(self) -> FeatureSet {
        match self {
            Self::Auth => FeatureSet::AUTH,
            Self::Billing => FeatureSet::BILLING,
            Self::Usage => FeatureSet::USAGE,
            Self::Experimental => FeatureSet::EXPERIMENTAL,
            Self::Public => FeatureSet::PUBLIC,
        }
    }

    /// Canonical upper-case identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auth => AUTH,
            Self::Billing => BILLING,
            Self::Usage => USAGE,
            Self::Experimental => EXPERIMENTAL,
            Self::Public => PUBLIC,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strings entering at process boundaries are validated against the closed
/// set; a typo fails loudly instead of pretending the feature is off.
impl FromStr for Feature {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.name() == s)
            .ok_or_else(|| FeatureError::UnknownFlag { name: s.to_owned() })
    }
}

/// Errors raised while validating the flag graph. All of them are
/// configuration errors: fatal at startup, never recoverable per request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    #[error("unknown feature flag `{name}`")]
    UnknownFlag { name: String },
    #[error("feature {subject} is the subject of more than one constraint")]
    DuplicateConstraint { subject: Feature },
    #[error("constraint for {subject} names a prerequisite outside the flag set")]
    UnknownPrerequisite { subject: Feature },
    #[error("constraint cycle: {subject} directly or transitively requires itself")]
    ConstraintCycle { subject: Feature },
}

/// A one-directional "requires" declaration: `subject` is only effective
/// while every flag in `requires` is effective too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureConstraint {
    pub subject: Feature,
    pub requires: FeatureSet,
}

impl FeatureConstraint {
    #[must_use]
    pub const fn new(subject: Feature, requires: FeatureSet) -> Self {
        Self { subject, requires }
    }
}

/// The validated prerequisite graph.
///
/// Can only be built through [`ConstraintSet::new`] (which rejects duplicate
/// subjects, foreign prerequisite bits, and cycles) or the known-acyclic
/// [`ConstraintSet::defaults`], so a value of this type is always consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintSet {
    requires: [FeatureSet; Feature::ALL.len()],
}

impl Default for ConstraintSet {
    /// No declared constraints; every flag stands alone.
    fn default() -> Self {
        Self { requires: [FeatureSet::empty(); Feature::ALL.len()] }
    }
}

impl ConstraintSet {
    /// Builds a constraint set from declarations, validating the whole graph.
    ///
    /// # Errors
    /// * [`FeatureError::DuplicateConstraint`] if a flag is the subject of two
    ///   declarations.
    /// * [`FeatureError::UnknownPrerequisite`] if a prerequisite bit is not a
    ///   known flag.
    /// * [`FeatureError::ConstraintCycle`] if a flag directly or transitively
    ///   requires itself.
    pub fn new(
        constraints: impl IntoIterator<Item = FeatureConstraint>,
    ) -> Result<Self, FeatureError> {
        let mut requires = [FeatureSet::empty(); Feature::ALL.len()];
        let mut subjects = FeatureSet::empty();

        for constraint in constraints {
            let bit = constraint.subject.bit();
            if subjects.contains(bit) {
                return Err(FeatureError::DuplicateConstraint { subject: constraint.subject });
            }
            if !FeatureSet::ALL.contains(constraint.requires) {
                return Err(FeatureError::UnknownPrerequisite { subject: constraint.subject });
            }
            subjects |= bit;
            requires[constraint.subject as usize] = constraint.requires;
        }

        let set = Self { requires };
        set.check_cycles()?;
        Ok(set)
    }

    /// The constraints the product intends: billing and usage build on auth.
    #[must_use]
    pub const fn defaults() -> Self {
        let mut requires = [FeatureSet::empty(); Feature::ALL.len()];
        requires[Feature::Billing as usize] = FeatureSet::AUTH;
        requires[Feature::Usage as usize] = FeatureSet::AUTH;
        Self { requires }
    }

    /// Prerequisites declared for `flag` (empty when unconstrained).
    #[must_use]
    pub const fn requires(&self, flag: Feature) -> FeatureSet {
        self.requires[flag as usize]
    }

    fn check_cycles(&self) -> Result<(), FeatureError> {
        for flag in Feature::ALL {
            self.walk(flag, FeatureSet::empty())?;
        }
        Ok(())
    }

    fn walk(&self, flag: Feature, visiting: FeatureSet) -> Result<(), FeatureError> {
        if visiting.contains(flag.bit()) {
            return Err(FeatureError::ConstraintCycle { subject: flag });
        }
        let visiting = visiting | flag.bit();
        for dep in Feature::ALL {
            if self.requires(flag).contains(dep.bit()) {
                self.walk(dep, visiting)?;
            }
        }
        Ok(())
    }
}

/// The single authoritative yes/no answer consumed by every gate.
///
/// Holds one immutable snapshot of raw flag values plus a validated
/// constraint graph. Resolution is pure and synchronous; two calls with the
/// same resolver always agree. Rebuilding the configuration means building a
/// brand-new resolver, never mutating this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureResolver {
    raw: FeatureSet,
    constraints: ConstraintSet,
}

impl FeatureResolver {
    #[must_use]
    pub const fn new(raw: FeatureSet, constraints: ConstraintSet) -> Self {
        Self { raw, constraints }
    }

    /// The flag's configured value, before dependency validation.
    #[must_use]
    pub const fn raw(&self, flag: Feature) -> bool {
        self.raw.contains(flag.bit())
    }

    /// Effective state: raw value AND every prerequisite's effective state,
    /// applied transitively.
    #[must_use]
    pub fn is_enabled(&self, flag: Feature) -> bool {
        self.effective(flag, FeatureSet::empty())
    }

    /// All effectively enabled flags.
    #[must_use]
    pub fn enabled(&self) -> FeatureSet {
        Feature::ALL
            .into_iter()
            .filter(|flag| self.is_enabled(*flag))
            .fold(FeatureSet::empty(), |set, flag| set | flag.bit())
    }

    /// Names of the enabled flags, in declaration order. For diagnostics and
    /// the public introspection endpoint; the order carries no meaning.
    #[must_use]
    pub fn enabled_names(&self) -> Vec<&'static str> {
        Feature::ALL
            .into_iter()
            .filter(|flag| self.is_enabled(*flag))
            .map(Feature::name)
            .collect()
    }

    /// Render-side gate: produces exactly one of the two alternatives.
    /// Re-evaluated on every call, so it can never cache a stale decision.
    pub fn select<T>(&self, flag: Feature, on: impl FnOnce() -> T, off: impl FnOnce() -> T) -> T {
        if self.is_enabled(flag) { on() } else { off() }
    }

    fn effective(&self, flag: Feature, visiting: FeatureSet) -> bool {
        // Unreachable on a validated graph; treat as disabled, never recurse.
        if visiting.contains(flag.bit()) {
            return false;
        }
        if !self.raw.contains(flag.bit()) {
            return false;
        }
        let visiting = visiting | flag.bit();
        Feature::ALL.into_iter().all(|dep| {
            !self.constraints.requires(flag).contains(dep.bit()) || self.effective(dep, visiting)
        })
    }
}
