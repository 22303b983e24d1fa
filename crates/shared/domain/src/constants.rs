//! Canonical string identifiers shared across the workspace.

/// Feature flag names, upper-case on every wire and in every override
/// variable. These are the closed, versioned identifiers from the public
/// interface contract.
pub const AUTH: &str = "AUTH";
pub const BILLING: &str = "BILLING";
pub const USAGE: &str = "USAGE";
pub const EXPERIMENTAL: &str = "EXPERIMENTAL";
pub const PUBLIC: &str = "PUBLIC";

/// OpenAPI tags.
pub const SYSTEM_TAG: &str = "System";
pub const AUTH_TAG: &str = "Auth";
pub const BILLING_TAG: &str = "Billing";
pub const USAGE_TAG: &str = "Usage";
pub const PUBLIC_TAG: &str = "Public";
