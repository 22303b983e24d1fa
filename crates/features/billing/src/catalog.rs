use serde::Serialize;
use utoipa::ToSchema;

/// A subscription plan surfaced to the frontend pricing page.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Monthly price in USD cents; zero for the free tier.
    pub price_cents: u32,
    pub features: &'static [&'static str],
}

/// The shipped plan catalog. Static by design: plans change with a deploy,
/// not at runtime.
pub(crate) fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: "free",
            name: "Free",
            description: "Watch the streams and poke the public API.",
            price_cents: 0,
            features: &["3 projects", "Community support", "Public API access"],
        },
        Product {
            id: "pro",
            name: "Pro",
            description: "Full multiverse access with usage analytics.",
            price_cents: 1900,
            features: &["Unlimited projects", "Usage analytics", "Priority support"],
        },
    ]
}
