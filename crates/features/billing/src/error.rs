/// A specialized error enum for the billing slice.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    /// Configuration errors for billing/subscriptions.
    #[error("billing config error: {0}")]
    Config(String),
    /// Internal fallback for unexpected issues or logic errors.
    #[error("internal billing error: {0}")]
    Internal(String),
}
