/// A specialized error enum for the usage slice.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// Configuration errors for usage tracking.
    #[error("usage config error: {0}")]
    Config(String),
    /// Internal fallback for unexpected issues or logic errors.
    #[error("internal usage error: {0}")]
    Internal(String),
}
