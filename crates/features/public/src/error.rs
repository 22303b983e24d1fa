/// A specialized error enum for the public slice.
#[derive(Debug, thiserror::Error)]
pub enum PublicError {
    /// Configuration errors for the public surface.
    #[error("public config error: {0}")]
    Config(String),
    /// Internal fallback for unexpected issues or logic errors.
    #[error("internal public error: {0}")]
    Internal(String),
}
