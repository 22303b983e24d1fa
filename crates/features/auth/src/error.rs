/// A specialized error enum for the auth slice.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Configuration errors for authentication.
    #[error("auth config error: {0}")]
    Config(String),
    /// Internal fallback for unexpected issues or logic errors.
    #[error("internal auth error: {0}")]
    Internal(String),
}
