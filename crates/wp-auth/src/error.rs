use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login required")]
    MissingToken,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("wrong password")]
    InvalidPassword,

    #[error("random source unavailable: {0}")]
    RngUnavailable(String),
}
