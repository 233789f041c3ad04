//! Error taxonomy shared by the fixture operations.

/// Failures a fixture operation can report to its caller
#[derive(Debug, thiserror::Error)]
pub enum FixtureError
{
    /// Caller supplied a value the operation refuses
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup against a directory or catalog missed
    #[error("{0}")]
    NotFound(String),

    /// Integer arithmetic left the i32 range
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// JWT payload could not be decoded
    #[error("failed to parse JWT token: {0}")]
    Token(#[from] crate::core::token::TokenError),
}

pub type FixtureResult<T> = Result<T, FixtureError>;
