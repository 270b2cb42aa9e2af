//! Centralized error handling.
//!
//! Provides the closed error sets for the login pipeline:
//! pre-network credential validation failures, transport failures,
//! and the classified authentication outcomes.

use thiserror::Error;

/// Classified outcome of a failed authentication attempt.
///
/// Exactly one kind is produced per failed attempt. The set is closed:
/// unknown server behavior lands in `Generic`, never in a panic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationError {
    /// Transport-level failure, no HTTP response was received.
    #[error("could not reach the authentication endpoint")]
    Connectivity,

    /// HTTP 200 with a body that does not decode into an Investor.
    #[error("authentication response could not be decoded")]
    InvalidData,

    /// HTTP 401.
    #[error("credentials were rejected")]
    Unauthorized,

    /// HTTP 400.
    #[error("authentication request was malformed")]
    BadRequest,

    /// HTTP 403.
    #[error("access denied")]
    Forbidden,

    /// Any other HTTP status.
    #[error("unexpected authentication response")]
    Generic,
}

impl AuthenticationError {
    /// Get error code for logging
    pub fn code(&self) -> &'static str {
        match self {
            AuthenticationError::Connectivity => "CONNECTIVITY",
            AuthenticationError::InvalidData => "INVALID_DATA",
            AuthenticationError::Unauthorized => "UNAUTHORIZED",
            AuthenticationError::BadRequest => "BAD_REQUEST",
            AuthenticationError::Forbidden => "FORBIDDEN",
            AuthenticationError::Generic => "GENERIC",
        }
    }

    /// Get user-facing message.
    ///
    /// All kinds collapse to the single authentication-failure message
    /// shown on the login screen; the kind is only distinguished in logs.
    pub fn user_message(&self) -> &'static str {
        crate::config::MSG_AUTHENTICATION_FAILURE
    }
}

/// Credential validation failures, produced before any network call.
///
/// Mutually exclusive per validation pass; the variant order matches
/// the precedence order in which the rules are evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email is empty")]
    EmptyEmail,

    #[error("email is not a valid address")]
    InvalidEmail,

    #[error("password is empty")]
    EmptyPassword,

    #[error("password contains whitespace")]
    PasswordWithWhitespace,
}

impl ValidationError {
    /// Get user-facing message for the login screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyEmail => crate::config::MSG_EMPTY_EMAIL,
            ValidationError::InvalidEmail => crate::config::MSG_INVALID_EMAIL,
            ValidationError::EmptyPassword => crate::config::MSG_EMPTY_PASSWORD,
            ValidationError::PasswordWithWhitespace => {
                crate::config::MSG_PASSWORD_WITH_WHITESPACE
            }
        }
    }
}

/// Transport-level failure: the POST never produced an HTTP response.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Underlying HTTP client failure (DNS, TLS, timeout, connection).
    #[error("transport failure: {0}")]
    Http(#[from] reqwest::Error),

    /// Simulated or otherwise described failure.
    #[error("transport failure: {0}")]
    Failed(String),
}

impl TransportError {
    pub fn failed(reason: impl Into<String>) -> Self {
        TransportError::Failed(reason.into())
    }
}
