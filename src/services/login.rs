//! Login orchestration - validation, authentication, outcome mapping.
//!
//! Sequences the credential validator and the authentication service
//! and maps every result to a user-facing outcome. Result delivery is
//! the awaited return value, so each `do_login` call resolves exactly
//! once and sequential calls produce outcomes in call order.

use std::sync::Arc;

use crate::domain::{credentials, Investor};
use crate::services::AuthService;

/// Outcome of a single login attempt.
///
/// An attempt is wholly successful or wholly failed; validation errors
/// and authentication errors carry the message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials failed pre-flight validation; no network call was made.
    ValidationError(String),
    /// The authentication service rejected or could not complete the attempt.
    AuthenticationError(String),
    /// Authentication succeeded.
    LoggedIn(Investor),
}

/// Orchestrates the login flow for the surrounding screens.
pub struct LoginOrchestrator {
    auth_service: Arc<dyn AuthService>,
}

impl LoginOrchestrator {
    /// Create a new orchestrator over the given authentication service.
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }

    /// Run one login attempt.
    ///
    /// Validation runs first and fails fast: the authentication service
    /// is never invoked for invalid input. Every authentication failure
    /// kind collapses to the single authentication-failure message.
    pub async fn do_login(&self, email: &str, password: &str) -> LoginOutcome {
        if let Err(reason) = credentials::validate(email, password) {
            tracing::debug!(%reason, "login rejected by validation");
            return LoginOutcome::ValidationError(reason.user_message().to_string());
        }

        match self.auth_service.authenticate(email, password).await {
            Ok(investor) => LoginOutcome::LoggedIn(investor),
            Err(kind) => {
                tracing::warn!(code = kind.code(), "login failed");
                LoginOutcome::AuthenticationError(kind.user_message().to_string())
            }
        }
    }
}
