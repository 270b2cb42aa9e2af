//! Application services layer - the login pipeline use cases.
//!
//! Services depend on abstractions (traits) for dependency inversion:
//! the auth service consumes the transport trait, the orchestrator
//! consumes the auth service trait.

mod auth_service;
mod login;

pub use auth_service::{AuthService, AuthState, RemoteAuthService};
pub use login::{LoginOrchestrator, LoginOutcome};

#[cfg(test)]
pub use auth_service::MockAuthService;
