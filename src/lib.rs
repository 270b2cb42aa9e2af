//! Investor Login - remote-authentication client for the investor app
//!
//! This crate implements the login round trip: pre-flight credential
//! validation, the authenticated POST to the sign-in endpoint, response
//! classification and payload decoding, and the orchestration that maps
//! every outcome to a user-facing message.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface for the demo binary
//! - **config**: Application configuration and constants
//! - **domain**: Core entities (investor) and credential rules
//! - **services**: Authentication service and login orchestration
//! - **infra**: HTTP transport (trait + reqwest implementation)
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```bash
//! investor-login --email testeapple@ioasys.com.br --password 12341234
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Investor, Portfolio};
pub use errors::{AuthenticationError, TransportError, ValidationError};
pub use infra::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use services::{AuthService, AuthState, LoginOrchestrator, LoginOutcome, RemoteAuthService};
