//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication endpoint
// =============================================================================

/// Default sign-in endpoint URL
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://empresas.ioasys.com.br/api/v1/users/auth/sign_in";

/// Default request timeout in seconds (expiry is reported as connectivity)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Session headers
// =============================================================================

/// Response header carrying the session access token
pub const HEADER_ACCESS_TOKEN: &str = "access-token";

/// Response header carrying the client token
pub const HEADER_CLIENT: &str = "client";

/// Response header carrying the user identifier
pub const HEADER_UID: &str = "uid";

// =============================================================================
// User-facing messages
// =============================================================================

/// Shown when the email field is left empty
pub const MSG_EMPTY_EMAIL: &str = "E-mail não pode ser vazio.";

/// Shown when the email does not have a local@domain.tld shape
pub const MSG_INVALID_EMAIL: &str = "E-mail inválido.";

/// Shown when the password field is left empty
pub const MSG_EMPTY_PASSWORD: &str = "Password não pode ser vazio.";

/// Shown when the password contains whitespace
pub const MSG_PASSWORD_WITH_WHITESPACE: &str = "Password não pode conter espaços.";

/// Shown for every server-side authentication failure
pub const MSG_AUTHENTICATION_FAILURE: &str = "Falha na autenticação.";
