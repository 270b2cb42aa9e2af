//! Infrastructure layer - external collaborators.
//!
//! Holds the HTTP transport abstraction and its reqwest-backed
//! production implementation.

pub mod http;

pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};

#[cfg(test)]
pub use http::MockHttpClient;
