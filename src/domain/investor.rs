//! Investor domain entity and related types.
//!
//! All types here are immutable value objects decoded from the
//! authentication success payload. An `Investor` only ever exists as
//! the result of a complete, well-formed decode; partial payloads fail
//! decoding and never produce a value.

use serde::{Deserialize, Serialize};

/// An enterprise held in an investor's portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    pub id: i64,
    pub enterprise_name: String,
    pub description: String,
    pub city: String,
    pub country: String,
    /// URL path, may be empty.
    pub photo: String,
}

/// Portfolio summary nested in the investor payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub enterprises_number: i64,
    pub enterprises: Vec<Enterprise>,
}

/// Authenticated investor profile, decoded from the login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: i64,
    pub investor_name: String,
    pub email: String,
    pub city: String,
    pub country: String,
    pub balance: f64,
    /// URL path, may be empty.
    pub photo: String,
    pub portfolio: Portfolio,
    pub portfolio_value: f64,
    pub first_access: bool,
    pub super_angel: bool,
}

impl Investor {
    /// Decode an investor from raw response bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
