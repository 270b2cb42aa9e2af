//! Domain layer - Core business entities and logic
//!
//! Contains the investor aggregate decoded from successful logins and
//! the pure credential validation rules. No infrastructure concerns.

pub mod credentials;
pub mod investor;

pub use investor::{Enterprise, Investor, Portfolio};
