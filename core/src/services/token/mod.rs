//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Per-shop Ed25519 key pair generation
//! - EdDSA access/refresh token pair issuance
//! - Signature and claim verification
//! - Refresh token hashing for storage

mod config;
mod key_pair;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use key_pair::generate_key_pair;
pub use service::TokenService;
