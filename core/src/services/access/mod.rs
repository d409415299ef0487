//! Access service module
//!
//! Shop sign-up, login and logout, refresh-token rotation with reuse
//! detection, and access-token authentication for request middleware.

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AccessServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::AccessService;
