pub mod auth;
pub mod cors;

pub use auth::{Authenticated, Authentication, SessionVerifier, AUTHORIZATION_HEADER, CLIENT_ID_HEADER};
pub use cors::create_cors;
