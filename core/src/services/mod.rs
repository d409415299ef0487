//! Business services containing domain logic and use cases.

pub mod access;
pub mod product;
pub mod token;

pub use access::{AccessService, AccessServiceConfig};
pub use product::{ProductFactory, ProductService};
pub use token::{TokenService, TokenServiceConfig};
