//! # ShopDev API
//!
//! HTTP surface of the shop backend: access endpoints under `/v1/api/shop`
//! and product endpoints under `/v1/api/product`.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
