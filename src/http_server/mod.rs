//! # HTTP Server Module
//!
//! Axum front end for the record service.
//!
//! # Endpoints
//!
//! - `GET /users` - List every user
//! - `GET /users/search?city=` - Users in a city, case-insensitive
//! - `GET /users/:id` - Single user
//! - `POST /users` - Create a user
//!
//! Every response carries `X-API-Version` and `X-Developer`.

pub mod config;
pub mod errors;
pub mod response;
pub mod server;
pub mod user_routes;

pub use config::{HttpServerConfig, ResponseHeaders};
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
