//! # Album HTTP Server Module
//!
//! Axum server exposing the album record store.
//!
//! # Endpoints
//!
//! - `GET /albums` - List every album
//! - `GET /albums/:id` - Fetch one album
//! - `POST /albums` - Create an album
//! - `PUT /albums/:id` - Overwrite an album's title, artist and price
//! - `DELETE /delete/:id` - Remove an album
//! - `GET /health` - Health check

pub mod album_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
