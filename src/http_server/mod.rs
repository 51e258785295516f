//! # HTTP Server Module
//!
//! Axum server exposing the record collections as JSON resources.
//!
//! # Endpoints
//!
//! - `/` - Welcome message
//! - `/health` - Health check
//! - `/carbon_emissions[/:id]` - Carbon emission records
//! - `/water_wastage[/:id]` - Water wastage records
//! - `/deforestation_impact[/:id]` - Deforestation impact records

pub mod config;
pub mod errors;
pub mod record_routes;
pub mod root_routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
