//! Explore Service Library
//!
//! Serves the discover/explore grid layout for the Stan platform. Clients post the
//! trending posts they fetched and get back the ordered tile plan to render.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers for layout, columns and health
//! - `error`: Error types and HTTP mapping
//! - `config`: Configuration management
//! - `metrics`: Prometheus collectors and the `/metrics` endpoint

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;

pub use config::Config;
pub use error::{AppError, Result};
pub use handlers::{configure_routes, ExploreState};
