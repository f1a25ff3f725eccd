//! Blogstore - blog post management backed by a single JSON document
//!
//! The collection of blog posts lives in one JSON file on disk. The record
//! store serializes every load/replace cycle so concurrent mutations never
//! interleave, the collection service implements CRUD, search, and pagination
//! on top of it, and a thin HTTP adapter exposes the whole thing over REST.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional modules
pub mod api;
pub mod service;
pub mod storage;

// Re-export commonly used items for convenience
pub use crate::core::{Config, Error, Result};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize tracing from the logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init(logging: &crate::core::config::LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format.as_str() {
        "compact" => builder.compact().init(),
        _ => builder.init(),
    }

    tracing::info!("Initializing {} v{}", NAME, VERSION);
    Ok(())
}
