//! Domain services built atop the record store

pub mod blogs;

// Re-export main service types
pub use blogs::BlogService;

use std::sync::Arc;

/// Shared handle to the blog service, as carried in HTTP adapter state.
pub type SharedService = Arc<BlogService>;
