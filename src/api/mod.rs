//! # API Module
//!
//! This module provides the HTTP interface for the blog service.
//!
//! ## Endpoints Overview
//!
//! ### Blog Operations
//! - `POST /blogs` - Create a blog (id assigned by the store)
//! - `GET /blogs` - List blogs with search and pagination
//! - `GET /blogs/{id}` - Get blog by id
//! - `PUT /blogs/{id}` - Replace the mutable fields of a blog
//! - `DELETE /blogs/{id}` - Delete blog
//!
//! ### System Essentials
//! - `GET /health` - Health check
//!
//! The adapter is a thin translation layer: it binds requests, calls the
//! [`BlogService`](crate::service::BlogService), and maps error kinds to
//! status codes (`NotFound` to 404, invalid input and validation to 400,
//! everything else to 500). No business rules live here.

pub mod handlers;
pub mod server;

// Re-export commonly used items
pub use handlers::*;
pub use server::{create_app, start_server};
