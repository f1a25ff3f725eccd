//! Storage and persistence layer
//!
//! This module owns the backing JSON document. All filesystem access to the
//! collection goes through [`FileStore`]; no other component touches the
//! document path directly.

pub mod file_store;

// Re-export main storage types
pub use file_store::FileStore;
