//! Domain type definitions for the blog collection
//!
//! The record shapes here mirror the persisted document exactly: one JSON
//! array of blog objects with camelCase field names and ISO-8601 timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a stored blog record.
///
/// Assigned by the store on creation, positive, unique within the collection,
/// and immutable thereafter.
pub type BlogId = u64;

/// A single blog post as persisted in the backing document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Store-assigned identifier
    pub id: BlogId,
    /// Author of the post
    pub username: String,
    /// Caller-supplied creation timestamp
    pub date_created: DateTime<Utc>,
    /// Post body
    pub text: String,
}

/// Candidate record for creation.
///
/// Every field is optional at the binding layer so that required-field
/// validation can report all violations at once instead of failing on the
/// first missing field. A caller-supplied `id` is ignored; the store assigns
/// one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    /// Ignored on create; ids are store-assigned
    pub id: Option<BlogId>,
    /// Author of the post
    pub username: Option<String>,
    /// Creation timestamp
    pub date_created: Option<DateTime<Utc>>,
    /// Post body
    pub text: Option<String>,
}

/// One page of list results, with the totals computed over the filtered
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    /// Records in the requested page window
    pub items: Vec<Blog>,
    /// Count of records after search filtering
    pub total_items: usize,
    /// Ceiling of `total_items / page_size`
    pub total_pages: usize,
    /// 1-based page number this slice corresponds to
    pub current_page: u32,
    /// Requested page size
    pub page_size: u32,
}
