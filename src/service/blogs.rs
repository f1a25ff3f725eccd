//! Blog collection service
//!
//! CRUD, search, and pagination semantics over the record store. Identifier
//! assignment and every mutation run as one load-modify-replace transaction
//! inside [`FileStore::update`], so service operations are atomic with
//! respect to each other.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::core::types::{Blog, BlogDraft, BlogId, BlogPage};
use crate::storage::FileStore;

/// Page number used when the caller leaves it unspecified.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Page size used when the caller leaves it unspecified.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Domain operations over the blog collection.
pub struct BlogService {
    store: Arc<FileStore>,
}

impl BlogService {
    /// Create a service over the given store.
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }

    /// List blogs with optional case-insensitive search and pagination.
    ///
    /// A blank search term matches everything. Out-of-range pages yield an
    /// empty item slice; a page number or page size below 1 is an invalid
    /// argument.
    pub async fn list(
        &self,
        search_term: Option<&str>,
        page_number: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<BlogPage> {
        let page_number = page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_number < 1 {
            return Err(Error::invalid_argument("pageNumber must be at least 1"));
        }
        if page_size < 1 {
            return Err(Error::invalid_argument("pageSize must be at least 1"));
        }

        let blogs = self.store.load().await?;
        let filtered: Vec<Blog> = match search_term.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                blogs
                    .into_iter()
                    .filter(|b| {
                        b.username.to_lowercase().contains(&term)
                            || b.text.to_lowercase().contains(&term)
                    })
                    .collect()
            }
            None => blogs,
        };

        let total_items = filtered.len();
        let size = page_size as usize;
        let total_pages = (total_items + size - 1) / size;
        let start = (page_number as usize - 1).saturating_mul(size);
        let items = if start >= total_items {
            Vec::new()
        } else {
            filtered.into_iter().skip(start).take(size).collect()
        };

        Ok(BlogPage {
            items,
            total_items,
            total_pages,
            current_page: page_number,
            page_size,
        })
    }

    /// Fetch a single blog by id.
    pub async fn get(&self, id: BlogId) -> Result<Blog> {
        if id < 1 {
            return Err(Error::invalid_argument("id must be a positive integer"));
        }

        let blogs = self.store.load().await?;
        blogs
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::not_found(format!("blog with id {}", id)))
    }

    /// Validate a draft and append it to the collection with a freshly
    /// assigned id.
    ///
    /// The id is one greater than the current maximum (ids need not be
    /// contiguous after deletions), or 1 for an empty collection. Validation
    /// failures are reported before the store is touched.
    pub async fn create(&self, draft: BlogDraft) -> Result<Blog> {
        let (username, date_created, text) = validate_draft(&draft)?;

        let blog = self
            .store
            .update(move |blogs| {
                let id = blogs.iter().map(|b| b.id).max().unwrap_or(0) + 1;
                let blog = Blog {
                    id,
                    username,
                    date_created,
                    text,
                };
                blogs.push(blog.clone());
                Ok(blog)
            })
            .await?;

        debug!(id = blog.id, "created blog");
        Ok(blog)
    }

    /// Overwrite the mutable fields of an existing blog.
    ///
    /// The id never changes; the candidate must carry the same id as the path
    /// it is addressed to.
    pub async fn update(&self, id: BlogId, candidate: Blog) -> Result<()> {
        if id < 1 {
            return Err(Error::invalid_argument("id must be a positive integer"));
        }
        if candidate.id != id {
            return Err(Error::invalid_argument(format!(
                "body id {} does not match path id {}",
                candidate.id, id
            )));
        }

        let mut violations = Vec::new();
        if candidate.username.trim().is_empty() {
            violations.push("username".to_string());
        }
        if candidate.text.trim().is_empty() {
            violations.push("text".to_string());
        }
        if !violations.is_empty() {
            return Err(Error::validation(violations));
        }

        self.store
            .update(move |blogs| {
                let blog = blogs
                    .iter_mut()
                    .find(|b| b.id == id)
                    .ok_or_else(|| Error::not_found(format!("blog with id {}", id)))?;
                blog.username = candidate.username;
                blog.date_created = candidate.date_created;
                blog.text = candidate.text;
                Ok(())
            })
            .await?;

        debug!(id, "updated blog");
        Ok(())
    }

    /// Remove a blog from the collection.
    pub async fn delete(&self, id: BlogId) -> Result<()> {
        if id < 1 {
            return Err(Error::invalid_argument("id must be a positive integer"));
        }

        self.store
            .update(move |blogs| match blogs.iter().position(|b| b.id == id) {
                Some(index) => {
                    blogs.remove(index);
                    Ok(())
                }
                None => Err(Error::not_found(format!("blog with id {}", id))),
            })
            .await?;

        debug!(id, "deleted blog");
        Ok(())
    }
}

/// Check the required fields of a create candidate, collecting every
/// violation rather than stopping at the first.
fn validate_draft(draft: &BlogDraft) -> Result<(String, DateTime<Utc>, String)> {
    let username = draft.username.clone().filter(|u| !u.trim().is_empty());
    let text = draft.text.clone().filter(|t| !t.trim().is_empty());

    let mut violations = Vec::new();
    if username.is_none() {
        violations.push("username".to_string());
    }
    if draft.date_created.is_none() {
        violations.push("dateCreated".to_string());
    }
    if text.is_none() {
        violations.push("text".to_string());
    }

    match (username, draft.date_created, text) {
        (Some(username), Some(date_created), Some(text)) => Ok((username, date_created, text)),
        _ => Err(Error::validation(violations)),
    }
}
