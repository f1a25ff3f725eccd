//! JSON-document record store
//!
//! The collection is persisted as one JSON array and always read or written
//! in full. Writers hold the store's write lock across the whole
//! load-through-replace cycle, so two concurrent mutations can never
//! interleave; readers share the read lock. Replacement itself is atomic at
//! the filesystem level (temp sibling + rename), so an interrupted write
//! leaves the prior committed document intact.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::core::config::StorageConfig;
use crate::core::error::{Error, Result, StorageError};
use crate::core::types::Blog;

/// Record store persisting the blog collection as a single JSON document.
pub struct FileStore {
    /// Path of the backing document
    path: PathBuf,
    /// Serializes access to the document. Mutations hold the write half
    /// across load-through-replace; read-only loads share the read half.
    lock: RwLock<()>,
}

impl FileStore {
    /// Create a store over the document path from configuration.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            path: config.data_file.clone(),
            lock: RwLock::new(()),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection.
    ///
    /// A missing file fails with `NotFound`. An existing but blank file is an
    /// empty collection, not an error. Content that does not parse into the
    /// expected shape fails with `Corruption`.
    pub async fn load(&self) -> Result<Vec<Blog>> {
        let _guard = self.lock.read().await;
        self.read_document().await
    }

    /// Serialize the given collection and replace the document contents
    /// entirely.
    pub async fn replace(&self, blogs: &[Blog]) -> Result<()> {
        let _guard = self.lock.write().await;
        self.write_document(blogs).await
    }

    /// Run one load-modify-replace transaction under the write lock.
    ///
    /// `f` mutates the loaded collection in place. If it returns an error the
    /// document is not rewritten, so a failed mutation leaves the committed
    /// state untouched.
    pub async fn update<R>(&self, f: impl FnOnce(&mut Vec<Blog>) -> Result<R>) -> Result<R> {
        let _guard = self.lock.write().await;
        let mut blogs = self.read_document().await?;
        let out = f(&mut blogs)?;
        self.write_document(&blogs).await?;
        Ok(out)
    }

    /// Explicit store bootstrap: write an empty collection if and only if the
    /// document does not exist yet.
    ///
    /// Mutating operations never create the document implicitly; a missing
    /// document fails `NotFound` until this has been called.
    pub async fn initialize(&self) -> Result<()> {
        let _guard = self.lock.write().await;
        if fs::try_exists(&self.path).await.map_err(StorageError::DiskIo)? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(StorageError::DiskIo)?;
        }
        self.write_document(&[]).await
    }

    async fn read_document(&self) -> Result<Vec<Blog>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::not_found(format!(
                    "blog document {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(StorageError::DiskIo(e).into()),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| StorageError::Corruption(e.to_string()).into())
    }

    async fn write_document(&self, blogs: &[Blog]) -> Result<()> {
        let bytes = serde_json::to_vec(blogs).map_err(|e| {
            StorageError::DiskIo(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        // Write a temp sibling, flush it to disk, then rename over the
        // document. Rename within one directory is the atomicity boundary.
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).await.map_err(StorageError::DiskIo)?;
        file.write_all(&bytes).await.map_err(StorageError::DiskIo)?;
        file.flush().await.map_err(StorageError::DiskIo)?;
        file.sync_all().await.map_err(StorageError::DiskIo)?;
        drop(file);
        fs::rename(&tmp, &self.path)
            .await
            .map_err(StorageError::DiskIo)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> FileStore {
        let config = StorageConfig {
            data_file: dir.path().join("blogs.json"),
        };
        FileStore::new(&config)
    }

    fn sample_blog(id: u64) -> Blog {
        Blog {
            id,
            username: format!("author{}", id),
            date_created: Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap(),
            text: format!("post number {}", id),
        }
    }

    #[tokio::test]
    async fn test_load_missing_document_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_load_blank_document_is_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        std::fs::write(store.path(), "  \n\t ").unwrap();

        let blogs = store.load().await.unwrap();
        assert!(blogs.is_empty());
    }

    #[tokio::test]
    async fn test_load_unparseable_document_is_corruption() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        std::fs::write(store.path(), "{ not a blog array").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Storage(StorageError::Corruption(_))
        ));
    }

    #[tokio::test]
    async fn test_replace_load_round_trip_is_content_equivalent() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.initialize().await.unwrap();
        store
            .replace(&[sample_blog(1), sample_blog(2)])
            .await
            .unwrap();

        let before = std::fs::read(store.path()).unwrap();
        let loaded = store.load().await.unwrap();
        store.replace(&loaded).await.unwrap();
        let after = std::fs::read(store.path()).unwrap();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_document_untouched() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.initialize().await.unwrap();
        store.replace(&[sample_blog(1)]).await.unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let result: Result<()> = store
            .update(|blogs| {
                blogs.clear();
                Err(Error::invalid_argument("rejected mid-transaction"))
            })
            .await;

        assert!(result.is_err());
        let after = std::fs::read(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_initialize_does_not_clobber_existing_document() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.initialize().await.unwrap();
        store.replace(&[sample_blog(7)]).await.unwrap();

        store.initialize().await.unwrap();

        let blogs = store.load().await.unwrap();
        assert_eq!(blogs, vec![sample_blog(7)]);
    }

    #[tokio::test]
    async fn test_initialize_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            data_file: dir.path().join("nested/data/blogs.json"),
        };
        let store = FileStore::new(&config);

        store.initialize().await.unwrap();

        assert!(store.load().await.unwrap().is_empty());
    }
}
