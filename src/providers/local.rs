//! Local filesystem object store
//!
//! Development and test counterpart of the Cloudinary backend. Files land
//! under a configured directory and the returned URL is a `file://` path.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::providers::object_store::ObjectStore;

/// Filesystem-backed object store
pub struct LocalObjectStore {
    dir: PathBuf,
}

impl LocalObjectStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::Storage(format!("Failed to create storage dir: {}", e)))?;
        Ok(Self { dir })
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<String> {
        // Strip any path components from the client-supplied name
        let safe_name = std::path::Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin");

        let path = self.dir.join(safe_name);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| Error::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

        let absolute = path
            .canonicalize()
            .map_err(|e| Error::Storage(format!("Failed to resolve {}: {}", path.display(), e)))?;

        Ok(format!("file://{}", absolute.display()))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.dir.is_dir())
    }

    fn name(&self) -> &str {
        "local"
    }
}
