//! Object store provider trait for raw document bytes

use async_trait::async_trait;

use crate::error::Result;

/// Trait for opaque object storage.
///
/// Implementations:
/// - `CloudinaryStore`: Cloudinary raw upload API
/// - `LocalObjectStore`: local filesystem (development and tests)
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store a byte stream as an opaque resource.
    ///
    /// Bytes are forwarded as-is; no validation, reinterpretation, or
    /// transcoding happens here. Returns the URL where the bytes can be
    /// fetched.
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
