//! Cloudinary object store
//!
//! Uploads raw document bytes through Cloudinary's signed `raw/upload`
//! endpoint and returns the `secure_url` of the stored object.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::config::CloudinaryConfig;
use crate::error::{Error, Result};
use crate::providers::object_store::ObjectStore;

/// Cloudinary-backed object store
pub struct CloudinaryStore {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryStore {
    /// Create a new Cloudinary store sharing the given HTTP client
    pub fn new(client: reqwest::Client, config: &CloudinaryConfig) -> Self {
        Self {
            client,
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        }
    }

    /// Upload endpoint for raw (non-image) resources
    fn endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/raw/upload",
            self.cloud_name
        )
    }
}

/// Compute the Cloudinary request signature: the hex SHA-256 digest of the
/// alphabetically sorted `key=value` parameter string with the API secret
/// appended. The account must be configured for SHA-256 signatures.
fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(serde::Deserialize)]
struct UploadResult {
    secure_url: String,
}

#[async_trait]
impl ObjectStore for CloudinaryStore {
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<String> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign_params(&[("timestamp", &timestamp)], &self.api_secret);

        let part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature);

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Storage(format!("Cloudinary request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Storage(format!(
                "Cloudinary upload failed ({}): {}",
                status, body
            )));
        }

        let result: UploadResult = response
            .json()
            .await
            .map_err(|e| Error::Storage(format!("Failed to parse Cloudinary response: {}", e)))?;

        Ok(result.secure_url)
    }

    async fn health_check(&self) -> Result<bool> {
        // No cheap unauthenticated ping exists; a reachable API host is enough.
        let response = self
            .client
            .get(format!("https://api.cloudinary.com/v1_1/{}", self.cloud_name))
            .send()
            .await
            .map_err(|e| Error::Storage(format!("Cloudinary health check failed: {}", e)))?;

        Ok(response.status().as_u16() < 500)
    }

    fn name(&self) -> &str {
        "cloudinary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_sorts_params_and_appends_secret() {
        let signature = sign_params(&[("timestamp", "1700000000")], "secret");

        let mut hasher = Sha256::new();
        hasher.update(b"timestamp=1700000000");
        hasher.update(b"secret");
        assert_eq!(signature, hex::encode(hasher.finalize()));
    }

    #[test]
    fn signature_orders_multiple_params_alphabetically() {
        let a = sign_params(&[("timestamp", "1"), ("public_id", "doc")], "s");
        let b = sign_params(&[("public_id", "doc"), ("timestamp", "1")], "s");
        assert_eq!(a, b);

        let mut hasher = Sha256::new();
        hasher.update(b"public_id=doc&timestamp=1");
        hasher.update(b"s");
        assert_eq!(a, hex::encode(hasher.finalize()));
    }
}
