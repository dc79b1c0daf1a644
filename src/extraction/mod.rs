//! PDF text extraction
//!
//! Fetches a stored document by URL and turns it into an ordered sequence of
//! page texts. Parsing runs on a blocking thread; the PDF libraries are
//! synchronous and occasionally slow on pathological fonts.

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Trait for extracting page texts from a stored document
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Fetch the document at `url` and return its page texts in page order
    async fn extract(&self, url: &str) -> Result<Vec<String>>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}

/// Extractor that downloads the document over HTTP and parses it locally
pub struct HttpPdfExtractor {
    client: reqwest::Client,
}

impl HttpPdfExtractor {
    /// Create a new extractor sharing the given HTTP client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch raw bytes from an `http(s)://` or `file://` URL
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(path) = url.strip_prefix("file://") {
            return tokio::fs::read(path)
                .await
                .map_err(|e| Error::Extraction(format!("Failed to read {}: {}", path, e)));
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Extraction(format!("Failed to fetch document: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Extraction(format!(
                "Document fetch failed ({}): {}",
                response.status(),
                url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Extraction(format!("Failed to read document body: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TextExtractor for HttpPdfExtractor {
    async fn extract(&self, url: &str) -> Result<Vec<String>> {
        let data = self.fetch(url).await?;

        tracing::debug!("Extracting text from {} bytes", data.len());

        tokio::task::spawn_blocking(move || extract_pages(&data))
            .await
            .map_err(|e| Error::Extraction(format!("Extraction task failed: {}", e)))?
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

/// Extract per-page text from PDF bytes.
///
/// lopdf gives page-level granularity; when it cannot read the file,
/// pdf-extract parses the whole document as a single page.
pub fn extract_pages(data: &[u8]) -> Result<Vec<String>> {
    match lopdf::Document::load_mem(data) {
        Ok(doc) => {
            let mut pages = Vec::new();
            for (page_number, _) in doc.get_pages() {
                let text = doc.extract_text(&[page_number]).map_err(|e| {
                    Error::Extraction(format!(
                        "Failed to extract text from page {}: {}",
                        page_number, e
                    ))
                })?;
                pages.push(text.trim().to_string());
            }
            Ok(pages)
        }
        Err(e) => {
            tracing::warn!("lopdf failed ({}), falling back to pdf-extract", e);
            let text = pdf_extract::extract_text_from_mem(data)
                .map_err(|e| Error::Extraction(format!("Failed to parse PDF: {}", e)))?;
            Ok(vec![text.trim().to_string()])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_an_extraction_error() {
        let result = extract_pages(b"this is not a pdf");
        assert!(matches!(result, Err(Error::Extraction(_))));
    }

    #[tokio::test]
    async fn fetch_reads_file_urls_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("doc.bin");
        std::fs::write(&path, b"payload").unwrap();

        let extractor = HttpPdfExtractor::new(reqwest::Client::new());
        let data = extractor
            .fetch(&format!("file://{}", path.display()))
            .await
            .unwrap();
        assert_eq!(data, b"payload");
    }
}
