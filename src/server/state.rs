//! Application state for the PDF QA server

use std::sync::Arc;

use crate::config::{QaConfig, StorageBackend};
use crate::error::{Error, Result};
use crate::extraction::{HttpPdfExtractor, TextExtractor};
use crate::generation::{AnswerEngine, GeminiClient};
use crate::providers::{CloudinaryStore, LocalObjectStore, ObjectStore};
use crate::storage::DocumentRepository;

/// Shared application state
///
/// Constructed once at startup and cloned into each handler; all external
/// collaborators live behind `Arc` and are safe to share across requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: QaConfig,
    /// Document metadata repository
    repository: DocumentRepository,
    /// Object storage for raw file bytes
    object_store: Arc<dyn ObjectStore>,
    /// PDF text extractor
    extractor: Arc<dyn TextExtractor>,
    /// LLM completion client
    answer_engine: Arc<dyn AnswerEngine>,
}

impl AppState {
    /// Create new application state from configuration
    pub fn new(config: QaConfig) -> Result<Self> {
        tracing::info!(
            "Initializing application state (storage: {:?})...",
            config.storage
        );

        let repository = DocumentRepository::new(&config.database.path)?;
        tracing::info!("Document repository opened at {}", config.database.path.display());

        // One HTTP client shared by every outbound collaborator
        let client = reqwest::Client::new();

        let object_store: Arc<dyn ObjectStore> = match config.storage {
            StorageBackend::Cloudinary => {
                let cloudinary = config.cloudinary.as_ref().ok_or_else(|| {
                    Error::Config(
                        "Cloudinary backend selected but cloudinary config is missing".to_string(),
                    )
                })?;
                Arc::new(CloudinaryStore::new(client.clone(), cloudinary))
            }
            StorageBackend::Local => {
                Arc::new(LocalObjectStore::new(config.server.storage_dir.clone())?)
            }
        };
        tracing::info!("Object store initialized ({})", object_store.name());

        let extractor: Arc<dyn TextExtractor> = Arc::new(HttpPdfExtractor::new(client.clone()));

        let answer_engine: Arc<dyn AnswerEngine> =
            Arc::new(GeminiClient::new(client, &config.llm));
        tracing::info!("Answer engine initialized (model: {})", answer_engine.model());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                repository,
                object_store,
                extractor,
                answer_engine,
            }),
        })
    }

    /// Create state from explicit collaborators (used by tests)
    pub fn with_providers(
        config: QaConfig,
        repository: DocumentRepository,
        object_store: Arc<dyn ObjectStore>,
        extractor: Arc<dyn TextExtractor>,
        answer_engine: Arc<dyn AnswerEngine>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                repository,
                object_store,
                extractor,
                answer_engine,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &QaConfig {
        &self.inner.config
    }

    /// Get the document repository
    pub fn repository(&self) -> &DocumentRepository {
        &self.inner.repository
    }

    /// Get the object store
    pub fn object_store(&self) -> &Arc<dyn ObjectStore> {
        &self.inner.object_store
    }

    /// Get the text extractor
    pub fn extractor(&self) -> &Arc<dyn TextExtractor> {
        &self.inner.extractor
    }

    /// Get the answer engine
    pub fn answer_engine(&self) -> &Arc<dyn AnswerEngine> {
        &self.inner.answer_engine
    }
}
