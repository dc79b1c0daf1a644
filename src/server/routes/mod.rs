//! API routes for the PDF QA server

pub mod ask;
pub mod documents;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with larger body limit for multipart file payloads
        .route(
            "/upload/",
            post(upload::upload_pdf).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Question answering
        .route("/ask/", post(ask::ask_question))
        // Document listing
        .route("/documents/", get(documents::list_documents))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Mock collaborators for handler tests

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    use crate::config::QaConfig;
    use crate::error::{Error, Result};
    use crate::extraction::TextExtractor;
    use crate::generation::AnswerEngine;
    use crate::providers::ObjectStore;
    use crate::server::state::AppState;
    use crate::storage::DocumentRepository;

    /// Object store that returns a deterministic URL per file name
    pub struct MockStore {
        pub fail: bool,
    }

    #[async_trait]
    impl ObjectStore for MockStore {
        async fn store(&self, file_name: &str, _data: &[u8]) -> Result<String> {
            if self.fail {
                return Err(Error::storage("provider rejected upload"));
            }
            Ok(format!("https://store/{}", file_name))
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    /// Extractor returning canned pages and recording the requested URL
    pub struct MockExtractor {
        pub pages: Vec<String>,
        pub requested: Mutex<Vec<String>>,
    }

    impl MockExtractor {
        pub fn returning(pages: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                pages: pages.iter().map(|p| p.to_string()).collect(),
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextExtractor for MockExtractor {
        async fn extract(&self, url: &str) -> Result<Vec<String>> {
            self.requested.lock().push(url.to_string());
            Ok(self.pages.clone())
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    /// Engine returning a canned reply and recording every prompt
    pub struct MockEngine {
        pub reply: Option<String>,
        pub calls: Mutex<Vec<(String, String, String)>>,
    }

    impl MockEngine {
        pub fn replying(reply: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(|r| r.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl AnswerEngine for MockEngine {
        async fn complete(
            &self,
            system: &str,
            context: &str,
            question: &str,
        ) -> Result<Option<String>> {
            self.calls
                .lock()
                .push((system.to_string(), context.to_string(), question.to_string()));
            Ok(self.reply.clone())
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-model"
        }
    }

    /// Build state over an in-memory repository and the given mocks
    pub fn test_state(
        store: Arc<dyn ObjectStore>,
        extractor: Arc<dyn TextExtractor>,
        engine: Arc<dyn AnswerEngine>,
    ) -> AppState {
        AppState::with_providers(
            QaConfig::default(),
            DocumentRepository::in_memory().unwrap(),
            store,
            extractor,
            engine,
        )
    }
}
