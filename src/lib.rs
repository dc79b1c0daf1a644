//! pdf-qa: PDF question-answering backend
//!
//! Accepts PDF uploads, stores the raw bytes in cloud object storage, keeps
//! one metadata row per document in SQLite, and answers questions about a
//! stored document by extracting its text and forwarding a prompt to a hosted
//! LLM completion endpoint.

pub mod config;
pub mod error;
pub mod extraction;
pub mod generation;
pub mod providers;
pub mod server;
pub mod storage;
pub mod types;

pub use config::QaConfig;
pub use error::{Error, Result};
pub use types::{AskRequest, AskResponse, DocumentRecord, UploadResponse};
