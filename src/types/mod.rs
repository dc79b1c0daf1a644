//! Core types for the PDF QA backend

pub mod document;
pub mod query;
pub mod response;

pub use document::DocumentRecord;
pub use query::AskRequest;
pub use response::{AskResponse, DocumentSummary, UploadResponse};
