//! Persistent document metadata storage

pub mod repository;

pub use repository::DocumentRepository;
