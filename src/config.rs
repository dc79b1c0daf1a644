//! Configuration for the PDF QA backend
//!
//! All settings come from the environment: the database path, the Gemini API
//! key, and the Cloudinary credentials are deployment secrets, not code.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Main backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QaConfig {
    /// Object storage backend (cloudinary or local)
    #[serde(default)]
    pub storage: StorageBackend,
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// LLM configuration
    pub llm: LlmConfig,
    /// Cloudinary credentials (required when storage = cloudinary)
    #[serde(default)]
    pub cloudinary: Option<CloudinaryConfig>,
}

impl QaConfig {
    /// Build configuration from environment variables.
    ///
    /// Reads `HOST`, `PORT`, `CORS_ALLOWED_ORIGINS`, `DATABASE_PATH`,
    /// `GOOGLE_API_KEY`, `GEMINI_MODEL`, `STORAGE_DIR` and the
    /// `CLOUDINARY_CLOUD_NAME` / `CLOUDINARY_API_KEY` /
    /// `CLOUDINARY_API_SECRET` triple. The Cloudinary backend is selected
    /// automatically when the triple is present.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| Error::Config(format!("Invalid PORT: {}", e)))?;
        }
        if let Ok(origins) = env::var("CORS_ALLOWED_ORIGINS") {
            config.server.cors_allowed_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(path) = env::var("DATABASE_PATH") {
            config.database.path = PathBuf::from(path);
        }
        if let Ok(key) = env::var("GOOGLE_API_KEY") {
            config.llm.api_key = key;
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.llm.model = model;
        }
        if let Ok(dir) = env::var("STORAGE_DIR") {
            config.server.storage_dir = PathBuf::from(dir);
        }

        let cloud_name = env::var("CLOUDINARY_CLOUD_NAME").ok();
        let api_key = env::var("CLOUDINARY_API_KEY").ok();
        let api_secret = env::var("CLOUDINARY_API_SECRET").ok();
        if let (Some(cloud_name), Some(api_key), Some(api_secret)) =
            (cloud_name, api_key, api_secret)
        {
            config.storage = StorageBackend::Cloudinary;
            config.cloudinary = Some(CloudinaryConfig {
                cloud_name,
                api_key,
                api_secret,
            });
        }

        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Allowed CORS origins; empty means any origin is permitted
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
    /// Maximum upload size in bytes (default: 50MB)
    pub max_upload_size: usize,
    /// Directory for the local object store backend
    pub storage_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_allowed_origins: Vec::new(),
            max_upload_size: 50 * 1024 * 1024, // 50MB
            storage_dir: PathBuf::from("uploaded_files"),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pdf_qa.db"),
        }
    }
}

/// LLM (Gemini) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Generative Language API base URL
    pub base_url: String,
    /// API key
    pub api_key: String,
    /// Generation model name
    pub model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.0, // deterministic, factual answers
            timeout_secs: 120,
            max_retries: 2,
        }
    }
}

/// Cloudinary credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudinaryConfig {
    /// Cloud name (account identifier)
    pub cloud_name: String,
    /// API key
    pub api_key: String,
    /// API secret used for request signing
    pub api_secret: String,
}

/// Object storage backend selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Local filesystem (development and tests)
    #[default]
    Local,
    /// Cloudinary raw upload API
    Cloudinary,
}
