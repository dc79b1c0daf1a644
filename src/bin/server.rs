//! PDF QA server binary
//!
//! Run with: cargo run --bin pdf-qa-server

use pdf_qa::{config::QaConfig, server::QaServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_qa=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from the environment
    let config = QaConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Storage backend: {:?}", config.storage);
    tracing::info!("  - Database: {}", config.database.path.display());
    tracing::info!("  - LLM model: {}", config.llm.model);

    if config.llm.api_key.is_empty() {
        tracing::warn!("GOOGLE_API_KEY is not set; /ask/ requests will fail");
    }

    // Create and start server
    let server = QaServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /upload/    - Upload a PDF");
    println!("  POST /ask/       - Ask a question about a document");
    println!("  GET  /documents/ - List uploaded documents");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
