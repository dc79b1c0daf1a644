//! SQLite repository for document metadata
//!
//! One row per uploaded document. The repository owns record storage and is
//! the sole mutator; rows are inserted once and never updated or deleted.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::DocumentRecord;

/// SQLite-backed document repository
pub struct DocumentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentRepository {
    /// Create or open the database at the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| Error::Database(format!("Failed to open database: {}", e)))?;

        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        repo.migrate()?;
        Ok(repo)
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::Database(format!("Failed to open in-memory database: {}", e)))?;

        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        repo.migrate()?;
        Ok(repo)
    }

    /// Run database migrations
    fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;

            CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url TEXT NOT NULL,
                file_name TEXT NOT NULL,
                upload_date TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| Error::Database(format!("Failed to run migrations: {}", e)))?;

        tracing::info!("Database migrations complete");
        Ok(())
    }

    /// Insert a new document record; the timestamp is assigned here.
    pub fn insert(&self, url: &str, file_name: &str) -> Result<DocumentRecord> {
        let conn = self.conn.lock();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO documents (url, file_name, upload_date) VALUES (?1, ?2, ?3)",
            params![url, file_name, now.to_rfc3339()],
        )
        .map_err(|e| Error::Database(format!("Failed to insert document: {}", e)))?;

        let id = conn.last_insert_rowid();

        Ok(DocumentRecord {
            id,
            url: url.to_string(),
            file_name: file_name.to_string(),
            upload_date: now,
        })
    }

    /// Get a document record by id
    pub fn get(&self, id: i64) -> Result<Option<DocumentRecord>> {
        let conn = self.conn.lock();

        let mut stmt = conn
            .prepare("SELECT id, url, file_name, upload_date FROM documents WHERE id = ?1")
            .map_err(|e| Error::Database(format!("Failed to prepare query: {}", e)))?;

        let record = stmt
            .query_row(params![id], row_to_record)
            .optional()
            .map_err(|e| Error::Database(format!("Failed to get document: {}", e)))?;

        Ok(record)
    }

    /// List all document records in insertion order
    pub fn list_all(&self) -> Result<Vec<DocumentRecord>> {
        let conn = self.conn.lock();

        let mut stmt = conn
            .prepare("SELECT id, url, file_name, upload_date FROM documents ORDER BY id ASC")
            .map_err(|e| Error::Database(format!("Failed to prepare query: {}", e)))?;

        let records = stmt
            .query_map([], row_to_record)
            .map_err(|e| Error::Database(format!("Failed to list documents: {}", e)))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::Database(format!("Failed to read document row: {}", e)))?;

        Ok(records)
    }
}

fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<DocumentRecord> {
    let id: i64 = row.get(0)?;
    let url: String = row.get(1)?;
    let file_name: String = row.get(2)?;
    let upload_date_str: String = row.get(3)?;

    let upload_date = DateTime::parse_from_rfc3339(&upload_date_str)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(DocumentRecord {
        id,
        url,
        file_name,
        upload_date,
    })
}
