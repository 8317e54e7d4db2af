//! Parlor Storage Layer
//!
//! Implements the `LeadStore` trait over SQLite.
//!
//! # Architecture
//!
//! A single `leads` table holds every captured lead, whichever surface
//! produced it (chatbot action, contact form, quote request, job
//! application). Ids are UUIDv7 blobs, so "newest first" is an id sort.
//!
//! # Examples
//!
//! ```no_run
//! use parlor_store::SqliteLeadStore;
//!
//! let store = SqliteLeadStore::new(":memory:").unwrap();
//! // Store is now ready for lead operations
//! ```

#![warn(missing_docs)]

use parlor_domain::traits::{LeadQuery, LeadStore};
use parlor_domain::{Lead, LeadDraft, LeadId, LeadSource};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `LeadStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Share a `SqliteLeadStore`
/// behind a mutex, or give each thread its own instance.
pub struct SqliteLeadStore {
    conn: Connection,
}

impl SqliteLeadStore {
    /// Create a new store at the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use parlor_store::SqliteLeadStore;
    ///
    /// let store = SqliteLeadStore::new("parlor.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert LeadId to bytes for storage
    fn lead_id_to_bytes(id: LeadId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes back to LeadId
    fn bytes_to_lead_id(bytes: &[u8]) -> Result<LeadId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for LeadId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(LeadId::from_value(u128::from_be_bytes(arr)))
    }

    /// Map a result row to a Lead
    fn row_to_lead(row: &Row<'_>) -> Result<Lead, rusqlite::Error> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let source_str: String = row.get(1)?;

        let id = Self::bytes_to_lead_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Blob,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())),
            )
        })?;
        let source = LeadSource::parse(&source_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?;

        Ok(Lead {
            id,
            source,
            draft: LeadDraft {
                name: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                company: row.get(5)?,
                budget: row.get(6)?,
                message: row.get(7)?,
            },
            created_at: row.get(8)?,
        })
    }
}

impl LeadStore for SqliteLeadStore {
    type Error = StoreError;

    fn insert_lead(&mut self, lead: Lead) -> Result<LeadId, Self::Error> {
        let id_bytes = Self::lead_id_to_bytes(lead.id);

        self.conn.execute(
            "INSERT INTO leads (id, source, name, email, phone, company, budget, message, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                id_bytes,
                lead.source.as_str(),
                lead.draft.name,
                lead.draft.email,
                lead.draft.phone,
                lead.draft.company,
                lead.draft.budget,
                lead.draft.message,
                lead.created_at,
            ],
        )?;

        Ok(lead.id)
    }

    fn get_lead(&self, id: LeadId) -> Result<Option<Lead>, Self::Error> {
        let id_bytes = Self::lead_id_to_bytes(id);

        let lead = self
            .conn
            .query_row(
                "SELECT id, source, name, email, phone, company, budget, message, created_at
                 FROM leads WHERE id = ?1",
                params![id_bytes],
                Self::row_to_lead,
            )
            .optional()?;

        Ok(lead)
    }

    fn list_leads(&self, query: &LeadQuery) -> Result<Vec<Lead>, Self::Error> {
        let mut sql = String::from(
            "SELECT id, source, name, email, phone, company, budget, message, created_at FROM leads",
        );
        if query.source.is_some() {
            sql.push_str(" WHERE source = ?1");
        }
        // UUIDv7 blobs sort chronologically, so id order is capture order
        sql.push_str(" ORDER BY id DESC");
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match query.source {
            Some(source) => stmt.query_map(params![source.as_str()], Self::row_to_lead)?,
            None => stmt.query_map([], Self::row_to_lead)?,
        };

        let mut leads = Vec::new();
        for lead in rows {
            leads.push(lead?);
        }
        Ok(leads)
    }

    fn count_leads(&self) -> Result<usize, Self::Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM leads", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
