//! Daybook Storage Layer
//!
//! Implements the CaptureStore trait on SQLite.
//!
//! # Architecture
//!
//! - One `captures` table; `seq` (autoincrement) preserves insertion order
//! - Retention cap applied inside the append transaction: after insert,
//!   everything older than the newest [`daybook_domain::MAX_ENTRIES`] rows
//!   is deleted (sliding-window eviction, oldest first)
//! - Day filtering is string equality on the `day` column, which is derived
//!   from the capture timestamp (local calendar day) exactly once at append
//!
//! # Examples
//!
//! ```no_run
//! use daybook_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for capture operations
//! ```

#![warn(missing_docs)]

use chrono::{DateTime, Utc};
use daybook_domain::traits::CaptureStore;
use daybook_domain::{Capture, CaptureDay, CaptureDraft, CaptureId, MAX_ENTRIES};
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Persistence layer could not be reached or opened
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Stored row could not be decoded
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of CaptureStore
///
/// Created empty on first use; file-backed stores persist across process
/// restarts. Use `:memory:` for tests.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Concurrent access goes through a
/// single shared instance behind a lock (see `daybook-service`), which also
/// gives the single-writer semantics the retention policy requires.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use daybook_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("daybook.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Unavailable(e.to_string()))?;
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

    /// Number of captures currently stored
    pub fn len(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM captures", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Whether the store holds no captures
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn parse_instant(s: &str) -> Result<DateTime<Utc>, StoreError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| StoreError::InvalidData(format!("Bad timestamp '{}': {}", s, e)))
    }

    fn row_to_capture(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawCapture> {
        Ok(RawCapture {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            domain: row.get(3)?,
            timestamp: row.get(4)?,
            saved_at: row.get(5)?,
            content: row.get(6)?,
            word_count: row.get::<_, i64>(7)? as usize,
            reading_time: row.get::<_, i64>(8)? as u32,
        })
    }
}

/// A capture row before timestamp/id decoding
struct RawCapture {
    id: String,
    url: String,
    title: String,
    domain: String,
    timestamp: String,
    saved_at: String,
    content: String,
    word_count: usize,
    reading_time: u32,
}

impl RawCapture {
    fn decode(self) -> Result<Capture, StoreError> {
        Ok(Capture {
            id: CaptureId::from_string(&self.id).map_err(StoreError::InvalidData)?,
            url: self.url,
            title: self.title,
            domain: self.domain,
            timestamp: SqliteStore::parse_instant(&self.timestamp)?,
            saved_at: SqliteStore::parse_instant(&self.saved_at)?,
            content: self.content,
            word_count: self.word_count,
            reading_time: self.reading_time,
        })
    }
}

const SELECT_COLUMNS: &str =
    "id, url, title, domain, timestamp, saved_at, content, word_count, reading_time";

impl CaptureStore for SqliteStore {
    type Error = StoreError;

    fn append(&mut self, draft: CaptureDraft) -> Result<CaptureId, Self::Error> {
        let id = CaptureId::new();
        let saved_at = Utc::now();
        let day = CaptureDay::from_instant(draft.timestamp);

        // Insert and evict inside one transaction so a concurrent reader
        // never observes the sequence mid-eviction.
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO captures (id, url, title, domain, timestamp, saved_at, day, content, word_count, reading_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                id.to_string(),
                draft.url,
                draft.title,
                draft.domain,
                draft.timestamp.to_rfc3339(),
                saved_at.to_rfc3339(),
                day.to_string(),
                draft.content,
                draft.word_count as i64,
                draft.reading_time as i64,
            ],
        )?;

        // Sliding-window retention: keep only the newest MAX_ENTRIES rows
        tx.execute(
            "DELETE FROM captures WHERE seq NOT IN
             (SELECT seq FROM captures ORDER BY seq DESC LIMIT ?1)",
            params![MAX_ENTRIES as i64],
        )?;

        tx.commit()?;

        Ok(id)
    }

    fn query(&self, day: Option<CaptureDay>) -> Result<Vec<Capture>, Self::Error> {
        let sql = match day {
            Some(_) => format!(
                "SELECT {} FROM captures WHERE day = ?1 ORDER BY seq ASC",
                SELECT_COLUMNS
            ),
            None => format!("SELECT {} FROM captures ORDER BY seq ASC", SELECT_COLUMNS),
        };

        let mut stmt = self.conn.prepare(&sql)?;

        let rows = match day {
            Some(d) => stmt.query_map(params![d.to_string()], Self::row_to_capture)?,
            None => stmt.query_map([], Self::row_to_capture)?,
        };

        let raw: Vec<RawCapture> = rows.collect::<Result<Vec<_>, _>>()?;
        raw.into_iter().map(RawCapture::decode).collect()
    }

    fn clear(&mut self, day: Option<CaptureDay>) -> Result<usize, Self::Error> {
        let removed = match day {
            Some(d) => self.conn.execute(
                "DELETE FROM captures WHERE day = ?1",
                params![d.to_string()],
            )?,
            None => self.conn.execute("DELETE FROM captures", [])?,
        };
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(url: &str, timestamp: DateTime<Utc>) -> CaptureDraft {
        CaptureDraft {
            url: url.to_string(),
            title: "Test page".to_string(),
            domain: "example.com".to_string(),
            timestamp,
            content: "Content body that is long enough to be interesting.".to_string(),
            word_count: 9,
            reading_time: 1,
        }
    }

    #[test]
    fn test_store_initialization() {
        let store = SqliteStore::new(":memory:");
        assert!(store.is_ok(), "Store should initialize successfully");
        assert!(store.unwrap().is_empty().unwrap());
    }

    #[test]
    fn test_append_assigns_id_and_saved_at() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let before = Utc::now();

        let id = store.append(draft("https://example.com/a", Utc::now())).unwrap();

        let captures = store.query(None).unwrap();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].id, id);
        assert!(captures[0].saved_at >= before);
    }

    #[test]
    fn test_append_unique_ids() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let id1 = store.append(draft("https://example.com/a", Utc::now())).unwrap();
        let id2 = store.append(draft("https://example.com/b", Utc::now())).unwrap();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_clear_all_empties_store() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        for i in 0..5 {
            store
                .append(draft(&format!("https://example.com/{}", i), Utc::now()))
                .unwrap();
        }

        let removed = store.clear(None).unwrap();
        assert_eq!(removed, 5);
        assert!(store.is_empty().unwrap());
    }
}
