//! SQLite-backed interaction log.

use crate::types::LogEntry;
use rusqlite::{params, Connection, Row};
use salesdesk_core::{AppError, AppResult};
use std::path::Path;

/// Table layout shared with earlier releases; columns are all TEXT, no key.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS memory (
    timestamp TEXT,
    agent_name TEXT,
    user_query TEXT,
    agent_response TEXT
)
"#;

/// Append-only store of agent interactions.
///
/// Every statement runs in SQLite's autocommit mode, so a returned `save`
/// is already durable.
pub struct LogStore {
    conn: Connection,
}

impl LogStore {
    /// Open (or create) the log database at `db_path` and ensure the schema.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Memory(format!("Failed to create log directory: {}", e))
                })?;
            }
        }

        let conn = Connection::open(db_path)
            .map_err(|e| AppError::Memory(format!("Failed to open log database: {}", e)))?;

        let store = Self { conn };
        store.ensure_schema()?;

        tracing::debug!("Opened interaction log at {:?}", db_path);
        Ok(store)
    }

    /// Open a private in-memory log.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::Memory(format!("Failed to open in-memory log: {}", e)))?;

        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the `memory` table if it does not exist. Safe to call repeatedly.
    pub fn ensure_schema(&self) -> AppResult<()> {
        self.conn
            .execute_batch(SCHEMA)
            .map_err(|e| AppError::Memory(format!("Failed to create memory table: {}", e)))
    }

    /// Append an interaction stamped with the current local time.
    pub fn save(&self, agent_name: &str, query: &str, response: &str) -> AppResult<LogEntry> {
        let entry = LogEntry::now(agent_name, query, response);
        self.append(&entry)?;
        Ok(entry)
    }

    /// Append a prepared entry as-is.
    pub fn append(&self, entry: &LogEntry) -> AppResult<()> {
        self.conn
            .execute(
                "INSERT INTO memory (timestamp, agent_name, user_query, agent_response)
                 VALUES (?1, ?2, ?3, ?4)",
                params![entry.timestamp, entry.agent_name, entry.query, entry.response],
            )
            .map_err(|e| AppError::Memory(format!("Failed to save interaction: {}", e)))?;

        tracing::debug!(agent = %entry.agent_name, "Saved interaction");
        Ok(())
    }

    /// Up to `limit` entries, newest first.
    ///
    /// Equal timestamps fall back to insertion order, latest insert first.
    pub fn fetch_recent(&self, limit: usize) -> AppResult<Vec<LogEntry>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT timestamp, agent_name, user_query, agent_response FROM memory
                 ORDER BY timestamp DESC, rowid DESC LIMIT ?1",
            )
            .map_err(|e| AppError::Memory(format!("Failed to prepare query: {}", e)))?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = stmt
            .query_map(params![limit], entry_from_row)
            .map_err(|e| AppError::Memory(format!("Failed to query memory: {}", e)))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Memory(format!("Failed to read memory row: {}", e)))
    }

    /// Total number of logged interactions.
    pub fn count(&self) -> AppResult<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM memory", [], |row| {
                row.get::<_, i64>(0).map(|v| v as u64)
            })
            .map_err(|e| AppError::Memory(format!("Failed to count interactions: {}", e)))
    }
}

/// NULL columns (possible in tables written by other tools) read as "".
fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<LogEntry> {
    Ok(LogEntry {
        timestamp: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
        agent_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        query: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        response: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}
