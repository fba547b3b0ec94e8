//! Log repository: the storage capability the rest of the crate depends on.
//!
//! The analytics engine never touches storage directly; callers fetch a
//! working set through this trait and hand the engine a plain slice. Two
//! implementations ship: a durable SQLite store and a `Vec`-backed store for
//! tests and ephemeral use.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};
use uuid::Uuid;

use super::sqlite::{open_database, open_memory_database};
use super::StoreError;
use crate::models::{Log, LogDraft};

/// Storage capability for diary entries. Date-range bounds are inclusive
/// ISO dates.
pub trait LogRepository {
    /// All logs, most recent first (missing times sort as midnight).
    fn fetch_all(&self) -> Result<Vec<Log>, StoreError>;
    fn fetch_by_id(&self, id: &str) -> Result<Option<Log>, StoreError>;
    /// Logs within the inclusive date range, oldest first.
    fn fetch_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Log>, StoreError>;
    /// Persists a draft, assigning id and created/updated timestamps.
    fn save(&mut self, draft: LogDraft) -> Result<Log, StoreError>;
    /// Replaces an existing entry's content and refreshes `updated_at`.
    fn update(&mut self, id: &str, draft: LogDraft) -> Result<Log, StoreError>;
    /// Returns true when an entry was actually removed.
    fn delete(&mut self, id: &str) -> Result<bool, StoreError>;
}

fn build_log(id: String, created_at: String, updated_at: String, draft: LogDraft) -> Log {
    Log {
        id,
        date: draft.date,
        time: draft.time,
        time_of_day: draft.time_of_day,
        pain: draft.pain,
        bowel_movements: draft.bowel_movements,
        eating: draft.eating,
        other_symptoms: draft.other_symptoms,
        medications: draft.medications,
        notes: draft.notes,
        created_at,
        updated_at,
    }
}

// ═══════════════════════════════════════════
// SQLite store
// ═══════════════════════════════════════════

pub struct SqliteLogStore {
    conn: Connection,
}

const LOG_COLUMNS: &str = "id, date, time, time_of_day, pain, bowel_movements,
     eating, other_symptoms, medications, notes, created_at, updated_at";

type LogRow = (
    String, String, String, String,
    String, String, String, String, String,
    String, String, String,
);

fn map_log_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<LogRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
        row.get(9)?,
        row.get(10)?,
        row.get(11)?,
    ))
}

/// A malformed JSON section degrades to its defaulted form rather than
/// failing the whole fetch; the analytics layer tolerates zero values.
fn log_from_row(row: LogRow) -> Log {
    let (
        id, date, time, time_of_day,
        pain, bowel_movements, eating, other_symptoms, medications,
        notes, created_at, updated_at,
    ) = row;
    Log {
        id,
        date,
        time,
        time_of_day,
        pain: serde_json::from_str(&pain).unwrap_or_default(),
        bowel_movements: serde_json::from_str(&bowel_movements).unwrap_or_default(),
        eating: serde_json::from_str(&eating).unwrap_or_default(),
        other_symptoms: serde_json::from_str(&other_symptoms).unwrap_or_default(),
        medications: serde_json::from_str(&medications).unwrap_or_default(),
        notes,
        created_at,
        updated_at,
    }
}

fn log_rows_to_vec(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<LogRow>>,
) -> Result<Vec<Log>, StoreError> {
    let mut logs = Vec::new();
    for row in rows {
        logs.push(log_from_row(row?));
    }
    Ok(logs)
}

impl SqliteLogStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            conn: open_database(path)?,
        })
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: open_memory_database()?,
        })
    }

    fn insert(&self, log: &Log) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO logs (id, date, time, time_of_day, pain, bowel_movements,
             eating, other_symptoms, medications, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                log.id,
                log.date,
                log.time,
                log.time_of_day,
                serde_json::to_string(&log.pain)?,
                serde_json::to_string(&log.bowel_movements)?,
                serde_json::to_string(&log.eating)?,
                serde_json::to_string(&log.other_symptoms)?,
                serde_json::to_string(&log.medications)?,
                log.notes,
                log.created_at,
                log.updated_at,
            ],
        )?;
        Ok(())
    }
}

impl LogRepository for SqliteLogStore {
    fn fetch_all(&self) -> Result<Vec<Log>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LOG_COLUMNS} FROM logs
             ORDER BY date DESC,
                      CASE WHEN time = '' THEN '00:00:00' ELSE time END DESC"
        ))?;
        let rows = stmt.query_map([], map_log_row)?;
        log_rows_to_vec(rows)
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<Log>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {LOG_COLUMNS} FROM logs WHERE id = ?1"))?;
        let rows = stmt.query_map(params![id], map_log_row)?;
        Ok(log_rows_to_vec(rows)?.into_iter().next())
    }

    fn fetch_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Log>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {LOG_COLUMNS} FROM logs
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC,
                      CASE WHEN time = '' THEN '00:00:00' ELSE time END ASC"
        ))?;
        let rows = stmt.query_map(params![start, end], map_log_row)?;
        log_rows_to_vec(rows)
    }

    fn save(&mut self, draft: LogDraft) -> Result<Log, StoreError> {
        let now = Utc::now().to_rfc3339();
        let log = build_log(Uuid::new_v4().to_string(), now.clone(), now, draft);
        self.insert(&log)?;
        tracing::debug!(id = %log.id, date = %log.date, "saved log");
        Ok(log)
    }

    fn update(&mut self, id: &str, draft: LogDraft) -> Result<Log, StoreError> {
        let existing = self
            .fetch_by_id(id)?
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        let log = build_log(
            existing.id,
            existing.created_at,
            Utc::now().to_rfc3339(),
            draft,
        );
        self.conn.execute(
            "UPDATE logs SET date = ?2, time = ?3, time_of_day = ?4, pain = ?5,
             bowel_movements = ?6, eating = ?7, other_symptoms = ?8,
             medications = ?9, notes = ?10, updated_at = ?11
             WHERE id = ?1",
            params![
                log.id,
                log.date,
                log.time,
                log.time_of_day,
                serde_json::to_string(&log.pain)?,
                serde_json::to_string(&log.bowel_movements)?,
                serde_json::to_string(&log.eating)?,
                serde_json::to_string(&log.other_symptoms)?,
                serde_json::to_string(&log.medications)?,
                log.notes,
                log.updated_at,
            ],
        )?;
        Ok(log)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM logs WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

// ═══════════════════════════════════════════
// In-memory store
// ═══════════════════════════════════════════

/// `Vec`-backed store with the same semantics as the SQLite one. Useful for
/// tests and for callers that do not want a file on disk.
#[derive(Default)]
pub struct MemoryLogStore {
    logs: Vec<Log>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogRepository for MemoryLogStore {
    fn fetch_all(&self) -> Result<Vec<Log>, StoreError> {
        let mut logs = self.logs.clone();
        logs.sort_by(|a, b| {
            (b.date.as_str(), b.sort_time()).cmp(&(a.date.as_str(), a.sort_time()))
        });
        Ok(logs)
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<Log>, StoreError> {
        Ok(self.logs.iter().find(|l| l.id == id).cloned())
    }

    fn fetch_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Log>, StoreError> {
        let mut logs: Vec<Log> = self
            .logs
            .iter()
            .filter(|l| l.date.as_str() >= start && l.date.as_str() <= end)
            .cloned()
            .collect();
        logs.sort_by(|a, b| {
            (a.date.as_str(), a.sort_time()).cmp(&(b.date.as_str(), b.sort_time()))
        });
        Ok(logs)
    }

    fn save(&mut self, draft: LogDraft) -> Result<Log, StoreError> {
        let now = Utc::now().to_rfc3339();
        let log = build_log(Uuid::new_v4().to_string(), now.clone(), now, draft);
        self.logs.push(log.clone());
        Ok(log)
    }

    fn update(&mut self, id: &str, draft: LogDraft) -> Result<Log, StoreError> {
        let slot = self
            .logs
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        let log = build_log(
            slot.id.clone(),
            slot.created_at.clone(),
            Utc::now().to_rfc3339(),
            draft,
        );
        *slot = log.clone();
        Ok(log)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.logs.len();
        self.logs.retain(|l| l.id != id);
        Ok(self.logs.len() < before)
    }
}
