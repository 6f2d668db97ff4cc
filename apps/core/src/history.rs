//! Exchange History
//!
//! Every answered message is recorded as an [`Exchange`] and the whole history is
//! written back to its store after each append. There is no incremental write:
//! the store always receives the full snapshot.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let store = JsonFileHistoryStore::new("data/message_history.json");
//! let mut history = HistoryLog::load(Box::new(store));
//!
//! let exchange = history.log_and_persist("hi", &[Category::General], "Hello!", "2024-01-01 10:00:00")?;
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use tracing::{error, info, warn};

use crate::brain::Category;
use crate::error::AppError;
use crate::fs_manager::ensure_parent_dir;

/// Timestamp format used in signatures and history (second precision, local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One answered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Local time the reply was generated
    pub timestamp: String,
    /// Message as received
    pub input_message: String,
    /// Triggered categories, comma-joined
    pub category: String,
    /// Full reply including the signature block
    pub automated_response: String,
}

/// Source of timestamps, swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Wall-clock local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

/// Durable storage for the history snapshot.
pub trait HistoryStore: Send {
    /// Reads the full history. A store with nothing saved yet returns an empty list.
    fn load(&self) -> Result<Vec<Exchange>, AppError>;

    /// Replaces the stored history with `records`.
    fn save(&self, records: &[Exchange]) -> Result<(), AppError>;
}

/// History kept as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Result<Vec<Exchange>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| AppError::HistoryLoad(format!("{:?}: {}", self.path, e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::HistoryLoad(format!("{:?}: {}", self.path, e)))
    }

    fn save(&self, records: &[Exchange]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(records)?;
        write_atomically(&self.path, |file| {
            file.write_all(json.as_bytes())?;
            Ok(())
        })
    }
}

/// Writes through a temp file in the target's directory, then renames it over `path`.
///
/// Readers see either the previous document or the new one, never a partial write.
/// On failure the temp file is removed and `path` is left as it was.
fn write_atomically<F>(path: &Path, write: F) -> Result<(), AppError>
where
    F: FnOnce(&mut File) -> Result<(), AppError>,
{
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}

/// History held in memory. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    records: Arc<Mutex<Vec<Exchange>>>,
    fail_saves: bool,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Exchange>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            fail_saves: false,
        }
    }

    /// A store whose saves always fail.
    pub fn failing() -> Self {
        Self {
            records: Arc::default(),
            fail_saves: true,
        }
    }

    /// What the last successful save wrote.
    pub fn snapshot(&self) -> Vec<Exchange> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn load(&self) -> Result<Vec<Exchange>, AppError> {
        self.records
            .lock()
            .map(|r| r.clone())
            .map_err(|e| AppError::HistoryLoad(e.to_string()))
    }

    fn save(&self, records: &[Exchange]) -> Result<(), AppError> {
        if self.fail_saves {
            return Err(AppError::Io(std::io::Error::other("history store is read-only")));
        }
        let mut stored = self
            .records
            .lock()
            .map_err(|e| AppError::Processing(e.to_string()))?;
        *stored = records.to_vec();
        Ok(())
    }
}

/// In-memory history plus the store it is persisted to.
pub struct HistoryLog {
    records: Vec<Exchange>,
    store: Box<dyn HistoryStore>,
}

impl HistoryLog {
    /// Starts from whatever the store holds. Unreadable or corrupted history is
    /// not fatal: the log starts empty and the next save overwrites it.
    pub fn load(store: Box<dyn HistoryStore>) -> Self {
        let records = match store.load() {
            Ok(records) => {
                info!("Loaded {} history entries", records.len());
                records
            }
            Err(e) => {
                warn!("{}. The history file might be corrupted, starting empty.", e);
                Vec::new()
            }
        };
        Self { records, store }
    }

    /// Starts empty regardless of what the store holds.
    pub fn empty(store: Box<dyn HistoryStore>) -> Self {
        Self {
            records: Vec::new(),
            store,
        }
    }

    pub fn records(&self) -> &[Exchange] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records an exchange and persists the full history.
    ///
    /// If the save fails the record is dropped again, so a failed request leaves
    /// no trace in memory either.
    pub fn log_and_persist(
        &mut self,
        message: &str,
        categories: &[Category],
        full_response: &str,
        timestamp: &str,
    ) -> Result<Exchange, AppError> {
        let exchange = Exchange {
            timestamp: timestamp.to_string(),
            input_message: message.to_string(),
            category: Category::join(categories),
            automated_response: full_response.to_string(),
        };

        self.records.push(exchange.clone());

        if let Err(e) = self.store.save(&self.records) {
            self.records.pop();
            error!("Failed to persist history: {}", e);
            return Err(AppError::Processing(format!("Failed to persist history: {}", e.detail())));
        }

        Ok(exchange)
    }
}
