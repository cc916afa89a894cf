//! Record store for word2llm.
//!
//! This module provides durable, synchronous CRUD over a bounded collection
//! of learning records. The whole collection lives as one JSON array under a
//! fixed key in a [`StorageBackend`]; every mutation reads the collection,
//! transforms it in memory, and writes it back as a single replacement.

use tracing::{debug, error, info};

use crate::backend::StorageBackend;
use crate::error::Result;
use crate::record::LearningRecord;

/// Fixed key under which the record collection is serialized.
pub const STORE_KEY: &str = "word2llm_learning_records";

/// Default maximum number of retained records.
pub const DEFAULT_MAX_RECORDS: usize = 50;

/// Store for learning records.
///
/// Maintains these invariants across all operations:
/// - at most `max_records` records retained, oldest timestamps evicted first
/// - records sorted by timestamp descending after any write
/// - no two records share an id after a save
///
/// A read-modify-write pair is not atomic across concurrent callers; last
/// write wins. Acceptable for the single-user usage this store serves.
#[derive(Debug)]
pub struct RecordStore<B> {
    backend: B,
    max_records: usize,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Create a store over the given backend with the default 50-record cap.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_max_records(backend, DEFAULT_MAX_RECORDS)
    }

    /// Create a store with a custom retention cap.
    #[must_use]
    pub fn with_max_records(backend: B, max_records: usize) -> Self {
        Self {
            backend,
            max_records,
        }
    }

    /// Get the retention cap.
    #[must_use]
    pub fn max_records(&self) -> usize {
        self.max_records
    }

    /// Save a record, merging with the existing collection.
    ///
    /// Merge strategy, in precedence order:
    /// 1. A record with the same content (identical article text, equal word
    ///    set) has its timestamp updated in place; `translation` is replaced
    ///    only when the incoming record carries one, `questions` only when
    ///    the incoming value is non-empty. All other fields, including the
    ///    id, are kept from the existing record.
    /// 2. A record with the same id is replaced wholesale.
    /// 3. Otherwise the record is appended.
    ///
    /// The collection is then re-sorted by timestamp descending, truncated
    /// to the cap, and persisted in one write.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails.
    pub fn save(&mut self, record: LearningRecord) -> Result<()> {
        let mut records = self.get_all()?;

        if let Some(existing) = records.iter_mut().find(|r| r.same_content(&record)) {
            debug!(
                "Merging record {} into existing record {} by content",
                record.id, existing.id
            );
            let replace_questions = record.has_questions();
            existing.timestamp = record.timestamp;
            if record.translation.is_some() {
                existing.translation = record.translation;
            }
            if replace_questions {
                existing.questions = record.questions;
            }
        } else if let Some(existing) = records.iter_mut().find(|r| r.id == record.id) {
            debug!("Replacing record {} by id", record.id);
            *existing = record;
        } else {
            debug!("Appending new record {}", record.id);
            records.push(record);
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if records.len() > self.max_records {
            info!(
                "Evicting {} oldest records to stay within cap of {}",
                records.len() - self.max_records,
                self.max_records
            );
            records.truncate(self.max_records);
        }

        self.persist(&records)
    }

    /// Get all records, newest first.
    ///
    /// An absent key yields an empty collection. A stored value that fails
    /// to parse is logged and treated as empty rather than surfaced: a
    /// corrupted store degrades to "no history" instead of failing every
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    pub fn get_all(&self) -> Result<Vec<LearningRecord>> {
        let Some(raw) = self.backend.get(STORE_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                error!("Failed to parse stored learning records: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Get the first record with the given id, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    pub fn get_by_id(&self, id: &str) -> Result<Option<LearningRecord>> {
        Ok(self.get_all()?.into_iter().find(|r| r.id == id))
    }

    /// Delete every record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails.
    pub fn delete_by_id(&mut self, id: &str) -> Result<()> {
        let mut records = self.get_all()?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() < before {
            debug!("Deleted record {id}");
        }
        self.persist(&records)
    }

    /// Remove the stored collection entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn clear_all(&mut self) -> Result<()> {
        info!("Clearing all learning records");
        self.backend.remove(STORE_KEY)
    }

    /// Count stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    pub fn count(&self) -> Result<usize> {
        Ok(self.get_all()?.len())
    }

    /// Get summary statistics about the stored collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    pub fn stats(&self) -> Result<StoreStats> {
        let records = self.get_all()?;
        // Collection is sorted newest first
        let newest_timestamp = records.first().map(|r| r.timestamp);
        let oldest_timestamp = records.last().map(|r| r.timestamp);

        Ok(StoreStats {
            total_records: records.len(),
            oldest_timestamp,
            newest_timestamp,
        })
    }

    /// Serialize the collection and replace the stored value in one write.
    fn persist(&mut self, records: &[LearningRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.set(STORE_KEY, &raw)
    }
}

/// Statistics about the stored collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of records stored.
    pub total_records: usize,
    /// Timestamp of the oldest record (epoch milliseconds).
    pub oldest_timestamp: Option<i64>,
    /// Timestamp of the newest record (epoch milliseconds).
    pub newest_timestamp: Option<i64>,
}
