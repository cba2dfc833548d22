//! In-process generation store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snippetstream_core::{GenerationRecord, UsageEvent};
use snippetstream_error::PersistenceError;
use snippetstream_interface::GenerationStore;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// A generation record with its assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    /// Identifier assigned on insert
    pub id: Uuid,
    /// The record
    pub record: GenerationRecord,
}

#[derive(Debug, Default)]
struct Tables {
    records: Vec<StoredRecord>,
    events: Vec<UsageEvent>,
}

/// Append-only store held in memory.
///
/// Both tables sit behind one lock, so a record and its usage event are
/// appended together or not at all. Writes can be switched off to exercise
/// the best-effort persistence path.
#[derive(Debug, Default)]
pub struct InMemoryGenerationStore {
    tables: RwLock<Tables>,
    reject_writes: AtomicBool,
}

impl InMemoryGenerationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Snapshot of stored records.
    pub async fn records(&self) -> Vec<StoredRecord> {
        self.tables.read().await.records.clone()
    }

    /// Snapshot of stored usage events.
    pub async fn events(&self) -> Vec<UsageEvent> {
        self.tables.read().await.events.clone()
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::new("store is rejecting writes"));
        }
        Ok(())
    }
}

#[async_trait]
impl GenerationStore for InMemoryGenerationStore {
    async fn record_generation(
        &self,
        record: GenerationRecord,
        event: UsageEvent,
    ) -> Result<(), PersistenceError> {
        let mut tables = self.tables.write().await;
        self.check_writable()?;

        let id = Uuid::new_v4();
        debug!(%id, user_id = %record.user_id, "Stored generation record");
        tables.records.push(StoredRecord { id, record });
        tables.events.push(event);
        Ok(())
    }

    async fn record_usage(&self, event: UsageEvent) -> Result<(), PersistenceError> {
        let mut tables = self.tables.write().await;
        self.check_writable()?;
        tables.events.push(event);
        Ok(())
    }

    async fn count_generations_since(
        &self,
        user_id: &str,
        since: DateTime<Utc>,
    ) -> Result<u32, PersistenceError> {
        let tables = self.tables.read().await;
        let count = tables
            .records
            .iter()
            .filter(|stored| stored.record.user_id == user_id && stored.record.created_at >= since)
            .count();
        u32::try_from(count).map_err(|e| PersistenceError::new(e.to_string()))
    }
}
