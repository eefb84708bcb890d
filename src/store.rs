// 🗄️ Score Store - In-memory id → points map
// Records are inserted once and never updated or removed.

use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub points: u64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Receipt id already stored: {0}")]
    AlreadyExists(Uuid),
}

/// Shared, thread-safe score storage.
#[derive(Debug, Default)]
pub struct ScoreStore {
    records: RwLock<HashMap<Uuid, u64>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its id is already present.
    pub fn insert(&self, record: ScoreRecord) -> Result<(), StoreError> {
        // A poisoned lock still holds fully written records
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());

        if records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id));
        }
        records.insert(record.id, record.points);
        Ok(())
    }

    /// Generate a fresh id, store `points` under it and return the record.
    pub fn insert_new(&self, points: u64) -> ScoreRecord {
        loop {
            let record = ScoreRecord {
                id: Uuid::new_v4(),
                points,
            };
            match self.insert(record) {
                Ok(()) => return record,
                Err(StoreError::AlreadyExists(id)) => {
                    tracing::warn!(%id, "generated receipt id collided, retrying");
                }
            }
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<ScoreRecord> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records
            .get(id)
            .map(|&points| ScoreRecord { id: *id, points })
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_and_get() {
        let store = ScoreStore::new();
        let record = store.insert_new(28);

        assert_eq!(store.get(&record.id), Some(record));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_zero_points_is_still_found() {
        let store = ScoreStore::new();
        let record = store.insert_new(0);

        assert_eq!(store.get(&record.id).map(|r| r.points), Some(0));
    }

    #[test]
    fn test_unknown_id() {
        let store = ScoreStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(&Uuid::new_v4()), None);
    }

    #[test]
    fn test_insert_is_once_only() {
        let store = ScoreStore::new();
        let id = Uuid::new_v4();

        assert_eq!(store.insert(ScoreRecord { id, points: 10 }), Ok(()));
        assert_eq!(
            store.insert(ScoreRecord { id, points: 99 }),
            Err(StoreError::AlreadyExists(id))
        );
        assert_eq!(store.get(&id).map(|r| r.points), Some(10));
    }

    #[test]
    fn test_concurrent_inserts() {
        let store = Arc::new(ScoreStore::new());

        let handles: Vec<_> = (0..8u64)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || (0..50).map(|_| store.insert_new(n)).collect::<Vec<_>>())
            })
            .collect();

        let records: Vec<ScoreRecord> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(store.len(), 400);
        for record in records {
            assert_eq!(store.get(&record.id), Some(record));
        }
    }
}
