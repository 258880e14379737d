//! Process-owned log of internal error messages
//!
//! When a request fails with a 500 the original error message is kept
//! here under an opaque id; the client only ever sees the id and can hand
//! it to support, which retrieves the message via the logs endpoint. The
//! map is bounded: beyond capacity the oldest entry is evicted. Entries do
//! not survive a restart; this is a debugging aid, not user data.

use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use uuid::Uuid;

#[derive(Clone)]
pub struct ErrorLog {
    entries: Arc<Mutex<IndexMap<Uuid, String>>>,
    capacity: usize,
}

impl ErrorLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(IndexMap::new())),
            capacity,
        }
    }

    /// Stores `message` and returns the id to hand to the client.
    pub fn record(&self, message: String) -> Uuid {
        let id = Uuid::new_v4();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        entries.insert(id, message);
        while entries.len() > self.capacity {
            entries.shift_remove_index(0);
        }

        id
    }

    /// Looks up a previously recorded message by id.
    pub fn get(&self, id: Uuid) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_retrieves_messages() {
        let log = ErrorLog::with_capacity(8);
        let id = log.record("boom".to_string());

        assert_eq!(log.get(id), Some("boom".to_string()));
        assert_eq!(log.get(Uuid::new_v4()), None);
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let log = ErrorLog::with_capacity(2);
        let first = log.record("one".to_string());
        let second = log.record("two".to_string());
        let third = log.record("three".to_string());

        assert_eq!(log.get(first), None);
        assert_eq!(log.get(second), Some("two".to_string()));
        assert_eq!(log.get(third), Some("three".to_string()));
    }
}
