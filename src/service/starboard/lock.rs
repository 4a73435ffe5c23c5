//! Per-message serialisation of starboard events.
//!
//! Two star reactions landing at the same time on a message that is one star short
//! of the threshold would both see "no repost yet" and both send one. Holding a lock
//! keyed by the original message id across the engine call closes that window.
//! Events for different messages still run in parallel.

use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, Mutex as StdMutex, PoisonError},
};

use serenity::all::MessageId;
use tokio::sync::Mutex;

/// Map of per-message async locks.
///
/// Entries are created on demand and removed once the last task using them is done,
/// so the map only holds messages with events in flight.
#[derive(Default)]
pub struct MessageLocks {
    locks: StdMutex<HashMap<MessageId, Arc<Mutex<()>>>>,
}

/// Handle on one entry of [`MessageLocks`]; removes the entry on drop when unused.
struct LockEntry<'a> {
    owner: &'a MessageLocks,
    message_id: MessageId,
    lock: Arc<Mutex<()>>,
}

impl MessageLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `fut` while holding the lock for `message_id`.
    ///
    /// # Arguments
    /// - `message_id` - Original message the event refers to
    /// - `fut` - Work to run exclusively for that message
    ///
    /// # Returns
    /// - The output of `fut`
    pub async fn with_lock<F: Future>(&self, message_id: MessageId, fut: F) -> F::Output {
        let entry = self.entry(message_id);
        let _guard = entry.lock.lock().await;

        fut.await
    }

    fn entry(&self, message_id: MessageId) -> LockEntry<'_> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        let lock = locks.entry(message_id).or_default().clone();

        LockEntry {
            owner: self,
            message_id,
            lock,
        }
    }
}

#[cfg(test)]
impl MessageLocks {
    /// Number of messages currently holding an entry.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for LockEntry<'_> {
    fn drop(&mut self) {
        let mut locks = self
            .owner
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Held by the map and by this entry only.
        let unused = Arc::strong_count(&self.lock) == 2;
        if unused {
            locks.remove(&self.message_id);
        }
    }
}
