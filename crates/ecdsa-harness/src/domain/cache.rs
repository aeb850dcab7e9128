//! # Group Key Cache
//!
//! Signature-generation vectors reuse one key pair per test group, so the
//! dispatcher keeps the most recently generated key in a single slot keyed
//! by group id. A hit means "key already generated for this group"; a miss
//! means "generate and overwrite".
//!
//! The validation protocol presents the cases of one group contiguously.
//! That ordering is load-bearing: if a group reappeared after its key was
//! discarded, a fresh key would silently change results. The cache therefore
//! remembers retired group ids and turns a revisit into a hard error instead.
//!
//! Not thread-safe by design — test execution is strictly sequential. If
//! concurrent execution is ever introduced this must become per-group keyed
//! storage with explicit synchronization, not a single mutable slot.

use std::collections::HashSet;

use crate::domain::errors::CacheError;

/// The cached key material for one test group.
#[derive(Debug)]
pub struct GroupEntry<K> {
    /// Group this key belongs to
    pub group_id: u32,
    /// Opaque backend key handle
    pub key: K,
    /// Public x-coordinate, minimal big-endian (kept so every case in the
    /// group reports identical coordinates without re-exporting)
    pub qx: Vec<u8>,
    /// Public y-coordinate, minimal big-endian
    pub qy: Vec<u8>,
}

/// Single-slot most-recent-group key cache.
#[derive(Debug, Default)]
pub struct GroupKeyCache<K> {
    slot: Option<GroupEntry<K>>,
    retired: HashSet<u32>,
}

impl<K> GroupKeyCache<K> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            slot: None,
            retired: HashSet::new(),
        }
    }

    /// Whether the slot currently holds a key for `group_id`.
    pub fn contains(&self, group_id: u32) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|e| e.group_id == group_id)
    }

    /// The entry for `group_id`, if it is the cached group.
    pub fn lookup(&self, group_id: u32) -> Option<&GroupEntry<K>> {
        self.slot.as_ref().filter(|e| e.group_id == group_id)
    }

    /// Install a freshly generated key, unconditionally replacing (and
    /// retiring) whatever group held the slot before.
    ///
    /// # Errors
    ///
    /// [`CacheError::RevisitedGroup`] if `entry.group_id` was already
    /// retired — the sequencing contract is broken and the run must stop.
    pub fn install(&mut self, entry: GroupEntry<K>) -> Result<(), CacheError> {
        if self.retired.contains(&entry.group_id) {
            return Err(CacheError::RevisitedGroup(entry.group_id));
        }
        if let Some(old) = self.slot.take() {
            if old.group_id != entry.group_id {
                self.retired.insert(old.group_id);
            }
            // Old entry (and its key material) dropped here.
        }
        self.slot = Some(entry);
        Ok(())
    }

    /// End-of-run teardown: drop the cached key and forget the history.
    pub fn clear(&mut self) {
        self.slot = None;
        self.retired.clear();
    }
}
