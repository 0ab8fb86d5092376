//! In-memory working set for one entity family.
//!
//! # Responsibility
//! - Store records seeded from fixtures and mutated by services.
//! - Allocate ids as `max(existing) + 1` atomically with insertion.
//!
//! # Invariants
//! - Ids are unique and positive at all times.
//! - The internal lock is never held across an `.await`.
//! - Every returned record is a detached clone.

use crate::model::entity::{Entity, EntityId};
use chrono::Utc;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type RepoResult<T> = Result<T, RepoError>;

/// Largest id accepted from seed data; ids stay within SQLite's signed
/// integer range and `max + 1` allocation cannot overflow.
pub const MAX_SEED_ID: EntityId = i64::MAX as EntityId;

/// Rejected seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Two seed records share one id.
    DuplicateId(EntityId),
    /// Seed record uses id 0 or an id above `MAX_SEED_ID`.
    InvalidId(EntityId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
            Self::InvalidId(id) => write!(f, "record id must be in 1..={MAX_SEED_ID}, got {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage contract consumed by entity services.
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// All records, newest `created_at` first (ties: higher id first).
    fn list(&self) -> Vec<E>;
    fn get(&self, id: EntityId) -> Option<E>;
    /// Allocates the next id, stamps `created_at` and appends.
    fn insert(&self, draft: E::Draft) -> E;
    /// Runs `edit` on the stored record while it is locked.
    fn modify<F: FnOnce(&mut E)>(&self, id: EntityId, edit: F) -> Option<E>;
    fn update(&self, id: EntityId, patch: E::Patch) -> Option<E> {
        self.modify(id, |record| record.apply_patch(patch))
    }
    /// Removes the record, returning it when it existed.
    fn remove(&self, id: EntityId) -> Option<E>;
}

/// Shared handle to a mutable, process-lifetime record collection.
///
/// Cloning the handle shares the same records; build a new working set for
/// isolation (one per test, for example).
#[derive(Debug)]
pub struct WorkingSet<E> {
    records: Arc<Mutex<Vec<E>>>,
}

impl<E> Clone for WorkingSet<E> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<E: Entity> Default for WorkingSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> WorkingSet<E> {
    /// Creates an empty working set.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a working set from seed records, keeping their order.
    ///
    /// # Errors
    /// - `RepoError::InvalidId` when a record uses id 0 or exceeds
    ///   `MAX_SEED_ID`.
    /// - `RepoError::DuplicateId` when two records share an id.
    pub fn seeded(records: Vec<E>) -> RepoResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let id = record.id();
            if id == 0 || id > MAX_SEED_ID {
                return Err(RepoError::InvalidId(id));
            }
            if !seen.insert(id) {
                return Err(RepoError::DuplicateId(id));
            }
        }

        Ok(Self {
            records: Arc::new(Mutex::new(records)),
        })
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        // A panic while holding the lock cannot leave a half-applied record:
        // every mutation below is a single push/assign/remove.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entity> EntityRepository<E> for WorkingSet<E> {
    fn list(&self) -> Vec<E> {
        let mut records = self.lock().clone();
        records.sort_by_key(|record| Reverse((record.created_at(), record.id())));
        records
    }

    fn get(&self, id: EntityId) -> Option<E> {
        self.lock().iter().find(|record| record.id() == id).cloned()
    }

    fn insert(&self, draft: E::Draft) -> E {
        let mut records = self.lock();
        let next_id = records.iter().map(Entity::id).max().unwrap_or(0) + 1;
        let record = E::from_draft(next_id, Utc::now(), draft);
        records.push(record.clone());
        record
    }

    fn modify<F: FnOnce(&mut E)>(&self, id: EntityId, edit: F) -> Option<E> {
        let mut records = self.lock();
        let record = records.iter_mut().find(|record| record.id() == id)?;
        edit(record);
        Some(record.clone())
    }

    fn remove(&self, id: EntityId) -> Option<E> {
        let mut records = self.lock();
        let index = records.iter().position(|record| record.id() == id)?;
        Some(records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityRepository, RepoError, WorkingSet, MAX_SEED_ID};
    use crate::model::voice_note::{NewVoiceNote, VoiceNote, VoiceNotePatch};

    fn draft(text: &str) -> NewVoiceNote {
        NewVoiceNote {
            transcription: text.to_string(),
            ..NewVoiceNote::default()
        }
    }

    #[test]
    fn empty_working_set_starts_ids_at_one() {
        let set = WorkingSet::<VoiceNote>::new();
        assert!(set.is_empty());
        assert_eq!(set.insert(draft("first")).id, 1);
        assert_eq!(set.insert(draft("second")).id, 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_below_the_maximum() {
        let set = WorkingSet::<VoiceNote>::new();
        set.insert(draft("a"));
        set.insert(draft("b"));
        set.insert(draft("c"));
        set.remove(2).unwrap();
        assert_eq!(set.insert(draft("d")).id, 4);
    }

    #[test]
    fn seeded_rejects_duplicate_and_zero_ids() {
        let set = WorkingSet::<VoiceNote>::new();
        let note = set.insert(draft("x"));

        let err = WorkingSet::seeded(vec![note.clone(), note.clone()]).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(1));

        let mut zero = note;
        zero.id = 0;
        let err = WorkingSet::seeded(vec![zero]).unwrap_err();
        assert_eq!(err, RepoError::InvalidId(0));
    }

    #[test]
    fn seeded_caps_ids_so_allocation_cannot_overflow() {
        let set = WorkingSet::<VoiceNote>::new();
        let mut note = set.insert(draft("x"));

        note.id = u64::MAX;
        let err = WorkingSet::seeded(vec![note.clone()]).unwrap_err();
        assert_eq!(err, RepoError::InvalidId(u64::MAX));

        note.id = MAX_SEED_ID;
        let seeded = WorkingSet::seeded(vec![note]).unwrap();
        assert_eq!(seeded.insert(draft("next")).id, MAX_SEED_ID + 1);
    }

    #[test]
    fn modify_edits_in_place_under_one_lock() {
        let set = WorkingSet::<VoiceNote>::new();
        set.insert(draft("a"));

        let edited = set
            .modify(1, |note| note.transcription.push_str(" + b"))
            .unwrap();
        assert_eq!(edited.transcription, "a + b");
        assert_eq!(set.get(1).unwrap().transcription, "a + b");
        assert!(set.modify(7, |_| unreachable!()).is_none());
    }

    #[test]
    fn returned_records_are_detached_from_storage() {
        let set = WorkingSet::<VoiceNote>::new();
        let mut created = set.insert(draft("original"));
        created.transcription = "mutated by caller".to_string();

        assert_eq!(set.get(1).unwrap().transcription, "original");
    }

    #[test]
    fn update_missing_returns_none() {
        let set = WorkingSet::<VoiceNote>::new();
        assert!(set.update(5, VoiceNotePatch::default()).is_none());
        assert!(set.remove(5).is_none());
    }
}
