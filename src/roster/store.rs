//! Head-first record store
//!
//! Records live in a `VecDeque` whose front is the head of the sequence.
//! Inserting pushes to the front, so enumeration yields the most recently
//! inserted record first. Removal shifts the remaining records without
//! reordering them.
//!
//! # Invariants
//!
//! - `len()` always equals the number of records yielded by `iter()`
//! - Ids are pairwise distinct as long as every `insert` is preceded by a
//!   passing `is_unique_id` check (or `try_insert` is used instead)
//! - `update_by_id` never changes an id

use std::collections::VecDeque;

use super::errors::{StoreError, StoreResult};
use super::record::{Teacher, TeacherId};

/// Ordered collection of Teacher records keyed by id.
#[derive(Debug, Default)]
pub struct RecordStore {
    items: VecDeque<Teacher>,
}

impl RecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend a record.
    ///
    /// No uniqueness check is performed here. Callers must consult
    /// `is_unique_id` first, or use `try_insert`.
    pub fn insert(&mut self, teacher: Teacher) {
        self.items.push_front(teacher);
    }

    /// Prepend a record, refusing ids already present.
    pub fn try_insert(&mut self, teacher: Teacher) -> StoreResult<()> {
        if !self.is_unique_id(teacher.id()) {
            return Err(StoreError::DuplicateId(teacher.id()));
        }
        self.insert(teacher);
        Ok(())
    }

    /// Linear scan from head; returns the first match.
    pub fn find_by_id(&self, id: TeacherId) -> Option<&Teacher> {
        self.items.iter().find(|t| t.id() == id)
    }

    /// Like `find_by_id`, but reports a miss as `NotFound`.
    pub fn get(&self, id: TeacherId) -> StoreResult<&Teacher> {
        self.find_by_id(id).ok_or(StoreError::NotFound(id))
    }

    /// True iff no record carries `id`
    pub fn is_unique_id(&self, id: TeacherId) -> bool {
        self.find_by_id(id).is_none()
    }

    /// Replace age and name of the record with `id`.
    ///
    /// The store is left untouched when the id is absent.
    pub fn update_by_id(
        &mut self,
        id: TeacherId,
        age: i64,
        name: impl Into<String>,
    ) -> StoreResult<()> {
        let teacher = self
            .items
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        teacher.update(age, name);
        Ok(())
    }

    /// Remove the first record from head carrying `id` and return it.
    pub fn delete_by_id(&mut self, id: TeacherId) -> StoreResult<Teacher> {
        if self.items.is_empty() {
            return Err(StoreError::Empty);
        }

        let pos = self
            .items
            .iter()
            .position(|t| t.id() == id)
            .ok_or(StoreError::NotFound(id))?;

        // Head removal is a plain pop; interior and tail removal shift the rest.
        let removed = if pos == 0 {
            self.items.pop_front()
        } else {
            self.items.remove(pos)
        };

        match removed {
            Some(teacher) => Ok(teacher),
            None => unreachable!("position {} returned by the scan is in bounds", pos),
        }
    }

    /// Iterate head to tail (most recently inserted first)
    pub fn iter(&self) -> impl Iterator<Item = &Teacher> {
        self.items.iter()
    }

    /// Release every record. The store cannot be used afterwards.
    pub fn destroy(self) -> usize {
        let released = self.items.len();
        drop(self.items);
        released
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Teacher;
    type IntoIter = std::collections::vec_deque::Iter<'a, Teacher>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
