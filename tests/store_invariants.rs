//! Record Store Invariant Tests
//!
//! Tests that the store invariants hold across operation sequences:
//! - Ids stay unique when inserts are checked first
//! - Length matches the enumerable records
//! - Insert/find, delete/find and update round trips
//! - Empty and NotFound are distinct signals

use rosterdb::roster::{RecordStore, StoreError, Teacher, TeacherId};

// =============================================================================
// Helper Functions
// =============================================================================

fn ids(store: &RecordStore) -> Vec<TeacherId> {
    store.iter().map(|t| t.id()).collect()
}

fn names(store: &RecordStore) -> Vec<&str> {
    store.iter().map(|t| t.name()).collect()
}

/// Small deterministic generator so sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

// =============================================================================
// Walkthrough
// =============================================================================

/// Test: the canonical insert/delete walkthrough.
#[test]
fn test_alice_bob_walkthrough() {
    let mut store = RecordStore::new();
    store.insert(Teacher::new(1, 30, "Alice"));
    store.insert(Teacher::new(2, 40, "Bob"));
    assert_eq!(names(&store), vec!["Bob", "Alice"]);

    store.delete_by_id(1).unwrap();
    assert_eq!(names(&store), vec!["Bob"]);

    assert_eq!(store.delete_by_id(1), Err(StoreError::NotFound(1)));

    store.delete_by_id(2).unwrap();
    assert!(store.is_empty());

    assert_eq!(store.delete_by_id(2), Err(StoreError::Empty));
    assert_eq!(store.len(), 0);
}

// =============================================================================
// Uniqueness and Count
// =============================================================================

/// Test: checked inserts never produce duplicate ids.
#[test]
fn test_checked_inserts_keep_ids_unique() {
    let mut store = RecordStore::new();
    let mut rng = Lcg(7);

    for _ in 0..500 {
        let id = (rng.next() % 64) as TeacherId;
        if store.is_unique_id(id) {
            store.insert(Teacher::new(id, 30, format!("T{}", id)));
        }
    }

    let mut seen = ids(&store);
    let before = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), before);
}

/// Test: length equals enumerated count after mixed inserts and deletes.
#[test]
fn test_count_matches_enumeration() {
    let mut store = RecordStore::new();
    let mut rng = Lcg(42);

    for step in 0..1000 {
        let id = (rng.next() % 32) as TeacherId;
        if rng.next() % 3 == 0 {
            let before = store.len();
            match store.delete_by_id(id) {
                Ok(removed) => {
                    assert_eq!(removed.id(), id);
                    assert_eq!(store.len(), before - 1);
                }
                Err(StoreError::Empty) => assert_eq!(before, 0),
                Err(StoreError::NotFound(missing)) => {
                    assert_eq!(missing, id);
                    assert_eq!(store.len(), before);
                }
                Err(other) => panic!("unexpected error at step {}: {}", step, other),
            }
        } else if store.try_insert(Teacher::new(id, step, "x")).is_err() {
            assert!(!store.is_unique_id(id));
        }
        assert_eq!(store.len(), store.iter().count());
    }
}

// =============================================================================
// Round Trips
// =============================================================================

/// Test: a freshly inserted record is found with the same age and name.
#[test]
fn test_insert_then_find() {
    let mut store = RecordStore::new();
    store.insert(Teacher::new(10, 55, "Marie"));
    store.insert(Teacher::new(11, 33, "Pierre"));

    let found = store.find_by_id(10).unwrap();
    assert_eq!(found, &Teacher::new(10, 55, "Marie"));
}

/// Test: delete removes exactly one record and it can no longer be found.
#[test]
fn test_delete_then_find() {
    let mut store = RecordStore::new();
    for id in 0..10 {
        store.insert(Teacher::new(id, 20, "t"));
    }

    store.delete_by_id(4).unwrap();
    assert!(store.find_by_id(4).is_none());
    assert_eq!(store.len(), 9);
    assert_eq!(ids(&store), vec![9, 8, 7, 6, 5, 3, 2, 1, 0]);
}

/// Test: update keeps the id and replaces age and name.
#[test]
fn test_update_preserves_id() {
    let mut store = RecordStore::new();
    store.insert(Teacher::new(1, 30, "Alice"));
    store.insert(Teacher::new(2, 40, "Bob"));

    store.update_by_id(1, 60, "Alice Cooper").unwrap();

    let t = store.find_by_id(1).unwrap();
    assert_eq!(t.id(), 1);
    assert_eq!(t.age(), 60);
    assert_eq!(t.name(), "Alice Cooper");
    // Order untouched
    assert_eq!(ids(&store), vec![2, 1]);
}

/// Test: updating a missing id changes nothing.
#[test]
fn test_update_missing_is_noop() {
    let mut store = RecordStore::new();
    store.insert(Teacher::new(1, 30, "Alice"));

    assert_eq!(store.update_by_id(3, 1, "Ghost"), Err(StoreError::NotFound(3)));
    assert_eq!(names(&store), vec!["Alice"]);
    assert_eq!(store.find_by_id(1).unwrap().age(), 30);
}

// =============================================================================
// Empty Store
// =============================================================================

/// Test: delete on a fresh store reports Empty, not NotFound.
#[test]
fn test_empty_store_delete() {
    let mut store = RecordStore::new();
    let err = store.delete_by_id(1).unwrap_err();
    assert_eq!(err, StoreError::Empty);
    assert_eq!(err.code(), "ROSTER_EMPTY");
    assert_eq!(store.len(), 0);
}
