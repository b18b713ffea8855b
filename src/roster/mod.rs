//! In-memory Teacher record store
//!
//! # Design Principles
//!
//! - Head-first: the most recently inserted record enumerates first
//! - Linear id search, no secondary indexes
//! - Pure data structure: no I/O, no logging, no interior mutability
//!
//! # Invariants
//!
//! - Record ids are immutable after creation
//! - Length always matches the number of enumerable records
//! - Uniqueness is advisory for `insert`, enforced by `try_insert`

mod errors;
mod record;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::{Teacher, TeacherId};
pub use store::RecordStore;
