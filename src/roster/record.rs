//! Teacher record type
//!
//! A record is a plain value: id, age and an owned name. The id is fixed at
//! construction; only age and name can be replaced afterwards.

use std::fmt;

/// Caller-assigned record identifier
pub type TeacherId = i64;

/// A single Teacher entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    id: TeacherId,
    age: i64,
    name: String,
}

impl Teacher {
    /// Create a new record. The name is copied into owned storage.
    pub fn new(id: TeacherId, age: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            age,
            name: name.into(),
        }
    }

    pub fn id(&self) -> TeacherId {
        self.id
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace age and name in place. The id is never touched.
    pub fn update(&mut self, age: i64, name: impl Into<String>) {
        self.age = age;
        self.name = name.into();
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Teacher>(id: {}, name: '{}', age: {})",
            self.id, self.name, self.age
        )
    }
}
