//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Student identifier - newtype for type safety.
///
/// The inner integer is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(usize);

impl StudentId {
    /// Create a new StudentId from an integer.
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    pub const fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StudentId {
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

/// Project identifier - newtype for type safety.
///
/// The inner integer is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(usize);

impl ProjectId {
    /// Create a new ProjectId from an integer.
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    pub const fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ProjectId {
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}
