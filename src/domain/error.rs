//! Input validation errors for the assignment universe.
//!
//! These errors are returned by [`Cohort::try_new`](super::Cohort::try_new)
//! and abort model construction before any solver call.

use thiserror::Error;

/// Malformed or inconsistent entity, preference, or matrix data detected
/// at model-build time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// At least one student is required to build the edge catalog.
    #[error("student list cannot be empty")]
    NoStudents,

    /// At least one project is required to build the edge catalog.
    #[error("project list cannot be empty")]
    NoProjects,

    /// Student identifiers and names must be unique.
    #[error("duplicate student {field} `{value}`")]
    DuplicateStudent { field: &'static str, value: String },

    /// Project identifiers and names must be unique.
    #[error("duplicate project {field} `{value}`")]
    DuplicateProject { field: &'static str, value: String },

    /// A preference rank points at a project that does not exist.
    #[error("student `{student}` ranks unknown project id {project}")]
    UnknownPreference { student: String, project: usize },

    /// A social matrix must be square with one row per student.
    #[error("{matrix} matrix must be {expected}x{expected}, got {rows} rows")]
    MatrixSize {
        matrix: &'static str,
        expected: usize,
        rows: usize,
    },

    /// A social matrix row has the wrong number of columns.
    #[error("{matrix} matrix row {row} has {cols} columns, expected {expected}")]
    RaggedMatrix {
        matrix: &'static str,
        row: usize,
        cols: usize,
        expected: usize,
    },

    /// Input names a student that does not exist.
    #[error("unknown student `{0}`")]
    UnknownStudent(String),

    /// Input names a project that does not exist.
    #[error("unknown project `{0}`")]
    UnknownProject(String),
}
