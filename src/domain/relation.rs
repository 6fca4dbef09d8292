//! Social relations between students and sponsor placement requests.
//!
//! The likes/dislikes matrices arrive as positional data: row k and column
//! k both refer to the k-th student in load order, not to a student id.
//! [`SocialMatrix`] therefore only answers queries by position; the
//! id-to-position translation lives in [`Cohort`](super::Cohort), which
//! owns the validated map. Nothing outside the cohort should index a
//! matrix directly.

use serde::Deserialize;

use super::error::InputError;
use super::ids::{ProjectId, StudentId};

/// A square boolean relation over student positions.
#[derive(Debug, Clone)]
pub struct SocialMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl SocialMatrix {
    /// Validate and build a matrix from row-major input.
    ///
    /// The input must have exactly `expected` rows of `expected` columns
    /// each; anything else is an [`InputError`] naming the offending row.
    pub fn try_new(
        name: &'static str,
        rows: Vec<Vec<bool>>,
        expected: usize,
    ) -> Result<Self, InputError> {
        if rows.len() != expected {
            return Err(InputError::MatrixSize {
                matrix: name,
                expected,
                rows: rows.len(),
            });
        }
        let mut cells = Vec::with_capacity(expected * expected);
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != expected {
                return Err(InputError::RaggedMatrix {
                    matrix: name,
                    row,
                    cols: cols.len(),
                    expected,
                });
            }
            cells.extend_from_slice(cols);
        }
        Ok(Self {
            size: expected,
            cells,
        })
    }

    /// An all-false relation over `size` students.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Number of students the relation covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the relation holds for the ordered position pair `(i, j)`.
    pub fn relates(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.size + j]
    }

    /// All ordered off-diagonal position pairs `(i, j)` where the relation
    /// holds. The diagonal is skipped: a pair needs two distinct students
    /// before any pairing constraint makes sense.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |i| {
            (0..self.size).filter_map(move |j| (i != j && self.relates(i, j)).then_some((i, j)))
        })
    }
}

/// An unresolved sponsor request as it appears in input: names, not ids.
#[derive(Debug, Clone, Deserialize)]
pub struct SponsorRequest {
    pub student: String,
    pub project: String,
}

/// A resolved sponsor request: this student must land on this project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SponsorPin {
    pub student: StudentId,
    pub project: ProjectId,
}
