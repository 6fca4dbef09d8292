//! Solver-agnostic domain types for the assignment universe.

mod cohort;
mod error;
mod ids;
mod project;
mod relation;
mod roster;
mod student;

pub use cohort::Cohort;
pub use error::InputError;
pub use ids::{ProjectId, StudentId};
pub use project::Project;
pub use relation::{SocialMatrix, SponsorPin, SponsorRequest};
pub use roster::{Roster, Team};
pub use student::Student;
