//! Project entity.

use super::ids::ProjectId;

/// A capstone project that students are assigned to.
///
/// Immutable after load.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Sponsoring organization, when the project has one.
    pub sponsor: Option<String>,
}

impl Project {
    /// Create an unsponsored project.
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sponsor: None,
        }
    }

    /// Attach a sponsoring organization.
    pub fn with_sponsor(mut self, sponsor: impl Into<String>) -> Self {
        self.sponsor = Some(sponsor.into());
        self
    }
}
