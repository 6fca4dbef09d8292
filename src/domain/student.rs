//! Student entity with project preferences and composition traits.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::ids::{ProjectId, StudentId};

/// A student to be placed on exactly one project team.
///
/// Preference ranks are stored in maximization sense: a higher rank means
/// a more preferred project. A project absent from the map was never
/// ranked by the student and contributes nothing to the objective, though
/// other constraints may still force the pairing.
///
/// Immutable after load.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Project preference ranks, higher = more preferred.
    pub preferences: BTreeMap<ProjectId, u32>,
    /// Socially active; counted by the group-dynamic rule.
    pub extrovert: bool,
    /// Counted by the leadership-presence rule.
    pub leader: bool,
    /// Counted by the manager-presence rule.
    pub manager: bool,
    /// Aggregated by the writing-skill floor rule.
    pub writing_skill: Decimal,
    /// Aggregated by the programming-attitude floor rule.
    pub programming_attitude: Decimal,
}

impl Student {
    /// Create a student with no preferences and all traits zeroed.
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            preferences: BTreeMap::new(),
            extrovert: false,
            leader: false,
            manager: false,
            writing_skill: Decimal::ZERO,
            programming_attitude: Decimal::ZERO,
        }
    }

    /// The stated rank for a project, if the student ranked it.
    pub fn rank_of(&self, project: ProjectId) -> Option<u32> {
        self.preferences.get(&project).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_student_has_no_preferences() {
        let s = Student::new(StudentId::new(0), "Ada");
        assert!(s.preferences.is_empty());
        assert_eq!(s.rank_of(ProjectId::new(0)), None);
    }

    #[test]
    fn rank_of_returns_stated_rank() {
        let mut s = Student::new(StudentId::new(1), "Grace");
        s.preferences.insert(ProjectId::new(2), 5);
        assert_eq!(s.rank_of(ProjectId::new(2)), Some(5));
        assert_eq!(s.rank_of(ProjectId::new(3)), None);
    }
}
