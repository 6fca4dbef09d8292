//! The final project-to-students grouping.

use serde::Serialize;

/// One project's assigned students, in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub project: String,
    pub members: Vec<String>,
}

/// The roster produced from an optimal solution: every project with its
/// assigned students, in project load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// The members of the named project, if the roster has it.
    pub fn members_of(&self, project: &str) -> Option<&[String]> {
        self.teams
            .iter()
            .find(|t| t.project == project)
            .map(|t| t.members.as_slice())
    }

    /// Total number of assigned seats across all teams.
    pub fn assigned_count(&self) -> usize {
        self.teams.iter().map(|t| t.members.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            Team {
                project: "Compiler".into(),
                members: vec!["Ada".into(), "Grace".into()],
            },
            Team {
                project: "Dashboard".into(),
                members: vec!["Edsger".into()],
            },
        ])
    }

    #[test]
    fn members_of_finds_team() {
        let r = roster();
        assert_eq!(
            r.members_of("Compiler"),
            Some(&["Ada".to_string(), "Grace".to_string()][..])
        );
        assert_eq!(r.members_of("Nonexistent"), None);
    }

    #[test]
    fn assigned_count_sums_members() {
        assert_eq!(roster().assigned_count(), 3);
    }
}
