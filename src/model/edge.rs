//! The candidate edge catalog: one decision variable per (student, project).

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::{Cohort, ProjectId, StudentId};

/// A candidate (student, project) pairing.
///
/// The weight is the student's stated rank for the project, or zero when
/// the student never ranked it. An unranked pairing is still assignable
/// (a sponsor pin may force it); it just contributes nothing to the
/// objective.
#[derive(Debug, Clone)]
pub struct Edge {
    pub student: StudentId,
    pub project: ProjectId,
    pub weight: Decimal,
    name: String,
}

impl Edge {
    /// The decision variable's name, unique and deterministic per pairing.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The full cartesian catalog of candidate edges.
///
/// For N students and M projects the catalog holds exactly N*M edges in a
/// fixed order: all of the first student's projects, then the second's,
/// and so on, following cohort load order. The edge index doubles as the
/// decision-variable index in the assembled program; the catalog is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct EdgeCatalog {
    edges: Vec<Edge>,
    index: HashMap<(StudentId, ProjectId), usize>,
}

impl EdgeCatalog {
    /// Build the catalog from a validated cohort.
    pub fn build(cohort: &Cohort) -> Self {
        let mut edges = Vec::with_capacity(cohort.students().len() * cohort.projects().len());
        let mut index = HashMap::with_capacity(edges.capacity());
        for student in cohort.students() {
            for project in cohort.projects() {
                let rank = student.rank_of(project.id).unwrap_or(0);
                index.insert((student.id, project.id), edges.len());
                edges.push(Edge {
                    student: student.id,
                    project: project.id,
                    weight: Decimal::from(rank),
                    name: format!("x_s{}_p{}", student.id, project.id),
                });
            }
        }
        Self { edges, index }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The decision-variable index for a pairing. Panics on ids that are
    /// not part of the cohort the catalog was built from.
    pub fn var_index(&self, student: StudentId, project: ProjectId) -> usize {
        self.index[&(student, project)]
    }

    /// Variable names in variable order, for the serialized artifact.
    pub fn names(&self) -> Vec<String> {
        self.edges.iter().map(|e| e.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Project, SocialMatrix, Student};
    use rust_decimal_macros::dec;

    fn cohort() -> Cohort {
        let mut ada = Student::new(StudentId::new(0), "Ada");
        ada.preferences.insert(ProjectId::new(0), 2);
        ada.preferences.insert(ProjectId::new(1), 1);
        let grace = Student::new(StudentId::new(1), "Grace");
        Cohort::try_new(
            vec![ada, grace],
            vec![
                Project::new(ProjectId::new(0), "Compiler"),
                Project::new(ProjectId::new(1), "Dashboard"),
            ],
            SocialMatrix::empty(2),
            SocialMatrix::empty(2),
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn catalog_is_the_full_cartesian_product() {
        let catalog = EdgeCatalog::build(&cohort());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn edge_names_are_deterministic_and_unique() {
        let catalog = EdgeCatalog::build(&cohort());
        let names = catalog.names();
        assert_eq!(names, vec!["x_s0_p0", "x_s0_p1", "x_s1_p0", "x_s1_p1"]);
    }

    #[test]
    fn weights_come_from_stated_ranks() {
        let catalog = EdgeCatalog::build(&cohort());
        let edge = &catalog.edges()[catalog.var_index(StudentId::new(0), ProjectId::new(0))];
        assert_eq!(edge.weight, dec!(2));
    }

    #[test]
    fn unranked_pairings_have_zero_weight() {
        let catalog = EdgeCatalog::build(&cohort());
        let edge = &catalog.edges()[catalog.var_index(StudentId::new(1), ProjectId::new(1))];
        assert_eq!(edge.weight, Decimal::ZERO);
    }

    #[test]
    fn var_index_round_trips_through_edges() {
        let catalog = EdgeCatalog::build(&cohort());
        for (i, edge) in catalog.edges().iter().enumerate() {
            assert_eq!(catalog.var_index(edge.student, edge.project), i);
        }
    }
}
