//! Program assembly: edges, objective, constraints, bounds.

use tracing::{debug, info};

use crate::config::Rules;
use crate::domain::Cohort;
use crate::solver::{IlpProblem, LpProblem, ObjectiveSense, VariableBounds};

use super::constraints::assemble;
use super::edge::EdgeCatalog;

/// The fully assembled program together with the catalog that maps its
/// variables back to (student, project) pairings.
#[derive(Debug, Clone)]
pub struct AssignmentProgram {
    pub catalog: EdgeCatalog,
    pub problem: IlpProblem,
}

/// Translate a cohort and a rule registry into a binary ILP.
///
/// The objective maximizes total stated preference: the sum of each
/// selected edge's weight. Every decision variable is binary.
pub fn build_program(cohort: &Cohort, rules: &Rules) -> AssignmentProgram {
    let catalog = EdgeCatalog::build(cohort);

    let mut lp = LpProblem::new(catalog.len(), ObjectiveSense::Maximize);
    for (i, edge) in catalog.edges().iter().enumerate() {
        lp.objective[i] = edge.weight;
    }
    lp.bounds = vec![VariableBounds::binary(); catalog.len()];
    lp.constraints = assemble(cohort, &catalog, rules);

    info!(
        students = cohort.students().len(),
        projects = cohort.projects().len(),
        families = ?rules.enabled_families(),
        "assembled assignment model"
    );
    debug!(
        variables = catalog.len(),
        constraints = lp.constraints.len(),
        "model dimensions"
    );

    AssignmentProgram {
        catalog,
        problem: IlpProblem::all_binary(lp),
    }
}
