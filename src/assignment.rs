//! The solve pipeline: build model, write artifact, solve, extract roster.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{Cohort, Roster, Team};
use crate::error::Result;
use crate::model::{build_program, EdgeCatalog};
use crate::solver::{write_lp, IlpProblem, LpSolution, SolveStatus, Solver};

/// The result of one assignment solve.
#[derive(Debug, Clone)]
pub struct AssignmentOutcome {
    /// Terminal solver status, surfaced verbatim.
    pub status: SolveStatus,
    /// Total stated-preference score of the assignment.
    pub objective: Decimal,
    /// The roster; present only when the status is Optimal.
    pub roster: Option<Roster>,
}

/// Run the full pipeline on one input snapshot.
///
/// When the configuration names a model file, the assembled program is
/// written there before the solver runs so the exact submitted model can
/// be inspected afterwards. Any non-optimal status is returned with no
/// partial roster; nothing is retried or relaxed.
pub fn solve(cohort: &Cohort, config: &Config, solver: &dyn Solver) -> Result<AssignmentOutcome> {
    let program = build_program(cohort, &config.rules);

    if let Some(path) = &config.model_file {
        write_model_file(path, &program.problem, &program.catalog)?;
    }

    info!(solver = solver.name(), "solving");
    let solution = solver.solve_ilp(&program.problem)?;

    if !solution.is_optimal() {
        warn!(status = %solution.status, "no assignment produced");
        return Ok(AssignmentOutcome {
            status: solution.status,
            objective: Decimal::ZERO,
            roster: None,
        });
    }

    let roster = extract_roster(cohort, &program.catalog, &solution);
    info!(
        objective = %solution.objective,
        teams = roster.teams().len(),
        "assignment complete"
    );

    Ok(AssignmentOutcome {
        status: solution.status,
        objective: solution.objective,
        roster: Some(roster),
    })
}

fn write_model_file(path: &Path, problem: &IlpProblem, catalog: &EdgeCatalog) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_lp(&mut w, problem, &catalog.names(), "capstone_teams")?;
    info!(path = %path.display(), "wrote model file");
    Ok(())
}

/// Group the selected edges by project, in cohort load order.
fn extract_roster(cohort: &Cohort, catalog: &EdgeCatalog, solution: &LpSolution) -> Roster {
    let teams = cohort
        .projects()
        .iter()
        .map(|project| {
            let members = cohort
                .students()
                .iter()
                .filter(|student| {
                    let idx = catalog.var_index(student.id, project.id);
                    solution.values[idx] == Decimal::ONE
                })
                .map(|student| student.name.clone())
                .collect();
            Team {
                project: project.name.clone(),
                members,
            }
        })
        .collect();
    Roster::new(teams)
}
