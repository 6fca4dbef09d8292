//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming
//! solver. This implementation wraps it using the good_lp crate for
//! ergonomic Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use super::{ConstraintSense, IlpProblem, LpSolution, ObjectiveSense, SolveStatus, Solver};
use crate::error::{Result, SolverError};

/// HiGHS-based ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HighsSolver;

impl HighsSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HighsSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        let n = problem.lp.num_vars();

        // Handle empty problem
        if n == 0 {
            return Ok(LpSolution {
                values: vec![],
                objective: Decimal::ZERO,
                status: SolveStatus::Optimal,
            });
        }

        // Create variables
        let mut vars = variables!();
        let mut var_list = Vec::with_capacity(n);

        for (i, bounds) in problem.lp.bounds.iter().enumerate() {
            let mut v = variable();

            if let Some(lb) = bounds.lower {
                v = v.min(lb.to_f64().unwrap_or(0.0));
            }
            if let Some(ub) = bounds.upper {
                v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
            }
            if problem.integer_vars.contains(&i) {
                v = v.integer();
            }

            var_list.push(vars.add(v));
        }

        // Build objective function
        let objective: Expression = var_list
            .iter()
            .zip(problem.lp.objective.iter())
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
            .sum();

        let unsolved = match problem.lp.sense {
            ObjectiveSense::Maximize => vars.maximise(&objective),
            ObjectiveSense::Minimize => vars.minimise(&objective),
        };
        let mut model = unsolved.using(highs);

        // Add constraints
        for constr in &problem.lp.constraints {
            let lhs: Expression = var_list
                .iter()
                .zip(constr.coefficients.iter())
                .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
                .sum();

            let rhs = constr.rhs.to_f64().unwrap_or(0.0);

            match constr.sense {
                ConstraintSense::GreaterEqual => {
                    model = model.with(constraint!(lhs >= rhs));
                }
                ConstraintSense::LessEqual => {
                    model = model.with(constraint!(lhs <= rhs));
                }
                ConstraintSense::Equal => {
                    model = model.with(constraint!(lhs == rhs));
                }
            }
        }

        debug!(
            vars = n,
            constraints = problem.lp.constraints.len(),
            "submitting model to HiGHS"
        );

        match model.solve() {
            Ok(solution) => {
                // Integer variables come back as floats; snap them before
                // anything downstream compares against exactly 0 or 1.
                let values: Vec<Decimal> = var_list
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let raw = solution.value(*v);
                        let snapped = if problem.integer_vars.contains(&i) {
                            raw.round()
                        } else {
                            raw
                        };
                        Decimal::try_from(snapped).unwrap_or(Decimal::ZERO)
                    })
                    .collect();

                // Re-evaluate the objective with the snapped values
                let objective = values
                    .iter()
                    .zip(problem.lp.objective.iter())
                    .map(|(v, c)| *v * *c)
                    .sum();

                Ok(LpSolution {
                    values,
                    objective,
                    status: SolveStatus::Optimal,
                })
            }
            Err(ResolutionError::Infeasible) => Ok(LpSolution::terminal(SolveStatus::Infeasible)),
            Err(ResolutionError::Unbounded) => Ok(LpSolution::terminal(SolveStatus::Unbounded)),
            Err(ResolutionError::Other(msg)) => Err(SolverError::Backend(msg.to_string()).into()),
            Err(ResolutionError::Str(msg)) => Err(SolverError::Backend(msg).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Constraint, LpProblem, VariableBounds};
    use rust_decimal_macros::dec;

    #[test]
    fn solver_name() {
        assert_eq!(HighsSolver::new().name(), "highs");
    }

    #[test]
    fn maximizes_simple_binary_choice() {
        // Maximize: 3x + 2y subject to x + y <= 1, x, y in {0, 1}
        let mut lp = LpProblem::new(2, ObjectiveSense::Maximize);
        lp.objective = vec![dec!(3), dec!(2)];
        lp.bounds = vec![VariableBounds::binary(); 2];
        lp.constraints = vec![Constraint::leq("cap", vec![dec!(1), dec!(1)], dec!(1))];

        let solution = HighsSolver::new()
            .solve_ilp(&IlpProblem::all_binary(lp))
            .unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.values, vec![dec!(1), dec!(0)]);
        assert_eq!(solution.objective, dec!(3));
    }

    #[test]
    fn equality_constraint_is_honored() {
        // Maximize: x subject to x + y = 2, binaries
        let mut lp = LpProblem::new(2, ObjectiveSense::Maximize);
        lp.objective = vec![dec!(1), dec!(0)];
        lp.bounds = vec![VariableBounds::binary(); 2];
        lp.constraints = vec![Constraint::eq("both", vec![dec!(1), dec!(1)], dec!(2))];

        let solution = HighsSolver::new()
            .solve_ilp(&IlpProblem::all_binary(lp))
            .unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.values, vec![dec!(1), dec!(1)]);
    }

    #[test]
    fn contradictory_constraints_report_infeasible() {
        // x = 0 and x = 1 cannot both hold.
        let mut lp = LpProblem::new(1, ObjectiveSense::Maximize);
        lp.bounds = vec![VariableBounds::binary()];
        lp.constraints = vec![
            Constraint::eq("zero", vec![dec!(1)], dec!(0)),
            Constraint::eq("one", vec![dec!(1)], dec!(1)),
        ];

        let solution = HighsSolver::new()
            .solve_ilp(&IlpProblem::all_binary(lp))
            .unwrap();

        assert_eq!(solution.status, SolveStatus::Infeasible);
        assert!(solution.values.is_empty());
    }

    #[test]
    fn missing_upper_bound_reports_unbounded() {
        // Maximize x with no upper bound and no constraints.
        let mut lp = LpProblem::new(1, ObjectiveSense::Maximize);
        lp.objective = vec![dec!(1)];

        let solution = HighsSolver::new()
            .solve_ilp(&IlpProblem {
                lp,
                integer_vars: vec![],
            })
            .unwrap();

        assert_eq!(solution.status, SolveStatus::Unbounded);
    }

    #[test]
    fn empty_problem_is_trivially_optimal() {
        let solution = HighsSolver::new()
            .solve_ilp(&IlpProblem::all_binary(LpProblem::new(
                0,
                ObjectiveSense::Maximize,
            )))
            .unwrap();
        assert!(solution.is_optimal());
        assert!(solution.values.is_empty());
    }
}
