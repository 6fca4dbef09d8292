//! Solver port for integer linear programming.
//!
//! This module defines the problem intermediate representation handed to
//! solver backends and the trait those backends implement. The model
//! layer builds an [`IlpProblem`]; a backend turns it into a terminal
//! [`SolveStatus`] and a variable assignment.

mod highs;
mod lp_file;

pub use highs::HighsSolver;
pub use lp_file::write_lp;

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;

/// An integer linear programming solver backend.
///
/// Implementations wrap a concrete solver (HiGHS, CBC, ...) and block
/// until the solver returns a terminal status. No timeout or cancellation
/// is modeled; the call runs to completion or backend failure.
pub trait Solver {
    /// Backend name for logging/config.
    fn name(&self) -> &'static str;

    /// Solve the problem to a terminal status.
    ///
    /// Infeasible and unbounded models are *statuses* carried in the
    /// returned [`LpSolution`]; only a backend failure is an `Err`.
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Whether the objective is maximized or minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveSense {
    Maximize,
    Minimize,
}

/// Linear programming problem definition.
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective direction.
    pub sense: ObjectiveSense,
    /// Objective coefficients, one per variable.
    pub objective: Vec<Decimal>,
    /// Constraints.
    pub constraints: Vec<Constraint>,
    /// Variable bounds.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a problem over `num_vars` variables with a zero objective.
    #[must_use]
    pub fn new(num_vars: usize, sense: ObjectiveSense) -> Self {
        Self {
            sense,
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// Integer linear programming problem.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Base LP problem.
    pub lp: LpProblem,
    /// Indices of variables that must be integer.
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create with all variables integer (binary when bounds are [0, 1]).
    #[must_use]
    pub fn all_binary(lp: LpProblem) -> Self {
        let integer_vars: Vec<usize> = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }
}

/// A single labelled constraint: `sum(coeffs[i] * x[i]) {>=, <=, =} rhs`.
///
/// The label names the constraint row in the serialized LP artifact so an
/// operator can trace an infeasibility back to the rule that emitted it.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Row name, unique within one problem.
    pub label: String,
    /// Coefficients for each variable.
    pub coefficients: Vec<Decimal>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub fn geq(label: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            label: label.into(),
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub fn leq(label: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            label: label.into(),
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub fn eq(label: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            label: label.into(),
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }
}

/// Constraint sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    GreaterEqual,
    LessEqual,
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
        }
    }
}

/// Solution to an ILP problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Variable values; empty unless the status is [`SolveStatus::Optimal`].
    pub values: Vec<Decimal>,
    /// Objective value at the solution.
    pub objective: Decimal,
    /// Terminal solver status.
    pub status: SolveStatus,
}

impl LpSolution {
    /// A terminal non-optimal outcome carrying no variable assignment.
    #[must_use]
    pub fn terminal(status: SolveStatus) -> Self {
        Self {
            values: Vec::new(),
            objective: Decimal::ZERO,
            status,
        }
    }

    /// Check if the solution is optimal.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

/// Terminal solver status, surfaced verbatim to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// Found a provably optimal solution.
    Optimal,
    /// The combined hard constraints admit no solution.
    Infeasible,
    /// The objective can grow without bound.
    Unbounded,
    /// The solver terminated without reaching any of the above.
    NotSolved,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Optimal => "Optimal",
            Self::Infeasible => "Infeasible",
            Self::Unbounded => "Unbounded",
            Self::NotSolved => "Not Solved",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_problem_has_zero_objective() {
        let lp = LpProblem::new(3, ObjectiveSense::Maximize);
        assert_eq!(lp.num_vars(), 3);
        assert!(lp.objective.iter().all(|c| c.is_zero()));
        assert_eq!(lp.bounds.len(), 3);
    }

    #[test]
    fn all_binary_marks_every_variable() {
        let ilp = IlpProblem::all_binary(LpProblem::new(4, ObjectiveSense::Minimize));
        assert_eq!(ilp.integer_vars, vec![0, 1, 2, 3]);
    }

    #[test]
    fn constraint_constructors_set_sense() {
        let c = Constraint::geq("floor", vec![dec!(1), dec!(2)], dec!(3));
        assert_eq!(c.sense, ConstraintSense::GreaterEqual);
        assert_eq!(c.label, "floor");
        let c = Constraint::leq("cap", vec![dec!(1)], dec!(8));
        assert_eq!(c.sense, ConstraintSense::LessEqual);
        let c = Constraint::eq("pin", vec![dec!(1)], dec!(1));
        assert_eq!(c.sense, ConstraintSense::Equal);
    }

    #[test]
    fn terminal_solution_is_not_optimal() {
        let s = LpSolution::terminal(SolveStatus::Infeasible);
        assert!(!s.is_optimal());
        assert!(s.values.is_empty());
    }

    #[test]
    fn status_display_matches_report_wording() {
        assert_eq!(SolveStatus::Optimal.to_string(), "Optimal");
        assert_eq!(SolveStatus::NotSolved.to_string(), "Not Solved");
    }
}
