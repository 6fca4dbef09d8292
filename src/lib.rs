//! Capmatch - capstone team assignment via integer linear programming.
//!
//! This crate translates a cohort of students, projects, social relations
//! and sponsor requests into a single binary integer linear program,
//! hands it to an external solver, and extracts a concrete team roster
//! from the solution.
//!
//! # Architecture
//!
//! The pipeline runs leaf-first through these layers:
//!
//! - **[`domain`]** - value types for the assignment universe: students,
//!   projects, social matrices, sponsor pins, and the validated [`domain::Cohort`]
//! - **[`model`]** - the edge catalog (one binary decision variable per
//!   candidate student-project pairing), the per-family constraint
//!   emitters, and the objective
//! - **[`solver`]** - the solver port: a problem IR, the LP-format
//!   artifact writer, and the HiGHS backend via good_lp
//! - **[`assignment`]** - the build -> write artifact -> solve -> extract
//!   pipeline
//!
//! Every business rule is an independently toggleable family in the
//! [`config::Rules`] registry; disabling a family means its constraints
//! are never emitted. All constraints are hard: an over-constrained
//! configuration solves to Infeasible and is surfaced as such, never
//! silently repaired.
//!
//! # Example
//!
//! ```no_run
//! use capmatch::assignment;
//! use capmatch::config::Config;
//! use capmatch::ingest;
//! use capmatch::solver::HighsSolver;
//!
//! # fn main() -> capmatch::error::Result<()> {
//! let cohort = ingest::load_cohort("cohort.json")?;
//! let config = Config::default();
//! let outcome = assignment::solve(&cohort, &config, &HighsSolver::new())?;
//! println!("status: {}", outcome.status);
//! # Ok(())
//! # }
//! ```

pub mod assignment;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod model;
pub mod solver;
