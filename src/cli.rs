//! Command-line interface definitions.
//!
//! Defines the CLI structure for the capmatch binary using `clap`. The
//! solve subcommand runs the full pipeline on a cohort file and renders
//! the roster; exit code 0 means an optimal assignment was found, 1 a
//! terminal non-optimal status (e.g. Infeasible), 2 an error.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::assignment::{self, AssignmentOutcome};
use crate::config::Config;
use crate::error::Result;
use crate::ingest;
use crate::solver::{HighsSolver, SolveStatus};

/// Capstone team assignment CLI
#[derive(Parser, Debug)]
#[command(name = "capmatch")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the capmatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble and solve the team assignment for a cohort file
    Solve(SolveArgs),
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Path to the cohort JSON file
    #[arg(long)]
    pub cohort: PathBuf,

    /// Path to the TOML configuration; defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the assembled program to this LP file before solving
    #[arg(long)]
    pub lp_file: Option<PathBuf>,
}

/// Run a parsed CLI invocation to an exit code.
pub fn run(cli: Cli) -> i32 {
    match cli.command {
        Commands::Solve(args) => match solve(&args, cli.json, cli.quiet) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                2
            }
        },
    }
}

fn solve(args: &SolveArgs, json: bool, quiet: bool) -> Result<i32> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(path) = &args.lp_file {
        config.model_file = Some(path.clone());
    }
    config.init_logging();

    let cohort = ingest::load_cohort(&args.cohort)?;
    let outcome = assignment::solve(&cohort, &config, &HighsSolver::new())?;

    if json {
        print_json(&outcome);
    } else if !quiet {
        print_report(&outcome);
    }

    Ok(if outcome.status == SolveStatus::Optimal {
        0
    } else {
        1
    })
}

fn print_json(outcome: &AssignmentOutcome) {
    println!(
        "{}",
        json!({
            "status": outcome.status,
            "objective": outcome.objective,
            "roster": outcome.roster,
        })
    );
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Size")]
    size: usize,
    #[tabled(rename = "Students")]
    members: String,
}

fn print_report(outcome: &AssignmentOutcome) {
    match outcome.status {
        SolveStatus::Optimal => println!(
            "Status: {} (objective {})",
            "Optimal".green().bold(),
            outcome.objective
        ),
        SolveStatus::Infeasible => println!("Status: {}", "Infeasible".red().bold()),
        status => println!("Status: {}", status.yellow().bold()),
    }

    let Some(roster) = &outcome.roster else {
        println!("No roster produced; adjust the rule configuration and re-run.");
        return;
    };

    let rows: Vec<TeamRow> = roster
        .teams()
        .iter()
        .map(|team| TeamRow {
            project: team.project.clone(),
            size: team.members.len(),
            members: team.members.join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn solve_args_parse() {
        let cli = Cli::parse_from([
            "capmatch",
            "solve",
            "--cohort",
            "cohort.json",
            "--lp-file",
            "model.lp",
            "--json",
        ]);
        assert!(cli.json);
        let Commands::Solve(args) = cli.command;
        assert_eq!(args.cohort, PathBuf::from("cohort.json"));
        assert_eq!(args.lp_file, Some(PathBuf::from("model.lp")));
        assert_eq!(args.config, None);
    }
}
