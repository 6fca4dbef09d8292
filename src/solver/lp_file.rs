//! CPLEX LP-format serialization of an assembled problem.
//!
//! The assembled program is written to a durable, human-inspectable file
//! before solving so an operator can diagnose an infeasible configuration
//! row by row. Row names come from the constraint labels.

use std::io::{self, Write};

use rust_decimal::Decimal;

use super::{ConstraintSense, IlpProblem, ObjectiveSense, VariableBounds};

/// Serialize `problem` in CPLEX LP format.
///
/// `names` must hold one unique variable name per problem variable, in
/// variable order.
pub fn write_lp(
    w: &mut impl Write,
    problem: &IlpProblem,
    names: &[String],
    title: &str,
) -> io::Result<()> {
    debug_assert_eq!(names.len(), problem.lp.num_vars());

    writeln!(w, "\\ {title}")?;

    match problem.lp.sense {
        ObjectiveSense::Maximize => writeln!(w, "Maximize")?,
        ObjectiveSense::Minimize => writeln!(w, "Minimize")?,
    }
    writeln!(w, " obj: {}", terms(&problem.lp.objective, names))?;

    writeln!(w, "Subject To")?;
    for c in &problem.lp.constraints {
        let op = match c.sense {
            ConstraintSense::GreaterEqual => ">=",
            ConstraintSense::LessEqual => "<=",
            ConstraintSense::Equal => "=",
        };
        writeln!(w, " {}: {} {} {}", c.label, terms(&c.coefficients, names), op, c.rhs)?;
    }

    // Continuous variables with non-default bounds.
    let mut bounds_lines = Vec::new();
    for (i, b) in problem.lp.bounds.iter().enumerate() {
        if problem.integer_vars.contains(&i) || *b == VariableBounds::default() {
            continue;
        }
        bounds_lines.push(match (b.lower, b.upper) {
            (Some(lb), Some(ub)) => format!(" {} <= {} <= {}", lb, names[i], ub),
            (Some(lb), None) => format!(" {} >= {}", names[i], lb),
            (None, Some(ub)) => format!(" {} <= {}", names[i], ub),
            (None, None) => format!(" {} free", names[i]),
        });
    }
    if !bounds_lines.is_empty() {
        writeln!(w, "Bounds")?;
        for line in bounds_lines {
            writeln!(w, "{line}")?;
        }
    }

    let (binaries, generals): (Vec<_>, Vec<_>) = problem
        .integer_vars
        .iter()
        .partition(|&&i| problem.lp.bounds[i] == VariableBounds::binary());
    if !binaries.is_empty() {
        writeln!(w, "Binaries")?;
        for chunk in binaries.chunks(8) {
            let line: Vec<&str> = chunk.iter().map(|&&i| names[i].as_str()).collect();
            writeln!(w, " {}", line.join(" "))?;
        }
    }
    if !generals.is_empty() {
        writeln!(w, "Generals")?;
        for chunk in generals.chunks(8) {
            let line: Vec<&str> = chunk.iter().map(|&&i| names[i].as_str()).collect();
            writeln!(w, " {}", line.join(" "))?;
        }
    }

    writeln!(w, "End")
}

/// Render the nonzero terms of a coefficient row.
fn terms(coefficients: &[Decimal], names: &[String]) -> String {
    let mut out = String::new();
    for (i, c) in coefficients.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        if out.is_empty() {
            if c.is_sign_negative() {
                out.push_str("- ");
            }
        } else if c.is_sign_negative() {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }
        let magnitude = c.abs();
        if magnitude == Decimal::ONE {
            out.push_str(&names[i]);
        } else {
            out.push_str(&format!("{} {}", magnitude, names[i]));
        }
    }
    if out.is_empty() {
        // An all-zero row still needs a syntactically valid expression.
        out.push_str(&format!("0 {}", names[0]));
    }
    out
}
