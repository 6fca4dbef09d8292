//! Constraint emission, one function per rule family.
//!
//! Each family is independently toggleable; a disabled family emits
//! nothing at all. Emitters are pure: the registry is passed in, never
//! read from ambient state, so every family can be exercised in
//! isolation. Capacity comes first in assembly order since the social
//! and composition families implicitly assume each student occupies
//! exactly one project.

use rust_decimal::Decimal;

use crate::config::Rules;
use crate::domain::{Cohort, ProjectId, Student};
use crate::solver::Constraint;

use super::edge::EdgeCatalog;

/// Emit the constraints of every enabled family, in family order.
pub fn assemble(cohort: &Cohort, catalog: &EdgeCatalog, rules: &Rules) -> Vec<Constraint> {
    let mut out = Vec::new();

    if rules.capacity.enabled {
        out.extend(student_capacity(
            cohort,
            catalog,
            rules.capacity.projects_per_student,
        ));
    }
    if rules.team_size.max_enabled {
        out.extend(team_size_max(cohort, catalog, rules.team_size.max));
    }
    if rules.team_size.min_enabled {
        out.extend(team_size_min(cohort, catalog, rules.team_size.min));
    }
    if rules.likes.enabled {
        out.extend(likes(cohort, catalog));
    }
    if rules.dislikes.enabled {
        out.extend(dislikes(cohort, catalog));
    }
    if rules.sponsors.enabled {
        out.extend(sponsor_pins(cohort, catalog));
    }
    if rules.extroverts.enabled {
        out.extend(trait_floor(
            cohort,
            catalog,
            "extro",
            Decimal::from(rules.extroverts.required),
            |s| flag(s.extrovert),
        ));
    }
    if rules.writing.enabled {
        if let Some(floor) = rules.writing.floor {
            out.extend(trait_floor(cohort, catalog, "writing", floor, |s| {
                s.writing_skill
            }));
        }
    }
    if rules.leadership.enabled {
        out.extend(trait_floor(cohort, catalog, "lead", Decimal::ONE, |s| {
            flag(s.leader)
        }));
    }
    if rules.programming.enabled {
        if let Some(floor) = rules.programming.floor {
            out.extend(trait_floor(cohort, catalog, "prog", floor, |s| {
                s.programming_attitude
            }));
        }
    }
    if rules.manager.enabled {
        out.extend(trait_floor(cohort, catalog, "mgr", Decimal::ONE, |s| {
            flag(s.manager)
        }));
    }

    out
}

fn flag(b: bool) -> Decimal {
    if b {
        Decimal::ONE
    } else {
        Decimal::ZERO
    }
}

fn zeros(catalog: &EdgeCatalog) -> Vec<Decimal> {
    vec![Decimal::ZERO; catalog.len()]
}

/// Each student's edges sum to exactly `projects_per_student`.
fn student_capacity(
    cohort: &Cohort,
    catalog: &EdgeCatalog,
    projects_per_student: u32,
) -> Vec<Constraint> {
    cohort
        .students()
        .iter()
        .map(|s| {
            let mut coefficients = zeros(catalog);
            for p in cohort.projects() {
                coefficients[catalog.var_index(s.id, p.id)] = Decimal::ONE;
            }
            Constraint::eq(
                format!("cap_s{}", s.id),
                coefficients,
                Decimal::from(projects_per_student),
            )
        })
        .collect()
}

/// No project's edges sum above `max`.
fn team_size_max(cohort: &Cohort, catalog: &EdgeCatalog, max: u32) -> Vec<Constraint> {
    cohort
        .projects()
        .iter()
        .map(|p| {
            Constraint::leq(
                format!("size_max_p{}", p.id),
                project_membership(cohort, catalog, p.id),
                Decimal::from(max),
            )
        })
        .collect()
}

/// No project's edges sum below `min`.
fn team_size_min(cohort: &Cohort, catalog: &EdgeCatalog, min: u32) -> Vec<Constraint> {
    cohort
        .projects()
        .iter()
        .map(|p| {
            Constraint::geq(
                format!("size_min_p{}", p.id),
                project_membership(cohort, catalog, p.id),
                Decimal::from(min),
            )
        })
        .collect()
}

fn project_membership(
    cohort: &Cohort,
    catalog: &EdgeCatalog,
    project: ProjectId,
) -> Vec<Decimal> {
    let mut coefficients = zeros(catalog);
    for s in cohort.students() {
        coefficients[catalog.var_index(s.id, project)] = Decimal::ONE;
    }
    coefficients
}

/// For every liking ordered pair and every project, the pair's two edges
/// on that project are selected together or not at all. Summed over all
/// projects this forces the pair onto the same project.
///
/// Identical indices never reach here: the relation iterator skips the
/// diagonal, so each emitted row really covers two distinct edges.
fn likes(cohort: &Cohort, catalog: &EdgeCatalog) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (i, j) in cohort.liking_pairs() {
        for p in cohort.projects() {
            let mut coefficients = zeros(catalog);
            coefficients[catalog.var_index(i, p.id)] = Decimal::ONE;
            coefficients[catalog.var_index(j, p.id)] = -Decimal::ONE;
            out.push(Constraint::eq(
                format!("like_s{}_s{}_p{}", i, j, p.id),
                coefficients,
                Decimal::ZERO,
            ));
        }
    }
    out
}

/// For every disliking ordered pair and every project, at most one of the
/// pair's two edges on that project is selected.
fn dislikes(cohort: &Cohort, catalog: &EdgeCatalog) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (i, j) in cohort.disliking_pairs() {
        for p in cohort.projects() {
            let mut coefficients = zeros(catalog);
            coefficients[catalog.var_index(i, p.id)] = Decimal::ONE;
            coefficients[catalog.var_index(j, p.id)] = Decimal::ONE;
            out.push(Constraint::leq(
                format!("dislike_s{}_s{}_p{}", i, j, p.id),
                coefficients,
                Decimal::ONE,
            ));
        }
    }
    out
}

/// Each sponsor pin forces its edge to 1.
fn sponsor_pins(cohort: &Cohort, catalog: &EdgeCatalog) -> Vec<Constraint> {
    cohort
        .pins()
        .iter()
        .enumerate()
        .map(|(k, pin)| {
            let mut coefficients = zeros(catalog);
            coefficients[catalog.var_index(pin.student, pin.project)] = Decimal::ONE;
            Constraint::eq(
                format!("sponsor{}_s{}_p{}", k, pin.student, pin.project),
                coefficients,
                Decimal::ONE,
            )
        })
        .collect()
}

/// Per project, the trait-weighted sum of selected edges stays at or
/// above `floor`.
fn trait_floor(
    cohort: &Cohort,
    catalog: &EdgeCatalog,
    prefix: &str,
    floor: Decimal,
    weight: impl Fn(&Student) -> Decimal,
) -> Vec<Constraint> {
    cohort
        .projects()
        .iter()
        .map(|p| {
            let mut coefficients = zeros(catalog);
            for s in cohort.students() {
                coefficients[catalog.var_index(s.id, p.id)] = weight(s);
            }
            Constraint::geq(format!("{}_p{}", prefix, p.id), coefficients, floor)
        })
        .collect()
}
