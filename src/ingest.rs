//! Cohort file loading.
//!
//! The cohort arrives as one JSON document: students with their
//! preference ranks (keyed by project name, higher = more preferred),
//! projects, the positional likes/dislikes matrices, and sponsor
//! requests as name pairs. This module only shapes that document into
//! domain values; all cross-referencing validation lives in
//! [`Cohort::try_new`].

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    Cohort, InputError, Project, ProjectId, SocialMatrix, SponsorRequest, Student, StudentId,
};
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct CohortFile {
    students: Vec<StudentRow>,
    projects: Vec<ProjectRow>,
    #[serde(default)]
    likes: Vec<Vec<u8>>,
    #[serde(default)]
    dislikes: Vec<Vec<u8>>,
    #[serde(default)]
    sponsor_requests: Vec<SponsorRequest>,
}

#[derive(Debug, Deserialize)]
struct StudentRow {
    id: usize,
    name: String,
    /// Project name -> rank, higher = more preferred.
    #[serde(default)]
    preferences: BTreeMap<String, u32>,
    #[serde(default)]
    extrovert: bool,
    #[serde(default)]
    leader: bool,
    #[serde(default)]
    manager: bool,
    #[serde(default)]
    writing_skill: Decimal,
    #[serde(default)]
    programming_attitude: Decimal,
}

#[derive(Debug, Deserialize)]
struct ProjectRow {
    id: usize,
    name: String,
    #[serde(default)]
    sponsor: Option<String>,
}

/// Load and validate a cohort from a JSON file.
pub fn load_cohort<P: AsRef<Path>>(path: P) -> Result<Cohort> {
    let content = std::fs::read_to_string(path)?;
    parse_cohort(&content)
}

/// Parse and validate a cohort from JSON text.
pub fn parse_cohort(content: &str) -> Result<Cohort> {
    let file: CohortFile = serde_json::from_str(content)?;

    let project_ids: HashMap<&str, ProjectId> = file
        .projects
        .iter()
        .map(|p| (p.name.as_str(), ProjectId::new(p.id)))
        .collect();

    let mut students = Vec::with_capacity(file.students.len());
    for row in &file.students {
        let mut preferences = BTreeMap::new();
        for (project_name, rank) in &row.preferences {
            let id = project_ids
                .get(project_name.as_str())
                .copied()
                .ok_or_else(|| InputError::UnknownProject(project_name.clone()))?;
            preferences.insert(id, *rank);
        }
        students.push(Student {
            id: StudentId::new(row.id),
            name: row.name.clone(),
            preferences,
            extrovert: row.extrovert,
            leader: row.leader,
            manager: row.manager,
            writing_skill: row.writing_skill,
            programming_attitude: row.programming_attitude,
        });
    }

    let projects = file
        .projects
        .into_iter()
        .map(|row| Project {
            id: ProjectId::new(row.id),
            name: row.name,
            sponsor: row.sponsor,
        })
        .collect();

    let n = students.len();
    let likes = matrix_from_rows("likes", file.likes, n)?;
    let dislikes = matrix_from_rows("dislikes", file.dislikes, n)?;

    Ok(Cohort::try_new(
        students,
        projects,
        likes,
        dislikes,
        file.sponsor_requests,
    )?)
}

/// An absent matrix means no relations; a present one must be square.
fn matrix_from_rows(
    name: &'static str,
    rows: Vec<Vec<u8>>,
    size: usize,
) -> Result<SocialMatrix> {
    if rows.is_empty() {
        return Ok(SocialMatrix::empty(size));
    }
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(|cell| cell != 0).collect())
        .collect();
    Ok(SocialMatrix::try_new(name, rows, size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const COHORT: &str = r#"{
        "students": [
            {
                "id": 0,
                "name": "Ada",
                "preferences": {"Compiler": 2, "Dashboard": 1},
                "extrovert": true,
                "writing_skill": 4.5
            },
            {"id": 1, "name": "Grace", "preferences": {"Dashboard": 2}}
        ],
        "projects": [
            {"id": 0, "name": "Compiler"},
            {"id": 1, "name": "Dashboard", "sponsor": "BI Inc."}
        ],
        "likes": [[0, 1], [0, 0]],
        "sponsor_requests": [{"student": "Grace", "project": "Dashboard"}]
    }"#;

    #[test]
    fn parses_a_complete_cohort() {
        let cohort = parse_cohort(COHORT).unwrap();
        assert_eq!(cohort.students().len(), 2);
        assert_eq!(cohort.projects().len(), 2);
        assert_eq!(cohort.pins().len(), 1);

        let ada = cohort.student(StudentId::new(0));
        assert!(ada.extrovert);
        assert_eq!(ada.writing_skill, dec!(4.5));
        assert_eq!(ada.rank_of(ProjectId::new(0)), Some(2));

        assert_eq!(
            cohort.liking_pairs(),
            vec![(StudentId::new(0), StudentId::new(1))]
        );
        // The dislikes matrix was absent, so no pairs.
        assert!(cohort.disliking_pairs().is_empty());
    }

    #[test]
    fn unknown_preference_project_is_an_input_error() {
        let err = parse_cohort(
            r#"{
                "students": [{"id": 0, "name": "Ada", "preferences": {"Ghost": 1}}],
                "projects": [{"id": 0, "name": "Compiler"}]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(parse_cohort("{").is_err());
    }

    #[test]
    fn mis_sized_matrix_is_an_input_error() {
        let err = parse_cohort(
            r#"{
                "students": [{"id": 0, "name": "Ada"}],
                "projects": [{"id": 0, "name": "Compiler"}],
                "dislikes": [[0], [0]]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("dislikes"));
    }
}
