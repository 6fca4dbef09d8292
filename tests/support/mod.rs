#![allow(dead_code)]

//! Shared builders for integration tests.

use capmatch::config::Rules;
use capmatch::domain::{
    Cohort, Project, ProjectId, SocialMatrix, SponsorRequest, Student, StudentId,
};

/// A student with no preferences and zeroed traits.
pub fn student(id: usize, name: &str) -> Student {
    Student::new(StudentId::new(id), name)
}

/// Attach a preference rank (higher = more preferred).
pub fn prefer(mut student: Student, project: usize, rank: u32) -> Student {
    student.preferences.insert(ProjectId::new(project), rank);
    student
}

pub fn project(id: usize, name: &str) -> Project {
    Project::new(ProjectId::new(id), name)
}

/// A relation matrix over `size` students with the given ordered pairs set.
pub fn matrix(size: usize, pairs: &[(usize, usize)]) -> SocialMatrix {
    let mut rows = vec![vec![false; size]; size];
    for &(i, j) in pairs {
        rows[i][j] = true;
    }
    SocialMatrix::try_new("test", rows, size).expect("square matrix")
}

pub fn request(student: &str, project: &str) -> SponsorRequest {
    SponsorRequest {
        student: student.into(),
        project: project.into(),
    }
}

/// A cohort with no social relations and no sponsor requests.
pub fn cohort(students: Vec<Student>, projects: Vec<Project>) -> Cohort {
    let n = students.len();
    Cohort::try_new(
        students,
        projects,
        SocialMatrix::empty(n),
        SocialMatrix::empty(n),
        vec![],
    )
    .expect("valid cohort")
}

/// A cohort with explicit relations and sponsor requests.
pub fn cohort_with(
    students: Vec<Student>,
    projects: Vec<Project>,
    likes: &[(usize, usize)],
    dislikes: &[(usize, usize)],
    requests: Vec<SponsorRequest>,
) -> Cohort {
    let n = students.len();
    Cohort::try_new(
        students,
        projects,
        matrix(n, likes),
        matrix(n, dislikes),
        requests,
    )
    .expect("valid cohort")
}

/// A registry with every family switched off.
pub fn bare_rules() -> Rules {
    let mut rules = Rules::default();
    rules.capacity.enabled = false;
    rules.team_size.max_enabled = false;
    rules.team_size.min_enabled = false;
    rules.likes.enabled = false;
    rules.dislikes.enabled = false;
    rules.sponsors.enabled = false;
    rules.extroverts.enabled = false;
    rules.writing.enabled = false;
    rules.leadership.enabled = false;
    rules.programming.enabled = false;
    rules.manager.enabled = false;
    rules
}
