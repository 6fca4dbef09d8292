//! The validated assignment universe: students, projects, relations, pins.

use std::collections::HashMap;

use super::error::InputError;
use super::ids::{ProjectId, StudentId};
use super::project::Project;
use super::relation::{SocialMatrix, SponsorPin, SponsorRequest};
use super::student::Student;

/// A static input snapshot for one solve.
///
/// Construction through [`Cohort::try_new`] validates everything the model
/// builder relies on: non-empty entity sets, unique ids and names,
/// preferences that reference known projects, square social matrices, and
/// sponsor requests that resolve to real entities. The cohort also owns
/// the identity-to-position maps, so social matrices are never indexed
/// with raw ids by anyone else.
#[derive(Debug, Clone)]
pub struct Cohort {
    students: Vec<Student>,
    projects: Vec<Project>,
    likes: SocialMatrix,
    dislikes: SocialMatrix,
    pins: Vec<SponsorPin>,
    student_pos: HashMap<StudentId, usize>,
    project_pos: HashMap<ProjectId, usize>,
}

impl Cohort {
    /// Validate input data and build the cohort.
    pub fn try_new(
        students: Vec<Student>,
        projects: Vec<Project>,
        likes: SocialMatrix,
        dislikes: SocialMatrix,
        requests: Vec<SponsorRequest>,
    ) -> Result<Self, InputError> {
        if students.is_empty() {
            return Err(InputError::NoStudents);
        }
        if projects.is_empty() {
            return Err(InputError::NoProjects);
        }

        let mut student_pos = HashMap::with_capacity(students.len());
        let mut student_names: HashMap<&str, StudentId> = HashMap::with_capacity(students.len());
        for (pos, s) in students.iter().enumerate() {
            if student_pos.insert(s.id, pos).is_some() {
                return Err(InputError::DuplicateStudent {
                    field: "id",
                    value: s.id.to_string(),
                });
            }
            if student_names.insert(s.name.as_str(), s.id).is_some() {
                return Err(InputError::DuplicateStudent {
                    field: "name",
                    value: s.name.clone(),
                });
            }
        }

        let mut project_pos = HashMap::with_capacity(projects.len());
        let mut project_names: HashMap<&str, ProjectId> = HashMap::with_capacity(projects.len());
        for (pos, p) in projects.iter().enumerate() {
            if project_pos.insert(p.id, pos).is_some() {
                return Err(InputError::DuplicateProject {
                    field: "id",
                    value: p.id.to_string(),
                });
            }
            if project_names.insert(p.name.as_str(), p.id).is_some() {
                return Err(InputError::DuplicateProject {
                    field: "name",
                    value: p.name.clone(),
                });
            }
        }

        for s in &students {
            for project in s.preferences.keys() {
                if !project_pos.contains_key(project) {
                    return Err(InputError::UnknownPreference {
                        student: s.name.clone(),
                        project: project.value(),
                    });
                }
            }
        }

        for (name, matrix) in [("likes", &likes), ("dislikes", &dislikes)] {
            if matrix.size() != students.len() {
                return Err(InputError::MatrixSize {
                    matrix: name,
                    expected: students.len(),
                    rows: matrix.size(),
                });
            }
        }

        let mut pins = Vec::with_capacity(requests.len());
        for request in requests {
            let student = *student_names
                .get(request.student.as_str())
                .ok_or_else(|| InputError::UnknownStudent(request.student.clone()))?;
            let project = *project_names
                .get(request.project.as_str())
                .ok_or_else(|| InputError::UnknownProject(request.project.clone()))?;
            pins.push(SponsorPin { student, project });
        }

        Ok(Self {
            students,
            projects,
            likes,
            dislikes,
            pins,
            student_pos,
            project_pos,
        })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn pins(&self) -> &[SponsorPin] {
        &self.pins
    }

    /// The student with the given id. Panics on an unknown id, which the
    /// validated construction rules out for ids obtained from this cohort.
    pub fn student(&self, id: StudentId) -> &Student {
        &self.students[self.student_pos[&id]]
    }

    /// The project with the given id.
    pub fn project(&self, id: ProjectId) -> &Project {
        &self.projects[self.project_pos[&id]]
    }

    /// Ordered student pairs related by the likes matrix, as ids.
    pub fn liking_pairs(&self) -> Vec<(StudentId, StudentId)> {
        self.id_pairs(&self.likes)
    }

    /// Ordered student pairs related by the dislikes matrix, as ids.
    pub fn disliking_pairs(&self) -> Vec<(StudentId, StudentId)> {
        self.id_pairs(&self.dislikes)
    }

    fn id_pairs(&self, matrix: &SocialMatrix) -> Vec<(StudentId, StudentId)> {
        matrix
            .pairs()
            .map(|(i, j)| (self.students[i].id, self.students[j].id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: usize, name: &str) -> Student {
        Student::new(StudentId::new(id), name)
    }

    fn project(id: usize, name: &str) -> Project {
        Project::new(ProjectId::new(id), name)
    }

    fn cohort_of(students: Vec<Student>, projects: Vec<Project>) -> Result<Cohort, InputError> {
        let n = students.len();
        Cohort::try_new(
            students,
            projects,
            SocialMatrix::empty(n),
            SocialMatrix::empty(n),
            vec![],
        )
    }

    #[test]
    fn rejects_empty_students() {
        let err = cohort_of(vec![], vec![project(0, "P")]).unwrap_err();
        assert_eq!(err, InputError::NoStudents);
    }

    #[test]
    fn rejects_empty_projects() {
        let err = cohort_of(vec![student(0, "Ada")], vec![]).unwrap_err();
        assert_eq!(err, InputError::NoProjects);
    }

    #[test]
    fn rejects_duplicate_student_name() {
        let err = cohort_of(
            vec![student(0, "Ada"), student(1, "Ada")],
            vec![project(0, "P")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            InputError::DuplicateStudent {
                field: "name",
                value: "Ada".into(),
            }
        );
    }

    #[test]
    fn rejects_unknown_preference() {
        let mut s = student(0, "Ada");
        s.preferences.insert(ProjectId::new(9), 3);
        let err = cohort_of(vec![s], vec![project(0, "P")]).unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownPreference {
                student: "Ada".into(),
                project: 9,
            }
        );
    }

    #[test]
    fn rejects_mis_sized_matrix() {
        let err = Cohort::try_new(
            vec![student(0, "Ada"), student(1, "Grace")],
            vec![project(0, "P")],
            SocialMatrix::empty(1),
            SocialMatrix::empty(2),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, InputError::MatrixSize { matrix: "likes", .. }));
    }

    #[test]
    fn resolves_sponsor_requests_to_pins() {
        let cohort = Cohort::try_new(
            vec![student(0, "Ada"), student(1, "Grace")],
            vec![project(0, "Compiler"), project(1, "Dashboard")],
            SocialMatrix::empty(2),
            SocialMatrix::empty(2),
            vec![SponsorRequest {
                student: "Grace".into(),
                project: "Dashboard".into(),
            }],
        )
        .unwrap();
        assert_eq!(
            cohort.pins(),
            &[SponsorPin {
                student: StudentId::new(1),
                project: ProjectId::new(1),
            }]
        );
    }

    #[test]
    fn rejects_unresolvable_sponsor_request() {
        let err = Cohort::try_new(
            vec![student(0, "Ada")],
            vec![project(0, "Compiler")],
            SocialMatrix::empty(1),
            SocialMatrix::empty(1),
            vec![SponsorRequest {
                student: "Nobody".into(),
                project: "Compiler".into(),
            }],
        )
        .unwrap_err();
        assert_eq!(err, InputError::UnknownStudent("Nobody".into()));
    }

    #[test]
    fn id_pairs_translate_positions_to_ids() {
        // Student ids deliberately do not equal their positions.
        let likes = SocialMatrix::try_new(
            "likes",
            vec![vec![false, true], vec![false, false]],
            2,
        )
        .unwrap();
        let cohort = Cohort::try_new(
            vec![student(10, "Ada"), student(20, "Grace")],
            vec![project(0, "P")],
            likes,
            SocialMatrix::empty(2),
            vec![],
        )
        .unwrap();
        assert_eq!(
            cohort.liking_pairs(),
            vec![(StudentId::new(10), StudentId::new(20))]
        );
    }
}
