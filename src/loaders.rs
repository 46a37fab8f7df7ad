use crate::model::{Exam, Student};
use eyre::{Report, Result, WrapErr};
use serde::Deserialize;
use std::path::Path;
use tracing::trace;

/// One row of the roster file. The exams column is a `;`-separated
/// list of `KIND:SCORE` entries and may be empty.
#[derive(Debug, Deserialize)]
struct RawStudent {
    name: String,
    rating: f64,
    #[serde(default)]
    exams: String,
}

impl RawStudent {
    fn into_student(self) -> Result<Student> {
        let exams = parse_exams(&self.exams)
            .wrap_err_with(|| format!("invalid exams for student {}", self.name))?;
        Ok(Student::new(self.name, self.rating, exams))
    }
}

fn parse_exams(field: &str) -> Result<Vec<Exam>> {
    field
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (kind, score) = entry
                .split_once(':')
                .ok_or_else(|| eyre::eyre!("malformed exam entry: {entry}"))?;
            Ok(Exam::new(
                kind.parse()?,
                score
                    .trim()
                    .parse()
                    .wrap_err_with(|| format!("invalid score in exam entry: {entry}"))?,
            ))
        })
        .collect()
}

/// Load the full roster from a CSV file with a `name,rating,exams`
/// header row.
pub fn load_students(path: &Path) -> Result<Vec<Student>> {
    let mut reader = csv::Reader::from_path(path)
        .wrap_err_with(|| format!("cannot open roster file {}", path.display()))?;
    let students = reader
        .deserialize()
        .map(|row| {
            let raw: RawStudent = row.wrap_err("cannot parse roster row")?;
            let student = raw.into_student()?;
            trace!(%student, exams = student.exams.len(), "student loaded");
            Ok(student)
        })
        .collect::<Result<Vec<_>, Report>>()?;
    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExamKind;

    #[test]
    fn parse_exam_list() {
        let exams = parse_exams("ENGLISH:182; MATH:190").unwrap();
        assert_eq!(
            exams,
            vec![
                Exam::new(ExamKind::English, 182.0),
                Exam::new(ExamKind::Math, 190.0),
            ]
        );
    }

    #[test]
    fn empty_exam_field_means_no_exams() {
        assert!(parse_exams("").unwrap().is_empty());
        assert!(parse_exams(" ; ").unwrap().is_empty());
    }

    #[test]
    fn malformed_exam_entries_are_rejected() {
        assert!(parse_exams("MATH").is_err());
        assert!(parse_exams("LATIN:100").is_err());
        assert!(parse_exams("MATH:ninety").is_err());
    }

    #[test]
    fn raw_rows_become_students() {
        let raw = RawStudent {
            name: "2".into(),
            rating: 11.0,
            exams: "ENGLISH:182;MATH:190".into(),
        };
        let student = raw.into_student().unwrap();
        assert_eq!(student.name, "2");
        assert_eq!(student.exams.len(), 2);

        let raw = RawStudent {
            name: "4".into(),
            rating: 11.0,
            exams: String::new(),
        };
        assert!(raw.into_student().unwrap().exams.is_empty());
    }
}
