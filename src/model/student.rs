use super::{Exam, ExamKind};
use std::fmt;

/// A student record as supplied by a loader. Read-only for the whole
/// lifetime of a query: nothing in this crate mutates it after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub name: String,
    pub rating: f64,
    pub exams: Vec<Exam>,
}

impl Student {
    pub fn new(name: impl Into<String>, rating: f64, exams: Vec<Exam>) -> Student {
        Student {
            name: name.into(),
            rating,
            exams,
        }
    }

    /// True if any exam of the given kind satisfies `pred`. Duplicate
    /// exams of one kind are legal, hence "any" rather than a lookup.
    pub fn has_exam_matching<F>(&self, kind: ExamKind, pred: F) -> bool
    where
        F: Fn(&Exam) -> bool,
    {
        self.exams.iter().any(|e| e.kind == kind && pred(e))
    }

    pub fn has_exam_of(&self, kind: ExamKind) -> bool {
        self.has_exam_matching(kind, |_| true)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
