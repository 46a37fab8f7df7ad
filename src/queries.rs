use crate::model::{Exam, ExamKind, Student};
use tracing::trace;

/// Source of the student roster. One read method so the query service
/// can run against any materialized collection, fixture or loaded.
pub trait StudentProvider {
    /// The complete current roster, treated as an immutable snapshot
    /// for the duration of one query call.
    fn all(&self) -> &[Student];
}

impl StudentProvider for Vec<Student> {
    fn all(&self) -> &[Student] {
        self
    }
}

/// Stateless query evaluation over a provider snapshot. Each call
/// fetches the snapshot once and scans it; no query mutates anything,
/// and "no match" is `None` or an empty vector, never an error.
pub struct Queries<P> {
    provider: P,
}

impl<P: StudentProvider> Queries<P> {
    pub fn new(provider: P) -> Queries<P> {
        Queries { provider }
    }

    /// The first student owning an exam equal to the best score
    /// recorded for `kind`, or `None` when nobody sat that exam.
    /// Ties on the maximum go to the first student in roster order.
    pub fn with_max_exam(&self, kind: ExamKind) -> Option<&Student> {
        let students = self.provider.all();
        let max = students
            .iter()
            .flat_map(|s| &s.exams)
            .filter(|e| e.kind == kind)
            .map(|e| e.score)
            .max_by(f64::total_cmp)?;
        trace!(%kind, %max, "maximum score computed");
        let best = Exam::new(kind, max);
        students.iter().find(|s| s.exams.contains(&best))
    }

    /// Every student with at least one `kind` exam scoring at least
    /// `pass_rate`, in roster order.
    pub fn with_enough_exam(&self, kind: ExamKind, pass_rate: f64) -> Vec<&Student> {
        self.provider
            .all()
            .iter()
            .filter(|s| s.has_exam_matching(kind, |e| e.score >= pass_rate))
            .collect()
    }

    /// Every student passing both Math and English at `pass_rate`. The
    /// two conditions are checked independently, so they may be met by
    /// two distinct exam entries.
    pub fn with_enough_exams(&self, pass_rate: f64) -> Vec<&Student> {
        self.provider
            .all()
            .iter()
            .filter(|s| {
                s.has_exam_matching(ExamKind::Math, |e| e.score >= pass_rate)
                    && s.has_exam_matching(ExamKind::English, |e| e.score >= pass_rate)
            })
            .collect()
    }

    /// The first student in roster order with no exam of `kind`. A
    /// student with no exams at all qualifies.
    pub fn first_without_exam(&self, kind: ExamKind) -> Option<&Student> {
        self.provider.all().iter().find(|s| !s.has_exam_of(kind))
    }

    /// Every student rated at least `rating_pass_rate` who sat an exam
    /// of `kind`, whatever the score.
    pub fn with_rating_and_exam(&self, kind: ExamKind, rating_pass_rate: f64) -> Vec<&Student> {
        self.provider
            .all()
            .iter()
            .filter(|s| s.rating >= rating_pass_rate && s.has_exam_of(kind))
            .collect()
    }

    /// Every student whose exam count is exactly `count`.
    pub fn with_exam_count(&self, count: usize) -> Vec<&Student> {
        self.provider
            .all()
            .iter()
            .filter(|s| s.exams.len() == count)
            .collect()
    }
}
