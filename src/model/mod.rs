pub use self::exam::{Exam, ExamKind};
pub use self::student::Student;

mod exam;
mod student;
