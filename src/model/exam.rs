use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// The closed set of exam categories. Keeping it closed lets the
/// query predicates stay exhaustive when new kinds are added.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExamKind {
    Math,
    English,
    Physics,
}

impl ExamKind {
    fn as_str(self) -> &'static str {
        match self {
            ExamKind::Math => "MATH",
            ExamKind::English => "ENGLISH",
            ExamKind::Physics => "PHYSICS",
        }
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MATH" => Ok(ExamKind::Math),
            "ENGLISH" => Ok(ExamKind::English),
            "PHYSICS" => Ok(ExamKind::Physics),
            other => Err(eyre::eyre!("unknown exam kind: {other}")),
        }
    }
}

/// An exam result. Equality is structural: same kind and exactly the
/// same score. No `Eq` since scores are floating-point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exam {
    pub kind: ExamKind,
    pub score: f64,
}

impl Exam {
    pub fn new(kind: ExamKind, score: f64) -> Exam {
        Exam { kind, score }
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.score)
    }
}
