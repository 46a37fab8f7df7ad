use crate::model::ExamKind;
use crate::queries::Queries;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;
use tracing::{Level, debug};

mod display;
mod loaders;
mod model;
mod queries;

#[derive(Parser)]
#[command(version, about = "Query a roster of student exam records")]
struct Options {
    /// Roster CSV file (name,rating,exams)
    #[arg(short, long, default_value = "students.csv")]
    input: PathBuf,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbosity: u8,
    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand)]
enum Query {
    /// Show the student holding the best score for an exam kind
    MaxExam { kind: ExamKind },
    /// Show students with an exam of the given kind at or above a pass rate
    EnoughExam { kind: ExamKind, pass_rate: f64 },
    /// Show students passing both math and english at a pass rate
    EnoughExams { pass_rate: f64 },
    /// Show the first student without any exam of the given kind
    WithoutExam { kind: ExamKind },
    /// Show students rated at or above a threshold who sat an exam kind
    RatedWithExam { kind: ExamKind, rating: f64 },
    /// Show students with an exact number of exams
    ExamCount { count: usize },
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    setup_logging(options.verbosity);
    let students = loaders::load_students(&options.input)?;
    debug!(roster = students.len(), "roster loaded");
    let queries = Queries::new(students);
    match options.query {
        Query::MaxExam { kind } => display::display_one(queries.with_max_exam(kind)),
        Query::EnoughExam { kind, pass_rate } => {
            display::display_many(&queries.with_enough_exam(kind, pass_rate));
        }
        Query::EnoughExams { pass_rate } => {
            display::display_many(&queries.with_enough_exams(pass_rate));
        }
        Query::WithoutExam { kind } => display::display_one(queries.first_without_exam(kind)),
        Query::RatedWithExam { kind, rating } => {
            display::display_many(&queries.with_rating_and_exam(kind, rating));
        }
        Query::ExamCount { count } => display::display_many(&queries.with_exam_count(count)),
    }
    Ok(())
}
