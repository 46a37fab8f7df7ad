use crate::model::Student;

fn display_student(student: &Student) {
    print!("  - {} (rating {})", student.name, student.rating);
    if student.exams.is_empty() {
        println!(" - no exams");
    } else {
        let exams = student
            .exams
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!(" - {exams}");
    }
}

pub fn display_one(found: Option<&Student>) {
    match found {
        Some(student) => display_student(student),
        None => println!("No student matches."),
    }
}

pub fn display_many(found: &[&Student]) {
    if found.is_empty() {
        println!("No student matches.");
    } else {
        println!("{} student(s):", found.len());
        for student in found {
            display_student(student);
        }
    }
}
