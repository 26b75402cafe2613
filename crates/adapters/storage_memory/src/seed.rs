//! Static seed data.

use roster_domain::id::StudentId;
use roster_domain::student::{NewStudent, Student};

/// The two students the in-memory store starts with.
#[must_use]
pub fn demo_students() -> Vec<Student> {
    [("Karma", 22), ("Sonam", 26)]
        .into_iter()
        .zip(1..)
        .map(|((name, age), id)| {
            Student::from_new(
                StudentId::new(id),
                NewStudent {
                    name: name.to_string(),
                    age: Some(age),
                    ..NewStudent::default()
                },
            )
        })
        .collect()
}
