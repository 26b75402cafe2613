//! `SQLite` implementation of [`StudentRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roster_app::ports::StudentRepository;
use roster_domain::error::RosterError;
use roster_domain::id::StudentId;
use roster_domain::student::{NewStudent, Student};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Student`].
struct Wrapper(Student);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Student> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let age: Option<i64> = row.try_get("age")?;
        let email: Option<String> = row.try_get("email")?;
        let course: Option<String> = row.try_get("course")?;
        let enrollment_date: Option<DateTime<Utc>> = row.try_get("enrollment_date")?;

        Ok(Self(Student {
            id: StudentId::new(id),
            name,
            age,
            email,
            course,
            enrollment_date,
        }))
    }
}

const INSERT: &str = "INSERT INTO students (name, age, email, course, enrollment_date) \
                      VALUES (?, ?, ?, ?, ?) RETURNING *";
const SELECT_BY_ID: &str = "SELECT * FROM students WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM students ORDER BY id";

/// `SQLite`-backed student repository.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StudentRepository for SqliteStudentRepository {
    fn create(
        &self,
        student: NewStudent,
    ) -> impl Future<Output = Result<Student, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&student.name)
                .bind(student.age)
                .bind(&student.email)
                .bind(&student.course)
                .bind(student.enrollment_date)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn close(&self) -> impl Future<Output = ()> + Send {
        let pool = self.pool.clone();
        async move {
            pool.close().await;
            tracing::info!("sqlite pool closed");
        }
    }
}
