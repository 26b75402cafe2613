//! Student — the single resource managed by roster.

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, ValidationError};
use crate::id::StudentId;
use crate::time::Timestamp;

/// A persisted student record.
///
/// Optional descriptive fields are opaque to the service and are omitted
/// from the JSON representation when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<Timestamp>,
}

impl Student {
    /// Attach a store-assigned identifier to a [`NewStudent`].
    #[must_use]
    pub fn from_new(id: StudentId, new: NewStudent) -> Self {
        Self {
            id,
            name: new.name,
            age: new.age,
            email: new.email,
            course: new.course,
            enrollment_date: new.enrollment_date,
        }
    }
}

/// The fields of a student before a store has assigned it an identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub course: Option<String>,
    pub enrollment_date: Option<Timestamp>,
}

impl NewStudent {
    /// Create a builder for constructing a [`NewStudent`].
    #[must_use]
    pub fn builder() -> NewStudentBuilder {
        NewStudentBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewStudent`].
#[derive(Debug, Default)]
pub struct NewStudentBuilder {
    name: Option<String>,
    age: Option<i64>,
    email: Option<String>,
    course: Option<String>,
    enrollment_date: Option<Timestamp>,
}

impl NewStudentBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    #[must_use]
    pub fn enrollment_date(mut self, date: Timestamp) -> Self {
        self.enrollment_date = Some(date);
        self
    }

    /// Consume the builder, validate, and return a [`NewStudent`].
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<NewStudent, RosterError> {
        let student = self.build_unchecked();
        student.validate()?;
        Ok(student)
    }

    /// Consume the builder without checking invariants.
    ///
    /// Used at the HTTP boundary, where enforcement is left to the store.
    #[must_use]
    pub fn build_unchecked(self) -> NewStudent {
        NewStudent {
            name: self.name.unwrap_or_default(),
            age: self.age,
            email: self.email,
            course: self.course,
            enrollment_date: self.enrollment_date,
        }
    }
}
