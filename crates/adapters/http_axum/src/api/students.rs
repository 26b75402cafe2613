//! JSON REST handlers for students.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use roster_app::ports::StudentRepository;
use roster_domain::error::{NotFoundError, RosterError, ValidationError};
use roster_domain::id::StudentId;
use roster_domain::student::{NewStudent, Student};
use roster_domain::time::{self, Timestamp};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a student.
///
/// Fields are kept as raw JSON so that a value of the wrong shape reaches
/// the store path and fails there, like any other rejected record.
#[derive(Debug, Default, Deserialize)]
pub struct CreateStudentRequest {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub email: Option<Value>,
    pub course: Option<Value>,
    pub enrollment_date: Option<Value>,
}

fn text(field: &'static str, value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text),
        _ => Err(ValidationError::InvalidField(field)),
    }
}

fn integer(field: &'static str, value: &Value) -> Result<i64, ValidationError> {
    value.as_i64().ok_or(ValidationError::InvalidField(field))
}

/// Accepts an RFC 3339 or `YYYY-MM-DD` string, or epoch milliseconds.
fn timestamp(field: &'static str, value: &Value) -> Result<Timestamp, ValidationError> {
    let parsed = match value {
        Value::String(text) => time::parse_timestamp(text),
        Value::Number(number) => number.as_i64().and_then(time::from_epoch_millis),
        _ => None,
    };
    parsed.ok_or(ValidationError::InvalidField(field))
}

impl TryFrom<CreateStudentRequest> for NewStudent {
    type Error = ValidationError;

    fn try_from(req: CreateStudentRequest) -> Result<Self, Self::Error> {
        let mut builder = NewStudent::builder();
        if let Some(name) = req.name {
            builder = builder.name(text("name", name)?);
        }
        if let Some(age) = req.age {
            builder = builder.age(integer("age", &age)?);
        }
        if let Some(email) = req.email {
            builder = builder.email(text("email", email)?);
        }
        if let Some(course) = req.course {
            builder = builder.course(text("course", course)?);
        }
        if let Some(date) = req.enrollment_date {
            builder = builder.enrollment_date(timestamp("enrollment_date", &date)?);
        }
        Ok(builder.build_unchecked())
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Student>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Student>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Student>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /students`
pub async fn list<SR>(State(state): State<AppState<SR>>) -> Result<ListResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let students = state.student_service.list_students().await?;
    Ok(ListResponse::Ok(Json(students)))
}

/// `GET /students/:id`
///
/// The id is read from its leading integer, so `1.5` and `2abc` name
/// students 1 and 2. A segment with no leading digits, or one that is not
/// valid UTF-8, gets the same `404` as an unknown id.
pub async fn get<SR>(
    State(state): State<AppState<SR>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let raw = match path {
        Ok(Path(id)) => id,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable student id");
            String::new()
        }
    };
    let Some(student_id) = StudentId::parse_leading(&raw) else {
        return Err(RosterError::from(NotFoundError {
            entity: "Student",
            id: raw,
        })
        .into());
    };
    let student = state.student_service.get_student(student_id).await?;
    Ok(GetResponse::Ok(Json(student)))
}

/// `POST /students`
///
/// A request without a JSON content type is read as an empty object.
pub async fn create<SR>(
    State(state): State<AppState<SR>>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => CreateStudentRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let student = NewStudent::try_from(req).map_err(RosterError::from)?;
    let created = state.student_service.create_student(student).await?;
    Ok(CreateResponse::Created(Json(created)))
}
