use crate::data::StudentId;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use snafu::Snafu;

pub type RollcallResult<T> = Result<T, RollcallError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RollcallError {
    #[snafu(display("Unable to find student with id: {}", id))]
    MissingStudent { id: StudentId },
    #[snafu(display("Unable to find student with name: {:?}", name))]
    MissingStudentName { name: String },
    #[snafu(display("Student with id {} already exists", id))]
    StudentAlreadyExists { id: StudentId },
    #[snafu(display("Student ids must be positive integers"))]
    InvalidIdSegment { source: PathRejection },
    #[snafu(display("Student ids must be greater than zero"))]
    NonPositiveStudentId,
    #[snafu(display("Invalid student body"))]
    InvalidStudentBody { source: JsonRejection },
    #[snafu(display("Missing or invalid query parameters"))]
    InvalidQueryParams { source: QueryRejection },
    #[snafu(display("Student names must not be empty"))]
    EmptyStudentName,
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
}

/// Error body shape shared by every failed response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for RollcallError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input
        const CF: StatusCode = StatusCode::CONFLICT; //conflict

        let status_code = match &self {
            Self::MissingStudent { .. } | Self::MissingStudentName { .. } => NF,
            Self::StudentAlreadyExists { .. } => CF,
            Self::InvalidIdSegment { .. } | Self::NonPositiveStudentId => BI,
            //axum distinguishes malformed JSON (400) from schema violations (422)
            Self::InvalidStudentBody { source } => source.status(),
            Self::InvalidQueryParams { .. } => BI,
            Self::EmptyStudentName => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadEnvVar { .. } => ISE,
        };

        error!(?self, "Error!");
        (
            status_code,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
