use crate::{
    data::{
        StudentId,
        student::{NewStudent, Student, StudentPatch},
    },
    error::{
        EmptyStudentNameSnafu, InvalidIdSegmentSnafu, InvalidQueryParamsSnafu,
        InvalidStudentBodySnafu, MissingStudentNameSnafu, MissingStudentSnafu,
        NonPositiveStudentIdSnafu, RollcallResult,
    },
    routes::ApiMessage,
    state::RollcallState,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use snafu::{OptionExt, ResultExt, ensure};

#[derive(Deserialize)]
pub struct NameQuery {
    name: String,
}

#[derive(Deserialize)]
pub struct NameHintQuery {
    #[allow(dead_code)]
    name: Option<String>,
}

fn student_id(path: Result<Path<StudentId>, PathRejection>) -> RollcallResult<StudentId> {
    let Path(id) = path.context(InvalidIdSegmentSnafu)?;
    ensure!(id > 0, NonPositiveStudentIdSnafu);
    Ok(id)
}

fn ensure_name_not_blank(name: &str) -> RollcallResult<()> {
    ensure!(!name.trim().is_empty(), EmptyStudentNameSnafu);
    Ok(())
}

pub async fn get_students(State(state): State<RollcallState>) -> Response {
    let store = state.store().await;
    let students = store.list();

    if students.is_empty() {
        Json(ApiMessage::new("No students found")).into_response()
    } else {
        Json(students.to_vec()).into_response()
    }
}

pub async fn get_student(
    State(state): State<RollcallState>,
    path: Result<Path<StudentId>, PathRejection>,
) -> RollcallResult<Json<Student>> {
    let id = student_id(path)?;
    let store = state.store().await;
    let student = store.get_by_id(id).context(MissingStudentSnafu { id })?;
    Ok(Json(student.clone()))
}

pub async fn get_student_by_name(
    State(state): State<RollcallState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> RollcallResult<Json<Student>> {
    let Query(NameQuery { name }) = query.context(InvalidQueryParamsSnafu)?;
    let store = state.store().await;
    let student = store
        .get_by_name(&name)
        .context(MissingStudentNameSnafu { name })?;
    Ok(Json(student.clone()))
}

/// Accepts a `name` query parameter for compatibility with old clients, but
/// the lookup is by id only. The parameter never filters anything.
pub async fn get_student_with_name_hint(
    State(state): State<RollcallState>,
    path: Result<Path<StudentId>, PathRejection>,
    Query(NameHintQuery { name: _ }): Query<NameHintQuery>,
) -> RollcallResult<Json<Student>> {
    let id = student_id(path)?;
    let store = state.store().await;
    let student = store.get_by_id(id).context(MissingStudentSnafu { id })?;
    Ok(Json(student.clone()))
}

#[axum::debug_handler]
pub async fn post_new_student(
    State(state): State<RollcallState>,
    path: Result<Path<StudentId>, PathRejection>,
    body: Result<Json<NewStudent>, JsonRejection>,
) -> RollcallResult<(StatusCode, Json<Student>)> {
    let id = student_id(path)?;
    let Json(new_student) = body.context(InvalidStudentBodySnafu)?;
    ensure_name_not_blank(&new_student.name)?;

    let mut store = state.store().await;
    let student = store.create(id, new_student)?;

    info!(%id, "Created student");
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn put_update_student(
    State(state): State<RollcallState>,
    path: Result<Path<StudentId>, PathRejection>,
    body: Result<Json<StudentPatch>, JsonRejection>,
) -> RollcallResult<Json<Student>> {
    let id = student_id(path)?;
    let Json(patch) = body.context(InvalidStudentBodySnafu)?;
    if let Some(name) = &patch.name {
        ensure_name_not_blank(name)?;
    }

    let mut store = state.store().await;
    let student = store.update(id, patch)?;

    info!(%id, "Updated student");
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<RollcallState>,
    path: Result<Path<StudentId>, PathRejection>,
) -> RollcallResult<Json<ApiMessage>> {
    let id = student_id(path)?;
    let mut store = state.store().await;
    store.delete(id)?;

    info!(%id, "Deleted student");
    Ok(Json(ApiMessage::new("Student deleted successfully")))
}
