use crate::{
    routes::{
        index::get_index_route,
        students::{
            delete_student, get_student, get_student_by_name, get_student_with_name_hint,
            get_students, post_new_student, put_update_student,
        },
    },
    state::RollcallState,
};
use axum::{Router, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub mod index;
pub mod students;

/// Plain-message response body, used for the liveness route, the empty-list
/// indicator and the delete acknowledgment.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn router(state: RollcallState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students", get(get_students))
        .route("/students/by-name", get(get_student_by_name))
        .route(
            "/students/{id}",
            get(get_student)
                .post(post_new_student)
                .put(put_update_student)
                .delete(delete_student),
        )
        .route("/get-by-name/{id}", get(get_student_with_name_hint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
