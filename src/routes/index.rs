use crate::routes::ApiMessage;
use axum::Json;

pub async fn get_index_route() -> Json<ApiMessage> {
    Json(ApiMessage::new("Mini student API"))
}
