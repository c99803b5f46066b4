use axum::Json;

use crate::dtos::common::MessageResponse;

// GET /ping - never touches the database
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new("pong"))
}
