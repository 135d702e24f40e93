use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::infrastructure::http_response::detail;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_handler.handle().await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(_) => detail(StatusCode::INTERNAL_SERVER_ERROR, "Failed to list activities"),
    }
}
