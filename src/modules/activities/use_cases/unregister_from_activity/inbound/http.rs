use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::infrastructure::http_response::{detail, message};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    params: Result<Query<UnregisterParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => {
            return detail(
                StatusCode::BAD_REQUEST,
                "Missing or invalid email query parameter",
            );
        }
    };

    let command = UnregisterFromActivity {
        activity: activity.clone(),
        email: params.email.clone(),
    };

    match state.unregister_handler.handle(command).await {
        Ok(()) => message(format!("Unregistered {} from {activity}", params.email)),
        Err(ApplicationError::NotFound(_)) => detail(StatusCode::NOT_FOUND, "Activity not found"),
        Err(ApplicationError::Domain(_)) => detail(
            StatusCode::BAD_REQUEST,
            "Student is not signed up for this activity",
        ),
        Err(ApplicationError::Unexpected(_)) => {
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Activity registry unavailable")
        }
    }
}
