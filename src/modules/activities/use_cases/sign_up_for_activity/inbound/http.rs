use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::core::activity::{DecideError, SignUpOutcome};
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::infrastructure::http_response::{detail, message};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    params: Result<Query<SignUpParams>, QueryRejection>,
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

    let command = SignUpForActivity {
        activity: activity.clone(),
        email: params.email.clone(),
    };

    match state.sign_up_handler.handle(command).await {
        Ok(SignUpOutcome::SignedUp) => message(format!("Signed up {} for {activity}", params.email)),
        Ok(SignUpOutcome::AlreadySignedUp) => message(format!(
            "{} is already signed up for {activity}",
            params.email
        )),
        Err(ApplicationError::NotFound(_)) => detail(StatusCode::NOT_FOUND, "Activity not found"),
        Err(ApplicationError::Domain(DecideError::ActivityFull { .. })) => {
            detail(StatusCode::CONFLICT, "Activity is full")
        }
        Err(ApplicationError::Domain(reason)) => detail(StatusCode::BAD_REQUEST, reason.to_string()),
        Err(ApplicationError::Unexpected(_)) => {
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Activity registry unavailable")
        }
    }
}
