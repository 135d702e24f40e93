use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity}/unregister",
            post(unregister_http::handle),
        )
        .with_state(state)
}

/// API routes plus the static front-end, wrapped in request tracing.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    router(state)
        .route("/", get(index))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}
