use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().nest("/team-evaluation", team_evaluation_routes())
}

fn team_evaluation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::evaluation::list_own_evaluations))
        .route("/submit", post(handlers::evaluation::submit_evaluation))
        .route("/save-draft", post(handlers::evaluation::save_draft))
        .route("/{team_id}", get(handlers::evaluation::get_own_evaluation))
}
