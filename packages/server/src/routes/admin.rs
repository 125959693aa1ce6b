use axum::{
    Router,
    routing::{get, patch, post, put},
};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/rounds", round_routes())
        .nest("/evaluation", evaluation_routes())
        .route("/statistics", get(handlers::statistics::platform_statistics))
}

fn round_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::round::list_rounds).post(handlers::round::create_round),
        )
        .route(
            "/{id}",
            put(handlers::round::update_round).delete(handlers::round::delete_round),
        )
}

fn evaluation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::assignment::list_judges))
        .route("/teams", get(handlers::assignment::list_teams))
        .route("/assign", post(handlers::assignment::assign_judge))
        .route(
            "/unassign/{team_id}",
            patch(handlers::assignment::unassign_judge),
        )
        .route(
            "/statistics",
            get(handlers::statistics::judge_statistics),
        )
        .route("/all", get(handlers::evaluation::list_all_evaluations))
}
