mod admin;
mod judge;

use axum::Router;

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::routes())
        .nest("/judge", judge::routes())
}
