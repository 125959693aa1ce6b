pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod utils;

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HackHub Evaluation API",
        version = "1.0.0",
        description = "Round lifecycle, judge assignment, evaluation ledger and statistics for the HackHub hackathon platform"
    ),
    paths(
        handlers::round::list_rounds,
        handlers::round::create_round,
        handlers::round::update_round,
        handlers::round::delete_round,
        handlers::assignment::list_judges,
        handlers::assignment::list_teams,
        handlers::assignment::assign_judge,
        handlers::assignment::unassign_judge,
        handlers::evaluation::submit_evaluation,
        handlers::evaluation::save_draft,
        handlers::evaluation::get_own_evaluation,
        handlers::evaluation::list_own_evaluations,
        handlers::evaluation::list_all_evaluations,
        handlers::statistics::judge_statistics,
        handlers::statistics::platform_statistics,
    ),
    tags(
        (name = "Rounds", description = "Round lifecycle management"),
        (name = "Assignment", description = "Judge-to-team assignment"),
        (name = "Evaluation", description = "Evaluation ledger"),
        (name = "Statistics", description = "Read-only aggregates"),
    ),
    modifiers(&SecurityAddon),
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    axum::Router::new()
        .merge(routes::api_routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .layer(cors)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age))
}
