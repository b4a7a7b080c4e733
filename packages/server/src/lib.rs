pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use axum::{Json, routing::get};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meme Arena API",
        version = "1.0.0",
        description = "Daily meme battle configuration and image upload API"
    ),
    paths(
        handlers::arena::get_today_arena,
        handlers::arena::list_arenas,
        handlers::arena::get_arena_by_date,
        handlers::arena::save_arena,
        handlers::arena::delete_arena,
        handlers::upload::upload_image,
        handlers::upload::upload_images,
        handlers::health::health,
    ),
    tags(
        (name = "Arena", description = "Daily battle configurations"),
        (name = "Upload", description = "Image upload to object storage"),
        (name = "Health", description = "Service liveness"),
    ),
)]
pub struct ApiDoc;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allow_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allow_origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(config.max_age))
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);
    let upload_limit = state.config.upload.max_body_bytes;

    axum::Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/api", routes::api_routes(upload_limit))
        .nest("/admin", routes::admin_routes())
        .with_state(state)
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
