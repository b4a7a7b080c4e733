use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::handlers::upload::upload_body_limit;
use crate::state::AppState;

pub fn api_routes(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .nest("/arena", arena_routes())
        .nest("/upload", upload_routes(upload_limit))
}

fn arena_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::arena::save_arena))
        .route("/today", get(handlers::arena::get_today_arena))
        .route("/list", get(handlers::arena::list_arenas))
        // One segment serves both lookups: a date for GET, an id for DELETE.
        .route(
            "/{key}",
            get(handlers::arena::get_arena_by_date).delete(handlers::arena::delete_arena),
        )
}

fn upload_routes(limit: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::upload::upload_image))
        .route("/batch", post(handlers::upload::upload_images))
        .layer(upload_body_limit(limit))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::admin::list_page))
        .route("/new", get(handlers::admin::new_page))
        .route("/edit/{id}", get(handlers::admin::edit_page))
        .route("/save", post(handlers::admin::save))
        .route("/delete/{id}", post(handlers::admin::delete))
}
