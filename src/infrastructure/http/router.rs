use crate::infrastructure::http::AppState;
use crate::infrastructure::web;
use axum::{routing::get, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted form body
const MAX_BODY_BYTES: usize = 16 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::show_ask_page).post(web::submit_query))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
