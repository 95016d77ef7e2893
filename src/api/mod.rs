pub mod dto;
pub mod errors;
pub mod handlers;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::config::Config;

pub fn router(config: &Config) -> Router {
    Router::new()
        .route("/data", post(handlers::receive_data))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}
