use axum::{Router, routing::get};

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = String)
    ),
    tag = "health"
)]
pub async fn health_check() -> &'static str {
    "OK"
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
