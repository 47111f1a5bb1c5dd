use axum::{Router, routing::post};

use super::handlers::{get_match_info, get_registration};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/matchinfo", post(get_match_info))
        .route("/registration", post(get_registration))
}
