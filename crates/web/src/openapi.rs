use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::features::registration::dto::{MatchInfoRequest, MessageResponse, RegistrationForm};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::health::health_check,
        crate::features::registration::handlers::get_match_info,
        crate::features::registration::handlers::get_registration,
    ),
    components(schemas(MatchInfoRequest, RegistrationForm, MessageResponse)),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "registration", description = "Shoot'n Score It to PractiScore registration export"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
