use axum::{
    Form, Json,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use registration::{Credentials, export::file_name};
use validator::Validate;

use crate::error::{MISSING_FIELDS_MESSAGE, WebError, WebResult};
use crate::state::AppState;

use super::dto::{MatchInfoRequest, MessageResponse, RegistrationForm};
use super::services;

#[utoipa::path(
    post,
    path = "/matchinfo",
    request_body = MatchInfoRequest,
    responses(
        (status = 200, description = "Match found and credentials accepted", body = MessageResponse),
        (status = 400, description = "Match ID, username or password missing", body = MessageResponse),
        (status = 401, description = "Shoot'n Score It rejected the credentials", body = MessageResponse),
        (status = 404, description = "No match with this ID", body = MessageResponse),
        (status = 502, description = "Shoot'n Score It could not be reached", body = MessageResponse)
    ),
    tag = "registration"
)]
pub async fn get_match_info(
    State(state): State<AppState>,
    payload: Result<Json<MatchInfoRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Failed to parse match info request: {}", e);
        WebError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
    })?;
    req.validate()?;

    tracing::info!("Got a match info request for match: {}", req.matchid);

    let credentials = Credentials::new(req.snsusername, req.snspassword);
    let match_info = services::get_match(&state.client, &req.matchid, &credentials)
        .await
        .map_err(|e| WebError::from_importer(e, &req.matchid))?;

    let csv_file_name = file_name(&match_info.name);
    Ok(Json(MessageResponse {
        response: format!(
            "Downloading registration for {} - this will save a file to your normal download folder named '{}'",
            match_info.name, csv_file_name
        ),
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/registration",
    request_body(content = RegistrationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "PractiScore import file for the match", body = String, content_type = "text/csv"),
        (status = 400, description = "Match ID, username or password missing", body = MessageResponse),
        (status = 401, description = "Shoot'n Score It rejected the credentials", body = MessageResponse),
        (status = 404, description = "No match with this ID", body = MessageResponse),
        (status = 502, description = "Shoot'n Score It could not be reached", body = MessageResponse)
    ),
    tag = "registration"
)]
pub async fn get_registration(
    State(state): State<AppState>,
    form: Result<Form<RegistrationForm>, FormRejection>,
) -> WebResult<Response> {
    let Form(form) = form.map_err(|e| {
        tracing::warn!("Failed to get form data: {}", e);
        WebError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
    })?;
    form.validate()?;

    tracing::info!("Got a registration request for match: {}", form.matchid);

    let credentials = Credentials::new(form.username, form.password);
    let registration = services::get_registration(&state.client, &form.matchid, &credentials)
        .await
        .map_err(|e| WebError::from_importer(e, &form.matchid))?;

    let csv = registration
        .to_csv()
        .map_err(|e| WebError::InternalServerError(e.to_string()))?;
    let csv_file_name = registration.file_name();
    let disposition = HeaderValue::from_str(&attachment_disposition(&csv_file_name))
        .map_err(|e| WebError::InternalServerError(e.to_string()))?;

    tracing::info!(
        "Sending CSV with name {} ({} competitors)",
        csv_file_name,
        registration.competitors.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/csv")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

/// `attachment` disposition with a quoted ASCII filename and the exact UTF-8
/// name as an RFC 5987 `filename*` parameter.
fn attachment_disposition(file_name: &str) -> String {
    let ascii_name: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_name,
        urlencoding::encode(file_name)
    )
}
