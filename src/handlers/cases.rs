// src/handlers/cases.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    models::envelope::{CaseListing, Envelope, ErrorBody},
};

// GET /api/cases
#[utoipa::path(
    get,
    path = "/api/cases",
    tag = "Fälle",
    responses(
        (status = 200, description = "Envelope `{ success: true, cases }`, mais recentes primeiro", body = CaseListing),
        (status = 500, description = "Falha no banco de dados", body = ErrorBody)
    )
)]
pub async fn list_cases(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let cases = app_state
        .case_service
        .list_cases()
        .await
        .map_err(|app_err| app_err.to_api_error("Fehler beim Abrufen der Fälle"))?;

    Ok((StatusCode::OK, Json(Envelope::success(CaseListing { cases }))))
}
