// src/handlers/documents.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    models::envelope::{DocumentListing, Envelope, ErrorBody},
};

// GET /api/documents
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = "Dokumente",
    responses(
        (status = 200, description = "Envelope `{ success: true, documents }`, por uploaded_at DESC", body = DocumentListing),
        (status = 500, description = "Falha no banco de dados", body = ErrorBody)
    )
)]
pub async fn list_documents(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let documents = app_state
        .document_service
        .list_documents()
        .await
        .map_err(|app_err| app_err.to_api_error("Fehler beim Abrufen der Dokumente"))?;

    Ok((StatusCode::OK, Json(Envelope::success(DocumentListing { documents }))))
}
