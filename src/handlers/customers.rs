// src/handlers/customers.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    models::envelope::{CustomerListing, Envelope, ErrorBody},
};

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Kunden",
    responses(
        (status = 200, description = "Envelope `{ success: true, customers }` com case_count agregado", body = CustomerListing),
        (status = 500, description = "Falha no banco de dados", body = ErrorBody)
    )
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let customers = app_state
        .customer_service
        .list_customers()
        .await
        .map_err(|app_err| app_err.to_api_error("Fehler beim Abrufen der Kunden"))?;

    Ok((StatusCode::OK, Json(Envelope::success(CustomerListing { customers }))))
}
