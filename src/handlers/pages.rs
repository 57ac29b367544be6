// src/handlers/pages.rs

//! Páginas HTML. Cada uma busca pela API (mesma origem ou serviço de
//! agendamentos), aplica busca/filtro da query string e renderiza.

use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Utc;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::{
        appointment::Appointment,
        case::{Case, CaseStatus},
        customer::Customer,
        document::{Document, DocumentType},
    },
    views::{
        filter::{CategoryFilter, ListQuery},
        pages::{dashboard_page, list_page, ListPage, Select},
        state::ViewState,
    },
};

const RENDER_ERROR: &str = "Fehler beim Rendern der Seite";

// GET /
pub async fn dashboard(State(app_state): State<AppState>) -> Result<Html<String>, ApiError> {
    let now = Utc::now();
    let today = now.date_naive();

    let state = ViewState::from_result(
        "Termine",
        app_state.booking_client.get_all_appointments().await,
    );
    let stats = app_state.dashboard_service.summarize(state.rows(), today);
    let recent = app_state.dashboard_service.recent(state.rows());

    let page = dashboard_page(&state, &stats, recent, today, now);
    app_state
        .renderer
        .render_dashboard(&page)
        .map(Html)
        .map_err(|e| e.to_api_error(RENDER_ERROR))
}

// GET /termine?q=
pub async fn appointments(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, ApiError> {
    let state: ViewState<Appointment> = ViewState::from_result(
        "Termine",
        app_state.booking_client.get_all_appointments().await,
    );

    render(&app_state, list_page(&state, query.term(), None, |_| true, Utc::now()))
}

// GET /kunden?q=
pub async fn customers(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, ApiError> {
    let state: ViewState<Customer> = ViewState::from_result(
        "Kunden",
        app_state.listing_client.get_all_customers().await,
    );

    render(&app_state, list_page(&state, query.term(), None, |_| true, Utc::now()))
}

// GET /faelle?q=&status=
pub async fn cases(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, ApiError> {
    let state: ViewState<Case> =
        ViewState::from_result("Fälle", app_state.listing_client.get_all_cases().await);

    let filter = CategoryFilter::from_param(query.status.as_deref(), CaseStatus::parse);
    let select = Select::new("status", "Alle Status", &filter, CaseStatus::variants());

    let page = list_page(
        &state,
        query.term(),
        Some(select),
        |case| filter.matches(&case.status),
        Utc::now(),
    );
    render(&app_state, page)
}

// GET /dokumente?q=&typ=
pub async fn documents(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, ApiError> {
    let state: ViewState<Document> = ViewState::from_result(
        "Dokumente",
        app_state.listing_client.get_all_documents().await,
    );

    let filter = CategoryFilter::from_param(query.typ.as_deref(), DocumentType::parse);
    let select = Select::new("typ", "Alle Typen", &filter, DocumentType::variants());

    let page = list_page(
        &state,
        query.term(),
        Some(select),
        |document| filter.matches(&document.document_type),
        Utc::now(),
    );
    render(&app_state, page)
}

fn render(app_state: &AppState, page: ListPage) -> Result<Html<String>, ApiError> {
    app_state
        .renderer
        .render_list(&page)
        .map(Html)
        .map_err(|e: AppError| e.to_api_error(RENDER_ERROR))
}
