// src/routes.rs

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{config::AppState, handlers};

pub fn build_router(app_state: AppState) -> Router {
    // Rotas de dados (JSON, envelope { success, ... })
    let api_routes = Router::new()
        .route("/cases", get(handlers::cases::list_cases))
        .route("/customers", get(handlers::customers::list_customers))
        .route("/documents", get(handlers::documents::list_documents))
        .route("/health", get(handlers::health::health))
        .route("/openapi.json", get(handlers::health::openapi));

    // Páginas HTML
    let page_routes = Router::new()
        .route("/", get(handlers::pages::dashboard))
        .route("/termine", get(handlers::pages::appointments))
        .route("/kunden", get(handlers::pages::customers))
        .route("/faelle", get(handlers::pages::cases))
        .route("/dokumente", get(handlers::pages::documents));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
