// src/docs.rs

use utoipa::OpenApi;

use crate::{db, handlers, models};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "KFZ-Gutachter Dashboard API",
        description = "Rotas de leitura de Fälle, Kunden e Dokumente"
    ),
    paths(
        // --- Dados ---
        handlers::cases::list_cases,
        handlers::customers::list_customers,
        handlers::documents::list_documents,

        // --- Sistema ---
        handlers::health::health,
    ),
    components(
        schemas(
            models::case::Case,
            models::customer::Customer,
            models::document::Document,
            models::envelope::CaseListing,
            models::envelope::CustomerListing,
            models::envelope::DocumentListing,
            models::envelope::ErrorBody,
            handlers::health::HealthResponse,
            db::PoolStatus,
        )
    ),
    tags(
        (name = "Fälle", description = "Schadensfälle"),
        (name = "Kunden", description = "Kunden mit Anzahl der Fälle"),
        (name = "Dokumente", description = "Dokumente zu Fällen"),
        (name = "System", description = "Health-Check")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_data_route() {
        let doc = ApiDoc::openapi();
        for path in ["/api/cases", "/api/customers", "/api/documents", "/api/health"] {
            assert!(doc.paths.paths.contains_key(path), "{path} fehlt");
        }
    }
}
