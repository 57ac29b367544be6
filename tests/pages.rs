//! Páginas HTML de ponta a ponta: dashboard servido de verdade, buscando a
//! própria API e um serviço de agendamentos falso.

mod common;

use axum::{http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;

use common::{
    case_row, compact, customer_row, document_row, page, serve, spawn_dashboard, MockStore,
};

/// Serviço de agendamentos com 3 Termine, um deles hoje.
async fn booking_with_today() -> String {
    let today = Utc::now().date_naive();
    let body = json!({
        "success": true,
        "count": 3,
        "appointments": [
            { "id": 1, "appointment_number": "t-2025-001", "customer_id": 10,
              "scheduled_at": format!("{today}T12:00:00Z"), "location": "Bielefeld",
              "status": "confirmed", "damage_type": "Unfallschaden" },
            { "id": 2, "appointment_number": "t-2025-002", "customer_id": 11,
              "scheduled_at": "2020-01-02T09:00:00Z", "location": "Herford",
              "status": "completed", "damage_type": "Sonstiges" },
            { "id": 3, "appointment_number": "t-2025-003", "customer_id": 11,
              "scheduled_at": "2020-01-03T09:00:00Z", "location": "Minden",
              "status": "cancelled", "damage_type": "Sonstiges" }
        ]
    });

    let router = Router::new().route(
        "/api/appointments/search",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    serve(router).await
}

async fn booking_down() -> String {
    let router = Router::new().route(
        "/api/appointments/search",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": "Wartung" }))) }),
    );
    serve(router).await
}

// ---------------------------------------------------------------------------
// Test: busca "001" mostra só o primeiro caso
// ---------------------------------------------------------------------------

#[tokio::test]
async fn case_search_filters_rows() {
    let store = MockStore {
        cases: Some(vec![
            case_row(1, "F-2025-001", "offen"),
            case_row(2, "F-2025-002", "abgeschlossen"),
        ]),
        ..MockStore::empty()
    };
    let base_url = spawn_dashboard(store, "http://127.0.0.1:9").await;

    let html = page(&base_url, "/faelle?q=001").await;
    assert!(html.contains("F-2025-001"));
    assert!(!html.contains("F-2025-002"));
    assert!(html.contains("Alle Fälle (1)"));

    let html = page(&base_url, "/faelle?status=abgeschlossen").await;
    assert!(html.contains("F-2025-002"));
    assert!(!html.contains("F-2025-001"));

    let html = page(&base_url, "/faelle?status=all").await;
    assert!(html.contains("Alle Fälle (2)"));

    let html = page(&base_url, "/faelle?status=archiviert").await;
    assert!(html.contains("Keine Fälle gefunden"));
}

// ---------------------------------------------------------------------------
// Test: falha de carga != lista vazia
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_load_is_not_rendered_as_empty_list() {
    let base_url = spawn_dashboard(MockStore::failing(), "http://127.0.0.1:9").await;

    let html = page(&base_url, "/kunden").await;
    assert!(html.contains("Kunden konnten nicht geladen werden"));
    assert!(html.contains(r#"class="notice notice-error""#));
    assert!(!html.contains("Keine Kunden vorhanden"));
}

#[tokio::test]
async fn empty_lists_say_vorhanden() {
    let base_url = spawn_dashboard(MockStore::empty(), "http://127.0.0.1:9").await;

    let html = page(&base_url, "/dokumente").await;
    assert!(html.contains("Keine Dokumente vorhanden"));
    assert!(!html.contains(r#"class="notice notice-error""#));

    let html = page(&base_url, "/kunden?q=xyz").await;
    assert!(html.contains("Keine Kunden gefunden"));
}

// ---------------------------------------------------------------------------
// Test: documentos e clientes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn document_type_filter_accepts_aliases() {
    let store = MockStore {
        documents: Some(vec![
            document_row(1, "front.jpg", "schadenfotos"),
            document_row(2, "rechnung.pdf", "rechnung"),
        ]),
        ..MockStore::empty()
    };
    let base_url = spawn_dashboard(store, "http://127.0.0.1:9").await;

    let html = page(&base_url, "/dokumente?typ=foto").await;
    assert!(html.contains("front.jpg"));
    assert!(!html.contains("rechnung.pdf"));
    assert!(html.contains("Alle Dokumente (1)"));
}

#[tokio::test]
async fn customer_page_lists_contact_links() {
    let store = MockStore {
        customers: Some(vec![customer_row(1, "k-2025-001", "Max Mustermann", 3)]),
        ..MockStore::empty()
    };
    let base_url = spawn_dashboard(store, "http://127.0.0.1:9").await;

    let html = page(&base_url, "/kunden?q=mustermann").await;
    assert!(html.contains("K-2025-001"));
    assert!(html.contains("mailto:kunde1@example.de"));
    assert!(html.contains("tel:0521123456"));
}

// ---------------------------------------------------------------------------
// Test: dashboard e Termine a partir do serviço externo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_shows_stats_from_booking_service() {
    let booking = booking_with_today().await;
    let base_url = spawn_dashboard(MockStore::empty(), &booking).await;

    let html = compact(&page(&base_url, "/").await);
    assert!(html.contains(r#"Termineheute</div><divclass="value">1</div>"#));
    assert!(html.contains(r#"Bevorstehend</div><divclass="value">1</div>"#));
    assert!(html.contains(r#"Abgeschlossen</div><divclass="value">1</div>"#));
    assert!(html.contains(r#"Kundengesamt</div><divclass="value">2</div>"#));
    assert!(html.contains("T-2025-001"));
}

#[tokio::test]
async fn appointments_page_searches_and_reports_outages() {
    let booking = booking_with_today().await;
    let base_url = spawn_dashboard(MockStore::empty(), &booking).await;

    let html = page(&base_url, "/termine?q=herford").await;
    assert!(html.contains("T-2025-002"));
    assert!(!html.contains("T-2025-003"));
    assert!(html.contains("Alle Termine (1)"));

    let base_url = spawn_dashboard(MockStore::empty(), &booking_down().await).await;
    let html = page(&base_url, "/termine").await;
    assert!(html.contains("Termine konnten nicht geladen werden: Wartung"));

    let html = page(&base_url, "/").await;
    assert!(html.contains("Termine konnten nicht geladen werden"));
}

#[tokio::test]
async fn null_fields_from_booking_service_do_not_fail_the_list() {
    let body = json!({
        "success": true,
        "count": 2,
        "appointments": [
            { "id": 1, "appointment_number": "t-1", "scheduled_at": "2025-03-07T09:00:00Z",
              "location": null, "status": "confirmed", "damage_type": "Unfallschaden" },
            { "id": 2, "appointment_number": "t-2", "scheduled_at": "2025-03-08T09:00:00Z",
              "location": "Herford", "status": null, "damage_type": null }
        ]
    });
    let router = Router::new().route(
        "/api/appointments/search",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    let booking = serve(router).await;
    let base_url = spawn_dashboard(MockStore::empty(), &booking).await;

    let html = page(&base_url, "/termine").await;
    assert!(!html.contains(r#"class="notice notice-error""#));
    assert!(html.contains("Alle Termine (2)"));
    assert!(html.contains("T-1"));
    assert!(html.contains("T-2"));
    assert!(html.contains("Unbekannt"));
}
