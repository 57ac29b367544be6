//! Helpers compartilhados pelos testes de integração.
#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

use kfz_dashboard::{
    common::error::AppError,
    config::{AppState, Settings},
    db::{CaseRow, CustomerRow, DatabaseSettings, DocumentRow, LeaseTracker, PoolStatus, RecordStore},
    routes::build_router,
};

// ---------------------------------------------------------------------------
// Store em memória: cada listagem toma um lease, como o PgRecordStore
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MockStore {
    pub tracker: LeaseTracker,
    // None = a consulta falha
    pub cases: Option<Vec<CaseRow>>,
    pub customers: Option<Vec<CustomerRow>>,
    pub documents: Option<Vec<DocumentRow>>,
}

impl MockStore {
    pub fn empty() -> Self {
        Self {
            cases: Some(vec![]),
            customers: Some(vec![]),
            documents: Some(vec![]),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    fn answer<T: Clone>(&self, rows: &Option<Vec<T>>) -> Result<Vec<T>, AppError> {
        let _lease = self.tracker.lease(());
        rows.clone().ok_or_else(|| {
            AppError::DatabaseError(sqlx::Error::Protocol("connection refused".to_string()))
        })
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn list_cases(&self) -> Result<Vec<CaseRow>, AppError> {
        self.answer(&self.cases)
    }

    async fn list_customers(&self) -> Result<Vec<CustomerRow>, AppError> {
        self.answer(&self.customers)
    }

    async fn list_documents(&self) -> Result<Vec<DocumentRow>, AppError> {
        self.answer(&self.documents)
    }

    fn pool_status(&self) -> PoolStatus {
        PoolStatus {
            size: 1,
            idle: 1 - self.tracker.active().min(1),
            leased: self.tracker.active(),
        }
    }
}

// ---------------------------------------------------------------------------
// Linhas de exemplo
// ---------------------------------------------------------------------------

pub fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

pub fn case_row(id: i64, number: &str, status: &str) -> CaseRow {
    CaseRow {
        id,
        case_number: Some(number.to_string()),
        customer_id: Some(100 + id),
        status: Some(status.to_string()),
        case_type: Some("Unfallgutachten (Haftpflicht)".to_string()),
        make_model: Some("VW Golf Variant".to_string()),
        license_plate: Some(format!("BI-AB {id}")),
        created_at: Some(ts("2025-03-01T08:00:00Z")),
        ..Default::default()
    }
}

pub fn customer_row(id: i64, number: &str, name: &str, cases: i64) -> CustomerRow {
    CustomerRow {
        id,
        customer_number: Some(number.to_string()),
        name: Some(name.to_string()),
        email: Some(format!("kunde{id}@example.de")),
        phone: Some("0521123456".to_string()),
        case_count: Some(cases),
        created_at: Some(ts("2025-02-01T08:00:00Z")),
        updated_at: None,
    }
}

pub fn document_row(id: i64, file_name: &str, kind: &str) -> DocumentRow {
    DocumentRow {
        id,
        document_id: Some(format!("DOC-{id}")),
        case_id: Some(1),
        document_type: Some(kind.to_string()),
        file_path: Some(format!("/uploads/{file_name}")),
        file_name: Some(file_name.to_string()),
        file_size: Some(2048),
        mime_type: Some("application/pdf".to_string()),
        description: None,
        uploaded_at: Some(ts("2025-03-02T10:00:00Z")),
    }
}

// ---------------------------------------------------------------------------
// App e servidores
// ---------------------------------------------------------------------------

pub fn test_settings(booking_api_url: &str, dashboard_api_url: &str) -> Settings {
    Settings {
        database: DatabaseSettings {
            url: "postgres://unused@localhost/kfz".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(1),
        },
        host: "127.0.0.1".to_string(),
        port: 0,
        booking_api_url: booking_api_url.to_string(),
        dashboard_api_url: dashboard_api_url.to_string(),
        http_timeout: Duration::from_secs(5),
    }
}

/// Router completo sobre o store informado (sem servidor).
pub fn build_test_app(store: MockStore) -> Router {
    let settings = test_settings("http://127.0.0.1:9", "http://127.0.0.1:9");
    let state = AppState::with_store(settings, Arc::new(store)).unwrap();
    build_router(state)
}

/// Sobe um router qualquer em 127.0.0.1:0 e devolve a URL base.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Sobe o dashboard de verdade: as páginas chamam a própria API pela rede.
pub async fn spawn_dashboard(store: MockStore, booking_api_url: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let settings = test_settings(booking_api_url, &base_url);
    let state = AppState::with_store(settings, Arc::new(store)).unwrap();
    let app = build_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    base_url
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn page(base_url: &str, path: &str) -> String {
    let response = reqwest::get(format!("{base_url}{path}")).await.unwrap();
    assert!(response.status().is_success(), "{path}: {}", response.status());
    response.text().await.unwrap()
}

/// HTML sem espaços, para comparar trechos sem depender da indentação.
pub fn compact(html: &str) -> String {
    html.split_whitespace().collect()
}
