// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;

use crate::{
    client::{ApiClient, BookingClient, ListingClient},
    db::{connect_pool, DatabaseSettings, PgRecordStore, RecordStore},
    services::{CaseService, CustomerService, DashboardService, DocumentService},
    views::PageRenderer,
};

pub const DEFAULT_BOOKING_API_URL: &str = "https://gutachter-booking.up.railway.app";

// =============================================================================
//  CONFIGURAÇÃO (variáveis de ambiente / .env)
// =============================================================================

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub host: String,
    pub port: u16,
    pub booking_api_url: String,
    // Base das rotas de mesma origem usadas pelas páginas
    pub dashboard_api_url: String,
    pub http_timeout: Duration,
}

impl Settings {
    /// Lê o ambiente do processo (carregando `.env` se existir).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Mesma leitura, com uma fonte de variáveis qualquer (testável).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let port: u16 = parse_or(&var, "PORT", 3000)?;
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Self {
            database: DatabaseSettings {
                url,
                max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", 5)?,
                acquire_timeout: Duration::from_secs(parse_or(&var, "DB_ACQUIRE_TIMEOUT_SECS", 3)?),
            },
            dashboard_api_url: var("DASHBOARD_API_URL")
                .unwrap_or_else(|| self_url(&host, port)),
            host,
            port,
            booking_api_url: var("BOOKING_API_URL")
                .unwrap_or_else(|| DEFAULT_BOOKING_API_URL.to_string()),
            http_timeout: Duration::from_secs(parse_or(&var, "HTTP_TIMEOUT_SECS", 10)?),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Endereço que o próprio processo usa para chamar as rotas /api
fn self_url(host: &str, port: u16) -> String {
    match host.trim() {
        "0.0.0.0" | "::" | "[::]" => format!("http://127.0.0.1:{port}"),
        ip if ip.contains(':') && !ip.starts_with('[') => format!("http://[{ip}]:{port}"),
        other => format!("http://{other}:{port}"),
    }
}

fn parse_or<T, F>(var: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} inválida: '{raw}'")),
        None => Ok(default),
    }
}

// =============================================================================
//  ESTADO COMPARTILHADO
// =============================================================================

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn RecordStore>,
    pub case_service: CaseService,
    pub customer_service: CustomerService,
    pub document_service: DocumentService,
    pub dashboard_service: DashboardService,
    pub listing_client: ListingClient,
    pub booking_client: BookingClient,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Conecta ao Postgres e monta o grafo de dependências.
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let pool = connect_pool(&settings.database)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        Self::with_store(settings, Arc::new(PgRecordStore::new(pool)))
    }

    /// Mesmo grafo sobre um store qualquer (os testes usam um store em memória).
    pub fn with_store(settings: Settings, store: Arc<dyn RecordStore>) -> anyhow::Result<Self> {
        // Um único reqwest::Client (pool de conexões) para as duas APIs
        let http = reqwest::Client::builder()
            .timeout(settings.http_timeout)
            .build()
            .context("Falha ao criar o cliente HTTP")?;

        let listing_client =
            ListingClient::new(ApiClient::with_client(http.clone(), &settings.dashboard_api_url));
        let booking_client =
            BookingClient::new(ApiClient::with_client(http, &settings.booking_api_url));

        Ok(Self {
            case_service: CaseService::new(store.clone()),
            customer_service: CustomerService::new(store.clone()),
            document_service: DocumentService::new(store.clone()),
            dashboard_service: DashboardService::new(),
            listing_client,
            booking_client,
            renderer: Arc::new(PageRenderer::new()?),
            settings: Arc::new(settings),
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let settings = Settings::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/kfz")])).unwrap();

        assert_eq!(settings.database.max_connections, 5);
        assert_eq!(settings.database.acquire_timeout, Duration::from_secs(3));
        assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
        assert_eq!(settings.booking_api_url, DEFAULT_BOOKING_API_URL);
        assert_eq!(settings.dashboard_api_url, "http://127.0.0.1:3000");
        assert_eq!(settings.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn dashboard_url_follows_the_port() {
        let settings = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/kfz"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.database.max_connections, 12);
        assert_eq!(settings.dashboard_api_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn dashboard_url_follows_a_specific_host() {
        let settings = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/kfz"),
            ("HOST", "10.0.0.5"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(settings.bind_addr(), "10.0.0.5:8080");
        assert_eq!(settings.dashboard_api_url, "http://10.0.0.5:8080");

        assert_eq!(self_url("::", 3000), "http://127.0.0.1:3000");
        assert_eq!(self_url("::1", 3000), "http://[::1]:3000");

        let explicit = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/kfz"),
            ("HOST", "10.0.0.5"),
            ("DASHBOARD_API_URL", "http://dashboard.intern"),
        ]))
        .unwrap();
        assert_eq!(explicit.dashboard_api_url, "http://dashboard.intern");
    }

    #[test]
    fn missing_url_and_bad_numbers_are_errors() {
        assert!(Settings::from_lookup(lookup(&[])).is_err());

        let err = Settings::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/kfz"),
            ("PORT", "dreitausend"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
