// src/client.rs

//! Cliente HTTP genérico (reqwest) usado tanto para as rotas de mesma origem
//! (`/api/cases`, ...) quanto para o serviço externo de agendamentos.

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

pub mod booking;
pub mod listing;

pub use booking::BookingClient;
pub use listing::ListingClient;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rede, DNS, TLS ou timeout.
    #[error("Verbindungsfehler: {0}")]
    Transport(#[from] reqwest::Error),

    /// Resposta 2xx com corpo fora do formato esperado.
    #[error("Ungültige Antwort: {0}")]
    Decode(#[from] serde_json::Error),

    /// Resposta fora da faixa 2xx.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Envelope com `success: false`.
    #[error("{0}")]
    Envelope(String),

    /// Payload rejeitado antes do envio.
    #[error("Ungültige Eingabe: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Cliente próprio com timeout por requisição.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Reaproveita um `reqwest::Client` (pool de conexões compartilhado).
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, endpoint, query, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, &[], Some(body)).await
    }

    /// `base_url + endpoint`, corpo JSON opcional. Falhas são logadas com o
    /// endpoint antes de subir.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = self.send(method, endpoint, query, body).await;
        if let Err(e) = &result {
            tracing::warn!(endpoint, "API-Fehler: {}", e);
        }
        result
    }

    async fn send<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, endpoint))
            .header(CONTENT_TYPE, "application/json");

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(status, &text),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str::<T>(&text)?)
    }
}

/// Mensagem de um corpo de erro: o campo `error` do JSON, senão
/// `HTTP <status>`; corpo que não é JSON vira "Unknown error".
pub fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
        Err(_) => "Unknown error".to_string(),
    }
}
