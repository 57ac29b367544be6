use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{client::ClientError, models::envelope::Envelope};

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    // Falha de conexão, timeout do pool ou erro da própria consulta
    #[error("Datenbankfehler: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Linha com formato inesperado (ex.: created_at nulo)
    #[error("Ungültiger Datensatz: {0}")]
    MappingError(String),

    // Falha ao falar com a API (mesma origem ou serviço externo)
    #[error("{0}")]
    UpstreamError(#[from] ClientError),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Interner Serverfehler: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Converte para o erro HTTP, prefixando o contexto da rota
    /// (ex.: "Fehler beim Abrufen der Fälle").
    pub fn to_api_error(&self, context: &str) -> ApiError {
        tracing::error!("{}: {}", context, self);
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{context}: {self}"),
        }
    }
}

// Erro já pronto para virar resposta: status + mensagem legível.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(Envelope::<()>::failure(self.message));
        (self.status, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error("Fehler").into_response()
    }
}
