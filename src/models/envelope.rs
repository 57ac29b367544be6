// src/models/envelope.rs

//! Envelope `{ success, <dados> | error }` usado por todas as rotas.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{case::Case, customer::Customer, document::Document};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,

    // Achatado: { "success": true, "cases": [...] }
    #[serde(flatten)]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Desembrulha o envelope. `success: false` (ou sem dados) vira `Err`
    /// com a mensagem do servidor.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("Antwort enthält keine Daten".to_string()),
            (false, _) => Err(self
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Unknown error".to_string())),
        }
    }
}

// --- Cargas por entidade (a chave JSON muda por rota) ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CaseListing {
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerListing {
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentListing {
    pub documents: Vec<Document>,
}

/// Corpo de erro `{ success: false, error }` (documentação OpenAPI).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Fehler beim Abrufen der Fälle: Datenbankfehler")]
    pub error: String,
}
