// src/models/customer.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- CLIENTE (Kunde) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    #[schema(example = 17)]
    pub id: i64,

    #[schema(example = "K-2025-001")]
    pub customer_number: String,

    #[schema(example = "Max Mustermann")]
    pub name: String,

    #[schema(example = "max@example.de")]
    pub email: String,

    #[schema(example = "0521123456")]
    pub phone: String,

    // Agregado calculado na consulta (COUNT dos casos), nunca gravado
    #[schema(example = 2)]
    pub case_count: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
