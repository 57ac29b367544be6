// src/models/document.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::labels::label_registry;

label_registry! {
    /// Tipo de documento anexado a um caso.
    DocumentType {
        Schadenfotos => "schadenfotos", "Schadenfotos", Secondary, aliases ["foto"];
        Fahrzeugschein => "fahrzeugschein", "Fahrzeugschein", Default;
        Unfallbericht => "unfallbericht", "Unfallbericht", Default;
        Gutachten => "gutachten", "Gutachten", Success;
        Kostenvoranschlag => "kostenvoranschlag", "Kostenvoranschlag", Warning;
        Rechnung => "rechnung", "Rechnung", Warning;
        Versicherung => "versicherung", "Versicherung", Default;
        Sonstiges => "sonstiges", "Sonstiges", Default, aliases ["sonstige"];
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    pub id: i64,

    #[schema(example = "DOC-2025-0042")]
    pub document_id: String,

    pub case_id: Option<i64>,

    #[schema(value_type = String, example = "gutachten")]
    pub document_type: DocumentType,

    // A tabela usa file_name; a API pública expõe filename
    #[serde(alias = "file_name")]
    #[schema(example = "gutachten_F-2025-001.pdf")]
    pub filename: String,

    pub file_path: String,

    #[schema(example = 524288)]
    pub file_size: i64,

    #[schema(example = "application/pdf")]
    pub mime_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub uploaded_at: DateTime<Utc>,
}
