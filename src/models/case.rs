// src/models/case.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::labels::label_registry;

// --- ENUMS ---

label_registry! {
    /// Status de um caso (Fall). Aceita também os nomes em inglês antigos.
    CaseStatus {
        Offen => "offen", "Offen", Warning, aliases ["open"];
        InBearbeitung => "in_bearbeitung", "In Bearbeitung", Default, aliases ["in_progress"];
        GutachtenErstellt => "gutachten_erstellt", "Gutachten erstellt", Secondary;
        Versendet => "versendet", "Versendet", Secondary;
        Abgeschlossen => "abgeschlossen", "Abgeschlossen", Success, aliases ["completed"];
        Storniert => "storniert", "Storniert", Destructive, aliases ["cancelled"];
    }
}

label_registry! {
    CaseType {
        Haftpflicht => "Unfallgutachten (Haftpflicht)", "Unfallgutachten (Haftpflicht)", Default;
        Kasko => "Unfallgutachten (Kasko)", "Unfallgutachten (Kasko)", Default;
        Wertgutachten => "Wertgutachten", "Wertgutachten", Default;
        Leasingrueckgabe => "Leasingrückgabe", "Leasingrückgabe", Default;
        Beweissicherung => "Beweissicherung", "Beweissicherung", Default;
        Sonstiges => "Sonstiges", "Sonstiges", Default;
    }
}

// --- CASO (Fall) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Case {
    pub id: i64,

    #[schema(example = "F-2025-001")]
    pub case_number: String,

    pub customer_id: Option<i64>,
    pub vehicle_id: Option<i64>,

    // Derivados de vehicles.make_model ("VW Golf Variant" -> "VW" / "Golf Variant")
    #[schema(example = "VW")]
    pub vehicle_make: String,
    #[schema(example = "Golf Variant")]
    pub vehicle_model: String,

    #[schema(example = "BI-AB 123")]
    pub license_plate: String,

    pub accident_date: Option<NaiveDate>,
    pub accident_location: Option<String>,

    #[schema(value_type = String, example = "Unfallgutachten (Haftpflicht)")]
    pub case_type: CaseType,

    #[schema(example = "Frontschaden")]
    pub damage_type: String,

    #[schema(value_type = String, example = "offen")]
    pub status: CaseStatus,

    #[schema(value_type = Option<f64>, example = 2450.5)]
    pub estimated_damage_cost: Option<Decimal>,

    pub insurance_company: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::labels::{BadgeVariant, Labeled};

    #[test]
    fn status_accepts_legacy_english_values() {
        assert_eq!(CaseStatus::from("open"), CaseStatus::Offen);
        assert_eq!(CaseStatus::from("completed").label(), "Abgeschlossen");
        assert_eq!(CaseStatus::from("storniert").badge(), BadgeVariant::Destructive);
        assert_eq!(CaseStatus::from("in_progress").as_str(), "in_bearbeitung");
    }

    #[test]
    fn case_type_keeps_unknown_values() {
        let other = CaseType::from("Oldtimer-Gutachten");
        assert!(!other.is_known());
        assert_eq!(other.label(), "Oldtimer-Gutachten");
        assert_eq!(CaseType::from("Leasingrückgabe"), CaseType::Leasingrueckgabe);
    }
}
