// src/services/case_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{case_repo::CaseRow, store::RecordStore},
    models::{
        case::{Case, CaseStatus, CaseType},
        labels::UNKNOWN_LABEL,
    },
};

pub const MISSING_PLATE: &str = "N/A";
pub const MISSING_DAMAGE: &str = "Nicht angegeben";

#[derive(Clone)]
pub struct CaseService {
    store: Arc<dyn RecordStore>,
}

impl CaseService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list_cases(&self) -> Result<Vec<Case>, AppError> {
        let rows = self.store.list_cases().await?;
        rows.into_iter().map(map_case_row).collect()
    }
}

/// "VW Golf Variant" -> ("VW", "Golf Variant"). Sem veículo: ("Unbekannt", "").
pub fn split_make_model(make_model: Option<&str>) -> (String, String) {
    let raw = make_model.unwrap_or_default();
    let (make, model) = raw.split_once(' ').unwrap_or((raw, ""));

    let make = if make.is_empty() { UNKNOWN_LABEL } else { make };
    (make.to_string(), model.to_string())
}

// String vazia conta como ausente
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn map_case_row(row: CaseRow) -> Result<Case, AppError> {
    let case_number = present(row.case_number)
        .ok_or_else(|| AppError::MappingError(format!("Fall {} ohne Fallnummer", row.id)))?;
    let created_at = row
        .created_at
        .ok_or_else(|| AppError::MappingError(format!("Fall {case_number} ohne created_at")))?;

    let (vehicle_make, vehicle_model) = split_make_model(row.make_model.as_deref());
    let case_type = row.case_type.clone().unwrap_or_default();

    // damage_description > case_type > "Nicht angegeben"
    let damage_type = present(row.damage_description)
        .or_else(|| present(row.case_type))
        .unwrap_or_else(|| MISSING_DAMAGE.to_string());

    Ok(Case {
        id: row.id,
        case_number,
        customer_id: row.customer_id,
        vehicle_id: row.vehicle_id,
        vehicle_make,
        vehicle_model,
        license_plate: present(row.license_plate).unwrap_or_else(|| MISSING_PLATE.to_string()),
        accident_date: row.accident_date,
        accident_location: row.accident_location,
        case_type: CaseType::from(case_type),
        damage_type,
        status: CaseStatus::from(row.status.unwrap_or_default()),
        estimated_damage_cost: row.estimated_cost,
        insurance_company: row.insurance_company,
        created_at,
        updated_at: row.updated_at,
    })
}
