// src/services/customer_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{customer_repo::CustomerRow, store::RecordStore},
    models::{customer::Customer, labels::UNKNOWN_LABEL},
};

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn RecordStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let rows = self.store.list_customers().await?;
        rows.into_iter().map(map_customer_row).collect()
    }
}

pub fn map_customer_row(row: CustomerRow) -> Result<Customer, AppError> {
    let customer_number = row
        .customer_number
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::MappingError(format!("Kunde {} ohne Kundennummer", row.id)))?;
    let created_at = row
        .created_at
        .ok_or_else(|| AppError::MappingError(format!("Kunde {customer_number} ohne created_at")))?;

    Ok(Customer {
        id: row.id,
        customer_number,
        name: row
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        email: row.email.unwrap_or_default(),
        phone: row.phone.unwrap_or_default(),
        case_count: row.case_count.unwrap_or(0).max(0),
        created_at,
        updated_at: row.updated_at.unwrap_or(created_at),
    })
}
