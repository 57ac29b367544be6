// src/db/case_repo.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, FromRow, Postgres};

use crate::common::error::AppError;

// Linha crua de `cases LEFT JOIN vehicles`. Tudo opcional: o mapeamento
// para `Case` (services::case_service) aplica os valores padrão.
#[derive(Debug, Clone, Default, FromRow)]
pub struct CaseRow {
    pub id: i64,
    pub case_number: Option<String>,
    pub customer_id: Option<i64>,
    pub vehicle_id: Option<i64>,
    pub accident_date: Option<NaiveDate>,
    pub accident_location: Option<String>,
    pub case_type: Option<String>,
    pub damage_description: Option<String>,
    pub insurance_company: Option<String>,
    pub estimated_cost: Option<Decimal>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    // vindos de vehicles
    pub make_model: Option<String>,
    pub license_plate: Option<String>,
}

const LIST_CASES: &str = r#"
    SELECT
        c.id::bigint               AS id,
        c.case_number::text        AS case_number,
        c.customer_id::bigint      AS customer_id,
        c.vehicle_id::bigint       AS vehicle_id,
        c.accident_date::date      AS accident_date,
        c.accident_location::text  AS accident_location,
        c.case_type::text          AS case_type,
        c.damage_description::text AS damage_description,
        c.insurance_company::text  AS insurance_company,
        c.estimated_cost::numeric  AS estimated_cost,
        c.status::text             AS status,
        c.created_at::timestamptz  AS created_at,
        c.updated_at::timestamptz  AS updated_at,
        v.make_model::text         AS make_model,
        v.license_plate::text      AS license_plate
    FROM cases c
    LEFT JOIN vehicles v ON c.vehicle_id = v.id
    ORDER BY c.created_at DESC
"#;

#[derive(Clone, Default)]
pub struct CaseRepository;

impl CaseRepository {
    pub fn new() -> Self {
        Self
    }

    /// Todos os casos, mais recentes primeiro, com marca/modelo e placa do veículo.
    pub async fn list_cases<'e, E>(&self, executor: E) -> Result<Vec<CaseRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, CaseRow>(LIST_CASES)
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }
}
