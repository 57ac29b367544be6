// src/db/customer_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, FromRow, Postgres};

use crate::common::error::AppError;

#[derive(Debug, Clone, Default, FromRow)]
pub struct CustomerRow {
    pub id: i64,
    pub customer_number: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub case_count: Option<i64>,
}

// COUNT(cs.id) ignora os NULLs do LEFT JOIN: cliente sem casos => 0
const LIST_CUSTOMERS: &str = r#"
    SELECT
        c.id::bigint              AS id,
        c.customer_number::text   AS customer_number,
        c.name::text              AS name,
        c.email::text             AS email,
        c.phone::text             AS phone,
        c.created_at::timestamptz AS created_at,
        c.updated_at::timestamptz AS updated_at,
        COUNT(cs.id)::bigint      AS case_count
    FROM customers c
    LEFT JOIN cases cs ON c.id = cs.customer_id
    GROUP BY c.id, c.customer_number, c.name, c.email, c.phone, c.created_at, c.updated_at
    ORDER BY c.created_at DESC
"#;

#[derive(Clone, Default)]
pub struct CustomerRepository;

impl CustomerRepository {
    pub fn new() -> Self {
        Self
    }

    /// Clientes com a contagem de casos agregada.
    pub async fn list_customers<'e, E>(&self, executor: E) -> Result<Vec<CustomerRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, CustomerRow>(LIST_CUSTOMERS)
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }
}
