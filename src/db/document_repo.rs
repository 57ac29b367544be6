// src/db/document_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, FromRow, Postgres};

use crate::common::error::AppError;

#[derive(Debug, Clone, Default, FromRow)]
pub struct DocumentRow {
    pub id: i64,
    pub document_id: Option<String>,
    pub case_id: Option<i64>,
    pub document_type: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub description: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

const LIST_DOCUMENTS: &str = r#"
    SELECT
        id::bigint               AS id,
        document_id::text        AS document_id,
        case_id::bigint          AS case_id,
        document_type::text      AS document_type,
        file_path::text          AS file_path,
        file_name::text          AS file_name,
        file_size::bigint        AS file_size,
        mime_type::text          AS mime_type,
        description::text        AS description,
        uploaded_at::timestamptz AS uploaded_at
    FROM case_documents
    ORDER BY uploaded_at DESC
"#;

#[derive(Clone, Default)]
pub struct DocumentRepository;

impl DocumentRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_documents<'e, E>(&self, executor: E) -> Result<Vec<DocumentRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, DocumentRow>(LIST_DOCUMENTS)
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }
}
