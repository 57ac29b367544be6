// src/db/store.rs

//! Fronteira entre os services e o banco. Os services só enxergam
//! `dyn RecordStore`, o que permite trocar o Postgres por um store em
//! memória nos testes.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::{
    common::{db_utils::acquire_lease, error::AppError},
    db::{
        case_repo::{CaseRepository, CaseRow},
        customer_repo::{CustomerRepository, CustomerRow},
        document_repo::{DocumentRepository, DocumentRow},
        pool::LeaseTracker,
    },
};

/// Fotografia do pool para `/api/health`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
    pub leased: usize,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_cases(&self) -> Result<Vec<CaseRow>, AppError>;
    async fn list_customers(&self) -> Result<Vec<CustomerRow>, AppError>;
    async fn list_documents(&self) -> Result<Vec<DocumentRow>, AppError>;

    fn pool_status(&self) -> PoolStatus;
}

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
    tracker: LeaseTracker,
    case_repo: CaseRepository,
    customer_repo: CustomerRepository,
    document_repo: DocumentRepository,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            tracker: LeaseTracker::new(),
            case_repo: CaseRepository::new(),
            customer_repo: CustomerRepository::new(),
            document_repo: DocumentRepository::new(),
        }
    }

    pub fn tracker(&self) -> &LeaseTracker {
        &self.tracker
    }
}

// Cada listagem: um lease, uma consulta. O lease volta ao pool no drop,
// inclusive quando a consulta falha.
#[async_trait]
impl RecordStore for PgRecordStore {
    async fn list_cases(&self) -> Result<Vec<CaseRow>, AppError> {
        let mut lease = acquire_lease(&self.pool, &self.tracker).await?;
        self.case_repo.list_cases(&mut **lease).await
    }

    async fn list_customers(&self) -> Result<Vec<CustomerRow>, AppError> {
        let mut lease = acquire_lease(&self.pool, &self.tracker).await?;
        self.customer_repo.list_customers(&mut **lease).await
    }

    async fn list_documents(&self) -> Result<Vec<DocumentRow>, AppError> {
        let mut lease = acquire_lease(&self.pool, &self.tracker).await?;
        self.document_repo.list_documents(&mut **lease).await
    }

    fn pool_status(&self) -> PoolStatus {
        PoolStatus {
            size: self.pool.size(),
            idle: self.pool.num_idle(),
            leased: self.tracker.active(),
        }
    }
}
