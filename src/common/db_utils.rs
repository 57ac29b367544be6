use sqlx::{pool::PoolConnection, PgPool, Postgres};

use crate::common::error::AppError;
use crate::db::pool::{Lease, LeaseTracker};

// ---
// Helper de conexão: um lease por requisição
// ---
/// Adquire uma conexão do pool e registra o empréstimo no `tracker`.
/// Timeout do pool vira `AppError::DatabaseError` pelo `?`.
pub(crate) async fn acquire_lease(
    pool: &PgPool,
    tracker: &LeaseTracker,
) -> Result<Lease<PoolConnection<Postgres>>, AppError> {
    let conn = pool.acquire().await?;
    Ok(tracker.lease(conn))
}
