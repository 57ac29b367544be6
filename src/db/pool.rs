// src/db/pool.rs

//! Pool limitado de conexões Postgres e contagem de "leases" (conexões
//! emprestadas a uma requisição).

use std::{
    ops::{Deref, DerefMut},
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

pub async fn connect_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.url)
        .await?;

    tracing::info!(
        max_connections = settings.max_connections,
        "✅ Conexão com o banco de dados estabelecida com sucesso!"
    );
    Ok(pool)
}

// Contadores compartilhados entre todos os leases de um store
#[derive(Debug, Clone, Default)]
pub struct LeaseTracker {
    active: Arc<AtomicUsize>,
    total: Arc<AtomicU64>,
}

impl LeaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leases ainda não devolvidos.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Leases emprestados desde o início.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }

    /// Registra `conn` como emprestada até o `Lease` ser descartado.
    pub fn lease<C>(&self, conn: C) -> Lease<C> {
        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.total.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(active, "Lease de conexão adquirido");

        Lease {
            conn,
            tracker: self.clone(),
        }
    }
}

/// Conexão emprestada. Ao sair de escopo (sucesso, `?` ou panic) o contador
/// é decrementado e, para `PoolConnection`, a conexão volta ao pool.
#[derive(Debug)]
pub struct Lease<C> {
    conn: C,
    tracker: LeaseTracker,
}

impl<C> Deref for Lease<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.conn
    }
}

impl<C> DerefMut for Lease<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.conn
    }
}

impl<C> Drop for Lease<C> {
    fn drop(&mut self) {
        let active = self.tracker.active.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::debug!(active, "Lease de conexão devolvido");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_is_released_on_drop() {
        let tracker = LeaseTracker::new();
        {
            let lease = tracker.lease(42_u8);
            assert_eq!(*lease, 42);
            assert_eq!(tracker.active(), 1);
        }
        assert_eq!(tracker.active(), 0);
        assert_eq!(tracker.total(), 1);
    }

    #[test]
    fn lease_is_released_on_early_return() {
        fn failing(tracker: &LeaseTracker) -> Result<(), &'static str> {
            let _lease = tracker.lease(());
            Err("consulta falhou")?;
            Ok(())
        }

        let tracker = LeaseTracker::new();
        assert!(failing(&tracker).is_err());
        assert_eq!(tracker.active(), 0);
    }
}
