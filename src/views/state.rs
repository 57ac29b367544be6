// src/views/state.rs

use crate::client::ClientError;

/// Ciclo de vida de uma lista: `Loading` -> `Ready` | `Empty` | `Failed`.
/// Falha de carga é um estado próprio e nunca se confunde com lista vazia.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Ready(Vec<T>),
    Empty,
    Failed { message: String },
}

impl<T> ViewState<T> {
    /// Resultado da busca -> estado final. `entity` só entra no log.
    pub fn from_result(entity: &str, result: Result<Vec<T>, ClientError>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => ViewState::Empty,
            Ok(rows) => ViewState::Ready(rows),
            Err(e) => {
                tracing::warn!("Fehler beim Laden der {}: {}", entity, e);
                ViewState::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Linhas carregadas (vazio fora de `Ready`).
    pub fn rows(&self) -> &[T] {
        match self {
            ViewState::Ready(rows) => rows,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewState::Failed { .. })
    }
}
