//! Servicio de borrado de un punto de entrega
//!
//! Flujo completo: confirmación del usuario, POST al endpoint de borrado y
//! recarga de la vista si el servidor confirma. Cualquier fallo se muestra
//! al usuario y deja el estado intacto; no hay reintentos automáticos.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::dto::delete_point_dto::DeletePointResponse;

pub const CONFIRM_DELETE_MESSAGE: &str = "¿Seguro que deseas eliminar este punto de entrega?";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeletionError {
    #[error("URL de borrado inválida: {0}")]
    InvalidUrl(String),

    #[error("Error de red: {0}")]
    Transport(String),

    #[error("Error HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for DeletionError {
    fn from(e: reqwest::Error) -> Self {
        DeletionError::Transport(e.to_string())
    }
}

/// Diálogos bloqueantes de la página (confirm/alert)
pub trait UserDialogs: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Recarga completa de la vista
pub trait PageReloader: Send + Sync {
    fn reload(&self);
}

/// Envío del POST de borrado
#[async_trait]
pub trait DeletionTransport: Send + Sync {
    /// `Ok` sólo con status HTTP de éxito y cuerpo JSON decodificable
    async fn submit_delete(&self, url: &str) -> Result<DeletePointResponse, DeletionError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed(String),
}

pub struct DeletePointService<T: DeletionTransport> {
    transport: T,
}

impl<T: DeletionTransport> DeletePointService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrar un punto de entrega tras la confirmación del usuario
    pub async fn delete_point(
        &self,
        url: &str,
        dialogs: &dyn UserDialogs,
        reloader: &dyn PageReloader,
    ) -> DeleteOutcome {
        if !dialogs.confirm(CONFIRM_DELETE_MESSAGE) {
            log::info!("🚫 Borrado cancelado por el usuario: {}", url);
            return DeleteOutcome::Cancelled;
        }

        log::info!("🗑️ Borrando punto de entrega: {}", url);

        let message = match self.transport.submit_delete(url).await {
            Ok(DeletePointResponse { ok: true, .. }) => {
                log::info!("✅ Punto borrado, recargando vista");
                reloader.reload();
                return DeleteOutcome::Deleted;
            }
            Ok(DeletePointResponse { ok: false, error }) => format!(
                "No se pudo eliminar el punto: {}",
                error.unwrap_or_else(|| "error desconocido".to_string())
            ),
            Err(DeletionError::Status { message, .. }) if !message.is_empty() => {
                format!("No se pudo eliminar el punto: {}", message)
            }
            Err(DeletionError::Transport(e)) => format!("Error de red al eliminar el punto: {}", e),
            Err(e) => format!("No se pudo eliminar el punto: {}", e),
        };

        log::error!("❌ {}", message);
        dialogs.alert(&message);
        DeleteOutcome::Failed(message)
    }
}
