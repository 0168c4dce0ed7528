//! DTO de la respuesta del endpoint de borrado de un punto de entrega.

use serde::{Deserialize, Serialize};

/// `{"ok": true}` o `{"ok": false, "error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletePointResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
