//! Cliente HTTP del endpoint de borrado de puntos
//!
//! Envía el POST con el token anti-CSRF leído de la cookie de la sesión y
//! la marca de petición AJAX que espera el servidor.

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::dto::delete_point_dto::DeletePointResponse;
use crate::services::delete_point_service::{DeletionError, DeletionTransport};

pub const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub struct HttpDeletionTransport {
    client: Client,
    jar: Arc<Jar>,
    csrf_cookie_name: String,
    base_url: Option<Url>,
}

impl HttpDeletionTransport {
    /// Crear el transporte compartiendo el cookie jar de la sesión
    pub fn new(
        jar: Arc<Jar>,
        csrf_cookie_name: String,
        base_url: Option<Url>,
        timeout: Duration,
    ) -> Result<Self, DeletionError> {
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            jar,
            csrf_cookie_name,
            base_url,
        })
    }

    /// Transporte con la cookie anti-CSRF y el timeout configurados
    pub fn from_config(
        config: &EnvironmentConfig,
        jar: Arc<Jar>,
        base_url: Option<Url>,
    ) -> Result<Self, DeletionError> {
        Self::new(
            jar,
            config.csrf_cookie_name.clone(),
            base_url,
            config.http_timeout(),
        )
    }

    /// Resolver URLs relativas (`/borrar_punto/5/`) contra la base de la página
    pub fn resolve_url(&self, url: &str) -> Result<Url, DeletionError> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(_) => match &self.base_url {
                Some(base) => base
                    .join(url)
                    .map_err(|e| DeletionError::InvalidUrl(format!("{}: {}", url, e))),
                None => Err(DeletionError::InvalidUrl(url.to_string())),
            },
        }
    }

    /// Valor de la cookie anti-CSRF para `url`, si existe
    pub fn csrf_token(&self, url: &Url) -> Option<String> {
        let header = self.jar.cookies(url)?;
        let cookies = header.to_str().ok()?;
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == self.csrf_cookie_name).then(|| value.to_string())
        })
    }
}

#[async_trait]
impl DeletionTransport for HttpDeletionTransport {
    async fn submit_delete(&self, url: &str) -> Result<DeletePointResponse, DeletionError> {
        let url = self.resolve_url(url)?;

        let mut request = self
            .client
            .post(url.clone())
            .header("X-Requested-With", "XMLHttpRequest");

        match self.csrf_token(&url) {
            Some(token) => request = request.header(CSRF_HEADER, token),
            None => log::warn!(
                "⚠️ Cookie '{}' no encontrada, enviando sin token",
                self.csrf_cookie_name
            ),
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        log::info!("📡 Borrado {} -> {}", url, status);
        log::debug!("📄 Respuesta de borrado: {}", body);

        if !status.is_success() {
            let message = serde_json::from_str::<DeletePointResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_default();
            return Err(DeletionError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| DeletionError::Decode(e.to_string()))
    }
}
