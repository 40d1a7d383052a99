// ============================================================================
// LEGAL SERVICE - Cliente del backend de consulta legal (stateless)
// ============================================================================
// Envoltorio de petición/respuesta sin estado: sin reintentos, sin caché,
// sin token (el backend legal es público para la app). Un único tope de
// tiempo generoso por consulta; el ranking y la generación de respuestas
// viven del otro lado del contrato.
// ============================================================================

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{ConsultaLegal, EstadisticasApi, RespuestaLegal, SaludApi};
use crate::services::api_client::{error_from_response, parse_json};

#[derive(Clone)]
pub struct LegalClient {
    base_url: String,
}

impl LegalClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.legal_api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `POST /legal/consulta`
    pub async fn consultar(&self, consulta: &ConsultaLegal) -> Result<RespuestaLegal, ApiError> {
        log::info!("⚖️ Enviando consulta legal ({} caracteres)", consulta.pregunta.len());
        let request = Request::post(&self.url("/legal/consulta"))
            .header("Content-Type", "application/json")
            .json(consulta)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.send(request).await?;
        let respuesta: RespuestaLegal = parse_json(&response).await?;
        log::info!(
            "✅ Respuesta legal recibida: confianza {:.0}%, {} fundamentos, {:.1}s",
            respuesta.confianza * 100.0,
            respuesta.fundamentos_legales.len(),
            respuesta.tiempo_procesamiento
        );
        Ok(respuesta)
    }

    /// `GET /admin/estadisticas`
    pub async fn estadisticas(&self) -> Result<EstadisticasApi, ApiError> {
        let response = self.send_get("/admin/estadisticas").await?;
        parse_json(&response).await
    }

    /// `GET /admin/salud`
    pub async fn salud(&self) -> Result<SaludApi, ApiError> {
        let response = self.send_get("/admin/salud").await?;
        parse_json(&response).await
    }

    /// `GET /admin/historial`
    pub async fn historial(&self) -> Result<Vec<RespuestaLegal>, ApiError> {
        let response = self.send_get("/admin/historial").await?;
        parse_json(&response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_get(&self, path: &str) -> Result<Response, ApiError> {
        let request = Request::get(&self.url(path))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(request).await
    }

    /// Envío con tope de tiempo único (el backend legal puede tardar)
    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let enviar = Box::pin(request.send());
        let tope = Box::pin(TimeoutFuture::new(CONFIG.legal_timeout_ms));
        let response = match select(enviar, tope).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(_) => {
                log::error!("⏰ La consulta legal superó el tope de tiempo");
                return Err(ApiError::Timeout);
            }
        };
        if response.ok() {
            Ok(response)
        } else {
            Err(error_from_response(&response).await)
        }
    }
}

impl Default for LegalClient {
    fn default() -> Self {
        Self::new()
    }
}
