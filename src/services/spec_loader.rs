// ============================================================================
// SPEC LOADER - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Una petición por llamada: sin reintentos, sin caché, sin timeout propio.
// ============================================================================

use std::future::Future;

use crate::config::CONFIG;
use crate::models::{ViewError, VisualizationSpec};

/// Origen del spec de visualización
pub trait SpecSource {
    fn load(&self) -> impl Future<Output = Result<VisualizationSpec, ViewError>>;
}

/// Cliente de `/spec.json`
#[derive(Debug, Clone)]
pub struct SpecLoader {
    endpoint: String,
}

impl SpecLoader {
    pub fn new() -> Self {
        Self::with_endpoint(&CONFIG.spec_endpoint)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for SpecLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convertir la respuesta HTTP en spec: estado no exitoso = `Fetch`,
/// cuerpo que no es un objeto JSON = `NonJson`.
pub fn spec_from_response(
    ok: bool,
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<VisualizationSpec, ViewError> {
    if !ok {
        return Err(ViewError::Fetch(format!("HTTP {}: {}", status, status_text)));
    }
    VisualizationSpec::parse(body)
}

#[cfg(target_arch = "wasm32")]
impl SpecSource for SpecLoader {
    async fn load(&self) -> Result<VisualizationSpec, ViewError> {
        use gloo_net::http::Request;

        log::info!("📥 [LOADER] GET {}", self.endpoint);

        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ViewError::Fetch(format!("Network error: {}", e)))?;

        let ok = response.ok();
        let status = response.status();
        let status_text = response.status_text();
        let body = if ok {
            response
                .text()
                .await
                .map_err(|e| ViewError::Fetch(format!("Body read error: {}", e)))?
        } else {
            String::new()
        };

        let spec = spec_from_response(ok, status, &status_text, &body)?;
        log::info!("✅ [LOADER] Spec cargado ({} claves)", spec.as_map().len());
        Ok(spec)
    }
}
