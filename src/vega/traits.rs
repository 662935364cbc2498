use std::future::Future;

use serde::Serialize;

use crate::config::AppConfig;
use crate::models::{ColorScheme, ViewError, VisualizationSpec};

/// Motor de renderizado externo (Vega en el navegador)
pub trait RenderEngine {
    /// Registrar una paleta con nombre para que el spec la resuelva
    fn register_scheme(&self, name: &str, scheme: &ColorScheme) -> Result<(), ViewError>;

    /// Construir la vista sobre el contenedor y ejecutarla.
    /// Se resuelve cuando la vista está montada.
    fn run(
        &self,
        spec: &VisualizationSpec,
        options: &ViewOptions,
    ) -> impl Future<Output = Result<(), ViewError>>;
}

/// Opciones de construcción de la vista
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewOptions {
    pub renderer: String,
    pub container: String,
    pub hover: bool,
    /// Target de los links que genera la vista (`_blank` = pestaña nueva)
    pub link_target: String,
}

impl ViewOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            renderer: config.render_config.renderer.clone(),
            container: config.dom_config.mount_selector.clone(),
            hover: config.render_config.hover,
            link_target: config.render_config.link_target.clone(),
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
