// ============================================================================
// VIEW CONTROLLER - Cambio de vista + render del spec
// ============================================================================
// Recibe sus handles DOM, el motor y la fuente de viewport en la
// construcción; nada de globals, así se puede probar sin navegador.
// ============================================================================

use crate::dom::{self, DomElement, NavRoot, ACTIVE_CLASS, ROUTE_ATTRIBUTE};
use crate::models::{ColorScheme, Route, ViewError, ViewportSource, VisualizationSpec};
use crate::services::SpecSource;
use crate::vega::{RenderEngine, ViewOptions};

pub struct ViewController<E, N, R, V> {
    pipeline: E,
    map: E,
    nav: N,
    engine: R,
    viewport: V,
    options: ViewOptions,
    scheme: ColorScheme,
}

impl<E, N, R, V> ViewController<E, N, R, V>
where
    E: DomElement,
    N: NavRoot,
    R: RenderEngine,
    V: ViewportSource,
{
    pub fn new(pipeline: E, map: E, nav: N, engine: R, viewport: V) -> Self {
        Self {
            pipeline,
            map,
            nav,
            engine,
            viewport,
            options: ViewOptions::default(),
            scheme: ColorScheme::STATUS,
        }
    }

    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }

    pub fn nav(&self) -> &N {
        &self.nav
    }

    pub fn engine(&self) -> &R {
        &self.engine
    }

    fn container(&self, route: Route) -> &E {
        match route {
            Route::Pipeline => &self.pipeline,
            Route::Map => &self.map,
        }
    }

    /// Mostrar la vista de `route` y marcar su botón como activo.
    /// No falla: los errores del DOM solo se loguean.
    pub fn activate(&self, route: Route) {
        log::info!("🔀 [VIEW] show {}", route);

        if let Err(e) = dom::hide(self.container(route.other())) {
            log::warn!("⚠️ [VIEW] No se pudo ocultar #{}: {}", route.other(), e);
        }
        if let Err(e) = dom::show(self.container(route)) {
            log::warn!("⚠️ [VIEW] No se pudo mostrar #{}: {}", route, e);
        }

        let buttons = self.nav.buttons();
        for button in &buttons {
            if let Err(e) = button.remove_class(ACTIVE_CLASS) {
                log::warn!("⚠️ [VIEW] No se pudo limpiar botón: {}", e);
            }
        }
        for button in buttons
            .iter()
            .filter(|b| b.get_attribute(ROUTE_ATTRIBUTE).as_deref() == Some(route.as_str()))
        {
            if let Err(e) = button.add_class(ACTIVE_CLASS) {
                log::warn!("⚠️ [VIEW] No se pudo activar botón {}: {}", route, e);
            }
        }
    }

    /// Vista visible según el estilo de los contenedores
    pub fn active_route(&self) -> Option<Route> {
        let visible: Vec<Route> = Route::ALL
            .into_iter()
            .filter(|r| dom::is_visible(self.container(*r)))
            .collect();
        match visible.as_slice() {
            [route] => Some(*route),
            _ => None,
        }
    }

    /// Ajustar el spec al viewport actual, registrar la paleta y montar la
    /// vista. El tamaño se recalcula en cada llamada.
    pub async fn render(&self, mut spec: VisualizationSpec) -> Result<(), ViewError> {
        let viewport = self.viewport.viewport();
        let (width, height) = viewport.target_size();
        spec.set_size(width, height);
        log::info!(
            "📐 [VIEW] Viewport {}x{} -> spec {}x{}",
            viewport.width,
            viewport.height,
            width,
            height
        );

        self.engine.register_scheme(ColorScheme::NAME, &self.scheme)?;
        self.engine.run(&spec, &self.options).await?;

        log::info!("✅ [VIEW] Vista montada en {}", self.options.container);
        Ok(())
    }
}

/// Cargar el spec y renderizarlo. Los errores se loguean y se tragan;
/// devuelve `true` si la vista quedó montada.
pub async fn initialize<S, E, N, R, V>(loader: &S, controller: &ViewController<E, N, R, V>) -> bool
where
    S: SpecSource,
    E: DomElement,
    N: NavRoot,
    R: RenderEngine,
    V: ViewportSource,
{
    let spec = match loader.load().await {
        Ok(spec) => spec,
        Err(e) => {
            log::error!("❌ [VIEW] Error cargando spec: {}", e);
            return false;
        }
    };

    match controller.render(spec).await {
        Ok(()) => true,
        Err(e) => {
            log::error!("❌ [VIEW] Error renderizando spec: {}", e);
            false
        }
    }
}
