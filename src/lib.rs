// ============================================================================
// PIPELINE VIEW - Explorador del pipeline (Rust + WASM)
// ============================================================================
// - Models: spec, rutas, paleta, viewport
// - Services: carga de /spec.json
// - ViewModels: ViewController (cambio de vista + render)
// - Vega: trait del motor + implementación web
// - App: raíz de composición (solo wasm32)
// ============================================================================

pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod vega;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod app;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;
    use crate::dom::element::document;
    use crate::dom::events::listen;
    use crate::dom::is_document_loading;
    use crate::models::Route;

    // Instancia global de App para las funciones exportadas a JavaScript
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        }
        log::info!("🚀 Pipeline view");

        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        if is_document_loading(&doc.ready_state()) {
            listen(&doc, "DOMContentLoaded", |_e| boot())?;
        } else {
            boot();
        }
        Ok(())
    }

    fn boot() {
        let app = match App::new() {
            Ok(app) => app,
            Err(e) => {
                log::error!("❌ [APP] No se pudo crear la app: {:?}", e);
                return;
            }
        };

        if let Err(e) = app.bind_navigation() {
            log::error!("❌ [APP] Error registrando navegación: {:?}", e);
        }
        app.start();

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });
    }

    fn activate(route: Route) {
        APP.with(|cell| match *cell.borrow() {
            Some(ref app) => app.activate(route),
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        });
    }

    /// Mostrar la vista del pipeline (llamable desde JavaScript)
    #[wasm_bindgen(js_name = showPipeline)]
    pub fn show_pipeline() {
        activate(Route::Pipeline);
    }

    /// Mostrar la vista del mapa (llamable desde JavaScript)
    #[wasm_bindgen(js_name = showMap)]
    pub fn show_map() {
        activate(Route::Map);
    }
}
