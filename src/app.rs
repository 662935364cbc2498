// ============================================================================
// APP - Raíz de composición en el navegador
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::element::{find_element, require_element, WindowViewport};
use crate::dom::events::on_click;
use crate::dom::{NavRoot, ROUTE_ATTRIBUTE};
use crate::models::Route;
use crate::services::SpecLoader;
use crate::vega::web::VegaEngine;
use crate::vega::ViewOptions;
use crate::viewmodels::{initialize, ViewController};

pub type PageController = ViewController<Element, Element, VegaEngine, WindowViewport>;

/// Aplicación principal
pub struct App {
    controller: Rc<PageController>,
    mount_ready: bool,
}

impl App {
    /// Resolver los elementos del markup y crear el controlador
    pub fn new() -> Result<Self, JsValue> {
        let dom = &CONFIG.dom_config;
        let pipeline = require_element(&dom.pipeline_selector)?;
        let map = require_element(&dom.map_selector)?;
        let nav = require_element(&dom.nav_selector)?;
        // El motor monta por selector; sin él no se renderiza, pero la
        // navegación sigue funcionando
        let mount_ready = find_element(&dom.mount_selector).is_some();
        if !mount_ready {
            log::error!("❌ [APP] No {} element found, la vista no se renderizará", dom.mount_selector);
        }

        let controller = ViewController::new(pipeline, map, nav, VegaEngine::new(), WindowViewport)
            .with_options(ViewOptions::from_config(&CONFIG));

        Ok(Self {
            controller: Rc::new(controller),
            mount_ready,
        })
    }

    /// Un click listener por botón de navegación
    pub fn bind_navigation(&self) -> Result<(), JsValue> {
        let buttons = self.controller.nav().buttons();
        log::info!("🧭 [APP] {} botones de navegación", buttons.len());

        for button in buttons {
            let controller = Rc::clone(&self.controller);
            let target = button.clone();
            on_click(&target, move |_e| {
                match button.get_attribute(ROUTE_ATTRIBUTE).map(|r| r.parse::<Route>()) {
                    Some(Ok(route)) => controller.activate(route),
                    Some(Err(e)) => log::warn!("⚠️ [APP] {}", e),
                    None => log::warn!("⚠️ [APP] Botón sin atributo '{}'", ROUTE_ATTRIBUTE),
                }
            })?;
        }
        Ok(())
    }

    pub fn activate(&self, route: Route) {
        self.controller.activate(route);
    }

    /// Cargar y renderizar el spec en segundo plano
    pub fn start(&self) {
        if !self.mount_ready {
            return;
        }
        let controller = Rc::clone(&self.controller);
        wasm_bindgen_futures::spawn_local(async move {
            let loader = SpecLoader::new();
            if initialize(&loader, &controller).await {
                log::info!("✅ [APP] Vista lista");
            }
        });
    }
}
