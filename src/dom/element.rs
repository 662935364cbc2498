// ============================================================================
// ELEMENT HELPERS - Implementación sobre web_sys
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use super::{DomElement, DomError, NavRoot};
use crate::models::{Viewport, ViewportSource};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Query selector opcional: None si no existe o el selector es inválido
pub fn find_element(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Query selector obligatorio: error si el elemento no existe
pub fn require_element(selector: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No {} element found", selector)))
}

fn js_error(err: JsValue) -> DomError {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl DomElement for Element {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        Element::set_attribute(self, name, value).map_err(js_error)
    }

    fn remove_attribute(&self, name: &str) -> Result<(), DomError> {
        Element::remove_attribute(self, name).map_err(js_error)
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        Element::get_attribute(self, name)
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), DomError> {
        self.class_list().remove_1(class).map_err(js_error)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl NavRoot for Element {
    type Button = Element;

    fn buttons(&self) -> Vec<Element> {
        let list = match self.query_selector_all("button") {
            Ok(list) => list,
            Err(e) => {
                log::warn!("⚠️ [DOM] querySelectorAll('button') falló: {}", js_error(e));
                return Vec::new();
            }
        };

        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

/// Viewport leído de `window.innerWidth` / `window.innerHeight`
pub struct WindowViewport;

impl ViewportSource for WindowViewport {
    fn viewport(&self) -> Viewport {
        let Some(win) = window() else {
            log::warn!("⚠️ [DOM] Sin window, viewport 0x0");
            return Viewport::new(0, 0);
        };

        let read = |value: Result<JsValue, JsValue>| {
            value
                .ok()
                .and_then(|v| v.as_f64())
                .map(|v| v.max(0.0).floor() as u32)
                .unwrap_or(0)
        };

        Viewport::new(read(win.inner_width()), read(win.inner_height()))
    }
}
