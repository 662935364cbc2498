use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{RenderEngine, ViewOptions};
use crate::models::{ColorScheme, ViewError, VisualizationSpec};
use crate::utils::vega_ffi;

/// Renderizador web usando el global `vega`
#[derive(Debug, Default, Clone, Copy)]
pub struct VegaEngine;

impl VegaEngine {
    pub fn new() -> Self {
        Self
    }
}

fn render_error(err: JsValue) -> ViewError {
    let msg = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ViewError::Render(msg)
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), ViewError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(render_error)
}

/// `{renderer, container, hover, loader}` como objeto JS
fn build_options(options: &ViewOptions) -> Result<JsValue, ViewError> {
    let loader_options = js_sys::Object::new();
    set(&loader_options, "target", &JsValue::from_str(&options.link_target))?;
    let loader = vega_ffi::loader(&loader_options).map_err(render_error)?;

    let js_options = js_sys::Object::new();
    set(&js_options, "renderer", &JsValue::from_str(&options.renderer))?;
    set(&js_options, "container", &JsValue::from_str(&options.container))?;
    set(&js_options, "hover", &JsValue::from_bool(options.hover))?;
    set(&js_options, "loader", &loader)?;
    Ok(js_options.into())
}

impl RenderEngine for VegaEngine {
    fn register_scheme(&self, name: &str, scheme: &ColorScheme) -> Result<(), ViewError> {
        let colors: js_sys::Array = scheme
            .colors()
            .iter()
            .map(|c| JsValue::from_str(c))
            .collect();
        vega_ffi::scheme(name, &colors).map_err(render_error)?;
        log::debug!("🎨 [VEGA] Esquema '{}' registrado", name);
        Ok(())
    }

    async fn run(&self, spec: &VisualizationSpec, options: &ViewOptions) -> Result<(), ViewError> {
        // json_compatible: objetos planos en vez de Map de JS
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_spec = spec
            .serialize(&serializer)
            .map_err(|e| ViewError::Render(e.to_string()))?;

        let runtime = vega_ffi::parse(&js_spec).map_err(render_error)?;
        let view = vega_ffi::View::new(&runtime, &build_options(options)?).map_err(render_error)?;

        JsFuture::from(view.run_async()).await.map_err(render_error)?;
        Ok(())
    }
}
