// ============================================================================
// VEGA FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para el global `vega` que carga index.html - Sin estado
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_namespace = vega)]
extern "C" {
    /// `new vega.View(runtime, options)`
    pub type View;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(runtime: &JsValue, options: &JsValue) -> Result<View, JsValue>;

    #[wasm_bindgen(method, js_name = runAsync)]
    pub fn run_async(this: &View) -> js_sys::Promise;

    /// `vega.scheme(name, colors)`
    #[wasm_bindgen(catch)]
    pub fn scheme(name: &str, colors: &JsValue) -> Result<JsValue, JsValue>;

    /// `vega.parse(spec)` -> dataflow runtime
    #[wasm_bindgen(catch)]
    pub fn parse(spec: &JsValue) -> Result<JsValue, JsValue>;

    /// `vega.loader(options)`
    #[wasm_bindgen(catch)]
    pub fn loader(options: &JsValue) -> Result<JsValue, JsValue>;
}
