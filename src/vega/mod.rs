// Motor de renderizado: trait común + implementación web sobre Vega

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod traits;

pub use traits::{RenderEngine, ViewOptions};
