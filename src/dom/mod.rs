// ============================================================================
// DOM MODULE - Abstracción mínima del DOM
// ============================================================================
// El controlador trabaja contra estos traits; en el navegador los implementa
// `web_sys::Element`, en los tests un doble en memoria.
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub mod element;
#[cfg(target_arch = "wasm32")]
pub mod events;

#[cfg(test)]
pub mod fake;

/// Error de una operación DOM (mensaje ya formateado)
pub type DomError = String;

/// Operaciones de elemento que necesita la página
pub trait DomElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;
    fn remove_attribute(&self, name: &str) -> Result<(), DomError>;
    fn get_attribute(&self, name: &str) -> Option<String>;
    fn add_class(&self, class: &str) -> Result<(), DomError>;
    fn remove_class(&self, class: &str) -> Result<(), DomError>;
    fn has_class(&self, class: &str) -> bool;
}

/// Raíz de la navegación: da acceso a sus botones
pub trait NavRoot {
    type Button: DomElement;

    /// Botones descendientes, consultados en cada llamada
    fn buttons(&self) -> Vec<Self::Button>;
}

/// Estilo que oculta un contenedor
pub const HIDDEN_STYLE: &str = "display:none";

/// Clase del botón de navegación activo
pub const ACTIVE_CLASS: &str = "active";

/// Atributo con la ruta de cada botón
pub const ROUTE_ATTRIBUTE: &str = "route";

/// Ocultar un contenedor
pub fn hide<E: DomElement + ?Sized>(element: &E) -> Result<(), DomError> {
    element.set_attribute("style", HIDDEN_STYLE)
}

/// Mostrar un contenedor (quita cualquier estilo inline)
pub fn show<E: DomElement + ?Sized>(element: &E) -> Result<(), DomError> {
    element.remove_attribute("style")
}

/// Visible = sin estilo inline que lo oculte
pub fn is_visible<E: DomElement + ?Sized>(element: &E) -> bool {
    match element.get_attribute("style") {
        Some(style) => !style.replace(' ', "").contains(HIDDEN_STYLE),
        None => true,
    }
}

/// `document.readyState` todavía cargando: hay que esperar a DOMContentLoaded
pub fn is_document_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_state_defers_start() {
        assert!(is_document_loading("loading"));
        assert!(!is_document_loading("interactive"));
        assert!(!is_document_loading("complete"));
    }
}
