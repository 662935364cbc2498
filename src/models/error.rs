// ============================================================================
// VIEW ERROR - Errores de carga y renderizado de la vista
// ============================================================================

/// Errores posibles entre la carga del spec y el montaje de la vista
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// Fallo de red o respuesta HTTP no exitosa
    Fetch(String),
    /// El cuerpo de la respuesta no es un documento JSON válido
    NonJson(String),
    /// El motor de renderizado rechazó el spec
    Render(String),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            ViewError::NonJson(msg) => write!(f, "Invalid spec document: {}", msg),
            ViewError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::NonJson(err.to_string())
    }
}
