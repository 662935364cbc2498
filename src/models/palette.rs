// ============================================================================
// PALETTE - Esquema de colores por estado de fuente
// ============================================================================
// El orden importa: el spec codifica los estados en este mismo orden y el
// motor resuelve la paleta por posición.
// ============================================================================

/// Estados de una fuente de datos en el pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Needed,
    NotAvailable,
    Pending,
    Included,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Needed,
        Status::NotAvailable,
        Status::Pending,
        Status::Included,
    ];

    fn index(&self) -> usize {
        match self {
            Status::Needed => 0,
            Status::NotAvailable => 1,
            Status::Pending => 2,
            Status::Included => 3,
        }
    }
}

/// Paleta fija de 4 colores, uno por estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    colors: [&'static str; 4],
}

impl ColorScheme {
    /// Nombre con el que el spec referencia la paleta
    pub const NAME: &'static str = "custom";

    pub const STATUS: ColorScheme = ColorScheme {
        colors: ["#fdae6b", "#c6dbef", "#3182bd", "#08519c"],
    };

    pub fn colors(&self) -> &[&'static str; 4] {
        &self.colors
    }

    pub fn color_for(&self, status: Status) -> &'static str {
        self.colors[status.index()]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_the_fixed_literal() {
        assert_eq!(
            ColorScheme::default().colors(),
            &["#fdae6b", "#c6dbef", "#3182bd", "#08519c"]
        );
    }

    #[test]
    fn scheme_name_matches_spec_reference() {
        assert_eq!(ColorScheme::NAME, "custom");
    }

    #[test]
    fn colors_follow_status_order() {
        let scheme = ColorScheme::STATUS;
        let by_status: Vec<_> = Status::ALL.iter().map(|s| scheme.color_for(*s)).collect();
        assert_eq!(by_status, scheme.colors().to_vec());
        assert_eq!(scheme.color_for(Status::Needed), "#fdae6b");
        assert_eq!(scheme.color_for(Status::Included), "#08519c");
    }
}
