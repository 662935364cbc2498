/// Dimensiones actuales de la ventana (píxeles CSS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const WIDTH_PERCENT: u64 = 95;
    pub const HEIGHT_PERCENT: u64 = 75;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Tamaño objetivo de la vista: 95% del ancho y 75% del alto, truncado.
    /// Aritmética entera para que el floor sea exacto.
    pub fn target_size(&self) -> (u32, u32) {
        (
            percent_floor(self.width, Self::WIDTH_PERCENT),
            percent_floor(self.height, Self::HEIGHT_PERCENT),
        )
    }
}

fn percent_floor(value: u32, percent: u64) -> u32 {
    // value * percent / 100 <= value, cabe siempre en u32
    (value as u64 * percent / 100) as u32
}

/// Fuente de las dimensiones de la ventana, consultada en cada render
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}
