use std::str::FromStr;

/// Vistas navegables de la página
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Pipeline,
    Map,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Pipeline, Route::Map];

    /// Valor del atributo `route` y del id del contenedor
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Pipeline => "pipeline",
            Route::Map => "map",
        }
    }

    /// La otra vista (la que se oculta al activar esta)
    pub fn other(&self) -> Route {
        match self {
            Route::Pipeline => Route::Map,
            Route::Map => Route::Pipeline,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pipeline" => Ok(Route::Pipeline),
            "map" => Ok(Route::Map),
            other => Err(format!("Unknown route: {}", other)),
        }
    }
}
