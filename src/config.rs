use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub spec_endpoint: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub dom_config: DomConfig,
    pub render_config: RenderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spec_endpoint: "/spec.json".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            dom_config: DomConfig::default(),
            render_config: RenderConfig::default(),
        }
    }
}

/// Selectores de los elementos que tiene que traer el markup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomConfig {
    pub pipeline_selector: String,
    pub map_selector: String,
    pub nav_selector: String,
    pub mount_selector: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            pipeline_selector: "#pipeline".to_string(),
            map_selector: "#map".to_string(),
            nav_selector: "nav".to_string(),
            mount_selector: "#view".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub renderer: String,
    pub hover: bool,
    pub link_target: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            renderer: "svg".to_string(),
            hover: true,
            link_target: "_blank".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            spec_endpoint: option_env!("SPEC_ENDPOINT")
                .map(str::to_string)
                .unwrap_or(defaults.spec_endpoint),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            dom_config: DomConfig {
                mount_selector: option_env!("MOUNT_SELECTOR")
                    .map(str::to_string)
                    .unwrap_or(defaults.dom_config.mount_selector),
                ..defaults.dom_config
            },
            render_config: RenderConfig {
                link_target: option_env!("LINK_TARGET")
                    .map(str::to_string)
                    .unwrap_or(defaults.render_config.link_target),
                ..defaults.render_config
            },
        }
    }

    /// Nivel de log configurado (Info si el valor no es válido)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
