use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub alert_timeout_ms: u32,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            alert_timeout_ms: 5000,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub locate_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Centro de Brasil
            default_center_lat: -14.2400732,
            default_center_lng: -53.1805017,
            default_zoom: 4.0,
            locate_zoom: 14.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            alert_timeout_ms: option_env!("ALERT_TIMEOUT_MS")
                .unwrap_or("5000").parse().unwrap_or(5000),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_center_lat),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_center_lng),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_zoom),
                ..defaults.map_config
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
