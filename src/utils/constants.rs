// ============================================================================
// CONSTANTES - Claves de storage e IDs del DOM
// ============================================================================

// localStorage
pub const TOKEN_STORAGE_KEY: &str = "token";
pub const ROLE_STORAGE_KEY: &str = "role";
pub const USER_ID_STORAGE_KEY: &str = "user_id";

// DOM
pub const APP_ROOT_ID: &str = "app";
pub const ALERT_CONTAINER_ID: &str = "alert-container";
pub const DIALOG_ID: &str = "donation-dialog";
pub const DIALOG_BODY_ID: &str = "donation-dialog-body";
pub const DIALOG_ACTION_ID: &str = "donation-dialog-action";
pub const DIALOG_CLOSE_ID: &str = "donation-dialog-close";
pub const DONATION_FORM_ID: &str = "doacao-form";
pub const LOGIN_FORM_ID: &str = "login-form";
pub const LOGOUT_BUTTON_ID: &str = "btn-logout";
pub const MAP_CONTAINER_ID: &str = "map";
pub const LOCATE_BUTTON_ID: &str = "btn-localizar-mapa";

/// Marcadores fijos del mapa (nombre, lat, lng)
pub const CITY_MARKERS: [(&str, f64, f64); 4] = [
    ("São Paulo", -23.55052, -46.633308),
    ("Rio de Janeiro", -22.906847, -43.172896),
    ("Belo Horizonte", -19.916681, -43.934493),
    ("Porto Alegre", -30.0346471, -51.2176584),
];
