// ============================================================================
// ALERTS - Avisos temporales en la parte superior de la página
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{document, get_element_by_id, ElementBuilder};
use crate::utils::ALERT_CONTAINER_ID;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
            AlertKind::Warning => "alert alert-warning",
        }
    }
}

/// Inserta el aviso y lo quita tras `CONFIG.alert_timeout_ms`
pub fn show_alert(message: &str, kind: AlertKind) {
    if let Err(e) = try_show_alert(message, kind) {
        log::error!("❌ [ALERT] {:?}", e);
    }
}

fn try_show_alert(message: &str, kind: AlertKind) -> Result<(), JsValue> {
    let alert = ElementBuilder::new("div")?
        .class(kind.css_class())
        .text(message)
        .build();

    // Sin contenedor (pantalla de login): al inicio del body
    let parent = match get_element_by_id(ALERT_CONTAINER_ID) {
        Some(container) => container,
        None => document()
            .and_then(|doc| doc.body())
            .map(Element::from)
            .ok_or_else(|| JsValue::from_str("No body"))?,
    };
    parent.insert_before(&alert, parent.first_child().as_ref())?;

    Timeout::new(CONFIG.alert_timeout_ms, move || alert.remove()).forget();
    Ok(())
}
