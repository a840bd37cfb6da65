// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners en elementos del DOM: cuando el elemento se destruye (p.ej. con
// set_inner_html("")) el navegador limpia sus listeners, así que closure.forget()
// no acumula handlers mientras cada render reemplace el contenedor.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, MouseEvent};

/// Click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit handler: el `preventDefault` ya viene hecho
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click en `#id`, si el elemento existe
pub fn on_click_id<F>(id: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    match crate::dom::get_element_by_id(id) {
        Some(element) => on_click(&element, handler),
        None => {
            log::warn!("⚠️ [DOM] #{} não encontrado para click", id);
            Ok(())
        }
    }
}
