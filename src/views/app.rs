// ============================================================================
// APP VIEW - Login o shell según la sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::state::AppState;
use crate::views::{render_login, render_shell};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if state.session.is_authenticated() {
        render_shell(state)
    } else {
        render_login(state)
    }
}

/// Tras insertar la vista en el documento: listeners por ID y primera carga
pub fn after_mount(state: &AppState) -> Result<(), JsValue> {
    if !state.session.is_authenticated() {
        return Ok(());
    }
    crate::views::donation_form::wire_if_present(state)?;
    crate::views::pages::navigate(state, state.router.current_page());
    Ok(())
}
