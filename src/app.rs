// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child_all, require_element, set_inner_html};
use crate::state::{AppState, LocalStorageSessionStore, MemorySessionStore, SessionStore};
use crate::utils::APP_ROOT_ID;
use crate::views::{after_mount, render_app};

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crea la app restaurando la sesión guardada en localStorage
    pub fn new() -> Result<Self, JsValue> {
        let root = require_element(APP_ROOT_ID)?;
        let store: Rc<dyn SessionStore> = if LocalStorageSessionStore::available() {
            Rc::new(LocalStorageSessionStore)
        } else {
            log::warn!("⚠️ [APP] localStorage indisponível, sessão só em memória");
            Rc::new(MemorySessionStore::new())
        };
        let state = AppState::new(store);
        if state.session.is_authenticated() {
            log::info!("💾 [APP] Sessão restaurada, abrindo painel");
        }
        Ok(Self { state, root })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render()");
        set_inner_html(&self.root, "");
        if !self.state.session.is_authenticated() {
            // El contenedor del mapa se destruye con el shell
            crate::views::map::forget_map();
        }

        let view = render_app(&self.state)?;
        append_child_all(&self.root, &[&view])?;
        after_mount(&self.state)
    }
}
