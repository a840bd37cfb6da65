// ============================================================================
// ROTA DO BEM - PAINEL WEB (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: Sesión, router y diálogo con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod config;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Rota do Bem - Rust Puro + MVVM ({})", CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!("🔧 [CONFIG] API: {}", CONFIG.api_url);
    }

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Re-render completo (login <-> shell)
pub fn rerender_app() {
    APP.with(|app_cell| {
        // Un re-render pedido durante otro re-render se ignora
        let Ok(mut slot) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [RERENDER] Re-render em andamento, ignorado");
            return;
        };
        match slot.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Erro re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App não inicializada"),
        }
    });
}
