// ============================================================================
// APP STATE - Estado compartido de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use crate::services::ApiClient;
use crate::state::{DialogSlot, SessionContext, SessionStore};
use crate::viewmodels::{LoginViewModel, Router};

pub const SESSION_EXPIRED_NOTICE: &str = "Sessão expirada. Faça login novamente.";

#[derive(Clone)]
pub struct AppState {
    pub session: SessionContext,
    pub router: Router,
    pub dialog: DialogSlot,
    /// Aviso mostrado en la pantalla de login (p. ej. sesión expirada)
    pub login_notice: Rc<RefCell<Option<String>>>,
}

impl AppState {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let session = SessionContext::restore(store);
        Self {
            router: Router::new(session.clone()),
            session,
            dialog: DialogSlot::new(),
            login_notice: Rc::new(RefCell::new(None)),
        }
    }

    /// Cliente API con el redirect a login conectado
    pub fn api(&self) -> ApiClient {
        let state = self.clone();
        ApiClient::new(
            self.session.clone(),
            Rc::new(move || state.on_session_expired()),
        )
    }

    fn on_session_expired(&self) {
        *self.login_notice.borrow_mut() = Some(SESSION_EXPIRED_NOTICE.to_string());
        self.dialog.close();
        self.router.reset();
        // Fuera del callstack actual: el re-render reemplaza el DOM que está usando la vista
        Timeout::new(0, crate::rerender_app).forget();
    }

    /// Logout explícito desde el header
    pub fn logout(&self) {
        LoginViewModel::new(self.api()).logout();
        self.dialog.close();
        self.router.reset();
        log::info!("👋 [APP] Logout");
    }

    pub fn take_login_notice(&self) -> Option<String> {
        self.login_notice.borrow_mut().take()
    }
}
