//! Dobles de prueba compartidos por los tests de services y viewmodels.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use crate::models::Session;
use crate::services::api_client::SessionExpiredHook;
use crate::services::error::ApiError;
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::state::{MemorySessionStore, SessionContext};

/// Transporte que devuelve respuestas encoladas y registra cada request
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail_network(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("sem resposta programada".to_string())))
    }
}

/// Contexto de sesión sobre un store en memoria, opcionalmente ya logueado
pub fn session_with(store: &MemorySessionStore, session: Option<Session>) -> SessionContext {
    let context = SessionContext::restore(Rc::new(store.clone()));
    if let Some(session) = session {
        context.begin(session);
    }
    context
}

/// Hook de sesión expirada que cuenta sus invocaciones
pub fn counting_hook() -> (SessionExpiredHook, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    (Rc::new(move || counter.set(counter.get() + 1)), calls)
}
