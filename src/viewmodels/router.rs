// ============================================================================
// ROUTER - Navegación entre páginas + control de acceso por perfil
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{AccessPolicy, Page, RequestSequencer, RequestTicket, SessionContext};

/// Resultado de pedir una navegación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavOutcome {
    /// Página visible; el loader debe usar el ticket para pintar
    Show { page: Page, ticket: RequestTicket },
    /// Perfil sin permiso: no cambia nada
    Denied(Page),
    /// No hay sesión
    LoginRequired,
}

pub const ACCESS_DENIED_MESSAGE: &str = "Acesso negado: você não tem permissão para acessar esta página.";

#[derive(Clone)]
pub struct Router {
    session: SessionContext,
    policy: AccessPolicy,
    current: Rc<RefCell<Page>>,
    sequencer: RequestSequencer,
}

impl Router {
    pub fn new(session: SessionContext) -> Self {
        Self {
            session,
            policy: AccessPolicy,
            current: Rc::new(RefCell::new(Page::Dashboard)),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn current_page(&self) -> Page {
        *self.current.borrow()
    }

    pub fn navigate(&self, page: Page) -> NavOutcome {
        let Some(role) = self.session.role() else {
            log::warn!("🔒 [ROUTER] Navegação para '{}' sem sessão", page);
            return NavOutcome::LoginRequired;
        };

        if !self.policy.can_access(role, page) {
            log::warn!("⛔ [ROUTER] Perfil '{}' sem acesso a '{}'", role, page);
            return NavOutcome::Denied(page);
        }

        *self.current.borrow_mut() = page;
        let ticket = self.sequencer.issue();
        log::info!("🧭 [ROUTER] -> {} (ticket {})", page, ticket.id());
        NavOutcome::Show { page, ticket }
    }

    /// Vuelve a cargar la página actual
    pub fn reload(&self) -> NavOutcome {
        self.navigate(self.current_page())
    }

    /// ¿Sigue siendo este ticket la última navegación?
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.sequencer.is_current(ticket)
    }

    /// Páginas que se muestran en la navegación del perfil actual
    pub fn visible_pages(&self) -> Vec<Page> {
        match self.session.role() {
            Some(role) => self.policy.allowed_pages(role).to_vec(),
            None => Vec::new(),
        }
    }

    /// Tras logout: la próxima sesión arranca en el painel e invalida cargas pendientes
    pub fn reset(&self) {
        *self.current.borrow_mut() = Page::Dashboard;
        self.sequencer.issue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Session};
    use crate::services::testing::session_with;
    use crate::state::MemorySessionStore;

    fn router_for(role: Role) -> Router {
        let store = MemorySessionStore::new();
        Router::new(session_with(&store, Some(Session::new("tok", role))))
    }

    #[test]
    fn denied_navigation_keeps_current_page() {
        let policy = AccessPolicy;
        for role in Role::ALL {
            let router = router_for(role);
            for page in Page::ALL.iter().copied().filter(|p| !policy.can_access(role, *p)) {
                let before = router.current_page();
                assert_eq!(router.navigate(page), NavOutcome::Denied(page), "{role} -> {page}");
                assert_eq!(router.current_page(), before);
            }
        }
    }

    #[test]
    fn allowed_navigation_switches_page() {
        let router = router_for(Role::Motorista);
        match router.navigate(Page::Rotas) {
            NavOutcome::Show { page, ticket } => {
                assert_eq!(page, Page::Rotas);
                assert!(router.is_current(ticket));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(router.current_page(), Page::Rotas);
    }

    #[test]
    fn later_navigation_invalidates_earlier_ticket() {
        let router = router_for(Role::Admin);
        let NavOutcome::Show { ticket: first, .. } = router.navigate(Page::Doacoes) else {
            panic!("expected show");
        };
        let NavOutcome::Show { ticket: second, .. } = router.navigate(Page::Doacoes) else {
            panic!("expected show");
        };
        assert!(!router.is_current(first));
        assert!(router.is_current(second));
    }

    #[test]
    fn no_session_requires_login() {
        let store = MemorySessionStore::new();
        let router = Router::new(session_with(&store, None));
        assert_eq!(router.navigate(Page::Dashboard), NavOutcome::LoginRequired);
        assert!(router.visible_pages().is_empty());
    }

    #[test]
    fn visible_pages_follow_policy() {
        let router = router_for(Role::Estoquista);
        assert_eq!(
            router.visible_pages(),
            vec![Page::Dashboard, Page::Estoque, Page::Finalizadas, Page::Mapa]
        );
    }
}
