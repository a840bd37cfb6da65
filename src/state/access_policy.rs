// ============================================================================
// ACCESS POLICY - Tabla única perfil -> páginas permitidas
// ============================================================================
// Solo controla la navegación del cliente; la autorización real es del backend.
// ============================================================================

use crate::models::Role;
use crate::state::page::Page;

const ADMIN_PAGES: &[Page] = &Page::ALL;

const DOADOR_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Doacoes,
    Page::NovaDoacao,
    Page::Historico,
    Page::Mapa,
];

const RECEPTOR_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Doacoes,
    Page::Estoque,
    Page::Historico,
    Page::Finalizadas,
    Page::Mapa,
];

const MOTORISTA_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Doacoes,
    Page::Rotas,
    Page::Historico,
    Page::Finalizadas,
    Page::Mapa,
];

const ESTOQUISTA_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Estoque,
    Page::Finalizadas,
    Page::Mapa,
];

#[derive(Clone, Copy, Debug, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn allowed_pages(&self, role: Role) -> &'static [Page] {
        match role {
            Role::Admin => ADMIN_PAGES,
            Role::Doador => DOADOR_PAGES,
            Role::Receptor => RECEPTOR_PAGES,
            Role::Motorista => MOTORISTA_PAGES,
            Role::Estoquista => ESTOQUISTA_PAGES,
        }
    }

    pub fn can_access(&self, role: Role, page: Page) -> bool {
        self.allowed_pages(role).contains(&page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_reaches_dashboard_and_map() {
        let policy = AccessPolicy;
        for role in Role::ALL {
            assert!(policy.can_access(role, Page::Dashboard), "{role} sem painel");
            assert!(policy.can_access(role, Page::Mapa), "{role} sem mapa");
        }
    }

    #[test]
    fn admin_sees_everything() {
        let policy = AccessPolicy;
        for page in Page::ALL {
            assert!(policy.can_access(Role::Admin, page));
        }
    }

    #[test]
    fn restricted_pages() {
        let policy = AccessPolicy;
        assert!(!policy.can_access(Role::Doador, Page::Rotas));
        assert!(!policy.can_access(Role::Motorista, Page::NovaDoacao));
        assert!(!policy.can_access(Role::Estoquista, Page::Doacoes));
        assert!(!policy.can_access(Role::Receptor, Page::Doadores));
        assert!(policy.can_access(Role::Receptor, Page::Estoque));
    }
}
