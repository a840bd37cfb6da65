// ============================================================================
// DONATION VIEWMODEL - Detalle de donación + acción contextual
// ============================================================================
// Tabla fija (perfil, estado) -> acción. Las transiciones las valida el backend.
// ============================================================================

use thiserror::Error;
use crate::models::{Donation, DonationStatus, Role, Route, RouteStatus};
use crate::services::{ApiClient, ApiError, FetchTransport, HttpTransport};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DonationAction {
    /// motorista + aceita
    AcceptDelivery,
    /// motorista + a caminho
    FinishDelivery,
    /// receptor + pendente
    AcceptDonation,
}

impl DonationAction {
    pub fn for_role_and_status(role: Role, status: DonationStatus) -> Option<Self> {
        match (role, status) {
            (Role::Motorista, DonationStatus::Aceita) => Some(DonationAction::AcceptDelivery),
            (Role::Motorista, DonationStatus::ACaminho) => Some(DonationAction::FinishDelivery),
            (Role::Receptor, DonationStatus::Pendente) => Some(DonationAction::AcceptDonation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationAction::AcceptDelivery => "Aceitar entrega",
            DonationAction::FinishDelivery => "Finalizar entrega",
            DonationAction::AcceptDonation => "Aceitar doação",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            DonationAction::AcceptDelivery => "Entrega aceita! Boa viagem.",
            DonationAction::FinishDelivery => "Entrega finalizada com sucesso!",
            DonationAction::AcceptDonation => "Doação aceita com sucesso!",
        }
    }

    /// Las acciones del motorista operan sobre la ruta de la donación
    pub fn requires_route(&self) -> bool {
        matches!(self, DonationAction::AcceptDelivery | DonationAction::FinishDelivery)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("A rota desta doação ainda não foi calculada.")]
    RouteRequired,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Lo que muestra el diálogo de una donación
#[derive(Clone, PartialEq, Debug)]
pub struct DonationDetail {
    pub donation: Donation,
    pub action: Option<DonationAction>,
    pub route: Option<Route>,
    /// Error al calcular la ruta (se muestra dentro del diálogo)
    pub route_error: Option<String>,
}

pub struct DonationViewModel<T: HttpTransport = FetchTransport> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> DonationViewModel<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// Trae la donación y, si la acción lo necesita, su ruta (calculada o cacheada)
    pub async fn load_detail(&self, donation_id: &str, role: Role) -> Result<DonationDetail, ApiError> {
        let donation = self.api.get_donation(donation_id).await?;
        let action = DonationAction::for_role_and_status(role, donation.status);

        let mut route = None;
        let mut route_error = None;
        if action.is_some_and(|a| a.requires_route()) {
            match self.api.compute_route(&donation.id).await {
                Ok(r) => route = Some(r),
                Err(ApiError::SessionExpired) => return Err(ApiError::SessionExpired),
                Err(e) => {
                    log::warn!("⚠️ [DOACAO] Rota de {} indisponível: {}", donation.id, e);
                    route_error = Some(e.to_string());
                }
            }
        }

        Ok(DonationDetail {
            donation,
            action,
            route,
            route_error,
        })
    }

    pub async fn perform(&self, action: DonationAction, detail: &DonationDetail) -> Result<(), ActionError> {
        log::info!("▶️ [DOACAO] {:?} em {}", action, detail.donation.id);
        match action {
            DonationAction::AcceptDonation => {
                self.api.accept_donation(&detail.donation.id).await?;
            }
            DonationAction::AcceptDelivery => {
                let route = detail.route.as_ref().ok_or(ActionError::RouteRequired)?;
                self.api.accept_route(&route.id).await?;
            }
            DonationAction::FinishDelivery => {
                let route = detail.route.as_ref().ok_or(ActionError::RouteRequired)?;
                self.api.update_route_status(&route.id, RouteStatus::Concluida).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use crate::services::testing::{counting_hook, session_with, MockTransport};
    use crate::services::http::Method;
    use crate::state::MemorySessionStore;
    use futures::executor::block_on;

    const ALL_STATUSES: [DonationStatus; 7] = [
        DonationStatus::Pendente,
        DonationStatus::Aceita,
        DonationStatus::ACaminho,
        DonationStatus::Concluida,
        DonationStatus::Recebida,
        DonationStatus::Expirada,
        DonationStatus::Desconhecido,
    ];

    const ROUTE: &str = r#"{"id":"r1","doacao_id":"d1","resumo_rota":"Av. Paulista","distancia_texto":"5,2 km","duracao_texto":"15 min","google_maps_link":"https://www.google.com/maps/dir/?api=1","status":"pendente"}"#;

    fn donation_json(status: &str) -> String {
        format!(
            r#"{{"id":"d1","alimento":"Arroz","quantidade":10,"unidade":"kg","validade":"2025-12-01","status":"{}"}}"#,
            status
        )
    }

    fn view_model(role: Role, transport: &MockTransport) -> DonationViewModel<MockTransport> {
        let store = MemorySessionStore::new();
        let session = session_with(&store, Some(Session::new("tok", role)));
        let (hook, _) = counting_hook();
        DonationViewModel::new(ApiClient::with_transport("http://api", transport.clone(), session, hook))
    }

    #[test]
    fn action_table_is_exact() {
        for role in Role::ALL {
            for status in ALL_STATUSES {
                let expected = match (role, status) {
                    (Role::Motorista, DonationStatus::Aceita) => Some(DonationAction::AcceptDelivery),
                    (Role::Motorista, DonationStatus::ACaminho) => Some(DonationAction::FinishDelivery),
                    (Role::Receptor, DonationStatus::Pendente) => Some(DonationAction::AcceptDonation),
                    _ => None,
                };
                assert_eq!(DonationAction::for_role_and_status(role, status), expected, "{role} / {status}");
            }
        }
    }

    #[test]
    fn driver_detail_computes_route_first() {
        let transport = MockTransport::new();
        transport.respond(200, &donation_json("aceita"));
        transport.respond(200, ROUTE);

        let detail = block_on(view_model(Role::Motorista, &transport).load_detail("d1", Role::Motorista)).expect("detail");
        assert_eq!(detail.action, Some(DonationAction::AcceptDelivery));
        assert_eq!(detail.route.as_ref().map(|r| r.id.as_str()), Some("r1"));
        assert_eq!(transport.requests()[1].url, "http://api/api/rotas/calcular/d1");
    }

    #[test]
    fn route_failure_is_kept_inside_detail() {
        let transport = MockTransport::new();
        transport.respond(200, &donation_json("aceita"));
        transport.respond(400, r#"{"erro":"Chave da API do Google Maps não configurada no .env"}"#);

        let detail = block_on(view_model(Role::Motorista, &transport).load_detail("d1", Role::Motorista)).expect("detail");
        assert!(detail.route.is_none());
        assert_eq!(detail.route_error.as_deref(), Some("Chave da API do Google Maps não configurada no .env"));
    }

    #[test]
    fn recipient_detail_skips_route() {
        let transport = MockTransport::new();
        transport.respond(200, &donation_json("pendente"));

        let detail = block_on(view_model(Role::Receptor, &transport).load_detail("d1", Role::Receptor)).expect("detail");
        assert_eq!(detail.action, Some(DonationAction::AcceptDonation));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn accept_delivery_without_route_is_refused_locally() {
        let transport = MockTransport::new();
        transport.respond(200, &donation_json("aceita"));
        transport.respond(500, r#"{"erro":"Falha"}"#);
        let vm = view_model(Role::Motorista, &transport);
        let detail = block_on(vm.load_detail("d1", Role::Motorista)).expect("detail");

        let err = block_on(vm.perform(DonationAction::AcceptDelivery, &detail)).expect_err("must fail");
        assert_eq!(err, ActionError::RouteRequired);
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn driver_actions_target_the_route() {
        let transport = MockTransport::new();
        transport.respond(200, &donation_json("a caminho"));
        transport.respond(200, ROUTE);
        transport.respond(200, r#"{"mensagem":"ok"}"#);
        let vm = view_model(Role::Motorista, &transport);

        let detail = block_on(vm.load_detail("d1", Role::Motorista)).expect("detail");
        assert_eq!(detail.action, Some(DonationAction::FinishDelivery));
        block_on(vm.perform(DonationAction::FinishDelivery, &detail)).expect("finish");

        let last = transport.last_request().expect("request");
        assert_eq!(last.method, Method::Put);
        assert_eq!(last.url, "http://api/api/rotas/r1/status");
        assert_eq!(last.body.as_deref(), Some(r#"{"status":"concluida"}"#));
    }

    #[test]
    fn accept_delivery_posts_route_accept() {
        let transport = MockTransport::new();
        transport.respond(200, &donation_json("aceita"));
        transport.respond(200, ROUTE);
        transport.respond(200, r#"{"mensagem":"Rota atribuída ao motorista com sucesso."}"#);
        let vm = view_model(Role::Motorista, &transport);

        let detail = block_on(vm.load_detail("d1", Role::Motorista)).expect("detail");
        block_on(vm.perform(DonationAction::AcceptDelivery, &detail)).expect("accept");

        let last = transport.last_request().expect("request");
        assert_eq!(last.method, Method::Post);
        assert_eq!(last.url, "http://api/api/rotas/r1/aceitar");
    }
}
