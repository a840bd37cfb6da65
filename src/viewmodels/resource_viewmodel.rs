// ============================================================================
// RESOURCE VIEWMODEL - Qué pedir para cada página de listado
// ============================================================================

use crate::models::{ApiStatus, Donation, Donor, Recipient, Role, Route, Stats, StockItem};
use crate::services::{ApiClient, ApiError, DonationFilter, FetchTransport, HttpTransport};
use crate::state::Page;

/// Filtro de donaciones según página y perfil
pub fn donation_filter(page: Page, role: Role) -> Option<DonationFilter> {
    match (page, role) {
        (Page::Finalizadas, _) => Some(DonationFilter::Finalizadas),
        (Page::Doacoes, Role::Receptor) => Some(DonationFilter::Pendente),
        _ => None,
    }
}

/// El motorista sólo ve rutas pendientes
pub fn routes_pending_only(role: Role) -> bool {
    role == Role::Motorista
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StockSource {
    All,
    Recipient(String),
}

pub fn stock_source(role: Role, user_id: Option<&str>) -> StockSource {
    match (role, user_id) {
        (Role::Receptor, Some(id)) if !id.is_empty() => StockSource::Recipient(id.to_string()),
        _ => StockSource::All,
    }
}

/// Datos del painel. El estado del backend nunca hace fallar la página.
#[derive(Clone, PartialEq, Debug)]
pub struct DashboardData {
    pub api_status: Result<ApiStatus, ApiError>,
    pub stats: Result<Stats, ApiError>,
}

pub struct ResourceViewModel<T: HttpTransport = FetchTransport> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> ResourceViewModel<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    fn role(&self) -> Result<Role, ApiError> {
        self.api.session().role().ok_or(ApiError::SessionExpired)
    }

    pub async fn dashboard(&self) -> DashboardData {
        let api_status = self.api.status().await;
        let stats = self.api.stats().await;
        DashboardData { api_status, stats }
    }

    /// Donaciones de `doacoes`, `historico` o `finalizadas`
    pub async fn donations(&self, page: Page) -> Result<Vec<Donation>, ApiError> {
        let role = self.role()?;
        self.api.list_donations(donation_filter(page, role)).await
    }

    pub async fn routes(&self) -> Result<Vec<Route>, ApiError> {
        let role = self.role()?;
        self.api.list_routes(routes_pending_only(role)).await
    }

    pub async fn stock(&self) -> Result<Vec<StockItem>, ApiError> {
        let role = self.role()?;
        let user_id = self.api.session().user_id();
        match stock_source(role, user_id.as_deref()) {
            StockSource::All => self.api.list_stock().await,
            StockSource::Recipient(id) => self.api.list_recipient_stock(&id).await,
        }
    }

    pub async fn donors(&self) -> Result<Vec<Donor>, ApiError> {
        self.api.list_donors().await
    }

    pub async fn recipients(&self) -> Result<Vec<Recipient>, ApiError> {
        self.api.list_recipients().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use crate::services::testing::{counting_hook, session_with, MockTransport};
    use crate::state::MemorySessionStore;
    use futures::executor::block_on;

    fn view_model(session: Option<Session>, transport: &MockTransport) -> ResourceViewModel<MockTransport> {
        let store = MemorySessionStore::new();
        let (hook, _) = counting_hook();
        ResourceViewModel::new(ApiClient::with_transport(
            "http://api",
            transport.clone(),
            session_with(&store, session),
            hook,
        ))
    }

    #[test]
    fn filters_by_page_and_role() {
        assert_eq!(donation_filter(Page::Doacoes, Role::Receptor), Some(DonationFilter::Pendente));
        assert_eq!(donation_filter(Page::Doacoes, Role::Doador), None);
        assert_eq!(donation_filter(Page::Historico, Role::Receptor), None);
        assert_eq!(donation_filter(Page::Finalizadas, Role::Motorista), Some(DonationFilter::Finalizadas));
        assert!(routes_pending_only(Role::Motorista));
        assert!(!routes_pending_only(Role::Admin));
    }

    #[test]
    fn stock_uses_recipient_endpoint_when_known() {
        assert_eq!(stock_source(Role::Receptor, Some("r9")), StockSource::Recipient("r9".into()));
        assert_eq!(stock_source(Role::Receptor, None), StockSource::All);
        assert_eq!(stock_source(Role::Estoquista, Some("e1")), StockSource::All);

        let transport = MockTransport::new();
        transport.respond(200, "[]");
        let session = Session::new("tok", Role::Receptor).with_user_id(Some("r9".into()));
        block_on(view_model(Some(session), &transport).stock()).expect("stock");
        assert_eq!(
            transport.last_request().map(|r| r.url),
            Some("http://api/api/receptores/r9/estoque".to_string())
        );
    }

    #[test]
    fn driver_routes_are_pending_only() {
        let transport = MockTransport::new();
        transport.respond(200, "[]");
        block_on(view_model(Some(Session::new("tok", Role::Motorista)), &transport).routes()).expect("routes");
        assert_eq!(
            transport.last_request().map(|r| r.url),
            Some("http://api/api/rotas?status=pendente".to_string())
        );
    }

    #[test]
    fn dashboard_tolerates_offline_backend() {
        let transport = MockTransport::new();
        transport.fail_network("Failed to fetch");
        transport.respond(200, r#"{"doacoes":3,"motoristas":1,"rotas_pendentes":2}"#);

        let data = block_on(view_model(Some(Session::new("tok", Role::Admin)), &transport).dashboard());
        assert!(data.api_status.is_err());
        assert_eq!(data.stats.map(|s| s.doacoes), Ok(3));
    }
}
