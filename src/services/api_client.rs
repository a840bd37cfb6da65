// ============================================================================
// API CLIENT - ÚNICO punto de salida hacia el backend
// ============================================================================
// - Adjunta `Authorization: Bearer <token>` y `Content-Type: application/json`
// - 401/403: limpia la sesión, dispara el redirect a login y falla con SessionExpired
// - Otros no-2xx: mensaje de `erro` / `error` del cuerpo JSON
// - 2xx: cuerpo JSON deserializado
// ============================================================================

use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::config::CONFIG;
use crate::models::{
    ApiStatus, Donation, Donor, LoginRequest, LoginResponse,
    NewDonation, Recipient, Route, RouteStatus, RouteStatusUpdate, Stats, StockItem,
};
use crate::services::error::ApiError;
use crate::services::http::{FetchTransport, HttpRequest, HttpResponse, HttpTransport, Method};
use crate::state::SessionContext;

/// Callback ejecutado cuando el backend rechaza la sesión (401/403)
pub type SessionExpiredHook = Rc<dyn Fn()>;

/// Filtro `?status=` de `GET /api/doacoes`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DonationFilter {
    Pendente,
    Finalizadas,
}

impl DonationFilter {
    pub fn as_query(&self) -> &'static str {
        match self {
            DonationFilter::Pendente => "pendente",
            DonationFilter::Finalizadas => "finalizadas",
        }
    }
}

/// Cliente API - stateless salvo por el contexto de sesión compartido
#[derive(Clone)]
pub struct ApiClient<T: HttpTransport = FetchTransport> {
    base_url: String,
    transport: T,
    session: SessionContext,
    on_session_expired: SessionExpiredHook,
}

impl ApiClient<FetchTransport> {
    pub fn new(session: SessionContext, on_session_expired: SessionExpiredHook) -> Self {
        Self::with_transport(CONFIG.api_url.clone(), FetchTransport, session, on_session_expired)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(
        base_url: impl Into<String>,
        transport: T,
        session: SessionContext,
        on_session_expired: SessionExpiredHook,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
            on_session_expired,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    // ------------------------------------------------------------------------
    // Endpoints públicos (sin token, sin redirect por 401)
    // ------------------------------------------------------------------------

    /// Sonda de estado `GET /api`
    pub async fn status(&self) -> Result<ApiStatus, ApiError> {
        self.send_public(Method::Get, "", None).await
    }

    /// `POST /api/login`. Un 401 aquí es "credenciales inválidas", no sesión expirada.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [API] Login para {}", credentials.email);
        let body = encode_body(credentials)?;
        self.send_public(Method::Post, "/login", Some(body)).await
    }

    // ------------------------------------------------------------------------
    // Doações
    // ------------------------------------------------------------------------

    pub async fn list_donations(&self, filter: Option<DonationFilter>) -> Result<Vec<Donation>, ApiError> {
        let path = match filter {
            Some(f) => format!("/doacoes?status={}", f.as_query()),
            None => "/doacoes".to_string(),
        };
        self.get(&path).await
    }

    pub async fn get_donation(&self, id: &str) -> Result<Donation, ApiError> {
        self.get(&format!("/doacoes/{}", id)).await
    }

    pub async fn create_donation(&self, donation: &NewDonation) -> Result<Donation, ApiError> {
        self.send_authenticated(Method::Post, "/doacoes", Some(encode_body(donation)?)).await
    }

    /// Receptor acepta una donación pendiente
    pub async fn accept_donation(&self, id: &str) -> Result<Value, ApiError> {
        self.send_authenticated(Method::Put, &format!("/doacoes/{}/aceitar", id), None).await
    }

    // ------------------------------------------------------------------------
    // Rotas
    // ------------------------------------------------------------------------

    pub async fn list_routes(&self, pending_only: bool) -> Result<Vec<Route>, ApiError> {
        let path = if pending_only { "/rotas?status=pendente" } else { "/rotas" };
        self.get(path).await
    }

    /// Calcula la ruta de una donación (o devuelve la ya calculada)
    pub async fn compute_route(&self, donation_id: &str) -> Result<Route, ApiError> {
        self.get(&format!("/rotas/calcular/{}", donation_id)).await
    }

    /// Motorista acepta la entrega de una ruta
    pub async fn accept_route(&self, route_id: &str) -> Result<Value, ApiError> {
        self.send_authenticated(Method::Post, &format!("/rotas/{}/aceitar", route_id), None).await
    }

    pub async fn update_route_status(&self, route_id: &str, status: RouteStatus) -> Result<Value, ApiError> {
        let body = encode_body(&RouteStatusUpdate { status })?;
        self.send_authenticated(Method::Put, &format!("/rotas/{}/status", route_id), Some(body)).await
    }

    // ------------------------------------------------------------------------
    // Cadastros, estoque y estadísticas
    // ------------------------------------------------------------------------

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.get("/stats").await
    }

    pub async fn list_donors(&self) -> Result<Vec<Donor>, ApiError> {
        self.get("/doadores").await
    }

    pub async fn list_recipients(&self) -> Result<Vec<Recipient>, ApiError> {
        self.get("/receptores").await
    }

    pub async fn list_stock(&self) -> Result<Vec<StockItem>, ApiError> {
        self.get("/estoque").await
    }

    pub async fn list_recipient_stock(&self, recipient_id: &str) -> Result<Vec<StockItem>, ApiError> {
        self.get(&format!("/receptores/{}/estoque", recipient_id)).await
    }

    // ------------------------------------------------------------------------
    // Núcleo
    // ------------------------------------------------------------------------

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send_authenticated(Method::Get, path, None).await
    }

    async fn send_public<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let mut request = HttpRequest::new(method, self.url(path)).header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(server_error(&response));
        }
        decode_body(&response.body)
    }

    async fn send_authenticated<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let Some(token) = self.session.token() else {
            log::warn!("🔒 [API] {} {} sem token, redirecionando para login", method.as_str(), path);
            return Err(self.expire_session());
        };

        let mut request = HttpRequest::new(method, self.url(path))
            .header("Authorization", &format!("Bearer {}", token))
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        log::debug!("🌐 [API] {} {}", method.as_str(), path);
        let response = self.transport.send(request).await?;

        match response.status {
            401 | 403 => {
                log::warn!("🔒 [API] {} {} -> HTTP {}, sessão encerrada", method.as_str(), path, response.status);
                Err(self.expire_session())
            }
            _ if !response.is_success() => {
                let err = server_error(&response);
                log::error!("❌ [API] {} {} -> {}", method.as_str(), path, err);
                Err(err)
            }
            _ => decode_body(&response.body),
        }
    }

    fn expire_session(&self) -> ApiError {
        self.session.teardown();
        (self.on_session_expired)();
        ApiError::SessionExpired
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(format!("corpo da requisição: {}", e)))
}

fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn server_error(response: &HttpResponse) -> ApiError {
    ApiError::Server {
        status: response.status,
        message: extract_error_message(response.status, &response.body),
    }
}

/// Mensaje de error del backend: `erro`, luego `error`, luego genérico
pub fn extract_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            ["erro", "error"].iter().find_map(|key| {
                json.get(key)
                    .and_then(Value::as_str)
                    .filter(|msg| !msg.trim().is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("Erro inesperado do servidor (HTTP {}).", status))
}
