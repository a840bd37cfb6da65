// ============================================================================
// DONATION FORM VIEWMODEL - Formulario "Nova doação"
// ============================================================================

use chrono::NaiveDate;
use thiserror::Error;
use crate::models::{Donation, NewDonation};
use crate::services::{ApiClient, ApiError, FetchTransport, HttpTransport};

/// Valores crudos del formulario (tal como vienen de los inputs)
#[derive(Clone, Default, PartialEq, Debug)]
pub struct DonationForm {
    pub alimento: String,
    pub quantidade: String,
    pub unidade: String,
    pub validade: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("O campo '{0}' é obrigatório.")]
    Required(&'static str),
    #[error("Quantidade inválida: '{0}'. Informe um número maior que zero.")]
    InvalidQuantity(String),
    #[error("Data de validade inválida: '{0}'.")]
    InvalidDate(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DonationForm {
    /// Valida y convierte (quantidade -> número)
    pub fn validate(&self) -> Result<NewDonation, FormError> {
        let alimento = required("alimento", &self.alimento)?;
        let quantidade_raw = required("quantidade", &self.quantidade)?;
        let unidade = required("unidade", &self.unidade)?;
        let validade = required("validade", &self.validade)?;

        // Acepta coma decimal ("2,5")
        let quantidade = quantidade_raw
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite() && *q > 0.0)
            .ok_or_else(|| FormError::InvalidQuantity(quantidade_raw.clone()))?;

        NaiveDate::parse_from_str(&validade, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(validade.clone()))?;

        Ok(NewDonation {
            alimento,
            quantidade,
            unidade,
            validade,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

/// Resultado de enviar el formulario
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub created: Donation,
    /// Lista recargada; puede fallar aunque la donación ya se haya creado
    pub refreshed: Result<Vec<Donation>, ApiError>,
}

pub struct DonationFormViewModel<T: HttpTransport = FetchTransport> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> DonationFormViewModel<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// POST de la nueva donación y recarga de la lista
    pub async fn submit(&self, form: &DonationForm) -> Result<SubmitOutcome, FormError> {
        let donation = form.validate()?;
        let created = self.api.create_donation(&donation).await?;
        log::info!("✅ [DOACAO] Doação {} criada ({} {})", created.id, created.quantidade, created.unidade);

        let refreshed = self.api.list_donations(None).await;
        Ok(SubmitOutcome { created, refreshed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Session};
    use crate::services::testing::{counting_hook, session_with, MockTransport};
    use crate::services::http::Method;
    use crate::state::MemorySessionStore;
    use futures::executor::block_on;
    use serde_json::Value;

    fn arroz() -> DonationForm {
        DonationForm {
            alimento: "Arroz".into(),
            quantidade: "10".into(),
            unidade: "kg".into(),
            validade: "2025-12-01".into(),
        }
    }

    #[test]
    fn submit_posts_numeric_quantity_then_reloads_list() {
        let store = MemorySessionStore::new();
        let session = session_with(&store, Some(Session::new("tok", Role::Doador)));
        let transport = MockTransport::new();
        transport.respond(201, r#"{"id":"n1","alimento":"Arroz","quantidade":10,"unidade":"kg","validade":"2025-12-01","status":"pendente"}"#);
        transport.respond(200, r#"[{"id":"n1","alimento":"Arroz","quantidade":10,"unidade":"kg","validade":"2025-12-01","status":"pendente"}]"#);
        let (hook, _) = counting_hook();
        let vm = DonationFormViewModel::new(ApiClient::with_transport("http://api", transport.clone(), session, hook));

        let outcome = block_on(vm.submit(&arroz())).expect("submit");
        assert_eq!(outcome.created.id, "n1");
        assert_eq!(outcome.refreshed.map(|list| list.len()), Ok(1));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://api/api/doacoes");
        let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap_or_default()).expect("json");
        assert_eq!(body["quantidade"].as_f64(), Some(10.0));
        assert!(body["quantidade"].is_number());
        assert_eq!(body["alimento"], "Arroz");
        assert_eq!(requests[1].method, Method::Get);
        assert_eq!(requests[1].url, "http://api/api/doacoes");
    }

    #[test]
    fn invalid_form_never_reaches_the_server() {
        let store = MemorySessionStore::new();
        let session = session_with(&store, Some(Session::new("tok", Role::Doador)));
        let transport = MockTransport::new();
        let (hook, _) = counting_hook();
        let vm = DonationFormViewModel::new(ApiClient::with_transport("http://api", transport.clone(), session, hook));

        let mut form = arroz();
        form.quantidade = "dez".into();
        assert_eq!(block_on(vm.submit(&form)), Err(FormError::InvalidQuantity("dez".into())));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn validation_rules() {
        let mut form = arroz();
        form.alimento = "   ".into();
        assert_eq!(form.validate(), Err(FormError::Required("alimento")));

        let mut form = arroz();
        form.quantidade = "0".into();
        assert!(matches!(form.validate(), Err(FormError::InvalidQuantity(_))));

        let mut form = arroz();
        form.quantidade = "2,5".into();
        assert_eq!(form.validate().map(|d| d.quantidade), Ok(2.5));

        let mut form = arroz();
        form.validade = "01/12/2025".into();
        assert_eq!(form.validate(), Err(FormError::InvalidDate("01/12/2025".into())));
    }
}
