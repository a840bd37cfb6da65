// ============================================================================
// LOGIN VIEWMODEL - Login / logout
// ============================================================================

use thiserror::Error;
use crate::models::{LoginRequest, Role, Session};
use crate::services::{ApiClient, ApiError, FetchTransport, HttpTransport};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("Preencha e-mail e senha.")]
    MissingCredentials,
    #[error("Perfil de usuário desconhecido: '{0}'.")]
    UnknownRole(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct LoginViewModel<T: HttpTransport = FetchTransport> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> LoginViewModel<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// Autentica y, solo si todo es válido, guarda la sesión
    pub async fn login(&self, email: &str, senha: &str) -> Result<Session, LoginError> {
        let email = email.trim();
        if email.is_empty() || senha.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let response = self
            .api
            .login(&LoginRequest {
                email: email.to_string(),
                senha: senha.to_string(),
            })
            .await?;

        if response.access_token.is_empty() {
            return Err(ApiError::Decode("access_token ausente".to_string()).into());
        }

        let role = response
            .role
            .parse::<Role>()
            .map_err(|e| LoginError::UnknownRole(e.0))?;

        let session = Session::new(response.access_token, role).with_user_id(response.id);
        self.api.session().begin(session.clone());
        log::info!("✅ [LOGIN] Login de {} como {}", email, role);
        Ok(session)
    }

    pub fn logout(&self) {
        self.api.session().teardown();
    }
}
