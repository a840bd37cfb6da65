use thiserror::Error;

/// Errores normalizados de la capa HTTP (única capa de normalización)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fallo de transporte: servidor caído, CORS, sin red
    #[error("Falha de comunicação com o servidor: {0}")]
    Network(String),

    /// 401/403: la sesión ya fue eliminada y se redirigió al login
    #[error("Sessão expirada. Faça login novamente.")]
    SessionExpired,

    /// Respuesta no-2xx con mensaje del backend (`erro`/`error`)
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Cuerpo 2xx que no tiene la forma esperada
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
}

#[cfg(test)]
impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_backend_message_verbatim() {
        let err = ApiError::Server { status: 422, message: "Quantidade deve ser positiva".into() };
        assert_eq!(err.to_string(), "Quantidade deve ser positiva");
        assert!(!err.is_session_expired());
        assert!(ApiError::SessionExpired.is_session_expired());
    }
}
