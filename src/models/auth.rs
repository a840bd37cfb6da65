use serde::{Deserialize, Serialize};
use crate::models::role::Role;

/// Body de `POST /api/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Respuesta exitosa de `POST /api/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Sesión del usuario en el cliente (token + perfil)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub role: Role,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }
}
