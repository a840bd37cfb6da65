use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Perfil del usuario autenticado (claim `role` del backend)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doador,
    Receptor,
    Motorista,
    Estoquista,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Doador,
        Role::Receptor,
        Role::Motorista,
        Role::Estoquista,
    ];

    /// Valor tal como viaja en el JSON y en localStorage
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doador => "doador",
            Role::Receptor => "receptor",
            Role::Motorista => "motorista",
            Role::Estoquista => "estoquista",
        }
    }

    /// Etiqueta visible en el header
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Doador => "Doador",
            Role::Receptor => "Receptor",
            Role::Motorista => "Motorista",
            Role::Estoquista => "Estoquista",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("perfil desconhecido: '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
