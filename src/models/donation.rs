use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado de una donación. Las transiciones las controla el backend.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum DonationStatus {
    #[serde(rename = "pendente")]
    Pendente,
    #[serde(rename = "aceita")]
    Aceita,
    #[serde(rename = "a caminho")]
    ACaminho,
    #[serde(rename = "concluida")]
    Concluida,
    #[serde(rename = "recebida")]
    Recebida,
    #[serde(rename = "expirada")]
    Expirada,
    /// Valor que el cliente no conoce: se muestra pero no habilita acciones
    #[serde(other)]
    Desconhecido,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pendente => "pendente",
            DonationStatus::Aceita => "aceita",
            DonationStatus::ACaminho => "a caminho",
            DonationStatus::Concluida => "concluida",
            DonationStatus::Recebida => "recebida",
            DonationStatus::Expirada => "expirada",
            DonationStatus::Desconhecido => "desconhecido",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationStatus::Pendente => "Pendente",
            DonationStatus::Aceita => "Aceita",
            DonationStatus::ACaminho => "A caminho",
            DonationStatus::Concluida => "Concluída",
            DonationStatus::Recebida => "Recebida",
            DonationStatus::Expirada => "Expirada",
            DonationStatus::Desconhecido => "Desconhecido",
        }
    }

    /// Sufijo para la clase CSS `status-badge status-<slug>`
    pub fn css_slug(&self) -> String {
        self.as_str().replace(' ', "-")
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Donation {
    #[serde(alias = "_id")]
    pub id: String,
    pub alimento: String,
    pub quantidade: f64,
    pub unidade: String,
    pub validade: String,
    pub status: DonationStatus,

    #[serde(default)]
    pub doador_id: Option<String>,
    #[serde(default)]
    pub receptor_id: Option<String>,
    #[serde(default)]
    pub motorista_id: Option<String>,
    #[serde(default)]
    pub data_criacao: Option<String>,

    // Campos enriquecidos por algunas versiones del backend
    #[serde(default)]
    pub doador_nome: Option<String>,
    #[serde(default)]
    pub receptor_nome: Option<String>,
}

/// Body de `POST /api/doacoes`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewDonation {
    pub alimento: String,
    pub quantidade: f64,
    pub unidade: String,
    pub validade: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mongo_id_and_spaced_status() {
        let json = r#"{
            "_id": "665f1c",
            "alimento": "Feijão",
            "quantidade": 12.5,
            "unidade": "kg",
            "validade": "2025-12-01T00:00:00",
            "status": "a caminho",
            "doador_id": "d1"
        }"#;
        let donation: Donation = serde_json::from_str(json).expect("donation");
        assert_eq!(donation.id, "665f1c");
        assert_eq!(donation.status, DonationStatus::ACaminho);
        assert_eq!(donation.doador_id.as_deref(), Some("d1"));
        assert!(donation.receptor_id.is_none());
    }

    #[test]
    fn unknown_status_does_not_fail_the_record() {
        let json = r#"{"id":"1","alimento":"Arroz","quantidade":1,"unidade":"kg","validade":"2025-01-01","status":"arquivada"}"#;
        let donation: Donation = serde_json::from_str(json).expect("donation");
        assert_eq!(donation.status, DonationStatus::Desconhecido);
    }

    #[test]
    fn css_slug_has_no_spaces() {
        assert_eq!(DonationStatus::ACaminho.css_slug(), "a-caminho");
    }
}
