use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Pendente,
    EmAndamento,
    Concluida,
    Cancelada,
    #[serde(other)]
    Desconhecido,
}

impl RouteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Pendente => "Pendente",
            RouteStatus::EmAndamento => "Em andamento",
            RouteStatus::Concluida => "Concluída",
            RouteStatus::Cancelada => "Cancelada",
            RouteStatus::Desconhecido => "Desconhecido",
        }
    }
}

impl Default for RouteStatus {
    fn default() -> Self {
        RouteStatus::Pendente
    }
}

/// Ruta calculada (o cacheada) por el backend para una donación
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Route {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub doacao_id: Option<String>,
    #[serde(default)]
    pub motorista_id: Option<String>,
    pub resumo_rota: String,
    pub distancia_texto: String,
    pub duracao_texto: String,
    pub google_maps_link: String,
    #[serde(default)]
    pub status: RouteStatus,
}

/// Body de `PUT /api/rotas/:id/status`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RouteStatusUpdate {
    pub status: RouteStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pendente_when_missing() {
        let json = r#"{"_id":"r1","resumo_rota":"BR-116","distancia_texto":"5,2 km","duracao_texto":"15 min","google_maps_link":"https://maps"}"#;
        let route: Route = serde_json::from_str(json).expect("route");
        assert_eq!(route.id, "r1");
        assert_eq!(route.status, RouteStatus::Pendente);
    }

    #[test]
    fn status_update_serializes_snake_case() {
        let body = serde_json::to_value(RouteStatusUpdate { status: RouteStatus::Concluida }).expect("json");
        assert_eq!(body, serde_json::json!({"status": "concluida"}));
    }
}
