use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Respuesta de `GET /api/stats`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Stats {
    #[serde(default)]
    pub doacoes: u64,
    #[serde(default)]
    pub motoristas: u64,
    #[serde(default)]
    pub rotas_pendentes: u64,
}

/// Respuesta de `GET /api` (sonda de estado)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiStatus {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub versao: Option<String>,
}

impl ApiStatus {
    /// `status` con valor "truthy" al estilo JS
    pub fn is_online(&self) -> bool {
        match &self.status {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn version(&self) -> &str {
        self.versao.as_deref().unwrap_or("1.0.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthy_status_means_online() {
        let status: ApiStatus =
            serde_json::from_value(json!({"status": "API Rota do Bem está no ar!", "versao": "2.1.0"})).expect("status");
        assert!(status.is_online());
        assert_eq!(status.version(), "2.1.0");
    }

    #[test]
    fn falsy_or_missing_status_means_offline() {
        for body in [json!({}), json!({"status": ""}), json!({"status": false}), json!({"status": 0})] {
            let status: ApiStatus = serde_json::from_value(body).expect("status");
            assert!(!status.is_online());
        }
        assert_eq!(ApiStatus::default().version(), "1.0.0");
    }
}
