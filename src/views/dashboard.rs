// ============================================================================
// DASHBOARD VIEW - Estado del backend + estadísticas
// ============================================================================

use crate::models::{ApiStatus, Stats};
use crate::services::ApiError;
use crate::utils::escape_html;

/// (clases del card, contenido)
pub fn render_api_status(status: &Result<ApiStatus, ApiError>) -> (&'static str, String) {
    match status {
        Ok(status) if status.is_online() => (
            "status status-online",
            format!(
                "<h3>✅ Backend Online</h3><p>Sistema funcionando corretamente!</p><p><strong>Versão:</strong> {}</p>",
                escape_html(status.version())
            ),
        ),
        _ => (
            "status status-offline",
            "<h3>❌ Backend Offline</h3><p>Verifique se o servidor está rodando</p>".to_string(),
        ),
    }
}

pub fn render_stats(stats: &Stats) -> String {
    [
        (stats.doacoes, "Doações"),
        (stats.motoristas, "Motoristas"),
        (stats.rotas_pendentes, "Rotas pendentes"),
    ]
    .iter()
    .map(|(value, label)| format!(r#"<div class="stat-item"><h3>{}</h3><p>{}</p></div>"#, value, label))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn online_card_shows_version() {
        let status = ApiStatus {
            status: json!("online"),
            versao: None,
        };
        let (class, html) = render_api_status(&Ok(status));
        assert_eq!(class, "status status-online");
        assert!(html.contains("1.0.0"));
    }

    #[test]
    fn network_failure_is_offline() {
        let (class, html) = render_api_status(&Err(ApiError::Network("Failed to fetch".into())));
        assert_eq!(class, "status status-offline");
        assert!(html.contains("Backend Offline"));
    }

    #[test]
    fn stats_render_three_items() {
        let html = render_stats(&Stats {
            doacoes: 12,
            motoristas: 3,
            rotas_pendentes: 4,
        });
        assert_eq!(html.matches("stat-item").count(), 3);
        assert!(html.contains("<h3>12</h3><p>Doações</p>"));
    }
}
