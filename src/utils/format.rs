// ============================================================================
// FORMAT - Helpers de presentación (sin DOM, testeables)
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Escapar texto antes de interpolarlo en HTML
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fecha del backend -> `dd/mm/aaaa`. Si no se reconoce, se devuelve tal cual.
///
/// Acepta `2025-12-01`, ISO con hora (`2025-12-01T10:00:00`) y el formato
/// RFC 2822 que produce `jsonify` (`Mon, 01 Dec 2025 00:00:00 GMT`).
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

/// `10 kg`, `2.5 L`
pub fn format_quantity(quantidade: f64, unidade: &str) -> String {
    if quantidade.fract() == 0.0 {
        format!("{:.0} {}", quantidade, unidade)
    } else {
        format!("{} {}", quantidade, unidade)
    }
}

/// Texto o `N/A`
pub fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"Feijão\" & 'arroz'</b>"), "&lt;b&gt;&quot;Feijão&quot; &amp; &#39;arroz&#39;&lt;/b&gt;");
    }

    #[test]
    fn formats_backend_dates() {
        assert_eq!(format_date("2025-12-01"), "01/12/2025");
        assert_eq!(format_date("2025-12-01T08:30:00"), "01/12/2025");
        assert_eq!(format_date("Mon, 01 Dec 2025 00:00:00 GMT"), "01/12/2025");
        assert_eq!(format_date("amanhã"), "amanhã");
    }

    #[test]
    fn quantities_drop_trailing_zero() {
        assert_eq!(format_quantity(10.0, "kg"), "10 kg");
        assert_eq!(format_quantity(2.5, "L"), "2.5 L");
        assert_eq!(format_quantity(1e20, "kg"), "100000000000000000000 kg");
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("  ")), "N/A");
    }
}
