// ============================================================================
// RESOURCE VIEWS - Tablas y cards de listados (HTML puro, sin DOM)
// ============================================================================
// Cada loader pinta: cargando -> (vacío | tabla/cards | error)
// ============================================================================

use crate::models::{Address, Donation, Donor, Recipient, Route, StockItem};
use crate::utils::{escape_html, format_date, format_quantity, or_na};

/// Atributo con el ID de donación en los botones "Ver"
pub const DONATION_ID_ATTR: &str = "data-donation-id";

pub fn loading_html(what: &str) -> String {
    format!(r#"<div class="loading"><div class="spinner"></div>Carregando {}...</div>"#, escape_html(what))
}

pub fn error_html(message: &str) -> String {
    format!(r#"<div class="alert alert-error">{}</div>"#, escape_html(message))
}

pub fn empty_html(message: &str) -> String {
    format!(r#"<div class="alert alert-info">{}</div>"#, escape_html(message))
}

fn table(headers: &[&str], rows: String) -> String {
    let head: String = headers.iter().map(|h| format!("<th>{}</th>", h)).collect();
    format!("<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>", head, rows)
}

fn status_badge(donation: &Donation) -> String {
    format!(
        r#"<span class="status-badge status-{}">{}</span>"#,
        donation.status.css_slug(),
        donation.status.label()
    )
}

fn view_button(donation: &Donation) -> String {
    format!(
        r#"<button class="btn" {}="{}">Ver</button>"#,
        DONATION_ID_ATTR,
        escape_html(&donation.id)
    )
}

fn city(endereco: &Option<Address>) -> String {
    or_na(endereco.as_ref().map(|e| e.cidade.as_str()))
}

pub fn render_donations_table(donations: &[Donation]) -> String {
    if donations.is_empty() {
        return empty_html("Nenhuma doação encontrada");
    }
    let rows: String = donations
        .iter()
        .map(|d| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&d.alimento),
                escape_html(&format_quantity(d.quantidade, &d.unidade)),
                escape_html(&format_date(&d.validade)),
                status_badge(d),
                or_na(d.doador_nome.as_deref()),
                or_na(d.receptor_nome.as_deref()),
                view_button(d),
            )
        })
        .collect();
    table(
        &["Alimento", "Quantidade", "Validade", "Status", "Doador", "Receptor", "Ações"],
        rows,
    )
}

/// Histórico: una card por donación
pub fn render_donation_cards(donations: &[Donation]) -> String {
    if donations.is_empty() {
        return empty_html("Nenhuma doação encontrada");
    }
    let cards: String = donations
        .iter()
        .map(|d| {
            let created = d
                .data_criacao
                .as_deref()
                .map(|raw| format!("<p><strong>Criada em:</strong> {}</p>", escape_html(&format_date(raw))))
                .unwrap_or_default();
            format!(
                r#"<div class="donation-card"><div class="donation-card-header"><h3>{}</h3>{}</div><p><strong>Quantidade:</strong> {}</p><p><strong>Validade:</strong> {}</p>{}{}</div>"#,
                escape_html(&d.alimento),
                status_badge(d),
                escape_html(&format_quantity(d.quantidade, &d.unidade)),
                escape_html(&format_date(&d.validade)),
                created,
                view_button(d),
            )
        })
        .collect();
    format!(r#"<div class="donation-cards">{}</div>"#, cards)
}

pub fn render_routes_table(routes: &[Route]) -> String {
    if routes.is_empty() {
        return empty_html("Nenhuma rota encontrada");
    }
    let rows: String = routes
        .iter()
        .map(|r| {
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a class="btn" href="{}" target="_blank" rel="noopener">Abrir no Google Maps</a></td></tr>"#,
                escape_html(&r.resumo_rota),
                escape_html(&r.distancia_texto),
                escape_html(&r.duracao_texto),
                r.status.label(),
                escape_html(&r.google_maps_link),
            )
        })
        .collect();
    table(&["Resumo", "Distância", "Tempo", "Status", "Ações"], rows)
}

pub fn render_stock_table(items: &[StockItem]) -> String {
    if items.is_empty() {
        return empty_html("Nenhum item em estoque");
    }
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&item.alimento),
                escape_html(&format_quantity(item.quantidade, &item.unidade)),
                or_na(item.local.as_deref()),
                item.data_atualizacao
                    .as_deref()
                    .map(|raw| escape_html(&format_date(raw)))
                    .unwrap_or_else(|| "N/A".to_string()),
            )
        })
        .collect();
    table(&["Alimento", "Quantidade", "Local", "Atualizado em"], rows)
}

pub fn render_donors_table(donors: &[Donor]) -> String {
    if donors.is_empty() {
        return empty_html("Nenhum doador encontrado");
    }
    let rows: String = donors
        .iter()
        .map(|d| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&d.nome),
                escape_html(&d.email),
                or_na(d.telefone.as_deref()),
                city(&d.endereco),
            )
        })
        .collect();
    table(&["Nome", "Email", "Telefone", "Cidade"], rows)
}

pub fn render_recipients_table(recipients: &[Recipient]) -> String {
    if recipients.is_empty() {
        return empty_html("Nenhum receptor encontrado");
    }
    let rows: String = recipients
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&r.nome),
                escape_html(&r.email),
                or_na(r.telefone.as_deref()),
                city(&r.endereco),
                r.capacidade.map(|c| c.to_string()).unwrap_or_else(|| "N/A".to_string()),
            )
        })
        .collect();
    table(&["Nome", "Email", "Telefone", "Cidade", "Capacidade"], rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DonationStatus;

    fn donation(id: &str, alimento: &str, status: DonationStatus) -> Donation {
        Donation {
            id: id.into(),
            alimento: alimento.into(),
            quantidade: 10.0,
            unidade: "kg".into(),
            validade: "2025-12-01".into(),
            status,
            doador_id: None,
            receptor_id: None,
            motorista_id: None,
            data_criacao: None,
            doador_nome: Some("Mercado Central".into()),
            receptor_nome: None,
        }
    }

    #[test]
    fn empty_donation_list_shows_message_not_table() {
        for html in [render_donations_table(&[]), render_donation_cards(&[])] {
            assert!(html.contains("Nenhuma doação encontrada"));
            assert!(!html.contains("<table"));
        }
    }

    #[test]
    fn donation_rows_carry_view_button_and_badge() {
        let html = render_donations_table(&[donation("d1", "Arroz", DonationStatus::ACaminho)]);
        assert!(html.contains("<table>"));
        assert!(html.contains(r#"data-donation-id="d1""#));
        assert!(html.contains("status-a-caminho"));
        assert!(html.contains("10 kg"));
        assert!(html.contains("01/12/2025"));
        assert!(html.contains("Mercado Central"));
    }

    #[test]
    fn content_is_escaped() {
        let html = render_donation_cards(&[donation("d1", "<script>x</script>", DonationStatus::Pendente)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn every_list_has_its_empty_message() {
        assert!(render_routes_table(&[]).contains("Nenhuma rota encontrada"));
        assert!(render_stock_table(&[]).contains("Nenhum item em estoque"));
        assert!(render_donors_table(&[]).contains("Nenhum doador encontrado"));
        assert!(render_recipients_table(&[]).contains("Nenhum receptor encontrado"));
    }

    #[test]
    fn loading_and_error_markup() {
        assert_eq!(
            loading_html("doações"),
            r#"<div class="loading"><div class="spinner"></div>Carregando doações...</div>"#
        );
        assert_eq!(error_html("Falhou"), r#"<div class="alert alert-error">Falhou</div>"#);
    }
}
