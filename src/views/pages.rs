// ============================================================================
// PAGES - Navegación + despacho página -> loader
// ============================================================================
// Cada carga recibe el ticket de su navegación y solo pinta si sigue vigente.
// ============================================================================

use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{get_element_by_id, on_click, query_selector_all, set_html_by_id};
use crate::services::ApiError;
use crate::state::{AppState, Page, RequestTicket};
use crate::viewmodels::{NavOutcome, ResourceViewModel, ACCESS_DENIED_MESSAGE};
use crate::views::alert::{show_alert, AlertKind};
use crate::views::dashboard::{render_api_status, render_stats};
use crate::views::dialog::open_donation;
use crate::views::map::show_map;
use crate::views::resources::{
    error_html, loading_html, render_donation_cards, render_donations_table, render_donors_table,
    render_recipients_table, render_routes_table, render_stock_table, DONATION_ID_ATTR,
};

pub const API_STATUS_ID: &str = "api-status";
pub const STATS_ID: &str = "stats-container";

/// Navegar a una página (links del menú)
pub fn navigate(state: &AppState, page: Page) {
    apply(state, state.router.navigate(page));
}

/// Recarga la página actual (tras una acción del diálogo)
pub fn reload(state: &AppState) {
    apply(state, state.router.reload());
}

fn apply(state: &AppState, outcome: NavOutcome) {
    match outcome {
        NavOutcome::Show { page, ticket } => {
            show_section(page);
            load_page(state, page, ticket);
        }
        NavOutcome::Denied(_) => show_alert(ACCESS_DENIED_MESSAGE, AlertKind::Error),
        NavOutcome::LoginRequired => crate::rerender_app(),
    }
}

fn show_section(active: Page) {
    for page in Page::ALL {
        if let Some(section) = get_element_by_id(&page.section_id()) {
            section.set_class_name(if page == active { "page active" } else { "page" });
        }
    }
    if let Ok(links) = query_selector_all("nav [data-page]") {
        for link in links {
            let is_active = link.get_attribute("data-page").as_deref() == Some(active.slug());
            link.set_class_name(if is_active { "nav-link active" } else { "nav-link" });
        }
    }
}

fn load_page(state: &AppState, page: Page, ticket: RequestTicket) {
    let vm = ResourceViewModel::new(state.api());
    match page {
        Page::Dashboard => {
            set_html_by_id(STATS_ID, &loading_html("estatísticas"));
            let state = state.clone();
            spawn_local(async move {
                let data = vm.dashboard().await;
                if !is_fresh(&state, page, ticket) {
                    return;
                }
                if let Some(card) = get_element_by_id(API_STATUS_ID) {
                    let (class, html) = render_api_status(&data.api_status);
                    card.set_class_name(class);
                    card.set_inner_html(&html);
                }
                let stats_html = match &data.stats {
                    Ok(stats) => render_stats(stats),
                    Err(ApiError::SessionExpired) => return,
                    Err(e) => error_html(&e.to_string()),
                };
                set_html_by_id(STATS_ID, &stats_html);
            });
        }
        Page::Doacoes | Page::Finalizadas | Page::NovaDoacao => {
            let source = if page == Page::NovaDoacao { Page::Doacoes } else { page };
            render_into(state, page, ticket, "doações", async move {
                vm.donations(source).await.map(|list| render_donations_table(&list))
            });
        }
        Page::Historico => render_into(state, page, ticket, "histórico", async move {
            vm.donations(page).await.map(|list| render_donation_cards(&list))
        }),
        Page::Rotas => render_into(state, page, ticket, "rotas", async move {
            vm.routes().await.map(|list| render_routes_table(&list))
        }),
        Page::Estoque => render_into(state, page, ticket, "estoque", async move {
            vm.stock().await.map(|list| render_stock_table(&list))
        }),
        Page::Doadores => render_into(state, page, ticket, "doadores", async move {
            vm.donors().await.map(|list| render_donors_table(&list))
        }),
        Page::Receptores => render_into(state, page, ticket, "receptores", async move {
            vm.recipients().await.map(|list| render_recipients_table(&list))
        }),
        Page::Mapa => show_map(),
    }
}

fn is_fresh(state: &AppState, page: Page, ticket: RequestTicket) -> bool {
    let fresh = state.router.is_current(ticket);
    if !fresh {
        log::debug!("⏭️ [PAGES] Resposta de '{}' descartada (ticket {})", page, ticket.id());
    }
    fresh
}

/// loading -> HTML del loader (o error) en el contenedor de la página
fn render_into<F>(state: &AppState, page: Page, ticket: RequestTicket, what: &'static str, load: F)
where
    F: Future<Output = Result<String, ApiError>> + 'static,
{
    let container_id = page.container_id();
    set_html_by_id(&container_id, &loading_html(what));

    let state = state.clone();
    spawn_local(async move {
        let result = load.await;
        if !is_fresh(&state, page, ticket) {
            return;
        }
        let html = match result {
            Ok(html) => html,
            // El hook ya programó el re-render a login
            Err(ApiError::SessionExpired) => return,
            Err(e) => {
                log::error!("❌ [PAGES] Erro carregando {}: {}", what, e);
                error_html(&e.to_string())
            }
        };
        paint_list(&state, &container_id, &html);
    });
}

/// Pinta un listado y conecta sus botones "Ver"
pub fn paint_list(state: &AppState, container_id: &str, html: &str) {
    if set_html_by_id(container_id, html) {
        wire_view_buttons(state, container_id);
    }
}

fn view_button_selector(container_id: &str) -> String {
    format!("#{} [{}]", container_id, DONATION_ID_ATTR)
}

/// Botones "Ver" de las filas/cards de donaciones
fn wire_view_buttons(state: &AppState, container_id: &str) {
    let Ok(buttons) = query_selector_all(&view_button_selector(container_id)) else {
        return;
    };
    for button in buttons {
        let Some(id) = button.get_attribute(DONATION_ID_ATTR) else {
            continue;
        };
        let state = state.clone();
        if let Err(e) = on_click(&button, move |_| open_donation(&state, id.clone())) {
            log::error!("❌ [PAGES] {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Donation, DonationStatus};

    #[test]
    fn form_list_buttons_match_selector() {
        let donation = Donation {
            id: "n1".into(),
            alimento: "Arroz".into(),
            quantidade: 10.0,
            unidade: "kg".into(),
            validade: "2025-12-01".into(),
            status: DonationStatus::Pendente,
            doador_id: None,
            receptor_id: None,
            motorista_id: None,
            data_criacao: None,
            doador_nome: None,
            receptor_nome: None,
        };
        let html = render_donations_table(&[donation]);
        assert_eq!(
            view_button_selector(&Page::NovaDoacao.container_id()),
            "#nova-doacao-list [data-donation-id]"
        );
        assert!(html.contains(r#"data-donation-id="n1""#));
    }
}
