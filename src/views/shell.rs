// ============================================================================
// SHELL - Header + navegación por perfil + secciones de página + diálogo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child_all, on_click, ElementBuilder};
use crate::state::{AppState, Page};
use crate::utils::{ALERT_CONTAINER_ID, LOGOUT_BUTTON_ID};
use crate::views::dialog::render_dialog;
use crate::views::donation_form::form_html;
use crate::views::map::map_html;
use crate::views::pages::{navigate, API_STATUS_ID, STATS_ID};

/// Contenido inicial de la sección de cada página
fn section_body(page: Page) -> String {
    let list = format!(r#"<div id="{}"></div>"#, page.container_id());
    match page {
        Page::Dashboard => format!(
            r#"<div id="{}" class="status"><h3>Verificando backend...</h3></div><div id="{}" class="stats-container"></div>"#,
            API_STATUS_ID, STATS_ID
        ),
        Page::NovaDoacao => format!("{}<h3>Doações cadastradas</h3>{}", form_html(), list),
        Page::Mapa => map_html(),
        Page::Doacoes
        | Page::Rotas
        | Page::Estoque
        | Page::Doadores
        | Page::Receptores
        | Page::Historico
        | Page::Finalizadas => list,
    }
}

fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let role_label = state.session.role().map(|r| r.label()).unwrap_or_default();
    let header = ElementBuilder::new("header")?
        .class("app-header")
        .html(&format!(
            r#"<h1>🍲 Rota do Bem</h1><div class="user-info"><span class="role-badge">{}</span><button type="button" class="btn btn-secondary" id="{}">Sair</button></div>"#,
            role_label, LOGOUT_BUTTON_ID
        ))
        .build();

    if let Some(logout) = header.query_selector(&format!("#{}", LOGOUT_BUTTON_ID))? {
        let state = state.clone();
        on_click(&logout, move |_| {
            state.logout();
            crate::rerender_app();
        })?;
    }
    Ok(header)
}

/// Solo las páginas permitidas al perfil aparecen en el menú
fn render_nav(state: &AppState) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("app-nav").build();
    let list = ElementBuilder::new("ul")?.build();
    for page in state.router.visible_pages() {
        let item = ElementBuilder::new("li")?.class("nav-item").build();
        let link = ElementBuilder::new("a")?
            .class("nav-link")
            .attr("href", "#")?
            .attr("data-page", page.slug())?
            .text(page.title())
            .build();
        let state = state.clone();
        on_click(&link, move |e| {
            e.prevent_default();
            navigate(&state, page);
        })?;
        append_child_all(&item, &[&link])?;
        append_child_all(&list, &[&item])?;
    }
    append_child_all(&nav, &[&list])?;
    Ok(nav)
}

pub fn render_shell(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [SHELL] render_shell()");
    let shell = ElementBuilder::new("div")?.class("app-shell").build();
    let header = render_header(state)?;
    let nav = render_nav(state)?;
    let alerts = ElementBuilder::new("div")?.id(ALERT_CONTAINER_ID)?.build();

    let main = ElementBuilder::new("main")?.class("app-main").build();
    for page in state.router.visible_pages() {
        let section = ElementBuilder::new("section")?
            .id(&page.section_id())?
            .class("page")
            .html(&format!("<h2>{}</h2>{}", page.title(), section_body(page)))
            .build();
        append_child_all(&main, &[&section])?;
    }

    let dialog = render_dialog(state)?;
    append_child_all(&shell, &[&header, &nav, &alerts, &main, &dialog])?;
    Ok(shell)
}
