// ============================================================================
// DONATION DIALOG - Diálogo único de detalle + acción del perfil
// ============================================================================
// El contenido lo decide DialogSlot; esta vista solo lo pinta y conecta el botón.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{get_element_by_id, on_click, set_disabled, set_html_by_id, ElementBuilder};
use crate::services::ApiError;
use crate::state::{AppState, RequestTicket};
use crate::utils::{
    escape_html, format_date, format_quantity, or_na, DIALOG_ACTION_ID, DIALOG_BODY_ID, DIALOG_CLOSE_ID, DIALOG_ID,
};
use crate::viewmodels::{ActionError, DonationAction, DonationDetail, DonationViewModel};
use crate::views::alert::{show_alert, AlertKind};
use crate::views::resources::loading_html;

/// Contenido del diálogo para un detalle ya cargado
pub fn render_detail(detail: &DonationDetail) -> String {
    let d = &detail.donation;
    let mut html = format!(
        r#"<h2>{}</h2><p><strong>Quantidade:</strong> {}</p><p><strong>Validade:</strong> {}</p><p><strong>Status:</strong> <span class="status-badge status-{}">{}</span></p><p><strong>Doador:</strong> {}</p><p><strong>Receptor:</strong> {}</p>"#,
        escape_html(&d.alimento),
        escape_html(&format_quantity(d.quantidade, &d.unidade)),
        escape_html(&format_date(&d.validade)),
        d.status.css_slug(),
        d.status.label(),
        or_na(d.doador_nome.as_deref().or(d.doador_id.as_deref())),
        or_na(d.receptor_nome.as_deref().or(d.receptor_id.as_deref())),
    );

    if let Some(route) = &detail.route {
        html.push_str(&format!(
            r#"<div class="route-info"><h3>Rota</h3><p>{}</p><p><strong>Distância:</strong> {} · <strong>Tempo:</strong> {}</p><a href="{}" target="_blank" rel="noopener">Abrir no Google Maps</a></div>"#,
            escape_html(&route.resumo_rota),
            escape_html(&route.distancia_texto),
            escape_html(&route.duracao_texto),
            escape_html(&route.google_maps_link),
        ));
    } else if let Some(error) = &detail.route_error {
        html.push_str(&format!(
            r#"<div class="alert alert-error">Não foi possível calcular a rota: {}</div>"#,
            escape_html(error)
        ));
    }
    html
}

/// Estructura vacía del diálogo (montada una vez por el shell)
pub fn render_dialog(state: &AppState) -> Result<Element, JsValue> {
    let dialog = ElementBuilder::new("div")?
        .id(DIALOG_ID)?
        .class("modal hidden")
        .html(&format!(
            r#"<div class="modal-content"><button type="button" class="modal-close" id="{}">×</button><div id="{}"></div><div class="modal-actions"><button type="button" class="btn btn-primary hidden" id="{}"></button></div></div>"#,
            DIALOG_CLOSE_ID, DIALOG_BODY_ID, DIALOG_ACTION_ID
        ))
        .build();

    // Los listeners se registran una vez; el handler de acción vive en DialogSlot
    if let Some(close_btn) = dialog.query_selector(&format!("#{}", DIALOG_CLOSE_ID))? {
        let state = state.clone();
        on_click(&close_btn, move |_| close_dialog(&state))?;
    }
    if let Some(action_btn) = dialog.query_selector(&format!("#{}", DIALOG_ACTION_ID))? {
        let state = state.clone();
        on_click(&action_btn, move |_| {
            if state.dialog.action_enabled() {
                if let Some(handler) = state.dialog.handler() {
                    handler();
                }
            }
        })?;
    }
    Ok(dialog)
}

fn set_dialog_visible(visible: bool) {
    if let Some(dialog) = get_element_by_id(DIALOG_ID) {
        dialog.set_class_name(if visible { "modal" } else { "modal hidden" });
    }
}

/// Estado del botón de acción según el slot
fn sync_action_button(state: &AppState, action: Option<DonationAction>) -> Result<(), JsValue> {
    let Some(button) = get_element_by_id(DIALOG_ACTION_ID) else {
        return Ok(());
    };
    match action {
        Some(action) => {
            button.set_text_content(Some(action.label()));
            button.set_class_name("btn btn-primary");
            set_disabled(&button, !state.dialog.action_enabled())
        }
        None => {
            button.set_class_name("btn btn-primary hidden");
            set_disabled(&button, true)
        }
    }
}

pub fn close_dialog(state: &AppState) {
    state.dialog.close();
    set_dialog_visible(false);
    set_html_by_id(DIALOG_BODY_ID, "");
}

/// Abre el diálogo para una donación (reemplaza contenido y handler anteriores)
pub fn open_donation(state: &AppState, donation_id: String) {
    let Some(role) = state.session.role() else {
        return;
    };
    let ticket = state.dialog.open();
    set_dialog_visible(true);
    set_html_by_id(DIALOG_BODY_ID, &loading_html("doação"));
    if let Err(e) = sync_action_button(state, None) {
        log::error!("❌ [DIALOG] {:?}", e);
    }

    let state = state.clone();
    spawn_local(async move {
        let vm = DonationViewModel::new(state.api());
        match vm.load_detail(&donation_id, role).await {
            Ok(detail) => {
                let action = detail.action;
                let body = render_detail(&detail);
                if !state.dialog.show(ticket, detail) {
                    return;
                }
                set_html_by_id(DIALOG_BODY_ID, &body);
                if let Some(action) = action {
                    state.dialog.set_handler(action_handler(&state, action, ticket));
                }
                if let Err(e) = sync_action_button(&state, action) {
                    log::error!("❌ [DIALOG] {:?}", e);
                }
            }
            Err(ApiError::SessionExpired) => {}
            Err(e) => {
                log::error!("❌ [DIALOG] Erro carregando doação {}: {}", donation_id, e);
                if state.dialog.is_current(ticket) {
                    set_html_by_id(DIALOG_BODY_ID, &crate::views::resources::error_html(&e.to_string()));
                }
            }
        }
    });
}

/// Handler del botón: ejecuta la acción con el detalle vigente del slot
fn action_handler(state: &AppState, action: DonationAction, ticket: RequestTicket) -> Rc<dyn Fn()> {
    let state = state.clone();
    Rc::new(move || {
        let Some(detail) = state.dialog.detail() else {
            return;
        };
        if let Some(button) = get_element_by_id(DIALOG_ACTION_ID) {
            if let Err(e) = set_disabled(&button, true) {
                log::error!("❌ [DIALOG] {:?}", e);
            }
        }

        let state = state.clone();
        spawn_local(async move {
            let vm = DonationViewModel::new(state.api());
            match vm.perform(action, &detail).await {
                Ok(()) => {
                    show_alert(action.success_message(), AlertKind::Success);
                    // Otro diálogo abierto entretanto: no se toca
                    if state.dialog.is_current(ticket) {
                        close_dialog(&state);
                    }
                    crate::views::pages::reload(&state);
                }
                Err(ActionError::Api(ApiError::SessionExpired)) => {}
                Err(e) => {
                    log::error!("❌ [DIALOG] {:?} falhou: {}", action, e);
                    show_alert(&e.to_string(), AlertKind::Error);
                    if state.dialog.is_current(ticket) {
                        if let Err(e) = sync_action_button(&state, Some(action)) {
                            log::error!("❌ [DIALOG] {:?}", e);
                        }
                    }
                }
            }
        });
    })
}
