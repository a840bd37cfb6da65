// ============================================================================
// DONATION FORM VIEW - Página "Nova doação"
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement};
use crate::dom::{get_element_by_id, input_value, on_submit, set_disabled};
use crate::services::ApiError;
use crate::state::{AppState, Page};
use crate::utils::DONATION_FORM_ID;
use crate::viewmodels::{DonationForm, DonationFormViewModel, FormError};
use crate::views::alert::{show_alert, AlertKind};
use crate::views::pages::paint_list;
use crate::views::resources::{error_html, render_donations_table};

const ALIMENTO_ID: &str = "doacao-alimento";
const QUANTIDADE_ID: &str = "doacao-quantidade";
const UNIDADE_ID: &str = "doacao-unidade";
const VALIDADE_ID: &str = "doacao-validade";

pub fn form_html() -> String {
    format!(
        r#"<form id="{form}" class="donation-form" novalidate>
<div class="form-group"><label for="{a}">Alimento</label><input id="{a}" name="alimento" type="text" placeholder="Ex.: Arroz"></div>
<div class="form-group"><label for="{q}">Quantidade</label><input id="{q}" name="quantidade" type="text" inputmode="decimal" placeholder="Ex.: 10"></div>
<div class="form-group"><label for="{u}">Unidade</label><input id="{u}" name="unidade" type="text" list="unidades" placeholder="kg"><datalist id="unidades"><option value="kg"><option value="g"><option value="L"><option value="un"><option value="cx"></datalist></div>
<div class="form-group"><label for="{v}">Validade</label><input id="{v}" name="validade" type="date"></div>
<button type="submit" class="btn btn-primary">Cadastrar doação</button>
</form>"#,
        form = DONATION_FORM_ID,
        a = ALIMENTO_ID,
        q = QUANTIDADE_ID,
        u = UNIDADE_ID,
        v = VALIDADE_ID,
    )
}

fn read_form() -> DonationForm {
    DonationForm {
        alimento: input_value(ALIMENTO_ID),
        quantidade: input_value(QUANTIDADE_ID),
        unidade: input_value(UNIDADE_ID),
        validade: input_value(VALIDADE_ID),
    }
}

fn submit_button(form: &Element) -> Option<Element> {
    form.query_selector("button[type=submit]").ok().flatten()
}

/// Conecta el submit del formulario (el form ya está en el DOM del shell)
pub fn wire_donation_form(state: &AppState, form: &Element) -> Result<(), JsValue> {
    let state = state.clone();
    let form_el = form.clone();
    on_submit(form, move || {
        let values = read_form();
        if let Err(e) = values.validate() {
            show_alert(&e.to_string(), AlertKind::Error);
            return;
        }

        let button = submit_button(&form_el);
        if let Some(button) = &button {
            if let Err(e) = set_disabled(button, true) {
                log::error!("❌ [FORM] {:?}", e);
            }
        }

        let state = state.clone();
        let form_el = form_el.clone();
        spawn_local(async move {
            let vm = DonationFormViewModel::new(state.api());
            match vm.submit(&values).await {
                Ok(outcome) => {
                    if let Some(form) = form_el.dyn_ref::<HtmlFormElement>() {
                        form.reset();
                    }
                    show_alert("Doação cadastrada com sucesso!", AlertKind::Success);
                    let list_html = match &outcome.refreshed {
                        Ok(list) => render_donations_table(list),
                        Err(e) => error_html(&e.to_string()),
                    };
                    paint_list(&state, &Page::NovaDoacao.container_id(), &list_html);
                }
                Err(FormError::Api(ApiError::SessionExpired)) => {}
                Err(e) => {
                    log::error!("❌ [FORM] {}", e);
                    show_alert(&e.to_string(), AlertKind::Error);
                }
            }
            if let Some(button) = button {
                if let Err(e) = set_disabled(&button, false) {
                    log::error!("❌ [FORM] {:?}", e);
                }
            }
        });
    })
}

/// Form montado por el shell, si el perfil tiene la página
pub fn wire_if_present(state: &AppState) -> Result<(), JsValue> {
    match get_element_by_id(DONATION_FORM_ID) {
        Some(form) => wire_donation_form(state, &form),
        None => Ok(()),
    }
}
