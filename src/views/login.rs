// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child_all, input_value, on_submit, set_disabled, set_html_by_id, ElementBuilder};
use crate::state::AppState;
use crate::utils::{escape_html, LOGIN_FORM_ID};
use crate::viewmodels::LoginViewModel;

const EMAIL_ID: &str = "login-email";
const SENHA_ID: &str = "login-senha";
const LOGIN_ERROR_ID: &str = "login-error";

fn form_html() -> String {
    format!(
        r#"<div class="form-group"><label for="{e}">E-mail</label><input id="{e}" type="email" autocomplete="username" placeholder="voce@exemplo.com"></div>
<div class="form-group"><label for="{s}">Senha</label><input id="{s}" type="password" autocomplete="current-password"></div>
<div id="{err}"></div>
<button type="submit" class="btn btn-primary btn-login">Entrar</button>"#,
        e = EMAIL_ID,
        s = SENHA_ID,
        err = LOGIN_ERROR_ID,
    )
}

fn notice_html(message: &str, class: &str) -> String {
    format!(r#"<div class="{}">{}</div>"#, class, escape_html(message))
}

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();
    let header = ElementBuilder::new("div")?
        .class("login-header")
        .html("<h1>🍲 Rota do Bem</h1><p>Conectando doações a quem precisa</p>")
        .build();

    let notice = ElementBuilder::new("div")?.class("login-notice").build();
    if let Some(message) = state.take_login_notice() {
        notice.set_inner_html(&notice_html(&message, "alert alert-warning"));
    }

    let form = ElementBuilder::new("form")?
        .id(LOGIN_FORM_ID)?
        .class("login-form")
        .html(&form_html())
        .build();

    {
        let state = state.clone();
        let form_el = form.clone();
        on_submit(&form, move || {
            let email = input_value(EMAIL_ID);
            let senha = input_value(SENHA_ID);
            let button = form_el.query_selector("button[type=submit]").ok().flatten();
            if let Some(button) = &button {
                if let Err(e) = set_disabled(button, true) {
                    log::error!("❌ [LOGIN] {:?}", e);
                }
            }
            set_html_by_id(LOGIN_ERROR_ID, "");

            let state = state.clone();
            spawn_local(async move {
                let vm = LoginViewModel::new(state.api());
                match vm.login(&email, &senha).await {
                    Ok(session) => {
                        log::info!("✅ [LOGIN] Login ok (perfil: {})", session.role);
                        crate::rerender_app();
                    }
                    Err(e) => {
                        log::warn!("⚠️ [LOGIN] {}", e);
                        set_html_by_id(LOGIN_ERROR_ID, &notice_html(&e.to_string(), "alert alert-error"));
                        if let Some(button) = button {
                            if let Err(e) = set_disabled(&button, false) {
                                log::error!("❌ [LOGIN] {:?}", e);
                            }
                        }
                    }
                }
            });
        })?;
    }

    append_child_all(&container, &[&header, &notice, &form])?;
    append_child_all(&screen, &[&container])?;
    Ok(screen)
}
