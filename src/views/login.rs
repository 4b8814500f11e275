// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_click, on_input, on_keydown, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::AuthViewModel;

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    // Estado local del formulario (en closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let logo = ElementBuilder::new("div")?
        .class("auth-logo")
        .text("🗂️")
        .build();
    let title = ElementBuilder::new("h1")?.text(&t("app_title", &lang)).build();
    let subtitle = ElementBuilder::new("p")?
        .text(&t("app_subtitle", &lang))
        .build();
    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Formulario
    let form = ElementBuilder::new("div")?.class("auth-form").build();

    let email_group = create_input_group(
        "login-email",
        "email",
        &t("email", &lang),
        email.clone(),
    )?;
    let password_group = create_input_group(
        "login-password",
        "password",
        &t("password", &lang),
        password.clone(),
    )?;

    // Error del último intento
    if let Some(message) = state.auth.error() {
        let error_box = ElementBuilder::new("div")?
            .class("auth-error")
            .text(&message)
            .build();
        append_child(&form, &error_box)?;
    }

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;

    // Botón de login
    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text(&t("sign_in", &lang))
        .build();
    if state.auth.is_loading() {
        submit_btn.set_attribute("disabled", "true")?;
    }

    let submit = {
        let email = email.clone();
        let password = password.clone();
        let state = state.clone();
        Rc::new(move || {
            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            if email_val.is_empty() || password_val.is_empty() {
                let lang = state.language();
                state.auth.set_error(Some(t("fill_all_fields", &lang)));
                state.notify_subscribers();
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new(state);
                vm.login(email_val, password_val).await;
            });
        })
    };

    {
        let submit = submit.clone();
        on_click(&submit_btn, move |_| submit())?;
    }
    // Enviar con Enter desde el campo de contraseña
    if let Some(input) = password_group.query_selector("input")? {
        let submit = submit.clone();
        on_keydown(&input, move |e| {
            if e.key() == "Enter" {
                submit();
            }
        })?;
    }
    append_child(&form, &submit_btn)?;

    // Enlace a registro
    let switch = ElementBuilder::new("p")?.class("auth-switch").build();
    let switch_text = ElementBuilder::new("span")?
        .text(&t("no_account", &lang))
        .build();
    let switch_link = ElementBuilder::new("a")?
        .attr("href", "#")?
        .text(&t("sign_up", &lang))
        .build();
    {
        let state = state.clone();
        on_click(&switch_link, move |e| {
            e.prevent_default();
            state.auth.set_error(None);
            state.set_show_register(true);
        })?;
    }
    append_child(&switch, &switch_text)?;
    append_child(&switch, &switch_link)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&container, &switch)?;
    append_child(&screen, &container)?;

    Ok(screen)
}

/// Helper para crear un form group con label e input
pub(crate) fn create_input_group(
    id: &str,
    input_type: &str,
    label_text: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .attr("id", id)?
        .attr("placeholder", label_text)?
        .class("form-input")
        .build();

    {
        let value = value.clone();
        on_input(&input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}
