// ============================================================================
// REGISTER VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::AuthViewModel;
use crate::views::login::create_input_group;

/// Renderizar vista de registro
pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let first_name = Rc::new(RefCell::new(String::new()));
    let last_name = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let title = ElementBuilder::new("h1")?.text(&t("app_title", &lang)).build();
    let subtitle = ElementBuilder::new("p")?
        .text(&t("sign_up", &lang))
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    let form = ElementBuilder::new("div")?.class("auth-form").build();

    if let Some(message) = state.auth.error() {
        let error_box = ElementBuilder::new("div")?
            .class("auth-error")
            .text(&message)
            .build();
        append_child(&form, &error_box)?;
    }

    append_child(
        &form,
        &create_input_group("reg-first-name", "text", &t("first_name", &lang), first_name.clone())?,
    )?;
    append_child(
        &form,
        &create_input_group("reg-last-name", "text", &t("last_name", &lang), last_name.clone())?,
    )?;
    append_child(
        &form,
        &create_input_group("reg-email", "email", &t("email", &lang), email.clone())?,
    )?;
    append_child(
        &form,
        &create_input_group("reg-password", "password", &t("password", &lang), password.clone())?,
    )?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text(&t("sign_up", &lang))
        .build();
    if state.auth.is_loading() {
        submit_btn.set_attribute("disabled", "true")?;
    }

    {
        let state = state.clone();
        on_click(&submit_btn, move |_| {
            let first_name_val = first_name.borrow().clone();
            let last_name_val = last_name.borrow().clone();
            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            if first_name_val.is_empty()
                || last_name_val.is_empty()
                || email_val.is_empty()
                || password_val.is_empty()
            {
                let lang = state.language();
                state.auth.set_error(Some(t("fill_all_fields", &lang)));
                state.notify_subscribers();
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new(state);
                vm.register(email_val, password_val, first_name_val, last_name_val)
                    .await;
            });
        })?;
    }
    append_child(&form, &submit_btn)?;

    // Volver al login
    let switch = ElementBuilder::new("p")?.class("auth-switch").build();
    let switch_text = ElementBuilder::new("span")?
        .text(&t("have_account", &lang))
        .build();
    let switch_link = ElementBuilder::new("a")?
        .attr("href", "#")?
        .text(&t("sign_in", &lang))
        .build();
    {
        let state = state.clone();
        on_click(&switch_link, move |e| {
            e.prevent_default();
            state.auth.set_error(None);
            state.set_show_register(false);
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
