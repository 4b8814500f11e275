// ============================================================================
// SETTINGS POPUP - Idioma, perfil y contraseña
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlSelectElement};

use crate::dom::{append_child, on_change, on_click, ElementBuilder};
use crate::models::UpdateProfileRequest;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::AuthViewModel;
use crate::views::login::create_input_group;

/// Renderizar popup de ajustes
pub fn render_settings_popup(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let overlay = ElementBuilder::new("div")?.class("settings-overlay").build();
    let popup = ElementBuilder::new("div")?.class("settings-popup").build();

    // El click fuera del popup cierra; dentro no propaga
    {
        let state = state.clone();
        on_click(&overlay, move |_| {
            state.set_show_settings(false);
        })?;
    }
    on_click(&popup, move |e| {
        e.stop_propagation();
    })?;

    // Header
    let header = ElementBuilder::new("div")?.class("settings-header").build();
    let title = ElementBuilder::new("h2")?.text(&t("settings", &lang)).build();
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&close_btn, move |_| {
            state.set_show_settings(false);
        })?;
    }
    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;
    append_child(&popup, &header)?;

    // Idioma
    append_child(&popup, &render_language_section(state)?)?;

    // Perfil
    append_child(&popup, &render_profile_section(state)?)?;

    // Contraseña
    append_child(&popup, &render_password_section(state)?)?;

    append_child(&overlay, &popup)?;
    Ok(overlay)
}

fn render_language_section(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let section = ElementBuilder::new("div")?.class("settings-section").build();
    let label = ElementBuilder::new("h3")?.text(&t("language", &lang)).build();
    append_child(&section, &label)?;

    let select = ElementBuilder::new("select")?.class("language-select").build();
    for (code, name) in [("FR", "Français"), ("ES", "Español"), ("EN", "English")] {
        let option = ElementBuilder::new("option")?
            .attr("value", code)?
            .text(name)
            .build();
        if code == lang {
            option.set_attribute("selected", "true")?;
        }
        append_child(&select, &option)?;
    }
    {
        let state = state.clone();
        on_change(&select, move |e| {
            if let Some(select) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            {
                state.set_language(select.value());
            }
        })?;
    }
    append_child(&section, &select)?;

    Ok(section)
}

fn render_profile_section(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let user = state.auth.user();

    let section = ElementBuilder::new("div")?.class("settings-section").build();
    let label = ElementBuilder::new("h3")?.text(&t("profile", &lang)).build();
    append_child(&section, &label)?;

    let first_name = Rc::new(RefCell::new(
        user.as_ref().map(|u| u.first_name.clone()).unwrap_or_default(),
    ));
    let last_name = Rc::new(RefCell::new(
        user.as_ref().map(|u| u.last_name.clone()).unwrap_or_default(),
    ));
    let email = Rc::new(RefCell::new(
        user.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
    ));

    let first_group =
        create_input_group("profile-first-name", "text", &t("first_name", &lang), first_name.clone())?;
    let last_group =
        create_input_group("profile-last-name", "text", &t("last_name", &lang), last_name.clone())?;
    let email_group = create_input_group("profile-email", "email", &t("email", &lang), email.clone())?;

    // Prefill con los valores actuales
    set_input_value(&first_group, &first_name.borrow())?;
    set_input_value(&last_group, &last_name.borrow())?;
    set_input_value(&email_group, &email.borrow())?;

    append_child(&section, &first_group)?;
    append_child(&section, &last_group)?;
    append_child(&section, &email_group)?;

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text(&t("save", &lang))
        .build();
    {
        let state = state.clone();
        on_click(&save_btn, move |_| {
            let request = UpdateProfileRequest {
                email: non_empty(&email.borrow()),
                first_name: non_empty(&first_name.borrow()),
                last_name: non_empty(&last_name.borrow()),
            };
            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new(state);
                vm.update_profile(request).await;
            });
        })?;
    }
    append_child(&section, &save_btn)?;

    Ok(section)
}

fn render_password_section(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let section = ElementBuilder::new("div")?.class("settings-section").build();
    let label = ElementBuilder::new("h3")?
        .text(&t("change_password", &lang))
        .build();
    append_child(&section, &label)?;

    let current = Rc::new(RefCell::new(String::new()));
    let new_password = Rc::new(RefCell::new(String::new()));

    append_child(
        &section,
        &create_input_group(
            "password-current",
            "password",
            &t("current_password", &lang),
            current.clone(),
        )?,
    )?;
    append_child(
        &section,
        &create_input_group(
            "password-new",
            "password",
            &t("new_password", &lang),
            new_password.clone(),
        )?,
    )?;

    let save_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text(&t("save", &lang))
        .build();
    {
        let state = state.clone();
        on_click(&save_btn, move |_| {
            let current_val = current.borrow().clone();
            let new_val = new_password.borrow().clone();
            if current_val.is_empty() || new_val.is_empty() {
                let lang = state.language();
                let seq = state.files.set_error(t("fill_all_fields", &lang));
                crate::viewmodels::schedule_notice_dismiss(&state, seq);
                state.notify_subscribers();
                return;
            }
            let state = state.clone();
            spawn_local(async move {
                let vm = AuthViewModel::new(state);
                vm.change_password(current_val, new_val).await;
            });
        })?;
    }
    append_child(&section, &save_btn)?;

    Ok(section)
}

fn set_input_value(group: &Element, value: &str) -> Result<(), JsValue> {
    if let Some(input) = group.query_selector("input")? {
        if let Ok(input) = input.dyn_into::<web_sys::HtmlInputElement>() {
            input.set_value(value);
        }
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
