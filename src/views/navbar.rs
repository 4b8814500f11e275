// ============================================================================
// NAVBAR VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::AuthViewModel;

/// Renderizar barra superior con usuario y acciones
pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let navbar = ElementBuilder::new("nav")?.class("navbar").build();

    let brand = ElementBuilder::new("div")?
        .class("navbar-brand")
        .text(&format!("🗂️ {}", t("app_title", &lang)))
        .build();

    let actions = ElementBuilder::new("div")?.class("navbar-actions").build();

    if let Some(user) = state.auth.user() {
        let user_label = ElementBuilder::new("span")?
            .class("navbar-user")
            .text(&user.display_name())
            .build();
        append_child(&actions, &user_label)?;
    }

    let settings_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-icon")
        .attr("title", &t("settings", &lang))?
        .text("⚙️")
        .build();
    {
        let state = state.clone();
        on_click(&settings_btn, move |_| {
            state.set_show_settings(true);
            // Refrescar el perfil en segundo plano para editar datos al día
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = AuthViewModel::new(state);
                vm.refresh_profile().await;
            });
        })?;
    }
    append_child(&actions, &settings_btn)?;

    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-logout")
        .text(&t("logout", &lang))
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            let vm = AuthViewModel::new(state.clone());
            vm.logout();
        })?;
    }
    append_child(&actions, &logout_btn)?;

    append_child(&navbar, &brand)?;
    append_child(&navbar, &actions)?;

    Ok(navbar)
}
