// ============================================================================
// APP VIEW - Composición raíz según el estado de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::{
    render_file_list, render_file_upload, render_login, render_navbar, render_notice,
    render_register, render_settings_popup,
};

/// Renderizar la aplicación completa a partir del estado
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("app").build();

    // Sin sesión: login o registro
    if !state.auth.is_authenticated() {
        let screen = if *state.show_register.borrow() {
            render_register(state)?
        } else {
            render_login(state)?
        };
        append_child(&root, &screen)?;
        if let Some(notice) = render_notice(state)? {
            append_child(&root, &notice)?;
        }
        return Ok(root);
    }

    // Con sesión: navbar + subida + listado
    append_child(&root, &render_navbar(state)?)?;

    let main = ElementBuilder::new("main")?.class("app-main").build();
    append_child(&main, &render_file_upload(state)?)?;
    append_child(&main, &render_file_list(state)?)?;
    append_child(&root, &main)?;

    if let Some(notice) = render_notice(state)? {
        append_child(&root, &notice)?;
    }

    if *state.show_settings.borrow() {
        append_child(&root, &render_settings_popup(state)?)?;
    }

    Ok(root)
}
