// ============================================================================
// NOTICE VIEW - Toast de avisos (slot único)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Notice};

/// Renderizar el aviso activo, si lo hay. El auto-descarte lo programa
/// el viewmodel al publicar el aviso; aquí solo el cierre manual.
pub fn render_notice(state: &AppState) -> Result<Option<Element>, JsValue> {
    let notice = match state.files.notice() {
        Some(n) => n,
        None => return Ok(None),
    };

    let (class, message) = match &notice {
        Notice::Success(message) => ("notice notice-success", message.clone()),
        Notice::Error(message) => ("notice notice-error", message.clone()),
    };

    let container = ElementBuilder::new("div")?.class(class).build();
    let text = ElementBuilder::new("span")?
        .class("notice-text")
        .text(&message)
        .build();
    let close_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("notice-close")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&close_btn, move |_| {
            state.files.clear_notice();
            state.notify_subscribers();
        })?;
    }

    append_child(&container, &text)?;
    append_child(&container, &close_btn)?;

    Ok(Some(container))
}
