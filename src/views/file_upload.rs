// ============================================================================
// FILE UPLOAD VIEW
// ============================================================================
// El input limita los tipos con accept, pero la validación real del
// content-type ocurre al seleccionar: un tipo no soportado se rechaza
// inline y nunca llega a almacenarse ni a generar tráfico de red.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_change, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::file_viewmodel::selection_error;
use crate::viewmodels::FileViewModel;

/// Renderizar panel de subida con barra de progreso
pub fn render_file_upload(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let panel = ElementBuilder::new("section")?.class("upload-panel").build();
    let title = ElementBuilder::new("h2")?
        .text(&t("upload_title", &lang))
        .build();
    append_child(&panel, &title)?;

    let selected: Rc<RefCell<Option<web_sys::File>>> = Rc::new(RefCell::new(None));

    let controls = ElementBuilder::new("div")?.class("upload-controls").build();

    let file_input = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("id", "upload-input")?
        .attr("accept", "application/pdf,image/png,image/jpeg")?
        .class("upload-input")
        .build();

    let file_label = ElementBuilder::new("span")?
        .class("upload-filename")
        .text(&t("no_file_selected", &lang))
        .build();

    {
        let selected = selected.clone();
        let file_label = file_label.clone();
        let state = state.clone();
        on_change(&file_input, move |e| {
            let file = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let file = match file {
                Some(f) => f,
                None => return,
            };
            // Tipo no soportado: se rechaza la selección aquí mismo, con
            // el mensaje inline en el panel y sin tocar ningún store
            if let Some(message) = selection_error(&file.type_(), &state.language()) {
                log::warn!("⚠️ Selección rechazada: {}", file.type_());
                file_label.set_text_content(Some(&message));
                *selected.borrow_mut() = None;
                return;
            }
            file_label.set_text_content(Some(&file.name()));
            *selected.borrow_mut() = Some(file);
        })?;
    }

    let upload_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text(&t("upload_button", &lang))
        .build();
    // Una subida a la vez
    if state.files.upload_progress().is_some() {
        upload_btn.set_attribute("disabled", "true")?;
    }
    {
        let selected = selected.clone();
        let state = state.clone();
        on_click(&upload_btn, move |_| {
            let file = match selected.borrow_mut().take() {
                Some(f) => f,
                None => return,
            };
            let state = state.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.upload(file).await;
            });
        })?;
    }

    append_child(&controls, &file_input)?;
    append_child(&controls, &file_label)?;
    append_child(&controls, &upload_btn)?;
    append_child(&panel, &controls)?;

    // Barra de progreso mientras hay subida en curso
    if let Some(progress) = state.files.upload_progress() {
        let bar_container = ElementBuilder::new("div")?.class("progress-bar").build();
        let bar_fill = ElementBuilder::new("div")?
            .class("progress-fill")
            .attr("style", &format!("width: {}%", progress.progress))?
            .build();
        let bar_label = ElementBuilder::new("span")?
            .class("progress-label")
            .text(&format!("{}%", progress.progress))
            .build();
        append_child(&bar_container, &bar_fill)?;
        append_child(&bar_container, &bar_label)?;
        append_child(&panel, &bar_container)?;
    }

    Ok(panel)
}
