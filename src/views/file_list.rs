// ============================================================================
// FILE LIST VIEW - Tabla paginada con búsqueda y orden
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::dom::{append_child, on_change, on_click, on_keydown, ElementBuilder};
use crate::models::FileMetadata;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::utils::{format_file_size, format_upload_date};
use crate::viewmodels::FileViewModel;

/// Renderizar el listado de archivos completo
pub fn render_file_list(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();

    let section = ElementBuilder::new("section")?.class("file-list").build();
    let title = ElementBuilder::new("h2")?.text(&t("my_files", &lang)).build();
    append_child(&section, &title)?;

    append_child(&section, &render_toolbar(state)?)?;

    if state.files.is_loading() {
        let loading = ElementBuilder::new("div")?
            .class("file-list-loading")
            .text(&t("loading_files", &lang))
            .build();
        append_child(&section, &loading)?;
        return Ok(section);
    }

    let files = state.files.files();
    if files.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("file-list-empty")
            .text(&t("no_files", &lang))
            .build();
        append_child(&section, &empty)?;
        return Ok(section);
    }

    append_child(&section, &render_table(state, &files)?)?;
    append_child(&section, &render_pagination(state)?)?;

    Ok(section)
}

/// Barra de búsqueda y selector de orden
fn render_toolbar(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let query = state.files.query();

    let toolbar = ElementBuilder::new("div")?.class("file-toolbar").build();

    let search_input = ElementBuilder::new("input")?
        .attr("type", "search")?
        .attr("placeholder", &t("search_placeholder", &lang))?
        .attr("value", query.search.as_deref().unwrap_or(""))?
        .class("search-input")
        .build();
    {
        let state = state.clone();
        on_keydown(&search_input, move |e| {
            if e.key() != "Enter" {
                return;
            }
            let term = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            let state = state.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.search(term).await;
            });
        })?;
    }
    append_child(&toolbar, &search_input)?;

    let sort_select = ElementBuilder::new("select")?.class("sort-select").build();
    let options = [
        ("uploadDate,desc", t("sort_date_desc", &lang)),
        ("uploadDate,asc", t("sort_date_asc", &lang)),
        ("originalName,asc", t("sort_name", &lang)),
        ("size,desc", t("sort_size", &lang)),
    ];
    let current_sort = query.sort.as_deref().unwrap_or("uploadDate,desc");
    for (value, label) in &options {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .text(label)
            .build();
        if *value == current_sort {
            option.set_attribute("selected", "true")?;
        }
        append_child(&sort_select, &option)?;
    }
    {
        let state = state.clone();
        on_change(&sort_select, move |e| {
            let sort = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value())
                .unwrap_or_default();
            let state = state.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.sort_by(sort).await;
            });
        })?;
    }
    append_child(&toolbar, &sort_select)?;

    Ok(toolbar)
}

/// Tabla con una fila por archivo
fn render_table(state: &AppState, files: &[FileMetadata]) -> Result<Element, JsValue> {
    let lang = state.language();

    let table = ElementBuilder::new("table")?.class("file-table").build();

    let thead = ElementBuilder::new("thead")?.build();
    let header_row = ElementBuilder::new("tr")?.build();
    for key in ["col_name", "col_size", "col_date", "col_actions"] {
        let th = ElementBuilder::new("th")?.text(&t(key, &lang)).build();
        append_child(&header_row, &th)?;
    }
    append_child(&thead, &header_row)?;
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for file in files {
        append_child(&tbody, &render_row(state, file)?)?;
    }
    append_child(&table, &tbody)?;

    Ok(table)
}

fn render_row(state: &AppState, file: &FileMetadata) -> Result<Element, JsValue> {
    let lang = state.language();

    let row = ElementBuilder::new("tr")?.class("file-row").build();

    let name_cell = ElementBuilder::new("td")?.class("file-name").build();
    let name_text = ElementBuilder::new("span")?.text(&file.original_name).build();
    append_child(&name_cell, &name_text)?;
    if file.is_public {
        let badge = ElementBuilder::new("span")?
            .class("badge-public")
            .text(&t("public", &lang))
            .build();
        append_child(&name_cell, &badge)?;
    }
    append_child(&row, &name_cell)?;

    let size_cell = ElementBuilder::new("td")?
        .text(&format_file_size(file.size))
        .build();
    append_child(&row, &size_cell)?;

    let date_cell = ElementBuilder::new("td")?
        .text(&format_upload_date(&file.upload_date))
        .build();
    append_child(&row, &date_cell)?;

    let actions = ElementBuilder::new("td")?.class("file-actions").build();

    // Descargar
    let download_btn = action_button("⬇️", &t("download", &lang))?;
    {
        let state = state.clone();
        let filename = file.filename.clone();
        on_click(&download_btn, move |_| {
            let state = state.clone();
            let filename = filename.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.download(filename).await;
            });
        })?;
    }
    append_child(&actions, &download_btn)?;

    // Renombrar (prompt nativo)
    let rename_btn = action_button("✏️", &t("rename", &lang))?;
    {
        let state = state.clone();
        let file_id = file.id.clone();
        let original_name = file.original_name.clone();
        on_click(&rename_btn, move |_| {
            let lang = state.language();
            let new_name = web_sys::window()
                .and_then(|win| {
                    win.prompt_with_message_and_default(&t("rename_prompt", &lang), &original_name)
                        .ok()
                        .flatten()
                })
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty());
            let new_name = match new_name {
                Some(name) => name,
                None => return,
            };
            let state = state.clone();
            let file_id = file_id.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.rename(file_id, new_name).await;
            });
        })?;
    }
    append_child(&actions, &rename_btn)?;

    // Compartir / dejar de compartir
    let share_label = if file.is_public {
        t("unshare", &lang)
    } else {
        t("share", &lang)
    };
    let share_btn = action_button("🔗", &share_label)?;
    {
        let state = state.clone();
        let file_id = file.id.clone();
        let make_public = !file.is_public;
        on_click(&share_btn, move |_| {
            let state = state.clone();
            let file_id = file_id.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.set_public(file_id, make_public).await;
            });
        })?;
    }
    append_child(&actions, &share_btn)?;

    // Borrar (con confirmación nativa)
    let delete_btn = action_button("🗑️", &t("delete", &lang))?;
    {
        let state = state.clone();
        let filename = file.filename.clone();
        let original_name = file.original_name.clone();
        on_click(&delete_btn, move |_| {
            let lang = state.language();
            let confirmed = web_sys::window()
                .and_then(|win| {
                    win.confirm_with_message(&format!(
                        "{} {}?",
                        t("delete", &lang),
                        original_name
                    ))
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let state = state.clone();
            let filename = filename.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.delete(filename).await;
            });
        })?;
    }
    append_child(&actions, &delete_btn)?;

    append_child(&row, &actions)?;
    Ok(row)
}

fn action_button(icon: &str, title: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-icon")
        .attr("title", title)?
        .text(icon)
        .build())
}

/// Paginación: anterior / página x de y / siguiente
fn render_pagination(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.language();
    let page = state.files.query().page;
    let total_pages = state.files.total_pages();

    let container = ElementBuilder::new("div")?.class("pagination").build();

    let prev_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-page")
        .text(&t("previous", &lang))
        .build();
    if page == 0 {
        prev_btn.set_attribute("disabled", "true")?;
    } else {
        let state = state.clone();
        on_click(&prev_btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.go_to_page(page - 1).await;
            });
        })?;
    }
    append_child(&container, &prev_btn)?;

    let label = ElementBuilder::new("span")?
        .class("page-label")
        .text(&format!("{} / {}", page + 1, total_pages.max(1)))
        .build();
    append_child(&container, &label)?;

    let next_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-page")
        .text(&t("next", &lang))
        .build();
    if page + 1 >= total_pages {
        next_btn.set_attribute("disabled", "true")?;
    } else {
        let state = state.clone();
        on_click(&next_btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let vm = FileViewModel::new(state);
                vm.go_to_page(page + 1).await;
            });
        })?;
    }
    append_child(&container, &next_btn)?;

    Ok(container)
}
