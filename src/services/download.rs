// ============================================================================
// DOWNLOAD - Disparar el guardado de un blob en el navegador
// ============================================================================
// Los bytes ya descargados se envuelven en un Blob, se crea un object URL
// y se simula un click sobre un <a download>. Sin reintentos: un fallo de
// transporte es terminal para esa petición.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Guardar bytes como archivo local vía <a download> + object URL
pub fn trigger_browser_save(
    filename: &str,
    bytes: &[u8],
    content_type: Option<&str>,
) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = BlobPropertyBag::new();
    if let Some(content_type) = content_type {
        options.set_type(content_type);
    }

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    // Liberar el object URL una vez disparada la descarga
    Url::revoke_object_url(&url)?;

    log::info!("📥 Descarga disparada: {}", filename);
    Ok(())
}
