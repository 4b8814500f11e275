// ============================================================================
// UPLOAD SERVICE - Subida multipart con progreso (XmlHttpRequest)
// ============================================================================
// gloo-net (fetch) no expone eventos de progreso de subida, así que esta
// única ruta usa XmlHttpRequest directamente. El callback de progreso recibe
// porcentajes monótonos no decrecientes acotados a [0,100] (ProgressTracker)
// y termina en 100 al completar, o antes si falla.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::models::{FileUploadResponse, ProgressTracker, UploadProgress};
use crate::services::api_client::{bearer_header, extract_server_message, ApiError};

/// Subir un archivo como multipart/form-data con callback de progreso
pub async fn upload_with_progress<F>(
    base_url: &str,
    token: Option<&str>,
    file: &File,
    on_progress: F,
) -> Result<FileUploadResponse, ApiError>
where
    F: FnMut(UploadProgress) + 'static,
{
    let url = format!("{}/files/upload", base_url);

    let xhr = XmlHttpRequest::new().map_err(|_| ApiError::Network("XHR init".to_string()))?;
    xhr.open_with_async("POST", &url, true)
        .map_err(|_| ApiError::Network("XHR open".to_string()))?;

    // Inyección del bearer token (el Content-Type lo fija el navegador
    // con el boundary del multipart)
    if let Some(header) = bearer_header(token) {
        xhr.set_request_header("Authorization", &header)
            .map_err(|_| ApiError::Network("XHR header".to_string()))?;
    }

    let form = FormData::new().map_err(|_| ApiError::Network("FormData init".to_string()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("FormData append".to_string()))?;

    // Progreso monótono vía tracker compartido con el closure del evento
    let tracker = Rc::new(RefCell::new(ProgressTracker::new()));
    let on_progress = Rc::new(RefCell::new(on_progress));
    {
        let tracker = tracker.clone();
        let on_progress = on_progress.clone();
        let progress_closure = Closure::wrap(Box::new(move |event: ProgressEvent| {
            if event.length_computable() {
                let progress = tracker.borrow_mut().update(event.loaded(), event.total());
                (on_progress.borrow_mut())(progress);
            }
        }) as Box<dyn FnMut(ProgressEvent)>);

        let upload = xhr
            .upload()
            .map_err(|_| ApiError::Network("XHR upload target".to_string()))?;
        upload.set_onprogress(Some(progress_closure.as_ref().unchecked_ref()));
        // El closure debe sobrevivir hasta que termine la subida
        progress_closure.forget();
    }

    // Completar/fallar el XHR como una Promise para poder await-earlo
    let xhr_for_promise = xhr.clone();
    let promise = Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let onload = Closure::once(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        xhr_for_promise.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("network error"));
        });
        xhr_for_promise.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    });

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|_| ApiError::Network("XHR send".to_string()))?;

    JsFuture::from(promise)
        .await
        .map_err(|_| ApiError::Network("upload failed".to_string()))?;

    let status = xhr.status().unwrap_or(0);
    let body = xhr.response_text().ok().flatten().unwrap_or_default();

    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Server {
            status,
            message: extract_server_message(&body),
        });
    }

    let response: FileUploadResponse =
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

    // El 100 final es explícito, incluso si el último evento de progreso
    // se perdió o el archivo era de cero bytes
    let final_progress = tracker.borrow_mut().complete(response.size as f64);
    (on_progress.borrow_mut())(final_progress);

    log::info!("✅ Archivo subido: {} ({} bytes)", response.original_name, response.size);
    Ok(response)
}
