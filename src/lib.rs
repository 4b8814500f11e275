// ============================================================================
// DOSYAHUB - GESTOR DE ARCHIVOS (FRONTEND MVVM ESTRICTO, RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica de negocio
// - Services: SOLO comunicación API + storage
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::App;
use crate::utils::EVENT_AUTH_LOGOUT;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::default());
    log::info!("🚀 DosyaHub - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Escuchar el evento global de logout para re-renderizar.
    // Este listener solo se registra UNA VEZ en init(), así que es seguro.
    if let Some(win) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("🔄 Evento de logout recibido, re-renderizando...");
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback(EVENT_AUTH_LOGOUT, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-renderizar la app (re-render completo)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
