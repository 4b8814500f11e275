// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id};
use crate::services::auth_service;
use crate::state::AppState;
use crate::viewmodels::FileViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        state.load_preferences();

        // Restaurar sesión desde storage si existe
        if let Some(session) = auth_service::load_persisted_session() {
            log::info!("💾 Sesión encontrada en storage, restaurando...");
            state.auth.set_session(session.user, session.token);

            // Primera página del listado nada más restaurar
            let state_clone = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                FileViewModel::new(state_clone).fetch_files().await;
            });
        }

        // Cuando la sesión se invalida (logout o 401), re-renderizar
        state.auth.on_session_cleared(|| {
            log::info!("👋 Sesión cerrada, volviendo al login");
        });

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Timeout(0) para batchear múltiples updates en el mismo tick
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        // Limpiar contenido anterior
        self.root.set_inner_html("");

        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
