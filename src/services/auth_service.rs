// ============================================================================
// AUTH SERVICE - Persistencia de sesión y broadcast de logout
// ============================================================================
// La sesión (token + perfil) vive en localStorage y se restaura al arrancar.
// Cuando el backend rechaza la sesión (401) o el usuario cierra sesión, la
// invalidación limpia storage, resetea el estado (notificando a los
// observers registrados) y dispara el evento global auth:logout para que
// el loop de render reaccione.
// ============================================================================

use crate::models::StoredSession;
use crate::state::AuthState;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, EVENT_AUTH_LOGOUT, STORAGE_KEY_SESSION};

/// Guardar la sesión en localStorage
pub fn persist_session(session: &StoredSession) {
    if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, session) {
        log::error!("❌ Error guardando sesión en storage: {}", e);
    } else {
        log::info!("💾 Sesión guardada en storage");
    }
}

/// Cargar la sesión persistida (None si no hay o no parsea)
pub fn load_persisted_session() -> Option<StoredSession> {
    load_from_storage::<StoredSession>(STORAGE_KEY_SESSION)
}

/// Eliminar la sesión de localStorage
pub fn clear_persisted_session() {
    if let Err(e) = remove_from_storage(STORAGE_KEY_SESSION) {
        log::warn!("⚠️ Error limpiando sesión de storage: {}", e);
    }
}

/// Disparar el evento global de logout en window
pub fn broadcast_logout() {
    if let Some(win) = web_sys::window() {
        if let Ok(event) = web_sys::CustomEvent::new(EVENT_AUTH_LOGOUT) {
            let _ = win.dispatch_event(&event);
        }
    }
}

/// Invalidación completa de sesión: storage + estado + broadcast.
/// Se usa en el logout explícito y en cualquier 401 del backend.
pub fn invalidate_session(auth: &AuthState) {
    log::info!("👋 Invalidando sesión");
    clear_persisted_session();
    // clear_session notifica a los subscribers on_session_cleared
    auth.clear_session();
    broadcast_logout();
}
