// ============================================================================
// VIEWMODELS - Lógica de negocio entre vistas y servicios
// ============================================================================

pub mod auth_viewmodel;
pub mod file_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use file_viewmodel::FileViewModel;

use gloo_timers::callback::Timeout;

use crate::config::CONFIG;
use crate::state::AppState;

/// Programar el auto-descarte de un aviso. El token de secuencia evita
/// que un timer obsoleto borre un aviso publicado después.
pub(crate) fn schedule_notice_dismiss(state: &AppState, seq: u64) {
    let state = state.clone();
    Timeout::new(CONFIG.notice_timeout_ms, move || {
        state.files.clear_notice_if(seq);
        state.notify_subscribers();
    })
    .forget();
}
