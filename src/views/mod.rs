// ============================================================================
// VIEWS - Funciones de renderizado DOM (sin lógica de negocio)
// ============================================================================

pub mod app;
pub mod file_list;
pub mod file_upload;
pub mod login;
pub mod navbar;
pub mod notice;
pub mod register;
pub mod settings_popup;

pub use app::render_app;
pub use file_list::render_file_list;
pub use file_upload::render_file_upload;
pub use login::render_login;
pub use navbar::render_navbar;
pub use notice::render_notice;
pub use register::render_register;
pub use settings_popup::render_settings_popup;
