// ============================================================================
// CONSTANTES - Claves de storage y eventos globales
// ============================================================================

/// Clave de localStorage para la sesión persistida (token + usuario)
pub const STORAGE_KEY_SESSION: &str = "dosyahub_session";

/// Clave de localStorage para la preferencia de idioma
pub const STORAGE_KEY_LANGUAGE: &str = "dosyahub_language";

/// Evento global disparado cuando el backend rechaza la sesión (401)
/// o el usuario cierra sesión; el listener en lib.rs re-renderiza la app
pub const EVENT_AUTH_LOGOUT: &str = "auth:logout";
