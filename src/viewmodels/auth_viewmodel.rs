// ============================================================================
// AUTH VIEWMODEL - Lógica de autenticación y perfil
// ============================================================================
// Orquesta login/registro/logout y las operaciones de perfil contra el
// ApiClient, actualizando AuthState y la persistencia en localStorage.
// Las vistas solo llaman métodos de aquí.
// ============================================================================

use crate::models::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, StoredSession, UpdateProfileRequest,
};
use crate::services::{
    auth_service, ApiClient, ApiError,
};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::{schedule_notice_dismiss, FileViewModel};

/// ViewModel de autenticación - SOLO lógica de negocio
pub struct AuthViewModel {
    state: AppState,
}

impl AuthViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(self.state.auth.token())
    }

    /// Login contra el backend; si funciona, la sesión queda activa
    /// y persistida en localStorage
    pub async fn login(&self, email: String, password: String) {
        log::info!("🔐 Iniciando login...");
        self.state.auth.set_loading(true);
        self.state.auth.set_error(None);
        self.state.notify_subscribers();

        let request = LoginRequest { email, password };
        match self.client().login(&request).await {
            Ok(response) => {
                let user = response.user();
                auth_service::persist_session(&StoredSession {
                    token: response.token.clone(),
                    user: user.clone(),
                });
                self.state.auth.set_session(user, response.token);
                log::info!("✅ Login correcto");
                // Primera página del listado nada más entrar
                FileViewModel::new(self.state.clone()).fetch_files().await;
            }
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                let lang = self.state.language();
                self.state
                    .auth
                    .set_error(Some(credential_error_message(&e, "error_login", &lang)));
            }
        }

        self.state.auth.set_loading(false);
        self.state.notify_subscribers();
    }

    /// Registro de cuenta nueva; el backend devuelve sesión directamente
    pub async fn register(
        &self,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
    ) {
        log::info!("🔐 Registrando cuenta...");
        self.state.auth.set_loading(true);
        self.state.auth.set_error(None);
        self.state.notify_subscribers();

        let request = RegisterRequest {
            email,
            password,
            first_name,
            last_name,
        };
        match self.client().register(&request).await {
            Ok(response) => {
                let user = response.user();
                auth_service::persist_session(&StoredSession {
                    token: response.token.clone(),
                    user: user.clone(),
                });
                self.state.auth.set_session(user, response.token);
                self.state.set_show_register(false);
                log::info!("✅ Cuenta creada y sesión iniciada");
                FileViewModel::new(self.state.clone()).fetch_files().await;
            }
            Err(e) => {
                log::error!("❌ Error en registro: {}", e);
                let lang = self.state.language();
                self.state
                    .auth
                    .set_error(Some(credential_error_message(&e, "error_register", &lang)));
            }
        }

        self.state.auth.set_loading(false);
        self.state.notify_subscribers();
    }

    /// Refrescar el perfil desde el backend (GET /users/me).
    /// Se lanza al abrir los ajustes para no editar datos obsoletos.
    pub async fn refresh_profile(&self) {
        match self.client().get_current_user().await {
            Ok(user) => {
                if let Some(token) = self.state.auth.token() {
                    auth_service::persist_session(&StoredSession {
                        token,
                        user: user.clone(),
                    });
                }
                self.state.auth.set_user(user);
                self.state.notify_subscribers();
                log::info!("✅ Perfil refrescado desde el backend");
            }
            Err(e) => {
                log::warn!("⚠️ No se pudo refrescar el perfil: {}", e);
                if e.is_unauthorized() {
                    auth_service::invalidate_session(&self.state.auth);
                    self.state.notify_subscribers();
                }
            }
        }
    }

    /// Logout explícito: storage + estado + broadcast
    pub fn logout(&self) {
        auth_service::invalidate_session(&self.state.auth);
        self.state.set_show_settings(false);
        self.state.notify_subscribers();
    }

    /// Actualizar el perfil (PUT /users/me); el token no cambia
    pub async fn update_profile(&self, request: UpdateProfileRequest) {
        match self.client().update_profile(&request).await {
            Ok(user) => {
                // Mantener storage coherente con el perfil nuevo
                if let Some(token) = self.state.auth.token() {
                    auth_service::persist_session(&StoredSession {
                        token,
                        user: user.clone(),
                    });
                }
                self.state.auth.set_user(user);
                let lang = self.state.language();
                let seq = self.state.files.set_success(t("success_profile", &lang));
                schedule_notice_dismiss(&self.state, seq);
                log::info!("✅ Perfil actualizado");
            }
            Err(e) => self.handle_error(e, "error_profile"),
        }
        self.state.notify_subscribers();
    }

    /// Cambiar contraseña (POST /users/me/change-password)
    pub async fn change_password(&self, current_password: String, new_password: String) {
        let request = ChangePasswordRequest {
            current_password,
            new_password,
        };
        match self.client().change_password(&request).await {
            Ok(()) => {
                let lang = self.state.language();
                let seq = self.state.files.set_success(t("success_password", &lang));
                schedule_notice_dismiss(&self.state, seq);
                log::info!("✅ Contraseña cambiada");
            }
            Err(e) => self.handle_error(e, "error_password"),
        }
        self.state.notify_subscribers();
    }

    /// Error de una operación autenticada: un 401 invalida la sesión
    /// completa, el resto se publica como aviso
    fn handle_error(&self, error: ApiError, default_key: &str) {
        log::error!("❌ {}", error);
        let lang = self.state.language();
        let message = error.localized(default_key, &lang);
        if error.is_unauthorized() {
            auth_service::invalidate_session(&self.state.auth);
        }
        let seq = self.state.files.set_error(message);
        schedule_notice_dismiss(&self.state, seq);
    }
}

/// Mensaje para un fallo de login/registro. Un 401 aquí significa
/// credenciales inválidas, no sesión expirada, así que se mapea al
/// mensaje por defecto de la operación.
fn credential_error_message(error: &ApiError, default_key: &str, lang: &str) -> String {
    if error.is_unauthorized() {
        t(default_key, lang)
    } else {
        error.localized(default_key, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_login_maps_to_bad_credentials() {
        let err = ApiError::Unauthorized;
        assert_eq!(
            credential_error_message(&err, "error_login", "EN"),
            "Could not sign in"
        );
    }

    #[test]
    fn unauthorized_register_maps_to_register_error() {
        let err = ApiError::Unauthorized;
        assert_eq!(
            credential_error_message(&err, "error_register", "EN"),
            "Could not create the account"
        );
        assert_eq!(
            credential_error_message(&err, "error_register", "FR"),
            "Impossible de créer le compte"
        );
    }

    #[test]
    fn credential_errors_keep_server_message() {
        let err = ApiError::Server {
            status: 409,
            message: Some("El correo ya está registrado".to_string()),
        };
        assert_eq!(
            credential_error_message(&err, "error_register", "ES"),
            "El correo ya está registrado"
        );
    }
}
