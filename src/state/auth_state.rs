// ============================================================================
// AUTH STATE - Estado de la sesión de usuario
// ============================================================================
// Ciclo de vida: Absent → Authenticated → Cleared.
// La limpieza (logout o 401) notifica a los subscribers registrados.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;
use crate::state::reactivity::Subscribers;

/// Ciclo de vida de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLifecycle {
    /// Nunca hubo sesión en esta ejecución
    Absent,
    /// Sesión activa con token válido
    Authenticated,
    /// Sesión cerrada (logout explícito o rechazo 401 del backend)
    Cleared,
}

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    user: Rc<RefCell<Option<User>>>,
    token: Rc<RefCell<Option<String>>>,
    lifecycle: Rc<RefCell<SessionLifecycle>>,
    loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
    cleared_subscribers: Subscribers,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            token: Rc::new(RefCell::new(None)),
            lifecycle: Rc::new(RefCell::new(SessionLifecycle::Absent)),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            cleared_subscribers: Subscribers::new(),
        }
    }

    /// Establecer sesión autenticada (login, registro o restauración desde storage)
    pub fn set_session(&self, user: User, token: String) {
        *self.user.borrow_mut() = Some(user);
        *self.token.borrow_mut() = Some(token);
        *self.lifecycle.borrow_mut() = SessionLifecycle::Authenticated;
        *self.error.borrow_mut() = None;
    }

    /// Limpiar la sesión y notificar a los subscribers.
    /// Se usa tanto para logout explícito como para el rechazo 401.
    pub fn clear_session(&self) {
        *self.user.borrow_mut() = None;
        *self.token.borrow_mut() = None;
        *self.lifecycle.borrow_mut() = SessionLifecycle::Cleared;
        self.cleared_subscribers.notify();
    }

    /// Suscribirse a la limpieza de sesión (logout o 401)
    pub fn on_session_cleared<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.cleared_subscribers.subscribe(callback);
    }

    pub fn is_authenticated(&self) -> bool {
        *self.lifecycle.borrow() == SessionLifecycle::Authenticated
    }

    pub fn lifecycle(&self) -> SessionLifecycle {
        *self.lifecycle.borrow()
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// Actualizar solo el perfil (PUT /users/me), el token no cambia
    pub fn set_user(&self, user: User) {
        *self.user.borrow_mut() = Some(user);
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn test_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[test]
    fn lifecycle_absent_to_authenticated_to_cleared() {
        let state = AuthState::new();
        assert_eq!(state.lifecycle(), SessionLifecycle::Absent);
        assert!(!state.is_authenticated());
        assert!(state.token().is_none());

        state.set_session(test_user(), "jwt-abc".to_string());
        assert_eq!(state.lifecycle(), SessionLifecycle::Authenticated);
        assert!(state.is_authenticated());
        assert_eq!(state.token().as_deref(), Some("jwt-abc"));

        state.clear_session();
        assert_eq!(state.lifecycle(), SessionLifecycle::Cleared);
        assert!(!state.is_authenticated());
        assert!(state.token().is_none());
        assert!(state.user().is_none());
    }

    #[test]
    fn clear_session_notifies_subscribers() {
        let state = AuthState::new();
        let notified = Rc::new(Cell::new(0));
        {
            let notified = notified.clone();
            state.on_session_cleared(move || notified.set(notified.get() + 1));
        }

        state.set_session(test_user(), "jwt-abc".to_string());
        assert_eq!(notified.get(), 0);

        state.clear_session();
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn set_session_resets_previous_error() {
        let state = AuthState::new();
        state.set_error(Some("Connexion impossible".to_string()));
        state.set_session(test_user(), "jwt-abc".to_string());
        assert!(state.error().is_none());
    }

    #[test]
    fn set_user_keeps_token() {
        let state = AuthState::new();
        state.set_session(test_user(), "jwt-abc".to_string());

        let mut updated = test_user();
        updated.first_name = "Grace".to_string();
        state.set_user(updated);

        assert_eq!(state.token().as_deref(), Some("jwt-abc"));
        assert_eq!(state.user().unwrap().first_name, "Grace");
    }

    #[test]
    fn profile_refresh_replaces_stale_fields_without_touching_session() {
        let state = AuthState::new();
        state.set_session(test_user(), "jwt-abc".to_string());

        // El backend devuelve un perfil más nuevo que el persistido
        let refreshed = User {
            id: "u-1".to_string(),
            email: "ada.lovelace@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "King-Noel".to_string(),
        };
        state.set_user(refreshed);

        let user = state.user().unwrap();
        assert_eq!(user.email, "ada.lovelace@example.com");
        assert_eq!(user.last_name, "King-Noel");
        assert_eq!(state.lifecycle(), SessionLifecycle::Authenticated);
        assert_eq!(state.token().as_deref(), Some("jwt-abc"));
    }
}
