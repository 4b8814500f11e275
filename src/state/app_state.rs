// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AuthState, FileState, Subscribers};
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_LANGUAGE};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub files: FileState,

    // UI State
    pub language: Rc<RefCell<String>>,
    pub show_register: Rc<RefCell<bool>>,
    pub show_settings: Rc<RefCell<bool>>,

    // Reactivity: callbacks para notificar cambios de estado
    change_subscribers: Subscribers,
}

impl AppState {
    /// Crear nuevo estado de aplicación (sin tocar el navegador;
    /// las preferencias se cargan aparte con load_preferences)
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            files: FileState::new(),
            language: Rc::new(RefCell::new("FR".to_string())),
            show_register: Rc::new(RefCell::new(false)),
            show_settings: Rc::new(RefCell::new(false)),
            change_subscribers: Subscribers::new(),
        }
    }

    /// Cargar preferencias persistidas desde localStorage
    pub fn load_preferences(&self) {
        if let Some(lang) = load_from_storage::<String>(STORAGE_KEY_LANGUAGE) {
            *self.language.borrow_mut() = lang;
        }
    }

    pub fn language(&self) -> String {
        self.language.borrow().clone()
    }

    /// Establecer idioma y persistirlo
    pub fn set_language(&self, lang: String) {
        *self.language.borrow_mut() = lang.clone();
        if let Err(e) = save_to_storage(STORAGE_KEY_LANGUAGE, &lang) {
            log::warn!("⚠️ Error guardando preferencia de idioma: {}", e);
        }
        self.notify_subscribers();
    }

    pub fn set_show_register(&self, show: bool) {
        *self.show_register.borrow_mut() = show;
        self.notify_subscribers();
    }

    pub fn set_show_settings(&self, show: bool) {
        *self.show_settings.borrow_mut() = show;
        self.notify_subscribers();
    }

    /// Suscribirse a cambios de estado (la app re-renderiza en respuesta)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.subscribe(callback);
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        self.change_subscribers.notify();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn defaults() {
        let state = AppState::new();
        assert_eq!(state.language(), "FR");
        assert!(!*state.show_register.borrow());
        assert!(!state.auth.is_authenticated());
        assert!(state.files.files().is_empty());
    }

    #[test]
    fn subscribers_notified_on_toggle() {
        let state = AppState::new();
        let count = Rc::new(Cell::new(0));
        {
            let count = count.clone();
            state.subscribe_to_changes(move || count.set(count.get() + 1));
        }
        state.set_show_register(true);
        state.set_show_settings(true);
        assert_eq!(count.get(), 2);
        assert!(*state.show_register.borrow());
    }
}
