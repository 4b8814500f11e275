// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Registro de subscribers: patrón observer explícito para eventos de estado
/// (p.ej. sesión invalidada por un 401). Los callbacks se registran una vez
/// y se invocan en orden de registro.
#[derive(Clone, Default)]
pub struct Subscribers {
    callbacks: Rc<RefCell<Vec<Callback>>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self {
            callbacks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Registrar un callback
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Clonar antes de iterar: un callback puede registrar otros subscribers
        let callbacks: Vec<Callback> = self.callbacks.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notify_invokes_all_callbacks_in_order() {
        let subs = Subscribers::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let log = log.clone();
            subs.subscribe(move || log.borrow_mut().push(i));
        }
        subs.notify();
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn callback_can_subscribe_during_notify() {
        let subs = Subscribers::new();
        let count = Rc::new(Cell::new(0));

        {
            let subs_inner = subs.clone();
            let count = count.clone();
            subs.subscribe(move || {
                count.set(count.get() + 1);
                subs_inner.subscribe(|| {});
            });
        }
        subs.notify();
        assert_eq!(count.get(), 1);
        assert_eq!(subs.len(), 2);
    }
}
