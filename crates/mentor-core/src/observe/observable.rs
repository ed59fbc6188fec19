//! `Observable<T>`: contenedor mutable que entrega el nuevo valor a todos sus
//! suscriptores en cada escritura.
//!
//! Modelo de ejecución:
//! - Un único hilo de eventos; la entrega es síncrona y ocurre antes de que
//!   `set` retorne.
//! - Reentrante: un suscriptor puede escribir de nuevo en el mismo
//!   `Observable` (o suscribirse/desuscribirse) durante la notificación. Para
//!   ello ningún `borrow` interno se mantiene mientras se ejecutan callbacks;
//!   se notifica sobre una instantánea de la lista de suscriptores.
//! - La suscripción no entrega el valor actual: sólo los cambios posteriores.
//! - El host es responsable de desuscribirse en el teardown.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Identificador opaco devuelto por `subscribe`.
pub type SubscriptionId = u64;

type Listener<T> = Rc<dyn Fn(&T)>;

pub struct Observable<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
    next_id: Cell<SubscriptionId>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self { value: RefCell::new(initial),
               listeners: RefCell::new(Vec::new()),
               next_id: Cell::new(0) }
    }

    /// Copia del valor actual.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Acceso de sólo lectura sin clonar. `f` no debe escribir en este
    /// mismo observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Reemplaza el valor y notifica a todos los suscriptores.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value.clone();
        self.notify(&value);
    }

    /// Modifica el valor en sitio y notifica con el resultado.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut current = self.value.borrow_mut();
            f(&mut current);
            current.clone()
        };
        self.notify(&snapshot);
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
        where F: Fn(&T) + 'static
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Devuelve `false` si el id no estaba registrado.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self.listeners
                                             .borrow()
                                             .iter()
                                             .map(|(_, l)| Rc::clone(l))
                                             .collect();
        for listener in snapshot {
            listener(value);
        }
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
         .field("value", &self.value.borrow())
         .field("subscribers", &self.listeners.borrow().len())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_does_not_replay_current_value() {
        let obs = Observable::new(3usize);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        obs.subscribe(move |v| sink.borrow_mut().push(*v));
        assert!(seen.borrow().is_empty());
        obs.set(4);
        obs.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![4, 5]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let obs = Observable::new(String::new());
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = obs.subscribe(move |_| counter.set(counter.get() + 1));
        obs.set("a".into());
        assert!(obs.unsubscribe(id));
        assert!(!obs.unsubscribe(id));
        obs.set("b".into());
        assert_eq!(hits.get(), 1);
        assert_eq!(obs.subscriber_count(), 0);
    }

    #[test]
    fn listener_may_write_back_reentrantly() {
        let obs = Rc::new(Observable::new(0i32));
        let inner = Rc::downgrade(&obs);
        obs.subscribe(move |v| {
               // Limita el valor a 10 reescribiendo desde el callback
               if *v > 10 {
                   if let Some(o) = inner.upgrade() {
                       o.set(10);
                   }
               }
           });
        obs.set(42);
        assert_eq!(obs.get(), 10);
    }
}
