//! Builder para `FlowEngine`.
//!
//! Typestate en dos etapas:
//! - `EngineBuilderInit<E>` sólo conoce la store de eventos; no puede
//!   construir un engine.
//! - `first_step` transiciona a `EngineBuilder<S, E>`, que ya contiene al
//!   menos un step y por eso `build` es infalible.
//!
//! ```ignore
//! let engine = EngineBuilderInit::new()
//!     .first_step(LoginStep::Email)
//!     .add_step(LoginStep::Password)
//!     .on_complete(|| println!("listo"))
//!     .build();
//! ```

use crate::engine::core::{FlowEngine, FlowState};
use crate::event::{EventStore, InMemoryEventStore};
use crate::step::StepContent;

/// Estado inicial del builder.
#[derive(Debug, Default)]
pub struct EngineBuilderInit<E: EventStore> {
    /// Store de eventos que usará el engine.
    pub event_store: E,
}

impl EngineBuilderInit<InMemoryEventStore> {
    /// Builder con journal en memoria.
    pub fn new() -> Self {
        Self { event_store: InMemoryEventStore::default() }
    }
}

impl<E: EventStore> EngineBuilderInit<E> {
    pub fn with_store(event_store: E) -> Self {
        Self { event_store }
    }

    /// Define el primer step del flujo y transiciona al builder completo.
    #[inline]
    pub fn first_step<S: StepContent>(self, step: S) -> EngineBuilder<S, E> {
        EngineBuilder { event_store: self.event_store,
                        steps: vec![step],
                        on_complete: None }
    }
}

/// Builder principal: acumula steps (al menos uno) y el callback de
/// completado.
pub struct EngineBuilder<S: StepContent, E: EventStore> {
    event_store: E,
    steps: Vec<S>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl<S: StepContent, E: EventStore> EngineBuilder<S, E> {
    #[inline]
    pub fn add_step(mut self, step: S) -> Self {
        self.steps.push(step);
        self
    }

    pub fn extend_steps<I>(mut self, steps: I) -> Self
        where I: IntoIterator<Item = S>
    {
        self.steps.extend(steps);
        self
    }

    pub fn on_complete<F>(mut self, callback: F) -> Self
        where F: FnOnce() + 'static
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Construye el `FlowEngine` con el cursor en el índice 0.
    pub fn build(self) -> FlowEngine<S, E> {
        let state = match FlowState::new(self.steps) {
            Ok(state) => state,
            Err(_) => unreachable!("EngineBuilder always holds the first step"),
        };
        FlowEngine::with_state(state, self.event_store, self.on_complete)
    }
}
