//! Core FlowEngine implementation

use std::cell::{Cell, RefCell};
use std::fmt;

use log::{debug, warn};
use uuid::Uuid;

use crate::errors::CoreFlowError;
use crate::event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
use crate::hashing::definition_hash;
use crate::observe::{Observable, SubscriptionId};
use crate::step::{StepContent, StepStatus};

/// Estado del flujo: lista ordenada de steps (no vacía, fija tras la
/// construcción) y cursor publicado como `Observable`.
///
/// Invariante: `0 <= current_index < steps.len()` en todo momento.
pub struct FlowState<S> {
    steps: Vec<S>,
    current: Observable<usize>,
}

impl<S> FlowState<S> {
    pub fn new(steps: Vec<S>) -> Result<Self, CoreFlowError> {
        if steps.is_empty() {
            return Err(CoreFlowError::EmptySteps);
        }
        Ok(Self { steps,
                  current: Observable::new(0) })
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Siempre `false`; existe por simetría con `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current.get()
    }

    pub fn current_step(&self) -> &S {
        &self.steps[self.current_index()]
    }

    pub fn is_last(&self) -> bool {
        self.current_index() + 1 == self.steps.len()
    }

    pub fn status_of(&self, index: usize) -> StepStatus {
        StepStatus::relative_to(index, self.current_index())
    }
}

/// Resultado de `FlowEngine::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// El cursor avanzó al índice indicado.
    Moved(usize),
    /// Se estaba en el último step: se invocó el callback de completado.
    Completed,
}

type CompletionCallback = Box<dyn FnOnce()>;

/// Motor de navegación lineal sobre una lista fija de steps.
///
/// Todas las operaciones toman `&self`: el engine suele compartirse vía `Rc`
/// entre el host y el `PagedViewSynchronizer`, y los suscriptores pueden
/// volver a invocar el engine mientras reciben una notificación.
pub struct FlowEngine<S, E = InMemoryEventStore>
    where E: EventStore
{
    flow_id: Uuid,
    definition_hash: String,
    state: FlowState<S>,
    on_complete: RefCell<Option<CompletionCallback>>,
    completed: Cell<bool>,
    event_store: RefCell<E>,
}

impl<S: StepContent> FlowEngine<S, InMemoryEventStore> {
    /// Crea un engine con journal en memoria. Falla con `EmptySteps` si la
    /// lista está vacía.
    pub fn from_steps(steps: Vec<S>) -> Result<Self, CoreFlowError> {
        Self::from_steps_with_store(steps, InMemoryEventStore::default())
    }
}

impl<S: StepContent, E: EventStore> FlowEngine<S, E> {
    pub fn from_steps_with_store(steps: Vec<S>, event_store: E) -> Result<Self, CoreFlowError> {
        let state = FlowState::new(steps)?;
        Ok(Self::with_state(state, event_store, None))
    }

    pub(crate) fn with_state(state: FlowState<S>, event_store: E, on_complete: Option<CompletionCallback>) -> Self {
        let engine = Self { flow_id: Uuid::new_v4(),
                            definition_hash: definition_hash(state.steps()),
                            state,
                            on_complete: RefCell::new(on_complete),
                            completed: Cell::new(false),
                            event_store: RefCell::new(event_store) };
        engine.record(FlowEventKind::FlowInitialized { definition_hash: engine.definition_hash.clone(),
                                                       step_count: engine.state.len() });
        debug!("flow {} initialized with {} steps", engine.flow_id, engine.state.len());
        engine
    }

    /// Registra (o reemplaza) el callback de completado.
    pub fn set_on_complete<F>(&self, callback: F)
        where F: FnOnce() + 'static
    {
        *self.on_complete.borrow_mut() = Some(Box::new(callback));
    }

    /// Suscribe `listener` a los cambios de índice. No se entrega el índice
    /// inicial.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
        where F: Fn(usize) + 'static
    {
        self.state.current.subscribe(move |index| listener(*index))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.current.unsubscribe(id)
    }

    /// Avanza un step. En el último step invoca el callback de completado
    /// (una sola vez) sin mover el cursor.
    pub fn advance(&self) -> Result<Advance, CoreFlowError> {
        self.ensure_open("advance")?;
        let from = self.state.current_index();
        if !self.state.is_last() {
            let to = from + 1;
            self.move_cursor(FlowEventKind::StepAdvanced { from, to }, to);
            return Ok(Advance::Moved(to));
        }

        self.completed.set(true);
        self.record(FlowEventKind::FlowCompleted { last_index: from });
        debug!("flow {} completed at step {}", self.flow_id, from);
        // El callback se extrae antes de invocarlo: puede reentrar en el engine.
        let callback = self.on_complete.borrow_mut().take();
        match callback {
            Some(cb) => cb(),
            None => warn!("flow {} completed without a completion callback", self.flow_id),
        }
        Ok(Advance::Completed)
    }

    /// Retrocede un step. En el índice 0 no hace nada (ni notifica) y
    /// devuelve `Ok(false)`; el host decide si cerrar el flujo.
    pub fn retreat(&self) -> Result<bool, CoreFlowError> {
        self.ensure_open("retreat")?;
        let from = self.state.current_index();
        if from == 0 {
            return Ok(false);
        }
        let to = from - 1;
        self.move_cursor(FlowEventKind::StepRetreated { from, to }, to);
        Ok(true)
    }

    /// Escritura directa del cursor. Devuelve `Ok(false)` si `index` ya es
    /// el actual (no notifica).
    pub fn jump_to(&self, index: usize) -> Result<bool, CoreFlowError> {
        self.ensure_open("jump_to")?;
        let len = self.state.len();
        if index >= len {
            warn!("flow {} rejected jump to {} (len {})", self.flow_id, index, len);
            return Err(CoreFlowError::InvalidStepIndex { index, len });
        }
        let from = self.state.current_index();
        if from == index {
            return Ok(false);
        }
        self.move_cursor(FlowEventKind::StepJumped { from, to: index }, index);
        Ok(true)
    }

    fn ensure_open(&self, op: &str) -> Result<(), CoreFlowError> {
        if self.completed.get() {
            warn!("{op} on completed flow {}", self.flow_id);
            return Err(CoreFlowError::FlowCompleted);
        }
        Ok(())
    }

    fn move_cursor(&self, kind: FlowEventKind, to: usize) {
        debug!("flow {} {:?}", self.flow_id, kind);
        self.record(kind);
        self.state.current.set(to);
    }

    fn record(&self, kind: FlowEventKind) {
        self.event_store.borrow_mut().append_kind(self.flow_id, kind);
    }
}

impl<S, E: EventStore> FlowEngine<S, E> {
    pub fn flow_id(&self) -> Uuid {
        self.flow_id
    }

    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    pub fn state(&self) -> &FlowState<S> {
        &self.state
    }

    pub fn steps(&self) -> &[S] {
        self.state.steps()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn current_step(&self) -> &S {
        self.state.current_step()
    }

    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    /// Eventos del journal para este flujo.
    pub fn events(&self) -> Vec<FlowEvent> {
        self.event_store.borrow().list(self.flow_id)
    }

    /// Variante compacta de eventos (`I`, `A`, `R`, `J`, `C`).
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.kind.code()).collect()
    }
}

impl<S, E: EventStore> fmt::Debug for FlowEngine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowEngine")
         .field("flow_id", &self.flow_id)
         .field("len", &self.state.len())
         .field("current_index", &self.state.current_index())
         .field("completed", &self.completed.get())
         .finish()
    }
}
