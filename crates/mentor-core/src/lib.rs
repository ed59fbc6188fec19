//! mentor-core: motor de flujos por pasos (onboarding lineal)
//!
//! Un único `FlowEngine<S>` genérico sobre el tipo de step reemplaza a los
//! motores duplicados de cada flujo. El estado del cursor se publica con
//! `Observable` y se sincroniza con un contenedor paginado mediante
//! `PagedViewSynchronizer`.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod observe;
pub mod step;
pub mod view;

pub use engine::{Advance, EngineBuilder, EngineBuilderInit, FlowEngine, FlowState, PagedViewSynchronizer};
pub use errors::CoreFlowError;
pub use event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
pub use observe::{Observable, SubscriptionId};
pub use step::{StepContent, StepDefinition, StepStatus};
pub use view::{PagedContainer, StepRenderer};
