//! Motor de flujos por pasos.
//!
//! Provee el engine genérico (`FlowEngine<S, E>`), su estado (`FlowState`),
//! el builder con typestate y el sincronizador con un contenedor paginado.

pub mod builder;
pub mod core;
pub mod pager_sync;

pub use builder::{EngineBuilder, EngineBuilderInit};
pub use self::core::{Advance, FlowEngine, FlowState};
pub use pager_sync::PagedViewSynchronizer;

pub use crate::event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
pub use crate::step::{StepContent, StepStatus};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepDefinition;
    use std::cell::Cell;
    use std::rc::Rc;

    fn three_steps() -> Vec<StepDefinition> {
        vec![StepDefinition::new("Bienvenida", "Empecemos", "Siguiente"),
             StepDefinition::new("Perfil", "Cuéntanos de ti", "Siguiente"),
             StepDefinition::new("Listo", "Todo preparado", "Comenzar"),]
    }

    #[test]
    fn test_flow_engine_builder_pattern() {
        let done = Rc::new(Cell::new(0));
        let flag = Rc::clone(&done);
        let mut steps = three_steps().into_iter();
        let engine = EngineBuilderInit::new().first_step(steps.next().unwrap())
                                             .extend_steps(steps)
                                             .on_complete(move || flag.set(flag.get() + 1))
                                             .build();

        assert_eq!(engine.len(), 3);
        assert_eq!(engine.advance(), Ok(Advance::Moved(1)));
        assert_eq!(engine.advance(), Ok(Advance::Moved(2)));
        assert_eq!(engine.advance(), Ok(Advance::Completed));
        assert_eq!(done.get(), 1);
        assert_eq!(engine.event_variants(), vec!["I", "A", "A", "C"]);
    }

    #[test]
    fn single_step_flow_completes_on_first_advance() {
        let engine = EngineBuilderInit::new().first_step(StepDefinition::new("Único", "", "Cerrar")).build();
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.advance(), Ok(Advance::Completed));
        assert!(engine.is_completed());
    }

    #[test]
    fn test_flow_engine_step_by_step() {
        let engine = FlowEngine::from_steps(three_steps()).expect("non-empty");
        assert_eq!(engine.current_step().main_title, "Bienvenida");
        engine.advance().unwrap();
        assert_eq!(engine.current_step().main_title, "Perfil");
        assert_eq!(engine.retreat(), Ok(true));
        assert_eq!(engine.retreat(), Ok(false));
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.event_variants(), vec!["I", "A", "R"]);
    }
}
