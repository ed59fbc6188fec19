//! Errores específicos del motor de flujos.
//!
//! Todas las variantes representan errores del llamador (defectos de
//! programación); el motor nunca intenta repararlos.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreFlowError {
    #[error("flow already completed")]
    FlowCompleted,
    #[error("invalid step index {index} (flow has {len} steps)")]
    InvalidStepIndex { index: usize, len: usize },
    #[error("a flow requires at least one step")]
    EmptySteps,
}
