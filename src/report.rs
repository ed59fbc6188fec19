//! Instantáneas serializables de una sesión: estado y journal de un flujo,
//! y el contenido de la agenda. Útiles para logs de soporte y para la demo.

use chrono::{DateTime, Utc};
use mentor_core::{EventStore, FlowEngine, FlowEvent};
use mentor_schedule::{ScheduleSession, ScheduleSlot};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowReport {
    pub flow_id: Uuid,
    pub definition_hash: String,
    pub step_count: usize,
    pub current_index: usize,
    pub completed: bool,
    /// Secuencia compacta de eventos, p.ej. `"IAARC"`.
    pub trace: String,
    pub events: Vec<FlowEvent>,
}

impl FlowReport {
    pub fn from_engine<S, E: EventStore>(engine: &FlowEngine<S, E>) -> Self {
        Self { flow_id: engine.flow_id(),
               definition_hash: engine.definition_hash().to_string(),
               step_count: engine.len(),
               current_index: engine.current_index(),
               completed: engine.is_completed(),
               trace: engine.event_variants().concat(),
               events: engine.events() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub generated_at: DateTime<Utc>,
    pub slots: Vec<ScheduleSlot>,
    pub summaries: Vec<String>,
}

impl ScheduleReport {
    pub fn from_session(session: &ScheduleSession, placeholder: &str) -> Self {
        Self { generated_at: Utc::now(),
               slots: session.slots().slots().to_vec(),
               summaries: session.summaries(placeholder) }
    }
}

/// JSON legible de cualquier reporte.
pub fn to_json<T: Serialize>(report: &T) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(report)?)
}
