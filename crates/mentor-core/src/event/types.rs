//! Tipos de evento del flujo y estructura `FlowEvent`.
//!
//! Cada mutación del cursor de un `FlowEngine` deja un evento append-only en
//! su `EventStore`. El journal no participa en la lógica de navegación: es
//! trazabilidad de la sesión (qué pantallas recorrió el usuario y en qué
//! orden) y se descarta junto con el engine.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowEventKind {
    /// Primer evento de un `flow_id`: fija la identidad de la definición.
    FlowInitialized { definition_hash: String, step_count: usize },
    /// `advance()` movió el cursor hacia adelante.
    StepAdvanced { from: usize, to: usize },
    /// `retreat()` movió el cursor hacia atrás.
    StepRetreated { from: usize, to: usize },
    /// Escritura directa del índice (p.ej. swipe reportado por el pager).
    StepJumped { from: usize, to: usize },
    /// `advance()` en el último step: se invocó el callback de completado.
    FlowCompleted { last_index: usize },
}

impl FlowEventKind {
    /// Código compacto de una letra, útil para aserciones de secuencia.
    pub fn code(&self) -> &'static str {
        match self {
            FlowEventKind::FlowInitialized { .. } => "I",
            FlowEventKind::StepAdvanced { .. } => "A",
            FlowEventKind::StepRetreated { .. } => "R",
            FlowEventKind::StepJumped { .. } => "J",
            FlowEventKind::FlowCompleted { .. } => "C",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub flow_id: Uuid,
    pub kind: FlowEventKind,
    pub ts: DateTime<Utc>,
}
