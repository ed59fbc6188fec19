use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{FlowEvent, FlowEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, flow_id: Uuid, kind: FlowEventKind) -> FlowEvent;
    /// Lista eventos de un flujo (orden ascendente por seq).
    fn list(&self, flow_id: Uuid) -> Vec<FlowEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: HashMap<Uuid, Vec<FlowEvent>>,
}

impl InMemoryEventStore {
    pub fn flow_count(&self) -> usize {
        self.inner.len()
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, flow_id: Uuid, kind: FlowEventKind) -> FlowEvent {
        let log = self.inner.entry(flow_id).or_default();
        let ev = FlowEvent { seq: log.len() as u64,
                             flow_id,
                             kind,
                             ts: Utc::now() };
        log.push(ev.clone());
        ev
    }

    fn list(&self, flow_id: Uuid) -> Vec<FlowEvent> {
        self.inner.get(&flow_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_per_flow() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.append_kind(a, FlowEventKind::StepAdvanced { from: 0, to: 1 });
        store.append_kind(a, FlowEventKind::StepAdvanced { from: 1, to: 2 });
        let first_b = store.append_kind(b, FlowEventKind::StepRetreated { from: 1, to: 0 });
        assert_eq!(first_b.seq, 0);
        assert_eq!(store.list(a).iter().map(|e| e.seq).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(store.flow_count(), 2);
        assert!(store.list(Uuid::new_v4()).is_empty());
    }
}
