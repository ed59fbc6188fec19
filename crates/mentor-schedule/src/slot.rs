//! Conjunto fijo de tres propuestas de horario.
//!
//! Los slots se reservan una vez por sesión y sólo se sobrescriben (o se
//! limpian); nunca se crean ni destruyen individualmente. No hay validación
//! entre slots: solapamientos o duplicados se aceptan tal cual, igual que un
//! `end_time` anterior a `start_time`.

use log::debug;
use mentor_core::{Observable, SubscriptionId};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

pub const SLOT_COUNT: usize = 3;

/// `(fecha, inicio, fin)`; cadena vacía significa "sin valor".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub date: String,       // YYYY-MM-DD
    pub start_time: String, // HH:mm
    pub end_time: String,   // HH:mm
}

impl ScheduleSlot {
    pub fn new(date: impl Into<String>, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self { date: date.into(),
               start_time: start_time.into(),
               end_time: end_time.into() }
    }

    /// Un slot está "set" en cuanto tiene fecha, aunque falten las horas.
    pub fn is_set(&self) -> bool {
        !self.date.is_empty()
    }
}

pub struct ScheduleSlotSet {
    slots: Observable<[ScheduleSlot; SLOT_COUNT]>,
}

impl ScheduleSlotSet {
    pub fn new() -> Self {
        Self { slots: Observable::new(Default::default()) }
    }

    pub fn len(&self) -> usize {
        SLOT_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn slot(&self, index: usize) -> Result<ScheduleSlot, ScheduleError> {
        check_index(index)?;
        Ok(self.slots.with(|slots| slots[index].clone()))
    }

    pub fn slots(&self) -> [ScheduleSlot; SLOT_COUNT] {
        self.slots.get()
    }

    /// Reemplaza el slot completo en `index` y notifica.
    pub fn update_slot(&self,
                       index: usize,
                       date: impl Into<String>,
                       start_time: impl Into<String>,
                       end_time: impl Into<String>)
                       -> Result<(), ScheduleError> {
        self.replace(index, ScheduleSlot::new(date, start_time, end_time))
    }

    pub fn replace(&self, index: usize, slot: ScheduleSlot) -> Result<(), ScheduleError> {
        check_index(index)?;
        debug!("slot {index} <- {:?}", slot);
        self.slots.update(|slots| slots[index] = slot);
        Ok(())
    }

    /// Vuelve el slot a "unset".
    pub fn clear_slot(&self, index: usize) -> Result<(), ScheduleError> {
        self.replace(index, ScheduleSlot::default())
    }

    pub fn set_count(&self) -> usize {
        self.slots.with(|slots| slots.iter().filter(|s| s.is_set()).count())
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
        where F: Fn(&[ScheduleSlot; SLOT_COUNT]) + 'static
    {
        self.slots.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.slots.unsubscribe(id)
    }
}

impl Default for ScheduleSlotSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScheduleSlotSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleSlotSet").field("slots", &self.slots()).finish()
    }
}

fn check_index(index: usize) -> Result<(), ScheduleError> {
    if index >= SLOT_COUNT {
        return Err(ScheduleError::SlotIndexOutOfRange { index, len: SLOT_COUNT });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn update_replaces_only_target_slot() {
        let set = ScheduleSlotSet::new();
        set.update_slot(1, "2025-05-12", "14:00", "15:00").unwrap();
        assert_eq!(set.slot(1).unwrap(), ScheduleSlot::new("2025-05-12", "14:00", "15:00"));
        assert!(!set.slot(0).unwrap().is_set());
        assert!(!set.slot(2).unwrap().is_set());
        assert_eq!(set.set_count(), 1);
    }

    #[test]
    fn update_is_whole_slot() {
        let set = ScheduleSlotSet::new();
        set.update_slot(0, "2025-05-12", "14:00", "15:00").unwrap();
        set.update_slot(0, "2025-05-13", "", "").unwrap();
        assert_eq!(set.slot(0).unwrap(), ScheduleSlot::new("2025-05-13", "", ""));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let set = ScheduleSlotSet::new();
        let err = set.update_slot(3, "2025-05-12", "14:00", "15:00").unwrap_err();
        assert_eq!(err, ScheduleError::SlotIndexOutOfRange { index: 3, len: 3 });
        assert!(set.slot(7).is_err());
        assert_eq!(set.set_count(), 0);
    }

    #[test]
    fn overlapping_slots_are_accepted() {
        let set = ScheduleSlotSet::new();
        set.update_slot(0, "2025-05-12", "14:00", "15:00").unwrap();
        set.update_slot(1, "2025-05-12", "14:00", "15:00").unwrap();
        set.update_slot(2, "2025-05-12", "16:00", "13:00").unwrap();
        assert_eq!(set.set_count(), 3);
    }

    #[test]
    fn subscribers_are_notified_per_update() {
        let set = ScheduleSlotSet::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        set.subscribe(move |slots| {
               assert!(slots[2].is_set());
               h.set(h.get() + 1);
           });
        set.update_slot(2, "2025-01-01", "10:00", "11:00").unwrap();
        assert_eq!(hits.get(), 1);
    }
}
