//! Sesión de agenda y modal de edición de un slot.
//!
//! Flujo:
//! 1. El host (`ScheduleSession`) abre un `SlotEditor` para el índice 0..3.
//! 2. El editor posee, de forma transitoria, un `CalendarGridGenerator` y un
//!    `TimeRangePicker` precargados con el slot actual.
//! 3. `confirm` produce un `SlotEdit` que el host aplica con
//!    `ScheduleSlotSet::update_slot`; `cancel` descarta todo sin tocar el set.

use chrono::{Local, NaiveDate};
use log::debug;

use crate::calendar::{CalendarDay, CalendarGridGenerator, WeekStart};
use crate::error::ScheduleError;
use crate::formatter::ScheduleFormatter;
use crate::slot::{ScheduleSlot, ScheduleSlotSet, SLOT_COUNT};
use crate::time_range::TimeRangePicker;

/// Resultado confirmado del modal: `(index, date, start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEdit {
    pub index: usize,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl SlotEdit {
    pub fn into_slot(self) -> (usize, ScheduleSlot) {
        (self.index, ScheduleSlot::new(self.date, self.start_time, self.end_time))
    }
}

#[derive(Debug)]
pub struct SlotEditor {
    index: usize,
    calendar: CalendarGridGenerator,
    times: TimeRangePicker,
    selected_date: Option<String>,
}

impl SlotEditor {
    /// Editor para `slot`. Si el slot tiene una fecha válida el calendario
    /// se abre en ese mes; si no, en el mes de `today`.
    pub fn open(index: usize, slot: &ScheduleSlot, today: NaiveDate, week_start: WeekStart) -> Result<Self, ScheduleError> {
        if index >= SLOT_COUNT {
            return Err(ScheduleError::SlotIndexOutOfRange { index, len: SLOT_COUNT });
        }
        let existing = NaiveDate::parse_from_str(&slot.date, "%Y-%m-%d").ok();
        let calendar = CalendarGridGenerator::containing(existing.unwrap_or(today), week_start)?;
        Ok(Self { index,
                  calendar,
                  times: TimeRangePicker::with_values(slot.start_time.clone(), slot.end_time.clone()),
                  selected_date: existing.map(|_| slot.date.clone()) })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn calendar(&self) -> &CalendarGridGenerator {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut CalendarGridGenerator {
        &mut self.calendar
    }

    pub fn times(&self) -> &TimeRangePicker {
        &self.times
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    /// Selecciona el día `day` del mes visible.
    pub fn select_day(&mut self, day: u32) -> Result<&str, ScheduleError> {
        let date = self.calendar.resolve(day)?;
        Ok(self.selected_date.insert(date).as_str())
    }

    pub fn select_cell(&mut self, cell: CalendarDay) -> Result<&str, ScheduleError> {
        let date = self.calendar.select(cell)?;
        Ok(self.selected_date.insert(date).as_str())
    }

    /// Empaqueta el estado actual. Las horas pueden estar vacías.
    pub fn confirm(&self) -> Result<SlotEdit, ScheduleError> {
        let date = self.selected_date.clone().ok_or(ScheduleError::NoDateSelected)?;
        let (start_time, end_time) = self.times.range();
        Ok(SlotEdit { index: self.index,
                      date,
                      start_time,
                      end_time })
    }

    /// Cierra el modal sin aplicar cambios.
    pub fn cancel(self) {
        debug!("slot editor {} dismissed", self.index);
    }
}

/// Host de la pantalla de agenda: dueño del set de slots.
#[derive(Debug, Default)]
pub struct ScheduleSession {
    slots: ScheduleSlotSet,
    formatter: ScheduleFormatter,
    week_start: WeekStart,
}

impl ScheduleSession {
    pub fn new(formatter: ScheduleFormatter, week_start: WeekStart) -> Self {
        Self { slots: ScheduleSlotSet::new(),
               formatter,
               week_start }
    }

    pub fn slots(&self) -> &ScheduleSlotSet {
        &self.slots
    }

    pub fn formatter(&self) -> &ScheduleFormatter {
        &self.formatter
    }

    pub fn open_editor(&self, index: usize, today: NaiveDate) -> Result<SlotEditor, ScheduleError> {
        let slot = self.slots.slot(index)?;
        SlotEditor::open(index, &slot, today, self.week_start)
    }

    /// `open_editor` con la fecha local actual.
    pub fn open_editor_now(&self, index: usize) -> Result<SlotEditor, ScheduleError> {
        self.open_editor(index, Local::now().date_naive())
    }

    pub fn apply(&self, edit: SlotEdit) -> Result<(), ScheduleError> {
        let (index, slot) = edit.into_slot();
        self.slots.replace(index, slot)
    }

    pub fn summary(&self, index: usize, placeholder: &str) -> Result<String, ScheduleError> {
        Ok(self.formatter.format(&self.slots.slot(index)?, placeholder))
    }

    pub fn summaries(&self, placeholder: &str) -> Vec<String> {
        self.slots.slots().iter().map(|s| self.formatter.format(s, placeholder)).collect()
    }
}
