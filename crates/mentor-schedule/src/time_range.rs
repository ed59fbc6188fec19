//! Captura de hora de inicio y de fin como cadenas `HH:mm`.
//!
//! Cada `TimePicker` es independiente: confirmar uno no valida ni toca al
//! otro. `TimeRangePicker` sólo agrupa ambos; no impone orden ni duración.

use chrono::{NaiveTime, Timelike};
use log::debug;
use mentor_core::{Observable, SubscriptionId};

use crate::error::ScheduleError;

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug)]
pub struct TimePicker {
    value: Observable<String>,
}

impl TimePicker {
    pub fn new() -> Self {
        Self { value: Observable::new(String::new()) }
    }

    /// Picker con un valor inicial ya confirmado (p.ej. al reabrir un slot).
    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: Observable::new(value.into()) }
    }

    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn is_set(&self) -> bool {
        self.value.with(|v| !v.is_empty())
    }

    /// Confirma `hour:minute` (24h). Sobrescribe sólo este valor.
    pub fn confirm(&self, hour: u32, minute: u32) -> Result<String, ScheduleError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| ScheduleError::InvalidTime(format!("{hour}:{minute}")))?;
        Ok(self.confirm_time(time))
    }

    /// Confirma una hora escrita como `HH:mm`.
    pub fn confirm_str(&self, raw: &str) -> Result<String, ScheduleError> {
        let time = NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|_| ScheduleError::InvalidTime(raw.to_string()))?;
        Ok(self.confirm_time(time))
    }

    pub fn confirm_time(&self, time: NaiveTime) -> String {
        let formatted = time.with_second(0).unwrap_or(time).format(TIME_FORMAT).to_string();
        debug!("time picker confirmed {formatted}");
        self.value.set(formatted.clone());
        formatted
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
        where F: Fn(&str) + 'static
    {
        self.value.subscribe(move |v: &String| listener(v.as_str()))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.value.unsubscribe(id)
    }
}

impl Default for TimePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct TimeRangePicker {
    start: TimePicker,
    end: TimePicker,
}

impl TimeRangePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: TimePicker::with_value(start),
               end: TimePicker::with_value(end) }
    }

    pub fn start(&self) -> &TimePicker {
        &self.start
    }

    pub fn end(&self) -> &TimePicker {
        &self.end
    }

    /// `(inicio, fin)` tal como están, vacíos si no se confirmaron.
    pub fn range(&self) -> (String, String) {
        (self.start.value(), self.end.value())
    }
}
