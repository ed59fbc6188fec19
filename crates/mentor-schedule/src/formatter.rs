//! Presentación de slots de agenda como texto.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::slot::ScheduleSlot;

/// Idioma de las fechas mostradas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateLocale {
    /// `10월 31일 (금)`
    #[default]
    Korean,
    /// `Oct 31 (Fri)`
    English,
}

impl DateLocale {
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.split(['-', '_']).next().unwrap_or_default() {
            "ko" => Some(DateLocale::Korean),
            "en" => Some(DateLocale::English),
            _ => None,
        }
    }

    pub fn weekday_label(self, weekday: Weekday) -> &'static str {
        match self {
            DateLocale::Korean => match weekday {
                Weekday::Mon => "월",
                Weekday::Tue => "화",
                Weekday::Wed => "수",
                Weekday::Thu => "목",
                Weekday::Fri => "금",
                Weekday::Sat => "토",
                Weekday::Sun => "일",
            },
            DateLocale::English => match weekday {
                Weekday::Mon => "Mon",
                Weekday::Tue => "Tue",
                Weekday::Wed => "Wed",
                Weekday::Thu => "Thu",
                Weekday::Fri => "Fri",
                Weekday::Sat => "Sat",
                Weekday::Sun => "Sun",
            },
        }
    }

    /// Fecha con mes, día y día de la semana.
    pub fn format_date(self, date: NaiveDate) -> String {
        let weekday = self.weekday_label(date.weekday());
        match self {
            DateLocale::Korean => format!("{}월 {}일 ({})", date.month(), date.day(), weekday),
            DateLocale::English => format!("{} {} ({})", date.format("%b"), date.day(), weekday),
        }
    }
}

/// Función pura slot -> texto. Sin estado salvo el locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleFormatter {
    locale: DateLocale,
}

impl ScheduleFormatter {
    pub fn new(locale: DateLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> DateLocale {
        self.locale
    }

    /// `"<fecha> <inicio> ~ <fin>"`, o `placeholder` si el slot no tiene
    /// fecha. Las horas se concatenan tal cual, aunque estén vacías.
    pub fn format(&self, slot: &ScheduleSlot, placeholder: &str) -> String {
        if !slot.is_set() {
            return placeholder.to_string();
        }
        format!("{} {} ~ {}", self.format_date(&slot.date), slot.start_time, slot.end_time)
    }

    /// Fecha `YYYY-MM-DD` localizada; si no parsea se devuelve sin cambios.
    pub fn format_date(&self, raw: &str) -> String {
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => self.locale.format_date(date),
            Err(_) => raw.to_string(),
        }
    }
}
