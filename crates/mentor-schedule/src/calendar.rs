//! Grilla mensual de calendario y cursor de meses.
//!
//! `CalendarMonth` es un valor: se genera completo para un (año, mes) y nunca
//! se parchea. `CalendarGridGenerator` mantiene el mes visible y regenera la
//! grilla en cada navegación.
//!
//! Forma de la grilla (7 columnas):
//! - `k` celdas `Blank` al inicio, donde `k` es la columna del día 1 según
//!   `WeekStart`.
//! - `Day(1)..=Day(dias_del_mes)` en orden.
//! - Sin relleno final: la última fila puede quedar incompleta.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::formatter::DateLocale;

pub const DAYS_PER_WEEK: usize = 7;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Primer día de la semana (columna 0 de la grilla).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Columna de `weekday` en la grilla (0..7).
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Días de la semana en orden de columna.
    pub fn columns(self) -> [Weekday; DAYS_PER_WEEK] {
        let mut out = [self.first_weekday(); DAYS_PER_WEEK];
        for i in 1..DAYS_PER_WEEK {
            out[i] = out[i - 1].succ();
        }
        out
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Some(WeekStart::Sunday),
            "monday" | "mon" => Some(WeekStart::Monday),
            _ => None,
        }
    }
}

/// Celda de la grilla: vacía (relleno inicial) o un día concreto del mes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDay {
    Blank,
    Day(u32),
}

impl CalendarDay {
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarDay::Blank => None,
            CalendarDay::Day(d) => Some(*d),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarDay::Blank)
    }
}

/// Desplaza (año, mes) en `delta` meses ajustando el año. Falla con
/// `YearOutOfRange` si el cálculo no cabe en `i32`.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Result<(i32, u32), ScheduleError> {
    let month0 = i32::try_from(month).map_err(|_| ScheduleError::InvalidMonth(month))? - 1;
    let total = year.checked_mul(12)
                    .and_then(|t| t.checked_add(month0))
                    .and_then(|t| t.checked_add(delta))
                    .ok_or(ScheduleError::YearOutOfRange(year))?;
    Ok((total.div_euclid(12), total.rem_euclid(12) as u32 + 1))
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, ScheduleError> {
    if !(1..=12).contains(&month) {
        return Err(ScheduleError::InvalidMonth(month));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ScheduleError::YearOutOfRange(year));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ScheduleError::YearOutOfRange(year))
}

/// Cantidad de días del mes (considera años bisiestos).
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ScheduleError> {
    let first = first_of_month(year, month)?;
    let (next_year, next_month) = shift_month(year, month, 1)?;
    // 9999-12 no tiene sucesor dentro del rango, pero diciembre siempre tiene 31
    let Some(next_first) = NaiveDate::from_ymd_opt(next_year, next_month, 1) else {
        return Ok(31);
    };
    Ok(next_first.signed_duration_since(first).num_days() as u32)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    week_start: WeekStart,
    grid: Vec<CalendarDay>,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32, week_start: WeekStart) -> Result<Self, ScheduleError> {
        let first = first_of_month(year, month)?;
        let offset = week_start.column_of(first.weekday()) as usize;
        let days = days_in_month(year, month)?;

        let mut grid = Vec::with_capacity(offset + days as usize);
        grid.extend(std::iter::repeat(CalendarDay::Blank).take(offset));
        grid.extend((1..=days).map(CalendarDay::Day));
        Ok(Self { year,
                  month,
                  week_start,
                  grid })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn grid(&self) -> &[CalendarDay] {
        &self.grid
    }

    /// Número de celdas vacías antes del día 1.
    pub fn leading_blanks(&self) -> usize {
        self.grid.iter().take_while(|c| c.is_blank()).count()
    }

    pub fn days_in_month(&self) -> u32 {
        (self.grid.len() - self.leading_blanks()) as u32
    }

    /// Filas de 7 columnas; la última puede ser más corta.
    pub fn rows(&self) -> Vec<&[CalendarDay]> {
        self.grid.chunks(DAYS_PER_WEEK).collect()
    }

    /// `YYYY-MM-DD` del día `day` de este mes.
    pub fn date_string(&self, day: u32) -> Result<String, ScheduleError> {
        Ok(self.date(day)?.format("%Y-%m-%d").to_string())
    }

    pub fn date(&self, day: u32) -> Result<NaiveDate, ScheduleError> {
        if day == 0 || day > self.days_in_month() {
            return Err(ScheduleError::InvalidDay { year: self.year,
                                                   month: self.month,
                                                   day });
        }
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or(ScheduleError::InvalidDay { year: self.year,
                                                                                            month: self.month,
                                                                                            day })
    }

    /// Mes desplazado `delta` meses (grilla nueva).
    pub fn shifted(&self, delta: i32) -> Result<Self, ScheduleError> {
        let (year, month) = shift_month(self.year, self.month, delta)?;
        Self::new(year, month, self.week_start)
    }
}

/// Cursor de mes visible dentro del selector de fecha.
#[derive(Debug, Clone)]
pub struct CalendarGridGenerator {
    current: CalendarMonth,
}

impl CalendarGridGenerator {
    pub fn new(year: i32, month: u32, week_start: WeekStart) -> Result<Self, ScheduleError> {
        Ok(Self { current: CalendarMonth::new(year, month, week_start)? })
    }

    /// Cursor posicionado en el mes que contiene `date`.
    pub fn containing(date: NaiveDate, week_start: WeekStart) -> Result<Self, ScheduleError> {
        Self::new(date.year(), date.month(), week_start)
    }

    /// Cursor en el mes actual según el reloj local.
    pub fn current_month(week_start: WeekStart) -> Result<Self, ScheduleError> {
        Self::containing(Local::now().date_naive(), week_start)
    }

    pub fn month(&self) -> &CalendarMonth {
        &self.current
    }

    pub fn grid(&self) -> &[CalendarDay] {
        self.current.grid()
    }

    pub fn year_month(&self) -> (i32, u32) {
        (self.current.year, self.current.month)
    }

    pub fn next_month(&mut self) -> Result<&CalendarMonth, ScheduleError> {
        self.shift(1)
    }

    pub fn previous_month(&mut self) -> Result<&CalendarMonth, ScheduleError> {
        self.shift(-1)
    }

    /// Salta directamente a (año, mes).
    pub fn go_to(&mut self, year: i32, month: u32) -> Result<&CalendarMonth, ScheduleError> {
        self.current = CalendarMonth::new(year, month, self.current.week_start)?;
        debug!("calendar moved to {:04}-{:02}", year, month);
        Ok(&self.current)
    }

    fn shift(&mut self, delta: i32) -> Result<&CalendarMonth, ScheduleError> {
        let next = self.current.shifted(delta)?;
        debug!("calendar {:04}-{:02} -> {:04}-{:02}",
               self.current.year, self.current.month, next.year, next.month);
        self.current = next;
        Ok(&self.current)
    }

    /// Resuelve el día `day` del mes visible a `YYYY-MM-DD`.
    pub fn resolve(&self, day: u32) -> Result<String, ScheduleError> {
        self.current.date_string(day)
    }

    pub fn select(&self, cell: CalendarDay) -> Result<String, ScheduleError> {
        match cell {
            CalendarDay::Blank => Err(ScheduleError::BlankCell),
            CalendarDay::Day(d) => self.resolve(d),
        }
    }

    /// Etiquetas de la cabecera de días en orden de columna.
    pub fn weekday_header(&self, locale: DateLocale) -> [&'static str; DAYS_PER_WEEK] {
        self.current.week_start.columns().map(|wd| locale.weekday_label(wd))
    }
}
