use thiserror::Error;

/// Errores del dominio de agenda. Todos son errores del llamador.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid month {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("year {0} outside the supported range 1-9999")]
    YearOutOfRange(i32),
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[error("blank calendar cell cannot be selected")]
    BlankCell,
    #[error("invalid time: {0}")]
    InvalidTime(String),
    #[error("slot index {index} out of range (0..{len})")]
    SlotIndexOutOfRange { index: usize, len: usize },
    #[error("no date selected")]
    NoDateSelected,
}
