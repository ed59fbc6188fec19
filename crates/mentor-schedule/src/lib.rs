// mentor-schedule library entry point
pub mod calendar;
pub mod editor;
pub mod error;
pub mod formatter;
pub mod slot;
pub mod time_range;
pub use calendar::{CalendarDay, CalendarGridGenerator, CalendarMonth, WeekStart};
pub use editor::{ScheduleSession, SlotEdit, SlotEditor};
pub use error::ScheduleError;
pub use formatter::{DateLocale, ScheduleFormatter};
pub use slot::{ScheduleSlot, ScheduleSlotSet, SLOT_COUNT};
pub use time_range::{TimePicker, TimeRangePicker};
