//! Demo de sesión completa: recorre el flujo de registro de partner sin UI,
//! completa dos slots de agenda y vuelca ambos reportes como JSON.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;
use log::info;
use mentor_core::{Advance, PagedContainer, StepContent, StepRenderer};
use mentor_flows::{FlowHost, FlowKind};
use mentorflow_rust::config::CONFIG;
use mentorflow_rust::errors::{CoreError, DomainError};
use mentorflow_rust::report::{to_json, FlowReport, ScheduleReport};

struct LogRenderer;

impl StepRenderer for LogRenderer {
    fn render(&mut self, step: &dyn StepContent, index: usize, total: usize) {
        info!("[{}/{}] {} / {}", index + 1, total, step.main_title(), step.action_label());
    }
}

#[derive(Default)]
struct HeadlessPager {
    visible: usize,
}

impl PagedContainer for HeadlessPager {
    fn display_page(&mut self, page: usize, _animated: bool) {
        self.visible = page;
    }

    fn visible_page(&self) -> usize {
        self.visible
    }
}

fn run_flow() -> Result<FlowReport, CoreError> {
    let done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&done);
    let host = FlowHost::for_kind(FlowKind::PartnerRegistration,
                                  Rc::new(RefCell::new(HeadlessPager::default())),
                                  Rc::new(RefCell::new(LogRenderer)),
                                  move || flag.set(true))?;
    while host.primary_action()? != Advance::Completed {}
    if !done.get() {
        return Err(CoreError::Internal("completion callback not invoked".into()));
    }
    Ok(FlowReport::from_engine(host.engine()))
}

fn run_schedule() -> Result<ScheduleReport, DomainError> {
    let session = CONFIG.schedule_session();
    let today = NaiveDate::from_ymd_opt(2025, 10, 1).ok_or_else(|| DomainError::Validation("fecha base".into()))?;

    let mut editor = session.open_editor(0, today)?;
    editor.select_day(31)?;
    editor.times().start().confirm(14, 0)?;
    editor.times().end().confirm(16, 0)?;
    session.apply(editor.confirm()?)?;

    let mut editor = session.open_editor(2, today)?;
    editor.calendar_mut().next_month()?;
    editor.select_day(3)?;
    editor.times().start().confirm_str("10:30")?;
    session.apply(editor.confirm()?)?;

    Ok(ScheduleReport::from_session(&session, &CONFIG.slot_placeholder))
}

fn main() {
    env_logger::init();
    info!("config: {:?}", *CONFIG);

    let flow = match run_flow() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[main-core] flujo: {e}");
            std::process::exit(1);
        }
    };
    let schedule = match run_schedule() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[main-core] agenda: {e}");
            std::process::exit(1);
        }
    };

    for line in &schedule.summaries {
        println!("{line}");
    }
    match to_json(&flow).and_then(|f| to_json(&schedule).map(|s| (f, s))) {
        Ok((f, s)) => println!("{f}\n{s}"),
        Err(e) => {
            eprintln!("[main-core] {e}");
            std::process::exit(2);
        }
    }
}
