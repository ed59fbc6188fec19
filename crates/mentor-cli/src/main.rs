//! `mentor`: front-end de terminal para los flujos de onboarding y el
//! selector de agenda.
//!
//! ```text
//! mentor flow login --script n,n,b,n,n,n
//! mentor calendar 2025 3 --week-start monday
//! mentor schedule --pick 0,2025-10-31,14:00,16:00 --pick 2,2025-11-03,,
//! ```

use std::cell::RefCell;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process;
use std::rc::Rc;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::{debug, info};
use mentor_core::{Advance, PagedContainer, StepContent, StepRenderer};
use mentor_flows::{FlowHost, FlowKind};
use mentor_schedule::{CalendarDay, CalendarGridGenerator, DateLocale, ScheduleFormatter, ScheduleSession, WeekStart};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "mentor", version, about = "Flujos de onboarding y selector de agenda")]
struct Cli {
    /// Idioma de las fechas (ko | en)
    #[arg(long, global = true, env = "MENTORFLOW_LOCALE", default_value = "ko")]
    locale: String,

    /// Primer día de la semana (sunday | monday)
    #[arg(long, global = true, env = "MENTORFLOW_WEEK_START", default_value = "sunday")]
    week_start: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recorre un flujo de onboarding paso a paso
    Flow {
        /// login | partner_registration | profile_setting
        kind: String,
        /// Acciones separadas por coma: n (siguiente), b (volver), s<N> (deslizar a N).
        /// Sin script se leen de stdin, una por línea.
        #[arg(long)]
        script: Option<String>,
    },

    /// Imprime la grilla de un mes
    Calendar {
        year: i32,
        month: u32,
    },

    /// Completa slots de agenda y muestra el resumen
    Schedule {
        /// INDEX,YYYY-MM-DD,HH:MM,HH:MM (las horas pueden ir vacías)
        #[arg(long = "pick")]
        picks: Vec<String>,
        /// Texto para slots sin fecha
        #[arg(long, env = "MENTORFLOW_SLOT_PLACEHOLDER", default_value = "일정을 선택해주세요")]
        placeholder: String,
    },
}

fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("[mentor] error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let locale = DateLocale::from_code(&cli.locale).ok_or_else(|| format!("locale desconocido: {}", cli.locale))?;
    let week_start =
        WeekStart::from_name(&cli.week_start).ok_or_else(|| format!("inicio de semana desconocido: {}", cli.week_start))?;
    debug!("locale={locale:?} week_start={week_start:?}");

    match cli.command {
        Commands::Flow { kind, script } => {
            let kind = FlowKind::from_name(&kind).ok_or_else(|| format!("flujo desconocido: {kind}"))?;
            run_flow(kind, script.as_deref())
        }
        Commands::Calendar { year, month } => print_calendar(year, month, week_start, locale),
        Commands::Schedule { picks, placeholder } => run_schedule(&picks, &placeholder, week_start, locale),
    }
}

/// Renderer de consola: imprime cada step.
struct ConsoleRenderer;

impl StepRenderer for ConsoleRenderer {
    fn render(&mut self, step: &dyn StepContent, index: usize, total: usize) {
        println!();
        println!("({}/{}) {}", index + 1, total, step.main_title());
        println!("      {}", step.sub_title());
        println!("      [ {} ]", step.action_label());
    }
}

/// Pager de consola: sólo lleva la página visible.
#[derive(Default)]
struct ConsolePager {
    visible: usize,
}

impl PagedContainer for ConsolePager {
    fn display_page(&mut self, page: usize, animated: bool) {
        debug!("pager {} -> {} (animated={animated})", self.visible, page);
        self.visible = page;
    }

    fn visible_page(&self) -> usize {
        self.visible
    }
}

fn run_flow(kind: FlowKind, script: Option<&str>) -> CliResult<()> {
    let pager = Rc::new(RefCell::new(ConsolePager::default()));
    let host = FlowHost::for_kind(kind, Rc::clone(&pager), Rc::new(RefCell::new(ConsoleRenderer)), move || {
                   info!("{} flow completed", kind.name());
               })?;

    let actions: Box<dyn Iterator<Item = String>> = match script {
        Some(s) => Box::new(s.split(',').map(|a| a.trim().to_string()).collect::<Vec<_>>().into_iter()),
        None => {
            print!("> ");
            io::stdout().flush()?;
            Box::new(io::stdin().lock().lines().map_while(Result::ok))
        }
    };

    for action in actions {
        match action.as_str() {
            "" | "n" => {
                if host.primary_action()? == Advance::Completed {
                    println!("\n완료되었습니다.");
                    return Ok(());
                }
            }
            "b" => {
                if !host.back()? {
                    println!("\n흐름을 종료합니다.");
                    return Ok(());
                }
            }
            "q" => break,
            swipe if swipe.starts_with('s') => {
                let page: usize = swipe[1..].parse().map_err(|_| format!("página inválida: {swipe}"))?;
                // El gesto ya dejó la vista en la página destino
                pager.borrow_mut().visible = page;
                host.page_settled(page)?;
            }
            other => eprintln!("acción desconocida: {other}"),
        }
    }

    println!("\nflujo interrumpido en el paso {}", host.engine().current_index() + 1);
    Ok(())
}

fn print_calendar(year: i32, month: u32, week_start: WeekStart, locale: DateLocale) -> CliResult<()> {
    let calendar = CalendarGridGenerator::new(year, month, week_start)?;
    println!("{year:04}-{month:02}");
    println!("{}", calendar.weekday_header(locale).map(|l| format!("{l:>3}")).join(""));
    for row in calendar.month().rows() {
        let line: String = row.iter()
                              .map(|cell| match cell {
                                  CalendarDay::Blank => "   ".to_string(),
                                  CalendarDay::Day(d) => format!("{d:>3}"),
                              })
                              .collect();
        println!("{line}");
    }
    Ok(())
}

fn run_schedule(picks: &[String], placeholder: &str, week_start: WeekStart, locale: DateLocale) -> CliResult<()> {
    let session = ScheduleSession::new(ScheduleFormatter::new(locale), week_start);
    let today = Local::now().date_naive();

    for pick in picks {
        let parts: Vec<&str> = pick.split(',').map(str::trim).collect();
        let [index, date, start, end] = parts.as_slice() else {
            return Err(format!("formato esperado INDEX,YYYY-MM-DD,HH:MM,HH:MM: {pick}").into());
        };
        let index: usize = index.parse()?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;

        let mut editor = session.open_editor(index, today)?;
        editor.calendar_mut().go_to(date.year(), date.month())?;
        editor.select_day(date.day())?;
        if !start.is_empty() {
            editor.times().start().confirm_str(start)?;
        }
        if !end.is_empty() {
            editor.times().end().confirm_str(end)?;
        }
        session.apply(editor.confirm()?)?;
    }

    for (i, line) in session.summaries(placeholder).iter().enumerate() {
        println!("{}. {line}", i + 1);
    }
    Ok(())
}
