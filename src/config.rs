//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`CONFIG`). Los crates de dominio no leen el entorno: reciben
//! los valores ya resueltos desde aquí.
use std::env;

use log::warn;
use mentor_schedule::{DateLocale, ScheduleFormatter, ScheduleSession, WeekStart};
use once_cell::sync::Lazy;

pub const ENV_LOCALE: &str = "MENTORFLOW_LOCALE";
pub const ENV_WEEK_START: &str = "MENTORFLOW_WEEK_START";
pub const ENV_SLOT_PLACEHOLDER: &str = "MENTORFLOW_SLOT_PLACEHOLDER";

pub const DEFAULT_SLOT_PLACEHOLDER: &str = "일정을 선택해주세요";

static DOTENV: Lazy<bool> = Lazy::new(|| dotenvy::dotenv().is_ok());

/// Configuración global perezosa, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Preferencias de presentación de la sesión.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Idioma de las fechas en los resúmenes de agenda.
    pub locale: DateLocale,
    /// Columna 0 de la grilla del calendario.
    pub week_start: WeekStart,
    /// Texto de un slot sin fecha.
    pub slot_placeholder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { locale: DateLocale::default(),
               week_start: WeekStart::default(),
               slot_placeholder: DEFAULT_SLOT_PLACEHOLDER.to_string() }
    }
}

impl AppConfig {
    /// Lee `.env` (si existe) y las variables `MENTORFLOW_*`. Valores
    /// inválidos se reemplazan por el default con un warning.
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV);
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let locale = match lookup(ENV_LOCALE) {
            Some(raw) => DateLocale::from_code(&raw).unwrap_or_else(|| {
                                                        warn!("{ENV_LOCALE}={raw:?} no reconocido; se usa el default");
                                                        defaults.locale
                                                    }),
            None => defaults.locale,
        };
        let week_start = match lookup(ENV_WEEK_START) {
            Some(raw) => WeekStart::from_name(&raw).unwrap_or_else(|| {
                                                       warn!("{ENV_WEEK_START}={raw:?} no reconocido; se usa el default");
                                                       defaults.week_start
                                                   }),
            None => defaults.week_start,
        };
        let slot_placeholder = lookup(ENV_SLOT_PLACEHOLDER).filter(|p| !p.trim().is_empty())
                                                           .unwrap_or(defaults.slot_placeholder);
        Self { locale,
               week_start,
               slot_placeholder }
    }

    pub fn formatter(&self) -> ScheduleFormatter {
        ScheduleFormatter::new(self.locale)
    }

    /// Sesión de agenda vacía con las preferencias de esta configuración.
    pub fn schedule_session(&self) -> ScheduleSession {
        ScheduleSession::new(self.formatter(), self.week_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
        assert_eq!(AppConfig::default().slot_placeholder, DEFAULT_SLOT_PLACEHOLDER);
    }

    #[test]
    fn reads_all_keys() {
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_LOCALE, "en"),
                                                  (ENV_WEEK_START, "Monday"),
                                                  (ENV_SLOT_PLACEHOLDER, "Pick a time")]));
        assert_eq!(cfg.locale, DateLocale::English);
        assert_eq!(cfg.week_start, WeekStart::Monday);
        assert_eq!(cfg.slot_placeholder, "Pick a time");
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[(ENV_LOCALE, "xx"), (ENV_WEEK_START, "friday"), (ENV_SLOT_PLACEHOLDER, "  ")]));
        assert_eq!(cfg, AppConfig::default());
    }
}
