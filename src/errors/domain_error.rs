use mentor_schedule::ScheduleError;
use thiserror::Error;

/// Errores del dominio de la aplicación
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Error de agenda: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("Validación fallida: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_variant_from() {
        let err: DomainError = ScheduleError::InvalidMonth(13).into();
        assert_eq!(err.to_string(), "Error de agenda: invalid month 13 (expected 1-12)");
    }

    #[test]
    fn test_validation_variant_format() {
        let err = DomainError::Validation("inválido".into());
        assert_eq!(err.to_string(), "Validación fallida: inválido");
    }
}
