//! MentorFlow Rust Library
//!
//! Este crate actúa como la librería de aplicación de MentorFlow:
//! - Expone `errors` con la taxonomía de errores de núcleo y dominio.
//! - Expone `config` con las preferencias leídas del entorno.
//! - Expone `report` para volcar el estado de una sesión a JSON.
//!
//! La lógica vive en `mentor-core` (flujos), `mentor-schedule` (agenda) y
//! `mentor-flows` (flujos concretos); este crate sólo los compone.

pub mod config;
pub mod errors;
pub mod report;

#[cfg(test)]
mod tests {
	use super::errors::{CoreError, DomainError};

	#[test]
	fn core_error_tests() {
		let i = CoreError::Internal("fallo".into()).to_string();
		assert_eq!(i, "Error interno: fallo");
	}

	#[test]
	fn domain_error_tests() {
		let d = DomainError::Validation("x".into()).to_string();
		assert_eq!(d, "Validación fallida: x");
	}
}
