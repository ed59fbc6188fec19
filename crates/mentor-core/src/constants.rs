//! Constantes del motor de flujos.
//!
//! `ENGINE_VERSION` forma parte del input del hash de definición: cambiarla
//! invalida los `definition_hash` registrados en los journals de sesión.

/// Versión lógica del motor de pasos. Mantener estable mientras la forma de
/// `StepContent` no cambie.
pub const ENGINE_VERSION: &str = "M1.0";
