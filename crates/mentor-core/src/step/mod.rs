//! Definiciones relacionadas a Steps.
//!
//! Un Step es el contenido de una pantalla dentro de un onboarding lineal
//! (título, subtítulo y etiqueta de la acción principal). Este módulo define:
//! - `StepContent`: interfaz neutral usada por el engine y los renderers.
//! - `StepDefinition`: valor inmutable genérico que implementa `StepContent`.
//! - `StepStatus`: posición relativa de un step respecto al cursor.
//! - `flow_steps!`: macro para declarar tablas de steps estáticas.

pub mod definition;
pub mod macros;
mod status;

pub use definition::{StepContent, StepDefinition};
pub use status::StepStatus;
