/// Posición de un step respecto al cursor del flujo.
///
/// Los renderers lo usan para indicadores de progreso (puntos, barra). Se
/// deriva siempre del índice actual; no se almacena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// El step ya fue superado.
    Completed,
    /// El step es el visible actualmente.
    Current,
    /// El step aún no se alcanzó.
    Upcoming,
}

impl StepStatus {
    pub fn relative_to(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }
}
