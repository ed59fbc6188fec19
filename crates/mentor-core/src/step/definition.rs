use serde::{Deserialize, Serialize};

/// Contenido visible de un step. Implementaciones deben ser inmutables: el
/// engine lee estos valores tanto al renderizar como al calcular el
/// `definition_hash`.
pub trait StepContent {
    /// Título principal de la pantalla.
    fn main_title(&self) -> &str;

    /// Texto secundario bajo el título.
    fn sub_title(&self) -> &str;

    /// Etiqueta de la acción principal (su activación llama a `advance`).
    fn action_label(&self) -> &str;
}

/// Step genérico construido a partir de datos (p.ej. una tabla cargada en
/// runtime). Los flujos con contenido fijo suelen preferir un enum declarado
/// con `flow_steps!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepDefinition {
    pub main_title: String,
    pub sub_title: String,
    pub action_label: String,
}

impl StepDefinition {
    pub fn new(main_title: impl Into<String>, sub_title: impl Into<String>, action_label: impl Into<String>) -> Self {
        Self { main_title: main_title.into(),
               sub_title: sub_title.into(),
               action_label: action_label.into() }
    }
}

impl StepContent for StepDefinition {
    fn main_title(&self) -> &str {
        &self.main_title
    }

    fn sub_title(&self) -> &str {
        &self.sub_title
    }

    fn action_label(&self) -> &str {
        &self.action_label
    }
}

impl<T: StepContent + ?Sized> StepContent for Box<T> {
    fn main_title(&self) -> &str {
        (**self).main_title()
    }

    fn sub_title(&self) -> &str {
        (**self).sub_title()
    }

    fn action_label(&self) -> &str {
        (**self).action_label()
    }
}
