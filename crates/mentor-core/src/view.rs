//! Contratos de los colaboradores de presentación.
//!
//! El core no dibuja nada: delega en implementaciones de estos traits que
//! viven en la capa de UI (o en dobles de prueba).

use crate::step::StepContent;

/// Muestra el contenido de un step. La activación de la acción principal
/// (etiquetada con `action_label`) debe terminar en `FlowEngine::advance`.
pub trait StepRenderer {
    fn render(&mut self, step: &dyn StepContent, index: usize, total: usize);
}

/// Contenedor paginado externo (una página por step).
pub trait PagedContainer {
    /// Solicita mostrar la página `page`.
    fn display_page(&mut self, page: usize, animated: bool);

    /// Página visible en este momento.
    fn visible_page(&self) -> usize;
}
