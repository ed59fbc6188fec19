//! Sincronización bidireccional entre un `FlowEngine` y un contenedor
//! paginado externo.
//!
//! El engine es la única fuente de verdad; el contenedor es un seguidor:
//! - engine → vista: cada cambio de índice se traduce en
//!   `display_page(index, animated = true)`. La vista puede seguir mostrando
//!   la página anterior (animación en curso), así que no se consulta
//!   `visible_page` en este sentido.
//! - vista → engine: `page_settled` escribe el índice reportado en el engine
//!   sólo si difiere del actual. Esta comparación es la única guarda contra
//!   ciclos de actualización.
//!
//! La construcción no emite ninguna solicitud a la vista: la sincronización
//! empieza con el primer cambio posterior.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::engine::core::FlowEngine;
use crate::errors::CoreFlowError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::observe::SubscriptionId;
use crate::step::StepContent;
use crate::view::PagedContainer;

pub struct PagedViewSynchronizer<S, C, E = InMemoryEventStore>
    where S: StepContent + 'static,
          C: PagedContainer + 'static,
          E: EventStore + 'static
{
    engine: Rc<FlowEngine<S, E>>,
    container: Rc<RefCell<C>>,
    subscription: SubscriptionId,
}

impl<S, C, E> PagedViewSynchronizer<S, C, E>
    where S: StepContent + 'static,
          C: PagedContainer + 'static,
          E: EventStore + 'static
{
    pub fn new(engine: Rc<FlowEngine<S, E>>, container: Rc<RefCell<C>>) -> Self {
        let target: Weak<RefCell<C>> = Rc::downgrade(&container);
        let subscription = engine.subscribe(move |page| {
                                     let Some(container) = target.upgrade() else {
                                         return;
                                     };
                                     // Si la vista está prestada es ella quien reporta el
                                     // settle: ya está en esa página.
                                     let Ok(mut view) = container.try_borrow_mut() else {
                                         debug!("pager busy, skipping display_page({page})");
                                         return;
                                     };
                                     view.display_page(page, true);
                                 });
        Self { engine,
               container,
               subscription }
    }

    /// El contenedor terminó un gesto y quedó en `page`. Devuelve
    /// `Ok(true)` si el engine cambió.
    pub fn page_settled(&self, page: usize) -> Result<bool, CoreFlowError> {
        if page == self.engine.current_index() {
            debug!("settle at current page {page}; engine untouched");
            return Ok(false);
        }
        self.engine.jump_to(page)
    }

    pub fn engine(&self) -> &Rc<FlowEngine<S, E>> {
        &self.engine
    }

    pub fn container(&self) -> &Rc<RefCell<C>> {
        &self.container
    }
}

impl<S, C, E> Drop for PagedViewSynchronizer<S, C, E>
    where S: StepContent + 'static,
          C: PagedContainer + 'static,
          E: EventStore + 'static
{
    fn drop(&mut self) {
        self.engine.unsubscribe(self.subscription);
    }
}
