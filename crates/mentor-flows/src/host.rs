//! Pantalla host de un flujo.
//!
//! `FlowHost` es dueño del engine (compartido con el sincronizador vía
//! `Rc`), renderiza el step actual en cada cambio de índice y expone las
//! acciones de usuario: acción principal (`advance`), volver (`retreat`) y
//! fin de gesto en el pager (`page_settled`).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use mentor_core::{Advance, CoreFlowError, FlowEngine, PagedContainer, PagedViewSynchronizer, StepContent,
                  StepDefinition, StepRenderer, SubscriptionId};

use crate::steps::FlowKind;

pub struct FlowHost<S, C, R>
    where S: StepContent + 'static,
          C: PagedContainer + 'static,
          R: StepRenderer + 'static
{
    sync: PagedViewSynchronizer<S, C>,
    renderer: Rc<RefCell<R>>,
    render_subscription: SubscriptionId,
    finished: Rc<Cell<bool>>,
}

impl<C, R> FlowHost<StepDefinition, C, R>
    where C: PagedContainer + 'static,
          R: StepRenderer + 'static
{
    /// Host para uno de los flujos predefinidos.
    pub fn for_kind<F>(kind: FlowKind, container: Rc<RefCell<C>>, renderer: Rc<RefCell<R>>, on_complete: F)
                       -> Result<Self, CoreFlowError>
        where F: FnOnce() + 'static
    {
        debug!("opening {} flow", kind.name());
        Self::new(kind.definitions(), container, renderer, on_complete)
    }
}

impl<S, C, R> FlowHost<S, C, R>
    where S: StepContent + 'static,
          C: PagedContainer + 'static,
          R: StepRenderer + 'static
{
    /// Construye el engine, renderiza el step inicial y conecta el pager.
    /// El pager no recibe ninguna solicitud hasta el primer cambio.
    pub fn new<F>(steps: Vec<S>, container: Rc<RefCell<C>>, renderer: Rc<RefCell<R>>, on_complete: F)
                  -> Result<Self, CoreFlowError>
        where F: FnOnce() + 'static
    {
        let engine = Rc::new(FlowEngine::from_steps(steps)?);

        let finished = Rc::new(Cell::new(false));
        let flag = Rc::clone(&finished);
        engine.set_on_complete(move || {
                  flag.set(true);
                  on_complete();
              });

        let weak_engine = Rc::downgrade(&engine);
        let weak_renderer = Rc::downgrade(&renderer);
        let render_subscription = engine.subscribe(move |index| {
                                            let (Some(engine), Some(renderer)) =
                                                (weak_engine.upgrade(), weak_renderer.upgrade())
                                            else {
                                                return;
                                            };
                                            let Some(step) = engine.steps().get(index) else {
                                                return;
                                            };
                                            match renderer.try_borrow_mut() {
                                                Ok(mut r) => r.render(step, index, engine.len()),
                                                Err(_) => warn!("renderer busy, step {index} not rendered"),
                                            };
                                        });

        renderer.borrow_mut().render(engine.current_step(), engine.current_index(), engine.len());
        let sync = PagedViewSynchronizer::new(engine, container);
        Ok(Self { sync,
                  renderer,
                  render_subscription,
                  finished })
    }

    pub fn engine(&self) -> &Rc<FlowEngine<S>> {
        self.sync.engine()
    }

    pub fn container(&self) -> &Rc<RefCell<C>> {
        self.sync.container()
    }

    pub fn renderer(&self) -> &Rc<RefCell<R>> {
        &self.renderer
    }

    pub fn current_step(&self) -> &S {
        self.engine().current_step()
    }

    /// Acción principal del step visible.
    pub fn primary_action(&self) -> Result<Advance, CoreFlowError> {
        self.engine().advance()
    }

    /// Botón "volver". `Ok(false)` en el primer step: el host debe cerrar el
    /// flujo en lugar de retroceder.
    pub fn back(&self) -> Result<bool, CoreFlowError> {
        self.engine().retreat()
    }

    pub fn page_settled(&self, page: usize) -> Result<bool, CoreFlowError> {
        self.sync.page_settled(page)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

impl<S, C, R> Drop for FlowHost<S, C, R>
    where S: StepContent + 'static,
          C: PagedContainer + 'static,
          R: StepRenderer + 'static
{
    fn drop(&mut self) {
        self.sync.engine().unsubscribe(self.render_subscription);
    }
}
