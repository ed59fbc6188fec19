use std::cell::RefCell;
use std::rc::Rc;

use mentor_core::{FlowEngine, PagedContainer, PagedViewSynchronizer, StepDefinition};

/// Pager de prueba: registra cada solicitud y salta a la página pedida.
#[derive(Debug, Default)]
struct RecordingPager {
    visible: usize,
    requests: Vec<(usize, bool)>,
}

impl PagedContainer for RecordingPager {
    fn display_page(&mut self, page: usize, animated: bool) {
        self.requests.push((page, animated));
        self.visible = page;
    }

    fn visible_page(&self) -> usize {
        self.visible
    }
}

fn setup(n: usize) -> (Rc<FlowEngine<StepDefinition>>, Rc<RefCell<RecordingPager>>) {
    let steps: Vec<StepDefinition> = (0..n).map(|i| StepDefinition::new(format!("p{i}"), "", "next")).collect();
    (Rc::new(FlowEngine::from_steps(steps).unwrap()), Rc::new(RefCell::new(RecordingPager::default())))
}

#[test]
fn construction_does_not_request_a_page() {
    let (engine, pager) = setup(3);
    let _sync = PagedViewSynchronizer::new(Rc::clone(&engine), Rc::clone(&pager));
    assert!(pager.borrow().requests.is_empty());
}

#[test]
fn advance_requests_exactly_one_animated_page() {
    let (engine, pager) = setup(3);
    let _sync = PagedViewSynchronizer::new(Rc::clone(&engine), Rc::clone(&pager));
    engine.advance().unwrap();
    assert_eq!(pager.borrow().requests, vec![(1, true)]);
    engine.retreat().unwrap();
    assert_eq!(pager.borrow().requests, vec![(1, true), (0, true)]);
}

#[test]
fn settle_at_current_index_does_not_touch_engine() {
    let (engine, pager) = setup(3);
    let sync = PagedViewSynchronizer::new(Rc::clone(&engine), Rc::clone(&pager));
    engine.advance().unwrap();
    let events_before = engine.events().len();

    assert_eq!(sync.page_settled(1), Ok(false));
    assert_eq!(engine.events().len(), events_before);
    assert_eq!(pager.borrow().requests.len(), 1);
}

#[test]
fn swipe_writes_back_and_settles_in_one_round() {
    let (engine, pager) = setup(4);
    let sync = PagedViewSynchronizer::new(Rc::clone(&engine), Rc::clone(&pager));

    // El usuario desliza hasta la página 2: la vista ya está ahí
    pager.borrow_mut().visible = 2;
    assert_eq!(sync.page_settled(2), Ok(true));
    assert_eq!(engine.current_index(), 2);
    // Una sola solicitud, a la página ya visible; su settle no toca el engine
    assert_eq!(pager.borrow().requests, vec![(2, true)]);
    assert_eq!(sync.page_settled(2), Ok(false));
    assert_eq!(engine.event_variants(), vec!["I", "J"]);
}

/// Pager animado: `visible` sólo cambia cuando termina la animación.
#[derive(Debug, Default)]
struct AnimatedPager {
    visible: usize,
    requests: Vec<(usize, bool)>,
}

impl AnimatedPager {
    fn finish_animation(&mut self) -> usize {
        if let Some((target, _)) = self.requests.last() {
            self.visible = *target;
        }
        self.visible
    }
}

impl PagedContainer for AnimatedPager {
    fn display_page(&mut self, page: usize, animated: bool) {
        self.requests.push((page, animated));
    }

    fn visible_page(&self) -> usize {
        self.visible
    }
}

#[test]
fn back_during_animation_is_forwarded_to_the_pager() {
    let steps: Vec<StepDefinition> = (0..3).map(|i| StepDefinition::new(format!("p{i}"), "", "next")).collect();
    let engine = Rc::new(FlowEngine::from_steps(steps).unwrap());
    let pager = Rc::new(RefCell::new(AnimatedPager::default()));
    let sync = PagedViewSynchronizer::new(Rc::clone(&engine), Rc::clone(&pager));

    engine.advance().unwrap();
    // La vista sigue en 0 mientras anima hacia 1
    engine.retreat().unwrap();
    assert_eq!(pager.borrow().requests, vec![(1, true), (0, true)]);

    let settled = pager.borrow_mut().finish_animation();
    assert_eq!(sync.page_settled(settled), Ok(false));
    assert_eq!(engine.current_index(), 0);
    assert_eq!(pager.borrow().visible_page(), 0);
}

#[test]
fn settle_while_container_is_borrowed_still_moves_engine() {
    let (engine, pager) = setup(3);
    let sync = PagedViewSynchronizer::new(Rc::clone(&engine), Rc::clone(&pager));

    // El propio pager reporta el settle desde dentro de su préstamo
    let mut view = pager.borrow_mut();
    view.visible = 1;
    assert_eq!(sync.page_settled(1), Ok(true));
    assert_eq!(engine.current_index(), 1);
    assert!(view.requests.is_empty());
    drop(view);

    engine.advance().unwrap();
    assert_eq!(pager.borrow().requests, vec![(2, true)]);
}

#[test]
fn settle_out_of_range_is_reported() {
    let (engine, pager) = setup(2);
    let sync = PagedViewSynchronizer::new(Rc::clone(&engine), pager);
    assert!(sync.page_settled(5).is_err());
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn dropping_synchronizer_unsubscribes() {
    let (engine, pager) = setup(3);
    {
        let _sync = PagedViewSynchronizer::new(Rc::clone(&engine), Rc::clone(&pager));
        engine.advance().unwrap();
    }
    engine.advance().unwrap();
    assert_eq!(pager.borrow().requests, vec![(1, true)]);
}
