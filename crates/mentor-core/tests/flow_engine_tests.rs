use std::cell::{Cell, RefCell};
use std::rc::Rc;

use mentor_core::{Advance, CoreFlowError, EngineBuilderInit, FlowEngine, FlowEventKind, StepDefinition};

fn steps(n: usize) -> Vec<StepDefinition> {
    (0..n).map(|i| StepDefinition::new(format!("title {i}"), format!("sub {i}"), "next")).collect()
}

#[test]
fn index_stays_in_bounds_for_any_navigation_sequence() {
    let engine = FlowEngine::from_steps(steps(4)).unwrap();
    // Secuencia mixta determinista: a = advance, r = retreat
    let script = "rraarraaarrrraaa";
    for op in script.chars() {
        let _ = match op {
            'a' => engine.advance().map(|_| ()),
            _ => engine.retreat().map(|_| ()),
        };
        assert!(engine.current_index() < engine.len());
    }
}

#[test]
fn completion_fires_once_after_len_minus_one_advances() {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let n = 5;
    let engine = FlowEngine::from_steps(steps(n)).unwrap();
    engine.set_on_complete(move || counter.set(counter.get() + 1));

    for expected in 1..n {
        assert_eq!(engine.advance(), Ok(Advance::Moved(expected)));
        assert_eq!(hits.get(), 0, "completion must not fire before the last advance");
    }
    assert_eq!(engine.current_index(), n - 1);
    assert_eq!(engine.advance(), Ok(Advance::Completed));
    assert_eq!(hits.get(), 1);
    assert_eq!(engine.current_index(), n - 1);

    // Guardado: un advance extra no re-dispara el callback
    assert_eq!(engine.advance(), Err(CoreFlowError::FlowCompleted));
    assert_eq!(hits.get(), 1);
}

#[test]
fn retreat_at_zero_is_silent_noop() {
    let engine = FlowEngine::from_steps(steps(3)).unwrap();
    let notified = Rc::new(Cell::new(0));
    let n = Rc::clone(&notified);
    engine.subscribe(move |_| n.set(n.get() + 1));

    assert_eq!(engine.retreat(), Ok(false));
    assert_eq!(engine.current_index(), 0);
    assert_eq!(notified.get(), 0);
    assert_eq!(engine.event_variants(), vec!["I"]);
}

#[test]
fn subscribers_see_every_index_synchronously() {
    let engine = FlowEngine::from_steps(steps(3)).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.subscribe(move |i| sink.borrow_mut().push(i));

    engine.advance().unwrap();
    assert_eq!(*seen.borrow(), vec![1]);
    engine.advance().unwrap();
    engine.retreat().unwrap();
    assert_eq!(*seen.borrow(), vec![1, 2, 1]);
}

#[test]
fn subscriber_may_reenter_engine() {
    // Un suscriptor que salta el step 1 (p.ej. ya respondido) avanzando otra vez
    let engine = Rc::new(FlowEngine::from_steps(steps(4)).unwrap());
    let weak = Rc::downgrade(&engine);
    engine.subscribe(move |i| {
              if i == 1 {
                  if let Some(e) = weak.upgrade() {
                      e.advance().unwrap();
                  }
              }
          });
    engine.advance().unwrap();
    assert_eq!(engine.current_index(), 2);
    assert_eq!(engine.event_variants(), vec!["I", "A", "A"]);
}

#[test]
fn journal_records_transitions_in_order() {
    let done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&done);
    let engine = EngineBuilderInit::new().first_step(StepDefinition::new("a", "", "next"))
                                         .add_step(StepDefinition::new("b", "", "done"))
                                         .on_complete(move || flag.set(true))
                                         .build();
    engine.advance().unwrap();
    engine.retreat().unwrap();
    engine.jump_to(1).unwrap();
    engine.advance().unwrap();
    assert!(done.get());

    let kinds: Vec<FlowEventKind> = engine.events().into_iter().map(|e| e.kind).collect();
    assert!(matches!(kinds[0], FlowEventKind::FlowInitialized { step_count: 2, .. }));
    assert_eq!(kinds[1..].to_vec(),
               vec![FlowEventKind::StepAdvanced { from: 0, to: 1 },
                    FlowEventKind::StepRetreated { from: 1, to: 0 },
                    FlowEventKind::StepJumped { from: 0, to: 1 },
                    FlowEventKind::FlowCompleted { last_index: 1 },]);
    let seqs: Vec<u64> = engine.events().iter().map(|e| e.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
}
