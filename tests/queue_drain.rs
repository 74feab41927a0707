use mapwright::metadata::ClassMetadata;
use mapwright::{Buildable, Builder, Fluent, QueueHandle, Result};
use std::cell::RefCell;
use std::rc::Rc;

fn builder() -> Builder {
    Builder::new(ClassMetadata::new("Subject").handle())
}

/// Records the order its `build()` ran in.
struct Recorder {
    id: usize,
    log: Rc<RefCell<Vec<usize>>>,
}

impl Buildable for Recorder {
    fn build(&self) -> Result<()> {
        self.log.borrow_mut().push(self.id);
        Ok(())
    }
}

/// Fails its `build()`.
struct Failing;

impl Buildable for Failing {
    fn build(&self) -> Result<()> {
        Err(mapwright::err!("declaration rejected"))
    }
}

/// Enqueues another declaration from within `build()`.
struct Reentrant {
    queue: QueueHandle,
    log: Rc<RefCell<Vec<usize>>>,
}

impl Buildable for Reentrant {
    fn build(&self) -> Result<()> {
        self.queue.borrow_mut().queue(Rc::new(RefCell::new(Recorder {
            id: 99,
            log: self.log.clone(),
        })));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FIFO drain — declarations finalize in insertion order, exactly once
// ---------------------------------------------------------------------------

#[test]
fn drain_runs_in_insertion_order() {
    let builder = builder();
    let log = Rc::new(RefCell::new(Vec::new()));

    for id in 0..5 {
        builder.queue(Rc::new(RefCell::new(Recorder {
            id,
            log: log.clone(),
        })));
    }

    builder.build_queue().unwrap();
    assert_eq!(*log.borrow(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn drain_clears_the_queue() {
    let builder = builder();
    let log = Rc::new(RefCell::new(Vec::new()));
    builder.queue(Rc::new(RefCell::new(Recorder { id: 0, log })));

    assert_eq!(builder.queue_handle().borrow().len(), 1);
    builder.build_queue().unwrap();
    assert!(builder.queue_handle().borrow().is_empty());
}

#[test]
fn second_drain_builds_nothing() {
    let builder = builder();
    let log = Rc::new(RefCell::new(Vec::new()));
    builder.queue(Rc::new(RefCell::new(Recorder {
        id: 0,
        log: log.clone(),
    })));

    builder.build_queue().unwrap();
    builder.build_queue().unwrap();
    assert_eq!(*log.borrow(), vec![0]);
}

#[test]
fn queue_is_inspectable_before_drain() {
    let builder = builder();
    let log = Rc::new(RefCell::new(Vec::new()));
    builder.queue(Rc::new(RefCell::new(Recorder { id: 0, log })));

    assert_eq!(builder.queue_handle().borrow().pending().len(), 1);
}

// ---------------------------------------------------------------------------
// Failure — the drain stops at the first failing declaration
// ---------------------------------------------------------------------------

#[test]
fn failing_declaration_aborts_the_drain() {
    let builder = builder();
    let log = Rc::new(RefCell::new(Vec::new()));

    builder.queue(Rc::new(RefCell::new(Recorder {
        id: 0,
        log: log.clone(),
    })));
    builder.queue(Rc::new(RefCell::new(Failing)));
    builder.queue(Rc::new(RefCell::new(Recorder {
        id: 2,
        log: log.clone(),
    })));

    let err = builder.build_queue().unwrap_err();
    assert_eq!(err.to_string(), "declaration rejected");
    // Declarations before the failure built; those after did not.
    assert_eq!(*log.borrow(), vec![0]);
}

// ---------------------------------------------------------------------------
// Re-entrant queueing — unsupported, detected after the pass
// ---------------------------------------------------------------------------

#[test]
fn queueing_during_drain_is_a_structural_error() {
    let builder = builder();
    let log = Rc::new(RefCell::new(Vec::new()));

    builder.queue(Rc::new(RefCell::new(Reentrant {
        queue: builder.queue_handle().clone(),
        log: log.clone(),
    })));

    let err = builder.build_queue().unwrap_err();
    assert!(err.is_structural());
    // The late declaration never built.
    assert!(log.borrow().is_empty());
}
