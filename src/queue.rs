use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// A deferred declaration that finalizes itself against the shared metadata.
///
/// Every declaration produced by a fluent call implements this: `build`
/// validates the collected configuration and, on success, writes the
/// corresponding mapping into the metadata. On invalid configuration it
/// fails with an error naming the offending value and the metadata is left
/// untouched by this declaration.
pub trait Buildable {
    fn build(&self) -> Result<()>;
}

/// Shared handle to the pending-declaration queue.
///
/// The facade and every sub-builder spawned from it (entity, macros) push
/// onto one queue so that a single drain finalizes the whole declaration
/// chain in the order it was written.
pub type QueueHandle = Rc<RefCell<Queue>>;

/// Ordered collection of pending declarations.
///
/// Insertion order is significant: later declarations may depend on
/// mutations performed by earlier ones against the shared metadata, so the
/// drain is strictly FIFO.
#[derive(Default)]
pub struct Queue {
    pending: Vec<Rc<RefCell<dyn Buildable>>>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle() -> QueueHandle {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Appends a declaration. The queue holds it until drained.
    pub fn queue(&mut self, declaration: Rc<RefCell<dyn Buildable>>) {
        self.pending.push(declaration);
    }

    /// The pending declarations, for inspection.
    pub fn pending(&self) -> &[Rc<RefCell<dyn Buildable>>] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes the pending declarations out, leaving the queue empty.
    ///
    /// The drain loop runs over the taken sequence without borrowing the
    /// queue, so a `build()` that reaches back into the queue does not
    /// panic; the caller decides what to do with anything that appears
    /// mid-drain.
    pub fn take_pending(&mut self) -> Vec<Rc<RefCell<dyn Buildable>>> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl Buildable for Noop {
        fn build(&self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn queue_preserves_insertion_order() {
        let mut queue = Queue::new();
        for _ in 0..3 {
            queue.queue(Rc::new(RefCell::new(Noop)));
        }

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pending().len(), 3);
    }

    #[test]
    fn take_pending_leaves_queue_empty() {
        let mut queue = Queue::new();
        queue.queue(Rc::new(RefCell::new(Noop)));

        let taken = queue.take_pending();
        assert_eq!(taken.len(), 1);
        assert!(queue.is_empty());
    }
}
