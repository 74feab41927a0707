use crate::metadata::{LifecycleEvent, MetadataHandle};
use crate::queue::Buildable;
use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// A pending group of lifecycle-event callback registrations.
///
/// Registrations collect on the declaration and land in the metadata in one
/// step when the queue drains.
#[derive(Clone)]
pub struct LifecycleEvents {
    decl: Rc<RefCell<EventsDecl>>,
}

struct EventsDecl {
    metadata: MetadataHandle,
    callbacks: Vec<(LifecycleEvent, String)>,
}

impl LifecycleEvents {
    pub(crate) fn new(metadata: MetadataHandle) -> Self {
        Self {
            decl: Rc::new(RefCell::new(EventsDecl {
                metadata,
                callbacks: Vec::new(),
            })),
        }
    }

    pub(crate) fn declaration(&self) -> Rc<RefCell<dyn Buildable>> {
        self.decl.clone()
    }

    pub fn on(&self, event: LifecycleEvent, method: &str) -> &Self {
        self.decl
            .borrow_mut()
            .callbacks
            .push((event, method.to_string()));
        self
    }

    pub fn pre_persist(&self, method: &str) -> &Self {
        self.on(LifecycleEvent::PrePersist, method)
    }

    pub fn post_persist(&self, method: &str) -> &Self {
        self.on(LifecycleEvent::PostPersist, method)
    }

    pub fn pre_update(&self, method: &str) -> &Self {
        self.on(LifecycleEvent::PreUpdate, method)
    }

    pub fn post_update(&self, method: &str) -> &Self {
        self.on(LifecycleEvent::PostUpdate, method)
    }

    pub fn pre_remove(&self, method: &str) -> &Self {
        self.on(LifecycleEvent::PreRemove, method)
    }

    pub fn post_remove(&self, method: &str) -> &Self {
        self.on(LifecycleEvent::PostRemove, method)
    }

    pub fn post_load(&self, method: &str) -> &Self {
        self.on(LifecycleEvent::PostLoad, method)
    }

    pub fn pre_flush(&self, method: &str) -> &Self {
        self.on(LifecycleEvent::PreFlush, method)
    }
}

impl Buildable for EventsDecl {
    fn build(&self) -> Result<()> {
        let mut metadata = self.metadata.borrow_mut();
        for (event, method) in &self.callbacks {
            metadata.add_lifecycle_callback(*event, method.clone());
        }
        Ok(())
    }
}
