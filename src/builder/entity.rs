use crate::metadata::MetadataHandle;
use crate::naming::NamingStrategy;
use crate::queue::QueueHandle;
use crate::Fluent;
use std::rc::Rc;

/// Entity-level settings.
///
/// Shares the facade's metadata and queue, so the field, date and relation
/// vocabularies are all available: `builder.entity()?.has_many(..)` queues
/// onto the same queue as the facade itself.
pub struct Entity {
    metadata: MetadataHandle,
    queue: QueueHandle,
    naming: Rc<dyn NamingStrategy>,
}

impl Entity {
    pub(crate) fn new(
        metadata: MetadataHandle,
        queue: QueueHandle,
        naming: Rc<dyn NamingStrategy>,
    ) -> Self {
        Self {
            metadata,
            queue,
            naming,
        }
    }

    /// Flags the entity read-only: never considered for change tracking.
    pub fn read_only(&self) -> &Self {
        self.metadata.borrow_mut().set_read_only(true);
        self
    }

    /// Sets a custom repository class.
    pub fn repository_class(&self, class: &str) -> &Self {
        self.metadata.borrow_mut().set_repository_class(class);
        self
    }
}

impl Fluent for Entity {
    fn metadata(&self) -> &MetadataHandle {
        &self.metadata
    }

    fn queue_handle(&self) -> &QueueHandle {
        &self.queue
    }

    fn naming_strategy(&self) -> &Rc<dyn NamingStrategy> {
        &self.naming
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity").finish_non_exhaustive()
    }
}
