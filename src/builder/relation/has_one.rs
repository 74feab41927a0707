use super::{relation_methods, Association};
use crate::metadata::{MetadataHandle, RelationKind};
use crate::naming::NamingStrategy;
use std::cell::RefCell;
use std::rc::Rc;

/// Inverse side of a one-to-one relation.
#[derive(Clone)]
pub struct HasOne {
    assoc: Rc<RefCell<Association>>,
}

relation_methods!(HasOne);

impl HasOne {
    pub(crate) fn new(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        field: &str,
        target: &str,
    ) -> Self {
        Self {
            assoc: Association::new(metadata, naming, RelationKind::HasOne, field, target),
        }
    }

    /// Names the owning-side property on the target.
    pub fn mapped_by(self, field: &str) -> Self {
        self.assoc.borrow_mut().mapped_by = Some(field.to_string());
        self
    }

    /// Removes the related object when it is no longer referenced.
    pub fn orphan_removal(self) -> Self {
        self.assoc.borrow_mut().orphan_removal = true;
        self
    }
}
