use crate::metadata::{AssociationMapping, MetadataHandle};
use crate::queue::Buildable;
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// A pending association override.
///
/// Holds a callback that re-configures an association mapping already
/// present in the metadata when this declaration drains. Declaration order
/// matters: the overridden association must build before the override.
pub struct Override {
    decl: Rc<RefCell<OverrideDecl>>,
}

struct OverrideDecl {
    metadata: MetadataHandle,
    name: String,
    callback: Box<dyn Fn(&mut AssociationMapping) -> Result<()>>,
}

impl Override {
    pub(crate) fn new<F>(metadata: MetadataHandle, name: &str, callback: F) -> Self
    where
        F: Fn(&mut AssociationMapping) -> Result<()> + 'static,
    {
        Self {
            decl: Rc::new(RefCell::new(OverrideDecl {
                metadata,
                name: name.to_string(),
                callback: Box::new(callback),
            })),
        }
    }

    pub(crate) fn declaration(&self) -> Rc<RefCell<dyn Buildable>> {
        self.decl.clone()
    }
}

impl Buildable for OverrideDecl {
    fn build(&self) -> Result<()> {
        let mut metadata = self.metadata.borrow_mut();

        let Some(mapping) = metadata.association_mut(&self.name) else {
            return Err(Error::invalid_argument(format!(
                "Association [{}] does not exist and cannot be overridden",
                self.name
            )));
        };

        (self.callback)(mapping)
    }
}
