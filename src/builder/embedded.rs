use crate::metadata::{ColumnPrefix, EmbeddedMapping, MetadataHandle};
use crate::queue::Buildable;
use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// A pending embedded value-object declaration.
#[derive(Clone)]
pub struct Embedded {
    decl: Rc<RefCell<EmbeddedDecl>>,
}

struct EmbeddedDecl {
    metadata: MetadataHandle,
    mapping: EmbeddedMapping,
}

impl Embedded {
    pub(crate) fn new(metadata: MetadataHandle, class: &str, field: &str) -> Self {
        Self {
            decl: Rc::new(RefCell::new(EmbeddedDecl {
                metadata,
                mapping: EmbeddedMapping {
                    field: field.to_string(),
                    class: class.to_string(),
                    column_prefix: ColumnPrefix::Default,
                },
            })),
        }
    }

    pub(crate) fn declaration(&self) -> Rc<RefCell<dyn Buildable>> {
        self.decl.clone()
    }

    /// Sets an explicit column prefix.
    pub fn prefix(self, prefix: &str) -> Self {
        self.decl.borrow_mut().mapping.column_prefix = ColumnPrefix::Custom(prefix.to_string());
        self
    }

    /// Embedded columns keep their own names.
    pub fn no_prefix(self) -> Self {
        self.decl.borrow_mut().mapping.column_prefix = ColumnPrefix::None;
        self
    }
}

impl Buildable for EmbeddedDecl {
    fn build(&self) -> Result<()> {
        self.metadata.borrow_mut().add_embedded(self.mapping.clone())
    }
}
