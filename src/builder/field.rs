use crate::metadata::{FieldMapping, FieldType, MetadataHandle};
use crate::naming::NamingStrategy;
use crate::queue::Buildable;
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// A pending field declaration.
///
/// Created (and queued) by the [`Fields`](crate::Fields) vocabulary; every
/// option call configures the shared declaration, and the mapping is written
/// into the metadata when the queue drains.
#[derive(Clone)]
pub struct Field {
    decl: Rc<RefCell<FieldDecl>>,
}

struct FieldDecl {
    metadata: MetadataHandle,
    naming: Rc<dyn NamingStrategy>,
    mapping: FieldMapping,
}

impl Field {
    pub(crate) fn new(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        ty: FieldType,
        name: &str,
    ) -> Self {
        Self {
            decl: Rc::new(RefCell::new(FieldDecl {
                metadata,
                naming,
                mapping: FieldMapping::new(ty, name),
            })),
        }
    }

    pub(crate) fn declaration(&self) -> Rc<RefCell<dyn Buildable>> {
        self.decl.clone()
    }

    /// Maps the field to an explicit column name.
    pub fn column(self, name: &str) -> Self {
        self.decl.borrow_mut().mapping.column = Some(name.to_string());
        self
    }

    pub fn nullable(self) -> Self {
        self.decl.borrow_mut().mapping.nullable = true;
        self
    }

    pub fn unique(self) -> Self {
        self.decl.borrow_mut().mapping.unique = true;
        self
    }

    pub fn unsigned(self) -> Self {
        self.decl.borrow_mut().mapping.unsigned = true;
        self
    }

    pub fn length(self, length: u32) -> Self {
        self.decl.borrow_mut().mapping.length = Some(length);
        self
    }

    pub fn precision(self, precision: u32) -> Self {
        self.decl.borrow_mut().mapping.precision = Some(precision);
        self
    }

    pub fn scale(self, scale: u32) -> Self {
        self.decl.borrow_mut().mapping.scale = Some(scale);
        self
    }

    pub fn default_value(self, value: impl ToString) -> Self {
        self.decl.borrow_mut().mapping.default = Some(value.to_string());
        self
    }

    /// Marks the field as part of the identifier.
    pub fn primary(self) -> Self {
        self.decl.borrow_mut().mapping.primary = true;
        self
    }

    pub fn auto_increment(self) -> Self {
        self.decl.borrow_mut().mapping.auto_increment = true;
        self
    }
}

impl Buildable for FieldDecl {
    fn build(&self) -> Result<()> {
        if self.mapping.auto_increment && !self.mapping.ty.is_numeric() {
            return Err(Error::invalid_argument(format!(
                "Field [{}] of type [{}] cannot auto-increment",
                self.mapping.name,
                self.mapping.ty.as_str()
            )));
        }

        let mut mapping = self.mapping.clone();
        if mapping.column.is_none() {
            mapping.column = Some(self.naming.property_to_column_name(&mapping.name));
        }

        self.metadata.borrow_mut().add_field(mapping)
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").finish_non_exhaustive()
    }
}
