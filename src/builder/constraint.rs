use crate::metadata::{IndexMapping, MetadataHandle};
use crate::naming::NamingStrategy;
use crate::queue::Buildable;
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// A pending index declaration.
#[derive(Clone)]
pub struct Index {
    decl: Rc<RefCell<ConstraintDecl>>,
}

/// A pending unique-constraint declaration.
#[derive(Clone)]
pub struct UniqueConstraint {
    decl: Rc<RefCell<ConstraintDecl>>,
}

/// A pending primary-key declaration.
#[derive(Clone)]
pub struct Primary {
    decl: Rc<RefCell<PrimaryDecl>>,
}

struct ConstraintDecl {
    metadata: MetadataHandle,
    naming: Rc<dyn NamingStrategy>,
    columns: Vec<String>,
    name: Option<String>,
    unique: bool,
}

struct PrimaryDecl {
    metadata: MetadataHandle,
    fields: Vec<String>,
}

impl Index {
    pub(crate) fn new(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        columns: &[&str],
    ) -> Self {
        Self {
            decl: ConstraintDecl::new(metadata, naming, columns, false),
        }
    }

    pub(crate) fn declaration(&self) -> Rc<RefCell<dyn Buildable>> {
        self.decl.clone()
    }

    /// Overrides the generated constraint name.
    pub fn name(self, name: &str) -> Self {
        self.decl.borrow_mut().name = Some(name.to_string());
        self
    }
}

impl UniqueConstraint {
    pub(crate) fn new(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        columns: &[&str],
    ) -> Self {
        Self {
            decl: ConstraintDecl::new(metadata, naming, columns, true),
        }
    }

    pub(crate) fn declaration(&self) -> Rc<RefCell<dyn Buildable>> {
        self.decl.clone()
    }

    /// Overrides the generated constraint name.
    pub fn name(self, name: &str) -> Self {
        self.decl.borrow_mut().name = Some(name.to_string());
        self
    }
}

impl Primary {
    pub(crate) fn new(metadata: MetadataHandle, fields: &[&str]) -> Self {
        Self {
            decl: Rc::new(RefCell::new(PrimaryDecl {
                metadata,
                fields: fields.iter().map(|field| field.to_string()).collect(),
            })),
        }
    }

    pub(crate) fn declaration(&self) -> Rc<RefCell<dyn Buildable>> {
        self.decl.clone()
    }
}

impl ConstraintDecl {
    fn new(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        columns: &[&str],
        unique: bool,
    ) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            metadata,
            naming,
            columns: columns.iter().map(|column| column.to_string()).collect(),
            name: None,
            unique,
        }))
    }
}

impl Buildable for ConstraintDecl {
    fn build(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::invalid_argument(
                "Constraint must cover at least one column",
            ));
        }

        let mut metadata = self.metadata.borrow_mut();
        let name = self.name.clone().unwrap_or_else(|| {
            self.naming
                .constraint_name(metadata.table_name(), &self.columns, self.unique)
        });

        metadata.add_index(IndexMapping {
            name,
            columns: self.columns.clone(),
            unique: self.unique,
        });

        Ok(())
    }
}

impl Buildable for PrimaryDecl {
    fn build(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::invalid_argument(
                "Primary key must cover at least one field",
            ));
        }

        self.metadata.borrow_mut().set_identifier(self.fields.clone());
        Ok(())
    }
}
