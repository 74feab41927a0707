use crate::metadata::{
    AssociationMapping, CascadeAction, FetchMode, JoinColumn, JoinTable, MetadataHandle,
    RelationKind,
};
use crate::naming::NamingStrategy;
use crate::queue::Buildable;
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Configuration collected for one relation declaration.
///
/// The four relation handles all share this; kind-specific options are
/// exposed on the handles, the finalize logic lives here.
struct Association {
    metadata: MetadataHandle,
    naming: Rc<dyn NamingStrategy>,
    kind: RelationKind,
    field: String,
    target: String,
    cascade: Vec<CascadeAction>,
    fetch: FetchMode,
    mapped_by: Option<String>,
    inversed_by: Option<String>,
    orphan_removal: bool,
    join_column: Option<JoinColumn>,
    join_table: Option<JoinTable>,
}

impl Association {
    fn new(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        kind: RelationKind,
        field: &str,
        target: &str,
    ) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            metadata,
            naming,
            kind,
            field: field.to_string(),
            target: target.to_string(),
            cascade: Vec::new(),
            fetch: FetchMode::default(),
            mapped_by: None,
            inversed_by: None,
            orphan_removal: false,
            join_column: None,
            join_table: None,
        }))
    }

    /// Validates and records one cascade token. Set semantics: adding a
    /// token twice keeps a single entry.
    fn add_cascade(&mut self, token: &str) -> Result<()> {
        self.add_cascade_action(CascadeAction::parse(token)?);
        Ok(())
    }

    fn add_cascade_action(&mut self, action: CascadeAction) {
        if !self.cascade.contains(&action) {
            self.cascade.push(action);
        }
    }
}

impl Buildable for Association {
    fn build(&self) -> Result<()> {
        if self.mapped_by.is_some() && self.inversed_by.is_some() {
            return Err(Error::invalid_argument(format!(
                "Association [{}] may not define both mappedBy and inversedBy",
                self.field
            )));
        }

        // Owning sides get default join mappings when none were configured.
        let join_column = match (&self.join_column, self.kind) {
            (Some(join_column), _) => Some(join_column.clone()),
            (None, RelationKind::BelongsTo) => Some(JoinColumn {
                name: self.naming.join_column_name(&self.field),
                referenced_column_name: self.naming.reference_column_name(),
                nullable: true,
            }),
            (None, _) => None,
        };

        let join_table = match (&self.join_table, self.kind) {
            (Some(join_table), _) => Some(join_table.clone()),
            (None, RelationKind::BelongsToMany) if self.mapped_by.is_none() => Some(JoinTable {
                name: self
                    .naming
                    .join_table_name(self.metadata.borrow().name(), &self.target),
            }),
            (None, _) => None,
        };

        self.metadata.borrow_mut().add_association(AssociationMapping {
            field: self.field.clone(),
            target: self.target.clone(),
            kind: self.kind,
            cascade: self.cascade.clone(),
            fetch: self.fetch,
            mapped_by: self.mapped_by.clone(),
            inversed_by: self.inversed_by.clone(),
            orphan_removal: self.orphan_removal,
            join_column,
            join_table,
        })
    }
}

/// Generates the configuration methods every relation handle shares.
macro_rules! relation_methods {
    ($handle:ident) => {
        impl $handle {
            pub(crate) fn declaration(
                &self,
            ) -> std::rc::Rc<std::cell::RefCell<dyn crate::queue::Buildable>> {
                self.assoc.clone()
            }

            /// Sets the cascade list. Every token is validated immediately;
            /// an invalid token rejects the call naming the token.
            pub fn cascade(self, actions: &[&str]) -> crate::Result<Self> {
                {
                    let mut assoc = self.assoc.borrow_mut();
                    for token in actions {
                        assoc.add_cascade(token)?;
                    }
                }
                Ok(self)
            }

            /// Cascades every operation.
            pub fn cascade_all(self) -> Self {
                {
                    let mut assoc = self.assoc.borrow_mut();
                    for action in crate::metadata::CascadeAction::ALL {
                        assoc.add_cascade_action(action);
                    }
                }
                self
            }

            /// Sets the fetch mode by token, rejecting anything outside the
            /// legal set.
            pub fn fetch(self, mode: &str) -> crate::Result<Self> {
                self.assoc.borrow_mut().fetch = crate::metadata::FetchMode::parse(mode)?;
                Ok(self)
            }

            pub fn fetch_lazy(self) -> Self {
                self.assoc.borrow_mut().fetch = crate::metadata::FetchMode::Lazy;
                self
            }

            pub fn fetch_eager(self) -> Self {
                self.assoc.borrow_mut().fetch = crate::metadata::FetchMode::Eager;
                self
            }

            pub fn fetch_extra_lazy(self) -> Self {
                self.assoc.borrow_mut().fetch = crate::metadata::FetchMode::ExtraLazy;
                self
            }
        }
    };
}

pub(crate) use relation_methods;

mod belongs_to;
pub use belongs_to::BelongsTo;

mod belongs_to_many;
pub use belongs_to_many::BelongsToMany;

mod has_many;
pub use has_many::HasMany;

mod has_one;
pub use has_one::HasOne;
