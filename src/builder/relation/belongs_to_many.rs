use super::{relation_methods, Association};
use crate::metadata::{JoinTable, MetadataHandle, RelationKind};
use crate::naming::NamingStrategy;
use std::cell::RefCell;
use std::rc::Rc;

/// Many-to-many relation through a join table.
///
/// Owning by default; calling [`mapped_by`](Self::mapped_by) makes it the
/// inverse side, in which case no join table is generated.
#[derive(Clone)]
pub struct BelongsToMany {
    assoc: Rc<RefCell<Association>>,
}

relation_methods!(BelongsToMany);

impl BelongsToMany {
    pub(crate) fn new(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        field: &str,
        target: &str,
    ) -> Self {
        Self {
            assoc: Association::new(metadata, naming, RelationKind::BelongsToMany, field, target),
        }
    }

    /// Names the inverse-side property on the target.
    pub fn inversed_by(self, field: &str) -> Self {
        self.assoc.borrow_mut().inversed_by = Some(field.to_string());
        self
    }

    /// Marks this as the inverse side, owned by the named property on the
    /// target.
    pub fn mapped_by(self, field: &str) -> Self {
        self.assoc.borrow_mut().mapped_by = Some(field.to_string());
        self
    }

    /// Names the join table.
    pub fn join_table(self, name: &str) -> Self {
        self.assoc.borrow_mut().join_table = Some(JoinTable {
            name: name.to_string(),
        });
        self
    }
}
