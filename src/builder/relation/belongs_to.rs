use super::{relation_methods, Association};
use crate::metadata::{JoinColumn, MetadataHandle, RelationKind};
use crate::naming::NamingStrategy;
use std::cell::RefCell;
use std::rc::Rc;

/// Owning side of a to-one relation; this class holds the foreign key.
#[derive(Clone)]
pub struct BelongsTo {
    assoc: Rc<RefCell<Association>>,
}

relation_methods!(BelongsTo);

impl BelongsTo {
    pub(crate) fn new(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        field: &str,
        target: &str,
    ) -> Self {
        Self {
            assoc: Association::new(metadata, naming, RelationKind::BelongsTo, field, target),
        }
    }

    /// Names the inverse-side property on the target.
    pub fn inversed_by(self, field: &str) -> Self {
        self.assoc.borrow_mut().inversed_by = Some(field.to_string());
        self
    }

    /// Names the foreign-key column. The referenced column and nullability
    /// keep their defaults unless configured afterwards.
    pub fn join_column(self, name: &str) -> Self {
        self.ensure_join_column().name = name.to_string();
        self
    }

    /// Names the referenced column on the target side.
    pub fn references(self, column: &str) -> Self {
        self.ensure_join_column().referenced_column_name = column.to_string();
        self
    }

    /// Makes the foreign-key column non-nullable.
    pub fn required(self) -> Self {
        self.ensure_join_column().nullable = false;
        self
    }

    fn ensure_join_column(&self) -> std::cell::RefMut<'_, JoinColumn> {
        let mut assoc = self.assoc.borrow_mut();
        if assoc.join_column.is_none() {
            let name = assoc.naming.join_column_name(&assoc.field);
            let referenced = assoc.naming.reference_column_name();
            assoc.join_column = Some(JoinColumn {
                name,
                referenced_column_name: referenced,
                nullable: true,
            });
        }
        std::cell::RefMut::map(assoc, |assoc| assoc.join_column.as_mut().unwrap())
    }
}
