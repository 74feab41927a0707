use crate::builder::relation::{BelongsTo, BelongsToMany, HasMany, HasOne};
use crate::builder::Field;
use crate::metadata::{FieldType, MetadataHandle};
use crate::naming::NamingStrategy;
use crate::queue::{Buildable, QueueHandle};
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Capability shared by the facade and every sub-builder spawned from it:
/// access to the metadata handle, the pending-declaration queue and the
/// naming strategy. The field, date and relation vocabularies are blanket
/// implemented on top of it.
pub trait Fluent {
    fn metadata(&self) -> &MetadataHandle;

    fn queue_handle(&self) -> &QueueHandle;

    fn naming_strategy(&self) -> &Rc<dyn NamingStrategy>;

    /// Appends a declaration to the shared queue.
    fn queue(&self, declaration: Rc<RefCell<dyn Buildable>>) {
        self.queue_handle().borrow_mut().queue(declaration);
    }

    /// Drains the queue: finalizes every pending declaration in insertion
    /// order, exactly once, then leaves the queue empty.
    ///
    /// Queueing new declarations from within a `build()` call is
    /// unsupported; the drain detects it after the pass and fails with a
    /// structural error rather than silently finalizing out of order.
    fn build_queue(&self) -> Result<()> {
        let pending = self.queue_handle().borrow_mut().take_pending();

        for declaration in &pending {
            declaration.borrow().build()?;
        }

        if !self.queue_handle().borrow().is_empty() {
            return Err(Error::structural(
                "declarations may not be queued while the queue is draining",
            ));
        }

        Ok(())
    }
}

/// Typed field declarations.
pub trait Fields: Fluent + Sized {
    /// Declares a field of the named type. The type token is validated
    /// immediately; the field mapping itself is finalized at drain time.
    fn field(&self, ty: &str, name: &str) -> Result<Field> {
        Ok(self.field_of(FieldType::parse(ty)?, name))
    }

    fn field_of(&self, ty: FieldType, name: &str) -> Field {
        let field = Field::new(
            self.metadata().clone(),
            self.naming_strategy().clone(),
            ty,
            name,
        );
        self.queue_handle().borrow_mut().queue(field.declaration());
        field
    }

    fn string(&self, name: &str) -> Field {
        self.field_of(FieldType::String, name)
    }

    fn text(&self, name: &str) -> Field {
        self.field_of(FieldType::Text, name)
    }

    fn integer(&self, name: &str) -> Field {
        self.field_of(FieldType::Integer, name)
    }

    fn small_integer(&self, name: &str) -> Field {
        self.field_of(FieldType::SmallInt, name)
    }

    fn big_integer(&self, name: &str) -> Field {
        self.field_of(FieldType::BigInt, name)
    }

    fn decimal(&self, name: &str) -> Field {
        self.field_of(FieldType::Decimal, name)
    }

    fn float(&self, name: &str) -> Field {
        self.field_of(FieldType::Float, name)
    }

    fn boolean(&self, name: &str) -> Field {
        self.field_of(FieldType::Boolean, name)
    }

    fn binary(&self, name: &str) -> Field {
        self.field_of(FieldType::Binary, name)
    }

    fn blob(&self, name: &str) -> Field {
        self.field_of(FieldType::Blob, name)
    }

    fn guid(&self, name: &str) -> Field {
        self.field_of(FieldType::Guid, name)
    }

    fn json(&self, name: &str) -> Field {
        self.field_of(FieldType::Json, name)
    }

    fn simple_array(&self, name: &str) -> Field {
        self.field_of(FieldType::SimpleArray, name)
    }

    fn array(&self, name: &str) -> Field {
        self.field_of(FieldType::Array, name)
    }

    /// Auto-incrementing unsigned integer primary key.
    fn increments(&self, name: &str) -> Field {
        self.field_of(FieldType::Integer, name)
            .unsigned()
            .primary()
            .auto_increment()
    }
}

/// Date and time field declarations.
pub trait Dates: Fields {
    fn date(&self, name: &str) -> Field {
        self.field_of(FieldType::Date, name)
    }

    fn time(&self, name: &str) -> Field {
        self.field_of(FieldType::Time, name)
    }

    fn datetime(&self, name: &str) -> Field {
        self.field_of(FieldType::DateTime, name)
    }

    fn datetime_tz(&self, name: &str) -> Field {
        self.field_of(FieldType::DateTimeTz, name)
    }

    /// Declares the conventional `created_at` / `updated_at` pair.
    fn timestamps(&self) {
        self.datetime("created_at");
        self.datetime("updated_at").nullable();
    }
}

/// Relation declarations.
///
/// Every method queues an association declaration at creation and returns a
/// handle for further configuration (cascade, fetch, sides, join mapping).
pub trait Relations: Fluent + Sized {
    /// Owning side of a to-one relation; this class holds the foreign key.
    fn belongs_to(&self, field: &str, target: &str) -> BelongsTo {
        let relation = BelongsTo::new(
            self.metadata().clone(),
            self.naming_strategy().clone(),
            field,
            target,
        );
        self.queue_handle().borrow_mut().queue(relation.declaration());
        relation
    }

    /// Inverse side of a one-to-one relation.
    fn has_one(&self, field: &str, target: &str) -> HasOne {
        let relation = HasOne::new(
            self.metadata().clone(),
            self.naming_strategy().clone(),
            field,
            target,
        );
        self.queue_handle().borrow_mut().queue(relation.declaration());
        relation
    }

    /// Inverse side of a one-to-many relation.
    fn has_many(&self, field: &str, target: &str) -> HasMany {
        let relation = HasMany::new(
            self.metadata().clone(),
            self.naming_strategy().clone(),
            field,
            target,
        );
        self.queue_handle().borrow_mut().queue(relation.declaration());
        relation
    }

    /// Many-to-many relation through a join table.
    fn belongs_to_many(&self, field: &str, target: &str) -> BelongsToMany {
        let relation = BelongsToMany::new(
            self.metadata().clone(),
            self.naming_strategy().clone(),
            field,
            target,
        );
        self.queue_handle().borrow_mut().queue(relation.declaration());
        relation
    }

    // ORM-style aliases for the same four shapes.

    fn many_to_one(&self, field: &str, target: &str) -> BelongsTo {
        self.belongs_to(field, target)
    }

    fn one_to_one(&self, field: &str, target: &str) -> HasOne {
        self.has_one(field, target)
    }

    fn one_to_many(&self, field: &str, target: &str) -> HasMany {
        self.has_many(field, target)
    }

    fn many_to_many(&self, field: &str, target: &str) -> BelongsToMany {
        self.belongs_to_many(field, target)
    }
}

impl<T: Fluent> Fields for T {}
impl<T: Fluent> Dates for T {}
impl<T: Fluent> Relations for T {}
