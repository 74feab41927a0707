mod constraint;
pub use constraint::{Index, Primary, UniqueConstraint};

mod embedded;
pub use embedded::Embedded;

mod entity;
pub use entity::Entity;

mod events;
pub use events::LifecycleEvents;

mod field;
pub use field::Field;

mod inheritance;
pub use inheritance::Inheritance;

mod overrides;
pub use overrides::Override;

pub mod relation;

mod table;
pub use table::Table;

use crate::metadata::{AssociationMapping, InheritanceType, MetadataHandle};
use crate::naming::{guess_singular_field, DefaultNamingStrategy, NamingStrategy};
use crate::queue::{Queue, QueueHandle};
use crate::registry::{Arg, MacroOutput, MacroRegistry};
use crate::{Error, Fields, Fluent, Result};
use std::rc::Rc;

/// Runs a configuration callback against a fresh builder bound to the given
/// metadata, then drains the queue, finalizing every declaration in the
/// order it was made.
pub fn configure<F>(metadata: &MetadataHandle, macros: Rc<MacroRegistry>, f: F) -> Result<()>
where
    F: FnOnce(&Builder) -> Result<()>,
{
    let builder = Builder::with(metadata.clone(), DefaultNamingStrategy::shared(), macros);
    f(&builder)?;
    builder.build_queue()
}

/// The fluent facade.
///
/// Each call either mutates the metadata directly (`table`, `entity`,
/// `inheritance`) or constructs a declaration and appends it to the queue
/// (fields, relations, constraints, embeds, overrides, events). Nothing is
/// finalized until [`Fluent::build_queue`] drains the queue.
pub struct Builder {
    metadata: MetadataHandle,
    queue: QueueHandle,
    naming: Rc<dyn NamingStrategy>,
    macros: Rc<MacroRegistry>,
}

impl Builder {
    pub fn new(metadata: MetadataHandle) -> Self {
        Self::with(
            metadata,
            DefaultNamingStrategy::shared(),
            Rc::new(MacroRegistry::new()),
        )
    }

    pub fn with(
        metadata: MetadataHandle,
        naming: Rc<dyn NamingStrategy>,
        macros: Rc<MacroRegistry>,
    ) -> Self {
        Self {
            metadata,
            queue: Queue::handle(),
            naming,
            macros,
        }
    }

    /// Maps the primary table. Immediate; disallowed on embedded classes.
    pub fn table(&self, name: &str) -> Result<Table> {
        self.disallow_in_embedded_classes("table")?;

        let table = Table::new(self.metadata.clone());
        table.name(name);
        Ok(table)
    }

    /// Maps the primary table through a callback.
    pub fn table_with<F>(&self, f: F) -> Result<Table>
    where
        F: FnOnce(&Table) -> Result<()>,
    {
        self.disallow_in_embedded_classes("table")?;

        let table = Table::new(self.metadata.clone());
        f(&table)?;
        Ok(table)
    }

    /// Entity-level settings. The returned builder shares this builder's
    /// queue and metadata, so the full field and relation vocabulary is
    /// available on it. Disallowed on embedded classes.
    pub fn entity(&self) -> Result<Entity> {
        self.disallow_in_embedded_classes("entity")?;

        Ok(Entity::new(
            self.metadata.clone(),
            self.queue.clone(),
            self.naming.clone(),
        ))
    }

    pub fn entity_with<F>(&self, f: F) -> Result<Entity>
    where
        F: FnOnce(&Entity) -> Result<()>,
    {
        let entity = self.entity()?;
        f(&entity)?;
        Ok(entity)
    }

    /// Declares the inheritance strategy by token. Immediate.
    pub fn inheritance(&self, ty: &str) -> Result<Inheritance> {
        Ok(self.inheritance_of(InheritanceType::parse(ty)?))
    }

    pub fn single_table_inheritance(&self) -> Inheritance {
        self.inheritance_of(InheritanceType::SingleTable)
    }

    pub fn joined_table_inheritance(&self) -> Inheritance {
        self.inheritance_of(InheritanceType::Joined)
    }

    fn inheritance_of(&self, ty: InheritanceType) -> Inheritance {
        Inheritance::new(self.metadata.clone(), ty)
    }

    /// Declares an index over the given columns. Queued.
    pub fn index(&self, columns: &[&str]) -> Index {
        let index = Index::new(self.metadata.clone(), self.naming.clone(), columns);
        self.queue(index.declaration());
        index
    }

    /// Declares a unique constraint over the given columns. Queued.
    pub fn unique(&self, columns: &[&str]) -> UniqueConstraint {
        let unique = UniqueConstraint::new(self.metadata.clone(), self.naming.clone(), columns);
        self.queue(unique.declaration());
        unique
    }

    /// Declares the primary key. Queued.
    pub fn primary(&self, fields: &[&str]) -> Primary {
        let primary = Primary::new(self.metadata.clone(), fields);
        self.queue(primary.declaration());
        primary
    }

    /// Embeds a value object, guessing the field name from the class name.
    /// Queued.
    pub fn embed(&self, class: &str) -> Embedded {
        let field = guess_singular_field(class);
        self.embed_as(class, &field)
    }

    /// Embeds a value object under an explicit field name. Queued.
    pub fn embed_as(&self, class: &str, field: &str) -> Embedded {
        let embedded = Embedded::new(self.metadata.clone(), class, field);
        self.queue(embedded.declaration());
        embedded
    }

    /// Re-configures an association mapping declared earlier (or inherited)
    /// by name. Queued; unknown names fail at drain time.
    pub fn override_mapping<F>(&self, name: &str, f: F) -> Override
    where
        F: Fn(&mut AssociationMapping) -> Result<()> + 'static,
    {
        let over = Override::new(self.metadata.clone(), name, f);
        self.queue(over.declaration());
        over
    }

    /// Groups lifecycle-event callback registrations. Queued.
    pub fn events(&self) -> LifecycleEvents {
        let events = LifecycleEvents::new(self.metadata.clone());
        self.queue(events.declaration());
        events
    }

    pub fn events_with<F>(&self, f: F) -> LifecycleEvents
    where
        F: FnOnce(&LifecycleEvents),
    {
        let events = self.events();
        f(&events);
        events
    }

    /// Dispatches a method by name: reserved-word aliases first, then the
    /// macro registry, otherwise an unknown-method error naming the method.
    pub fn call(&self, method: &str, args: &[Arg]) -> Result<()> {
        // `array` collides with the `array` field type token in host
        // languages with reserved words; keep the alias for parity.
        if method == "array" {
            let name = str_arg(method, args, 0)?;
            self.array(name);
            return Ok(());
        }

        let Some(callback) = self.macros.get(method) else {
            return Err(Error::unknown_method(method));
        };

        match callback(self, args)? {
            MacroOutput::Handled => Ok(()),
            MacroOutput::Queue(declaration) => {
                self.queue_handle().borrow_mut().queue(declaration);
                Ok(())
            }
        }
    }

    pub fn has_macro(&self, name: &str) -> bool {
        self.macros.has_macro(name)
    }

    pub fn is_embedded_class(&self) -> bool {
        self.metadata.borrow().is_embedded_class()
    }

    fn disallow_in_embedded_classes(&self, operation: &str) -> Result<()> {
        if self.is_embedded_class() {
            return Err(Error::structural(format!(
                "[{operation}] may not be used on an embedded-class mapping"
            )));
        }

        Ok(())
    }
}

impl Fluent for Builder {
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

fn str_arg<'a>(method: &str, args: &'a [Arg], position: usize) -> Result<&'a str> {
    args.get(position)
        .and_then(Arg::as_str)
        .ok_or_else(|| {
            Error::invalid_argument(format!(
                "[{method}] expects a string argument at position {position}"
            ))
        })
}
