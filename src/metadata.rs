mod association;
pub use association::{
    AssociationMapping, CascadeAction, FetchMode, JoinColumn, JoinTable, RelationKind,
};

mod constraint;
pub use constraint::IndexMapping;

mod embedded;
pub use embedded::{ColumnPrefix, EmbeddedMapping};

mod events;
pub use events::LifecycleEvent;

mod field;
pub use field::{FieldMapping, FieldType};

mod inheritance;
pub use inheritance::{DiscriminatorColumn, InheritanceMapping, InheritanceType};

use crate::{Error, Result};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the class metadata being assembled.
///
/// All queued declarations hold a clone and mutate the metadata during
/// `build()`. Single-threaded by design; the builder and its declarations
/// live on one logical thread of execution.
pub type MetadataHandle = Rc<RefCell<ClassMetadata>>;

/// The mapping metadata for one mapped class.
///
/// This models the surface the fluent layer consumes from the host ORM:
/// table name, class-level flags, field mappings, association mappings and
/// constraints. Nothing here executes queries; it is a passive container.
#[derive(Debug, Default)]
pub struct ClassMetadata {
    /// Name of the mapped class
    name: String,

    /// Primary table mapping
    table: TableMetadata,

    /// True when the class is an embedded value object without its own table
    embedded_class: bool,

    /// True when the entity is flagged read-only
    read_only: bool,

    /// Custom repository class, if any
    repository_class: Option<String>,

    /// Field mappings keyed by property name, insertion ordered
    fields: IndexMap<String, FieldMapping>,

    /// Association mappings keyed by property name, insertion ordered
    associations: IndexMap<String, AssociationMapping>,

    /// Embedded value-object mappings keyed by property name
    embeddeds: IndexMap<String, EmbeddedMapping>,

    /// Indexes and unique constraints, in declaration order
    indexes: Vec<IndexMapping>,

    /// Properties forming the identifier (primary key)
    identifier: Vec<String>,

    /// Lifecycle callbacks, keyed by event
    lifecycle_callbacks: IndexMap<LifecycleEvent, Vec<String>>,

    /// Inheritance mapping, if the class is part of a hierarchy
    inheritance: Option<InheritanceMapping>,
}

/// The primary table of a mapped class.
#[derive(Debug, Default, Clone)]
pub struct TableMetadata {
    pub name: Option<String>,
    pub schema: Option<String>,
    pub options: IndexMap<String, String>,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Metadata for an embedded value object. Embedded classes have no table
    /// of their own; class-level operations are rejected against them.
    pub fn new_embedded(name: impl Into<String>) -> Self {
        Self {
            embedded_class: true,
            ..Self::new(name)
        }
    }

    /// Wraps the metadata in a shared handle.
    pub fn handle(self) -> MetadataHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_embedded_class(&self) -> bool {
        self.embedded_class
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn repository_class(&self) -> Option<&str> {
        self.repository_class.as_deref()
    }

    pub fn set_repository_class(&mut self, class: impl Into<String>) {
        self.repository_class = Some(class.into());
    }

    pub fn table(&self) -> &TableMetadata {
        &self.table
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table.name.as_deref()
    }

    pub fn set_table_name(&mut self, name: impl Into<String>) {
        self.table.name = Some(name.into());
    }

    pub fn set_table_schema(&mut self, schema: impl Into<String>) {
        self.table.schema = Some(schema.into());
    }

    pub fn set_table_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.table.options.insert(key.into(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldMapping> {
        self.fields.values()
    }

    pub fn add_field(&mut self, mapping: FieldMapping) -> Result<()> {
        self.assert_unmapped(&mapping.name)?;
        if mapping.primary {
            self.identifier.push(mapping.name.clone());
        }
        self.fields.insert(mapping.name.clone(), mapping);
        Ok(())
    }

    pub fn association(&self, name: &str) -> Option<&AssociationMapping> {
        self.associations.get(name)
    }

    pub fn association_mut(&mut self, name: &str) -> Option<&mut AssociationMapping> {
        self.associations.get_mut(name)
    }

    pub fn associations(&self) -> impl Iterator<Item = &AssociationMapping> {
        self.associations.values()
    }

    pub fn add_association(&mut self, mapping: AssociationMapping) -> Result<()> {
        self.assert_unmapped(&mapping.field)?;
        self.associations.insert(mapping.field.clone(), mapping);
        Ok(())
    }

    pub fn embedded(&self, name: &str) -> Option<&EmbeddedMapping> {
        self.embeddeds.get(name)
    }

    pub fn add_embedded(&mut self, mapping: EmbeddedMapping) -> Result<()> {
        self.assert_unmapped(&mapping.field)?;
        self.embeddeds.insert(mapping.field.clone(), mapping);
        Ok(())
    }

    pub fn indexes(&self) -> &[IndexMapping] {
        &self.indexes
    }

    pub fn add_index(&mut self, mapping: IndexMapping) {
        self.indexes.push(mapping);
    }

    pub fn identifier(&self) -> &[String] {
        &self.identifier
    }

    pub fn set_identifier(&mut self, fields: Vec<String>) {
        self.identifier = fields;
    }

    pub fn lifecycle_callbacks(&self, event: LifecycleEvent) -> &[String] {
        self.lifecycle_callbacks
            .get(&event)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn add_lifecycle_callback(&mut self, event: LifecycleEvent, method: impl Into<String>) {
        self.lifecycle_callbacks
            .entry(event)
            .or_default()
            .push(method.into());
    }

    pub fn inheritance(&self) -> Option<&InheritanceMapping> {
        self.inheritance.as_ref()
    }

    pub fn inheritance_mut(&mut self) -> &mut InheritanceMapping {
        self.inheritance
            .get_or_insert_with(InheritanceMapping::default)
    }

    pub fn set_inheritance_type(&mut self, ty: InheritanceType) {
        self.inheritance_mut().ty = ty;
    }

    fn assert_unmapped(&self, property: &str) -> Result<()> {
        let taken = self.fields.contains_key(property)
            || self.associations.contains_key(property)
            || self.embeddeds.contains_key(property);

        if taken {
            return Err(Error::invalid_argument(format!(
                "Property [{}] is already mapped on [{}]",
                property, self.name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_property_is_rejected() {
        let mut metadata = ClassMetadata::new("User");
        metadata
            .add_field(FieldMapping::new(FieldType::String, "email"))
            .unwrap();

        let err = metadata
            .add_field(FieldMapping::new(FieldType::Text, "email"))
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Property [email] is already mapped on [User]"
        );
    }

    #[test]
    fn primary_field_joins_identifier() {
        let mut metadata = ClassMetadata::new("User");
        let mut id = FieldMapping::new(FieldType::Integer, "id");
        id.primary = true;
        metadata.add_field(id).unwrap();

        assert_eq!(metadata.identifier(), ["id"]);
    }

    #[test]
    fn embedded_metadata_reports_flag() {
        assert!(ClassMetadata::new_embedded("Money").is_embedded_class());
        assert!(!ClassMetadata::new("User").is_embedded_class());
    }
}
