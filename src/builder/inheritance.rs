use crate::metadata::{DiscriminatorColumn, FieldType, InheritanceType, MetadataHandle};
use crate::Result;

/// Inheritance-strategy settings. Immediate: every call writes straight
/// into the metadata.
pub struct Inheritance {
    metadata: MetadataHandle,
}

impl Inheritance {
    pub(crate) fn new(metadata: MetadataHandle, ty: InheritanceType) -> Self {
        metadata.borrow_mut().set_inheritance_type(ty);
        Self { metadata }
    }

    /// Names the discriminator column, keeping the string type.
    pub fn column(&self, name: &str) -> &Self {
        self.set_column(name, FieldType::String);
        self
    }

    /// Names the discriminator column with an explicit type token.
    pub fn column_typed(&self, name: &str, ty: &str) -> Result<&Self> {
        self.set_column(name, FieldType::parse(ty)?);
        Ok(self)
    }

    /// Adds a discriminator-map entry.
    pub fn map(&self, value: &str, class: &str) -> &Self {
        self.metadata
            .borrow_mut()
            .inheritance_mut()
            .discriminator_map
            .insert(value.to_string(), class.to_string());
        self
    }

    fn set_column(&self, name: &str, ty: FieldType) {
        self.metadata
            .borrow_mut()
            .inheritance_mut()
            .discriminator_column = Some(DiscriminatorColumn {
            name: name.to_string(),
            ty,
        });
    }
}

impl std::fmt::Debug for Inheritance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inheritance").finish_non_exhaustive()
    }
}
