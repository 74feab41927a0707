use crate::metadata::MetadataHandle;

/// Primary-table settings. Immediate: every call writes straight into the
/// metadata so that later declarations (constraint naming in particular)
/// observe the table name.
pub struct Table {
    metadata: MetadataHandle,
}

impl Table {
    pub(crate) fn new(metadata: MetadataHandle) -> Self {
        Self { metadata }
    }

    pub fn name(&self, name: &str) -> &Self {
        self.metadata.borrow_mut().set_table_name(name);
        self
    }

    pub fn schema(&self, schema: &str) -> &Self {
        self.metadata.borrow_mut().set_table_schema(schema);
        self
    }

    pub fn option(&self, key: &str, value: &str) -> &Self {
        self.metadata.borrow_mut().set_table_option(key, value);
        self
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table").finish_non_exhaustive()
    }
}
