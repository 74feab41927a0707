use heck::ToSnakeCase;
use std::rc::Rc;

/// Resolves default names for tables, columns and join structures.
///
/// Consumed by the relation and constraint builders wherever the caller did
/// not name something explicitly. Injected at builder construction so a
/// host ORM can supply its own conventions.
pub trait NamingStrategy {
    /// Default table name for a class.
    fn class_to_table_name(&self, class: &str) -> String;

    /// Default column name for a property.
    fn property_to_column_name(&self, property: &str) -> String;

    /// Default foreign-key column name for a relation property.
    fn join_column_name(&self, property: &str) -> String;

    /// Default referenced column name on the target side.
    fn reference_column_name(&self) -> String;

    /// Default join-table name for a many-to-many relation.
    fn join_table_name(&self, source: &str, target: &str) -> String;

    /// Default name for an index or unique constraint.
    fn constraint_name(&self, table: Option<&str>, columns: &[String], unique: bool) -> String;
}

/// Snake-case naming conventions.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNamingStrategy;

impl DefaultNamingStrategy {
    pub fn shared() -> Rc<dyn NamingStrategy> {
        Rc::new(Self)
    }
}

impl NamingStrategy for DefaultNamingStrategy {
    fn class_to_table_name(&self, class: &str) -> String {
        class_basename(class).to_snake_case()
    }

    fn property_to_column_name(&self, property: &str) -> String {
        property.to_snake_case()
    }

    fn join_column_name(&self, property: &str) -> String {
        format!(
            "{}_{}",
            property.to_snake_case(),
            self.reference_column_name()
        )
    }

    fn reference_column_name(&self) -> String {
        "id".to_string()
    }

    fn join_table_name(&self, source: &str, target: &str) -> String {
        format!(
            "{}_{}",
            self.class_to_table_name(source),
            self.class_to_table_name(target)
        )
    }

    fn constraint_name(&self, table: Option<&str>, columns: &[String], unique: bool) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(columns.len() + 2);
        if let Some(table) = table {
            parts.push(table);
        }
        parts.extend(columns.iter().map(String::as_str));
        parts.push(if unique { "unique" } else { "idx" });
        parts.join("_")
    }
}

/// Guesses the field name for an embedded class: the singularized,
/// snake-cased class basename.
pub(crate) fn guess_singular_field(class: &str) -> String {
    let base = class_basename(class).to_snake_case();
    pluralizer::pluralize(&base, 1, false)
}

fn class_basename(class: &str) -> &str {
    class.rsplit("::").next().unwrap_or(class)
}
