/// How an embedded object's columns are prefixed in the parent table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnPrefix {
    /// Prefix with the field name followed by an underscore
    #[default]
    Default,
    /// No prefix; embedded columns keep their own names
    None,
    /// Explicit prefix
    Custom(String),
}

/// A finalized embedded value-object mapping.
#[derive(Debug, Clone)]
pub struct EmbeddedMapping {
    /// Property the embedded object is mapped to
    pub field: String,

    /// The embeddable class
    pub class: String,

    pub column_prefix: ColumnPrefix,
}

impl EmbeddedMapping {
    /// The effective column prefix for this embedded mapping.
    pub fn prefix(&self) -> Option<String> {
        match &self.column_prefix {
            ColumnPrefix::Default => Some(format!("{}_", self.field)),
            ColumnPrefix::None => None,
            ColumnPrefix::Custom(prefix) => Some(prefix.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(column_prefix: ColumnPrefix) -> EmbeddedMapping {
        EmbeddedMapping {
            field: "price".into(),
            class: "Money".into(),
            column_prefix,
        }
    }

    #[test]
    fn default_prefix_is_field_name() {
        assert_eq!(mapping(ColumnPrefix::Default).prefix().unwrap(), "price_");
    }

    #[test]
    fn prefix_can_be_disabled_or_customized() {
        assert_eq!(mapping(ColumnPrefix::None).prefix(), None);
        assert_eq!(
            mapping(ColumnPrefix::Custom("amount_".into())).prefix().unwrap(),
            "amount_"
        );
    }
}
