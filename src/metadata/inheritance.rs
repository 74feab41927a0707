use super::FieldType;
use crate::{Error, Result};
use indexmap::IndexMap;

/// How a class hierarchy maps to tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InheritanceType {
    /// All classes of the hierarchy share one table
    #[default]
    SingleTable,
    /// Each class maps to its own table, joined on the identifier
    Joined,
}

impl InheritanceType {
    /// Parses an inheritance-type token, rejecting anything outside the
    /// legal set.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "SINGLE_TABLE" => Ok(Self::SingleTable),
            "JOINED" => Ok(Self::Joined),
            _ => Err(Error::invalid_argument(format!(
                "Inheritance type [{token}] does not exist"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleTable => "SINGLE_TABLE",
            Self::Joined => "JOINED",
        }
    }
}

/// The discriminator column distinguishing hierarchy members.
#[derive(Debug, Clone)]
pub struct DiscriminatorColumn {
    pub name: String,
    pub ty: FieldType,
}

/// Inheritance mapping of a class hierarchy.
#[derive(Debug, Clone, Default)]
pub struct InheritanceMapping {
    pub ty: InheritanceType,

    pub discriminator_column: Option<DiscriminatorColumn>,

    /// Discriminator value to class name
    pub discriminator_map: IndexMap<String, String>,
}
