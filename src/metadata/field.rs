use crate::{Error, Result};

/// The storage type of a mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    SmallInt,
    Integer,
    BigInt,
    Decimal,
    Float,
    String,
    Text,
    Guid,
    Binary,
    Blob,
    Boolean,
    Date,
    DateTime,
    DateTimeTz,
    Time,
    Array,
    SimpleArray,
    Json,
}

impl FieldType {
    /// Parses a type token, rejecting anything outside the legal set.
    ///
    /// Validation runs synchronously at fluent-call time; invalid field
    /// declarations never enter the queue.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "smallint" => Ok(Self::SmallInt),
            "integer" => Ok(Self::Integer),
            "bigint" => Ok(Self::BigInt),
            "decimal" => Ok(Self::Decimal),
            "float" => Ok(Self::Float),
            "string" => Ok(Self::String),
            "text" => Ok(Self::Text),
            "guid" => Ok(Self::Guid),
            "binary" => Ok(Self::Binary),
            "blob" => Ok(Self::Blob),
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "datetime" => Ok(Self::DateTime),
            "datetimetz" => Ok(Self::DateTimeTz),
            "time" => Ok(Self::Time),
            "array" => Ok(Self::Array),
            "simple_array" => Ok(Self::SimpleArray),
            "json" => Ok(Self::Json),
            _ => Err(Error::invalid_argument(format!(
                "Field type [{token}] does not exist"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SmallInt => "smallint",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::String => "string",
            Self::Text => "text",
            Self::Guid => "guid",
            Self::Binary => "binary",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::DateTimeTz => "datetimetz",
            Self::Time => "time",
            Self::Array => "array",
            Self::SimpleArray => "simple_array",
            Self::Json => "json",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::SmallInt | Self::Integer | Self::BigInt | Self::Decimal | Self::Float
        )
    }
}

/// A finalized field mapping.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    /// Property name
    pub name: String,

    /// Column name; defaults to the property name when not set
    pub column: Option<String>,

    pub ty: FieldType,

    pub nullable: bool,

    pub unique: bool,

    pub unsigned: bool,

    pub length: Option<u32>,

    pub precision: Option<u32>,

    pub scale: Option<u32>,

    pub default: Option<String>,

    /// True if the field is part of the identifier
    pub primary: bool,

    pub auto_increment: bool,
}

impl FieldMapping {
    pub fn new(ty: FieldType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: None,
            ty,
            nullable: false,
            unique: false,
            unsigned: false,
            length: None,
            precision: None,
            scale: None,
            default: None,
            primary: false,
            auto_increment: false,
        }
    }

    /// The column the field maps to.
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }
}
