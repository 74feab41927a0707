use crate::{Error, Result};

/// The shape of a relation between two mapped classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Owning side holding the foreign key
    BelongsTo,
    /// Inverse one-to-one side
    HasOne,
    /// Inverse one-to-many side
    HasMany,
    /// Many-to-many through a join table
    BelongsToMany,
}

impl RelationKind {
    pub fn is_to_many(self) -> bool {
        matches!(self, Self::HasMany | Self::BelongsToMany)
    }

    pub fn is_owning_side(self) -> bool {
        matches!(self, Self::BelongsTo | Self::BelongsToMany)
    }
}

/// A cascade operation propagated across an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeAction {
    Persist,
    Remove,
    Merge,
    Detach,
    Refresh,
}

impl CascadeAction {
    pub const ALL: [CascadeAction; 5] = [
        CascadeAction::Persist,
        CascadeAction::Remove,
        CascadeAction::Merge,
        CascadeAction::Detach,
        CascadeAction::Refresh,
    ];

    /// Parses a cascade token, rejecting anything outside the legal set.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "persist" => Ok(Self::Persist),
            "remove" => Ok(Self::Remove),
            "merge" => Ok(Self::Merge),
            "detach" => Ok(Self::Detach),
            "refresh" => Ok(Self::Refresh),
            _ => Err(Error::invalid_argument(format!(
                "Cascade [{token}] does not exist"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Persist => "persist",
            Self::Remove => "remove",
            Self::Merge => "merge",
            Self::Detach => "detach",
            Self::Refresh => "refresh",
        }
    }
}

/// How the related objects are loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    #[default]
    Lazy,
    Eager,
    ExtraLazy,
}

impl FetchMode {
    /// Parses a fetch token, rejecting anything outside the legal set.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "LAZY" => Ok(Self::Lazy),
            "EAGER" => Ok(Self::Eager),
            "EXTRA_LAZY" => Ok(Self::ExtraLazy),
            _ => Err(Error::invalid_argument(format!(
                "Fetch [{token}] does not exist"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lazy => "LAZY",
            Self::Eager => "EAGER",
            Self::ExtraLazy => "EXTRA_LAZY",
        }
    }
}

/// Foreign-key column mapping on the owning side of a relation.
#[derive(Debug, Clone)]
pub struct JoinColumn {
    pub name: String,
    pub referenced_column_name: String,
    pub nullable: bool,
}

/// Join-table mapping for a many-to-many relation.
#[derive(Debug, Clone)]
pub struct JoinTable {
    pub name: String,
}

/// A finalized association mapping.
#[derive(Debug, Clone)]
pub struct AssociationMapping {
    /// Property the association is mapped to
    pub field: String,

    /// Target class of the association
    pub target: String,

    pub kind: RelationKind,

    /// Cascade set; no duplicates
    pub cascade: Vec<CascadeAction>,

    pub fetch: FetchMode,

    /// Property on the owning side, set on inverse-side mappings
    pub mapped_by: Option<String>,

    /// Property on the inverse side, set on owning-side mappings
    pub inversed_by: Option<String>,

    /// Remove orphaned related objects on a to-many inverse side
    pub orphan_removal: bool,

    pub join_column: Option<JoinColumn>,

    pub join_table: Option<JoinTable>,
}

impl AssociationMapping {
    pub fn has_cascade(&self, action: CascadeAction) -> bool {
        self.cascade.contains(&action)
    }
}
