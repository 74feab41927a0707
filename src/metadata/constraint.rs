/// An index or unique constraint over one or more columns.
#[derive(Debug, Clone)]
pub struct IndexMapping {
    pub name: String,

    pub columns: Vec<String>,

    /// When `true`, indexed entries are unique
    pub unique: bool,
}
