use super::Error;

/// Error when an operation is structurally invalid for the current mapping.
///
/// This occurs when:
/// - A class-level operation (`table`, `entity`) is called on a builder bound
///   to an embedded-class mapping
/// - The queue observes declarations enqueued while it was draining
///
/// Structural errors fail fast, before any declaration is constructed or any
/// metadata is mutated. A builder must not be reused after one without
/// re-validating its preconditions.
#[derive(Debug)]
pub(super) struct StructuralError {
    message: Box<str>,
}

impl std::error::Error for StructuralError {}

impl core::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates a structural misuse error.
    pub fn structural(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Structural(StructuralError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a structural misuse error.
    pub fn is_structural(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Structural(_))
    }
}
