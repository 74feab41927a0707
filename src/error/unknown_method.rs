use super::Error;

/// Error when a dispatched method name has no alias, no macro and no
/// built-in handler.
#[derive(Debug)]
pub(super) struct UnknownMethodError {
    method: Box<str>,
}

impl std::error::Error for UnknownMethodError {}

impl core::fmt::Display for UnknownMethodError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "Fluent builder method [{}] does not exist",
            self.method
        )
    }
}

impl Error {
    /// Creates an unknown method error naming the attempted method.
    pub fn unknown_method(method: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownMethod(UnknownMethodError {
            method: method.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown method error.
    pub fn is_unknown_method(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownMethod(_))
    }
}
