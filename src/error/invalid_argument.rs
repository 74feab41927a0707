use super::Error;

/// Error when a value supplied to a fluent call is outside its legal set.
///
/// This occurs when:
/// - A cascade token is not one of persist/remove/merge/detach/refresh
/// - A fetch mode is not LAZY, EAGER or EXTRA_LAZY
/// - A field or inheritance type name is not recognized
/// - A mapping name collides with one already declared
///
/// The message always names the offending value. The value is rejected at
/// call time and never coerced.
#[derive(Debug)]
pub(super) struct InvalidArgumentError {
    message: Box<str>,
}

impl std::error::Error for InvalidArgumentError {}

impl core::fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an invalid argument error.
    ///
    /// The message must name the offending value, e.g.
    /// `Cascade [invalid] does not exist`.
    pub fn invalid_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgumentError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidArgument(_))
    }
}
