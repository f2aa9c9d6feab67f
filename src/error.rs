use std::sync::Arc;

/// An error that can occur in this crate.
///
/// The most common case is a failure to parse a clock time from a string,
/// but invalid caller-provided arguments (like a sign that isn't `1` or
/// `-1`, or a calendar date that doesn't exist) produce one too.
///
/// An error is cheap to clone. It contains a message describing what went
/// wrong, possibly chained to further errors describing lower level causes.
/// The [`std::fmt::Display`] implementation joins the whole chain into one
/// string.
///
/// Use [`Error::is_format`] and [`Error::is_invalid_sign`] to distinguish
/// the broad categories of failure without string matching.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

/// The underlying kind of an [`Error`].
#[derive(Debug)]
enum ErrorKind {
    /// An ad hoc error that is constructed from anything that implements
    /// the `core::fmt::Display` trait.
    Adhoc(AdhocError),
    /// An error that occurs when an input string does not match the clock
    /// time grammar.
    Format(FormatError),
    /// An error that occurs when a caller provides a sign other than `1`
    /// or `-1`.
    Sign(SignError),
}

impl Error {
    /// Creates a new "ad hoc" error value.
    ///
    /// An ad hoc error value is just an opaque string.
    pub(crate) fn adhoc_from_args(message: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Creates an error describing a string that failed to parse, quoting
    /// an escaped rendition of the offending input.
    pub(crate) fn format(input: &[u8]) -> Error {
        let input = crate::util::escape::Bytes(input).to_string();
        Error::from(ErrorKind::Format(FormatError {
            input: input.into_boxed_str(),
        }))
    }

    /// Creates an error describing an invalid sign argument.
    pub(crate) fn sign(given: i64) -> Error {
        Error::from(ErrorKind::Sign(SignError { given }))
    }

    /// Returns true if this error occurred because a string did not match
    /// the clock time grammar.
    pub fn is_format(&self) -> bool {
        self.chain().any(|e| matches!(e.inner.kind, ErrorKind::Format(_)))
    }

    /// Returns true if this error occurred because a caller provided a
    /// sign other than `1` or `-1`.
    pub fn is_invalid_sign(&self) -> bool {
        self.chain().any(|e| matches!(e.inner.kind, ErrorKind::Sign(_)))
    }

    /// Contextualizes this error with the given consequent error.
    ///
    /// This is useful for when a lower level error is turned into a higher
    /// level error, but where the caller wants to keep the lower level
    /// error around for introspection. The consequent error becomes the
    /// outermost message in the chain.
    pub(crate) fn context(self, consequent: Error) -> Error {
        let mut err = consequent;
        {
            // OK because we just created this error, so the Arc has
            // exactly one reference.
            let inner = Arc::get_mut(&mut err.inner).unwrap();
            assert!(
                inner.cause.is_none(),
                "consequent error must not have an existing cause",
            );
            inner.cause = Some(self);
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut next = Some(self);
        core::iter::from_fn(move || {
            let err = next?;
            next = err.inner.cause.as_ref();
            Some(err)
        })
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut sep = "";
        for err in self.chain() {
            write!(f, "{sep}{kind}", kind = err.inner.kind)?;
            sep = ": ";
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            ErrorKind::Adhoc(ref err) => err.fmt(f),
            ErrorKind::Format(ref err) => err.fmt(f),
            ErrorKind::Sign(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A generic error message.
#[derive(Debug)]
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args(message: core::fmt::Arguments<'_>) -> AdhocError {
        AdhocError { message: message.to_string().into_boxed_str() }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

/// An error indicating that an input string did not match the clock time
/// grammar `[-]HH:MM[:SS]`.
///
/// The stored input has already been escaped for display.
#[derive(Debug)]
struct FormatError {
    input: Box<str>,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid time string \"{input}\"", input = self.input)
    }
}

/// An error indicating that a sign other than `1` or `-1` was given.
#[derive(Debug)]
struct SignError {
    given: i64,
}

impl core::fmt::Display for SignError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "sign must be 1 (positive) or -1 (negative), but got {given}",
            given = self.given,
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    fn into_error(self) -> Error {
        self
    }
}

/// Contextualize lower level errors with higher level errors.
pub(crate) trait ErrorContext {
    /// Contextualize the given consequent error with this (presumably
    /// lower level) error.
    fn context(self, consequent: impl IntoError) -> Self;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// This is useful if the creation of the higher level error is not
    /// free and you want to avoid it in the common case where an error
    /// does not occur.
    fn with_context<E: IntoError, F: FnOnce() -> E>(self, consequent: F)
        -> Self;
}

impl<T> ErrorContext for Result<T, Error> {
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| err.context(consequent.into_error()))
    }

    fn with_context<E: IntoError, F: FnOnce() -> E>(
        self,
        consequent: F,
    ) -> Result<T, Error> {
        self.map_err(|err| err.context(consequent().into_error()))
    }
}

/// Constructs an ad hoc [`Error`] from `format!` style arguments.
macro_rules! err {
    ($($tt:tt)*) => {{
        crate::error::Error::adhoc_from_args(format_args!($($tt)*))
    }}
}

pub(crate) use err;
