use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for metacat operations
///
/// This enum represents all possible error types that can occur while
/// decoding, validating, storing or querying metadata documents. Each kind
/// describes a specific category of failure, enabling precise error handling
/// at the transport boundary.
///
/// # Examples
///
/// ```rust,ignore
/// use metacat::errors::{MetacatError, ErrorKind, MetacatResult};
///
/// fn example() -> MetacatResult<()> {
///     Err(MetacatError::new("missing required field", ErrorKind::ValidationError))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Malformed serialized payload that could not be parsed
    DecodeError,
    /// A document could not be serialized back to the wire format
    EncodingError,
    /// A well-formed document violated one or more required constraints
    ValidationError,
    /// A caller-supplied field path could not be parsed
    InvalidFieldPath,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::DecodeError => write!(f, "Decode error"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::InvalidFieldPath => write!(f, "Invalid field path"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom metacat error type.
///
/// `MetacatError` encapsulates error information including the error message,
/// kind, and optional cause. It supports error chaining for debugging.
///
/// # Examples
///
/// ```rust,ignore
/// use metacat::errors::{MetacatError, ErrorKind};
///
/// // Create a simple error
/// let err = MetacatError::new("error parsing yaml", ErrorKind::DecodeError);
///
/// // Create an error with a cause
/// let cause = MetacatError::new("unexpected end of stream", ErrorKind::DecodeError);
/// let err = MetacatError::new_with_cause("upload rejected", ErrorKind::DecodeError, cause);
/// ```
///
/// # Type alias
///
/// The `MetacatResult<T>` type alias is equivalent to `Result<T, MetacatError>`
/// and is used throughout the codebase for operations that can fail.
#[derive(Clone)]
pub struct MetacatError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<MetacatError>>,
}

impl MetacatError {
    /// Creates a new `MetacatError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        MetacatError {
            message: message.to_string(),
            error_kind,
            cause: None,
        }
    }

    /// Creates a new `MetacatError` with a cause error.
    ///
    /// This creates an error chain where the cause error is preserved for
    /// debugging.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: MetacatError) -> Self {
        MetacatError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&Box<MetacatError>> {
        self.cause.as_ref()
    }
}

impl Display for MetacatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for MetacatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for MetacatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for metacat operations.
///
/// `MetacatResult<T>` is shorthand for `Result<T, MetacatError>`.
/// All fallible metacat operations return this type.
pub type MetacatResult<T> = Result<T, MetacatError>;

// From trait implementations for automatic error conversion
impl From<String> for MetacatError {
    fn from(msg: String) -> Self {
        MetacatError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for MetacatError {
    fn from(msg: &str) -> Self {
        MetacatError::new(msg, ErrorKind::InternalError)
    }
}
