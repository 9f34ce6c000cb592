//! Top-level error wrapper types.

use crate::{
    ClientError, ConfigError, DecodeError, HttpError, IntentError, JsonError, ValidationError,
};

/// The foundation error enum. One variant per error family, so callers can
/// see which stage of an operation failed: local validation, an intent
/// check, decoding, or the HTTP exchange.
///
/// # Examples
///
/// ```
/// use plural_error::{PluralError, PluralErrorKind, HttpError, HttpErrorKind};
///
/// let http_err = HttpError::new(HttpErrorKind::NotFound);
/// let err: PluralError = http_err.into();
/// assert!(matches!(err.kind(), PluralErrorKind::Http(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PluralErrorKind {
    /// Field validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Missing intent error
    #[from(IntentError)]
    Intent(IntentError),
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Image reference decode error
    #[from(DecodeError)]
    Decode(DecodeError),
    /// Client misuse error
    #[from(ClientError)]
    Client(ClientError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Plural error with kind discrimination.
///
/// # Examples
///
/// ```
/// use plural_error::{PluralResult, ClientError};
///
/// fn might_fail() -> PluralResult<()> {
///     Err(ClientError::unbound("member"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Plural Error: {}", _0)]
pub struct PluralError(Box<PluralErrorKind>);

impl PluralError {
    /// Create a new error from a kind.
    pub fn new(kind: PluralErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PluralErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PluralErrorKind
impl<T> From<T> for PluralError
where
    T: Into<PluralErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for plural operations.
///
/// # Examples
///
/// ```
/// use plural_error::{PluralResult, HttpError, HttpErrorKind};
///
/// fn fetch_data() -> PluralResult<String> {
///     Err(HttpError::new(HttpErrorKind::NotFound))?
/// }
/// ```
pub type PluralResult<T> = std::result::Result<T, PluralError>;
