//! Image reference decoding error types.

/// Specific decoding failures for stored image references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DecodeErrorKind {
    /// Image data ended before the extension tag byte
    #[display("image data is empty")]
    Truncated,

    /// The tag byte does not name a known image extension
    #[display("unknown image extension tag: {}", _0)]
    UnknownExtensionTag(u8),

    /// The text form held characters outside lowercase hex
    #[display("invalid hex in image reference: {}", _0)]
    InvalidHex(String),
}

/// Decode error with location tracking.
///
/// # Examples
///
/// ```
/// use plural_error::{DecodeError, DecodeErrorKind};
///
/// let err = DecodeError::new(DecodeErrorKind::UnknownExtensionTag(9));
/// assert!(format!("{}", err).contains("tag: 9"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Decode Error: {} at line {} in {}", kind, line, file)]
pub struct DecodeError {
    /// The specific error kind
    pub kind: DecodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new decode error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DecodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
