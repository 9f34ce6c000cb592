//! Field validation error types.

/// Specific validation failures.
///
/// Every constraint names the field it guards so callers can surface the
/// failure next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// String length outside its bounds
    #[display("'{}' must be between {} and {} characters, got {}", field, min, max, actual)]
    Length {
        /// Field that failed the check
        field: String,
        /// Minimum length, inclusive
        min: usize,
        /// Maximum length, inclusive
        max: usize,
        /// Length of the rejected value
        actual: usize,
    },

    /// A proxy tag with neither a prefix nor a suffix matches everything
    #[display("at least one of prefix or suffix must be non-empty")]
    PrefixSuffixRequired,

    /// Collection larger than its cap
    #[display("'{}' holds at most {} entries, got {}", field, max, actual)]
    TooManyEntries {
        /// Field that failed the check
        field: String,
        /// Maximum entry count, inclusive
        max: usize,
        /// Size of the rejected collection
        actual: usize,
    },

    /// Numeric value outside its bounds
    #[display("'{}' must be between {} and {}, got {}", field, min, max, actual)]
    Range {
        /// Field that failed the check
        field: String,
        /// Minimum value, inclusive
        min: i64,
        /// Maximum value, inclusive
        max: i64,
        /// The rejected value
        actual: i64,
    },

    /// Text that does not parse as a 24-character hex object id
    #[display("invalid object id: '{}'", value)]
    ObjectId {
        /// The rejected text
        value: String,
    },
}

impl ValidationErrorKind {
    /// The field this failure applies to.
    pub fn field(&self) -> &str {
        match self {
            Self::Length { field, .. }
            | Self::TooManyEntries { field, .. }
            | Self::Range { field, .. } => field,
            Self::PrefixSuffixRequired => "prefix_suffix",
            Self::ObjectId { .. } => "id",
        }
    }
}

/// Validation error with location tracking.
///
/// Raised before any request is built; a value that fails validation never
/// reaches the network.
///
/// # Examples
///
/// ```
/// use plural_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::PrefixSuffixRequired);
/// assert_eq!(err.kind.field(), "prefix_suffix");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error kind
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
