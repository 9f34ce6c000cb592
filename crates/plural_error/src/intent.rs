//! Intent (capability) error types.

/// Specific intent failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IntentErrorKind {
    /// The application identity was constructed without a required intent
    #[display("application does not have the required intent `{}`", intent)]
    MissingIntent {
        /// Dotted name of the first missing intent, e.g. `members.write`
        intent: String,
    },
}

/// Intent error with location tracking.
///
/// Raised locally, before any request is dispatched. Holding the named
/// intent is decided when the application is constructed; recovering means
/// building a new identity with a wider intent set.
///
/// # Examples
///
/// ```
/// use plural_error::{IntentError, IntentErrorKind};
///
/// let err = IntentError::new(IntentErrorKind::MissingIntent {
///     intent: "members.write".to_string(),
/// });
/// assert!(format!("{}", err).contains("members.write"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Intent Error: {} at line {} in {}", kind, line, file)]
pub struct IntentError {
    /// The specific error kind
    pub kind: IntentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IntentError {
    /// Create a new intent error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IntentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for the only kind, from an intent's dotted name.
    #[track_caller]
    pub fn missing(intent: impl Into<String>) -> Self {
        Self::new(IntentErrorKind::MissingIntent {
            intent: intent.into(),
        })
    }
}
