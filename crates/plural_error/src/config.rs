//! Configuration error types.

/// Specific configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A required environment variable is unset or empty
    #[display("missing environment variable `{}`", var)]
    MissingToken {
        /// Name of the variable, e.g. `PLURAL_TOKEN`
        var: String,
    },
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use plural_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingToken {
///     var: "PLURAL_TOKEN".to_string(),
/// });
/// assert!(format!("{}", err).contains("PLURAL_TOKEN"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error kind
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
