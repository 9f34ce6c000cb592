//! Client usage error types.

/// Specific client misuse conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ClientErrorKind {
    /// The model was built by hand instead of fetched through an application
    #[display("the {} must be fetched through an application before editing", resource)]
    Unbound {
        /// Resource type, e.g. `member`
        resource: String,
    },
}

/// Client error with location tracking.
///
/// # Examples
///
/// ```
/// use plural_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::unbound("member");
/// assert!(format!("{}", err).contains("member"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    /// The specific error kind
    pub kind: ClientErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClientError {
    /// Create a new client error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`ClientErrorKind::Unbound`] on the named resource.
    #[track_caller]
    pub fn unbound(resource: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Unbound {
            resource: resource.into(),
        })
    }
}
