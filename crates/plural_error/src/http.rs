//! HTTP error types.

/// Specific HTTP failures, mapped from response status codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// 401: the token was rejected
    #[display("unauthorized: check that the token is valid")]
    Unauthorized,

    /// 403: the token does not grant access to the resource
    #[display("forbidden: the token does not grant access to this resource")]
    Forbidden,

    /// 404: nothing lives at the requested route
    #[display("not found")]
    NotFound,

    /// 400: the API rejected the request payload
    #[display("bad request: {}", body)]
    BadRequest {
        /// Response body describing the rejection
        body: String,
    },

    /// Any other non-success status
    #[display("api returned status {}: {}", status, body)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The request failed before a response arrived
    #[display("request failed: {}", _0)]
    Request(String),
}

/// HTTP error with location tracking.
///
/// # Examples
///
/// ```
/// use plural_error::{HttpError, HttpErrorKind};
///
/// let err = HttpError::from_status(404, "");
/// assert_eq!(err.kind, HttpErrorKind::NotFound);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// The specific error kind
    pub kind: HttpErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HTTP error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Map a response status code and body onto an error kind.
    ///
    /// Success codes are never passed here; the transport only calls this
    /// for non-2xx responses.
    #[track_caller]
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let kind = match status {
            400 => HttpErrorKind::BadRequest { body },
            401 => HttpErrorKind::Unauthorized,
            403 => HttpErrorKind::Forbidden,
            404 => HttpErrorKind::NotFound,
            _ => HttpErrorKind::Api { status, body },
        };
        Self::new(kind)
    }

    /// Wrap a transport-level failure that produced no response.
    #[track_caller]
    pub fn request(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::Request(message.into()))
    }
}
