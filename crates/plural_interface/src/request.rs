//! Request descriptors handed to a transport.

use derive_getters::Getters;
use plural_core::ObjectId;
use std::collections::HashMap;

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Method {
    /// Fetch a resource
    #[display("GET")]
    Get,
    /// Create a resource
    #[display("POST")]
    Post,
    /// Apply a partial update
    #[display("PATCH")]
    Patch,
    /// Remove a resource
    #[display("DELETE")]
    Delete,
}

/// A typed API path, relative to the base URL.
///
/// Constructors cover every endpoint the client uses, so call sites never
/// splice path strings by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct Route(String);

impl Route {
    /// `/members/{id}`
    pub fn member(id: ObjectId) -> Route {
        Route(format!("/members/{id}"))
    }

    /// `/groups/{id}`
    pub fn group(id: ObjectId) -> Route {
        Route(format!("/groups/{id}"))
    }

    /// `/groups/{id}/members`
    pub fn group_members(id: ObjectId) -> Route {
        Route(format!("/groups/{id}/members"))
    }

    /// `/groups/{id}/share`
    pub fn group_share(id: ObjectId) -> Route {
        Route(format!("/groups/{id}/share"))
    }

    /// `/messages`
    pub fn messages() -> Route {
        Route("/messages".to_string())
    }

    /// `/messages/{id}`
    pub fn message(id: u64) -> Route {
        Route(format!("/messages/{id}"))
    }

    /// `/users/{id}/autoproxy`
    pub fn autoproxy(user_id: u64) -> Route {
        Route(format!("/users/{user_id}/autoproxy"))
    }

    /// `/users/{id}/config`
    pub fn user_config(user_id: u64) -> Route {
        Route(format!("/users/{user_id}/config"))
    }

    /// The rendered path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An attachment in a multipart request.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FilePart {
    /// Form field name
    name: String,
    /// Attachment filename
    filename: String,
    /// MIME type of the data
    content_type: String,
    /// Raw file bytes
    data: Vec<u8>,
}

impl FilePart {
    /// Describe an attachment.
    pub fn new(
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }
}

/// A fully described API request, ready for a transport.
///
/// # Examples
///
/// ```
/// use plural_interface::{ApiRequest, Method, Route};
///
/// let request = ApiRequest::new(Method::Get, Route::messages())
///     .with_param("max_wait", "10");
/// assert_eq!(request.route().as_str(), "/messages");
/// assert_eq!(request.params().len(), 1);
/// ```
#[derive(Debug, Clone, Getters)]
pub struct ApiRequest {
    /// HTTP method
    method: Method,
    /// Path relative to the base URL
    route: Route,
    /// JSON body, when the endpoint takes one
    body: Option<serde_json::Value>,
    /// Query parameters, in insertion order
    params: Vec<(String, String)>,
    /// Extra headers beyond what the transport injects
    headers: HashMap<String, String>,
    /// Multipart attachments
    files: Vec<FilePart>,
}

impl ApiRequest {
    /// Start a request for a route.
    pub fn new(method: Method, route: Route) -> Self {
        Self {
            method,
            route,
            body: None,
            params: Vec::new(),
            headers: HashMap::new(),
            files: Vec::new(),
        }
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Set a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Append a multipart attachment.
    pub fn with_file(mut self, file: FilePart) -> Self {
        self.files.push(file);
        self
    }
}
