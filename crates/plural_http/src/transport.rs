//! The live-API transport.

use async_trait::async_trait;
use plural_error::{ConfigError, ConfigErrorKind, HttpError, JsonError, PluralResult};
use plural_interface::{ApiRequest, Method, Route, Transport};
use reqwest::multipart;
use serde_json::Value;
use tracing::{debug, error, instrument};

/// Base URL of the hosted API.
pub const DEFAULT_BASE_URL: &str = "https://api.plural.gg";

/// Environment variable the token is read from.
pub const TOKEN_VAR: &str = "PLURAL_TOKEN";

/// A [`Transport`] that sends requests to the API over HTTPS.
///
/// One instance per application; the inner [`reqwest::Client`] pools
/// connections across requests.
pub struct HttpTransport {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl HttpTransport {
    /// A transport for the hosted API using the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// A transport reading the token from [`TOKEN_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_VAR).map_err(|_| {
            ConfigError::new(ConfigErrorKind::MissingToken {
                var: TOKEN_VAR.to_string(),
            })
        })?;
        Ok(Self::new(token))
    }

    /// Point the transport at a different deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, route: &Route) -> String {
        format!("{}{}", self.base_url, route)
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the token stays out of logs
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(
        skip(self, request),
        fields(method = %request.method(), route = %request.route())
    )]
    async fn execute(&self, request: ApiRequest) -> PluralResult<Value> {
        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self
            .client
            .request(method, self.endpoint(request.route()))
            .header("Authorization", self.auth_header())
            .query(request.params());

        for (key, value) in request.headers() {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if request.files().is_empty() {
            if let Some(body) = request.body() {
                builder = builder.json(body);
            }
        } else {
            // attachments ride in a multipart form, the JSON body beside
            // them under the payload_json field
            let mut form = multipart::Form::new();
            if let Some(body) = request.body() {
                form = form.text("payload_json", body.to_string());
            }
            for file in request.files() {
                let part = multipart::Part::bytes(file.data().clone())
                    .file_name(file.filename().clone())
                    .mime_str(file.content_type())
                    .map_err(|e| HttpError::request(e.to_string()))?;
                form = form.part(file.name().clone(), part);
            }
            builder = builder.multipart(form);
        }

        debug!("sending request");
        let response = builder
            .send()
            .await
            .map_err(|e| HttpError::request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::request(e.to_string()))?;

        if !status.is_success() {
            error!(status = status.as_u16(), "api rejected the request");
            return Err(HttpError::from_status(status.as_u16(), body).into());
        }

        if body.is_empty() {
            // 204-style answers carry no body
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| JsonError::new(format!("invalid response body: {e}")).into())
    }
}
