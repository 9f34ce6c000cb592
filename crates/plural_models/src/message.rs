//! Proxied message lookups and sends.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use derive_getters::Getters;
use plural_core::{Intents, ObjectId};
use plural_error::{HttpErrorKind, JsonError, PluralErrorKind, PluralResult};
use plural_interface::{AppContext, Method, Route};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// A proxied message record.
///
/// Messages are authored by the proxy service, so there is no edit gate
/// here; the record is immutable once fetched.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct Message {
    /// Id of the original user message, absent for userproxy messages
    #[serde(default)]
    original_id: Option<u64>,
    /// Id of the proxied webhook message
    proxy_id: u64,
    /// Id of the user who sent the message
    author_id: u64,
    /// Channel the message was proxied in
    channel_id: u64,
    /// Member the message was proxied as
    #[serde(default)]
    member_id: Option<ObjectId>,
    /// When the message was proxied
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Look up a proxied message by either its original or proxy id.
    ///
    /// Proxying lags the original message, so the server holds the lookup
    /// open for up to `max_wait` seconds (default 10) before answering
    /// not-found. Pass `Some(0.0)` to answer immediately.
    #[instrument(skip(context))]
    pub async fn fetch(
        context: &Arc<AppContext>,
        message_id: u64,
        max_wait: Option<f64>,
    ) -> PluralResult<Message> {
        let request = context
            .request(Method::Get, Route::message(message_id))
            .with_param("max_wait", max_wait.unwrap_or(10.0).to_string());
        let value = context.transport().execute(request).await?;
        serde_json::from_value(value)
            .map_err(|e| JsonError::new(e.to_string()).into())
    }

    /// Whether a message id belongs to a proxied message.
    ///
    /// A not-found answer becomes `Ok(false)`; every other failure is
    /// passed through.
    pub async fn exists(
        context: &Arc<AppContext>,
        message_id: u64,
        max_wait: Option<f64>,
    ) -> PluralResult<bool> {
        match Self::fetch(context, message_id, max_wait).await {
            Ok(_) => Ok(true),
            Err(error) => match error.kind() {
                PluralErrorKind::Http(http) if http.kind == HttpErrorKind::NotFound => {
                    Ok(false)
                }
                _ => Err(error),
            },
        }
    }

    /// Proxy a new message as a member. Requires the `messages.write`
    /// intent.
    #[instrument(skip(context, create), fields(channel_id = create.channel_id))]
    pub async fn send(
        context: &Arc<AppContext>,
        create: &MessageCreate,
    ) -> PluralResult<Message> {
        context.require(Intents::MESSAGES_WRITE)?;
        let body =
            serde_json::to_value(create).map_err(|e| JsonError::new(e.to_string()))?;
        let request = context
            .request(Method::Post, Route::messages())
            .with_body(body);
        let value = context.transport().execute(request).await?;
        serde_json::from_value(value)
            .map_err(|e| JsonError::new(e.to_string()).into())
    }
}

/// A message to proxy, built with [`MessageCreate::builder`].
///
/// ```
/// use plural_models::MessageCreate;
///
/// let create = MessageCreate::builder()
///     .channel_id(1299371294983518218u64)
///     .member_id("5eb7cf5a86d9755df3a6c593".parse::<plural_core::ObjectId>().unwrap())
///     .content("hello from the library")
///     .build()
///     .unwrap();
/// assert_eq!(create.content(), "hello from the library");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct MessageCreate {
    /// Channel to proxy in
    channel_id: u64,
    /// Member to proxy as
    member_id: ObjectId,
    /// Message content
    content: String,
}

impl MessageCreate {
    /// Start building a message.
    pub fn builder() -> MessageCreateBuilder {
        MessageCreateBuilder::default()
    }
}
