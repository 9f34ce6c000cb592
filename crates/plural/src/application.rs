//! The application entry point.

use crate::UserScope;
use plural_core::{Intents, ObjectId};
use plural_error::PluralResult;
use plural_http::HttpTransport;
use plural_interface::{AppContext, Transport};
use plural_models::{Autoproxy, ConfigPatch, Group, Member, Message, MessageCreate, UserConfig};
use std::sync::Arc;
use tracing::debug;

/// A token-authenticated handle on the API.
///
/// The intent set is declared up front and fixed for the application's
/// lifetime; every operation checks against it locally before a request is
/// built. Resources fetched here keep a handle to the application, which
/// is what authorizes their edits.
#[derive(Debug, Clone)]
pub struct Application {
    context: Arc<AppContext>,
}

impl Application {
    /// An application over the hosted API.
    pub fn new(token: impl Into<String>, intents: Intents) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(token)), intents)
    }

    /// An application reading its token from `PLURAL_TOKEN`.
    pub fn from_env(intents: Intents) -> PluralResult<Self> {
        let transport = HttpTransport::from_env()?;
        Ok(Self::with_transport(Arc::new(transport), intents))
    }

    /// An application over any transport, scripted doubles included.
    pub fn with_transport(transport: Arc<dyn Transport>, intents: Intents) -> Self {
        debug!(intents = %intents, "application constructed");
        Self {
            context: Arc::new(AppContext::new(transport, intents)),
        }
    }

    /// The intent set this application holds.
    pub fn intents(&self) -> Intents {
        self.context.intents()
    }

    /// Scope the application to act on behalf of a user.
    pub fn as_user(&self, user_id: u64) -> UserScope {
        UserScope::new(Arc::new(self.context.as_user(user_id)), user_id)
    }

    /// Fetch a member by id. Requires the `members.read` intent.
    pub async fn fetch_member(&self, id: ObjectId) -> PluralResult<Member> {
        Member::fetch(&self.context, id).await
    }

    /// Fetch a group by id. Requires the `groups.read` intent.
    pub async fn fetch_group(&self, id: ObjectId) -> PluralResult<Group> {
        Group::fetch(&self.context, id).await
    }

    /// Look up a proxied message by its original or proxy id, waiting up
    /// to `max_wait` seconds (default 10) for proxying to catch up.
    pub async fn fetch_message(
        &self,
        message_id: u64,
        max_wait: Option<f64>,
    ) -> PluralResult<Message> {
        Message::fetch(&self.context, message_id, max_wait).await
    }

    /// Whether a message id belongs to a proxied message.
    pub async fn message_exists(
        &self,
        message_id: u64,
        max_wait: Option<f64>,
    ) -> PluralResult<bool> {
        Message::exists(&self.context, message_id, max_wait).await
    }

    /// Proxy a new message as a member. Requires the `messages.write`
    /// intent.
    pub async fn send_message(&self, create: &MessageCreate) -> PluralResult<Message> {
        Message::send(&self.context, create).await
    }

    /// Fetch a user's autoproxy state, account-wide or for one guild.
    /// Requires the `latch.read` intent.
    pub async fn fetch_autoproxy(
        &self,
        user_id: u64,
        guild_id: Option<u64>,
    ) -> PluralResult<Autoproxy> {
        Autoproxy::fetch(&self.context, user_id, guild_id).await
    }

    /// Fetch a user's settings.
    pub async fn fetch_config(&self, user_id: u64) -> PluralResult<UserConfig> {
        UserConfig::fetch(&self.context, user_id).await
    }

    /// Apply a partial update to a user's settings.
    pub async fn edit_config(&self, user_id: u64, patch: ConfigPatch) -> PluralResult<()> {
        UserConfig::edit_for(&self.context, user_id, patch).await
    }
}
