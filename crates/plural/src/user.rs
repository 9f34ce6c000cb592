//! Acting on behalf of a user.

use plural_core::ObjectId;
use plural_error::PluralResult;
use plural_interface::AppContext;
use plural_models::{Autoproxy, Group, Member, Message, UserConfig};
use std::sync::Arc;

/// An application scoped to a user.
///
/// Requests built under the scope carry the user as a query parameter, and
/// user-owned resources, autoproxy state and settings, are addressed
/// without repeating the id.
#[derive(Debug, Clone)]
pub struct UserScope {
    user_id: u64,
    context: Arc<AppContext>,
}

impl UserScope {
    pub(crate) fn new(context: Arc<AppContext>, user_id: u64) -> Self {
        Self { user_id, context }
    }

    /// The user this scope acts for.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Fetch a member visible to this user. Requires the `members.read`
    /// intent.
    pub async fn fetch_member(&self, id: ObjectId) -> PluralResult<Member> {
        Member::fetch(&self.context, id).await
    }

    /// Fetch a group visible to this user. Requires the `groups.read`
    /// intent.
    pub async fn fetch_group(&self, id: ObjectId) -> PluralResult<Group> {
        Group::fetch(&self.context, id).await
    }

    /// Fetch the user's autoproxy state, account-wide or for one guild.
    /// Requires the `latch.read` intent.
    pub async fn fetch_autoproxy(&self, guild_id: Option<u64>) -> PluralResult<Autoproxy> {
        Autoproxy::fetch(&self.context, self.user_id, guild_id).await
    }

    /// Fetch the user's settings.
    pub async fn fetch_config(&self) -> PluralResult<UserConfig> {
        UserConfig::fetch(&self.context, self.user_id).await
    }

    /// Look up a proxied message on behalf of this user.
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
}
