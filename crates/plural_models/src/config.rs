//! Per-user configuration.

use crate::payload;
use plural_core::{Intents, Patch};
use plural_error::{ClientError, JsonError, PluralResult, ValidationError};
use plural_interface::{AppContext, Method, Route};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::EnumIter;
use tracing::{debug, instrument};

/// How userproxy replies reference the message being replied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ReplyFormat {
    /// No reference
    None,
    /// An inline link at the top of the message
    Inline,
    /// An embed quoting the referenced message
    Embed,
}

/// A user's account-wide settings.
#[derive(Debug, Clone)]
pub struct UserConfig {
    user_id: u64,
    reply_format: ReplyFormat,
    ping_replies: bool,
    groups_in_autocomplete: bool,
    context: Option<Arc<AppContext>>,
}

impl UserConfig {
    /// The user these settings belong to.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// How userproxy replies are formatted.
    pub fn reply_format(&self) -> ReplyFormat {
        self.reply_format
    }

    /// Whether replies ping the referenced author.
    pub fn ping_replies(&self) -> bool {
        self.ping_replies
    }

    /// Whether autocomplete entries carry the group name.
    pub fn groups_in_autocomplete(&self) -> bool {
        self.groups_in_autocomplete
    }

    /// Fetch a user's settings. Settings are visible to any authorized
    /// application, so no intent is required.
    #[instrument(skip(context))]
    pub async fn fetch(context: &Arc<AppContext>, user_id: u64) -> PluralResult<UserConfig> {
        let request = context.request(Method::Get, Route::user_config(user_id));
        let value = context.transport().execute(request).await?;
        let wire: ConfigWire =
            serde_json::from_value(value).map_err(|e| JsonError::new(e.to_string()))?;
        Ok(UserConfig {
            user_id,
            reply_format: wire.reply_format,
            ping_replies: wire.ping_replies,
            groups_in_autocomplete: wire.groups_in_autocomplete,
            context: Some(Arc::clone(context)),
        })
    }

    /// Apply a partial update. Settings carry no intent of their own, but
    /// the edit still runs the full gate so unbound configs are rejected
    /// before any traffic.
    pub async fn edit(&self, patch: ConfigPatch) -> PluralResult<()> {
        let ctx = self
            .context
            .as_ref()
            .ok_or_else(|| ClientError::unbound("config"))?;
        Self::edit_for(ctx, self.user_id, patch).await
    }

    /// Apply a partial update addressed by user id, without fetching the
    /// settings first.
    ///
    /// Settings edits need no prior state, so the application exposes this
    /// directly; validation and the intent check run unchanged.
    #[instrument(skip(context, patch))]
    pub async fn edit_for(
        context: &Arc<AppContext>,
        user_id: u64,
        patch: ConfigPatch,
    ) -> PluralResult<()> {
        patch.validate()?;
        context.require(patch.required_intents())?;
        let body = patch.to_body()?;
        debug!("dispatching config update");
        let request = context
            .request(Method::Patch, Route::user_config(user_id))
            .with_body(body);
        context.transport().execute(request).await?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ConfigWire {
    reply_format: ReplyFormat,
    ping_replies: bool,
    groups_in_autocomplete: bool,
}

/// A staged partial update for user settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigPatch {
    reply_format: Patch<ReplyFormat>,
    ping_replies: Patch<bool>,
    groups_in_autocomplete: Patch<bool>,
}

impl ConfigPatch {
    /// An empty patch. Editing with it is a server-side no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reply format.
    pub fn reply_format(mut self, format: ReplyFormat) -> Self {
        self.reply_format = Patch::Present(format);
        self
    }

    /// Set whether replies ping the referenced author.
    pub fn ping_replies(mut self, ping: bool) -> Self {
        self.ping_replies = Patch::Present(ping);
        self
    }

    /// Set whether autocomplete entries carry the group name.
    pub fn groups_in_autocomplete(mut self, show: bool) -> Self {
        self.groups_in_autocomplete = Patch::Present(show);
        self
    }

    /// True when no field carries an instruction.
    pub fn is_empty(&self) -> bool {
        self.reply_format.is_omitted()
            && self.ping_replies.is_omitted()
            && self.groups_in_autocomplete.is_omitted()
    }

    /// Check every provided field. Settings have no local bounds, so this
    /// never fails; it keeps the edit gate uniform.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// The intents this patch needs: none, settings are owned by the
    /// authorizing user.
    pub fn required_intents(&self) -> Intents {
        Intents::NONE
    }

    /// The wire body: exactly the provided fields.
    pub fn to_body(&self) -> Result<serde_json::Value, JsonError> {
        let mut body = serde_json::Map::new();
        payload::put(&mut body, "reply_format", &self.reply_format)?;
        payload::put(&mut body, "ping_replies", &self.ping_replies)?;
        payload::put(&mut body, "groups_in_autocomplete", &self.groups_in_autocomplete)?;
        Ok(serde_json::Value::Object(body))
    }
}
