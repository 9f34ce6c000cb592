//! Autoproxy state, per user and optionally per guild.

use crate::payload;
use plural_core::{Intents, ObjectId, Patch};
use plural_error::{ClientError, JsonError, PluralResult, ValidationError};
use plural_interface::{AppContext, Method, Route};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::EnumIter;
use tracing::{debug, instrument};

/// How messages without proxy tags are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum AutoproxyMode {
    /// Proxy as the most recently proxied member
    Latch,
    /// Proxy as the fronting member
    Front,
    /// Keep the current member until it is changed by hand
    Locked,
    /// Do not proxy untagged messages
    Disabled,
}

/// A user's autoproxy state.
///
/// A `guild_id` of `None` is the account-wide state; a guild entry
/// overrides it inside that guild.
#[derive(Debug, Clone)]
pub struct Autoproxy {
    user_id: u64,
    guild_id: Option<u64>,
    mode: AutoproxyMode,
    member: Option<ObjectId>,
    context: Option<Arc<AppContext>>,
}

impl Autoproxy {
    /// The user this state belongs to.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// The guild this state applies in, or `None` for the global state.
    pub fn guild_id(&self) -> Option<u64> {
        self.guild_id
    }

    /// The routing mode.
    pub fn mode(&self) -> AutoproxyMode {
        self.mode
    }

    /// The latched member, if any.
    pub fn member(&self) -> Option<ObjectId> {
        self.member
    }

    /// Fetch a user's autoproxy state. Requires the `latch.read` intent.
    #[instrument(skip(context))]
    pub async fn fetch(
        context: &Arc<AppContext>,
        user_id: u64,
        guild_id: Option<u64>,
    ) -> PluralResult<Autoproxy> {
        context.require(Intents::LATCH_READ)?;
        let mut request = context.request(Method::Get, Route::autoproxy(user_id));
        if let Some(guild_id) = guild_id {
            request = request.with_param("guild_id", guild_id.to_string());
        }
        let value = context.transport().execute(request).await?;
        let wire: AutoproxyWire =
            serde_json::from_value(value).map_err(|e| JsonError::new(e.to_string()))?;
        Ok(Autoproxy {
            user_id,
            guild_id,
            mode: wire.mode,
            member: wire.member,
            context: Some(Arc::clone(context)),
        })
    }

    /// Apply a partial update. Requires the `latch.write` intent.
    #[instrument(skip(self, patch), fields(user_id = self.user_id))]
    pub async fn edit(&self, patch: AutoproxyPatch) -> PluralResult<()> {
        let ctx = self
            .context
            .as_ref()
            .ok_or_else(|| ClientError::unbound("autoproxy"))?;
        patch.validate()?;
        ctx.require(patch.required_intents())?;
        let body = patch.to_body()?;
        debug!("dispatching autoproxy update");
        let mut request = ctx
            .request(Method::Patch, Route::autoproxy(self.user_id))
            .with_body(body);
        if let Some(guild_id) = self.guild_id {
            request = request.with_param("guild_id", guild_id.to_string());
        }
        ctx.transport().execute(request).await?;
        Ok(())
    }
}

// Identity comes from the request, state from the body.
#[derive(Deserialize)]
struct AutoproxyWire {
    mode: AutoproxyMode,
    #[serde(default)]
    member: Option<ObjectId>,
}

/// A staged partial update for autoproxy state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoproxyPatch {
    mode: Patch<AutoproxyMode>,
    member: Patch<ObjectId>,
}

impl AutoproxyPatch {
    /// An empty patch. Editing with it is a server-side no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the routing mode.
    pub fn mode(mut self, mode: AutoproxyMode) -> Self {
        self.mode = Patch::Present(mode);
        self
    }

    /// Latch a member.
    pub fn member(mut self, member: ObjectId) -> Self {
        self.member = Patch::Present(member);
        self
    }

    /// Unlatch the current member.
    pub fn clear_member(mut self) -> Self {
        self.member = Patch::Null;
        self
    }

    /// True when no field carries an instruction.
    pub fn is_empty(&self) -> bool {
        self.mode.is_omitted() && self.member.is_omitted()
    }

    /// Check every provided field. Autoproxy fields have no local bounds,
    /// so this never fails; it keeps the edit gate uniform.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// The intents this patch needs.
    pub fn required_intents(&self) -> Intents {
        Intents::LATCH_WRITE
    }

    /// The wire body: exactly the provided fields.
    pub fn to_body(&self) -> Result<serde_json::Value, JsonError> {
        let mut body = serde_json::Map::new();
        payload::put(&mut body, "mode", &self.mode)?;
        payload::put(&mut body, "member", &self.member)?;
        Ok(serde_json::Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn modes_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(AutoproxyMode::Latch).unwrap(),
            serde_json::json!("latch"),
        );
        for mode in AutoproxyMode::iter() {
            let text = serde_json::to_value(mode).unwrap();
            let back: AutoproxyMode = serde_json::from_value(text).unwrap();
            assert_eq!(back, mode);
        }
    }

    #[test]
    fn wire_form_defaults_the_member_to_none() {
        let wire: AutoproxyWire =
            serde_json::from_value(serde_json::json!({"mode": "front"})).unwrap();
        assert_eq!(wire.mode, AutoproxyMode::Front);
        assert_eq!(wire.member, None);
    }

    #[test]
    fn patch_distinguishes_unlatch_from_untouched() {
        let unlatch = AutoproxyPatch::new()
            .mode(AutoproxyMode::Disabled)
            .clear_member();
        assert_eq!(
            unlatch.to_body().unwrap(),
            serde_json::json!({"mode": "disabled", "member": null}),
        );

        let untouched = AutoproxyPatch::new().mode(AutoproxyMode::Latch);
        assert_eq!(
            untouched.to_body().unwrap(),
            serde_json::json!({"mode": "latch"}),
        );
    }
}
