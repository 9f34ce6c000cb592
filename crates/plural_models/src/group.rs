//! Group resources and the group edit gate.

use crate::member::{Member, MemberWire};
use crate::{payload, validate};
use plural_core::{ImageRef, Intents, ObjectId, Patch};
use plural_error::{ClientError, JsonError, PluralResult, ValidationError};
use plural_interface::{AppContext, Method, Route};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A group of members.
///
/// Like members, groups fetched through an application are bound to it and
/// can be edited; a hand-built group is unbound.
#[derive(Debug, Clone)]
pub struct Group {
    id: ObjectId,
    name: String,
    tag: Option<String>,
    avatar: Option<ImageRef>,
    members: Vec<ObjectId>,
    context: Option<Arc<AppContext>>,
}

impl Group {
    /// Build an unbound group for local modeling.
    pub fn new(id: ObjectId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate::length("name", &name, 1, 100)?;
        Ok(Self {
            id,
            name,
            tag: None,
            avatar: None,
            members: Vec::new(),
            context: None,
        })
    }

    /// The group id.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag appended to proxied member names, if one is set.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The group avatar, if one is set.
    pub fn avatar(&self) -> Option<&ImageRef> {
        self.avatar.as_ref()
    }

    /// Ids of the members in this group.
    pub fn members(&self) -> &[ObjectId] {
        &self.members
    }

    /// Fetch a group by id. Requires the `groups.read` intent.
    #[instrument(skip(context, id), fields(group_id = %id))]
    pub async fn fetch(context: &Arc<AppContext>, id: ObjectId) -> PluralResult<Group> {
        context.require(Intents::GROUPS_READ)?;
        let request = context.request(Method::Get, Route::group(id));
        let value = context.transport().execute(request).await?;
        let wire: GroupWire =
            serde_json::from_value(value).map_err(|e| JsonError::new(e.to_string()))?;
        Group::from_wire(wire, Some(Arc::clone(context)))
    }

    /// Fetch the group's members in one call. Requires the `members.read`
    /// intent; the returned members are bound and editable.
    #[instrument(skip(self), fields(group_id = %self.id))]
    pub async fn fetch_members(&self) -> PluralResult<Vec<Member>> {
        let ctx = self
            .context
            .as_ref()
            .ok_or_else(|| ClientError::unbound("group"))?;
        ctx.require(Intents::MEMBERS_READ)?;
        let request = ctx.request(Method::Get, Route::group_members(self.id));
        let value = ctx.transport().execute(request).await?;
        let wires: Vec<MemberWire> =
            serde_json::from_value(value).map_err(|e| JsonError::new(e.to_string()))?;
        wires
            .into_iter()
            .map(|wire| Member::from_wire(wire, Some(Arc::clone(ctx))))
            .collect()
    }

    /// Grant another user access to this group. Requires the
    /// `groups.share` intent.
    #[instrument(skip(self), fields(group_id = %self.id))]
    pub async fn share(&self, user_id: u64) -> PluralResult<()> {
        let ctx = self
            .context
            .as_ref()
            .ok_or_else(|| ClientError::unbound("group"))?;
        ctx.require(Intents::GROUPS_SHARE)?;
        debug!(user_id, "sharing group");
        let request = ctx
            .request(Method::Post, Route::group_share(self.id))
            .with_body(json!({ "user_id": user_id }));
        ctx.transport().execute(request).await?;
        Ok(())
    }

    /// Apply a partial update. Requires the `groups.write` intent.
    ///
    /// Runs the same local gate as [`Member::edit`]: unbound check,
    /// validation of every provided field, then the intent check, with no
    /// request produced on failure.
    #[instrument(skip(self, patch), fields(group_id = %self.id))]
    pub async fn edit(&self, patch: GroupPatch) -> PluralResult<()> {
        let ctx = self
            .context
            .as_ref()
            .ok_or_else(|| ClientError::unbound("group"))?;
        patch.validate()?;
        ctx.require(patch.required_intents())?;
        let body = patch.to_body()?;
        debug!("dispatching group update");
        let request = ctx
            .request(Method::Patch, Route::group(self.id))
            .with_body(body);
        ctx.transport().execute(request).await?;
        Ok(())
    }

    pub(crate) fn from_wire(
        wire: GroupWire,
        context: Option<Arc<AppContext>>,
    ) -> PluralResult<Group> {
        validate::length("name", &wire.name, 1, 100)?;
        if let Some(tag) = &wire.tag {
            validate::length("tag", tag, 0, 79)?;
        }
        let avatar = wire
            .avatar
            .map(|text| ImageRef::from_hex(&text, wire.id))
            .transpose()?;
        Ok(Group {
            id: wire.id,
            name: wire.name,
            tag: wire.tag,
            avatar,
            members: wire.members,
            context,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct GroupWire {
    pub(crate) id: ObjectId,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) tag: Option<String>,
    #[serde(default)]
    pub(crate) avatar: Option<String>,
    #[serde(default)]
    pub(crate) members: Vec<ObjectId>,
}

/// A staged partial update for a group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupPatch {
    name: Patch<String>,
    tag: Patch<String>,
    avatar: Patch<ImageRef>,
}

impl GroupPatch {
    /// An empty patch. Editing with it is a server-side no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group name (1 to 100 characters).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Patch::Present(name.into());
        self
    }

    /// Set the tag appended to proxied member names (at most 79
    /// characters, to fit a webhook name).
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Patch::Present(tag.into());
        self
    }

    /// Remove the tag.
    pub fn clear_tag(mut self) -> Self {
        self.tag = Patch::Null;
        self
    }

    /// Point the avatar at an already-uploaded image.
    pub fn avatar(mut self, avatar: ImageRef) -> Self {
        self.avatar = Patch::Present(avatar);
        self
    }

    /// Remove the avatar.
    pub fn clear_avatar(mut self) -> Self {
        self.avatar = Patch::Null;
        self
    }

    /// True when no field carries an instruction.
    pub fn is_empty(&self) -> bool {
        self.name.is_omitted() && self.tag.is_omitted() && self.avatar.is_omitted()
    }

    /// Check every provided field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Patch::Present(name) = &self.name {
            validate::length("name", name, 1, 100)?;
        }
        if let Patch::Present(tag) = &self.tag {
            validate::length("tag", tag, 0, 79)?;
        }
        Ok(())
    }

    /// The intents this patch needs.
    pub fn required_intents(&self) -> Intents {
        Intents::GROUPS_WRITE
    }

    /// The wire body: exactly the provided fields.
    pub fn to_body(&self) -> Result<serde_json::Value, JsonError> {
        let mut body = serde_json::Map::new();
        payload::put(&mut body, "name", &self.name)?;
        payload::put(&mut body, "tag", &self.tag)?;
        payload::put(&mut body, "avatar", &self.avatar)?;
        Ok(serde_json::Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plural_error::ValidationErrorKind;

    fn id() -> ObjectId {
        "5eb7cf5a86d9755df3a6c593".parse().unwrap()
    }

    #[test]
    fn group_name_bounds_apply_on_construction() {
        assert!(Group::new(id(), "a").is_ok());
        assert!(Group::new(id(), "a".repeat(100)).is_ok());
        assert!(Group::new(id(), "").is_err());
        assert!(Group::new(id(), "a".repeat(101)).is_err());
    }

    #[test]
    fn tag_is_capped_to_fit_a_webhook_name() {
        assert!(GroupPatch::new().tag("t".repeat(79)).validate().is_ok());
        let err = GroupPatch::new().tag("t".repeat(80)).validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::Length { .. }));
    }

    #[test]
    fn patch_body_holds_exactly_the_provided_fields() {
        let patch = GroupPatch::new().name("fruits").clear_tag();
        assert_eq!(
            patch.to_body().unwrap(),
            serde_json::json!({"name": "fruits", "tag": null}),
        );
    }

    #[test]
    fn wire_validation_rejects_out_of_bounds_names() {
        let wire: GroupWire = serde_json::from_value(serde_json::json!({
            "id": "5eb7cf5a86d9755df3a6c593",
            "name": "n".repeat(101),
        }))
        .unwrap();
        assert!(Group::from_wire(wire, None).is_err());
    }

    #[test]
    fn wire_avatar_binds_to_the_group_id() {
        let wire: GroupWire = serde_json::from_value(serde_json::json!({
            "id": "5eb7cf5a86d9755df3a6c593",
            "name": "fruits",
            "avatar": "00deadbeef",
            "members": ["6542d5a86d9755df3a6c5111"],
        }))
        .unwrap();
        let group = Group::from_wire(wire, None).unwrap();
        let avatar = group.avatar().unwrap();
        assert_eq!(avatar.parent_id(), id());
        assert_eq!(group.members().len(), 1);
    }
}
