//! Member resources: proxy tags, userproxies, and the member edit gate.

use crate::{payload, validate};
use derive_getters::Getters;
use plural_core::{ImageRef, Intents, ObjectId, Patch};
use plural_error::{
    ClientError, JsonError, PluralResult, ValidationError, ValidationErrorKind,
};
use plural_interface::{AppContext, Method, Route};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A prefix/suffix pair that routes a message to a member.
///
/// At least one of prefix or suffix must be non-empty; a tag with neither
/// would match every message. Both sides are capped at 50 characters.
///
/// # Examples
///
/// ```
/// use plural_models::ProxyTag;
///
/// let tag = ProxyTag::new("a:", "").unwrap();
/// assert_eq!(tag.prefix(), "a:");
/// assert!(ProxyTag::new("", "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(try_from = "ProxyTagWire")]
pub struct ProxyTag {
    /// Text ahead of the message, e.g. `{prefix}text{suffix}`
    prefix: String,
    /// Text behind the message
    suffix: String,
    /// Whether prefix and suffix are matched as regex
    regex: bool,
    /// Whether matching is case-sensitive
    case_sensitive: bool,
}

impl ProxyTag {
    /// Build a validated tag with literal, case-insensitive matching.
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_options(prefix, suffix, false, false)
    }

    /// Build a validated tag with explicit matching options.
    pub fn with_options(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        regex: bool,
        case_sensitive: bool,
    ) -> Result<Self, ValidationError> {
        let tag = Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            regex,
            case_sensitive,
        };
        tag.validate()?;
        Ok(tag)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.prefix.is_empty() && self.suffix.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::PrefixSuffixRequired,
            ));
        }
        validate::length("proxy_tags.prefix", &self.prefix, 0, 50)?;
        validate::length("proxy_tags.suffix", &self.suffix, 0, 50)?;
        Ok(())
    }
}

// Wire shape with API defaults; validation runs on the way in.
#[derive(Deserialize)]
struct ProxyTagWire {
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
    #[serde(default)]
    regex: bool,
    #[serde(default)]
    case_sensitive: bool,
}

impl TryFrom<ProxyTagWire> for ProxyTag {
    type Error = ValidationError;

    fn try_from(wire: ProxyTagWire) -> Result<Self, Self::Error> {
        Self::with_options(wire.prefix, wire.suffix, wire.regex, wire.case_sensitive)
    }
}

/// The standalone bot a member can proxy through.
///
/// `public_key` and `token` are served only to identities holding
/// `members.userproxy_token.read`; without it the API omits the keys and
/// they deserialize as [`Patch::Omitted`]. A `token` of [`Patch::Null`]
/// means autosync is disabled for the userproxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(try_from = "UserproxyWire")]
pub struct Userproxy {
    /// Bot account the userproxy runs as
    bot_id: u64,
    /// Message signing key
    #[serde(skip_serializing_if = "Patch::is_omitted")]
    public_key: Patch<String>,
    /// Bot token, null when autosync is disabled
    #[serde(skip_serializing_if = "Patch::is_omitted")]
    token: Patch<String>,
    /// Name of the proxy command
    command: String,
    /// Whether the group tag joins the bot name
    include_group_tag: bool,
    /// Attachment options on the proxy command, 0 to 10
    attachment_count: u8,
    /// Whether the userproxy is self-hosted
    self_hosted: bool,
    /// Guilds the userproxy bot has been added to
    guilds: BTreeSet<u64>,
}

impl Userproxy {
    /// A userproxy for the given bot with default options.
    pub fn new(bot_id: u64) -> Self {
        Self {
            bot_id,
            public_key: Patch::Omitted,
            token: Patch::Omitted,
            command: "proxy".to_string(),
            include_group_tag: false,
            attachment_count: 1,
            self_hosted: false,
            guilds: BTreeSet::new(),
        }
    }

    /// Rename the proxy command.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Set the bot token, enabling autosync.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Patch::Present(token.into());
        self
    }

    /// Set the message signing key.
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Patch::Present(public_key.into());
        self
    }

    /// Set how many attachment options the proxy command offers (0 to 10).
    pub fn with_attachment_count(mut self, count: u8) -> Self {
        self.attachment_count = count;
        self
    }

    /// Include the group tag in the bot name.
    pub fn with_group_tag(mut self, include: bool) -> Self {
        self.include_group_tag = include;
        self
    }

    /// Mark the userproxy as self-hosted.
    pub fn with_self_hosted(mut self, self_hosted: bool) -> Self {
        self.self_hosted = self_hosted;
        self
    }

    /// Replace the guild set.
    pub fn with_guilds(mut self, guilds: impl IntoIterator<Item = u64>) -> Self {
        self.guilds = guilds.into_iter().collect();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        validate::range(
            "userproxy.attachment_count",
            i64::from(self.attachment_count),
            0,
            10,
        )
    }
}

#[derive(Deserialize)]
struct UserproxyWire {
    bot_id: u64,
    #[serde(default)]
    public_key: Patch<String>,
    #[serde(default)]
    token: Patch<String>,
    #[serde(default = "default_command")]
    command: String,
    #[serde(default)]
    include_group_tag: bool,
    #[serde(default = "default_attachment_count")]
    attachment_count: u8,
    #[serde(default)]
    self_hosted: bool,
    #[serde(default)]
    guilds: BTreeSet<u64>,
}

fn default_command() -> String {
    "proxy".to_string()
}

fn default_attachment_count() -> u8 {
    1
}

impl TryFrom<UserproxyWire> for Userproxy {
    type Error = ValidationError;

    fn try_from(wire: UserproxyWire) -> Result<Self, Self::Error> {
        let userproxy = Userproxy {
            bot_id: wire.bot_id,
            public_key: wire.public_key,
            token: wire.token,
            command: wire.command,
            include_group_tag: wire.include_group_tag,
            attachment_count: wire.attachment_count,
            self_hosted: wire.self_hosted,
            guilds: wire.guilds,
        };
        userproxy.validate()?;
        Ok(userproxy)
    }
}

/// A system member.
///
/// Fetching requires the `members.read` intent. Members fetched through an
/// application keep a handle to it, which is what authorizes
/// [`Member::edit`]; a member built by hand is unbound and can only be
/// edited after being refetched.
#[derive(Debug, Clone)]
pub struct Member {
    id: ObjectId,
    name: String,
    avatar: Option<ImageRef>,
    proxy_tags: Vec<ProxyTag>,
    userproxy: Option<Userproxy>,
    context: Option<Arc<AppContext>>,
}

impl Member {
    /// Build an unbound member for local modeling.
    pub fn new(id: ObjectId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate::length("name", &name, 1, 80)?;
        Ok(Self {
            id,
            name,
            avatar: None,
            proxy_tags: Vec::new(),
            userproxy: None,
            context: None,
        })
    }

    /// Replace the proxy tag list on an unbound member.
    pub fn with_proxy_tags(mut self, tags: Vec<ProxyTag>) -> Result<Self, ValidationError> {
        validate::max_entries("proxy_tags", &tags, 15)?;
        self.proxy_tags = tags;
        Ok(self)
    }

    /// The member id.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The member name, unique within its group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member avatar, if one is set.
    pub fn avatar(&self) -> Option<&ImageRef> {
        self.avatar.as_ref()
    }

    /// Tags that route messages to this member.
    pub fn proxy_tags(&self) -> &[ProxyTag] {
        &self.proxy_tags
    }

    /// The member's userproxy, if one is configured.
    pub fn userproxy(&self) -> Option<&Userproxy> {
        self.userproxy.as_ref()
    }

    /// Fetch a member by id. Requires the `members.read` intent.
    #[instrument(skip(context, id), fields(member_id = %id))]
    pub async fn fetch(context: &Arc<AppContext>, id: ObjectId) -> PluralResult<Member> {
        context.require(Intents::MEMBERS_READ)?;
        let request = context.request(Method::Get, Route::member(id));
        let value = context.transport().execute(request).await?;
        let wire: MemberWire =
            serde_json::from_value(value).map_err(|e| JsonError::new(e.to_string()))?;
        Member::from_wire(wire, Some(Arc::clone(context)))
    }

    /// Apply a partial update. Requires the `members.write` intent, plus
    /// `members.userproxy_token.write` when the patch touches the
    /// userproxy.
    ///
    /// The gate runs locally and in order: an unbound member is rejected
    /// first, then every provided field is validated, then intents are
    /// checked. A patch that fails any stage never produces a request.
    /// On success the server holds the new state; this instance is left
    /// as fetched.
    #[instrument(skip(self, patch), fields(member_id = %self.id))]
    pub async fn edit(&self, patch: MemberPatch) -> PluralResult<()> {
        let ctx = self
            .context
            .as_ref()
            .ok_or_else(|| ClientError::unbound("member"))?;
        patch.validate()?;
        ctx.require(patch.required_intents())?;
        let body = patch.to_body()?;
        debug!("dispatching member update");
        let request = ctx
            .request(Method::Patch, Route::member(self.id))
            .with_body(body);
        ctx.transport().execute(request).await?;
        Ok(())
    }

    pub(crate) fn from_wire(
        wire: MemberWire,
        context: Option<Arc<AppContext>>,
    ) -> PluralResult<Member> {
        validate::length("name", &wire.name, 1, 80)?;
        validate::max_entries("proxy_tags", &wire.proxy_tags, 15)?;
        // the avatar hash hangs off the member's own id on the CDN
        let avatar = wire
            .avatar
            .map(|text| ImageRef::from_hex(&text, wire.id))
            .transpose()?;
        Ok(Member {
            id: wire.id,
            name: wire.name,
            avatar,
            proxy_tags: wire.proxy_tags,
            userproxy: wire.userproxy,
            context,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct MemberWire {
    pub(crate) id: ObjectId,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) avatar: Option<String>,
    #[serde(default)]
    pub(crate) proxy_tags: Vec<ProxyTag>,
    #[serde(default)]
    pub(crate) userproxy: Option<Userproxy>,
}

/// A staged partial update for a member.
///
/// Fields start omitted and stay off the wire until set. Clearing and
/// setting are distinct instructions:
///
/// ```
/// use plural_models::MemberPatch;
///
/// let patch = MemberPatch::new().name("apple").clear_avatar();
/// assert_eq!(
///     patch.to_body().unwrap(),
///     serde_json::json!({"name": "apple", "avatar": null}),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberPatch {
    name: Patch<String>,
    avatar: Patch<ImageRef>,
    proxy_tags: Patch<Vec<ProxyTag>>,
    userproxy: Patch<Userproxy>,
}

impl MemberPatch {
    /// An empty patch. Editing with it is a server-side no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member name (1 to 80 characters, unique within the group).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Patch::Present(name.into());
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

    /// Replace the proxy tag list (at most 15 entries).
    pub fn proxy_tags(mut self, tags: Vec<ProxyTag>) -> Self {
        self.proxy_tags = Patch::Present(tags);
        self
    }

    /// Replace the userproxy.
    pub fn userproxy(mut self, userproxy: Userproxy) -> Self {
        self.userproxy = Patch::Present(userproxy);
        self
    }

    /// Remove the userproxy.
    pub fn clear_userproxy(mut self) -> Self {
        self.userproxy = Patch::Null;
        self
    }

    /// True when no field carries an instruction.
    pub fn is_empty(&self) -> bool {
        self.name.is_omitted()
            && self.avatar.is_omitted()
            && self.proxy_tags.is_omitted()
            && self.userproxy.is_omitted()
    }

    /// Check every provided field. The first failure aborts the edit
    /// before any intent check or network traffic.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Patch::Present(name) = &self.name {
            validate::length("name", name, 1, 80)?;
        }
        if let Patch::Present(tags) = &self.proxy_tags {
            // entries were validated at construction
            validate::max_entries("proxy_tags", tags, 15)?;
        }
        if let Patch::Present(userproxy) = &self.userproxy {
            userproxy.validate()?;
        }
        Ok(())
    }

    /// The intents this patch needs. Every member edit takes
    /// `members.write`; providing the userproxy field, to set or to
    /// clear, additionally takes `members.userproxy_token.write`.
    pub fn required_intents(&self) -> Intents {
        let mut required = Intents::MEMBERS_WRITE;
        if self.userproxy.is_provided() {
            required |= Intents::MEMBERS_USERPROXY_TOKEN_WRITE;
        }
        required
    }

    /// The wire body: exactly the provided fields.
    pub fn to_body(&self) -> Result<serde_json::Value, JsonError> {
        let mut body = serde_json::Map::new();
        payload::put(&mut body, "name", &self.name)?;
        payload::put(&mut body, "avatar", &self.avatar)?;
        payload::put(&mut body, "proxy_tags", &self.proxy_tags)?;
        payload::put(&mut body, "userproxy", &self.userproxy)?;
        Ok(serde_json::Value::Object(body))
    }
}
