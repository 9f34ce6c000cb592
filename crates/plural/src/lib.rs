//! Client library for the plural API.
//!
//! An [`Application`] is a token plus the intent set it was issued with.
//! Resources fetched through it stay bound to it, so later edits are
//! checked against the same intents and go out through the same transport:
//!
//! ```no_run
//! use plural::{Application, Intents, MemberPatch};
//!
//! # async fn run() -> plural::PluralResult<()> {
//! let app = Application::new(
//!     "your-token",
//!     Intents::MEMBERS_READ | Intents::MEMBERS_WRITE,
//! );
//!
//! let member = app.fetch_member("5eb7cf5a86d9755df3a6c593".parse()?).await?;
//! member.edit(MemberPatch::new().name("apple")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Partial updates use tri-state [`Patch`] fields, so clearing a value and
//! leaving it untouched are different instructions, and the wire payload
//! carries exactly what was staged.
//!
//! The work is split across focused crates, re-exported here:
//!
//! - `plural_core`: [`Patch`], [`Intents`], [`ObjectId`], [`ImageRef`]
//! - `plural_models`: resources, their patches, and the edit gate
//! - `plural_interface`: the [`Transport`] seam and request descriptors
//! - `plural_http`: the reqwest transport for the live service
//! - `plural_error`: the error taxonomy

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod application;
mod user;

pub use application::Application;
pub use user::UserScope;

pub use plural_core::{
    DEFAULT_CDN_BASE, ImageExtension, ImageRef, Intents, ObjectId, Patch,
};
pub use plural_error::{
    ClientError, ClientErrorKind, ConfigError, ConfigErrorKind, DecodeError,
    DecodeErrorKind, HttpError, HttpErrorKind, IntentError, IntentErrorKind, JsonError,
    PluralError, PluralErrorKind, PluralResult, ValidationError, ValidationErrorKind,
};
pub use plural_http::{DEFAULT_BASE_URL, HttpTransport, TOKEN_VAR};
pub use plural_interface::{ApiRequest, AppContext, FilePart, Method, Route, Transport};
pub use plural_models::{
    Autoproxy, AutoproxyMode, AutoproxyPatch, ConfigPatch, Group, GroupPatch, Member,
    MemberPatch, Message, MessageCreate, MessageCreateBuilder, ProxyTag, ReplyFormat,
    UserConfig, Userproxy,
};
