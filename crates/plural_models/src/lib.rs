//! Domain resource models and operations for the plural client library.
//!
//! Each resource follows the same shape:
//!
//! - a model struct holding validated state, bound to the
//!   [`AppContext`](plural_interface::AppContext) that fetched it;
//! - a patch type staging a partial update out of tri-state
//!   [`Patch`](plural_core::Patch) fields;
//! - an `edit` operation that gates the patch locally before anything
//!   touches the network: unbound models are rejected first, then every
//!   provided field is validated, then the identity's intents are checked
//!   against a static per-field table, and only then is the minimal body
//!   dispatched.
//!
//! Validation runs identically whether a value is constructed fresh,
//! deserialized from an API response, or staged in a patch.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod autoproxy;
mod config;
mod group;
mod member;
mod message;
mod payload;
mod validate;

pub use autoproxy::{Autoproxy, AutoproxyMode, AutoproxyPatch};
pub use config::{ConfigPatch, ReplyFormat, UserConfig};
pub use group::{Group, GroupPatch};
pub use member::{Member, MemberPatch, ProxyTag, Userproxy};
pub use message::{Message, MessageCreate, MessageCreateBuilder};
