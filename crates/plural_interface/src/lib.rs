//! Transport trait and request descriptors for the plural client library.
//!
//! This crate defines the seam between the model layer and the network:
//!
//! - [`Transport`]: the single async trait a backend implements. The
//!   reqwest-backed implementation lives in `plural_http`; tests substitute
//!   recording fakes.
//! - [`ApiRequest`], [`Route`], [`Method`], [`FilePart`]: a fully described
//!   request, independent of any HTTP library.
//! - [`AppContext`]: the identity (transport + intents + optional acting
//!   user) that fetched models stay bound to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod request;
mod transport;

pub use context::AppContext;
pub use request::{ApiRequest, FilePart, Method, Route};
pub use transport::Transport;
