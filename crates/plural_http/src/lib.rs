//! Reqwest transport for the plural API.
//!
//! [`HttpTransport`] is the one [`Transport`](plural_interface::Transport)
//! implementation that talks to the live service. Everything above it is
//! transport-agnostic, which is what keeps the models testable against
//! scripted doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod transport;

pub use transport::{DEFAULT_BASE_URL, HttpTransport, TOKEN_VAR};
