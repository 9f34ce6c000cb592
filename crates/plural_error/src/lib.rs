//! Error types for the plural client library.
//!
//! This crate provides the foundation error types used throughout the plural
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The top-level [`PluralError`] boxes a [`PluralErrorKind`] so callers can
//! branch on which stage of an operation failed: local validation, an intent
//! check, or the HTTP exchange itself.
//!
//! # Examples
//!
//! ```
//! use plural_error::{PluralResult, HttpError, HttpErrorKind};
//!
//! fn fetch_data() -> PluralResult<String> {
//!     Err(HttpError::new(HttpErrorKind::NotFound))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod decode;
mod error;
mod http;
mod intent;
mod json;
mod validation;

pub use client::{ClientError, ClientErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use decode::{DecodeError, DecodeErrorKind};
pub use error::{PluralError, PluralErrorKind, PluralResult};
pub use http::{HttpError, HttpErrorKind};
pub use intent::{IntentError, IntentErrorKind};
pub use json::JsonError;
pub use validation::{ValidationError, ValidationErrorKind};
