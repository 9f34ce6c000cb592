//! Core data types for the plural client library.
//!
//! This crate holds the value types shared across the workspace:
//!
//! - [`Patch`]: the tri-state field used by partial updates, distinguishing
//!   "leave unchanged" from "clear" from "set".
//! - [`Intents`]: the immutable capability set granted to an application
//!   token, checked locally before any request is dispatched.
//! - [`ObjectId`]: the 12-byte resource id used by members and groups.
//! - [`ImageRef`] / [`ImageExtension`]: content-addressed references to
//!   uploaded images and the tag byte scheme they are stored under.
//!
//! Everything here is plain data: no I/O, no async, no client handle.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod intents;
mod object_id;
mod patch;

pub use image::{DEFAULT_CDN_BASE, ImageExtension, ImageRef};
pub use intents::Intents;
pub use object_id::ObjectId;
pub use patch::Patch;
