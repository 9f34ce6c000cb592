//! Shared test doubles and fixtures.
#![allow(dead_code)]

pub mod recording;

use plural_core::Intents;
use plural_interface::{AppContext, Transport};
use recording::RecordingTransport;
use std::sync::Arc;

/// The member id used across fixtures.
pub const MEMBER_ID: &str = "5eb7cf5a86d9755df3a6c593";

/// The group id used across fixtures.
pub const GROUP_ID: &str = "65f1a2b3c4d5e6f708192a3b";

/// A minimal member body as the API serves it.
pub fn member_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "proxy_tags": [],
    })
}

/// A minimal group body as the API serves it.
pub fn group_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "members": [],
    })
}

/// An application context over a recording transport.
pub fn app(transport: &Arc<RecordingTransport>, intents: Intents) -> Arc<AppContext> {
    Arc::new(AppContext::new(
        Arc::clone(transport) as Arc<dyn Transport>,
        intents,
    ))
}
