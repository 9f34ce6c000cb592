//! Shared test doubles and fixtures.
#![allow(dead_code)]

pub mod recording;

/// The member id used across fixtures.
pub const MEMBER_ID: &str = "5eb7cf5a86d9755df3a6c593";

/// A minimal member body as the API serves it.
pub fn member_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "proxy_tags": [],
    })
}
