//! The facade: construction, user scoping, and delegation to the models.

mod test_utils;

use plural::{
    Application, AutoproxyMode, ConfigPatch, Intents, MemberPatch, MessageCreate,
    ObjectId, ReplyFormat, Transport,
};
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::recording::RecordingTransport;
use test_utils::{MEMBER_ID, member_json};

#[tokio::test]
async fn fetches_and_edits_run_through_one_transport() {
    let transport = Arc::new(RecordingTransport::new_sequence(vec![
        member_json(MEMBER_ID, "apple"),
        Value::Null,
    ]));
    let app = Application::with_transport(
        Arc::clone(&transport) as Arc<dyn Transport>,
        Intents::MEMBERS_READ | Intents::MEMBERS_WRITE,
    );

    let member = app.fetch_member(MEMBER_ID.parse().unwrap()).await.unwrap();
    assert_eq!(member.name(), "apple");

    member.edit(MemberPatch::new().name("pear")).await.unwrap();
    assert_eq!(transport.call_count(), 2);
    let request = transport.last_request().unwrap();
    assert_eq!(request.body().as_ref().unwrap(), &json!({"name": "pear"}));
}

#[tokio::test]
async fn user_scope_addresses_user_resources() {
    let transport = Arc::new(RecordingTransport::new_sequence(vec![
        json!({"mode": "front", "member": null}),
        json!({
            "reply_format": "none",
            "ping_replies": false,
            "groups_in_autocomplete": true,
        }),
    ]));
    let app = Application::with_transport(
        Arc::clone(&transport) as Arc<dyn Transport>,
        Intents::LATCH_READ,
    );

    let scope = app.as_user(777);
    assert_eq!(scope.user_id(), 777);

    let autoproxy = scope.fetch_autoproxy(None).await.unwrap();
    assert_eq!(autoproxy.mode(), AutoproxyMode::Front);
    let request = transport.last_request().unwrap();
    assert_eq!(request.route().as_str(), "/users/777/autoproxy");
    assert!(
        request
            .params()
            .contains(&("user_id".to_string(), "777".to_string()))
    );

    let config = scope.fetch_config().await.unwrap();
    assert_eq!(config.user_id(), 777);
    assert!(!config.ping_replies());
    let request = transport.last_request().unwrap();
    assert_eq!(request.route().as_str(), "/users/777/config");
}

#[tokio::test]
async fn user_resources_are_addressable_without_a_scope() {
    let transport = Arc::new(RecordingTransport::new_sequence(vec![
        json!({"mode": "latch", "member": null}),
        json!({
            "reply_format": "embed",
            "ping_replies": true,
            "groups_in_autocomplete": false,
        }),
        Value::Null,
    ]));
    let app = Application::with_transport(
        Arc::clone(&transport) as Arc<dyn Transport>,
        Intents::LATCH_READ,
    );

    let autoproxy = app.fetch_autoproxy(777, Some(42)).await.unwrap();
    assert_eq!(autoproxy.mode(), AutoproxyMode::Latch);
    assert!(
        transport
            .last_request()
            .unwrap()
            .params()
            .contains(&("guild_id".to_string(), "42".to_string()))
    );

    let config = app.fetch_config(777).await.unwrap();
    assert_eq!(config.reply_format(), ReplyFormat::Embed);

    // settings edits need no prior fetch
    app.edit_config(777, ConfigPatch::new().ping_replies(false))
        .await
        .unwrap();
    let request = transport.last_request().unwrap();
    assert_eq!(request.route().as_str(), "/users/777/config");
    assert_eq!(
        request.body().as_ref().unwrap(),
        &json!({"ping_replies": false}),
    );
}

#[tokio::test]
async fn send_message_runs_the_intent_check_first() {
    let transport = Arc::new(RecordingTransport::new_success(json!({
        "proxy_id": 9u64,
        "author_id": 3u64,
        "channel_id": 4u64,
        "timestamp": "2026-08-01T12:30:00Z",
    })));
    let create = MessageCreate::builder()
        .channel_id(4u64)
        .member_id(MEMBER_ID.parse::<ObjectId>().unwrap())
        .content("hi")
        .build()
        .unwrap();

    let app = Application::with_transport(Arc::clone(&transport) as Arc<dyn Transport>, Intents::NONE);
    assert!(app.send_message(&create).await.is_err());
    assert_eq!(transport.call_count(), 0);

    let app = Application::with_transport(
        Arc::clone(&transport) as Arc<dyn Transport>,
        Intents::MESSAGES_WRITE,
    );
    let message = app.send_message(&create).await.unwrap();
    assert_eq!(*message.proxy_id(), 9);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn intents_are_visible_on_the_application() {
    let transport = Arc::new(RecordingTransport::new_success(Value::Null));
    let app = Application::with_transport(Arc::clone(&transport) as Arc<dyn Transport>, Intents::ALL);
    assert_eq!(app.intents(), Intents::ALL);
    assert!(app.intents().contains(Intents::GROUPS_SHARE));
}
