//! Unit tests for the built-in registration list.

use super::run;
use crate::{builtin_commands, BuiltinOptions};
use chatr_core::ReplyPayload;
use command_service::Command;

#[test]
fn test_builtin_keys_in_registration_order() {
    let keys: Vec<String> = builtin_commands(&BuiltinOptions::default())
        .iter()
        .map(|c| c.key().to_string())
        .collect();
    assert_eq!(keys, vec!["list", "help", "hello", "version", "support"]);
}

#[test]
fn test_every_builtin_has_description() {
    assert!(builtin_commands(&BuiltinOptions::default())
        .iter()
        .all(|c| c.description().is_some()));
}

#[tokio::test]
async fn test_builtins_dispatch_together() {
    let options = BuiltinOptions {
        nickname: "Test Bot".to_string(),
        bot_version: "9.9.9".to_string(),
        derived_support: None,
    };
    let payloads = run(builtin_commands(&options), "!hello; !version; !unknown; !list;").await;

    assert_eq!(payloads.len(), 3);
    assert_eq!(payloads[0], ReplyPayload::Text("Hello @testuser!".to_string()));
    assert!(matches!(&payloads[1], ReplyPayload::Text(t) if t.contains("9.9.9")));
    match &payloads[2] {
        ReplyPayload::Rich(content) => assert!(content
            .description
            .as_deref()
            .unwrap()
            .contains("list\nhelp\nhello\nversion\nsupport")),
        other => panic!("expected rich reply, got {other:?}"),
    }
}
