// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Decoding incoming messages and updates.

use config::{Config, DecodeConfig};
use serde_json::json;
use tgstructs::{
  decode, decode_update,
  types::{ChatType, MessageEntityType, CONTENT_PRIORITY},
  Decoder, Error, MessageType, UpdateType,
};

mod common;
use common::init_tracing;

#[test]
fn text_message_classifies_and_round_trips() {
  init_tracing();
  let data = r#"{"message_id":1,"date":1000,"chat":{"id":5,"type":"private"},"text":"hi"}"#;

  let classified = decode(data).unwrap();
  assert_eq!(classified.message_type, Some(MessageType::Text));
  assert_eq!(classified.message.text.as_deref(), Some("hi"));
  assert_eq!(classified.message.chat.kind, ChatType::Private);

  let reencoded = serde_json::to_value(&classified.message).unwrap();
  assert_eq!(reencoded, serde_json::from_str::<serde_json::Value>(data).unwrap());
}

#[test]
fn service_message_has_no_type() {
  let classified = decode(
    r#"{
      "message_id": 10,
      "date": 1000,
      "chat": { "id": -42, "type": "group", "title": "Friends" },
      "new_chat_title": "Best friends"
    }"#,
  )
  .unwrap();

  assert_eq!(classified.message_type, None);
  assert_eq!(classified.message.new_chat_title.as_deref(), Some("Best friends"));
}

#[test]
fn earlier_content_field_wins() {
  let classified = decode(
    r#"{
      "message_id": 3,
      "date": 1000,
      "chat": { "id": 5, "type": "private" },
      "location": { "longitude": 13.4, "latitude": 52.5 },
      "contact": { "phone_number": "+100", "first_name": "Ann" }
    }"#,
  )
  .unwrap();

  let contact = CONTENT_PRIORITY
    .iter()
    .position(|t| *t == MessageType::Contact)
    .unwrap();
  let location = CONTENT_PRIORITY
    .iter()
    .position(|t| *t == MessageType::Location)
    .unwrap();
  assert!(contact < location);
  assert_eq!(classified.message_type, Some(MessageType::Contact));
}

#[test]
fn every_content_kind_is_recognised() {
  let fixtures = [
    (MessageType::Audio, json!({ "audio": { "file_id": "a", "duration": 3 } })),
    (
      MessageType::Video,
      json!({ "video": { "file_id": "v", "width": 1, "height": 1, "duration": 1 } }),
    ),
    (MessageType::Document, json!({ "document": { "file_id": "d" } })),
    (
      MessageType::Game,
      json!({ "game": { "title": "g", "description": "d", "photo": [] } }),
    ),
    (
      MessageType::Photo,
      json!({ "photo": [{ "file_id": "p", "width": 90, "height": 90 }] }),
    ),
    (
      MessageType::Sticker,
      json!({ "sticker": { "file_id": "s", "width": 512, "height": 512 } }),
    ),
    (MessageType::Voice, json!({ "voice": { "file_id": "o", "duration": 2 } })),
    (
      MessageType::VideoNote,
      json!({ "video_note": { "file_id": "n", "length": 240, "duration": 5 } }),
    ),
    (
      MessageType::Venue,
      json!({ "venue": {
        "location": { "longitude": 1.0, "latitude": 2.0 },
        "title": "Cafe",
        "address": "Main st."
      } }),
    ),
    (
      MessageType::Invoice,
      json!({ "invoice": {
        "title": "Coffee",
        "description": "Hot",
        "start_parameter": "coffee",
        "currency": "EUR",
        "total_amount": 250
      } }),
    ),
    (
      MessageType::SuccessfulPayment,
      json!({ "successful_payment": {
        "currency": "EUR",
        "total_amount": 250,
        "invoice_payload": "order-1",
        "telegram_payment_charge_id": "tg",
        "provider_payment_charge_id": "pr"
      } }),
    ),
  ];

  for (expected, content) in fixtures {
    let mut message = json!({ "message_id": 1, "date": 1000, "chat": { "id": 5, "type": "private" } });
    for (key, value) in content.as_object().unwrap() {
      message[key] = value.clone();
    }
    let classified = decode(&message.to_string()).unwrap();
    assert_eq!(classified.message_type, Some(expected), "{}", message);
  }
}

#[test]
fn malformed_input_is_a_decode_error() {
  assert!(matches!(decode("{not json"), Err(Error::DecodeError(_))));
  assert!(matches!(
    decode(r#"{"message_id":"one","date":1000,"chat":{"id":5,"type":"private"}}"#),
    Err(Error::DecodeError(_))
  ));
}

#[test]
fn unknown_enums_survive_lenient_decoding() {
  let data = r#"{
    "message_id": 4,
    "date": 1000,
    "chat": { "id": 5, "type": "private" },
    "text": "||secret||",
    "entities": [{ "type": "spoiler", "offset": 0, "length": 10 }]
  }"#;

  let classified = decode(data).unwrap();
  let entities = classified.message.entities.clone().unwrap();
  assert_eq!(entities[0].kind, MessageEntityType::Unknown("spoiler".into()));
  assert_eq!(
    serde_json::to_value(&classified.message).unwrap()["entities"][0]["type"],
    json!("spoiler")
  );

  let config = Config::from_toml_str("[decode]\nstrict_enums = true\n").unwrap();
  let strict = Decoder::new(&config.decode);
  assert!(matches!(strict.decode(data), Err(Error::UnknownVariant { .. })));
}

#[test]
fn update_with_message() {
  init_tracing();
  let update = decode_update(
    r#"{"update_id":42,"message":{"message_id":1,"date":1000,"chat":{"id":5,"type":"private"},"text":"hi"}}"#,
  )
  .unwrap();

  assert_eq!(update.update_id, 42);
  assert_eq!(update.update_type(), Some(UpdateType::Message));
  assert!(update.edited_message.is_none());
  assert!(update.callback_query.is_none());
  assert_eq!(update.message.unwrap().text.as_deref(), Some("hi"));
}

#[test]
fn strict_update_decoding_checks_callback_messages() {
  init_tracing();
  let data = json!({
    "update_id": 43,
    "callback_query": {
      "id": "1",
      "from": { "id": 1, "is_bot": false, "first_name": "Ann" },
      "chat_instance": "ci",
      "data": "x",
      "message": {
        "message_id": 1,
        "date": 1000,
        "chat": { "id": 5, "type": "secret" }
      }
    }
  })
  .to_string();

  assert!(decode_update(&data).is_ok());
  let strict = Decoder::new(&DecodeConfig { strict_enums: true });
  assert!(matches!(
    strict.decode_update(&data),
    Err(Error::UnknownVariant { ref field, ref value })
      if field == "callback_query.message.chat.type" && value == "secret"
  ));
}
