// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  types::{Chat, Message, MessageEntity, MessageType},
  updates::Update,
};
use config::DecodeConfig;
use error::Error;
use tracing::{debug, instrument, warn};

/// A decoded message together with its content discriminant.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
  pub message: Message,
  /// `None` for service messages that carry no content field.
  pub message_type: Option<MessageType>,
}

/// Decodes incoming JSON into typed records.
///
/// Unknown enumeration values are kept as `Unknown(..)` unless
/// `strict_enums` is set, in which case the first one found fails decoding.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
  strict_enums: bool,
}

impl Decoder {
  pub fn new(config: &DecodeConfig) -> Self {
    Self {
      strict_enums: config.strict_enums,
    }
  }

  #[instrument(skip(self, data), fields(len = data.len()))]
  pub fn decode(&self, data: &str) -> Result<Classified, Error> {
    let message: Message = serde_json::from_str(data)?;
    self.classify(message)
  }

  #[instrument(skip(self, data), fields(len = data.len()))]
  pub fn decode_slice(&self, data: &[u8]) -> Result<Classified, Error> {
    let message: Message = serde_json::from_slice(data)?;
    self.classify(message)
  }

  #[instrument(skip(self, data), fields(len = data.len()))]
  pub fn decode_update(&self, data: &str) -> Result<Update, Error> {
    let update: Update = serde_json::from_str(data)?;
    if self.strict_enums {
      for (field, message) in [
        ("message", &update.message),
        ("edited_message", &update.edited_message),
        ("channel_post", &update.channel_post),
        ("edited_channel_post", &update.edited_channel_post),
      ] {
        if let Some(message) = message {
          reject_unknown(field, message)?;
        }
      }
      if let Some(message) = update
        .callback_query
        .as_ref()
        .and_then(|query| query.message.as_ref())
      {
        reject_unknown("callback_query.message", message)?;
      }
    }
    debug!(update_id = update.update_id, update_type = ?update.update_type(), "Decoded update");
    Ok(update)
  }

  fn classify(&self, message: Message) -> Result<Classified, Error> {
    if self.strict_enums {
      reject_unknown("", &message)?;
    }
    let message_type = message.message_type();
    debug!(message_id = message.message_id, ?message_type, "Decoded message");
    Ok(Classified {
      message,
      message_type,
    })
  }
}

/// Decodes a message with lenient enumerations.
pub fn decode(data: &str) -> Result<Classified, Error> {
  Decoder::default().decode(data)
}

pub fn decode_slice(data: &[u8]) -> Result<Classified, Error> {
  Decoder::default().decode_slice(data)
}

pub fn decode_update(data: &str) -> Result<Update, Error> {
  Decoder::default().decode_update(data)
}

fn unknown(field: String, value: &str) -> Error {
  warn!(%field, value, "Rejected unknown enumeration value");
  Error::UnknownVariant {
    field,
    value: value.to_string(),
  }
}

fn join(prefix: &str, field: &str) -> String {
  if prefix.is_empty() {
    field.to_string()
  } else {
    format!("{}.{}", prefix, field)
  }
}

/// Walks `message` and its nested messages; `prefix` is the dotted path of
/// `message` itself, empty at the top.
fn reject_unknown(prefix: &str, message: &Message) -> Result<(), Error> {
  check_chat(&join(prefix, "chat"), &message.chat)?;
  if let Some(chat) = &message.forward_from_chat {
    check_chat(&join(prefix, "forward_from_chat"), chat)?;
  }
  check_entities(&join(prefix, "entities"), message.entities.as_deref())?;
  check_entities(
    &join(prefix, "caption_entities"),
    message.caption_entities.as_deref(),
  )?;

  if let Some(point) = message
    .sticker
    .as_ref()
    .and_then(|sticker| sticker.mask_position.as_ref())
    .map(|position| &position.point)
  {
    if !point.is_known() {
      return Err(unknown(
        join(prefix, "sticker.mask_position.point"),
        point.as_str(),
      ));
    }
  }
  if let Some(game) = &message.game {
    check_entities(
      &join(prefix, "game.text_entities"),
      game.text_entities.as_deref(),
    )?;
  }

  if let Some(reply) = &message.reply_to_message {
    reject_unknown(&join(prefix, "reply_to_message"), reply)?;
  }
  if let Some(pinned) = &message.pinned_message {
    reject_unknown(&join(prefix, "pinned_message"), pinned)?;
  }
  Ok(())
}

fn check_chat(field: &str, chat: &Chat) -> Result<(), Error> {
  if !chat.kind.is_known() {
    return Err(unknown(join(field, "type"), chat.kind.as_str()));
  }
  match &chat.pinned_message {
    Some(pinned) => reject_unknown(&join(field, "pinned_message"), pinned),
    None => Ok(()),
  }
}

fn check_entities(field: &str, entities: Option<&[MessageEntity]>) -> Result<(), Error> {
  match entities
    .unwrap_or_default()
    .iter()
    .find(|entity| !entity.kind.is_known())
  {
    Some(entity) => Err(unknown(join(field, "type"), entity.kind.as_str())),
    None => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const TEXT: &str =
    r#"{"message_id":1,"date":1000,"chat":{"id":5,"type":"private"},"text":"hi"}"#;

  #[test]
  fn classifies_text_message() {
    let classified = decode(TEXT).unwrap();
    assert_eq!(classified.message_type, Some(MessageType::Text));
    assert_eq!(classified.message.text.as_deref(), Some("hi"));
    assert_eq!(decode_slice(TEXT.as_bytes()).unwrap(), classified);
  }

  #[test]
  fn strict_decoding_rejects_unknown_values() {
    let data = r##"{
      "message_id": 1,
      "date": 1000,
      "chat": { "id": 5, "type": "private" },
      "text": "#tag",
      "entities": [{ "type": "spoiler", "offset": 0, "length": 4 }]
    }"##;

    let lenient = decode(data).unwrap();
    assert!(lenient.message.entities.unwrap()[0].kind.as_str() == "spoiler");

    let strict = Decoder::new(&DecodeConfig { strict_enums: true });
    match strict.decode(data) {
      Err(Error::UnknownVariant { field, value }) => {
        assert_eq!(field, "entities.type");
        assert_eq!(value, "spoiler");
      }
      other => panic!("expected UnknownVariant, got {:?}", other),
    }
  }

  #[test]
  fn strict_decoding_walks_nested_replies() {
    let data = r#"{
      "message_id": 2,
      "date": 1000,
      "chat": { "id": 5, "type": "private" },
      "reply_to_message": {
        "message_id": 1,
        "date": 900,
        "chat": { "id": -7, "type": "forum" }
      }
    }"#;

    let strict = Decoder::new(&DecodeConfig { strict_enums: true });
    assert!(matches!(
      strict.decode(data),
      Err(Error::UnknownVariant { ref field, .. }) if field == "reply_to_message.chat.type"
    ));
  }

  #[test]
  fn strict_decoding_names_the_pinned_path() {
    let data = r#"{
      "message_id": 3,
      "date": 1000,
      "chat": {
        "id": -7,
        "type": "supergroup",
        "pinned_message": {
          "message_id": 1,
          "date": 900,
          "chat": { "id": -7, "type": "supergroup" },
          "text": "rules",
          "entities": [{ "type": "spoiler", "offset": 0, "length": 5 }]
        }
      },
      "text": "hello"
    }"#;

    let strict = Decoder::new(&DecodeConfig { strict_enums: true });
    match strict.decode(data) {
      Err(Error::UnknownVariant { field, value }) => {
        assert_eq!(field, "chat.pinned_message.entities.type");
        assert_eq!(value, "spoiler");
      }
      other => panic!("expected UnknownVariant, got {:?}", other),
    }
  }
}
