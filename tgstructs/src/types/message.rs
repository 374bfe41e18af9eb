// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{
  unix_time, Audio, Chat, Contact, Document, Location, PhotoSize, User, Venue, Video, VideoNote,
  Voice,
};
use crate::{
  games::Game,
  payments::{Invoice, SuccessfulPayment},
  stickers::Sticker,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A message. At most one content field (see [`CONTENT_PRIORITY`]) is
/// populated per message; service messages carry none.
///
/// `reply_to_message` and `pinned_message` are truncated by the server: the
/// nested message never carries a further reply or pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
  pub message_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub from: Option<User>,
  pub date: i64,
  pub chat: Chat,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub forward_from: Option<User>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub forward_from_chat: Option<Chat>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub forward_from_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub forward_signature: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub forward_date: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message: Option<Box<Message>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub edit_date: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub media_group_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author_signature: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub entities: Option<Vec<MessageEntity>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption_entities: Option<Vec<MessageEntity>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub audio: Option<Audio>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub document: Option<Document>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub game: Option<Game>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo: Option<Vec<PhotoSize>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sticker: Option<Sticker>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video: Option<Video>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub voice: Option<Voice>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video_note: Option<VideoNote>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub contact: Option<Contact>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<Location>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub venue: Option<Venue>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub new_chat_members: Option<Vec<User>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub left_chat_member: Option<User>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub new_chat_title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub new_chat_photo: Option<Vec<PhotoSize>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub delete_chat_photo: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub group_chat_created: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub supergroup_chat_created: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub channel_chat_created: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub migrate_to_chat_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub migrate_from_chat_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pinned_message: Option<Box<Message>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub invoice: Option<Invoice>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub successful_payment: Option<SuccessfulPayment>,
  /// Domain of the website the user logged in on.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub connected_website: Option<String>,
}

impl Message {
  /// A bare message with no content, as the starting point for tests and
  /// fixtures.
  pub fn new(message_id: i64, date: i64, chat: Chat) -> Self {
    Self {
      message_id,
      from: None,
      date,
      chat,
      forward_from: None,
      forward_from_chat: None,
      forward_from_message_id: None,
      forward_signature: None,
      forward_date: None,
      reply_to_message: None,
      edit_date: None,
      media_group_id: None,
      author_signature: None,
      text: None,
      entities: None,
      caption_entities: None,
      audio: None,
      document: None,
      game: None,
      photo: None,
      sticker: None,
      video: None,
      voice: None,
      video_note: None,
      caption: None,
      contact: None,
      location: None,
      venue: None,
      new_chat_members: None,
      left_chat_member: None,
      new_chat_title: None,
      new_chat_photo: None,
      delete_chat_photo: None,
      group_chat_created: None,
      supergroup_chat_created: None,
      channel_chat_created: None,
      migrate_to_chat_id: None,
      migrate_from_chat_id: None,
      pinned_message: None,
      invoice: None,
      successful_payment: None,
      connected_website: None,
    }
  }

  /// The first populated content field in [`CONTENT_PRIORITY`] order.
  pub fn message_type(&self) -> Option<MessageType> {
    CONTENT_PRIORITY
      .iter()
      .copied()
      .find(|message_type| message_type.is_present_in(self))
  }

  pub fn date_time(&self) -> Option<DateTime<Utc>> {
    unix_time(self.date)
  }

  pub fn edit_date_time(&self) -> Option<DateTime<Utc>> {
    self.edit_date.and_then(unix_time)
  }

  pub fn forward_date_time(&self) -> Option<DateTime<Utc>> {
    self.forward_date.and_then(unix_time)
  }

  pub fn is_forwarded(&self) -> bool {
    self.forward_date.is_some()
  }
}

/// Content kind of a message, named after the field that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
  Text,
  Audio,
  Video,
  Document,
  Game,
  Photo,
  Sticker,
  Voice,
  VideoNote,
  Contact,
  Location,
  Venue,
  Invoice,
  SuccessfulPayment,
}

/// Order in which content fields are tested when classifying a message.
/// When a malformed message carries two content fields, the earlier one
/// wins.
pub const CONTENT_PRIORITY: [MessageType; 14] = [
  MessageType::Text,
  MessageType::Audio,
  MessageType::Video,
  MessageType::Document,
  MessageType::Game,
  MessageType::Photo,
  MessageType::Sticker,
  MessageType::Voice,
  MessageType::VideoNote,
  MessageType::Contact,
  MessageType::Location,
  MessageType::Venue,
  MessageType::Invoice,
  MessageType::SuccessfulPayment,
];

impl MessageType {
  /// JSON name of the field carrying this content.
  pub fn field_name(self) -> &'static str {
    match self {
      MessageType::Text => "text",
      MessageType::Audio => "audio",
      MessageType::Video => "video",
      MessageType::Document => "document",
      MessageType::Game => "game",
      MessageType::Photo => "photo",
      MessageType::Sticker => "sticker",
      MessageType::Voice => "voice",
      MessageType::VideoNote => "video_note",
      MessageType::Contact => "contact",
      MessageType::Location => "location",
      MessageType::Venue => "venue",
      MessageType::Invoice => "invoice",
      MessageType::SuccessfulPayment => "successful_payment",
    }
  }

  pub fn is_present_in(self, message: &Message) -> bool {
    match self {
      MessageType::Text => message.text.is_some(),
      MessageType::Audio => message.audio.is_some(),
      MessageType::Video => message.video.is_some(),
      MessageType::Document => message.document.is_some(),
      MessageType::Game => message.game.is_some(),
      MessageType::Photo => message.photo.is_some(),
      MessageType::Sticker => message.sticker.is_some(),
      MessageType::Voice => message.voice.is_some(),
      MessageType::VideoNote => message.video_note.is_some(),
      MessageType::Contact => message.contact.is_some(),
      MessageType::Location => message.location.is_some(),
      MessageType::Venue => message.venue.is_some(),
      MessageType::Invoice => message.invoice.is_some(),
      MessageType::SuccessfulPayment => message.successful_payment.is_some(),
    }
  }
}

impl fmt::Display for MessageType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.field_name())
  }
}

string_enum! {
  pub enum MessageEntityType {
    /// `@username`
    Mention => "mention",
    Hashtag => "hashtag",
    BotCommand => "bot_command",
    Url => "url",
    Email => "email",
    Bold => "bold",
    Italic => "italic",
    /// Monowidth string.
    Code => "code",
    /// Monowidth block.
    Pre => "pre",
    /// Clickable text URL.
    TextLink => "text_link",
    /// Mention of a user without a username.
    TextMention => "text_mention",
  }
}

/// A special entity in a text message: hashtag, username, URL, etc.
/// Offsets and lengths count UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
  #[serde(rename = "type")]
  pub kind: MessageEntityType,
  pub offset: i64,
  pub length: i64,
  /// `text_link` only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  /// `text_mention` only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user: Option<User>,
}
