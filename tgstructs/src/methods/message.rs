// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{upload_parts, MessageOrTrue};
use crate::types::{
  ChatAction, ChatId, File, InlineKeyboardMarkup, InputFile, InputMedia, Message, ParseMode,
  ReplyMarkup,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessage {
  pub chat_id: ChatId,
  /// 1-4096 characters after entity parsing.
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_web_page_preview: Option<bool>,
  /// Sends the message silently.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
  pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
    Self {
      chat_id: chat_id.into(),
      text: text.into(),
      parse_mode: None,
      disable_web_page_preview: None,
      disable_notification: None,
      reply_to_message_id: None,
      reply_markup: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardMessage {
  pub chat_id: ChatId,
  pub from_chat_id: ChatId,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  pub message_id: i64,
}

impl ForwardMessage {
  pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
    Self {
      chat_id: chat_id.into(),
      from_chat_id: from_chat_id.into(),
      disable_notification: None,
      message_id,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendPhoto {
  pub chat_id: ChatId,
  pub photo: InputFile,
  /// 0-200 characters.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

/// An mp3 file shown in the music player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendAudio {
  pub chat_id: ChatId,
  pub audio: InputFile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  /// Seconds.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub performer: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendDocument {
  pub chat_id: ChatId,
  pub document: InputFile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendVideo {
  pub chat_id: ChatId,
  pub video: InputFile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub height: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub supports_streaming: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

/// An OGG/OPUS voice message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendVoice {
  pub chat_id: ChatId,
  pub voice: InputFile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

/// A rounded square mp4 video of up to 1 minute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendVideoNote {
  pub chat_id: ChatId,
  /// Sending by URL is not supported.
  pub video_note: InputFile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<i64>,
  /// Video width and height.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub length: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

/// An album of 2-10 photos and videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMediaGroup {
  pub chat_id: ChatId,
  pub media: Vec<InputMedia>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
}

impl SendMediaGroup {
  pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
    Self {
      chat_id: chat_id.into(),
      media,
      disable_notification: None,
      reply_to_message_id: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendLocation {
  pub chat_id: ChatId,
  pub latitude: f64,
  pub longitude: f64,
  /// Seconds the location will be updated for, 60-86400.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub live_period: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

impl SendLocation {
  pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
    Self {
      chat_id: chat_id.into(),
      latitude,
      longitude,
      live_period: None,
      disable_notification: None,
      reply_to_message_id: None,
      reply_markup: None,
    }
  }
}

/// Moves a live location. The message is addressed either by `chat_id` and
/// `message_id` or by `inline_message_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditMessageLiveLocation {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  pub latitude: f64,
  pub longitude: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopMessageLiveLocation {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendVenue {
  pub chat_id: ChatId,
  pub latitude: f64,
  pub longitude: f64,
  pub title: String,
  pub address: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub foursquare_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendContact {
  pub chat_id: ChatId,
  pub phone_number: String,
  pub first_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

/// Shows a status for 5 seconds or until the next message from the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendChatAction {
  pub chat_id: ChatId,
  pub action: ChatAction,
}

/// Prepares a file of up to 20 MB for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFile {
  pub file_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditMessageText {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_web_page_preview: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditMessageCaption {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditMessageReplyMarkup {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Deletes a message sent less than 48 hours ago.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMessage {
  pub chat_id: ChatId,
  pub message_id: i64,
}

impl_method! {
  SendMessage => "sendMessage", Message;
  ForwardMessage => "forwardMessage", Message;
  SendPhoto => "sendPhoto", Message, |req| upload_parts([&req.photo]);
  SendAudio => "sendAudio", Message, |req| upload_parts([&req.audio]);
  SendDocument => "sendDocument", Message, |req| upload_parts([&req.document]);
  SendVideo => "sendVideo", Message, |req| upload_parts([&req.video]);
  SendVoice => "sendVoice", Message, |req| upload_parts([&req.voice]);
  SendVideoNote => "sendVideoNote", Message, |req| upload_parts([&req.video_note]);
  SendMediaGroup => "sendMediaGroup", Vec<Message>,
    |req| upload_parts(req.media.iter().map(InputMedia::media));
  SendLocation => "sendLocation", Message;
  EditMessageLiveLocation => "editMessageLiveLocation", MessageOrTrue;
  StopMessageLiveLocation => "stopMessageLiveLocation", MessageOrTrue;
  SendVenue => "sendVenue", Message;
  SendContact => "sendContact", Message;
  SendChatAction => "sendChatAction", bool;
  GetFile => "getFile", File;
  EditMessageText => "editMessageText", MessageOrTrue;
  EditMessageCaption => "editMessageCaption", MessageOrTrue;
  EditMessageReplyMarkup => "editMessageReplyMarkup", MessageOrTrue;
  DeleteMessage => "deleteMessage", bool;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    methods::Method,
    types::{InlineKeyboardButton, InputMediaPhoto, InputMediaVideo},
  };
  use serde_json::json;

  #[test]
  fn send_message_wire_form() {
    let mut request = SendMessage::new(-1001234i64, "*hi*");
    request.parse_mode = Some(ParseMode::MarkdownV2);
    request.disable_web_page_preview = Some(true);
    request.reply_markup = Some(InlineKeyboardButton::callback("Ok", "ok").into());

    assert_eq!(SendMessage::NAME, "sendMessage");
    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({
        "chat_id": -1001234,
        "text": "*hi*",
        "parse_mode": "MarkdownV2",
        "disable_web_page_preview": true,
        "reply_markup": { "inline_keyboard": [[{ "text": "Ok", "callback_data": "ok" }]] }
      })
    );
  }

  #[test]
  fn media_group_lists_every_attachment() {
    let request = SendMediaGroup::new(
      "@channel",
      vec![
        InputMedia::Photo(InputMediaPhoto {
          media: InputFile::upload("one.jpg", vec![1]),
          caption: None,
          parse_mode: None,
        }),
        InputMedia::Photo(InputMediaPhoto {
          media: InputFile::file_id("AgADBAAD"),
          caption: None,
          parse_mode: None,
        }),
        InputMedia::Video(InputMediaVideo {
          media: InputFile::upload("two.mp4", vec![2]),
          caption: None,
          parse_mode: None,
          width: None,
          height: None,
          duration: None,
          supports_streaming: None,
        }),
      ],
    );

    assert_eq!(
      request.uploads(),
      vec![("one.jpg", &[1u8][..]), ("two.mp4", &[2u8][..])]
    );
    assert_eq!(serde_json::to_value(&request).unwrap()["chat_id"], json!("@channel"));
  }

  #[test]
  fn edit_by_inline_message_id() {
    let request = EditMessageText {
      inline_message_id: Some("AAA".into()),
      text: "updated".into(),
      ..Default::default()
    };

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({ "inline_message_id": "AAA", "text": "updated" })
    );
  }
}
