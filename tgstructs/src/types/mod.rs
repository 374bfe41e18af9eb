// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod chat;
mod input;
mod keyboard;
mod media;
mod message;
mod user;

pub use self::{
  chat::{Chat, ChatId, ChatMember, ChatMemberStatus, ChatPhoto, ChatType},
  input::{InputFile, InputMedia, InputMediaPhoto, InputMediaVideo},
  keyboard::{
    CallbackQuery, ForceReply, InlineKeyboardButton, InlineKeyboardButtonKind,
    InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup,
  },
  media::{Audio, Contact, Document, File, Location, PhotoSize, Venue, Video, VideoNote, Voice},
  message::{Message, MessageEntity, MessageEntityType, MessageType, CONTENT_PRIORITY},
  user::{User, UserProfilePhotos},
};

use chrono::{DateTime, TimeZone, Utc};

string_enum! {
  /// Formatting mode for message text and captions.
  pub enum ParseMode {
    Markdown => "Markdown",
    MarkdownV2 => "MarkdownV2",
    Html => "HTML",
  }
}

string_enum! {
  /// What the bot is doing, shown to users by `sendChatAction`.
  pub enum ChatAction {
    Typing => "typing",
    UploadPhoto => "upload_photo",
    RecordVideo => "record_video",
    UploadVideo => "upload_video",
    RecordAudio => "record_audio",
    UploadAudio => "upload_audio",
    UploadDocument => "upload_document",
    FindLocation => "find_location",
    RecordVideoNote => "record_video_note",
    UploadVideoNote => "upload_video_note",
  }
}

/// Unix time as sent by the API.
pub(crate) fn unix_time(timestamp: i64) -> Option<DateTime<Utc>> {
  Utc.timestamp_opt(timestamp, 0).single()
}
