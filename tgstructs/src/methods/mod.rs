// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Request records of the Bot API methods.
//!
//! Each record serializes to the JSON body of its method and names the type
//! the server answers with. Sending them is left to the caller.
mod chat;
mod games;
mod inline;
mod message;
mod payments;
mod stickers;
mod updates;
mod user;

pub use self::{
  chat::{
    AnswerCallbackQuery, DeleteChatPhoto, DeleteChatStickerSet, ExportChatInviteLink, GetChat,
    GetChatAdministrators, GetChatMember, GetChatMembersCount, KickChatMember, LeaveChat,
    PinChatMessage, PromoteChatMember, RestrictChatMember, SetChatDescription, SetChatPhoto,
    SetChatStickerSet, SetChatTitle, UnbanChatMember, UnpinChatMessage,
  },
  games::{GetGameHighScores, SendGame, SetGameScore},
  inline::AnswerInlineQuery,
  message::{
    DeleteMessage, EditMessageCaption, EditMessageLiveLocation, EditMessageReplyMarkup,
    EditMessageText, ForwardMessage, GetFile, SendAudio, SendChatAction, SendContact,
    SendDocument, SendLocation, SendMediaGroup, SendMessage, SendPhoto, SendVenue, SendVideo,
    SendVideoNote, SendVoice, StopMessageLiveLocation,
  },
  payments::{AnswerPreCheckoutQuery, AnswerShippingQuery, SendInvoice},
  stickers::{
    AddStickerToSet, CreateNewStickerSet, DeleteStickerFromSet, GetStickerSet, SendSticker,
    SetStickerPositionInSet, UploadStickerFile,
  },
  updates::{DeleteWebhook, GetUpdates, GetWebhookInfo, SetWebhook},
  user::{GetMe, GetUserProfilePhotos},
};

use crate::types::{InputFile, Message};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A Bot API method: its request body and the `result` it answers with.
pub trait Method: Serialize {
  /// Method name as used in the request path, e.g. `sendMessage`.
  const NAME: &'static str;
  type Response: DeserializeOwned;

  /// Files to send as multipart parts alongside the JSON fields.
  fn uploads(&self) -> Vec<(&str, &[u8])> {
    Vec::new()
  }
}

/// Answer of the edit methods: the edited message, or `true` when the
/// message was sent via the bot in inline mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageOrTrue {
  Message(Box<Message>),
  True(bool),
}

impl MessageOrTrue {
  pub fn message(&self) -> Option<&Message> {
    match self {
      MessageOrTrue::Message(message) => Some(message),
      MessageOrTrue::True(_) => None,
    }
  }
}

pub(crate) fn upload_parts<'a>(
  files: impl IntoIterator<Item = &'a InputFile>,
) -> Vec<(&'a str, &'a [u8])> {
  files.into_iter().filter_map(InputFile::upload_part).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Chat, ChatType};
  use serde_json::json;

  #[test]
  fn edit_answer_is_message_or_true() {
    let inline: MessageOrTrue = serde_json::from_value(json!(true)).unwrap();
    assert_eq!(inline, MessageOrTrue::True(true));
    assert!(inline.message().is_none());

    let edited: MessageOrTrue = serde_json::from_value(json!({
      "message_id": 3,
      "date": 1000,
      "chat": { "id": 5, "type": "private" },
      "text": "edited"
    }))
    .unwrap();
    let mut expected = Message::new(3, 1000, Chat::new(5, ChatType::Private));
    expected.text = Some("edited".into());
    assert_eq!(edited.message(), Some(&expected));
  }

  #[test]
  fn uploads_collects_only_attachments() {
    let files = [
      InputFile::file_id("AgADBAAD"),
      InputFile::upload("a.png", vec![1]),
      InputFile::url("https://example.com/b.png"),
    ];
    assert_eq!(upload_parts(&files), vec![("a.png", &[1u8][..])]);
  }
}
