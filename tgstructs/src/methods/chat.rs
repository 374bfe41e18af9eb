// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::upload_parts;
use crate::{
  field::Field,
  types::{Chat, ChatId, ChatMember, InputFile},
};
use serde::{Deserialize, Serialize};

/// Bans a user. In supergroups and channels the user cannot come back on
/// their own until unbanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickChatMember {
  pub chat_id: ChatId,
  pub user_id: i64,
  /// Unix time the ban ends. Under 30 seconds or over 366 days from now
  /// means forever.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub until_date: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbanChatMember {
  pub chat_id: ChatId,
  pub user_id: i64,
}

/// Restricts a supergroup member. Passing `true` everywhere lifts the
/// restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictChatMember {
  pub chat_id: ChatId,
  pub user_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub until_date: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_send_messages: Option<bool>,
  /// Implies `can_send_messages`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_send_media_messages: Option<bool>,
  /// Implies `can_send_media_messages`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_send_other_messages: Option<bool>,
  /// Implies `can_send_media_messages`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_add_web_page_previews: Option<bool>,
}

/// Promotes or demotes a user. Passing `false` everywhere demotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoteChatMember {
  pub chat_id: ChatId,
  pub user_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_change_info: Option<bool>,
  /// Channels only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_post_messages: Option<bool>,
  /// Channels only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_edit_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_delete_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_invite_users: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_restrict_members: Option<bool>,
  /// Supergroups only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_pin_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_promote_members: Option<bool>,
}

impl PromoteChatMember {
  pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
    Self {
      chat_id: chat_id.into(),
      user_id,
      can_change_info: None,
      can_post_messages: None,
      can_edit_messages: None,
      can_delete_messages: None,
      can_invite_users: None,
      can_restrict_members: None,
      can_pin_messages: None,
      can_promote_members: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportChatInviteLink {
  pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetChatPhoto {
  pub chat_id: ChatId,
  /// Must be an upload.
  pub photo: InputFile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteChatPhoto {
  pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetChatTitle {
  pub chat_id: ChatId,
  /// 1-255 characters.
  pub title: String,
}

/// Changes the description of a supergroup or channel.
///
/// `description` distinguishes "leave as is" ([`Field::Absent`]) from
/// "clear" ([`Field::Null`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetChatDescription {
  pub chat_id: ChatId,
  /// 0-255 characters.
  #[serde(default, skip_serializing_if = "Field::is_absent")]
  pub description: Field<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinChatMessage {
  pub chat_id: ChatId,
  pub message_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnpinChatMessage {
  pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveChat {
  pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChat {
  pub chat_id: ChatId,
}

/// Administrators other than bots. Empty when only bots administer the
/// group or the administrators were never appointed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChatAdministrators {
  pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChatMembersCount {
  pub chat_id: ChatId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChatMember {
  pub chat_id: ChatId,
  pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetChatStickerSet {
  pub chat_id: ChatId,
  pub sticker_set_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteChatStickerSet {
  pub chat_id: ChatId,
}

/// Answers a callback query. The client shows `text` as a notification, or
/// as an alert when `show_alert` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCallbackQuery {
  pub callback_query_id: String,
  /// 0-200 characters.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_alert: Option<bool>,
  /// Game URL, or a `t.me` link opening the bot with a parameter.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  /// Seconds the client may cache the answer.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cache_time: Option<i64>,
}

impl AnswerCallbackQuery {
  pub fn new(callback_query_id: impl Into<String>) -> Self {
    Self {
      callback_query_id: callback_query_id.into(),
      text: None,
      show_alert: None,
      url: None,
      cache_time: None,
    }
  }
}

impl_method! {
  KickChatMember => "kickChatMember", bool;
  UnbanChatMember => "unbanChatMember", bool;
  RestrictChatMember => "restrictChatMember", bool;
  PromoteChatMember => "promoteChatMember", bool;
  ExportChatInviteLink => "exportChatInviteLink", String;
  SetChatPhoto => "setChatPhoto", bool, |req| upload_parts([&req.photo]);
  DeleteChatPhoto => "deleteChatPhoto", bool;
  SetChatTitle => "setChatTitle", bool;
  SetChatDescription => "setChatDescription", bool;
  PinChatMessage => "pinChatMessage", bool;
  UnpinChatMessage => "unpinChatMessage", bool;
  LeaveChat => "leaveChat", bool;
  GetChat => "getChat", Chat;
  GetChatAdministrators => "getChatAdministrators", Vec<ChatMember>;
  GetChatMembersCount => "getChatMembersCount", i64;
  GetChatMember => "getChatMember", ChatMember;
  SetChatStickerSet => "setChatStickerSet", bool;
  DeleteChatStickerSet => "deleteChatStickerSet", bool;
  AnswerCallbackQuery => "answerCallbackQuery", bool;
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn chat_description_is_tri_state() {
    let mut request = SetChatDescription {
      chat_id: ChatId::from("@group"),
      description: Field::Absent,
    };
    assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "chat_id": "@group" }));

    request.description = Field::Null;
    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({ "chat_id": "@group", "description": null })
    );

    request.description = Field::from("Rules: be nice".to_string());
    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({ "chat_id": "@group", "description": "Rules: be nice" })
    );

    let decoded: SetChatDescription =
      serde_json::from_value(json!({ "chat_id": 5, "description": null })).unwrap();
    assert!(decoded.description.is_null());
  }

  #[test]
  fn promote_uses_real_permission_names() {
    let mut request = PromoteChatMember::new(-100i64, 42);
    request.can_change_info = Some(true);
    request.can_edit_messages = Some(false);

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({
        "chat_id": -100,
        "user_id": 42,
        "can_change_info": true,
        "can_edit_messages": false
      })
    );
  }
}
