// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{unix_time, Message, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

string_enum! {
  pub enum ChatType {
    Private => "private",
    Group => "group",
    Supergroup => "supergroup",
    Channel => "channel",
  }
}

/// A conversation: private chat, group, supergroup or channel.
///
/// The administrative fields (`photo` through `can_set_sticker_set`) are
/// only returned by `getChat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
  /// May exceed 32 bits but always fits in 52.
  pub id: i64,
  #[serde(rename = "type")]
  pub kind: ChatType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub all_members_are_administrators: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo: Option<ChatPhoto>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub invite_link: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pinned_message: Option<Box<Message>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sticker_set_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_set_sticker_set: Option<bool>,
}

impl Chat {
  /// A chat carrying nothing but its identity, as embedded in most messages.
  pub fn new(id: i64, kind: ChatType) -> Self {
    Self {
      id,
      kind,
      title: None,
      username: None,
      first_name: None,
      last_name: None,
      all_members_are_administrators: None,
      photo: None,
      description: None,
      invite_link: None,
      pinned_message: None,
      sticker_set_name: None,
      can_set_sticker_set: None,
    }
  }

  pub fn is_group_like(&self) -> bool {
    matches!(self.kind, ChatType::Group | ChatType::Supergroup | ChatType::Channel)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPhoto {
  /// 160x160, usable only for download.
  pub small_file_id: String,
  /// 640x640, usable only for download.
  pub big_file_id: String,
}

/// Target chat of a request: a numeric id or a `@username` of a
/// supergroup or channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
  Id(i64),
  Username(String),
}

impl From<i64> for ChatId {
  fn from(id: i64) -> Self {
    ChatId::Id(id)
  }
}

impl From<&str> for ChatId {
  fn from(username: &str) -> Self {
    ChatId::Username(username.to_string())
  }
}

impl From<String> for ChatId {
  fn from(username: String) -> Self {
    ChatId::Username(username)
  }
}

impl fmt::Display for ChatId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ChatId::Id(id) => write!(f, "{}", id),
      ChatId::Username(username) => f.write_str(username),
    }
  }
}

string_enum! {
  pub enum ChatMemberStatus {
    Creator => "creator",
    Administrator => "administrator",
    Member => "member",
    Restricted => "restricted",
    Left => "left",
    Kicked => "kicked",
  }
}

/// One member of a chat. Permission flags are only meaningful for the
/// statuses noted on each group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
  pub user: User,
  pub status: ChatMemberStatus,
  /// Restricted and kicked only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub until_date: Option<i64>,

  // Administrators only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_be_edited: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_change_info: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_post_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_edit_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_delete_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_invite_users: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_restrict_members: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_pin_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_promote_members: Option<bool>,

  // Restricted only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_send_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_send_media_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_send_other_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_add_web_page_previews: Option<bool>,
}

impl ChatMember {
  pub fn until_date_time(&self) -> Option<DateTime<Utc>> {
    self.until_date.and_then(unix_time)
  }

  pub fn is_admin(&self) -> bool {
    matches!(
      self.status,
      ChatMemberStatus::Creator | ChatMemberStatus::Administrator
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn chat_id_encodes_as_number_or_string() {
    assert_eq!(serde_json::to_value(ChatId::from(-1001234567890)).unwrap(), json!(-1001234567890_i64));
    assert_eq!(serde_json::to_value(ChatId::from("@channel")).unwrap(), json!("@channel"));

    let id: ChatId = serde_json::from_value(json!(42)).unwrap();
    assert_eq!(id, ChatId::Id(42));
    let name: ChatId = serde_json::from_value(json!("@group")).unwrap();
    assert_eq!(name.to_string(), "@group");
  }

  #[test]
  fn chat_type_keeps_unknown_literals() {
    let chat: Chat = serde_json::from_value(json!({ "id": 1, "type": "forum" })).unwrap();
    assert_eq!(chat.kind, ChatType::Unknown("forum".into()));
    assert!(!chat.kind.is_known());
    assert_eq!(serde_json::to_value(&chat).unwrap(), json!({ "id": 1, "type": "forum" }));
  }

  #[test]
  fn kicked_member_exposes_until_date() {
    let member: ChatMember = serde_json::from_value(json!({
      "user": { "id": 7, "is_bot": false, "first_name": "Ann" },
      "status": "kicked",
      "until_date": 1_600_000_000
    }))
    .unwrap();

    assert_eq!(member.status, ChatMemberStatus::Kicked);
    assert!(!member.is_admin());
    assert_eq!(
      member.until_date_time().map(|dt| dt.timestamp()),
      Some(1_600_000_000)
    );
    assert!(member.can_send_messages.is_none());
  }
}
