// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::PhotoSize;
use serde::{Deserialize, Serialize};

/// A Telegram user or bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id: i64,
  pub is_bot: bool,
  pub first_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  /// IETF language tag of the user's language.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language_code: Option<String>,
}

impl User {
  pub fn full_name(&self) -> String {
    match &self.last_name {
      Some(last_name) => format!("{} {}", self.first_name, last_name),
      None => self.first_name.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePhotos {
  pub total_count: i64,
  /// Up to four sizes of each profile picture.
  pub photos: Vec<Vec<PhotoSize>>,
}
