// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{MessageEntity, PhotoSize, User};
use serde::{Deserialize, Serialize};

/// A game. Short names are set up with BotFather and act as unique
/// identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
  pub title: String,
  pub description: String,
  pub photo: Vec<PhotoSize>,
  /// Brief description or high scores included in the game message, 0-4096
  /// characters. Can be edited by `setGameScore`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text_entities: Option<Vec<MessageEntity>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub animation: Option<Animation>,
}

/// Animation shown in the game message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
  pub file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb: Option<PhotoSize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
}

/// Placeholder, holds no information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// One row of a game's high score table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHighScore {
  pub position: i64,
  pub user: User,
  pub score: i64,
}
