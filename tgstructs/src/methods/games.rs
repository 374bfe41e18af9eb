// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::MessageOrTrue;
use crate::{
  games::GameHighScore,
  types::{InlineKeyboardMarkup, Message},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendGame {
  pub chat_id: i64,
  /// Set up via BotFather.
  pub game_short_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  /// When set, the first button must launch the game.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Sets a user's score. Fails when the new score is not greater than the
/// current one, unless `force` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetGameScore {
  pub user_id: i64,
  /// Non-negative.
  pub score: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub force: Option<bool>,
  /// Keeps the game message untouched.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_edit_message: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
}

/// Scores of the user and several neighbours in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGameHighScores {
  pub user_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
}

impl_method! {
  SendGame => "sendGame", Message;
  SetGameScore => "setGameScore", MessageOrTrue;
  GetGameHighScores => "getGameHighScores", Vec<GameHighScore>;
}
