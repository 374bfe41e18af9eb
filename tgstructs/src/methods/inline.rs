// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::inline::InlineQueryResult;
use serde::{Deserialize, Serialize};

/// Answers an inline query with at most 50 results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerInlineQuery {
  pub inline_query_id: String,
  pub results: Vec<InlineQueryResult>,
  /// Seconds the server may cache the results, defaults to 300.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cache_time: Option<i64>,
  /// Cache for the querying user only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_personal: Option<bool>,
  /// Offset the client sends with the next query for more results, at
  /// most 64 bytes. Empty when there are no more.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub next_offset: Option<String>,
  /// Shows a button that switches to a private chat with the bot.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub switch_pm_text: Option<String>,
  /// `/start` parameter sent along with the switch.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub switch_pm_parameter: Option<String>,
}

impl AnswerInlineQuery {
  pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
    Self {
      inline_query_id: inline_query_id.into(),
      results,
      cache_time: None,
      is_personal: None,
      next_offset: None,
      switch_pm_text: None,
      switch_pm_parameter: None,
    }
  }
}

impl_method! {
  AnswerInlineQuery => "answerInlineQuery", bool;
}
