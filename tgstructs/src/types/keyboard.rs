// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{Message, User};
use crate::games::CallbackGame;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Markup attached to an outgoing message.
///
/// Decoding picks the variant by its distinguishing key: `inline_keyboard`,
/// `keyboard`, `remove_keyboard` or `force_reply`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
  InlineKeyboard(InlineKeyboardMarkup),
  ReplyKeyboard(ReplyKeyboardMarkup),
  ReplyKeyboardRemove(ReplyKeyboardRemove),
  ForceReply(ForceReply),
}

impl<'de> Deserialize<'de> for ReplyMarkup {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let object = value
      .as_object()
      .ok_or_else(|| D::Error::custom("reply markup must be an object"))?;

    let markup = if object.contains_key("inline_keyboard") {
      serde_json::from_value(value).map(ReplyMarkup::InlineKeyboard)
    } else if object.contains_key("keyboard") {
      serde_json::from_value(value).map(ReplyMarkup::ReplyKeyboard)
    } else if object.contains_key("remove_keyboard") {
      serde_json::from_value(value).map(ReplyMarkup::ReplyKeyboardRemove)
    } else if object.contains_key("force_reply") {
      serde_json::from_value(value).map(ReplyMarkup::ForceReply)
    } else {
      return Err(D::Error::custom(
        "reply markup has none of inline_keyboard, keyboard, remove_keyboard, force_reply",
      ));
    };

    markup.map_err(D::Error::custom)
  }
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
  fn from(markup: InlineKeyboardMarkup) -> Self {
    ReplyMarkup::InlineKeyboard(markup)
  }
}

/// A single-button inline keyboard.
impl From<InlineKeyboardButton> for ReplyMarkup {
  fn from(button: InlineKeyboardButton) -> Self {
    ReplyMarkup::InlineKeyboard(button.into())
  }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
  fn from(markup: ReplyKeyboardMarkup) -> Self {
    ReplyMarkup::ReplyKeyboard(markup)
  }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
  fn from(markup: ReplyKeyboardRemove) -> Self {
    ReplyMarkup::ReplyKeyboardRemove(markup)
  }
}

impl From<ForceReply> for ReplyMarkup {
  fn from(markup: ForceReply) -> Self {
    ReplyMarkup::ForceReply(markup)
  }
}

/// A custom keyboard with reply options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
  pub keyboard: Vec<Vec<KeyboardButton>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub resize_keyboard: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub one_time_keyboard: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub selective: Option<bool>,
}

/// One button of a reply keyboard. The request flags are mutually
/// exclusive and only work in private chats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_contact: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_location: Option<bool>,
}

impl KeyboardButton {
  pub fn text(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      request_contact: None,
      request_location: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
  /// Always `true` on the wire.
  pub remove_keyboard: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
  fn default() -> Self {
    Self {
      remove_keyboard: true,
      selective: None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
  pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl From<InlineKeyboardButton> for InlineKeyboardMarkup {
  fn from(button: InlineKeyboardButton) -> Self {
    Self {
      inline_keyboard: vec![vec![button]],
    }
  }
}

/// One button of an inline keyboard: a label plus exactly one action.
///
/// Decoding fails when the object carries more than one action key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
  pub text: String,
  #[serde(flatten)]
  pub kind: InlineKeyboardButtonKind,
}

const BUTTON_ACTIONS: [&str; 6] = [
  "url",
  "callback_data",
  "switch_inline_query",
  "switch_inline_query_current_chat",
  "callback_game",
  "pay",
];

impl<'de> Deserialize<'de> for InlineKeyboardButton {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    struct Flat {
      text: String,
      #[serde(flatten)]
      kind: InlineKeyboardButtonKind,
    }

    let value = Value::deserialize(deserializer)?;
    let object = value
      .as_object()
      .ok_or_else(|| D::Error::custom("inline keyboard button must be an object"))?;

    let actions: Vec<&str> = BUTTON_ACTIONS
      .into_iter()
      .filter(|key| object.contains_key(*key))
      .collect();
    if actions.len() > 1 {
      return Err(D::Error::custom(format!(
        "inline keyboard button has more than one action: {}",
        actions.join(", ")
      )));
    }

    let Flat { text, kind } = serde_json::from_value(value).map_err(D::Error::custom)?;
    Ok(Self { text, kind })
  }
}

impl InlineKeyboardButton {
  pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      kind: InlineKeyboardButtonKind::Url(url.into()),
    }
  }

  pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      kind: InlineKeyboardButtonKind::CallbackData(data.into()),
    }
  }

  /// Must be the first button of the first row.
  pub fn pay(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      kind: InlineKeyboardButtonKind::Pay(true),
    }
  }

  /// Must be the first button of the first row.
  pub fn game(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      kind: InlineKeyboardButtonKind::CallbackGame(CallbackGame {}),
    }
  }

  /// `pay` and `callback_game` buttons are only allowed in the first slot.
  pub fn must_be_first(&self) -> bool {
    matches!(
      self.kind,
      InlineKeyboardButtonKind::Pay(_) | InlineKeyboardButtonKind::CallbackGame(_)
    )
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineKeyboardButtonKind {
  Url(String),
  /// 1-64 bytes sent back in a callback query.
  CallbackData(String),
  /// Prompts the user to pick a chat and inserts the bot's username and
  /// this query there. May be empty.
  SwitchInlineQuery(String),
  /// Same as `SwitchInlineQuery` but in the current chat.
  SwitchInlineQueryCurrentChat(String),
  CallbackGame(CallbackGame),
  Pay(bool),
}

/// An incoming callback query from an inline keyboard button.
///
/// `message` is set when the button was attached to a message sent by the
/// bot, `inline_message_id` when it was sent via the bot in inline mode.
/// Exactly one of `data` and `game_short_name` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
  pub id: String,
  pub from: User,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<Message>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  pub chat_instance: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub game_short_name: Option<String>,
}

/// Shows a reply interface to the user, as if they tapped "Reply" on the
/// bot's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
  /// Always `true` on the wire.
  pub force_reply: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub selective: Option<bool>,
}

impl Default for ForceReply {
  fn default() -> Self {
    Self {
      force_reply: true,
      selective: None,
    }
  }
}
