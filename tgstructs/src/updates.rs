// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  inline::{ChosenInlineResult, InlineQuery},
  payments::{PreCheckoutQuery, ShippingQuery},
  types::{unix_time, CallbackQuery, Message},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
  /// Kinds of updates, as named in `allowed_updates`.
  pub enum UpdateType {
    Message => "message",
    EditedMessage => "edited_message",
    ChannelPost => "channel_post",
    EditedChannelPost => "edited_channel_post",
    InlineQuery => "inline_query",
    ChosenInlineResult => "chosen_inline_result",
    CallbackQuery => "callback_query",
    ShippingQuery => "shipping_query",
    PreCheckoutQuery => "pre_checkout_query",
  }
}

/// An incoming update. At most one of the optional fields is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
  /// Sequential; lets the bot skip repeated webhook deliveries and resume
  /// polling after a gap.
  pub update_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<Message>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub edited_message: Option<Message>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub channel_post: Option<Message>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub edited_channel_post: Option<Message>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_query: Option<InlineQuery>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chosen_inline_result: Option<ChosenInlineResult>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub callback_query: Option<CallbackQuery>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping_query: Option<ShippingQuery>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pre_checkout_query: Option<PreCheckoutQuery>,
}

impl Update {
  pub fn new(update_id: i64) -> Self {
    Self {
      update_id,
      message: None,
      edited_message: None,
      channel_post: None,
      edited_channel_post: None,
      inline_query: None,
      chosen_inline_result: None,
      callback_query: None,
      shipping_query: None,
      pre_checkout_query: None,
    }
  }

  /// Kind of the first populated payload, in field order.
  pub fn update_type(&self) -> Option<UpdateType> {
    if self.message.is_some() {
      Some(UpdateType::Message)
    } else if self.edited_message.is_some() {
      Some(UpdateType::EditedMessage)
    } else if self.channel_post.is_some() {
      Some(UpdateType::ChannelPost)
    } else if self.edited_channel_post.is_some() {
      Some(UpdateType::EditedChannelPost)
    } else if self.inline_query.is_some() {
      Some(UpdateType::InlineQuery)
    } else if self.chosen_inline_result.is_some() {
      Some(UpdateType::ChosenInlineResult)
    } else if self.callback_query.is_some() {
      Some(UpdateType::CallbackQuery)
    } else if self.shipping_query.is_some() {
      Some(UpdateType::ShippingQuery)
    } else if self.pre_checkout_query.is_some() {
      Some(UpdateType::PreCheckoutQuery)
    } else {
      None
    }
  }

  /// The message carried by any of the four message-bearing kinds.
  pub fn any_message(&self) -> Option<&Message> {
    self
      .message
      .as_ref()
      .or(self.edited_message.as_ref())
      .or(self.channel_post.as_ref())
      .or(self.edited_channel_post.as_ref())
  }
}

/// Current webhook status, as returned by `getWebhookInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
  /// Empty when no webhook is set.
  pub url: String,
  pub has_custom_certificate: bool,
  pub pending_update_count: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_error_date: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_error_message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_connections: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allowed_updates: Option<Vec<UpdateType>>,
}

impl WebhookInfo {
  pub fn is_set(&self) -> bool {
    !self.url.is_empty()
  }

  pub fn last_error_date_time(&self) -> Option<DateTime<Utc>> {
    self.last_error_date.and_then(unix_time)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn update_type_follows_populated_field() {
    let update: Update = serde_json::from_value(json!({
      "update_id": 7,
      "callback_query": {
        "id": "4382bfdwdsb323b2d9",
        "from": { "id": 1, "is_bot": false, "first_name": "Ann" },
        "chat_instance": "-84512",
        "data": "vote:yes"
      }
    }))
    .unwrap();

    assert_eq!(update.update_type(), Some(UpdateType::CallbackQuery));
    assert!(update.any_message().is_none());
    assert_eq!(Update::new(8).update_type(), None);
  }

  #[test]
  fn webhook_info_reports_last_error() {
    let info: WebhookInfo = serde_json::from_value(json!({
      "url": "https://example.com/hook",
      "has_custom_certificate": false,
      "pending_update_count": 3,
      "last_error_date": 1_500_000_000,
      "last_error_message": "Connection refused",
      "allowed_updates": ["message", "poll"]
    }))
    .unwrap();

    assert!(info.is_set());
    assert_eq!(
      info.last_error_date_time().map(|at| at.timestamp()),
      Some(1_500_000_000)
    );
    assert_eq!(
      info.allowed_updates,
      Some(vec![UpdateType::Message, UpdateType::Unknown("poll".into())])
    );
  }
}
