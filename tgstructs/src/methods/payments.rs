// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  payments::{LabeledPrice, ShippingOption},
  types::{InlineKeyboardMarkup, Message},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendInvoice {
  /// Private chats only.
  pub chat_id: i64,
  /// 1-32 characters.
  pub title: String,
  /// 1-255 characters.
  pub description: String,
  /// 1-128 bytes, never shown to the user.
  pub payload: String,
  pub provider_token: String,
  /// Deep-linking parameter for the `/start` command.
  pub start_parameter: String,
  /// Three-letter ISO 4217 code.
  pub currency: String,
  pub prices: Vec<LabeledPrice>,
  /// JSON data for the payment provider.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub provider_data: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo_size: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo_height: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub need_name: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub need_phone_number: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub need_email: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub need_shipping_address: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub send_phone_number_to_provider: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub send_email_to_provider: Option<bool>,
  /// Final price depends on the shipping method.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_flexible: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  /// When set, the first button must be a pay button.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Reply to a shipping query. `shipping_options` is required when `ok`,
/// `error_message` when not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerShippingQuery {
  pub shipping_query_id: String,
  pub ok: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping_options: Option<Vec<ShippingOption>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_message: Option<String>,
}

impl AnswerShippingQuery {
  pub fn accept(shipping_query_id: impl Into<String>, options: Vec<ShippingOption>) -> Self {
    Self {
      shipping_query_id: shipping_query_id.into(),
      ok: true,
      shipping_options: Some(options),
      error_message: None,
    }
  }

  pub fn reject(shipping_query_id: impl Into<String>, error_message: impl Into<String>) -> Self {
    Self {
      shipping_query_id: shipping_query_id.into(),
      ok: false,
      shipping_options: None,
      error_message: Some(error_message.into()),
    }
  }
}

/// Must be sent within 10 seconds of receiving the pre-checkout query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPreCheckoutQuery {
  pub pre_checkout_query_id: String,
  pub ok: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_message: Option<String>,
}

impl AnswerPreCheckoutQuery {
  pub fn accept(pre_checkout_query_id: impl Into<String>) -> Self {
    Self {
      pre_checkout_query_id: pre_checkout_query_id.into(),
      ok: true,
      error_message: None,
    }
  }

  pub fn reject(pre_checkout_query_id: impl Into<String>, error_message: impl Into<String>) -> Self {
    Self {
      pre_checkout_query_id: pre_checkout_query_id.into(),
      ok: false,
      error_message: Some(error_message.into()),
    }
  }
}

impl_method! {
  SendInvoice => "sendInvoice", Message;
  AnswerShippingQuery => "answerShippingQuery", bool;
  AnswerPreCheckoutQuery => "answerPreCheckoutQuery", bool;
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn shipping_answers_carry_the_matching_field() {
    let accepted = AnswerShippingQuery::accept(
      "sq1",
      vec![ShippingOption {
        id: "post".into(),
        title: "Post".into(),
        prices: vec![LabeledPrice::new("Delivery", 500)],
      }],
    );
    assert_eq!(
      serde_json::to_value(&accepted).unwrap(),
      json!({
        "shipping_query_id": "sq1",
        "ok": true,
        "shipping_options": [{
          "id": "post",
          "title": "Post",
          "prices": [{ "label": "Delivery", "amount": 500 }]
        }]
      })
    );

    let rejected = AnswerPreCheckoutQuery::reject("pq1", "Out of stock");
    assert_eq!(
      serde_json::to_value(&rejected).unwrap(),
      json!({ "pre_checkout_query_id": "pq1", "ok": false, "error_message": "Out of stock" })
    );
  }

  #[test]
  fn invoice_keeps_provider_sharing_flags() {
    let wire = json!({
      "chat_id": 5,
      "title": "T",
      "description": "D",
      "payload": "p",
      "provider_token": "tok",
      "start_parameter": "s",
      "currency": "EUR",
      "prices": [{ "label": "Item", "amount": 100 }],
      "need_phone_number": true,
      "send_phone_number_to_provider": true,
      "send_email_to_provider": true
    });

    let invoice: SendInvoice = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(invoice.send_phone_number_to_provider, Some(true));
    assert_eq!(invoice.send_email_to_provider, Some(true));
    assert_eq!(serde_json::to_value(&invoice).unwrap(), wire);
  }
}
