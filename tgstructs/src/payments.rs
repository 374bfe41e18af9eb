// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::User;
use serde::{Deserialize, Serialize};

/// A portion of the price for goods or services.
///
/// Amounts are integers in the smallest units of the currency (cents for
/// `USD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPrice {
  pub label: String,
  pub amount: i64,
}

impl LabeledPrice {
  pub fn new(label: impl Into<String>, amount: i64) -> Self {
    Self {
      label: label.into(),
      amount,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
  pub title: String,
  pub description: String,
  pub start_parameter: String,
  /// Three-letter ISO 4217 code.
  pub currency: String,
  pub total_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
  /// ISO 3166-1 alpha-2 code.
  pub country_code: String,
  pub state: String,
  pub city: String,
  pub street_line1: String,
  pub street_line2: String,
  pub post_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone_number: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
  pub id: String,
  pub title: String,
  pub prices: Vec<LabeledPrice>,
}

impl ShippingOption {
  pub fn total_amount(&self) -> i64 {
    self.prices.iter().map(|price| price.amount).sum()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulPayment {
  pub currency: String,
  pub total_amount: i64,
  pub invoice_payload: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping_option_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub order_info: Option<OrderInfo>,
  pub telegram_payment_charge_id: String,
  pub provider_payment_charge_id: String,
}

/// Sent for invoices with a flexible price once the user entered a
/// shipping address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuery {
  pub id: String,
  pub from: User,
  pub invoice_payload: String,
  pub shipping_address: ShippingAddress,
}

/// Final confirmation before the payment is processed. Must be answered
/// within 10 seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreCheckoutQuery {
  pub id: String,
  pub from: User,
  pub currency: String,
  pub total_amount: i64,
  pub invoice_payload: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping_option_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub order_info: Option<OrderInfo>,
}
