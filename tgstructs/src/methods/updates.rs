// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::upload_parts;
use crate::{
  types::InputFile,
  updates::{Update, UpdateType, WebhookInfo},
};
use serde::{Deserialize, Serialize};

/// Long polling for incoming updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetUpdates {
  /// One greater than the highest `update_id` already processed.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub offset: Option<i64>,
  /// 1-100, defaults to 100.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit: Option<i64>,
  /// Seconds to wait, 0 for short polling.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timeout: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allowed_updates: Option<Vec<UpdateType>>,
}

/// Sets the URL updates are pushed to. An empty `url` removes the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetWebhook {
  pub url: String,
  /// Public key certificate, for self-signed setups.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub certificate: Option<InputFile>,
  /// 1-100, defaults to 40.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_connections: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allowed_updates: Option<Vec<UpdateType>>,
}

impl SetWebhook {
  pub fn new(url: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      certificate: None,
      max_connections: None,
      allowed_updates: None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteWebhook {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetWebhookInfo {}

impl_method! {
  GetUpdates => "getUpdates", Vec<Update>;
  SetWebhook => "setWebhook", bool, |req| upload_parts(req.certificate.iter());
  DeleteWebhook => "deleteWebhook", bool;
  GetWebhookInfo => "getWebhookInfo", WebhookInfo;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::methods::Method;
  use serde_json::json;

  #[test]
  fn get_updates_omits_unset_fields() {
    let request = GetUpdates {
      offset: Some(43),
      allowed_updates: Some(vec![UpdateType::Message, UpdateType::CallbackQuery]),
      ..Default::default()
    };

    assert_eq!(GetUpdates::NAME, "getUpdates");
    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({ "offset": 43, "allowed_updates": ["message", "callback_query"] })
    );
    assert_eq!(serde_json::to_value(GetWebhookInfo {}).unwrap(), json!({}));
  }

  #[test]
  fn webhook_certificate_is_uploaded() {
    let mut request = SetWebhook::new("https://example.com/hook");
    assert!(request.uploads().is_empty());

    request.certificate = Some(InputFile::upload("cert.pem", b"PEM".to_vec()));
    assert_eq!(request.uploads(), vec![("cert.pem", &b"PEM"[..])]);
    assert_eq!(
      serde_json::to_value(&request).unwrap()["certificate"],
      json!("attach://cert.pem")
    );
  }
}
