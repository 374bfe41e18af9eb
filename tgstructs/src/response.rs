// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use serde::{Deserialize, Serialize};

/// Envelope every Bot API answer is wrapped in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
  pub ok: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub result: Option<T>,
  /// Human-readable explanation, set when `ok` is false.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_code: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parameters: Option<ResponseParameters>,
}

/// Hints on how a failed request can be retried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
  /// The group was upgraded to a supergroup with this id.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub migrate_to_chat_id: Option<i64>,
  /// Seconds to wait before repeating a request that hit flood control.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub retry_after: Option<i64>,
}

impl<T> ApiResponse<T> {
  pub fn into_result(self) -> Result<T, Error> {
    if self.ok {
      return self.result.ok_or_else(|| Error::ApiError {
        code: self.error_code,
        description: "response is ok but carries no result".to_string(),
      });
    }

    let parameters = self.parameters.unwrap_or_default();
    if let Some(retry_after) = parameters.retry_after {
      return Err(Error::RateLimitExceeded { retry_after });
    }
    if let Some(migrate_to_chat_id) = parameters.migrate_to_chat_id {
      return Err(Error::ChatMigrated { migrate_to_chat_id });
    }

    Err(Error::ApiError {
      code: self.error_code,
      description: self
        .description
        .unwrap_or_else(|| "no description".to_string()),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::User;
  use serde_json::json;

  #[test]
  fn ok_response_yields_result() {
    let response: ApiResponse<User> = serde_json::from_value(json!({
      "ok": true,
      "result": { "id": 1, "is_bot": true, "first_name": "Demo", "username": "demo_bot" }
    }))
    .unwrap();

    let user = response.into_result().unwrap();
    assert_eq!(user.username.as_deref(), Some("demo_bot"));
  }

  #[test]
  fn failures_map_to_errors() {
    let flood: ApiResponse<bool> = serde_json::from_value(json!({
      "ok": false,
      "error_code": 429,
      "description": "Too Many Requests: retry after 5",
      "parameters": { "retry_after": 5 }
    }))
    .unwrap();
    assert!(matches!(
      flood.into_result(),
      Err(Error::RateLimitExceeded { retry_after: 5 })
    ));

    let migrated: ApiResponse<bool> = serde_json::from_value(json!({
      "ok": false,
      "error_code": 400,
      "description": "Bad Request: group chat was upgraded to a supergroup chat",
      "parameters": { "migrate_to_chat_id": -1001234 }
    }))
    .unwrap();
    assert!(matches!(
      migrated.into_result(),
      Err(Error::ChatMigrated { migrate_to_chat_id: -1001234 })
    ));

    let forbidden: ApiResponse<bool> = serde_json::from_value(json!({
      "ok": false,
      "error_code": 403,
      "description": "Forbidden: bot was blocked by the user"
    }))
    .unwrap();
    assert_eq!(
      forbidden.into_result().unwrap_err().to_string(),
      "API error 403: Forbidden: bot was blocked by the user"
    );
  }

  #[test]
  fn ok_without_result_is_an_error() {
    let response: ApiResponse<bool> = serde_json::from_value(json!({ "ok": true })).unwrap();
    assert!(matches!(response.into_result(), Err(Error::ApiError { code: None, .. })));
  }
}
