// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::fmt;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Failed to decode payload: {0}")]
  DecodeError(#[from] serde_json::Error),
  #[error("Unknown value `{value}` for `{field}`")]
  UnknownVariant { field: String, value: String },
  #[error("Validation failed: {}", Violations(.0))]
  Validation(Vec<Violation>),
  #[error("Missing required field: {0}")]
  MissingField(&'static str),
  #[error("API error{}: {description}", .code.map(|c| format!(" {c}")).unwrap_or_default())]
  ApiError {
    code: Option<i64>,
    description: String,
  },
  #[error("Rate limit exceeded, retry after {retry_after}s")]
  RateLimitExceeded { retry_after: i64 },
  #[error("Chat was migrated to supergroup {migrate_to_chat_id}")]
  ChatMigrated { migrate_to_chat_id: i64 },
  #[error("Regex error: {0}")]
  RegexError(#[from] regex::Error),
}

/// A single broken constraint reported by the validation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
  pub field: String,
  pub reason: String,
}

impl Violation {
  pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      reason: reason.into(),
    }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.reason)
  }
}

struct Violations<'a>(&'a [Violation]);

impl fmt::Display for Violations<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, violation) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{}", violation)?;
    }
    Ok(())
  }
}

impl Error {
  /// Violations carried by a validation error, empty for every other kind.
  pub fn violations(&self) -> &[Violation] {
    match self {
      Error::Validation(violations) => violations,
      _ => &[],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validation_message_lists_every_violation() {
    let err = Error::Validation(vec![
      Violation::new("text", "must be 1-4096 characters"),
      Violation::new("reply_markup.inline_keyboard[0][1]", "pay button must be first"),
    ]);

    assert_eq!(
      err.to_string(),
      "Validation failed: text: must be 1-4096 characters; \
       reply_markup.inline_keyboard[0][1]: pay button must be first"
    );
    assert_eq!(err.violations().len(), 2);
  }

  #[test]
  fn api_error_includes_code_when_known() {
    let err = Error::ApiError {
      code: Some(400),
      description: "Bad Request: chat not found".into(),
    };
    assert_eq!(err.to_string(), "API error 400: Bad Request: chat not found");

    let err = Error::ApiError {
      code: None,
      description: "response carried no result".into(),
    };
    assert_eq!(err.to_string(), "API error: response carried no result");
  }

  #[test]
  fn decode_error_wraps_serde_json() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = source.into();
    assert!(matches!(err, Error::DecodeError(_)));
    assert!(err.violations().is_empty());
  }
}
