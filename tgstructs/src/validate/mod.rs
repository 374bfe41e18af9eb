// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Client-side checks of the documented request constraints.
//!
//! Nothing here runs implicitly: constructors, builders and the decoder
//! accept any value, and callers opt in with [`Validate::validate`].
mod rules;

use config::ValidationConfig;
use error::{Error, Violation};
use regex::Regex;
use std::ops::RangeInclusive;
use tracing::{debug, instrument};
use url::Url;

pub trait Validate {
  /// Records every broken constraint. Only fails on internal errors such
  /// as an invalid pattern.
  fn check(&self, violations: &mut Violations<'_>) -> Result<(), Error>;

  #[instrument(skip_all, fields(request = std::any::type_name::<Self>()))]
  fn validate(&self) -> Result<(), Error> {
    self.validate_with(&ValidationConfig::default())
  }

  #[instrument(
    skip_all,
    fields(request = std::any::type_name::<Self>(), check_urls = config.check_urls)
  )]
  fn validate_with(&self, config: &ValidationConfig) -> Result<(), Error> {
    let mut violations = Violations::new(config);
    self.check(&mut violations)?;
    violations.into_result()
  }
}

impl<T: Validate> Validate for Option<T> {
  fn check(&self, violations: &mut Violations<'_>) -> Result<(), Error> {
    match self {
      Some(value) => value.check(violations),
      None => Ok(()),
    }
  }
}

impl<T: Validate> Validate for Box<T> {
  fn check(&self, violations: &mut Violations<'_>) -> Result<(), Error> {
    (**self).check(violations)
  }
}

/// Collects violations under a dotted field path.
#[derive(Debug)]
pub struct Violations<'c> {
  config: &'c ValidationConfig,
  path: Vec<String>,
  found: Vec<Violation>,
}

impl<'c> Violations<'c> {
  pub fn new(config: &'c ValidationConfig) -> Self {
    Self {
      config,
      path: Vec::new(),
      found: Vec::new(),
    }
  }

  pub fn config(&self) -> &ValidationConfig {
    self.config
  }

  pub fn is_empty(&self) -> bool {
    self.found.is_empty()
  }

  pub fn into_result(self) -> Result<(), Error> {
    if self.found.is_empty() {
      Ok(())
    } else {
      debug!(count = self.found.len(), "Validation failed");
      Err(Error::Validation(self.found))
    }
  }

  pub fn push(&mut self, field: &str, reason: impl Into<String>) {
    let field = if self.path.is_empty() {
      field.to_string()
    } else {
      format!("{}.{}", self.path.join("."), field)
    };
    self.found.push(Violation::new(field, reason));
  }

  /// Runs `check` with `field` prepended to every reported path.
  pub fn nested<F>(&mut self, field: impl Into<String>, check: F) -> Result<(), Error>
  where
    F: FnOnce(&mut Self) -> Result<(), Error>,
  {
    self.path.push(field.into());
    let result = check(self);
    self.path.pop();
    result
  }

  /// Length in characters.
  pub fn chars(&mut self, field: &str, value: &str, range: RangeInclusive<usize>) {
    let len = value.chars().count();
    if !range.contains(&len) {
      self.push(
        field,
        format!(
          "must be {}-{} characters, got {}",
          range.start(),
          range.end(),
          len
        ),
      );
    }
  }

  pub fn max_chars(&mut self, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
      self.chars(field, value, 0..=max);
    }
  }

  /// Length in UTF-8 bytes.
  pub fn bytes(&mut self, field: &str, value: &str, range: RangeInclusive<usize>) {
    if !range.contains(&value.len()) {
      self.push(
        field,
        format!(
          "must be {}-{} bytes, got {}",
          range.start(),
          range.end(),
          value.len()
        ),
      );
    }
  }

  pub fn range(&mut self, field: &str, value: Option<i64>, range: RangeInclusive<i64>) {
    if let Some(value) = value {
      if !range.contains(&value) {
        self.push(
          field,
          format!("must be within {}-{}, got {}", range.start(), range.end(), value),
        );
      }
    }
  }

  pub fn count(&mut self, field: &str, len: usize, range: RangeInclusive<usize>) {
    if !range.contains(&len) {
      self.push(
        field,
        format!("must hold {}-{} items, got {}", range.start(), range.end(), len),
      );
    }
  }

  pub fn non_empty(&mut self, field: &str, value: &str) {
    if value.is_empty() {
      self.push(field, "must not be empty");
    }
  }

  pub fn matches(&mut self, field: &str, value: &str, pattern: &str) -> Result<(), Error> {
    let re = Regex::new(pattern)?;
    if !re.is_match(value) {
      self.push(field, format!("must match {}", pattern));
    }
    Ok(())
  }

  /// Checked only when `check_urls` is enabled.
  pub fn url(&mut self, field: &str, value: Option<&str>) {
    if !self.config.check_urls {
      return;
    }
    if let Some(value) = value {
      if let Err(e) = Url::parse(value) {
        self.push(field, format!("is not a valid URL: {}", e));
      }
    }
  }

  /// An empty URL is accepted and means "remove the webhook".
  pub fn webhook_url(&mut self, field: &str, value: &str) {
    if value.is_empty() {
      return;
    }
    self.url(field, Some(value));
    if self.config.require_https_webhook && !value.starts_with("https://") {
      self.push(field, "must use https");
    }
  }

  /// A message is addressed either by `chat_id` and `message_id` or by
  /// `inline_message_id`.
  pub fn edit_target(&mut self, has_chat_id: bool, message_id: Option<i64>, inline: Option<&str>) {
    let by_chat = has_chat_id || message_id.is_some();
    match (by_chat, inline.is_some()) {
      (true, true) => self.push(
        "inline_message_id",
        "cannot be combined with chat_id and message_id",
      ),
      (false, false) => self.push(
        "inline_message_id",
        "required when chat_id and message_id are not set",
      ),
      (true, false) if !(has_chat_id && message_id.is_some()) => {
        self.push("chat_id", "chat_id and message_id must be set together")
      }
      _ => {}
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nested_paths_are_dotted() {
    let config = ValidationConfig::default();
    let mut violations = Violations::new(&config);

    violations
      .nested("reply_markup", |v| {
        v.nested("inline_keyboard[0][1]", |v| {
          v.bytes("callback_data", "", 1..=64);
          Ok(())
        })
      })
      .unwrap();
    violations.non_empty("emojis", "");

    match violations.into_result() {
      Err(Error::Validation(found)) => {
        assert_eq!(found.len(), 2);
        assert_eq!(
          found[0].field,
          "reply_markup.inline_keyboard[0][1].callback_data"
        );
        assert_eq!(found[0].reason, "must be 1-64 bytes, got 0");
        assert_eq!(found[1].field, "emojis");
      }
      other => panic!("expected validation error, got {:?}", other),
    }
  }

  #[test]
  fn url_checks_follow_config() {
    let strict = ValidationConfig::default();
    let mut violations = Violations::new(&strict);
    violations.url("url", Some("not a url"));
    violations.webhook_url("webhook", "http://example.com/hook");
    violations.webhook_url("removed", "");
    assert_eq!(violations.found.len(), 2);

    let relaxed = ValidationConfig {
      check_urls: false,
      require_https_webhook: false,
    };
    let mut violations = Violations::new(&relaxed);
    violations.url("url", Some("not a url"));
    violations.webhook_url("webhook", "http://example.com/hook");
    assert!(violations.is_empty());
  }

  #[test]
  fn edit_target_is_exclusive() {
    let config = ValidationConfig::default();
    let cases = [
      (true, Some(1), None, true),
      (false, None, Some("AAA"), true),
      (true, Some(1), Some("AAA"), false),
      (false, None, None, false),
      (true, None, None, false),
    ];

    for (has_chat_id, message_id, inline, valid) in cases {
      let mut violations = Violations::new(&config);
      violations.edit_target(has_chat_id, message_id, inline);
      assert_eq!(violations.is_empty(), valid, "{:?}", (has_chat_id, message_id, inline));
    }
  }

  #[test]
  fn invalid_pattern_is_an_error() {
    let config = ValidationConfig::default();
    let mut violations = Violations::new(&config);
    assert!(matches!(
      violations.matches("name", "x", "("),
      Err(Error::RegexError(_))
    ));
  }
}
