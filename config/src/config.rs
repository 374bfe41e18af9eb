// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::instrument;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  pub decode: DecodeConfig,
  pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
  /// Reject enumeration values outside their documented literal set
  /// instead of keeping them as `Unknown`.
  pub strict_enums: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
  pub check_urls: bool,
  pub require_https_webhook: bool,
}

impl Default for ValidationConfig {
  fn default() -> Self {
    Self {
      check_urls: true,
      require_https_webhook: true,
    }
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)?;
    let config = Self::from_toml_str(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
    Ok(toml::from_str(content)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn empty_document_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.decode.strict_enums);
    assert!(config.validation.check_urls);
    assert!(config.validation.require_https_webhook);
  }

  #[test]
  fn partial_sections_keep_remaining_defaults() {
    let config = Config::from_toml_str(
      r#"
        [decode]
        strict_enums = true

        [validation]
        require_https_webhook = false
      "#,
    )
    .unwrap();

    assert!(config.decode.strict_enums);
    assert!(config.validation.check_urls);
    assert!(!config.validation.require_https_webhook);
  }

  #[test]
  fn wrong_value_type_is_rejected() {
    let err = Config::from_toml_str("[decode]\nstrict_enums = \"yes\"").unwrap_err();
    assert!(err.to_string().contains("boolean"));
  }

  #[test]
  fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[validation]\ncheck_urls = false").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(!config.validation.check_urls);
    assert!(!config.decode.strict_enums);
  }

  #[test]
  fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("absent.toml")).is_err());
  }
}
