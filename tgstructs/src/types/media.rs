// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::config::FILE_API_BASE;
use serde::{Deserialize, Serialize};

/// One size of a photo, or a file / sticker thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
  pub file_id: String,
  pub width: i64,
  pub height: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
}

/// An audio file treated as music by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
  pub file_id: String,
  pub duration: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub performer: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
}

/// A general file, as opposed to photos, voice messages and audio files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  pub file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb: Option<PhotoSize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
  pub file_id: String,
  pub width: i64,
  pub height: i64,
  pub duration: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb: Option<PhotoSize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
  pub file_id: String,
  pub duration: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
}

/// A round video message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoNote {
  pub file_id: String,
  /// Width and height; the video is square.
  pub length: i64,
  pub duration: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb: Option<PhotoSize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub phone_number: String,
  pub first_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
  pub longitude: f64,
  pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
  pub location: Location,
  pub title: String,
  pub address: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub foursquare_id: Option<String>,
}

/// A file ready to be downloaded. The link stays valid for at least an hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
  pub file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_path: Option<String>,
}

impl File {
  /// Download link for this file, if the server returned a path.
  pub fn download_url(&self, token: &str) -> Option<String> {
    self
      .file_path
      .as_ref()
      .map(|path| format!("{}{}/{}", FILE_API_BASE, token, path))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn download_url_requires_path() {
    let mut file = File {
      file_id: "AgADBAAD".into(),
      file_size: Some(1024),
      file_path: None,
    };
    assert_eq!(file.download_url("123:abc"), None);

    file.file_path = Some("photos/file_1.jpg".into());
    assert_eq!(
      file.download_url("123:abc").as_deref(),
      Some("https://api.telegram.org/file/bot123:abc/photos/file_1.jpg")
    );
  }
}
