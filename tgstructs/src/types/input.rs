// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::ParseMode;
use crate::config::ATTACH_PREFIX;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A file to send: one already on the servers, one the server should fetch
/// from a URL, or raw bytes uploaded with multipart/form-data.
///
/// In JSON an upload is referenced as `attach://<file_name>`; the bytes
/// themselves travel as the multipart part of that name, so they never
/// survive a JSON round trip.
#[derive(Clone, PartialEq, Eq)]
pub enum InputFile {
  FileId(String),
  Url(String),
  Upload { file_name: String, data: Vec<u8> },
}

impl InputFile {
  pub fn file_id(id: impl Into<String>) -> Self {
    InputFile::FileId(id.into())
  }

  pub fn url(url: impl Into<String>) -> Self {
    InputFile::Url(url.into())
  }

  pub fn upload(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
    InputFile::Upload {
      file_name: file_name.into(),
      data: data.into(),
    }
  }

  /// Multipart part name and content, for uploads only.
  pub fn upload_part(&self) -> Option<(&str, &[u8])> {
    match self {
      InputFile::Upload { file_name, data } => Some((file_name, data)),
      _ => None,
    }
  }

  /// The string that stands for this file in a JSON request.
  pub fn to_wire(&self) -> String {
    match self {
      InputFile::FileId(id) => id.clone(),
      InputFile::Url(url) => url.clone(),
      InputFile::Upload { file_name, .. } => format!("{}{}", ATTACH_PREFIX, file_name),
    }
  }

  pub fn from_wire(value: &str) -> Self {
    if let Some(file_name) = value.strip_prefix(ATTACH_PREFIX) {
      InputFile::upload(file_name, Vec::new())
    } else if value.starts_with("http://") || value.starts_with("https://") {
      InputFile::Url(value.to_string())
    } else {
      InputFile::FileId(value.to_string())
    }
  }
}

impl fmt::Debug for InputFile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InputFile::FileId(id) => f.debug_tuple("FileId").field(id).finish(),
      InputFile::Url(url) => f.debug_tuple("Url").field(url).finish(),
      InputFile::Upload { file_name, data } => f
        .debug_struct("Upload")
        .field("file_name", file_name)
        .field("len", &data.len())
        .finish(),
    }
  }
}

impl Serialize for InputFile {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_wire())
  }
}

impl<'de> Deserialize<'de> for InputFile {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(InputFile::from_wire(&value))
  }
}

/// Content of one item of a media group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
  Photo(InputMediaPhoto),
  Video(InputMediaVideo),
}

impl InputMedia {
  pub fn media(&self) -> &InputFile {
    match self {
      InputMedia::Photo(photo) => &photo.media,
      InputMedia::Video(video) => &video.media,
    }
  }

  pub fn caption(&self) -> Option<&str> {
    match self {
      InputMedia::Photo(photo) => photo.caption.as_deref(),
      InputMedia::Video(video) => video.caption.as_deref(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
  pub media: InputFile,
  /// 0-200 characters.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaVideo {
  pub media: InputFile,
  /// 0-200 characters.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub height: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub supports_streaming: Option<bool>,
}
