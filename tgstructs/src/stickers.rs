// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::PhotoSize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
  pub file_id: String,
  pub width: i64,
  pub height: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb: Option<PhotoSize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub emoji: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub set_name: Option<String>,
  /// Masks only.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mask_position: Option<MaskPosition>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file_size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerSet {
  pub name: String,
  pub title: String,
  pub contains_masks: bool,
  pub stickers: Vec<Sticker>,
}

string_enum! {
  /// Part of the face a mask is placed relative to.
  pub enum MaskPoint {
    Forehead => "forehead",
    Eyes => "eyes",
    Mouth => "mouth",
    Chin => "chin",
  }
}

/// Where a mask goes on faces by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
  pub point: MaskPoint,
  /// Shift along the X axis measured in face widths, from left to right.
  /// `-1.0` places the mask just left of the default position.
  pub x_shift: f64,
  /// Shift along the Y axis measured in face heights, from top to bottom.
  pub y_shift: f64,
  /// Scaling coefficient; `2.0` doubles the default size.
  pub scale: f64,
}
