// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::upload_parts;
use crate::{
  stickers::{MaskPosition, StickerSet},
  types::{ChatId, File, InputFile, Message, ReplyMarkup},
};
use serde::{Deserialize, Serialize};

/// Sends a `.webp` sticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendSticker {
  pub chat_id: ChatId,
  pub sticker: InputFile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to_message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStickerSet {
  pub name: String,
}

/// Uploads a PNG for later use in `createNewStickerSet` and
/// `addStickerToSet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStickerFile {
  /// Owner of the sticker set.
  pub user_id: i64,
  /// At most 512 kilobytes, 512px on the longer side.
  pub png_sticker: InputFile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNewStickerSet {
  pub user_id: i64,
  /// Used in `t.me/addstickers/` links. Begins with a letter, may only
  /// contain letters, digits and underscores, and must end in
  /// `_by_<bot username>`. 1-64 characters.
  pub name: String,
  /// 1-64 characters.
  pub title: String,
  pub png_sticker: InputFile,
  /// One or more emoji matching the sticker.
  pub emojis: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub contains_masks: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mask_position: Option<MaskPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddStickerToSet {
  pub user_id: i64,
  pub name: String,
  pub png_sticker: InputFile,
  pub emojis: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mask_position: Option<MaskPosition>,
}

/// Moves a sticker of a set created by the bot. Positions are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStickerPositionInSet {
  /// File identifier of the sticker.
  pub sticker: String,
  pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteStickerFromSet {
  pub sticker: String,
}

impl_method! {
  SendSticker => "sendSticker", Message, |req| upload_parts([&req.sticker]);
  GetStickerSet => "getStickerSet", StickerSet;
  UploadStickerFile => "uploadStickerFile", File, |req| upload_parts([&req.png_sticker]);
  CreateNewStickerSet => "createNewStickerSet", bool, |req| upload_parts([&req.png_sticker]);
  AddStickerToSet => "addStickerToSet", bool, |req| upload_parts([&req.png_sticker]);
  SetStickerPositionInSet => "setStickerPositionInSet", bool;
  DeleteStickerFromSet => "deleteStickerFromSet", bool;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::stickers::MaskPoint;
  use serde_json::json;

  #[test]
  fn add_sticker_carries_named_mask_position() {
    let request = AddStickerToSet {
      user_id: 1,
      name: "cats_by_demo_bot".into(),
      png_sticker: InputFile::file_id("AAQCAAD"),
      emojis: "🐱".into(),
      mask_position: Some(MaskPosition {
        point: MaskPoint::Eyes,
        x_shift: 0.0,
        y_shift: -0.5,
        scale: 1.5,
      }),
    };

    let encoded = serde_json::to_value(&request).unwrap();
    assert_eq!(
      encoded["mask_position"],
      json!({ "point": "eyes", "x_shift": 0.0, "y_shift": -0.5, "scale": 1.5 })
    );
    assert_eq!(serde_json::from_value::<AddStickerToSet>(encoded).unwrap(), request);
  }
}
