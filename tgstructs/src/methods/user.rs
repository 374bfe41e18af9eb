// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{User, UserProfilePhotos};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMe {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserProfilePhotos {
  pub user_id: i64,
  /// Sequential number of the first photo to return.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub offset: Option<i64>,
  /// 1-100, defaults to 100.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit: Option<i64>,
}

impl GetUserProfilePhotos {
  pub fn new(user_id: i64) -> Self {
    Self {
      user_id,
      offset: None,
      limit: None,
    }
  }
}

impl_method! {
  GetMe => "getMe", User;
  GetUserProfilePhotos => "getUserProfilePhotos", UserProfilePhotos;
}
