// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Typed records of the Telegram Bot API: incoming updates and messages,
//! outgoing method requests, and their JSON wire form.
#[macro_use]
mod macros;

mod builders;
mod config;
mod decoder;
mod field;
pub mod games;
pub mod inline;
pub mod methods;
pub mod payments;
mod response;
pub mod stickers;
pub mod types;
mod updates;
pub mod validate;

pub use crate::{
  builders::{FileMessage, FileMessageBuilder, FileType, InlineKeyboardBuilder, MessageBuilder},
  decoder::{decode, decode_slice, decode_update, Classified, Decoder},
  field::Field,
  methods::{Method, MessageOrTrue},
  response::{ApiResponse, ResponseParameters},
  types::{ChatAction, Message, MessageType, ParseMode},
  updates::{Update, UpdateType, WebhookInfo},
  validate::Validate,
};
pub use error::{Error, Violation};
