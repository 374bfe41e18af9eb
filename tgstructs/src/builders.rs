// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  methods::{Method, SendAudio, SendDocument, SendMessage, SendPhoto, SendVideo, SendVoice},
  types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ParseMode, ReplyMarkup},
};
use error::Error;
use serde::Serialize;

/// Kind of file a [`FileMessageBuilder`] sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
  Document,
  Photo,
  Video,
  Audio,
  Voice,
}

#[derive(Debug, Default)]
pub struct MessageBuilder {
  pub(crate) chat_id: Option<ChatId>,
  pub(crate) text: Option<String>,
  pub(crate) parse_mode: Option<ParseMode>,
  pub(crate) disable_preview: Option<bool>,
  pub(crate) silent: Option<bool>,
  pub(crate) reply_to: Option<i64>,
  pub(crate) reply_markup: Option<ReplyMarkup>,
  pub(crate) buttons: Vec<Vec<(String, String)>>,
}

impl MessageBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: impl Into<ChatId>) -> Self {
    self.chat_id = Some(id.into());
    self
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn disable_preview(mut self) -> Self {
    self.disable_preview = Some(true);
    self
  }

  pub fn silent(mut self) -> Self {
    self.silent = Some(true);
    self
  }

  pub fn reply_to(mut self, message_id: i64) -> Self {
    self.reply_to = Some(message_id);
    self
  }

  /// Replaces any markup, including rows added with [`Self::button`].
  pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
    self.reply_markup = Some(markup.into());
    self.buttons.clear();
    self
  }

  /// Adds a row of URL buttons.
  pub fn button(mut self, buttons: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
    let row = buttons
      .into_iter()
      .map(|(text, url)| (text.into(), url.into()))
      .collect();
    self.buttons.push(row);
    self
  }

  pub fn build(self) -> Result<SendMessage, Error> {
    let chat_id = self.chat_id.ok_or(Error::MissingField("chat_id"))?;
    let text = self.text.ok_or(Error::MissingField("text"))?;

    let reply_markup = if !self.buttons.is_empty() {
      Some(ReplyMarkup::InlineKeyboard(url_keyboard(self.buttons)))
    } else {
      self.reply_markup
    };

    Ok(SendMessage {
      chat_id,
      text,
      parse_mode: self.parse_mode,
      disable_web_page_preview: self.disable_preview,
      disable_notification: self.silent,
      reply_to_message_id: self.reply_to,
      reply_markup,
    })
  }
}

fn url_keyboard(rows: Vec<Vec<(String, String)>>) -> InlineKeyboardMarkup {
  InlineKeyboardMarkup {
    inline_keyboard: rows
      .into_iter()
      .map(|row| {
        row
          .into_iter()
          .map(|(text, url)| InlineKeyboardButton::url(text, url))
          .collect()
      })
      .collect(),
  }
}

#[derive(Debug, Default)]
pub struct FileMessageBuilder {
  pub(crate) chat_id: Option<ChatId>,
  pub(crate) file: Option<InputFile>,
  pub(crate) caption: Option<String>,
  pub(crate) parse_mode: Option<ParseMode>,
  pub(crate) file_type: Option<FileType>,
  pub(crate) silent: Option<bool>,
  pub(crate) reply_to: Option<i64>,
  pub(crate) buttons: Vec<Vec<(String, String)>>,
}

impl FileMessageBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: impl Into<ChatId>) -> Self {
    self.chat_id = Some(id.into());
    self
  }

  pub fn file(mut self, file: InputFile) -> Self {
    self.file = Some(file);
    self
  }

  pub fn caption(mut self, text: impl Into<String>) -> Self {
    self.caption = Some(text.into());
    self
  }

  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn file_type(mut self, file_type: FileType) -> Self {
    self.file_type = Some(file_type);
    self
  }

  pub fn silent(mut self) -> Self {
    self.silent = Some(true);
    self
  }

  pub fn reply_to(mut self, message_id: i64) -> Self {
    self.reply_to = Some(message_id);
    self
  }

  pub fn buttons(mut self, buttons: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
    let row = buttons
      .into_iter()
      .map(|(text, url)| (text.into(), url.into()))
      .collect();
    self.buttons.push(row);
    self
  }

  pub fn build(self) -> Result<FileMessage, Error> {
    let chat_id = self.chat_id.ok_or(Error::MissingField("chat_id"))?;
    let file = self.file.ok_or(Error::MissingField("file"))?;
    let file_type = self.file_type.ok_or(Error::MissingField("file_type"))?;

    let reply_markup = if self.buttons.is_empty() {
      None
    } else {
      Some(ReplyMarkup::InlineKeyboard(url_keyboard(self.buttons)))
    };
    let caption = self.caption;
    let parse_mode = self.parse_mode;
    let disable_notification = self.silent;
    let reply_to_message_id = self.reply_to;

    let message = match file_type {
      FileType::Photo => FileMessage::Photo(SendPhoto {
        chat_id,
        photo: file,
        caption,
        parse_mode,
        disable_notification,
        reply_to_message_id,
        reply_markup,
      }),
      FileType::Document => FileMessage::Document(SendDocument {
        chat_id,
        document: file,
        caption,
        parse_mode,
        disable_notification,
        reply_to_message_id,
        reply_markup,
      }),
      FileType::Video => FileMessage::Video(SendVideo {
        chat_id,
        video: file,
        duration: None,
        width: None,
        height: None,
        caption,
        parse_mode,
        supports_streaming: None,
        disable_notification,
        reply_to_message_id,
        reply_markup,
      }),
      FileType::Audio => FileMessage::Audio(SendAudio {
        chat_id,
        audio: file,
        caption,
        parse_mode,
        duration: None,
        performer: None,
        title: None,
        disable_notification,
        reply_to_message_id,
        reply_markup,
      }),
      FileType::Voice => FileMessage::Voice(SendVoice {
        chat_id,
        voice: file,
        caption,
        parse_mode,
        duration: None,
        disable_notification,
        reply_to_message_id,
        reply_markup,
      }),
    };
    Ok(message)
  }
}

/// Request produced by [`FileMessageBuilder`]; serializes as the inner
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileMessage {
  Photo(SendPhoto),
  Document(SendDocument),
  Video(SendVideo),
  Audio(SendAudio),
  Voice(SendVoice),
}

impl FileMessage {
  /// API method the request is sent to.
  pub fn method_name(&self) -> &'static str {
    match self {
      FileMessage::Photo(_) => SendPhoto::NAME,
      FileMessage::Document(_) => SendDocument::NAME,
      FileMessage::Video(_) => SendVideo::NAME,
      FileMessage::Audio(_) => SendAudio::NAME,
      FileMessage::Voice(_) => SendVoice::NAME,
    }
  }

  pub fn uploads(&self) -> Vec<(&str, &[u8])> {
    match self {
      FileMessage::Photo(request) => request.uploads(),
      FileMessage::Document(request) => request.uploads(),
      FileMessage::Video(request) => request.uploads(),
      FileMessage::Audio(request) => request.uploads(),
      FileMessage::Voice(request) => request.uploads(),
    }
  }
}

/// Builds an inline keyboard row by row.
#[derive(Debug, Default)]
pub struct InlineKeyboardBuilder {
  rows: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts a new row; following buttons go there.
  pub fn row(mut self) -> Self {
    self.rows.push(Vec::new());
    self
  }

  pub fn url(self, text: impl Into<String>, url: impl Into<String>) -> Self {
    self.push(InlineKeyboardButton::url(text, url))
  }

  pub fn callback(self, text: impl Into<String>, data: impl Into<String>) -> Self {
    self.push(InlineKeyboardButton::callback(text, data))
  }

  pub fn push(mut self, button: InlineKeyboardButton) -> Self {
    match self.rows.last_mut() {
      Some(row) => row.push(button),
      None => self.rows.push(vec![button]),
    }
    self
  }

  pub fn build(self) -> Result<InlineKeyboardMarkup, Error> {
    let inline_keyboard: Vec<_> = self.rows.into_iter().filter(|row| !row.is_empty()).collect();
    if inline_keyboard.is_empty() {
      return Err(Error::MissingField("inline_keyboard"));
    }
    Ok(InlineKeyboardMarkup { inline_keyboard })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn message_builder_requires_chat_and_text() {
    let err = MessageBuilder::new().text("hi").build().unwrap_err();
    assert!(matches!(err, Error::MissingField("chat_id")));

    let err = MessageBuilder::new().chat_id(5i64).build().unwrap_err();
    assert!(matches!(err, Error::MissingField("text")));
  }

  #[test]
  fn message_builder_adds_url_rows() {
    let request = MessageBuilder::new()
      .chat_id("@news")
      .text("<b>Release</b>")
      .parse_mode(ParseMode::Html)
      .silent()
      .button(vec![("Notes", "https://example.com/notes")])
      .build()
      .unwrap();

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({
        "chat_id": "@news",
        "text": "<b>Release</b>",
        "parse_mode": "HTML",
        "disable_notification": true,
        "reply_markup": {
          "inline_keyboard": [[{ "text": "Notes", "url": "https://example.com/notes" }]]
        }
      })
    );
  }

  #[test]
  fn file_builder_picks_method_by_type() {
    let message = FileMessageBuilder::new()
      .chat_id(5i64)
      .file(InputFile::upload("song.mp3", b"ID3".to_vec()))
      .caption("Demo")
      .file_type(FileType::Audio)
      .build()
      .unwrap();

    assert_eq!(message.method_name(), "sendAudio");
    assert_eq!(message.uploads(), vec![("song.mp3", &b"ID3"[..])]);
    assert_eq!(
      serde_json::to_value(&message).unwrap(),
      json!({ "chat_id": 5, "audio": "attach://song.mp3", "caption": "Demo" })
    );

    let err = FileMessageBuilder::new()
      .chat_id(5i64)
      .file(InputFile::file_id("AgADBAAD"))
      .build()
      .unwrap_err();
    assert!(matches!(err, Error::MissingField("file_type")));
  }

  #[test]
  fn keyboard_builder_rows() {
    let markup = InlineKeyboardBuilder::new()
      .callback("Yes", "vote:yes")
      .callback("No", "vote:no")
      .row()
      .url("Results", "https://example.com/poll")
      .build()
      .unwrap();

    assert_eq!(markup.inline_keyboard.len(), 2);
    assert_eq!(markup.inline_keyboard[0].len(), 2);
    assert!(matches!(
      InlineKeyboardBuilder::new().row().build(),
      Err(Error::MissingField("inline_keyboard"))
    ));
  }
}
