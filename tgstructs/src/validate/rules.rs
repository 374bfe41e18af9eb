// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{Validate, Violations};
use crate::{
  config::*,
  inline::{InlineQueryResult, InputMessageContent},
  methods::*,
  types::{
    InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup, ReplyKeyboardMarkup,
    ReplyMarkup,
  },
};
use error::Error;

impl Validate for ReplyMarkup {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    match self {
      ReplyMarkup::InlineKeyboard(markup) => markup.check(v),
      ReplyMarkup::ReplyKeyboard(markup) => markup.check(v),
      ReplyMarkup::ReplyKeyboardRemove(_) | ReplyMarkup::ForceReply(_) => Ok(()),
    }
  }
}

impl Validate for InlineKeyboardMarkup {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    for (r, row) in self.inline_keyboard.iter().enumerate() {
      for (c, button) in row.iter().enumerate() {
        let field = format!("inline_keyboard[{}][{}]", r, c);
        if button.must_be_first() && (r, c) != (0, 0) {
          v.push(
            &field,
            "pay and callback_game buttons must be the first button of the first row",
          );
        }
        v.nested(field, |v| button.check(v))?;
      }
    }
    Ok(())
  }
}

impl Validate for InlineKeyboardButton {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    match &self.kind {
      InlineKeyboardButtonKind::Url(url) => v.url("url", Some(url)),
      InlineKeyboardButtonKind::CallbackData(data) => {
        v.bytes("callback_data", data, CALLBACK_DATA_BYTES)
      }
      _ => {}
    }
    Ok(())
  }
}

impl Validate for ReplyKeyboardMarkup {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    for (r, row) in self.keyboard.iter().enumerate() {
      for (c, button) in row.iter().enumerate() {
        if button.request_contact == Some(true) && button.request_location == Some(true) {
          v.push(
            &format!("keyboard[{}][{}]", r, c),
            "request_contact and request_location are mutually exclusive",
          );
        }
      }
    }
    Ok(())
  }
}

impl Validate for InputMessageContent {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    match self {
      InputMessageContent::Text(content) => {
        v.chars("message_text", &content.message_text, MESSAGE_TEXT_LENGTH)
      }
      InputMessageContent::Location(content) => {
        v.range("live_period", content.live_period, LIVE_PERIOD_RANGE)
      }
      InputMessageContent::Venue(_) | InputMessageContent::Contact(_) => {}
    }
    Ok(())
  }
}

fn result_urls(result: &InlineQueryResult) -> Vec<(&'static str, Option<&str>)> {
  match result {
    InlineQueryResult::Article(r) => vec![
      ("url", r.url.as_deref()),
      ("thumb_url", r.thumb_url.as_deref()),
    ],
    InlineQueryResult::Photo(r) => vec![
      ("photo_url", Some(&r.photo_url)),
      ("thumb_url", Some(&r.thumb_url)),
    ],
    InlineQueryResult::Gif(r) => vec![
      ("gif_url", Some(&r.gif_url)),
      ("thumb_url", Some(&r.thumb_url)),
    ],
    InlineQueryResult::Mpeg4Gif(r) => vec![
      ("mpeg4_url", Some(&r.mpeg4_url)),
      ("thumb_url", Some(&r.thumb_url)),
    ],
    InlineQueryResult::Video(r) => vec![
      ("video_url", Some(&r.video_url)),
      ("thumb_url", Some(&r.thumb_url)),
    ],
    InlineQueryResult::Audio(r) => vec![("audio_url", Some(&r.audio_url))],
    InlineQueryResult::Voice(r) => vec![("voice_url", Some(&r.voice_url))],
    InlineQueryResult::Document(r) => vec![
      ("document_url", Some(&r.document_url)),
      ("thumb_url", r.thumb_url.as_deref()),
    ],
    InlineQueryResult::Location(r) => vec![("thumb_url", r.thumb_url.as_deref())],
    InlineQueryResult::Venue(r) => vec![("thumb_url", r.thumb_url.as_deref())],
    InlineQueryResult::Contact(r) => vec![("thumb_url", r.thumb_url.as_deref())],
    _ => Vec::new(),
  }
}

fn result_content(result: &InlineQueryResult) -> Option<&InputMessageContent> {
  match result {
    InlineQueryResult::Article(r) => Some(&r.input_message_content),
    InlineQueryResult::Photo(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Gif(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Mpeg4Gif(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Video(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Audio(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Voice(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Document(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Location(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Venue(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Contact(r) => r.input_message_content.as_ref(),
    InlineQueryResult::Game(_) => None,
    InlineQueryResult::CachedPhoto(r) => r.input_message_content.as_ref(),
    InlineQueryResult::CachedGif(r) => r.input_message_content.as_ref(),
    InlineQueryResult::CachedMpeg4Gif(r) => r.input_message_content.as_ref(),
    InlineQueryResult::CachedSticker(r) => r.input_message_content.as_ref(),
    InlineQueryResult::CachedDocument(r) => r.input_message_content.as_ref(),
    InlineQueryResult::CachedVideo(r) => r.input_message_content.as_ref(),
    InlineQueryResult::CachedVoice(r) => r.input_message_content.as_ref(),
    InlineQueryResult::CachedAudio(r) => r.input_message_content.as_ref(),
  }
}

impl Validate for InlineQueryResult {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.bytes("id", self.id(), INLINE_RESULT_ID_BYTES);
    v.max_chars("caption", self.caption(), MAX_CAPTION_LENGTH);
    for (field, url) in result_urls(self) {
      v.url(field, url);
    }
    if let InlineQueryResult::Location(r) = self {
      v.range("live_period", r.live_period, LIVE_PERIOD_RANGE);
    }
    if let Some(markup) = self.reply_markup() {
      v.nested("reply_markup", |v| markup.check(v))?;
    }
    match result_content(self) {
      Some(content) => v.nested("input_message_content", |v| content.check(v)),
      None => Ok(()),
    }
  }
}

impl Validate for GetUpdates {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.range("limit", self.limit, LIMIT_RANGE);
    Ok(())
  }
}

impl Validate for SetWebhook {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.webhook_url("url", &self.url);
    v.range("max_connections", self.max_connections, MAX_CONNECTIONS_RANGE);
    Ok(())
  }
}

impl Validate for GetUserProfilePhotos {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.range("limit", self.limit, LIMIT_RANGE);
    Ok(())
  }
}

impl Validate for SendMessage {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.chars("text", &self.text, MESSAGE_TEXT_LENGTH);
    v.nested("reply_markup", |v| self.reply_markup.check(v))
  }
}

/// Requests with a caption and reply markup.
macro_rules! captioned_rules {
  ($($request:ty),+ $(,)?) => {
    $(
      impl Validate for $request {
        fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
          v.max_chars("caption", self.caption.as_deref(), MAX_CAPTION_LENGTH);
          v.nested("reply_markup", |v| self.reply_markup.check(v))
        }
      }
    )+
  };
}

/// Requests whose only checked field is the reply markup.
macro_rules! markup_rules {
  ($($request:ty),+ $(,)?) => {
    $(
      impl Validate for $request {
        fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
          v.nested("reply_markup", |v| self.reply_markup.check(v))
        }
      }
    )+
  };
}

captioned_rules!(SendPhoto, SendAudio, SendDocument, SendVideo, SendVoice);
markup_rules!(SendVideoNote, SendVenue, SendContact, SendSticker, SendGame);

impl Validate for SendMediaGroup {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.count("media", self.media.len(), MEDIA_GROUP_SIZE);
    for (i, media) in self.media.iter().enumerate() {
      v.max_chars(
        &format!("media[{}].caption", i),
        media.caption(),
        MAX_CAPTION_LENGTH,
      );
    }
    Ok(())
  }
}

impl Validate for SendLocation {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.range("live_period", self.live_period, LIVE_PERIOD_RANGE);
    v.nested("reply_markup", |v| self.reply_markup.check(v))
  }
}

impl Validate for EditMessageLiveLocation {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.edit_target(
      self.chat_id.is_some(),
      self.message_id,
      self.inline_message_id.as_deref(),
    );
    v.nested("reply_markup", |v| self.reply_markup.check(v))
  }
}

impl Validate for StopMessageLiveLocation {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.edit_target(
      self.chat_id.is_some(),
      self.message_id,
      self.inline_message_id.as_deref(),
    );
    v.nested("reply_markup", |v| self.reply_markup.check(v))
  }
}

impl Validate for EditMessageText {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.edit_target(
      self.chat_id.is_some(),
      self.message_id,
      self.inline_message_id.as_deref(),
    );
    v.chars("text", &self.text, MESSAGE_TEXT_LENGTH);
    v.nested("reply_markup", |v| self.reply_markup.check(v))
  }
}

impl Validate for EditMessageCaption {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.edit_target(
      self.chat_id.is_some(),
      self.message_id,
      self.inline_message_id.as_deref(),
    );
    v.max_chars("caption", self.caption.as_deref(), MAX_CAPTION_LENGTH);
    v.nested("reply_markup", |v| self.reply_markup.check(v))
  }
}

impl Validate for EditMessageReplyMarkup {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.edit_target(
      self.chat_id.is_some(),
      self.message_id,
      self.inline_message_id.as_deref(),
    );
    v.nested("reply_markup", |v| self.reply_markup.check(v))
  }
}

impl Validate for SetChatTitle {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.chars("title", &self.title, CHAT_TITLE_LENGTH);
    Ok(())
  }
}

impl Validate for SetChatDescription {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.max_chars(
      "description",
      self.description.value().map(String::as_str),
      MAX_CHAT_DESCRIPTION_LENGTH,
    );
    Ok(())
  }
}

impl Validate for AnswerCallbackQuery {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.max_chars("text", self.text.as_deref(), MAX_CALLBACK_ANSWER_LENGTH);
    v.url("url", self.url.as_deref());
    Ok(())
  }
}

impl Validate for CreateNewStickerSet {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.matches("name", &self.name, STICKER_SET_NAME_PATTERN)?;
    v.chars("title", &self.title, STICKER_SET_TITLE_LENGTH);
    v.non_empty("emojis", &self.emojis);
    Ok(())
  }
}

impl Validate for AddStickerToSet {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.matches("name", &self.name, STICKER_SET_NAME_PATTERN)?;
    v.non_empty("emojis", &self.emojis);
    Ok(())
  }
}

impl Validate for AnswerInlineQuery {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.count("results", self.results.len(), 0..=MAX_INLINE_RESULTS);
    for (i, result) in self.results.iter().enumerate() {
      v.nested(format!("results[{}]", i), |v| result.check(v))?;
    }
    if let Some(next_offset) = &self.next_offset {
      v.bytes("next_offset", next_offset, 0..=64);
    }
    if let Some(parameter) = &self.switch_pm_parameter {
      v.matches("switch_pm_parameter", parameter, SWITCH_PM_PARAMETER_PATTERN)?;
    }
    Ok(())
  }
}

impl Validate for SendInvoice {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.chars("title", &self.title, INVOICE_TITLE_LENGTH);
    v.chars("description", &self.description, INVOICE_DESCRIPTION_LENGTH);
    v.bytes("payload", &self.payload, INVOICE_PAYLOAD_BYTES);
    v.matches("currency", &self.currency, CURRENCY_PATTERN)?;
    if self.prices.is_empty() {
      v.push("prices", "must contain at least one price");
    }
    v.url("photo_url", self.photo_url.as_deref());
    v.nested("reply_markup", |v| self.reply_markup.check(v))
  }
}

impl Validate for AnswerShippingQuery {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    if self.ok {
      if self.shipping_options.as_ref().map_or(true, Vec::is_empty) {
        v.push("shipping_options", "required when ok is true");
      }
    } else if self.error_message.as_deref().map_or(true, str::is_empty) {
      v.push("error_message", "required when ok is false");
    }
    Ok(())
  }
}

impl Validate for AnswerPreCheckoutQuery {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    if !self.ok && self.error_message.as_deref().map_or(true, str::is_empty) {
      v.push("error_message", "required when ok is false");
    }
    Ok(())
  }
}

impl Validate for SetGameScore {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.edit_target(
      self.chat_id.is_some(),
      self.message_id,
      self.inline_message_id.as_deref(),
    );
    v.range("score", Some(self.score), 0..=i64::MAX);
    Ok(())
  }
}

impl Validate for GetGameHighScores {
  fn check(&self, v: &mut Violations<'_>) -> Result<(), Error> {
    v.edit_target(
      self.chat_id.is_some(),
      self.message_id,
      self.inline_message_id.as_deref(),
    );
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    inline::{InlineQueryResultArticle, InputTextMessageContent},
    payments::LabeledPrice,
    types::{InputFile, InputMedia, InputMediaPhoto, KeyboardButton},
  };
  use config::ValidationConfig;
  use error::Violation;

  fn violations<T: Validate>(value: &T) -> Vec<Violation> {
    match value.validate() {
      Ok(()) => Vec::new(),
      Err(Error::Validation(found)) => found,
      Err(other) => panic!("unexpected error: {}", other),
    }
  }

  fn fields<T: Validate>(value: &T) -> Vec<String> {
    violations(value).into_iter().map(|v| v.field).collect()
  }

  #[test]
  fn message_text_length() {
    assert!(SendMessage::new(1i64, "hi").validate().is_ok());
    assert_eq!(fields(&SendMessage::new(1i64, "")), vec!["text"]);
    assert_eq!(fields(&SendMessage::new(1i64, "a".repeat(4097))), vec!["text"]);
    assert!(SendMessage::new(1i64, "ж".repeat(4096)).validate().is_ok());
  }

  #[test]
  fn pay_button_must_come_first() {
    let mut request = SendMessage::new(1i64, "Pay up");
    request.reply_markup = Some(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup {
      inline_keyboard: vec![vec![
        InlineKeyboardButton::pay("Pay"),
        InlineKeyboardButton::callback("Later", ""),
      ]],
    }));
    assert_eq!(
      fields(&request),
      vec!["reply_markup.inline_keyboard[0][1].callback_data"]
    );

    request.reply_markup = Some(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup {
      inline_keyboard: vec![
        vec![InlineKeyboardButton::url("Site", "https://example.com")],
        vec![InlineKeyboardButton::game("Play")],
      ],
    }));
    assert_eq!(fields(&request), vec!["reply_markup.inline_keyboard[1][0]"]);
  }

  #[test]
  fn reply_keyboard_requests_one_thing() {
    let mut button = KeyboardButton::text("Share");
    button.request_contact = Some(true);
    button.request_location = Some(true);

    let mut request = SendMessage::new(1i64, "Where are you?");
    request.reply_markup = Some(ReplyMarkup::ReplyKeyboard(ReplyKeyboardMarkup {
      keyboard: vec![vec![button]],
      resize_keyboard: None,
      one_time_keyboard: None,
      selective: None,
    }));
    assert_eq!(fields(&request), vec!["reply_markup.keyboard[0][0]"]);
  }

  #[test]
  fn media_group_size() {
    let photo = InputMedia::Photo(InputMediaPhoto {
      media: InputFile::file_id("AgADBAAD"),
      caption: None,
      parse_mode: None,
    });

    assert_eq!(
      fields(&SendMediaGroup::new(1i64, vec![photo.clone()])),
      vec!["media"]
    );
    assert!(SendMediaGroup::new(1i64, vec![photo.clone(); 10]).validate().is_ok());
    assert_eq!(
      fields(&SendMediaGroup::new(1i64, vec![photo; 11])),
      vec!["media"]
    );
  }

  #[test]
  fn webhook_requires_https_unless_relaxed() {
    let request = SetWebhook::new("http://example.com/hook");
    assert_eq!(fields(&request), vec!["url"]);

    let relaxed = ValidationConfig {
      check_urls: true,
      require_https_webhook: false,
    };
    assert!(request.validate_with(&relaxed).is_ok());
    assert!(SetWebhook::new("").validate().is_ok());
  }

  #[test]
  fn invoice_rules() {
    let invoice = SendInvoice {
      chat_id: 1,
      title: "A title that is definitely longer than thirty-two chars".into(),
      description: "Coffee".into(),
      payload: "order-1".into(),
      provider_token: "token".into(),
      start_parameter: "coffee".into(),
      currency: "usd".into(),
      prices: Vec::new(),
      provider_data: None,
      photo_url: None,
      photo_size: None,
      photo_width: None,
      photo_height: None,
      need_name: None,
      need_phone_number: None,
      need_email: None,
      need_shipping_address: None,
      send_phone_number_to_provider: None,
      send_email_to_provider: None,
      is_flexible: None,
      disable_notification: None,
      reply_to_message_id: None,
      reply_markup: None,
    };
    assert_eq!(fields(&invoice), vec!["title", "currency", "prices"]);

    let valid = SendInvoice {
      title: "Coffee".into(),
      currency: "USD".into(),
      prices: vec![LabeledPrice::new("Cup", 250)],
      ..invoice
    };
    assert!(valid.validate().is_ok());
  }

  #[test]
  fn shipping_and_checkout_answers() {
    let missing_options = AnswerShippingQuery {
      shipping_query_id: "sq".into(),
      ok: true,
      shipping_options: None,
      error_message: None,
    };
    assert_eq!(fields(&missing_options), vec!["shipping_options"]);

    let missing_message = AnswerPreCheckoutQuery {
      pre_checkout_query_id: "pq".into(),
      ok: false,
      error_message: None,
    };
    assert_eq!(fields(&missing_message), vec!["error_message"]);
    assert!(AnswerPreCheckoutQuery::accept("pq").validate().is_ok());
    assert!(AnswerShippingQuery::reject("sq", "No delivery there").validate().is_ok());
  }

  #[test]
  fn edit_methods_need_a_target() {
    let request = EditMessageText {
      text: "updated".into(),
      ..Default::default()
    };
    assert_eq!(fields(&request), vec!["inline_message_id"]);

    let request = EditMessageText {
      chat_id: Some(1i64.into()),
      message_id: Some(2),
      text: "updated".into(),
      ..Default::default()
    };
    assert!(request.validate().is_ok());
  }

  #[test]
  fn sticker_set_rules() {
    let request = CreateNewStickerSet {
      user_id: 1,
      name: "1cats".into(),
      title: String::new(),
      png_sticker: InputFile::file_id("AAQCAAD"),
      emojis: String::new(),
      contains_masks: None,
      mask_position: None,
    };
    assert_eq!(fields(&request), vec!["name", "title", "emojis"]);
  }

  #[test]
  fn inline_answer_rules() {
    let article = |id: &str| {
      InlineQueryResult::Article(InlineQueryResultArticle {
        id: id.into(),
        title: "Result".into(),
        input_message_content: InputMessageContent::Text(InputTextMessageContent {
          message_text: String::new(),
          parse_mode: None,
          disable_web_page_preview: None,
        }),
        reply_markup: None,
        url: Some("not a url".into()),
        hide_url: None,
        description: None,
        thumb_url: None,
        thumb_width: None,
        thumb_height: None,
      })
    };

    let mut answer = AnswerInlineQuery::new("q1", vec![article("")]);
    answer.switch_pm_parameter = Some("bad parameter!".into());
    assert_eq!(
      fields(&answer),
      vec![
        "results[0].id",
        "results[0].url",
        "results[0].input_message_content.message_text",
        "switch_pm_parameter",
      ]
    );

    let answer = AnswerInlineQuery::new("q1", (0..51).map(|i| article(&i.to_string())).collect());
    let found = fields(&answer);
    assert_eq!(found[0], "results");
  }
}
