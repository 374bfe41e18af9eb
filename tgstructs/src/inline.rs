// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{InlineKeyboardMarkup, Location, ParseMode, User};
use serde::{
  de::Error as _, ser::Error as _, Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::{Map, Value};

/// A query typed by a user after the bot's username, in any chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
  pub id: String,
  pub from: User,
  /// Only for bots that request user location.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<Location>,
  /// Up to 512 characters.
  pub query: String,
  /// Controlled by the bot.
  pub offset: String,
}

/// A result of an inline query that was chosen by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
  pub result_id: String,
  pub from: User,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<Location>,
  /// Only set when an inline keyboard is attached to the message.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  pub query: String,
}

/// Content of the message sent as the result of an inline query.
///
/// Decoding sniffs the shape: `message_text` means text, `phone_number`
/// contact, `address` venue, and a bare `latitude` location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputMessageContent {
  Text(InputTextMessageContent),
  Location(InputLocationMessageContent),
  Venue(InputVenueMessageContent),
  Contact(InputContactMessageContent),
}

impl<'de> Deserialize<'de> for InputMessageContent {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let object = value
      .as_object()
      .ok_or_else(|| D::Error::custom("input message content must be an object"))?;

    let content = if object.contains_key("message_text") {
      serde_json::from_value(value).map(InputMessageContent::Text)
    } else if object.contains_key("phone_number") {
      serde_json::from_value(value).map(InputMessageContent::Contact)
    } else if object.contains_key("address") {
      serde_json::from_value(value).map(InputMessageContent::Venue)
    } else if object.contains_key("latitude") {
      serde_json::from_value(value).map(InputMessageContent::Location)
    } else {
      return Err(D::Error::custom("unrecognised input message content"));
    };

    content.map_err(D::Error::custom)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
  /// 1-4096 characters.
  pub message_text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_web_page_preview: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
  pub latitude: f64,
  pub longitude: f64,
  /// Seconds the location is updated for, 60-86400.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub live_period: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
  pub latitude: f64,
  pub longitude: f64,
  pub title: String,
  pub address: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub foursquare_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
  pub phone_number: String,
  pub first_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
}

/// One result of an inline query.
///
/// On the wire every variant carries a `type` field. Cached and non-cached
/// variants share the same literal (`photo`, `gif`, `video`, ...) and are
/// told apart by their `*_file_id` field.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineQueryResult {
  Article(InlineQueryResultArticle),
  Photo(InlineQueryResultPhoto),
  Gif(InlineQueryResultGif),
  Mpeg4Gif(InlineQueryResultMpeg4Gif),
  Video(InlineQueryResultVideo),
  Audio(InlineQueryResultAudio),
  Voice(InlineQueryResultVoice),
  Document(InlineQueryResultDocument),
  Location(InlineQueryResultLocation),
  Venue(InlineQueryResultVenue),
  Contact(InlineQueryResultContact),
  Game(InlineQueryResultGame),
  CachedPhoto(InlineQueryResultCachedPhoto),
  CachedGif(InlineQueryResultCachedGif),
  CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
  CachedSticker(InlineQueryResultCachedSticker),
  CachedDocument(InlineQueryResultCachedDocument),
  CachedVideo(InlineQueryResultCachedVideo),
  CachedVoice(InlineQueryResultCachedVoice),
  CachedAudio(InlineQueryResultCachedAudio),
}

impl InlineQueryResult {
  /// The `type` literal written on the wire.
  pub fn result_type(&self) -> &'static str {
    match self {
      InlineQueryResult::Article(_) => "article",
      InlineQueryResult::Photo(_) | InlineQueryResult::CachedPhoto(_) => "photo",
      InlineQueryResult::Gif(_) | InlineQueryResult::CachedGif(_) => "gif",
      InlineQueryResult::Mpeg4Gif(_) | InlineQueryResult::CachedMpeg4Gif(_) => "mpeg4_gif",
      InlineQueryResult::Video(_) | InlineQueryResult::CachedVideo(_) => "video",
      InlineQueryResult::Audio(_) | InlineQueryResult::CachedAudio(_) => "audio",
      InlineQueryResult::Voice(_) | InlineQueryResult::CachedVoice(_) => "voice",
      InlineQueryResult::Document(_) | InlineQueryResult::CachedDocument(_) => "document",
      InlineQueryResult::Location(_) => "location",
      InlineQueryResult::Venue(_) => "venue",
      InlineQueryResult::Contact(_) => "contact",
      InlineQueryResult::Game(_) => "game",
      InlineQueryResult::CachedSticker(_) => "sticker",
    }
  }

  pub fn id(&self) -> &str {
    match self {
      InlineQueryResult::Article(r) => &r.id,
      InlineQueryResult::Photo(r) => &r.id,
      InlineQueryResult::Gif(r) => &r.id,
      InlineQueryResult::Mpeg4Gif(r) => &r.id,
      InlineQueryResult::Video(r) => &r.id,
      InlineQueryResult::Audio(r) => &r.id,
      InlineQueryResult::Voice(r) => &r.id,
      InlineQueryResult::Document(r) => &r.id,
      InlineQueryResult::Location(r) => &r.id,
      InlineQueryResult::Venue(r) => &r.id,
      InlineQueryResult::Contact(r) => &r.id,
      InlineQueryResult::Game(r) => &r.id,
      InlineQueryResult::CachedPhoto(r) => &r.id,
      InlineQueryResult::CachedGif(r) => &r.id,
      InlineQueryResult::CachedMpeg4Gif(r) => &r.id,
      InlineQueryResult::CachedSticker(r) => &r.id,
      InlineQueryResult::CachedDocument(r) => &r.id,
      InlineQueryResult::CachedVideo(r) => &r.id,
      InlineQueryResult::CachedVoice(r) => &r.id,
      InlineQueryResult::CachedAudio(r) => &r.id,
    }
  }

  pub fn reply_markup(&self) -> Option<&InlineKeyboardMarkup> {
    match self {
      InlineQueryResult::Article(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Photo(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Gif(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Mpeg4Gif(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Video(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Audio(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Voice(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Document(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Location(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Venue(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Contact(r) => r.reply_markup.as_ref(),
      InlineQueryResult::Game(r) => r.reply_markup.as_ref(),
      InlineQueryResult::CachedPhoto(r) => r.reply_markup.as_ref(),
      InlineQueryResult::CachedGif(r) => r.reply_markup.as_ref(),
      InlineQueryResult::CachedMpeg4Gif(r) => r.reply_markup.as_ref(),
      InlineQueryResult::CachedSticker(r) => r.reply_markup.as_ref(),
      InlineQueryResult::CachedDocument(r) => r.reply_markup.as_ref(),
      InlineQueryResult::CachedVideo(r) => r.reply_markup.as_ref(),
      InlineQueryResult::CachedVoice(r) => r.reply_markup.as_ref(),
      InlineQueryResult::CachedAudio(r) => r.reply_markup.as_ref(),
    }
  }

  /// Caption of the variants that have one.
  pub fn caption(&self) -> Option<&str> {
    match self {
      InlineQueryResult::Photo(r) => r.caption.as_deref(),
      InlineQueryResult::Gif(r) => r.caption.as_deref(),
      InlineQueryResult::Mpeg4Gif(r) => r.caption.as_deref(),
      InlineQueryResult::Video(r) => r.caption.as_deref(),
      InlineQueryResult::Audio(r) => r.caption.as_deref(),
      InlineQueryResult::Voice(r) => r.caption.as_deref(),
      InlineQueryResult::Document(r) => r.caption.as_deref(),
      InlineQueryResult::CachedPhoto(r) => r.caption.as_deref(),
      InlineQueryResult::CachedGif(r) => r.caption.as_deref(),
      InlineQueryResult::CachedMpeg4Gif(r) => r.caption.as_deref(),
      InlineQueryResult::CachedDocument(r) => r.caption.as_deref(),
      InlineQueryResult::CachedVideo(r) => r.caption.as_deref(),
      InlineQueryResult::CachedVoice(r) => r.caption.as_deref(),
      InlineQueryResult::CachedAudio(r) => r.caption.as_deref(),
      _ => None,
    }
  }
}

fn tagged<T: Serialize, S: Serializer>(
  result_type: &str,
  result: &T,
  serializer: S,
) -> Result<S::Ok, S::Error> {
  let mut value = serde_json::to_value(result).map_err(S::Error::custom)?;
  match value.as_object_mut() {
    Some(object) => {
      object.insert("type".into(), Value::String(result_type.into()));
    }
    None => return Err(S::Error::custom("inline query result must be an object")),
  }
  value.serialize(serializer)
}

impl Serialize for InlineQueryResult {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let result_type = self.result_type();
    match self {
      InlineQueryResult::Article(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Photo(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Gif(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Mpeg4Gif(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Video(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Audio(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Voice(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Document(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Location(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Venue(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Contact(r) => tagged(result_type, r, serializer),
      InlineQueryResult::Game(r) => tagged(result_type, r, serializer),
      InlineQueryResult::CachedPhoto(r) => tagged(result_type, r, serializer),
      InlineQueryResult::CachedGif(r) => tagged(result_type, r, serializer),
      InlineQueryResult::CachedMpeg4Gif(r) => tagged(result_type, r, serializer),
      InlineQueryResult::CachedSticker(r) => tagged(result_type, r, serializer),
      InlineQueryResult::CachedDocument(r) => tagged(result_type, r, serializer),
      InlineQueryResult::CachedVideo(r) => tagged(result_type, r, serializer),
      InlineQueryResult::CachedVoice(r) => tagged(result_type, r, serializer),
      InlineQueryResult::CachedAudio(r) => tagged(result_type, r, serializer),
    }
  }
}

impl<'de> Deserialize<'de> for InlineQueryResult {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let mut object = Map::<String, Value>::deserialize(deserializer)?;
    let result_type = match object.remove("type") {
      Some(Value::String(result_type)) => result_type,
      Some(_) => return Err(D::Error::custom("inline query result type must be a string")),
      None => return Err(D::Error::missing_field("type")),
    };

    let result = match result_type.as_str() {
      "article" => from_object(object).map(InlineQueryResult::Article),
      "photo" if object.contains_key("photo_file_id") => {
        from_object(object).map(InlineQueryResult::CachedPhoto)
      }
      "photo" => from_object(object).map(InlineQueryResult::Photo),
      "gif" if object.contains_key("gif_file_id") => {
        from_object(object).map(InlineQueryResult::CachedGif)
      }
      "gif" => from_object(object).map(InlineQueryResult::Gif),
      "mpeg4_gif" if object.contains_key("mpeg4_file_id") => {
        from_object(object).map(InlineQueryResult::CachedMpeg4Gif)
      }
      "mpeg4_gif" => from_object(object).map(InlineQueryResult::Mpeg4Gif),
      "video" if object.contains_key("video_file_id") => {
        from_object(object).map(InlineQueryResult::CachedVideo)
      }
      "video" => from_object(object).map(InlineQueryResult::Video),
      "audio" if object.contains_key("audio_file_id") => {
        from_object(object).map(InlineQueryResult::CachedAudio)
      }
      "audio" => from_object(object).map(InlineQueryResult::Audio),
      "voice" if object.contains_key("voice_file_id") => {
        from_object(object).map(InlineQueryResult::CachedVoice)
      }
      "voice" => from_object(object).map(InlineQueryResult::Voice),
      "document" if object.contains_key("document_file_id") => {
        from_object(object).map(InlineQueryResult::CachedDocument)
      }
      "document" => from_object(object).map(InlineQueryResult::Document),
      "location" => from_object(object).map(InlineQueryResult::Location),
      "venue" => from_object(object).map(InlineQueryResult::Venue),
      "contact" => from_object(object).map(InlineQueryResult::Contact),
      "game" => from_object(object).map(InlineQueryResult::Game),
      "sticker" => from_object(object).map(InlineQueryResult::CachedSticker),
      other => {
        return Err(D::Error::custom(format!(
          "unknown inline query result type `{}`",
          other
        )))
      }
    };

    result.map_err(D::Error::custom)
  }
}

fn from_object<T: serde::de::DeserializeOwned>(
  object: Map<String, Value>,
) -> Result<T, serde_json::Error> {
  serde_json::from_value(Value::Object(object))
}

/// A link to an article or web page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
  /// 1-64 bytes.
  pub id: String,
  pub title: String,
  pub input_message_content: InputMessageContent,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hide_url: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_height: Option<i64>,
}

/// A link to a JPEG photo, at most 5 MB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultPhoto {
  pub id: String,
  pub photo_url: String,
  pub thumb_url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo_height: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

/// A link to an animated GIF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGif {
  pub id: String,
  pub gif_url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gif_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gif_height: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gif_duration: Option<i64>,
  pub thumb_url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

/// A link to an H.264/MPEG-4 AVC animation without sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultMpeg4Gif {
  pub id: String,
  pub mpeg4_url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mpeg4_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mpeg4_height: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mpeg4_duration: Option<i64>,
  pub thumb_url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

/// A link to a page with an embedded video player or to a video file.
/// Embedded players require `input_message_content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVideo {
  pub id: String,
  pub video_url: String,
  /// `text/html` or `video/mp4`.
  pub mime_type: String,
  pub thumb_url: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video_height: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video_duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

/// A link to an MP3 file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultAudio {
  pub id: String,
  pub audio_url: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub performer: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub audio_duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

/// A link to an OGG/OPUS voice recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVoice {
  pub id: String,
  pub voice_url: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub voice_duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

/// A link to a PDF or ZIP file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultDocument {
  pub id: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  pub document_url: String,
  /// `application/pdf` or `application/zip`.
  pub mime_type: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_height: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultLocation {
  pub id: String,
  pub latitude: f64,
  pub longitude: f64,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub live_period: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_height: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVenue {
  pub id: String,
  pub latitude: f64,
  pub longitude: f64,
  pub title: String,
  pub address: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub foursquare_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_height: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultContact {
  pub id: String,
  pub phone_number: String,
  pub first_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumb_height: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGame {
  pub id: String,
  pub game_short_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedPhoto {
  pub id: String,
  pub photo_file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedGif {
  pub id: String,
  pub gif_file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedMpeg4Gif {
  pub id: String,
  pub mpeg4_file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedSticker {
  pub id: String,
  pub sticker_file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedDocument {
  pub id: String,
  pub title: String,
  pub document_file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedVideo {
  pub id: String,
  pub video_file_id: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedVoice {
  pub id: String,
  pub voice_file_id: String,
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedAudio {
  pub id: String,
  pub audio_file_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_message_content: Option<InputMessageContent>,
}
