// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::ops::RangeInclusive;

pub(crate) const FILE_API_BASE: &str = "https://api.telegram.org/file/bot";
pub(crate) const ATTACH_PREFIX: &str = "attach://";

pub(crate) const MESSAGE_TEXT_LENGTH: RangeInclusive<usize> = 1..=4096;
pub(crate) const MAX_CAPTION_LENGTH: usize = 200;
pub(crate) const MAX_CALLBACK_ANSWER_LENGTH: usize = 200;
pub(crate) const CALLBACK_DATA_BYTES: RangeInclusive<usize> = 1..=64;
pub(crate) const CHAT_TITLE_LENGTH: RangeInclusive<usize> = 1..=255;
pub(crate) const MAX_CHAT_DESCRIPTION_LENGTH: usize = 255;

pub(crate) const LIMIT_RANGE: RangeInclusive<i64> = 1..=100;
pub(crate) const MAX_CONNECTIONS_RANGE: RangeInclusive<i64> = 1..=100;
pub(crate) const LIVE_PERIOD_RANGE: RangeInclusive<i64> = 60..=86400;
pub(crate) const MEDIA_GROUP_SIZE: RangeInclusive<usize> = 2..=10;

pub(crate) const MAX_INLINE_RESULTS: usize = 50;
pub(crate) const INLINE_RESULT_ID_BYTES: RangeInclusive<usize> = 1..=64;
pub(crate) const SWITCH_PM_PARAMETER_PATTERN: &str = r"^[A-Za-z0-9_-]{1,64}$";

pub(crate) const INVOICE_TITLE_LENGTH: RangeInclusive<usize> = 1..=32;
pub(crate) const INVOICE_DESCRIPTION_LENGTH: RangeInclusive<usize> = 1..=255;
pub(crate) const INVOICE_PAYLOAD_BYTES: RangeInclusive<usize> = 1..=128;
pub(crate) const CURRENCY_PATTERN: &str = r"^[A-Z]{3}$";

pub(crate) const STICKER_SET_NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_]{0,63}$";
pub(crate) const STICKER_SET_TITLE_LENGTH: RangeInclusive<usize> = 1..=64;
