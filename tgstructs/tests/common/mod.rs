// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
#![allow(dead_code)]

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_test_writer()
    .try_init();
}

/// Decodes `json`, re-encodes it, and checks both directions agree.
pub fn assert_round_trip<T>(json: Value) -> T
where
  T: Serialize + DeserializeOwned + PartialEq + Debug,
{
  let decoded: T = serde_json::from_value(json.clone()).expect("decodes");
  assert_eq!(serde_json::to_value(&decoded).expect("encodes"), json);
  let again: T = serde_json::from_value(json).expect("decodes again");
  assert_eq!(again, decoded);
  decoded
}
