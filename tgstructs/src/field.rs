// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field whose absence and explicit `null` mean different things on the wire.
///
/// Declare it with `#[serde(default, skip_serializing_if = "Field::is_absent")]`:
/// `Absent` is then omitted on encode and produced when the key is missing on
/// decode, `Null` travels as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
  #[default]
  Absent,
  Null,
  Value(T),
}

impl<T> Field<T> {
  pub fn is_absent(&self) -> bool {
    matches!(self, Field::Absent)
  }

  pub fn is_null(&self) -> bool {
    matches!(self, Field::Null)
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Field::Value(value) => Some(value),
      _ => None,
    }
  }

  /// `None` becomes an explicit `Null`.
  pub fn from_option(value: Option<T>) -> Self {
    value.map_or(Field::Null, Field::Value)
  }

  pub fn into_option(self) -> Option<T> {
    match self {
      Field::Value(value) => Some(value),
      _ => None,
    }
  }
}

impl<T> From<T> for Field<T> {
  fn from(value: T) -> Self {
    Field::Value(value)
  }
}

impl<T: Serialize> Serialize for Field<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Field::Value(value) => serializer.serialize_some(value),
      Field::Absent | Field::Null => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(Field::from_option(Option::<T>::deserialize(deserializer)?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[derive(Debug, PartialEq, Serialize, Deserialize)]
  struct Probe {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    description: Field<String>,
  }

  #[test]
  fn keeps_three_states_apart() {
    let absent: Probe = serde_json::from_value(json!({})).unwrap();
    let null: Probe = serde_json::from_value(json!({ "description": null })).unwrap();
    let value: Probe = serde_json::from_value(json!({ "description": "rules" })).unwrap();

    assert!(absent.description.is_absent());
    assert!(null.description.is_null());
    assert_eq!(value.description.value().map(String::as_str), Some("rules"));

    assert_eq!(serde_json::to_value(&absent).unwrap(), json!({}));
    assert_eq!(serde_json::to_value(&null).unwrap(), json!({ "description": null }));
    assert_eq!(
      serde_json::to_value(&value).unwrap(),
      json!({ "description": "rules" })
    );
  }

  #[test]
  fn option_conversion_maps_none_to_null() {
    assert_eq!(Field::<i64>::from_option(None), Field::Null);
    assert_eq!(Field::from_option(Some(3)), Field::Value(3));
    assert_eq!(Field::from(3), Field::Value(3));
    assert_eq!(Field::Value(3).into_option(), Some(3));
    assert_eq!(Field::<i64>::Absent.into_option(), None);
  }
}
