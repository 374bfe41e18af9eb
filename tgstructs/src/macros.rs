// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

/// Declares a string enumeration of the Bot API.
///
/// Every documented literal gets its own variant; anything else decodes into
/// `Unknown` so that a newer server never breaks decoding. Strict decoding
/// rejects `Unknown` values afterwards (see `decoder::Decoder`).
macro_rules! string_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum $name {
      $( $(#[$vmeta])* $variant, )+
      Unknown(String),
    }

    impl $name {
      pub fn as_str(&self) -> &str {
        match self {
          $( $name::$variant => $value, )+
          $name::Unknown(value) => value.as_str(),
        }
      }

      pub fn is_known(&self) -> bool {
        !matches!(self, $name::Unknown(_))
      }
    }

    impl From<&str> for $name {
      fn from(value: &str) -> Self {
        match value {
          $( $value => $name::$variant, )+
          other => $name::Unknown(other.to_string()),
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl ::serde::Serialize for $name {
      fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
      }
    }

    impl<'de> ::serde::Deserialize<'de> for $name {
      fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok($name::from(value.as_str()))
      }
    }
  };
}

/// Binds request records to their API method name and response type.
///
/// An optional `|request| expr` lists the multipart uploads of the record.
macro_rules! impl_method {
  ($( $request:ty => $name:literal, $response:ty $(, |$this:ident| $uploads:expr)?; )+) => {
    $(
      impl $crate::methods::Method for $request {
        const NAME: &'static str = $name;
        type Response = $response;

        $(
          fn uploads(&self) -> Vec<(&str, &[u8])> {
            let $this = self;
            $uploads
          }
        )?
      }
    )+
  };
}
