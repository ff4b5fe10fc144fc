use serde_json::Value;

use crate::{
    error::{Error, Result},
    flag::OpenMode,
    inspect::{inspect, inspect_with_kind},
};

/// The mode a file is opened with, either as a Node-style string such as
/// `"r"` or `"ax+"`, or as raw `O_*` bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    Str(String),
    Int(i64),
}

impl From<&str> for Flag {
    fn from(flag: &str) -> Self {
        Flag::Str(flag.to_string())
    }
}

impl From<String> for Flag {
    fn from(flag: String) -> Self {
        Flag::Str(flag)
    }
}

impl From<i32> for Flag {
    fn from(flag: i32) -> Self {
        Flag::Int(i64::from(flag))
    }
}

/// Options for [`read_utf8_file_with_options`](crate::read_utf8_file_with_options).
///
/// There is no encoding setting: files are always decoded as UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    flag: Option<Flag>,
}

impl ReadOptions {
    pub fn new() -> ReadOptions {
        ReadOptions::default()
    }

    /// Sets the open flag. Defaults to `"r"`.
    pub fn flag(mut self, flag: impl Into<Flag>) -> ReadOptions {
        self.flag = Some(flag.into());
        self
    }

    pub fn get_flag(&self) -> Option<&Flag> {
        self.flag.as_ref()
    }

    pub(crate) fn open_mode(&self) -> Result<OpenMode> {
        match &self.flag {
            Some(flag) => OpenMode::from_flag(flag),
            None => Ok(OpenMode::DEFAULT),
        }
    }
}

/// Validates options supplied as a dynamic value.
///
/// `null` yields the defaults. Anything other than an object is rejected, as
/// is any `encoding` key. Keys other than `flag` are ignored.
impl TryFrom<&Value> for ReadOptions {
    type Error = Error;

    fn try_from(value: &Value) -> Result<ReadOptions> {
        let map = match value {
            Value::Null => return Ok(ReadOptions::default()),
            Value::Object(map) => map,
            other => return Err(Error::InvalidOptionsType(inspect_with_kind(other))),
        };

        if let Some(encoding) = map.get("encoding") {
            return Err(Error::UnsupportedEncodingOption(inspect(encoding)));
        }

        let flag = match map.get("flag") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(s)) if s.is_empty() => return Err(Error::InvalidFlagValue),
            Some(Value::String(s)) => Some(Flag::Str(s.clone())),
            Some(number @ Value::Number(n)) => match n.as_i64() {
                Some(bits) => Some(Flag::Int(bits)),
                None => return Err(Error::InvalidFlagType(inspect(number))),
            },
            Some(other) => return Err(Error::InvalidFlagType(inspect(other))),
        };

        Ok(ReadOptions { flag })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_and_empty_object_are_defaults() {
        assert_eq!(ReadOptions::try_from(&Value::Null).unwrap(), ReadOptions::new());
        assert_eq!(ReadOptions::try_from(&json!({})).unwrap(), ReadOptions::new());
        assert_eq!(
            ReadOptions::try_from(&json!({"flag": null, "signal": 1})).unwrap(),
            ReadOptions::new()
        );
    }

    #[test]
    fn accepts_string_and_integer_flags() {
        let options = ReadOptions::try_from(&json!({"flag": "a+"})).unwrap();
        assert_eq!(options.get_flag(), Some(&Flag::Str("a+".into())));

        let options = ReadOptions::try_from(&json!({"flag": 2})).unwrap();
        assert_eq!(options.get_flag(), Some(&Flag::Int(2)));
    }

    #[test]
    fn rejects_non_objects() {
        let err = ReadOptions::try_from(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The second argument of read-utf8-file must be a plain object, but got [ 1, 2, 3 ] (array)."
        );
        assert!(matches!(
            ReadOptions::try_from(&json!("r")),
            Err(Error::InvalidOptionsType(_))
        ));
    }

    #[test]
    fn rejects_encoding_whatever_its_value() {
        let err = ReadOptions::try_from(&json!({"encoding": "hex"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "read-utf8-file does not support `encoding` option because it only supports UTF-8 by design, but 'hex' was provided."
        );
        assert!(matches!(
            ReadOptions::try_from(&json!({"encoding": null, "flag": "r"})),
            Err(Error::UnsupportedEncodingOption(v)) if v == "null"
        ));
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(matches!(
            ReadOptions::try_from(&json!({"flag": ""})),
            Err(Error::InvalidFlagValue)
        ));
        assert!(matches!(
            ReadOptions::try_from(&json!({"flag": 1.5})),
            Err(Error::InvalidFlagType(v)) if v == "1.5"
        ));
        assert!(matches!(
            ReadOptions::try_from(&json!({"flag": ["r"]})),
            Err(Error::InvalidFlagType(v)) if v == "[ 'r' ]"
        ));
    }
}
