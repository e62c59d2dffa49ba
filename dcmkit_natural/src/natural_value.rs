//! The value type held by the data elements of a natural data set.

use std::rc::Rc;

use base64::prelude::*;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::Serialize;

use crate::{NaturalDataSet, NaturalError};

/// The JSON key used to hold base64 encoded binary data.
///
pub const INLINE_BINARY_KEY: &str = "InlineBinary";

/// A data element value in natural form. The variant used for a value is
/// determined by the VR of the data element it came from:
///
/// - Integer VRs and `IS` become [`NaturalValue::Int`].
/// - `FL`, `FD`, and `DS` become [`NaturalValue::Float`].
/// - Text VRs become [`NaturalValue::String`], and `AT` becomes a
///   [`NaturalValue::String`] holding the tag as `"GGGGEEEE"`.
/// - Binary VRs become [`NaturalValue::Bytes`].
/// - Sequences with exactly one item become [`NaturalValue::Object`].
///
/// Values with zero or several entries, as well as sequences with any other
/// number of items, are held in a [`NaturalValue::List`].
///
#[derive(Clone, Debug, PartialEq)]
pub enum NaturalValue {
  Int(i128),
  Float(f64),
  String(String),
  Bytes(Rc<Vec<u8>>),
  List(Vec<NaturalValue>),
  Object(NaturalDataSet),
}

impl NaturalValue {
  /// Converts a JSON value into a natural value. JSON numbers that are
  /// integers become [`NaturalValue::Int`], and objects with a single
  /// `"InlineBinary"` key become [`NaturalValue::Bytes`].
  ///
  pub fn from_json_value(
    json: serde_json::Value,
  ) -> Result<Self, NaturalError> {
    match json {
      serde_json::Value::Number(number) => {
        if let Some(i) = number.as_i64() {
          Ok(NaturalValue::Int(i.into()))
        } else if let Some(u) = number.as_u64() {
          Ok(NaturalValue::Int(u.into()))
        } else if let Some(f) = number.as_f64() {
          Ok(NaturalValue::Float(f))
        } else {
          Err(NaturalError::JsonInvalid {
            details: format!("Number out of range: {}", number),
          })
        }
      }

      serde_json::Value::String(s) => Ok(NaturalValue::String(s)),

      serde_json::Value::Array(values) => values
        .into_iter()
        .map(Self::from_json_value)
        .collect::<Result<Vec<_>, _>>()
        .map(NaturalValue::List),

      serde_json::Value::Object(mut map) => {
        if map.len() == 1 {
          if let Some(inline_binary) = map.remove(INLINE_BINARY_KEY) {
            return read_inline_binary(inline_binary).map(NaturalValue::Bytes);
          }
        }

        NaturalDataSet::from_json_map(map).map(NaturalValue::Object)
      }

      json => Err(NaturalError::JsonInvalid {
        details: format!("Unsupported JSON value: {}", json),
      }),
    }
  }
}

fn read_inline_binary(
  json: serde_json::Value,
) -> Result<Rc<Vec<u8>>, NaturalError> {
  let serde_json::Value::String(base64) = json else {
    return Err(NaturalError::JsonInvalid {
      details: "InlineBinary is not a string".to_string(),
    });
  };

  BASE64_STANDARD
    .decode(base64)
    .map(Rc::new)
    .map_err(|_| NaturalError::JsonInvalid {
      details: "InlineBinary is not valid Base64".to_string(),
    })
}

impl Serialize for NaturalValue {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    match self {
      NaturalValue::Int(i) => {
        if let Ok(i) = i64::try_from(*i) {
          serializer.serialize_i64(i)
        } else if let Ok(u) = u64::try_from(*i) {
          serializer.serialize_u64(u)
        } else {
          serializer.serialize_i128(*i)
        }
      }

      // JSON has no representation for these floats, so they are written as
      // strings
      NaturalValue::Float(f) if f.is_nan() => serializer.serialize_str("NaN"),
      NaturalValue::Float(f) if f.is_infinite() => {
        if *f > 0.0 {
          serializer.serialize_str("Infinity")
        } else {
          serializer.serialize_str("-Infinity")
        }
      }
      NaturalValue::Float(f) => serializer.serialize_f64(*f),

      NaturalValue::String(s) => serializer.serialize_str(s),

      NaturalValue::Bytes(bytes) => {
        let base64 = BASE64_STANDARD.encode(&**bytes);

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(INLINE_BINARY_KEY, &base64)?;
        map.end()
      }

      NaturalValue::List(values) => {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
          seq.serialize_element(value)?;
        }
        seq.end()
      }

      NaturalValue::Object(data_set) => data_set.serialize(serializer),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn to_json(value: &NaturalValue) -> String {
    serde_json::to_string(value).unwrap()
  }

  #[test]
  fn serialize_test() {
    assert_eq!(to_json(&NaturalValue::Int(-3)), "-3");
    assert_eq!(
      to_json(&NaturalValue::Int(u64::MAX.into())),
      "18446744073709551615"
    );
    assert_eq!(to_json(&NaturalValue::Float(2.0)), "2.0");
    assert_eq!(to_json(&NaturalValue::Float(f64::NAN)), "\"NaN\"");
    assert_eq!(
      to_json(&NaturalValue::Float(f64::NEG_INFINITY)),
      "\"-Infinity\""
    );
    assert_eq!(
      to_json(&NaturalValue::Bytes(Rc::new(vec![1, 2, 3]))),
      "{\"InlineBinary\":\"AQID\"}"
    );
    assert_eq!(
      to_json(&NaturalValue::List(vec![
        NaturalValue::String("A".to_string()),
        NaturalValue::Int(1)
      ])),
      "[\"A\",1]"
    );
  }

  #[test]
  fn from_json_value_test() {
    let json: serde_json::Value = serde_json::from_str(
      r#"[1, 18446744073709551615, 1.5, 2.0, "x", {"InlineBinary": "AQID"}]"#,
    )
    .unwrap();

    assert_eq!(
      NaturalValue::from_json_value(json),
      Ok(NaturalValue::List(vec![
        NaturalValue::Int(1),
        NaturalValue::Int(u64::MAX.into()),
        NaturalValue::Float(1.5),
        NaturalValue::Float(2.0),
        NaturalValue::String("x".to_string()),
        NaturalValue::Bytes(Rc::new(vec![1, 2, 3])),
      ]))
    );
  }

  #[test]
  fn from_json_value_errors_test() {
    assert!(matches!(
      NaturalValue::from_json_value(serde_json::Value::Null),
      Err(NaturalError::JsonInvalid { .. })
    ));

    assert!(matches!(
      NaturalValue::from_json_value(serde_json::json!({
        "InlineBinary": "not base64!"
      })),
      Err(NaturalError::JsonInvalid { .. })
    ));
  }
}
