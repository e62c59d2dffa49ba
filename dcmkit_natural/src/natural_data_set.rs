//! Natural data sets, which hold data elements keyed by their dictionary name.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::Serialize;

use dcmkit_core::ValueRepresentation;

use crate::{NaturalError, NaturalValue};

/// The reserved JSON key that holds a natural data set's VR map.
///
pub const VR_MAP_KEY: &str = "_vrMap";

/// The reserved JSON key that holds a natural data set's File Meta
/// Information.
///
pub const META_KEY: &str = "_meta";

/// A data set in natural form. Each data element is keyed by its name in the
/// dictionary, e.g. `"PatientName"`, or by its tag in `"(GGGG,EEEE)"` form
/// when it has no dictionary name, as is the case for private data elements.
///
/// The VR map records the VR of any data element whose VR can't be recovered
/// from the dictionary, which makes the conversion back to a data set exact.
/// The File Meta Information, i.e. the group 0x0002 data elements, is held
/// separately in `meta`.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NaturalDataSet {
  pub elements: BTreeMap<String, NaturalValue>,
  pub vr_map: BTreeMap<String, ValueRepresentation>,
  pub meta: Option<Box<NaturalDataSet>>,
}

impl NaturalDataSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the number of data elements in a natural data set, not counting
  /// its File Meta Information.
  ///
  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn get(&self, key: &str) -> Option<&NaturalValue> {
    self.elements.get(key)
  }

  /// Inserts a data element, replacing any existing one with the same key.
  /// The VR map is left unchanged.
  ///
  pub fn insert(&mut self, key: String, value: NaturalValue) {
    self.elements.insert(key, value);
  }

  /// Inserts a data element along with an entry in the VR map.
  ///
  pub fn insert_with_vr(
    &mut self,
    key: String,
    value: NaturalValue,
    vr: ValueRepresentation,
  ) {
    self.vr_map.insert(key.clone(), vr);
    self.elements.insert(key, value);
  }

  /// Removes a data element and any VR map entry it has.
  ///
  pub fn remove(&mut self, key: &str) -> Option<NaturalValue> {
    self.vr_map.remove(key);
    self.elements.remove(key)
  }

  /// Converts a natural data set to JSON. Data elements are keyed as in the
  /// natural data set, and the VR map and File Meta Information are stored
  /// under the reserved `"_vrMap"` and `"_meta"` keys when present.
  ///
  pub fn to_json(&self, pretty_print: bool) -> Result<String, NaturalError> {
    let json = if pretty_print {
      serde_json::to_string_pretty(self)
    } else {
      serde_json::to_string(self)
    };

    json.map_err(|e| NaturalError::JsonInvalid {
      details: e.to_string(),
    })
  }

  /// Reads a natural data set from its JSON form, as created by
  /// [`Self::to_json()`].
  ///
  pub fn from_json(json: &str) -> Result<Self, NaturalError> {
    match serde_json::from_str(json) {
      Ok(serde_json::Value::Object(map)) => Self::from_json_map(map),

      Ok(_) => Err(NaturalError::JsonInvalid {
        details: "Natural data set is not an object".to_string(),
      }),

      Err(e) => Err(NaturalError::JsonInvalid {
        details: e.to_string(),
      }),
    }
  }

  pub(crate) fn from_json_map(
    map: serde_json::Map<String, serde_json::Value>,
  ) -> Result<Self, NaturalError> {
    let mut data_set = Self::new();

    for (key, value) in map {
      match key.as_str() {
        VR_MAP_KEY => data_set.vr_map = read_vr_map(value)?,

        META_KEY => match NaturalValue::from_json_value(value)? {
          NaturalValue::Object(meta) => data_set.meta = Some(Box::new(meta)),
          _ => {
            return Err(NaturalError::JsonInvalid {
              details: "Natural data set meta is not an object".to_string(),
            })
          }
        },

        _ => {
          let value = NaturalValue::from_json_value(value)?;
          data_set.elements.insert(key, value);
        }
      }
    }

    Ok(data_set)
  }
}

fn read_vr_map(
  json: serde_json::Value,
) -> Result<BTreeMap<String, ValueRepresentation>, NaturalError> {
  let serde_json::Value::Object(map) = json else {
    return Err(NaturalError::JsonInvalid {
      details: "VR map is not an object".to_string(),
    });
  };

  map
    .into_iter()
    .map(|(key, vr)| {
      let vr = vr
        .as_str()
        .and_then(|vr| ValueRepresentation::from_bytes(vr.as_bytes()).ok())
        .ok_or_else(|| NaturalError::JsonInvalid {
          details: format!("VR map entry for '{}' is invalid: {}", key, vr),
        })?;

      Ok((key, vr))
    })
    .collect()
}

impl Serialize for NaturalDataSet {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    let mut map = serializer.serialize_map(None)?;

    for (key, value) in self.elements.iter() {
      map.serialize_entry(key, value)?;
    }

    if !self.vr_map.is_empty() {
      let vr_map: BTreeMap<&str, String> = self
        .vr_map
        .iter()
        .map(|(key, vr)| (key.as_str(), vr.to_string()))
        .collect();

      map.serialize_entry(VR_MAP_KEY, &vr_map)?;
    }

    if let Some(meta) = &self.meta {
      map.serialize_entry(META_KEY, meta)?;
    }

    map.end()
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use super::*;

  fn example_data_set() -> NaturalDataSet {
    let mut item = NaturalDataSet::new();
    item.insert(
      "ReferencedSOPInstanceUID".to_string(),
      NaturalValue::String("1.2.3".to_string()),
    );

    let mut meta = NaturalDataSet::new();
    meta.insert(
      "TransferSyntaxUID".to_string(),
      NaturalValue::String("1.2.840.10008.1.2.1".to_string()),
    );

    let mut data_set = NaturalDataSet::new();
    data_set.insert(
      "PatientName".to_string(),
      NaturalValue::String("Doe^John".to_string()),
    );
    data_set.insert("Rows".to_string(), NaturalValue::Int(512));
    data_set.insert(
      "ReferencedImageSequence".to_string(),
      NaturalValue::Object(item),
    );
    data_set.insert_with_vr(
      "(0009,1001)".to_string(),
      NaturalValue::Bytes(Rc::new(vec![0, 255])),
      ValueRepresentation::OtherByteString,
    );
    data_set.meta = Some(Box::new(meta));

    data_set
  }

  #[test]
  fn to_json_test() {
    assert_eq!(
      example_data_set().to_json(false).unwrap(),
      concat!(
        r#"{"(0009,1001)":{"InlineBinary":"AP8="},"#,
        r#""PatientName":"Doe^John","#,
        r#""ReferencedImageSequence":{"#,
        r#""ReferencedSOPInstanceUID":"1.2.3"},"#,
        r#""Rows":512,"#,
        r#""_vrMap":{"(0009,1001)":"OB"},"#,
        r#""_meta":{"TransferSyntaxUID":"1.2.840.10008.1.2.1"}}"#,
      )
    );
  }

  #[test]
  fn from_json_test() {
    let data_set = example_data_set();

    for pretty_print in [false, true] {
      let json = data_set.to_json(pretty_print).unwrap();
      assert_eq!(NaturalDataSet::from_json(&json), Ok(data_set.clone()));
    }
  }

  #[test]
  fn from_json_errors_test() {
    assert!(matches!(
      NaturalDataSet::from_json("[]"),
      Err(NaturalError::JsonInvalid { .. })
    ));

    assert!(matches!(
      NaturalDataSet::from_json(r#"{"_vrMap": {"Rows": "XX"}}"#),
      Err(NaturalError::JsonInvalid { .. })
    ));

    assert!(matches!(
      NaturalDataSet::from_json(r#"{"_meta": 1}"#),
      Err(NaturalError::JsonInvalid { .. })
    ));
  }

  #[test]
  fn remove_test() {
    let mut data_set = example_data_set();

    assert_eq!(
      data_set.remove("(0009,1001)"),
      Some(NaturalValue::Bytes(Rc::new(vec![0, 255])))
    );
    assert!(data_set.vr_map.is_empty());
    assert_eq!(data_set.len(), 3);
  }
}
