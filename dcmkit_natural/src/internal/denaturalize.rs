//! Conversion of natural data sets back into data sets.

use std::rc::Rc;

use dcmkit_core::data_element_value::decimal_string;
use dcmkit_core::{
  dictionary, DataElementTag, DataElementValue, DataSet, DataSetPath,
  TransferSyntax, ValueRepresentation,
};

use crate::internal::natural_keys;
use crate::{NaturalDataSet, NaturalError, NaturalValue};

use ValueRepresentation as VR;

/// Converts a natural data set into a data set. The File Meta Information in
/// `meta` is converted first so that its transfer syntax is known when
/// converting pixel data. Sequence items inherit the transfer syntax of the
/// data set that contains them.
///
pub fn denaturalize_data_set(
  natural: &NaturalDataSet,
  transfer_syntax: Option<&'static TransferSyntax>,
  path: &mut DataSetPath,
) -> Result<DataSet, NaturalError> {
  let mut data_set = DataSet::new();
  let mut transfer_syntax = transfer_syntax;

  if let Some(meta) = &natural.meta {
    let meta = denaturalize_elements(meta, None, path)?;

    if let Ok(ts) = meta.get_transfer_syntax() {
      transfer_syntax = Some(ts);
    }

    data_set.merge(meta);
  }

  data_set.merge(denaturalize_elements(natural, transfer_syntax, path)?);

  Ok(data_set)
}

fn denaturalize_elements(
  natural: &NaturalDataSet,
  transfer_syntax: Option<&'static TransferSyntax>,
  path: &mut DataSetPath,
) -> Result<DataSet, NaturalError> {
  let mut data_set = DataSet::new();

  for (key, value) in natural.elements.iter() {
    let tag = natural_keys::parse_natural_key(key).map_err(|()| {
      NaturalError::KeyInvalid {
        key: key.clone(),
        path: path.clone(),
      }
    })?;

    path
      .add_data_element(tag)
      .map_err(|details| value_invalid(key, details, path))?;

    // The VR map takes precedence over the dictionary
    let vr = match natural.vr_map.get(key) {
      Some(vr) => *vr,
      None => natural_keys::default_vr(tag).ok_or_else(|| {
        NaturalError::VrUnresolvable {
          key: key.clone(),
          path: path.clone(),
        }
      })?,
    };

    let value =
      denaturalize_value(key, tag, vr, value, transfer_syntax, path)?;

    data_set.insert(tag, value);

    path.pop();
  }

  Ok(data_set)
}

fn denaturalize_value(
  key: &str,
  tag: DataElementTag,
  vr: ValueRepresentation,
  value: &NaturalValue,
  transfer_syntax: Option<&'static TransferSyntax>,
  path: &mut DataSetPath,
) -> Result<DataElementValue, NaturalError> {
  if vr == VR::Sequence {
    return denaturalize_sequence(key, value, transfer_syntax, path);
  }

  // Bytes are used as-is for any VR
  if let NaturalValue::Bytes(bytes) = value {
    return Ok(DataElementValue::new_binary_unchecked(vr, bytes.clone()));
  }

  if let Some(chunks) = bytes_list(value) {
    if is_encapsulated_pixel_data(tag, vr, transfer_syntax) {
      return Ok(DataElementValue::new_encapsulated_pixel_data_unchecked(
        vr, chunks,
      ));
    }

    let bytes = chunks.iter().flat_map(|chunk| chunk.iter().copied());

    return Ok(DataElementValue::new_binary_unchecked(
      vr,
      Rc::new(bytes.collect()),
    ));
  }

  let values: Vec<&NaturalValue> = match value {
    NaturalValue::List(values) => values.iter().collect(),

    NaturalValue::Object(_) => {
      return Err(value_invalid(
        key,
        format!("An object isn't valid for the '{}' VR", vr),
        path,
      ))
    }

    value => vec![value],
  };

  let new_value = match vr {
    VR::SignedShort => {
      DataElementValue::new_signed_short(&to_ints(key, &values, path)?)
    }
    VR::UnsignedShort => {
      DataElementValue::new_unsigned_short(&to_ints(key, &values, path)?)
    }
    VR::SignedLong => {
      DataElementValue::new_signed_long(&to_ints(key, &values, path)?)
    }
    VR::UnsignedLong => {
      DataElementValue::new_unsigned_long(&to_ints(key, &values, path)?)
    }
    VR::SignedVeryLong => {
      DataElementValue::new_signed_very_long(&to_ints(key, &values, path)?)
    }
    VR::UnsignedVeryLong => {
      DataElementValue::new_unsigned_very_long(&to_ints(
        key, &values, path,
      )?)
    }

    VR::FloatingPointSingle | VR::OtherFloatString => {
      let floats: Vec<f32> = to_floats(key, &values, path)?
        .into_iter()
        .map(|f| f as f32)
        .collect();

      if vr == VR::FloatingPointSingle {
        DataElementValue::new_floating_point_single(&floats)
      } else {
        DataElementValue::new_other_float_string(&floats)
      }
    }

    VR::FloatingPointDouble => {
      DataElementValue::new_floating_point_double(&to_floats(
        key, &values, path,
      )?)
    }
    VR::OtherDoubleString => {
      DataElementValue::new_other_double_string(&to_floats(
        key, &values, path,
      )?)
    }

    VR::AttributeTag => {
      let tags = to_strings(key, &values, path)?
        .into_iter()
        .map(|s| {
          DataElementTag::from_hex_string(s).map_err(|()| {
            value_invalid(key, format!("Invalid attribute tag: {}", s), path)
          })
        })
        .collect::<Result<Vec<_>, _>>()?;

      DataElementValue::new_attribute_tag(&tags)
    }

    VR::IntegerString | VR::DecimalString => {
      let strings = values
        .iter()
        .map(|value| match value {
          NaturalValue::String(s) => Ok(s.clone()),
          NaturalValue::Int(i) if vr == VR::IntegerString => {
            Ok(i.to_string())
          }
          NaturalValue::Int(i) => Ok(decimal_text(*i as f64)),
          NaturalValue::Float(f) if vr == VR::DecimalString => {
            Ok(decimal_text(*f))
          }
          _ => Err(value_invalid(
            key,
            format!("Expected a number for the '{}' VR", vr),
            path,
          )),
        })
        .collect::<Result<Vec<_>, _>>()?;

      Ok(new_text_value(vr, &strings))
    }

    vr if vr.is_string() => {
      let strings = to_strings(key, &values, path)?;

      if vr.is_single_valued_string() && strings.len() > 1 {
        return Err(value_invalid(
          key,
          format!("The '{}' VR only holds a single string", vr),
          path,
        ));
      }

      Ok(new_text_value(vr, &strings))
    }

    // Binary VRs only hold bytes, which were handled above
    _ if values.is_empty() => {
      Ok(DataElementValue::new_binary_unchecked(vr, Rc::new(vec![])))
    }

    _ => {
      return Err(value_invalid(
        key,
        format!("Expected bytes for the '{}' VR", vr),
        path,
      ))
    }
  };

  new_value.map_err(|e| value_invalid(key, e.to_string(), path))
}

fn denaturalize_sequence(
  key: &str,
  value: &NaturalValue,
  transfer_syntax: Option<&'static TransferSyntax>,
  path: &mut DataSetPath,
) -> Result<DataElementValue, NaturalError> {
  let items: Vec<&NaturalDataSet> = match value {
    NaturalValue::Object(item) => vec![item],

    NaturalValue::List(values) => values
      .iter()
      .map(|value| match value {
        NaturalValue::Object(item) => Ok(item),
        _ => Err(value_invalid(
          key,
          "Sequence items must be objects".to_string(),
          path,
        )),
      })
      .collect::<Result<Vec<_>, _>>()?,

    _ => {
      return Err(value_invalid(
        key,
        "Sequence must be an object or a list of objects".to_string(),
        path,
      ))
    }
  };

  let mut data_sets = Vec::with_capacity(items.len());

  for (index, item) in items.into_iter().enumerate() {
    path
      .add_sequence_item(index)
      .map_err(|details| value_invalid(key, details, path))?;

    data_sets.push(denaturalize_data_set(item, transfer_syntax, path)?);

    path.pop();
  }

  Ok(DataElementValue::new_sequence(data_sets))
}

/// Returns the chunks in a non-empty list that holds only bytes.
///
fn bytes_list(value: &NaturalValue) -> Option<Vec<Rc<Vec<u8>>>> {
  let NaturalValue::List(values) = value else {
    return None;
  };

  if values.is_empty() {
    return None;
  }

  values
    .iter()
    .map(|value| match value {
      NaturalValue::Bytes(bytes) => Some(bytes.clone()),
      _ => None,
    })
    .collect()
}

/// A list of bytes for *'(7FE0,0010) Pixel Data'* holds encapsulated pixel
/// data fragments unless the transfer syntax is known to be native.
///
fn is_encapsulated_pixel_data(
  tag: DataElementTag,
  vr: ValueRepresentation,
  transfer_syntax: Option<&'static TransferSyntax>,
) -> bool {
  tag == dictionary::PIXEL_DATA.tag
    && (vr == VR::OtherByteString || vr == VR::OtherWordString)
    && transfer_syntax.map_or(true, |ts| ts.is_encapsulated)
}

fn new_text_value(
  vr: ValueRepresentation,
  strings: &[impl AsRef<str>],
) -> DataElementValue {
  let mut bytes = strings
    .iter()
    .map(|s| s.as_ref())
    .collect::<Vec<_>>()
    .join("\\")
    .into_bytes();

  vr.pad_bytes_to_even_length(&mut bytes);

  DataElementValue::new_binary_unchecked(vr, Rc::new(bytes))
}

fn decimal_text(value: f64) -> String {
  let bytes = decimal_string::to_bytes(&[value]);

  String::from_utf8_lossy(&bytes).trim_end().to_string()
}

fn to_ints<T: TryFrom<i128>>(
  key: &str,
  values: &[&NaturalValue],
  path: &DataSetPath,
) -> Result<Vec<T>, NaturalError> {
  values
    .iter()
    .map(|value| match value {
      NaturalValue::Int(i) => T::try_from(*i).map_err(|_| {
        value_invalid(key, format!("Integer is out of range: {}", i), path)
      }),

      _ => Err(value_invalid(key, "Expected an integer".to_string(), path)),
    })
    .collect()
}

/// Floats may also be given as integers, or as strings such as `"NaN"` and
/// `"Infinity"` for the values that JSON can't hold.
///
fn to_floats(
  key: &str,
  values: &[&NaturalValue],
  path: &DataSetPath,
) -> Result<Vec<f64>, NaturalError> {
  values
    .iter()
    .map(|value| match value {
      NaturalValue::Float(f) => Ok(*f),
      NaturalValue::Int(i) => Ok(*i as f64),
      NaturalValue::String(s) => s.parse::<f64>().map_err(|_| {
        value_invalid(key, format!("Invalid float: {}", s), path)
      }),

      _ => Err(value_invalid(key, "Expected a float".to_string(), path)),
    })
    .collect()
}

fn to_strings<'a>(
  key: &str,
  values: &[&'a NaturalValue],
  path: &DataSetPath,
) -> Result<Vec<&'a str>, NaturalError> {
  values
    .iter()
    .map(|value| match value {
      NaturalValue::String(s) => Ok(s.as_str()),
      _ => Err(value_invalid(key, "Expected a string".to_string(), path)),
    })
    .collect()
}

fn value_invalid(
  key: &str,
  details: String,
  path: &DataSetPath,
) -> NaturalError {
  NaturalError::ValueInvalid {
    key: key.to_string(),
    details,
    path: path.clone(),
  }
}

#[cfg(test)]
mod tests {
  use dcmkit_core::transfer_syntax;

  use super::*;

  fn denaturalize(
    natural: &NaturalDataSet,
  ) -> Result<DataSet, NaturalError> {
    denaturalize_data_set(natural, None, &mut DataSetPath::new())
  }

  fn single(key: &str, value: NaturalValue) -> NaturalDataSet {
    let mut natural = NaturalDataSet::new();
    natural.insert(key.to_string(), value);
    natural
  }

  #[test]
  fn denaturalize_values_test() {
    let mut natural = NaturalDataSet::new();
    natural.insert(
      "PatientName".to_string(),
      NaturalValue::String("Doe^John".to_string()),
    );
    natural.insert(
      "ImageType".to_string(),
      NaturalValue::List(vec![
        NaturalValue::String("ORIGINAL".to_string()),
        NaturalValue::String("PRIMARY".to_string()),
      ]),
    );
    natural.insert("Rows".to_string(), NaturalValue::Int(512));
    natural.insert(
      "PixelSpacing".to_string(),
      NaturalValue::List(vec![NaturalValue::Float(0.5), NaturalValue::Int(1)]),
    );
    natural.insert("InstanceNumber".to_string(), NaturalValue::Int(7));

    let data_set = denaturalize(&natural).unwrap();

    assert_eq!(
      data_set.get_value_bytes(dictionary::PATIENT_NAME.tag, VR::PersonName),
      Ok(&Rc::new(b"Doe^John".to_vec()))
    );
    assert_eq!(
      data_set.get_strings(dictionary::IMAGE_TYPE.tag),
      Ok(vec!["ORIGINAL", "PRIMARY"])
    );
    assert_eq!(data_set.get_int(dictionary::ROWS.tag), Ok(512));
    assert_eq!(
      data_set
        .get_value_bytes(dictionary::PIXEL_SPACING.tag, VR::DecimalString)
        .map(|bytes| bytes.as_slice()),
      Ok(b"0.5\\1 ".as_slice())
    );
    assert_eq!(data_set.get_int(dictionary::INSTANCE_NUMBER.tag), Ok(7));
  }

  #[test]
  fn denaturalize_vr_map_test() {
    let mut natural = NaturalDataSet::new();
    natural.insert_with_vr(
      "(0009,1001)".to_string(),
      NaturalValue::Int(-2),
      VR::SignedShort,
    );

    let data_set = denaturalize(&natural).unwrap();

    assert_eq!(
      data_set
        .get_value(DataElementTag::new(0x0009, 0x1001))
        .map(|value| value.value_representation()),
      Ok(VR::SignedShort)
    );
    assert_eq!(
      data_set.get_int(DataElementTag::new(0x0009, 0x1001)),
      Ok(-2)
    );
  }

  #[test]
  fn vr_unresolvable_test() {
    let natural = single("(0009,1001)", NaturalValue::Int(1));

    assert_eq!(
      denaturalize(&natural),
      Err(NaturalError::VrUnresolvable {
        key: "(0009,1001)".to_string(),
        path: DataSetPath::new_with_data_element(DataElementTag::new(
          0x0009, 0x1001
        )),
      })
    );
  }

  #[test]
  fn key_invalid_test() {
    let natural = single("NotADictionaryName", NaturalValue::Int(1));

    assert_eq!(
      denaturalize(&natural),
      Err(NaturalError::KeyInvalid {
        key: "NotADictionaryName".to_string(),
        path: DataSetPath::new(),
      })
    );
  }

  #[test]
  fn value_invalid_test() {
    for value in [
      NaturalValue::String("512".to_string()),
      NaturalValue::Int(70000),
      NaturalValue::Object(NaturalDataSet::new()),
    ] {
      assert!(matches!(
        denaturalize(&single("Rows", value)),
        Err(NaturalError::ValueInvalid { .. })
      ));
    }

    assert!(matches!(
      denaturalize(&single(
        "ReferencedImageSequence",
        NaturalValue::String("x".to_string())
      )),
      Err(NaturalError::ValueInvalid { .. })
    ));

    assert!(matches!(
      denaturalize(&single(
        "ImageComments",
        NaturalValue::List(vec![
          NaturalValue::String("a".to_string()),
          NaturalValue::String("b".to_string())
        ])
      )),
      Err(NaturalError::ValueInvalid { .. })
    ));
  }

  #[test]
  fn denaturalize_sequence_test() {
    let item = single(
      "ReferencedSOPInstanceUID",
      NaturalValue::String("1.2.3".to_string()),
    );

    for (value, item_count) in [
      (NaturalValue::List(vec![]), 0),
      (NaturalValue::Object(item.clone()), 1),
      (
        NaturalValue::List(vec![
          NaturalValue::Object(item.clone()),
          NaturalValue::Object(item.clone()),
        ]),
        2,
      ),
    ] {
      let data_set =
        denaturalize(&single("ReferencedImageSequence", value)).unwrap();

      assert_eq!(
        data_set
          .get_value(dictionary::REFERENCED_IMAGE_SEQUENCE.tag)
          .and_then(|value| value.sequence_items())
          .map(|items| items.len()),
        Ok(item_count)
      );
    }
  }

  #[test]
  fn denaturalize_pixel_data_test() {
    let chunks = NaturalValue::List(vec![
      NaturalValue::Bytes(Rc::new(vec![1, 2])),
      NaturalValue::Bytes(Rc::new(vec![3, 4])),
    ]);

    let natural = single("PixelData", chunks.clone());
    let data_set = denaturalize(&natural).unwrap();
    assert_eq!(
      data_set
        .get_value(dictionary::PIXEL_DATA.tag)
        .and_then(|value| value.encapsulated_pixel_data())
        .map(|items| items.len()),
      Ok(2)
    );

    let mut natural = single("PixelData", chunks);
    let uid = transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid;
    natural.meta = Some(Box::new(single(
      "TransferSyntaxUID",
      NaturalValue::String(uid.to_string()),
    )));
    let data_set = denaturalize(&natural).unwrap();
    assert_eq!(
      data_set
        .get_value_bytes(dictionary::PIXEL_DATA.tag, VR::OtherByteString),
      Ok(&Rc::new(vec![1, 2, 3, 4]))
    );
  }
}
