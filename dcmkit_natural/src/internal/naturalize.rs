//! Conversion of data sets and data element values into natural form.

use std::rc::Rc;

use dcmkit_core::data_element_value::{
  attribute_tag, decimal_string, integer_string,
};
use dcmkit_core::{
  dictionary, utils, DataElementTag, DataElementValue, DataSet,
  ValueRepresentation,
};

use crate::internal::natural_keys;
use crate::{BulkDataForm, NaturalDataSet, NaturalValue, NaturalizeConfig};

use ValueRepresentation as VR;

/// Converts a data set into a natural data set. Its File Meta Information data
/// elements are moved into the natural data set's `meta`.
///
pub fn naturalize_data_set(
  data_set: &DataSet,
  config: &NaturalizeConfig,
) -> NaturalDataSet {
  let mut natural = NaturalDataSet::new();
  let mut meta = NaturalDataSet::new();

  for (tag, value) in data_set.iter() {
    let target = if dictionary::is_file_meta_information_tag(*tag) {
      &mut meta
    } else {
      &mut natural
    };

    insert_natural_value(
      target,
      *tag,
      value.value_representation(),
      naturalize_value(value, config),
    );
  }

  if !meta.is_empty() {
    natural.meta = Some(Box::new(meta));
  }

  natural
}

/// Converts the items of a sequence into natural form. A single item becomes
/// an object, and any other number of items becomes a list of objects.
///
pub fn naturalize_sequence_items(
  mut items: Vec<NaturalDataSet>,
) -> NaturalValue {
  if items.len() == 1 {
    if let Some(item) = items.pop() {
      return NaturalValue::Object(item);
    }
  }

  NaturalValue::List(items.into_iter().map(NaturalValue::Object).collect())
}

/// Converts the fragments of encapsulated pixel data into natural form.
///
pub fn naturalize_fragments(fragments: &[Rc<Vec<u8>>]) -> NaturalValue {
  NaturalValue::List(
    fragments
      .iter()
      .cloned()
      .map(NaturalValue::Bytes)
      .collect(),
  )
}

/// Inserts a natural value into a natural data set, adding a VR map entry if
/// its VR can't be recovered from the dictionary.
///
pub fn insert_natural_value(
  natural: &mut NaturalDataSet,
  tag: DataElementTag,
  vr: ValueRepresentation,
  value: NaturalValue,
) {
  let key = natural_keys::natural_key(tag);

  if natural_keys::needs_vr_map_entry(tag, vr) {
    natural.insert_with_vr(key, value, vr);
  } else {
    natural.insert(key, value);
  }
}

/// Converts a data element value into natural form.
///
pub fn naturalize_value(
  value: &DataElementValue,
  config: &NaturalizeConfig,
) -> NaturalValue {
  if let Ok(bytes) = value.bytes() {
    return naturalize_bytes(value.value_representation(), bytes, config);
  }

  if let Ok(fragments) = value.encapsulated_pixel_data() {
    return naturalize_fragments(fragments);
  }

  if let Ok(items) = value.sequence_items() {
    let items = items
      .iter()
      .map(|item| naturalize_items_data_set(item, config))
      .collect();

    return naturalize_sequence_items(items);
  }

  // A value is always one of the three kinds handled above
  unreachable!();
}

/// Sequence items don't have File Meta Information, so any group 0x0002 data
/// elements in them stay in place.
///
fn naturalize_items_data_set(
  data_set: &DataSet,
  config: &NaturalizeConfig,
) -> NaturalDataSet {
  let mut natural = NaturalDataSet::new();

  for (tag, value) in data_set.iter() {
    insert_natural_value(
      &mut natural,
      *tag,
      value.value_representation(),
      naturalize_value(value, config),
    );
  }

  natural
}

/// Converts the bytes of a binary value into natural form.
///
/// `IntegerString` and `DecimalString` values become numbers whenever they
/// parse, so their text formatting isn't kept. Numeric text that doesn't
/// parse is kept as text. Values that can't be converted according to their
/// VR without losing information, e.g. invalid UTF-8, fall back to bytes.
///
pub fn naturalize_bytes(
  vr: ValueRepresentation,
  bytes: &Rc<Vec<u8>>,
  config: &NaturalizeConfig,
) -> NaturalValue {
  let value = match vr {
    VR::SignedShort
    | VR::UnsignedShort
    | VR::SignedLong
    | VR::UnsignedLong
    | VR::SignedVeryLong
    | VR::UnsignedVeryLong => {
      DataElementValue::new_binary_unchecked(vr, bytes.clone())
        .get_big_ints()
        .ok()
        .map(|ints| collapse(ints.into_iter().map(NaturalValue::Int)))
    }

    VR::FloatingPointSingle | VR::FloatingPointDouble => {
      DataElementValue::new_binary_unchecked(vr, bytes.clone())
        .get_floats()
        .ok()
        .map(|floats| collapse(floats.into_iter().map(NaturalValue::Float)))
    }

    VR::IntegerString => match integer_string::from_bytes(bytes) {
      Ok(ints) if !ints.is_empty() => Some(collapse(
        ints.into_iter().map(|i| NaturalValue::Int(i.into())),
      )),
      _ => naturalize_text(vr, bytes),
    },

    VR::DecimalString => match decimal_string::from_bytes(bytes) {
      Ok(floats)
        if !floats.is_empty() && floats.iter().all(|f| f.is_finite()) =>
      {
        Some(collapse(floats.into_iter().map(NaturalValue::Float)))
      }
      _ => naturalize_text(vr, bytes),
    },

    VR::AttributeTag => attribute_tag::from_bytes(bytes).ok().map(|tags| {
      collapse(
        tags
          .into_iter()
          .map(|tag| NaturalValue::String(tag.to_hex_string())),
      )
    }),

    vr if vr.is_string() => naturalize_text(vr, bytes),

    _ => None,
  };

  value.unwrap_or_else(|| naturalize_bulk_data(bytes, config))
}

/// Converts text into natural form. Returns `None` if the text isn't valid
/// UTF-8, or if it isn't padded the way it would be when written back.
///
fn naturalize_text(
  vr: ValueRepresentation,
  bytes: &[u8],
) -> Option<NaturalValue> {
  let s = std::str::from_utf8(bytes).ok()?;
  let s = utils::trim_end_padding(s);

  let mut padded = s.as_bytes().to_vec();
  vr.pad_bytes_to_even_length(&mut padded);
  if padded != bytes {
    return None;
  }

  if s.is_empty() {
    return Some(NaturalValue::List(vec![]));
  }

  if vr.is_single_valued_string() {
    return Some(NaturalValue::String(s.to_string()));
  }

  Some(collapse(
    s.split('\\').map(|s| NaturalValue::String(s.to_string())),
  ))
}

fn naturalize_bulk_data(
  bytes: &Rc<Vec<u8>>,
  config: &NaturalizeConfig,
) -> NaturalValue {
  match config.bulk_data_form {
    BulkDataForm::Inline => NaturalValue::Bytes(bytes.clone()),

    BulkDataForm::Chunked { chunk_size } => NaturalValue::List(
      bytes
        .chunks(chunk_size.max(1))
        .map(|chunk| NaturalValue::Bytes(Rc::new(chunk.to_vec())))
        .collect(),
    ),
  }
}

/// A single value is stored as a scalar, and any other number of values as a
/// list.
///
fn collapse(values: impl Iterator<Item = NaturalValue>) -> NaturalValue {
  let mut values: Vec<NaturalValue> = values.collect();

  if values.len() == 1 {
    if let Some(value) = values.pop() {
      return value;
    }
  }

  NaturalValue::List(values)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn naturalize(vr: ValueRepresentation, bytes: &[u8]) -> NaturalValue {
    naturalize_bytes(
      vr,
      &Rc::new(bytes.to_vec()),
      &NaturalizeConfig::default(),
    )
  }

  fn string(s: &str) -> NaturalValue {
    NaturalValue::String(s.to_string())
  }

  #[test]
  fn naturalize_text_test() {
    assert_eq!(naturalize(VR::PersonName, b"Doe^John"), string("Doe^John"));
    assert_eq!(naturalize(VR::ShortString, b"ABC "), string("ABC"));
    assert_eq!(
      naturalize(VR::CodeString, b"ORIGINAL\\PRIMARY "),
      NaturalValue::List(vec![string("ORIGINAL"), string("PRIMARY")])
    );
    assert_eq!(
      naturalize(VR::UniqueIdentifier, b"1.2.3\0"),
      string("1.2.3")
    );
    assert_eq!(naturalize(VR::LongString, b""), NaturalValue::List(vec![]));
    assert_eq!(naturalize(VR::LongText, b"A\\B "), string("A\\B"));
    assert_eq!(naturalize(VR::Date, b"20240131"), string("20240131"));
  }

  #[test]
  fn naturalize_non_canonical_text_test() {
    assert_eq!(
      naturalize(VR::ShortString, b"AB  "),
      NaturalValue::Bytes(Rc::new(b"AB  ".to_vec()))
    );
    assert_eq!(
      naturalize(VR::LongString, &[0xFF, 0x20]),
      NaturalValue::Bytes(Rc::new(vec![0xFF, 0x20]))
    );
  }

  #[test]
  fn naturalize_numbers_test() {
    assert_eq!(
      naturalize(VR::UnsignedShort, &[0, 2]),
      NaturalValue::Int(512)
    );
    assert_eq!(
      naturalize(VR::SignedShort, &[0xFF, 0xFF, 1, 0]),
      NaturalValue::List(vec![NaturalValue::Int(-1), NaturalValue::Int(1)])
    );
    assert_eq!(
      naturalize(VR::UnsignedVeryLong, &[0xFF; 8]),
      NaturalValue::Int(u64::MAX.into())
    );
    assert_eq!(naturalize(VR::UnsignedLong, &[]), NaturalValue::List(vec![]));
    assert_eq!(
      naturalize(VR::UnsignedShort, &[1, 2, 3]),
      NaturalValue::Bytes(Rc::new(vec![1, 2, 3]))
    );

    assert_eq!(
      naturalize(VR::FloatingPointDouble, &1.5f64.to_le_bytes()),
      NaturalValue::Float(1.5)
    );
    assert_eq!(naturalize(VR::IntegerString, b"12"), NaturalValue::Int(12));
    assert_eq!(naturalize(VR::IntegerString, b" 12 "), NaturalValue::Int(12));
    assert_eq!(
      naturalize(VR::IntegerString, b"+4\\-16 "),
      NaturalValue::List(vec![NaturalValue::Int(4), NaturalValue::Int(-16)])
    );
    assert_eq!(naturalize(VR::IntegerString, b"1.5 "), string("1.5"));
    assert_eq!(
      naturalize(VR::DecimalString, b"0.5 "),
      NaturalValue::Float(0.5)
    );
    assert_eq!(
      naturalize(VR::DecimalString, b"100 "),
      NaturalValue::Float(100.0)
    );
    assert_eq!(
      naturalize(VR::DecimalString, b"1.50"),
      NaturalValue::Float(1.5)
    );
    assert_eq!(
      naturalize(VR::DecimalString, b"1e3 "),
      NaturalValue::Float(1000.0)
    );
    assert_eq!(naturalize(VR::DecimalString, b"NaN "), string("NaN"));
    assert_eq!(naturalize(VR::DecimalString, b"AB"), string("AB"));
    assert_eq!(
      naturalize(VR::DecimalString, b"1\\2.5 "),
      NaturalValue::List(vec![
        NaturalValue::Float(1.0),
        NaturalValue::Float(2.5)
      ])
    );
  }

  #[test]
  fn naturalize_attribute_tag_test() {
    assert_eq!(
      naturalize(VR::AttributeTag, &[0x10, 0x00, 0x20, 0x00]),
      string("00100020")
    );
  }

  #[test]
  fn naturalize_bulk_data_test() {
    let bytes = Rc::new(vec![1, 2, 3, 4, 5]);

    assert_eq!(
      naturalize(VR::OtherByteString, &bytes),
      NaturalValue::Bytes(bytes.clone())
    );

    let config = NaturalizeConfig {
      bulk_data_form: BulkDataForm::Chunked { chunk_size: 2 },
    };

    assert_eq!(
      naturalize_bytes(VR::OtherByteString, &bytes, &config),
      NaturalValue::List(vec![
        NaturalValue::Bytes(Rc::new(vec![1, 2])),
        NaturalValue::Bytes(Rc::new(vec![3, 4])),
        NaturalValue::Bytes(Rc::new(vec![5])),
      ])
    );
  }

  #[test]
  fn naturalize_sequence_items_test() {
    let item = NaturalDataSet::new();

    assert_eq!(naturalize_sequence_items(vec![]), NaturalValue::List(vec![]));
    assert_eq!(
      naturalize_sequence_items(vec![item.clone()]),
      NaturalValue::Object(item.clone())
    );
    assert_eq!(
      naturalize_sequence_items(vec![item.clone(), item.clone()]),
      NaturalValue::List(vec![
        NaturalValue::Object(item.clone()),
        NaturalValue::Object(item)
      ])
    );
  }
}
