//! A data element value that can hold any of the DICOM value representations.
//! Data element values are usually stored in a [`DataSet`] which maps data
//! element tags to data element values.

use std::rc::Rc;

use byteorder::{ByteOrder, LittleEndian};

use crate::{
  utils, value_representation::LengthRequirements, DataElementTag, DataError,
  DataSet, ValueRepresentation,
};

pub mod attribute_tag;
pub mod decimal_string;
pub mod integer_string;
pub mod unique_identifier;

use ValueRepresentation as VR;

/// A DICOM data element value that holds one of the following types of data:
///
/// 1. Binary value. Raw bytes for a specific VR. When the VR is a string type
///    the bytes are UTF-8. Multi-byte numbers are always stored little endian,
///    regardless of the transfer syntax they were read from.
///
/// 2. Encapsulated pixel data value. The raw items of an encapsulated pixel
///    data sequence, where the first item is the basic offset table and the
///    rest are fragments. The VR is `OB` or `OW`.
///
/// 3. Sequence value. A list of nested data sets.
///
/// Binary data is kept in an [`Rc<Vec<u8>>`] and is only decoded when a typed
/// value is requested, so non-conformant data passes through untouched.
///
#[derive(Clone, Debug, PartialEq)]
pub struct DataElementValue(RawDataElementValue);

#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::enum_variant_names)]
enum RawDataElementValue {
  BinaryValue {
    vr: ValueRepresentation,
    bytes: Rc<Vec<u8>>,
  },
  EncapsulatedPixelDataValue {
    vr: ValueRepresentation,
    items: Vec<Rc<Vec<u8>>>,
  },
  SequenceValue {
    items: Vec<DataSet>,
  },
}

impl DataElementValue {
  /// Constructs a new binary value. Sequences can't be stored as binary data.
  /// String VRs are checked for valid content, and the length must meet the
  /// VR's length requirements.
  ///
  pub fn new_binary(
    vr: ValueRepresentation,
    bytes: Rc<Vec<u8>>,
  ) -> Result<Self, DataError> {
    if vr == VR::Sequence {
      return Err(DataError::new_value_invalid(
        "Sequences can't hold binary data".to_string(),
      ));
    }

    if vr.is_encoded_string() {
      if std::str::from_utf8(&bytes).is_err() {
        return Err(DataError::new_value_invalid(format!(
          "Bytes for '{}' are not valid UTF-8: {}",
          vr,
          utils::inspect_u8_slice(&bytes, 16)
        )));
      }
    } else if vr.is_string() {
      if let Some(byte) = bytes.iter().find(|b| !is_allowed_ascii_byte(**b)) {
        return Err(DataError::new_value_invalid(format!(
          "Bytes for '{}' contain disallowed byte 0x{:02X}",
          vr, byte
        )));
      }
    }

    let value = Self::new_binary_unchecked(vr, bytes);
    value.validate_length()?;

    Ok(value)
  }

  /// Constructs a new binary value without any validation. This is used for
  /// values read from the wire, which are passed through as-is.
  ///
  pub fn new_binary_unchecked(
    vr: ValueRepresentation,
    bytes: Rc<Vec<u8>>,
  ) -> Self {
    Self(RawDataElementValue::BinaryValue { vr, bytes })
  }

  /// Constructs a new encapsulated pixel data value. The VR must be `OB` or
  /// `OW`, and every item must have an even length.
  ///
  pub fn new_encapsulated_pixel_data(
    vr: ValueRepresentation,
    items: Vec<Rc<Vec<u8>>>,
  ) -> Result<Self, DataError> {
    if vr != VR::OtherByteString && vr != VR::OtherWordString {
      return Err(DataError::new_value_invalid(format!(
        "Encapsulated pixel data can't have the '{}' VR",
        vr
      )));
    }

    let value = Self::new_encapsulated_pixel_data_unchecked(vr, items);
    value.validate_length()?;

    Ok(value)
  }

  pub fn new_encapsulated_pixel_data_unchecked(
    vr: ValueRepresentation,
    items: Vec<Rc<Vec<u8>>>,
  ) -> Self {
    Self(RawDataElementValue::EncapsulatedPixelDataValue { vr, items })
  }

  /// Constructs a new sequence value from its items.
  ///
  pub fn new_sequence(items: Vec<DataSet>) -> Self {
    Self(RawDataElementValue::SequenceValue { items })
  }

  /// Constructs a new value for any string VR from a list of strings. The
  /// strings are joined with backslashes and padded to even length. VRs that
  /// hold a single value, such as `LT`, must be given exactly one string.
  ///
  pub fn new_text(
    vr: ValueRepresentation,
    values: &[&str],
  ) -> Result<Self, DataError> {
    if !vr.is_string() {
      return Err(DataError::new_value_invalid(format!(
        "The '{}' VR doesn't hold text",
        vr
      )));
    }

    if vr == VR::UniqueIdentifier {
      return Self::new_unique_identifier(values);
    }

    if vr.is_single_valued_string() {
      if values.len() != 1 {
        return Err(DataError::new_multiplicity_mismatch());
      }
    } else if values.iter().any(|value| value.contains('\\')) {
      return Err(DataError::new_value_invalid(
        "Text value contains a backslash".to_string(),
      ));
    }

    let mut bytes = values.join("\\").into_bytes();
    vr.pad_bytes_to_even_length(&mut bytes);

    Self::new_binary(vr, Rc::new(bytes))
  }

  pub fn new_attribute_tag(
    value: &[DataElementTag],
  ) -> Result<Self, DataError> {
    Self::new_binary(VR::AttributeTag, Rc::new(attribute_tag::to_bytes(value)))
  }

  pub fn new_decimal_string(value: &[f64]) -> Result<Self, DataError> {
    Self::new_binary(
      VR::DecimalString,
      Rc::new(decimal_string::to_bytes(value)),
    )
  }

  pub fn new_integer_string(value: &[i32]) -> Result<Self, DataError> {
    Self::new_binary(
      VR::IntegerString,
      Rc::new(integer_string::to_bytes(value)),
    )
  }

  pub fn new_unique_identifier(value: &[&str]) -> Result<Self, DataError> {
    let bytes = unique_identifier::to_bytes(value)?;

    Self::new_binary(VR::UniqueIdentifier, Rc::new(bytes))
  }

  pub fn new_floating_point_single(value: &[f32]) -> Result<Self, DataError> {
    new_fixed(VR::FloatingPointSingle, value, LittleEndian::write_f32_into)
  }

  pub fn new_floating_point_double(value: &[f64]) -> Result<Self, DataError> {
    new_fixed(VR::FloatingPointDouble, value, LittleEndian::write_f64_into)
  }

  pub fn new_other_float_string(value: &[f32]) -> Result<Self, DataError> {
    new_fixed(VR::OtherFloatString, value, LittleEndian::write_f32_into)
  }

  pub fn new_other_double_string(value: &[f64]) -> Result<Self, DataError> {
    new_fixed(VR::OtherDoubleString, value, LittleEndian::write_f64_into)
  }

  pub fn new_signed_short(value: &[i16]) -> Result<Self, DataError> {
    new_fixed(VR::SignedShort, value, LittleEndian::write_i16_into)
  }

  pub fn new_unsigned_short(value: &[u16]) -> Result<Self, DataError> {
    new_fixed(VR::UnsignedShort, value, LittleEndian::write_u16_into)
  }

  pub fn new_signed_long(value: &[i32]) -> Result<Self, DataError> {
    new_fixed(VR::SignedLong, value, LittleEndian::write_i32_into)
  }

  pub fn new_unsigned_long(value: &[u32]) -> Result<Self, DataError> {
    new_fixed(VR::UnsignedLong, value, LittleEndian::write_u32_into)
  }

  pub fn new_signed_very_long(value: &[i64]) -> Result<Self, DataError> {
    new_fixed(VR::SignedVeryLong, value, LittleEndian::write_i64_into)
  }

  pub fn new_unsigned_very_long(value: &[u64]) -> Result<Self, DataError> {
    new_fixed(VR::UnsignedVeryLong, value, LittleEndian::write_u64_into)
  }

  /// Returns the value representation for a data element value.
  ///
  pub fn value_representation(&self) -> ValueRepresentation {
    match &self.0 {
      RawDataElementValue::BinaryValue { vr, .. }
      | RawDataElementValue::EncapsulatedPixelDataValue { vr, .. } => *vr,
      RawDataElementValue::SequenceValue { .. } => VR::Sequence,
    }
  }

  /// For data element values that hold binary data, returns that data.
  ///
  pub fn bytes(&self) -> Result<&Rc<Vec<u8>>, DataError> {
    match &self.0 {
      RawDataElementValue::BinaryValue { bytes, .. } => Ok(bytes),
      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// For data element values that hold encapsulated pixel data, returns its
  /// items.
  ///
  pub fn encapsulated_pixel_data(
    &self,
  ) -> Result<&Vec<Rc<Vec<u8>>>, DataError> {
    match &self.0 {
      RawDataElementValue::EncapsulatedPixelDataValue { items, .. } => {
        Ok(items)
      }
      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// For data element values that hold a sequence, returns its items.
  ///
  pub fn sequence_items(&self) -> Result<&Vec<DataSet>, DataError> {
    match &self.0 {
      RawDataElementValue::SequenceValue { items } => Ok(items),
      _ => Err(DataError::new_value_not_present()),
    }
  }

  pub fn sequence_items_mut(&mut self) -> Result<&mut Vec<DataSet>, DataError> {
    match &mut self.0 {
      RawDataElementValue::SequenceValue { items } => Ok(items),
      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// Returns the number of values held, which is what a data element's value
  /// multiplicity constrains.
  ///
  /// Text is counted by splitting on backslashes, with an empty string
  /// counting as no values. Fixed-width numbers and tags are counted by
  /// dividing the length by the size of one value. All other binary data,
  /// encapsulated pixel data, and sequences count as a single value.
  ///
  pub fn value_count(&self) -> usize {
    match &self.0 {
      RawDataElementValue::BinaryValue { vr, bytes } => {
        value_count(*vr, bytes)
      }
      _ => 1,
    }
  }

  /// Returns the string contained in a data element value. This is only
  /// supported for string VRs, and there must be exactly one value.
  ///
  pub fn get_string(&self) -> Result<&str, DataError> {
    match self.get_strings()?.as_slice() {
      [s] => Ok(*s),
      _ => Err(DataError::new_multiplicity_mismatch()),
    }
  }

  /// Returns the strings contained in a data element value, split on the
  /// backslash delimiter where the VR allows multiple values. Trailing
  /// padding is removed from each string.
  ///
  pub fn get_strings(&self) -> Result<Vec<&str>, DataError> {
    let (vr, bytes) = match &self.0 {
      RawDataElementValue::BinaryValue { vr, bytes } if vr.is_string() => {
        (*vr, bytes)
      }
      _ => return Err(DataError::new_value_not_present()),
    };

    let string = std::str::from_utf8(bytes).map_err(|_| {
      DataError::new_value_invalid(format!(
        "String bytes are not valid UTF-8: {}",
        utils::inspect_u8_slice(bytes, 16)
      ))
    })?;

    if vr.is_single_valued_string() {
      return Ok(vec![utils::trim_end_padding(string)]);
    }

    Ok(string.split('\\').map(utils::trim_end_padding).collect())
  }

  /// Returns the integer contained in a data element value. There must be
  /// exactly one integer present.
  ///
  pub fn get_int(&self) -> Result<i64, DataError> {
    match self.get_ints()?.as_slice() {
      [i] => Ok(*i),
      _ => Err(DataError::new_multiplicity_mismatch()),
    }
  }

  /// Returns the integers contained in a data element value. This is supported
  /// for `IS`, `SS`, `US`, `SL`, and `UL` values.
  ///
  pub fn get_ints(&self) -> Result<Vec<i64>, DataError> {
    let RawDataElementValue::BinaryValue { vr, bytes } = &self.0 else {
      return Err(DataError::new_value_not_present());
    };

    match vr {
      VR::IntegerString => Ok(
        integer_string::from_bytes(bytes)?
          .into_iter()
          .map(i64::from)
          .collect(),
      ),

      VR::SignedShort => {
        read_fixed(*vr, bytes, |b| LittleEndian::read_i16(b) as i64)
      }
      VR::UnsignedShort => {
        read_fixed(*vr, bytes, |b| LittleEndian::read_u16(b) as i64)
      }
      VR::SignedLong => {
        read_fixed(*vr, bytes, |b| LittleEndian::read_i32(b) as i64)
      }
      VR::UnsignedLong => {
        read_fixed(*vr, bytes, |b| LittleEndian::read_u32(b) as i64)
      }

      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// Returns the big integer contained in a data element value. There must be
  /// exactly one integer present.
  ///
  pub fn get_big_int(&self) -> Result<i128, DataError> {
    match self.get_big_ints()?.as_slice() {
      [i] => Ok(*i),
      _ => Err(DataError::new_multiplicity_mismatch()),
    }
  }

  /// Returns the integers contained in a data element value as `i128`. This
  /// is supported for `SV` and `UV` values as well as every VR supported by
  /// [`Self::get_ints()`].
  ///
  pub fn get_big_ints(&self) -> Result<Vec<i128>, DataError> {
    match &self.0 {
      RawDataElementValue::BinaryValue {
        vr: vr @ VR::SignedVeryLong,
        bytes,
      } => read_fixed(*vr, bytes, |b| LittleEndian::read_i64(b) as i128),

      RawDataElementValue::BinaryValue {
        vr: vr @ VR::UnsignedVeryLong,
        bytes,
      } => read_fixed(*vr, bytes, |b| LittleEndian::read_u64(b) as i128),

      _ => Ok(self.get_ints()?.into_iter().map(i128::from).collect()),
    }
  }

  /// Returns the float contained in a data element value. There must be
  /// exactly one float present.
  ///
  pub fn get_float(&self) -> Result<f64, DataError> {
    match self.get_floats()?.as_slice() {
      [f] => Ok(*f),
      _ => Err(DataError::new_multiplicity_mismatch()),
    }
  }

  /// Returns the floats contained in a data element value. This is supported
  /// for `DS`, `FL`, `FD`, `OF`, and `OD` values.
  ///
  pub fn get_floats(&self) -> Result<Vec<f64>, DataError> {
    let RawDataElementValue::BinaryValue { vr, bytes } = &self.0 else {
      return Err(DataError::new_value_not_present());
    };

    match vr {
      VR::DecimalString => decimal_string::from_bytes(bytes),

      VR::FloatingPointSingle | VR::OtherFloatString => {
        read_fixed(*vr, bytes, |b| LittleEndian::read_f32(b) as f64)
      }

      VR::FloatingPointDouble | VR::OtherDoubleString => {
        read_fixed(*vr, bytes, LittleEndian::read_f64)
      }

      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// Returns the tags contained in an `AttributeTag` value.
  ///
  pub fn get_attribute_tags(&self) -> Result<Vec<DataElementTag>, DataError> {
    match &self.0 {
      RawDataElementValue::BinaryValue {
        vr: VR::AttributeTag,
        bytes,
      } => attribute_tag::from_bytes(bytes),
      _ => Err(DataError::new_value_not_present()),
    }
  }

  /// Checks that the length of a data element value is valid for its VR.
  ///
  pub fn validate_length(&self) -> Result<(), DataError> {
    match &self.0 {
      RawDataElementValue::BinaryValue { vr, bytes } => {
        let LengthRequirements {
          bytes_max,
          bytes_multiple_of,
        } = vr.length_requirements();

        let bytes_multiple_of = bytes_multiple_of.unwrap_or(2);

        if bytes.len() > bytes_max {
          return Err(DataError::new_value_length_invalid(
            *vr,
            bytes.len(),
            format!("Must not exceed {} bytes", bytes_max),
          ));
        }

        if bytes.len() % bytes_multiple_of != 0 {
          return Err(DataError::new_value_length_invalid(
            *vr,
            bytes.len(),
            format!("Must be a multiple of {} bytes", bytes_multiple_of),
          ));
        }
      }

      RawDataElementValue::EncapsulatedPixelDataValue { vr, items } => {
        for item in items {
          if item.len() > 0xFFFF_FFFE || item.len() % 2 != 0 {
            return Err(DataError::new_value_length_invalid(
              *vr,
              item.len(),
              "Items must have an even length".to_string(),
            ));
          }
        }
      }

      RawDataElementValue::SequenceValue { .. } => (),
    }

    Ok(())
  }
}

/// Returns whether a byte may appear in a string VR restricted to the default
/// character repertoire. Control characters other than ESC and the ones used
/// for text layout are disallowed.
///
fn is_allowed_ascii_byte(byte: u8) -> bool {
  matches!(byte, 0x00 | 0x09 | 0x0A | 0x0C | 0x0D | 0x1B | 0x20..=0x7E)
}

/// Counts the values in a binary value. Strings are counted by splitting on
/// the backslash delimiter after trailing padding is removed.
///
pub fn value_count(vr: ValueRepresentation, bytes: &[u8]) -> usize {
  if vr.is_string() {
    let trimmed = bytes
      .iter()
      .rposition(|b| *b != b' ' && *b != 0)
      .map(|i| &bytes[..=i])
      .unwrap_or(&[]);

    if trimmed.is_empty() {
      0
    } else if vr.is_single_valued_string() {
      1
    } else {
      trimmed.iter().filter(|b| **b == b'\\').count() + 1
    }
  } else {
    binary_value_count(vr, bytes.len())
  }
}

/// Counts the values in a non-string binary value given only its length, as
/// is known once a data element header has been read.
///
pub fn binary_value_count(vr: ValueRepresentation, length: usize) -> usize {
  match (vr.fixed_value_size(), is_blob(vr)) {
    (Some(size), false) => length / size,
    _ => usize::from(length > 0),
  }
}

/// The `O*` VRs hold a single opaque blob even though their content has a
/// fixed word size.
///
fn is_blob(vr: ValueRepresentation) -> bool {
  matches!(
    vr,
    VR::OtherDoubleString
      | VR::OtherFloatString
      | VR::OtherLongString
      | VR::OtherVeryLongString
      | VR::OtherWordString
  )
}

/// Encodes fixed-width numbers as little endian bytes and creates a binary
/// value from them.
///
fn new_fixed<T>(
  vr: ValueRepresentation,
  values: &[T],
  write: fn(&[T], &mut [u8]),
) -> Result<DataElementValue, DataError> {
  let mut bytes = vec![0; std::mem::size_of_val(values)];
  write(values, &mut bytes);

  DataElementValue::new_binary(vr, Rc::new(bytes))
}

/// Decodes fixed-width little endian numbers from a binary value.
///
fn read_fixed<T>(
  vr: ValueRepresentation,
  bytes: &[u8],
  read: impl Fn(&[u8]) -> T,
) -> Result<Vec<T>, DataError> {
  let size = vr.fixed_value_size().unwrap_or(1);

  if bytes.len() % size != 0 {
    return Err(DataError::new_value_invalid(format!(
      "'{}' data length {} is not a multiple of {}",
      vr,
      bytes.len(),
      size
    )));
  }

  Ok(bytes.chunks_exact(size).map(read).collect())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_binary_test() {
    assert!(DataElementValue::new_binary(
      VR::Sequence,
      Rc::new(vec![])
    )
    .is_err());

    assert_eq!(
      DataElementValue::new_binary(VR::CodeString, Rc::new(vec![b'A', 0x01])),
      Err(DataError::new_value_invalid(
        "Bytes for 'CS' contain disallowed byte 0x01".to_string()
      ))
    );

    assert_eq!(
      DataElementValue::new_binary(VR::LongString, Rc::new(vec![0xD0, 0x20])),
      Err(DataError::new_value_invalid(
        "Bytes for 'LO' are not valid UTF-8: [D0 20]".to_string()
      ))
    );

    assert_eq!(
      DataElementValue::new_binary(VR::UnsignedLong, Rc::new(vec![0; 6])),
      Err(DataError::new_value_length_invalid(
        VR::UnsignedLong,
        6,
        "Must be a multiple of 4 bytes".to_string()
      ))
    );

    assert_eq!(
      DataElementValue::new_binary(VR::Date, Rc::new(b"2024010100".to_vec())),
      Err(DataError::new_value_length_invalid(
        VR::Date,
        10,
        "Must not exceed 8 bytes".to_string()
      ))
    );
  }

  #[test]
  fn new_encapsulated_pixel_data_test() {
    assert!(DataElementValue::new_encapsulated_pixel_data(
      VR::OtherByteString,
      vec![Rc::new(vec![]), Rc::new(vec![1, 2])]
    )
    .is_ok());

    assert!(DataElementValue::new_encapsulated_pixel_data(
      VR::OtherByteString,
      vec![Rc::new(vec![1, 2, 3])]
    )
    .is_err());

    assert!(DataElementValue::new_encapsulated_pixel_data(
      VR::UnsignedShort,
      vec![]
    )
    .is_err());
  }

  #[test]
  fn new_text_test() {
    assert_eq!(
      DataElementValue::new_text(VR::CodeString, &["ORIGINAL", "PRIMARY"])
        .unwrap()
        .bytes()
        .unwrap()
        .as_slice(),
      b"ORIGINAL\\PRIMARY"
    );

    assert_eq!(
      DataElementValue::new_text(VR::PersonName, &["Doe^Jane"])
        .unwrap()
        .bytes()
        .unwrap()
        .as_slice(),
      b"Doe^Jane"
    );

    assert_eq!(
      DataElementValue::new_text(VR::LongString, &["abc"])
        .unwrap()
        .bytes()
        .unwrap()
        .as_slice(),
      b"abc "
    );

    assert_eq!(
      DataElementValue::new_text(VR::UniqueIdentifier, &["1.2.3"])
        .unwrap()
        .bytes()
        .unwrap()
        .as_slice(),
      b"1.2.3\0"
    );

    assert_eq!(
      DataElementValue::new_text(VR::LongText, &["a", "b"]),
      Err(DataError::new_multiplicity_mismatch())
    );

    assert!(DataElementValue::new_text(VR::ShortString, &["a\\b"]).is_err());
    assert!(DataElementValue::new_text(VR::UnsignedShort, &["1"]).is_err());
  }

  #[test]
  fn value_count_test() {
    let text = |vr, s: &[u8]| value_count(vr, s);

    assert_eq!(text(VR::CodeString, b""), 0);
    assert_eq!(text(VR::CodeString, b"  "), 0);
    assert_eq!(text(VR::CodeString, b"A "), 1);
    assert_eq!(text(VR::CodeString, b"A\\B\\C "), 3);
    assert_eq!(text(VR::CodeString, b"\\"), 2);
    assert_eq!(text(VR::LongText, b"A\\B"), 1);
    assert_eq!(text(VR::UniqueIdentifier, b"1.2\0"), 1);

    assert_eq!(value_count(VR::UnsignedShort, &[0; 6]), 3);
    assert_eq!(value_count(VR::AttributeTag, &[0; 8]), 2);
    assert_eq!(value_count(VR::FloatingPointDouble, &[]), 0);
    assert_eq!(value_count(VR::OtherWordString, &[0; 8]), 1);
    assert_eq!(value_count(VR::OtherByteString, &[]), 0);
    assert_eq!(value_count(VR::Unknown, &[1, 2]), 1);

    assert_eq!(DataElementValue::new_sequence(vec![]).value_count(), 1);
  }

  #[test]
  fn get_strings_test() {
    let value = DataElementValue::new_binary_unchecked(
      VR::CodeString,
      Rc::new(b"A\\B \\C ".to_vec()),
    );
    assert_eq!(value.get_strings(), Ok(vec!["A", "B", "C"]));
    assert_eq!(value.get_string(), Err(DataError::new_multiplicity_mismatch()));

    let value = DataElementValue::new_binary_unchecked(
      VR::ShortText,
      Rc::new(b"A\\B ".to_vec()),
    );
    assert_eq!(value.get_string(), Ok("A\\B"));

    let value = DataElementValue::new_binary_unchecked(
      VR::UniqueIdentifier,
      Rc::new(b"1.2.840\0".to_vec()),
    );
    assert_eq!(value.get_string(), Ok("1.2.840"));

    assert_eq!(
      DataElementValue::new_unsigned_short(&[1]).unwrap().get_strings(),
      Err(DataError::new_value_not_present())
    );

    assert!(DataElementValue::new_binary_unchecked(
      VR::LongString,
      Rc::new(vec![0xD0, 0x20])
    )
    .get_string()
    .is_err());
  }

  #[test]
  fn get_ints_test() {
    assert_eq!(
      DataElementValue::new_unsigned_short(&[1, 65535])
        .unwrap()
        .get_ints(),
      Ok(vec![1, 65535])
    );

    assert_eq!(
      DataElementValue::new_signed_short(&[-2]).unwrap().get_int(),
      Ok(-2)
    );

    assert_eq!(
      DataElementValue::new_unsigned_long(&[0xFFFF_FFFF])
        .unwrap()
        .get_int(),
      Ok(0xFFFF_FFFF)
    );

    assert_eq!(
      DataElementValue::new_signed_long(&[-5, 5]).unwrap().get_int(),
      Err(DataError::new_multiplicity_mismatch())
    );

    assert_eq!(
      DataElementValue::new_integer_string(&[12, -3])
        .unwrap()
        .get_ints(),
      Ok(vec![12, -3])
    );

    assert_eq!(
      DataElementValue::new_binary_unchecked(
        VR::UnsignedShort,
        Rc::new(vec![0; 3])
      )
      .get_ints(),
      Err(DataError::new_value_invalid(
        "'US' data length 3 is not a multiple of 2".to_string()
      ))
    );

    assert_eq!(
      DataElementValue::new_floating_point_single(&[1.0])
        .unwrap()
        .get_ints(),
      Err(DataError::new_value_not_present())
    );
  }

  #[test]
  fn get_big_ints_test() {
    assert_eq!(
      DataElementValue::new_unsigned_very_long(&[u64::MAX])
        .unwrap()
        .get_big_int(),
      Ok(u64::MAX as i128)
    );

    assert_eq!(
      DataElementValue::new_signed_very_long(&[i64::MIN, 0])
        .unwrap()
        .get_big_ints(),
      Ok(vec![i64::MIN as i128, 0])
    );

    assert_eq!(
      DataElementValue::new_unsigned_short(&[7])
        .unwrap()
        .get_big_int(),
      Ok(7)
    );
  }

  #[test]
  fn get_floats_test() {
    assert_eq!(
      DataElementValue::new_floating_point_single(&[1.5, -2.0])
        .unwrap()
        .get_floats(),
      Ok(vec![1.5, -2.0])
    );

    assert_eq!(
      DataElementValue::new_floating_point_double(&[1.0e-300])
        .unwrap()
        .get_float(),
      Ok(1.0e-300)
    );

    assert_eq!(
      DataElementValue::new_other_double_string(&[1.0, 2.0])
        .unwrap()
        .get_floats(),
      Ok(vec![1.0, 2.0])
    );

    assert_eq!(
      DataElementValue::new_decimal_string(&[1.25, 3.0])
        .unwrap()
        .get_floats(),
      Ok(vec![1.25, 3.0])
    );
  }

  #[test]
  fn get_attribute_tags_test() {
    let tags = [
      DataElementTag::new(0x0008, 0x0020),
      DataElementTag::new(0x7FE0, 0x0010),
    ];

    assert_eq!(
      DataElementValue::new_attribute_tag(&tags)
        .unwrap()
        .get_attribute_tags(),
      Ok(tags.to_vec())
    );
  }

  #[test]
  fn sequence_items_test() {
    let mut value = DataElementValue::new_sequence(vec![DataSet::new()]);
    assert_eq!(value.value_representation(), VR::Sequence);
    assert_eq!(value.sequence_items().map(|items| items.len()), Ok(1));

    value.sequence_items_mut().unwrap().push(DataSet::new());
    assert_eq!(value.sequence_items().map(|items| items.len()), Ok(2));

    assert!(value.bytes().is_err());
    assert!(value.encapsulated_pixel_data().is_err());
  }
}
