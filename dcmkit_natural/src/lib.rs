//! Converts data sets to and from their natural form, in which data elements
//! are keyed by dictionary name and hold plain values such as strings,
//! numbers, lists, and nested objects.
//!
//! A natural data set carries enough extra information, in its VR map and
//! its `meta`, that converting it back gives the original data set exactly.

pub mod natural_config;
pub mod natural_data_set;
pub mod natural_error;
pub mod natural_value;
pub mod transforms;

mod internal;

use dcmkit_core::{DataSet, DataSetPath};
use dcmkit_p10::{P10PartListener, P10ReadContext, P10WriteConfig};

pub use natural_config::{BulkDataForm, NaturalizeConfig};
pub use natural_data_set::{NaturalDataSet, META_KEY, VR_MAP_KEY};
pub use natural_error::NaturalError;
pub use natural_value::NaturalValue;
pub use transforms::p10_natural_transform::P10NaturalTransform;

/// Converts a data set into natural form. This never fails: values that can't
/// be represented exactly as plain strings or numbers are kept as bytes.
///
pub fn naturalize(
  data_set: &DataSet,
  config: &NaturalizeConfig,
) -> NaturalDataSet {
  internal::naturalize::naturalize_data_set(data_set, config)
}

/// Converts a natural data set back into a data set. This is the inverse of
/// [`naturalize()`].
///
/// Fails if a data element's key isn't a dictionary name or tag, if its VR
/// can't be determined, or if its value doesn't suit its VR.
///
pub fn denaturalize(natural: &NaturalDataSet) -> Result<DataSet, NaturalError> {
  internal::denaturalize::denaturalize_data_set(
    natural,
    None,
    &mut DataSetPath::new(),
  )
}

/// Reads DICOM P10 data from an in-memory vector of bytes directly into a
/// natural data set.
///
pub fn read_natural_bytes(
  bytes: Vec<u8>,
  config: &NaturalizeConfig,
) -> Result<NaturalDataSet, NaturalError> {
  let mut context = P10ReadContext::new();
  context.write_bytes(bytes, true)?;

  let mut transform = P10NaturalTransform::new(*config);

  loop {
    for part in context.read_parts()? {
      transform.add_part(&part)?;
    }

    if let Ok(natural) = transform.final_natural_data_set() {
      return Ok(natural);
    }
  }
}

/// Reads DICOM P10 data from a read stream directly into a natural data set.
/// This will attempt to consume all data available in the read stream.
///
pub fn read_natural_stream(
  stream: &mut dyn std::io::Read,
  config: &NaturalizeConfig,
) -> Result<NaturalDataSet, NaturalError> {
  let mut context = P10ReadContext::new();
  let mut transform = P10NaturalTransform::new(*config);

  loop {
    for part in dcmkit_p10::read_parts_from_stream(stream, &mut context)? {
      transform.add_part(&part)?;
    }

    if let Ok(natural) = transform.final_natural_data_set() {
      return Ok(natural);
    }
  }
}

/// Writes a natural data set to an in-memory vector of DICOM P10 bytes. The
/// natural data set is fully converted back into a data set before any bytes
/// are written, so an invalid natural data set produces no output.
///
pub fn write_natural_bytes(
  natural: &NaturalDataSet,
  config: Option<P10WriteConfig>,
) -> Result<Vec<u8>, NaturalError> {
  let data_set = denaturalize(natural)?;

  let bytes = dcmkit_p10::write_bytes(&data_set, config)
    .map_err(NaturalError::P10Error)?;

  tracing::debug!(
    "Wrote natural data set with {} data elements as {} bytes",
    natural.len(),
    bytes.len()
  );

  Ok(bytes)
}

/// Adds functions to [`DataSet`] for converting to and from natural form.
///
pub trait DataSetNaturalExtensions
where
  Self: Sized,
{
  /// Converts a data set into natural form.
  ///
  fn to_natural(&self, config: &NaturalizeConfig) -> NaturalDataSet;

  /// Converts a natural data set back into a data set.
  ///
  fn from_natural(natural: &NaturalDataSet) -> Result<Self, NaturalError>;
}

impl DataSetNaturalExtensions for DataSet {
  fn to_natural(&self, config: &NaturalizeConfig) -> NaturalDataSet {
    naturalize(self, config)
  }

  fn from_natural(natural: &NaturalDataSet) -> Result<Self, NaturalError> {
    denaturalize(natural)
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use dcmkit_core::{
    dictionary, transfer_syntax, DataElementTag, DataElementValue,
    ValueRepresentation,
  };

  use super::*;

  fn string(s: &str) -> NaturalValue {
    NaturalValue::String(s.to_string())
  }

  fn test_data_set() -> DataSet {
    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::PATIENT_ID, &["ID1"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(
        &dictionary::TRANSFER_SYNTAX_UID,
        &[transfer_syntax::JPEG_BASELINE_8BIT.uid],
      )
      .unwrap();
    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["Doe^John"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::IMAGE_TYPE, &["ORIGINAL", "PRIMARY"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::SOP_INSTANCE_UID, &["1.2.3.4"])
      .unwrap();
    data_set.insert_int_value(&dictionary::ROWS, &[512]).unwrap();
    data_set
      .insert_int_value(&dictionary::INSTANCE_NUMBER, &[7])
      .unwrap();
    data_set
      .insert_float_value(&dictionary::PIXEL_SPACING, &[0.5, 0.25])
      .unwrap();

    // Signed, so it needs a VR map entry
    data_set.insert(
      dictionary::SMALLEST_IMAGE_PIXEL_VALUE.tag,
      DataElementValue::new_signed_short(&[-100]).unwrap(),
    );

    // FrameIncrementPointer
    data_set.insert(
      DataElementTag::new(0x0028, 0x0009),
      DataElementValue::new_attribute_tag(&[dictionary::NUMBER_OF_FRAMES.tag])
        .unwrap(),
    );

    // TimeRange
    data_set.insert(
      DataElementTag::new(0x0008, 0x1163),
      DataElementValue::new_floating_point_double(&[1.5, -2.0]).unwrap(),
    );

    // PatientComments with non-canonical padding
    data_set.insert(
      DataElementTag::new(0x0010, 0x4000),
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::LongText,
        Rc::new(b"AB  ".to_vec()),
      ),
    );

    data_set.insert(
      DataElementTag::new(0x0009, 0x0010),
      DataElementValue::new_text(ValueRepresentation::LongString, &["ACME"])
        .unwrap(),
    );
    data_set.insert(
      DataElementTag::new(0x0009, 0x1001),
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::OtherByteString,
        Rc::new(vec![1, 2, 3, 4]),
      ),
    );
    data_set.insert(
      DataElementTag::new(0x0009, 0x1002),
      DataElementValue::new_signed_very_long(&[i64::MIN, 5]).unwrap(),
    );

    data_set
      .insert_sequence_value(&dictionary::SOURCE_IMAGE_SEQUENCE, vec![])
      .unwrap();
    data_set
      .insert_sequence_value(
        &dictionary::REFERENCED_IMAGE_SEQUENCE,
        vec![item.clone()],
      )
      .unwrap();
    data_set
      .insert_sequence_value(
        &dictionary::OTHER_PATIENT_IDS_SEQUENCE,
        vec![item.clone(), item],
      )
      .unwrap();

    data_set.insert(
      dictionary::PIXEL_DATA.tag,
      DataElementValue::new_encapsulated_pixel_data_unchecked(
        ValueRepresentation::OtherByteString,
        vec![Rc::new(vec![]), Rc::new(vec![0xFF, 0xD8, 0xFF, 0xD9])],
      ),
    );

    data_set
  }

  #[test]
  fn naturalize_test() {
    let natural = naturalize(&test_data_set(), &NaturalizeConfig::default());

    assert_eq!(natural.get("PatientName"), Some(&string("Doe^John")));
    assert_eq!(
      natural.get("ImageType"),
      Some(&NaturalValue::List(vec![string("ORIGINAL"), string("PRIMARY")]))
    );
    assert_eq!(natural.get("Rows"), Some(&NaturalValue::Int(512)));
    assert_eq!(natural.get("InstanceNumber"), Some(&NaturalValue::Int(7)));
    assert_eq!(
      natural.get("PixelSpacing"),
      Some(&NaturalValue::List(vec![
        NaturalValue::Float(0.5),
        NaturalValue::Float(0.25)
      ]))
    );
    assert_eq!(
      natural.get("FrameIncrementPointer"),
      Some(&string("00280008"))
    );
    assert_eq!(
      natural.get("PatientComments"),
      Some(&NaturalValue::Bytes(Rc::new(b"AB  ".to_vec())))
    );
    assert_eq!(natural.get("(0009,0010)"), Some(&string("ACME")));

    assert_eq!(
      natural.vr_map.get("SmallestImagePixelValue"),
      Some(&ValueRepresentation::SignedShort)
    );
    assert_eq!(
      natural.vr_map.get("(0009,1002)"),
      Some(&ValueRepresentation::SignedVeryLong)
    );
    assert!(natural.vr_map.get("Rows").is_none());

    assert!(matches!(
      natural.get("SourceImageSequence"),
      Some(NaturalValue::List(items)) if items.is_empty()
    ));
    assert!(matches!(
      natural.get("ReferencedImageSequence"),
      Some(NaturalValue::Object(item)) if item.get("PatientID").is_some()
    ));
    assert!(matches!(
      natural.get("OtherPatientIDsSequence"),
      Some(NaturalValue::List(items)) if items.len() == 2
    ));

    let meta = natural.meta.as_ref().unwrap();
    assert_eq!(
      meta.get("TransferSyntaxUID"),
      Some(&string(transfer_syntax::JPEG_BASELINE_8BIT.uid))
    );
    assert!(natural.get("TransferSyntaxUID").is_none());
  }

  #[test]
  fn round_trip_test() {
    let data_set = test_data_set();

    for config in [
      NaturalizeConfig::default(),
      NaturalizeConfig {
        bulk_data_form: BulkDataForm::Chunked { chunk_size: 3 },
      },
    ] {
      let natural = naturalize(&data_set, &config);
      assert_eq!(denaturalize(&natural), Ok(data_set.clone()));
    }
  }

  #[test]
  fn natural_round_trip_test() {
    let mut item = NaturalDataSet::new();
    item.insert("PatientID".to_string(), string("ID1"));

    let mut natural = NaturalDataSet::new();
    natural.insert("PatientName".to_string(), string("Doe^Jane"));
    natural.insert(
      "ImageType".to_string(),
      NaturalValue::List(vec![string("DERIVED"), string("SECONDARY")]),
    );
    natural.insert("Columns".to_string(), NaturalValue::Int(256));
    natural.insert(
      "OtherPatientIDsSequence".to_string(),
      NaturalValue::Object(item),
    );
    natural.insert_with_vr(
      "(0009,1001)".to_string(),
      NaturalValue::Bytes(Rc::new(vec![9, 8])),
      ValueRepresentation::OtherByteString,
    );

    let data_set = denaturalize(&natural).unwrap();
    assert_eq!(
      data_set.get_string(dictionary::PATIENT_NAME.tag),
      Ok("Doe^Jane")
    );
    assert_eq!(data_set.get_int(dictionary::COLUMNS.tag), Ok(256));

    assert_eq!(naturalize(&data_set, &NaturalizeConfig::default()), natural);
  }

  #[test]
  fn numeric_text_round_trip_test() {
    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::INSTANCE_NUMBER.tag,
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::IntegerString,
        Rc::new(b" 12 ".to_vec()),
      ),
    );
    data_set.insert(
      dictionary::PIXEL_SPACING.tag,
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::DecimalString,
        Rc::new(b"1.50\\100".to_vec()),
      ),
    );

    let natural = naturalize(&data_set, &NaturalizeConfig::default());
    assert_eq!(natural.get("InstanceNumber"), Some(&NaturalValue::Int(12)));
    assert_eq!(
      natural.get("PixelSpacing"),
      Some(&NaturalValue::List(vec![
        NaturalValue::Float(1.5),
        NaturalValue::Float(100.0)
      ]))
    );

    // Numbers are written back in their canonical form
    let data_set = denaturalize(&natural).unwrap();
    assert_eq!(
      data_set
        .get_value_bytes(
          dictionary::INSTANCE_NUMBER.tag,
          ValueRepresentation::IntegerString
        )
        .map(|bytes| bytes.as_slice()),
      Ok(b"12".as_slice())
    );
    assert_eq!(
      data_set
        .get_value_bytes(
          dictionary::PIXEL_SPACING.tag,
          ValueRepresentation::DecimalString
        )
        .map(|bytes| bytes.as_slice()),
      Ok(b"1.5\\100 ".as_slice())
    );

    assert_eq!(naturalize(&data_set, &NaturalizeConfig::default()), natural);
  }

  #[test]
  fn json_round_trip_test() {
    let natural = naturalize(&test_data_set(), &NaturalizeConfig::default());

    let json = natural.to_json(false).unwrap();
    let natural_from_json = NaturalDataSet::from_json(&json).unwrap();

    assert_eq!(natural_from_json, natural);
    assert_eq!(denaturalize(&natural_from_json), Ok(test_data_set()));
  }

  #[test]
  fn write_natural_bytes_test() {
    let natural = naturalize(&test_data_set(), &NaturalizeConfig::default());

    let bytes = write_natural_bytes(&natural, None).unwrap();
    assert!(dcmkit_p10::is_valid_bytes(&bytes));

    let read_natural =
      read_natural_bytes(bytes.clone(), &NaturalizeConfig::default())
        .unwrap();

    assert_eq!(read_natural.elements, natural.elements);
    assert_eq!(read_natural.vr_map, natural.vr_map);
    assert_eq!(
      read_natural.meta.as_ref().unwrap().get("TransferSyntaxUID"),
      Some(&string(transfer_syntax::JPEG_BASELINE_8BIT.uid))
    );

    let data_set = dcmkit_p10::read_bytes(bytes.clone()).unwrap();
    assert_eq!(
      read_natural,
      naturalize(&data_set, &NaturalizeConfig::default())
    );

    let mut cursor = std::io::Cursor::new(bytes);
    assert_eq!(
      read_natural_stream(&mut cursor, &NaturalizeConfig::default()),
      Ok(read_natural)
    );
  }

  #[test]
  fn write_natural_bytes_error_test() {
    let mut natural = NaturalDataSet::new();
    natural.insert("PatientName".to_string(), string("Doe^Jane"));
    natural.insert(
      "(0009,1001)".to_string(),
      NaturalValue::Bytes(Rc::new(vec![1, 2])),
    );

    assert!(matches!(
      write_natural_bytes(&natural, None),
      Err(NaturalError::VrUnresolvable { .. })
    ));
  }

  #[test]
  fn read_natural_bytes_error_test() {
    assert!(matches!(
      read_natural_bytes(vec![0; 64], &NaturalizeConfig::default()),
      Err(NaturalError::P10Error(_))
    ));
  }

  #[test]
  fn data_set_natural_extensions_test() {
    let data_set = test_data_set();
    let natural = data_set.to_natural(&NaturalizeConfig::default());

    assert_eq!(DataSet::from_natural(&natural), Ok(data_set));
  }
}
