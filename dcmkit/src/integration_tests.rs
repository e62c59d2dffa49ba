// Integration tests for dcmkit
#[cfg(test)]
mod tests {
  const RNG_SEED: u64 = 1023;

  use std::rc::Rc;

  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};

  use dcmkit_core::*;
  use dcmkit_natural::*;
  use dcmkit_p10::*;

  /// Returns a data set that uses the given transfer syntax and has a
  /// representative mix of text, numbers, sequences, private data, and
  /// packed one-bit pixel data.
  ///
  fn test_data_set(ts: &TransferSyntax) -> DataSet {
    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::PATIENT_ID, &["OTHER-1"])
      .unwrap();

    let mut data_set = DataSet::new();

    data_set
      .insert_string_value(&dictionary::TRANSFER_SYNTAX_UID, &[ts.uid])
      .unwrap();
    data_set
      .insert_string_value(
        &dictionary::SOP_CLASS_UID,
        &["1.2.840.10008.5.1.4.1.1.66.4"],
      )
      .unwrap();
    data_set
      .insert_string_value(&dictionary::SOP_INSTANCE_UID, &["1.2.3.4.5"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::STUDY_DATE, &["20240131"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::MODALITY, &["SEG"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::IMAGE_TYPE, &["DERIVED", "PRIMARY"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["Doe^Jane"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::PATIENT_ID, &["12345"])
      .unwrap();
    data_set
      .insert_int_value(&dictionary::INSTANCE_NUMBER, &[3])
      .unwrap();
    data_set.insert_int_value(&dictionary::ROWS, &[4]).unwrap();
    data_set.insert_int_value(&dictionary::COLUMNS, &[4]).unwrap();
    data_set
      .insert_int_value(&dictionary::BITS_ALLOCATED, &[1])
      .unwrap();
    data_set
      .insert_float_value(&dictionary::PIXEL_SPACING, &[0.5, 0.5])
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

    let mask = [0, 1, 1, 0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0];
    data_set.insert(
      dictionary::PIXEL_DATA.tag,
      dcmkit_pixel_data::pack_into_value(&mask).unwrap(),
    );

    data_set
  }

  fn native_transfer_syntaxes() -> [&'static TransferSyntax; 4] {
    [
      &transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN,
      &transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN,
      &transfer_syntax::EXPLICIT_VR_BIG_ENDIAN,
      &transfer_syntax::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    ]
  }

  /// Reads DICOM P10 bytes into a natural data set, supplying the bytes to
  /// the read context in chunks whose sizes are given by `next_chunk_size`.
  ///
  fn read_natural_in_chunks(
    bytes: &[u8],
    next_chunk_size: &mut impl FnMut() -> usize,
  ) -> Result<NaturalDataSet, P10Error> {
    let mut context = P10ReadContext::new();
    let mut transform = P10NaturalTransform::new(NaturalizeConfig::default());
    let mut offset = 0;

    loop {
      match context.read_parts() {
        Ok(parts) => {
          for part in parts {
            transform.add_part(&part)?;
          }

          if let Ok(natural) = transform.final_natural_data_set() {
            return Ok(natural);
          }
        }

        Err(P10Error::DataRequired { .. }) => {
          let end = (offset + next_chunk_size()).min(bytes.len());
          let is_last_chunk = end == bytes.len();
          context.write_bytes(bytes[offset..end].to_vec(), is_last_chunk)?;
          offset = end;
        }

        Err(e) => return Err(e),
      }
    }
  }

  #[test]
  fn rewrite_is_byte_identical_test() {
    for ts in native_transfer_syntaxes() {
      for sequence_length_encoding in [
        SequenceLengthEncoding::Defined,
        SequenceLengthEncoding::Undefined,
      ] {
        let config = P10WriteConfig {
          sequence_length_encoding,
          ..P10WriteConfig::default()
        };

        let bytes =
          write_bytes(&test_data_set(ts), Some(config.clone())).unwrap();

        let data_set = DataSet::read_p10_bytes(bytes.clone()).unwrap();
        let rewritten_bytes = write_bytes(&data_set, Some(config)).unwrap();

        assert!(bytes == rewritten_bytes, "Rewrite mismatch for {}", ts.name);
      }
    }
  }

  #[test]
  fn encapsulated_pixel_data_rewrite_test() {
    let mut data_set = test_data_set(&transfer_syntax::JPEG_BASELINE_8BIT);
    data_set.insert(
      dictionary::PIXEL_DATA.tag,
      DataElementValue::new_encapsulated_pixel_data_unchecked(
        ValueRepresentation::OtherByteString,
        vec![Rc::new(vec![]), Rc::new(vec![0xFF, 0xD8, 0xFF, 0xD9])],
      ),
    );

    let bytes = write_bytes(&data_set, None).unwrap();
    let read_data_set = DataSet::read_p10_bytes(bytes.clone()).unwrap();

    assert_eq!(
      read_data_set.get_value(dictionary::PIXEL_DATA.tag),
      data_set.get_value(dictionary::PIXEL_DATA.tag)
    );
    assert_eq!(write_bytes(&read_data_set, None).unwrap(), bytes);
  }

  #[test]
  fn streaming_equivalence_test() {
    let mut rng = SmallRng::seed_from_u64(RNG_SEED);

    for ts in native_transfer_syntaxes() {
      let bytes = write_bytes(&test_data_set(ts), None).unwrap();

      let natural =
        read_natural_bytes(bytes.clone(), &NaturalizeConfig::default())
          .unwrap();

      assert_eq!(
        natural,
        naturalize(
          &DataSet::read_p10_bytes(bytes.clone()).unwrap(),
          &NaturalizeConfig::default()
        )
      );

      assert_eq!(
        read_natural_in_chunks(&bytes, &mut || rng.gen_range(1..=64)),
        Ok(natural.clone()),
        "Random chunk mismatch for {}",
        ts.name
      );

      assert_eq!(
        read_natural_in_chunks(&bytes, &mut || 1),
        Ok(natural),
        "Single byte chunk mismatch for {}",
        ts.name
      );
    }
  }

  #[test]
  fn natural_round_trip_test() {
    let data_set = test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    let bytes = write_bytes(&data_set, None).unwrap();

    let natural =
      read_natural_bytes(bytes.clone(), &NaturalizeConfig::default()).unwrap();

    // Sequence collapsing
    assert!(matches!(
      natural.get("ReferencedImageSequence"),
      Some(NaturalValue::Object(_))
    ));
    assert!(matches!(
      natural.get("OtherPatientIDsSequence"),
      Some(NaturalValue::List(items)) if items.len() == 2
    ));

    // Converting back gives the data set that was read, and writing that gives
    // the original bytes
    let read_data_set = DataSet::read_p10_bytes(bytes.clone()).unwrap();
    assert_eq!(denaturalize(&natural), Ok(read_data_set));
    assert_eq!(write_natural_bytes(&natural, None), Ok(bytes));

    // JSON is lossless
    let json = natural.to_json(true).unwrap();
    assert_eq!(NaturalDataSet::from_json(&json), Ok(natural));
  }

  #[test]
  fn chunked_bulk_data_test() {
    let data_set = test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    let bytes = write_bytes(&data_set, None).unwrap();

    let config = NaturalizeConfig {
      bulk_data_form: BulkDataForm::Chunked { chunk_size: 3 },
    };
    let natural = read_natural_bytes(bytes.clone(), &config).unwrap();

    assert_eq!(
      natural.get("(0009,1001)"),
      Some(&NaturalValue::List(vec![
        NaturalValue::Bytes(Rc::new(vec![1, 2, 3])),
        NaturalValue::Bytes(Rc::new(vec![4])),
      ]))
    );

    assert_eq!(write_natural_bytes(&natural, None), Ok(bytes));
  }

  #[test]
  fn implicit_vr_uses_dictionary_test() {
    let data_set = test_data_set(&transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN);
    let bytes = write_bytes(&data_set, None).unwrap();

    // The Patient Name tag is followed directly by a 32-bit length, with no
    // VR on the wire
    let patient_name = [0x10, 0x00, 0x10, 0x00, 8, 0, 0, 0];
    assert!(bytes.windows(8).any(|window| window == patient_name));

    let (read_data_set, warnings) =
      read_bytes_with_warnings(bytes, &P10ReadConfig::default())
        .map_err(|(e, _)| e)
        .unwrap();

    assert_eq!(
      read_data_set
        .get_value(dictionary::PATIENT_NAME.tag)
        .unwrap()
        .value_representation(),
      ValueRepresentation::PersonName
    );
    assert_eq!(
      read_data_set
        .get_value(dictionary::ROWS.tag)
        .unwrap()
        .value_representation(),
      ValueRepresentation::UnsignedShort
    );

    // A private data element with no dictionary entry is read as UN and
    // reported
    let private_tag = DataElementTag::new(0x0009, 0x1001);
    assert_eq!(
      read_data_set
        .get_value(private_tag)
        .unwrap()
        .value_representation(),
      ValueRepresentation::Unknown
    );
    assert!(warnings.iter().any(|warning| warning.kind
      == P10WarningKind::UnknownTag { tag: private_tag }));
  }

  #[test]
  fn multiplicity_mismatch_warning_test() {
    let mut data_set =
      test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    data_set.insert(
      dictionary::IMAGE_TYPE.tag,
      DataElementValue::new_text(ValueRepresentation::CodeString, &["DERIVED"])
        .unwrap(),
    );

    let bytes = write_bytes(&data_set, None).unwrap();
    let (read_data_set, warnings) =
      read_bytes_with_warnings(bytes, &P10ReadConfig::default())
        .map_err(|(e, _)| e)
        .unwrap();

    assert_eq!(
      read_data_set.get_string(dictionary::IMAGE_TYPE.tag),
      Ok("DERIVED")
    );
    assert!(warnings.iter().any(|warning| matches!(
      warning.kind,
      P10WarningKind::MultiplicityMismatch { tag, value_count: 1, .. }
        if tag == dictionary::IMAGE_TYPE.tag
    )));
  }

  #[test]
  fn dicm_prefix_missing_test() {
    let data_set = test_data_set(&transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN);
    let mut bytes = write_bytes(&data_set, None).unwrap();
    bytes[128..132].copy_from_slice(b"DICN");

    assert!(!is_valid_bytes(&bytes));
    assert!(matches!(
      DataSet::read_p10_bytes(bytes.clone()),
      Err(P10Error::DicmPrefixMissing { .. })
    ));
    assert!(matches!(
      read_natural_bytes(bytes, &NaturalizeConfig::default()),
      Err(NaturalError::P10Error(P10Error::DicmPrefixMissing { .. }))
    ));
  }

  #[test]
  fn transfer_syntax_not_supported_test() {
    let data_set = test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    let mut bytes = write_bytes(&data_set, None).unwrap();

    // Replace the final digit of the transfer syntax UID, keeping its length
    let uid = transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid.as_bytes();
    let offset = bytes
      .windows(uid.len())
      .position(|window| window == uid)
      .unwrap();
    bytes[offset + uid.len() - 1] = b'9';

    assert!(matches!(
      DataSet::read_p10_bytes(bytes),
      Err(P10Error::TransferSyntaxNotSupported { .. })
    ));
  }

  #[test]
  fn truncated_data_test() {
    let data_set = test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    let mut bytes = write_bytes(&data_set, None).unwrap();
    bytes.truncate(bytes.len() - 1);

    assert!(matches!(
      DataSet::read_p10_bytes(bytes),
      Err(P10Error::DataEndedUnexpectedly { .. })
    ));
  }

  #[test]
  fn cancellation_test() {
    let bytes = write_bytes(
      &test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN),
      None,
    )
    .unwrap();

    let token = CancellationToken::new();

    let mut context = P10ReadContext::new();
    context.set_cancellation_token(token.clone());
    context.write_bytes(bytes[0..200].to_vec(), false).unwrap();

    let mut parts = vec![];
    let error = loop {
      match context.read_parts() {
        Ok(new_parts) => parts.extend(new_parts),
        Err(e) => break e,
      }
    };

    assert!(matches!(error, P10Error::DataRequired { .. }));
    assert!(matches!(
      parts.first(),
      Some(P10Part::FilePreambleAndDICMPrefix { .. })
    ));

    token.cancel();

    assert!(matches!(
      context.read_parts(),
      Err(P10Error::Cancelled { .. })
    ));
  }

  #[test]
  fn bit_packed_pixel_data_test() {
    let data_set = test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    let bytes = write_bytes(&data_set, None).unwrap();
    let read_data_set = DataSet::read_p10_bytes(bytes).unwrap();

    let pixel_data = read_data_set
      .get_value_bytes(
        dictionary::PIXEL_DATA.tag,
        ValueRepresentation::OtherByteString,
      )
      .unwrap();
    assert_eq!(**pixel_data, vec![0x16, 0x0F]);

    let samples = dcmkit_pixel_data::unpack(&pixel_data[0..1]);
    assert_eq!(samples, vec![0, 255, 255, 0, 255, 0, 0, 0]);
  }
}
