//! Converts a stream of DICOM P10 parts directly into a natural data set,
//! without first materializing the data set it describes.

use std::rc::Rc;

use dcmkit_core::{dictionary, DataElementTag, ValueRepresentation};
use dcmkit_p10::{P10Error, P10Part, P10PartListener};

use crate::internal::naturalize;
use crate::{NaturalDataSet, NaturalValue, NaturalizeConfig};

/// Listener that converts a stream of DICOM P10 parts into a natural data set.
/// The result is identical to reading the parts into a data set and then
/// calling [`crate::naturalize()`] on it.
///
pub struct P10NaturalTransform {
  /// The config used to naturalize data element values.
  config: NaturalizeConfig,

  /// The natural form of the File Meta Information, along with any group
  /// 0x0002 data elements found in the root data set.
  meta: NaturalDataSet,

  /// The stack of sequences and items that are currently being converted. The
  /// root data set is always at the bottom.
  location: Vec<NaturalLocation>,

  /// The data element or pixel data item whose value bytes are currently
  /// being received.
  pending_value: Option<PendingValue>,

  is_complete: bool,
}

enum NaturalLocation {
  DataSet {
    natural: NaturalDataSet,
  },
  Sequence {
    tag: DataElementTag,
    items: Vec<NaturalDataSet>,
  },
  EncapsulatedPixelData {
    tag: DataElementTag,
    vr: ValueRepresentation,
    fragments: Vec<Rc<Vec<u8>>>,
  },
}

/// A value whose header has been received. The tag is `None` for an
/// encapsulated pixel data fragment.
///
struct PendingValue {
  tag: Option<DataElementTag>,
  vr: ValueRepresentation,
  data: Vec<u8>,
}

impl P10NaturalTransform {
  pub fn new(config: NaturalizeConfig) -> Self {
    Self {
      config,
      meta: NaturalDataSet::new(),
      location: vec![NaturalLocation::DataSet {
        natural: NaturalDataSet::new(),
      }],
      pending_value: None,
      is_complete: false,
    }
  }

  /// Returns whether a [`P10Part::End`] part has been received.
  ///
  pub fn is_complete(&self) -> bool {
    self.is_complete
  }

  /// Returns the final natural data set, or an error if the part stream
  /// hasn't ended. The natural data set is moved out, so this only succeeds
  /// once.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn final_natural_data_set(&mut self) -> Result<NaturalDataSet, ()> {
    let mut natural = match (self.is_complete, self.location.as_mut_slice()) {
      (true, [NaturalLocation::DataSet { natural }]) => std::mem::take(natural),
      _ => return Err(()),
    };

    let meta = std::mem::take(&mut self.meta);
    if !meta.is_empty() {
      natural.meta = Some(Box::new(meta));
    }

    Ok(natural)
  }

  fn add_part_in_pending_value(
    &mut self,
    part: &P10Part,
    mut pending_value: PendingValue,
  ) -> Result<(), P10Error> {
    let P10Part::DataElementValueBytes {
      data,
      bytes_remaining,
      ..
    } = part
    else {
      self.pending_value = Some(pending_value);
      return self.unexpected_part_error(part);
    };

    pending_value.data.extend_from_slice(data);

    if *bytes_remaining > 0 {
      self.pending_value = Some(pending_value);
      return Ok(());
    }

    let PendingValue { tag, vr, data } = pending_value;
    let data = Rc::new(data);

    match (tag, self.location.last_mut()) {
      (
        None,
        Some(NaturalLocation::EncapsulatedPixelData { fragments, .. }),
      ) => {
        fragments.push(data);
        Ok(())
      }

      (Some(tag), _) => {
        let value = naturalize::naturalize_bytes(vr, &data, &self.config);
        self.insert_value(tag, vr, value);
        Ok(())
      }

      _ => self.unexpected_part_error(part),
    }
  }

  /// Inserts a natural value into the data set at the top of the location
  /// stack. Group 0x0002 data elements in the root data set go into the meta.
  ///
  fn insert_value(
    &mut self,
    tag: DataElementTag,
    vr: ValueRepresentation,
    value: NaturalValue,
  ) {
    let is_root = self.location.len() == 1;

    let target = match self.location.last_mut() {
      _ if is_root && dictionary::is_file_meta_information_tag(tag) => {
        &mut self.meta
      }
      Some(NaturalLocation::DataSet { natural }) => natural,

      // Values are only inserted once their sequence or pixel data has been
      // popped off the location stack
      _ => unreachable!(),
    };

    naturalize::insert_natural_value(target, tag, vr, value);
  }

  fn unexpected_part_error(&self, part: &P10Part) -> Result<(), P10Error> {
    Err(P10Error::PartStreamInvalid {
      when: "Naturalizing DICOM P10 parts".to_string(),
      details: format!(
        "Received unexpected P10 part at depth {}",
        self.location.len()
      ),
      part: part.clone(),
    })
  }
}

impl P10PartListener for P10NaturalTransform {
  fn add_part(&mut self, part: &P10Part) -> Result<(), P10Error> {
    if self.is_complete {
      return Err(P10Error::PartStreamInvalid {
        when: "Naturalizing DICOM P10 parts".to_string(),
        details: "Part received after the part stream has ended".to_string(),
        part: part.clone(),
      });
    }

    if let Some(pending_value) = self.pending_value.take() {
      return self.add_part_in_pending_value(part, pending_value);
    }

    match (part, self.location.last()) {
      (P10Part::FilePreambleAndDICMPrefix { .. }, _) => Ok(()),

      (P10Part::FileMetaInformation { data_set }, _) => {
        let natural = naturalize::naturalize_data_set(data_set, &self.config);
        self.meta = natural.meta.map(|meta| *meta).unwrap_or_default();

        Ok(())
      }

      (
        P10Part::DataElementHeader { tag, vr, length },
        Some(NaturalLocation::DataSet { .. }),
      ) => {
        self.pending_value = Some(PendingValue {
          tag: Some(*tag),
          vr: *vr,
          data: Vec::with_capacity(*length as usize),
        });

        Ok(())
      }

      (
        P10Part::SequenceStart { tag, vr },
        Some(NaturalLocation::DataSet { .. }),
      ) => {
        let location = match vr {
          ValueRepresentation::OtherByteString
          | ValueRepresentation::OtherWordString => {
            NaturalLocation::EncapsulatedPixelData {
              tag: *tag,
              vr: *vr,
              fragments: vec![],
            }
          }

          _ => NaturalLocation::Sequence {
            tag: *tag,
            items: vec![],
          },
        };

        self.location.push(location);

        Ok(())
      }

      (P10Part::SequenceItemStart, Some(NaturalLocation::Sequence { .. })) => {
        self.location.push(NaturalLocation::DataSet {
          natural: NaturalDataSet::new(),
        });

        Ok(())
      }

      (P10Part::SequenceItemDelimiter, Some(NaturalLocation::DataSet { .. }))
        if self.location.len() > 1 =>
      {
        if let Some(NaturalLocation::DataSet { natural }) = self.location.pop()
        {
          if let Some(NaturalLocation::Sequence { items, .. }) =
            self.location.last_mut()
          {
            items.push(natural);
          }
        }

        Ok(())
      }

      (
        P10Part::PixelDataItem { length },
        Some(NaturalLocation::EncapsulatedPixelData { vr, .. }),
      ) => {
        self.pending_value = Some(PendingValue {
          tag: None,
          vr: *vr,
          data: Vec::with_capacity(*length as usize),
        });

        Ok(())
      }

      (P10Part::SequenceDelimiter, Some(NaturalLocation::Sequence { .. }))
      | (
        P10Part::SequenceDelimiter,
        Some(NaturalLocation::EncapsulatedPixelData { .. }),
      ) => {
        match self.location.pop() {
          Some(NaturalLocation::Sequence { tag, items }) => {
            let value = naturalize::naturalize_sequence_items(items);
            self.insert_value(tag, ValueRepresentation::Sequence, value);
          }

          Some(NaturalLocation::EncapsulatedPixelData {
            tag,
            vr,
            fragments,
          }) => {
            let value = naturalize::naturalize_fragments(&fragments);
            self.insert_value(tag, vr, value);
          }

          _ => unreachable!(),
        }

        Ok(())
      }

      (P10Part::End, _) if self.location.len() == 1 => {
        self.is_complete = true;

        tracing::debug!("Naturalized DICOM P10 part stream");

        Ok(())
      }

      (part, _) => self.unexpected_part_error(part),
    }
  }
}

#[cfg(test)]
mod tests {
  use dcmkit_core::{DataElementValue, DataSet};
  use dcmkit_p10::data_set_to_parts;

  use super::*;
  use crate::{naturalize, BulkDataForm};

  fn example_data_set() -> DataSet {
    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::PATIENT_ID, &["123"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["Doe^Jane"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::MODALITY, &["CT"])
      .unwrap();
    data_set.insert_int_value(&dictionary::ROWS, &[4]).unwrap();
    data_set.insert(
      dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item.clone(), item]),
    );
    data_set.insert(
      DataElementTag::new(0x0009, 0x1002),
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::Unknown,
        Rc::new(vec![1, 2, 3, 4]),
      ),
    );
    data_set.insert(
      dictionary::PIXEL_DATA.tag,
      DataElementValue::new_encapsulated_pixel_data_unchecked(
        ValueRepresentation::OtherByteString,
        vec![Rc::new(vec![]), Rc::new(vec![5, 6])],
      ),
    );

    data_set
  }

  fn naturalize_parts(
    data_set: &DataSet,
    config: NaturalizeConfig,
  ) -> NaturalDataSet {
    let mut transform = P10NaturalTransform::new(config);

    data_set_to_parts(data_set, &mut |part: &P10Part| {
      transform.add_part(part)
    })
    .unwrap();

    assert!(transform.is_complete());

    transform.final_natural_data_set().unwrap()
  }

  #[test]
  fn matches_naturalize_test() {
    let data_set = example_data_set();

    for config in [
      NaturalizeConfig::default(),
      NaturalizeConfig {
        bulk_data_form: BulkDataForm::Chunked { chunk_size: 3 },
      },
    ] {
      assert_eq!(
        naturalize_parts(&data_set, config),
        naturalize(&data_set, &config)
      );
    }
  }

  #[test]
  fn file_meta_information_test() {
    let mut data_set = example_data_set();
    data_set
      .insert_string_value(
        &dictionary::TRANSFER_SYNTAX_UID,
        &["1.2.840.10008.1.2"],
      )
      .unwrap();

    let natural = naturalize_parts(&data_set, NaturalizeConfig::default());
    assert_eq!(natural, naturalize(&data_set, &NaturalizeConfig::default()));

    let meta = natural.meta.as_ref().unwrap();
    assert_eq!(
      meta.get("TransferSyntaxUID"),
      Some(&NaturalValue::String("1.2.840.10008.1.2".to_string()))
    );
    assert!(natural.get("TransferSyntaxUID").is_none());
  }

  #[test]
  fn unexpected_part_test() {
    let mut transform = P10NaturalTransform::new(NaturalizeConfig::default());

    assert!(matches!(
      transform.add_part(&P10Part::SequenceItemDelimiter),
      Err(P10Error::PartStreamInvalid { .. })
    ));
    assert_eq!(transform.final_natural_data_set(), Err(()));

    transform.add_part(&P10Part::End).unwrap();
    assert!(matches!(
      transform.add_part(&P10Part::End),
      Err(P10Error::PartStreamInvalid { .. })
    ));
  }
}
