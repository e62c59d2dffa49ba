//! A data set builder materializes a stream of DICOM P10 parts into an
//! in-memory data set.
//!
//! Most commonly the stream of DICOM P10 parts originates from reading raw
//! DICOM P10 data with the [`crate::p10_read`] module.

use std::rc::Rc;

use dcmkit_core::{
  dictionary, DataElementTag, DataElementValue, DataSet, ValueRepresentation,
};

use crate::{P10Error, P10Part, P10PartListener};

/// A data set builder that can be fed a stream of DICOM P10 parts and
/// materialize them into an in-memory data set.
///
#[derive(Debug)]
pub struct DataSetBuilder {
  file_preamble: Option<Box<[u8; 128]>>,
  file_meta_information: Option<DataSet>,
  location: Vec<BuilderLocation>,
  pending_data_element: Option<PendingDataElement>,
  is_complete: bool,
}

/// Tracks where in the data set the builder is currently at, specifically the
/// sequences and sequence items currently in the process of being created.
///
#[derive(Debug)]
enum BuilderLocation {
  RootDataSet {
    data_set: DataSet,
  },
  Sequence {
    tag: DataElementTag,
    items: Vec<DataSet>,
  },
  SequenceItem {
    data_set: DataSet,
  },
  EncapsulatedPixelDataSequence {
    vr: ValueRepresentation,
    items: Vec<Rc<Vec<u8>>>,
  },
}

/// The pending data element is a data element or pixel data item for which a
/// header part has been received, but one or more of its
/// `DataElementValueBytes` parts are still pending.
///
#[derive(Debug)]
struct PendingDataElement {
  tag: DataElementTag,
  vr: ValueRepresentation,
  data: Vec<Rc<Vec<u8>>>,
}

impl Default for DataSetBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl DataSetBuilder {
  /// Creates a new data set builder that can be given DICOM P10 parts to be
  /// materialized into an in-memory DICOM data set.
  ///
  pub fn new() -> Self {
    Self {
      file_preamble: None,
      file_meta_information: None,
      location: vec![BuilderLocation::RootDataSet {
        data_set: DataSet::new(),
      }],
      pending_data_element: None,
      is_complete: false,
    }
  }

  /// Returns whether the data set builder is complete, i.e. whether it has
  /// received the final [`P10Part::End`] part signalling the end of the
  /// incoming DICOM P10 parts.
  ///
  pub fn is_complete(&self) -> bool {
    self.is_complete
  }

  /// Returns the File Preamble read by a data set builder, or `None` if it
  /// has not yet been read. The File Preamble is always 128 bytes in size.
  ///
  pub fn file_preamble(&self) -> Option<&[u8; 128]> {
    self.file_preamble.as_deref()
  }

  /// Returns the File Meta Information read by a data set builder, or `None`
  /// if it has not yet been read.
  ///
  pub fn file_meta_information(&self) -> Option<&DataSet> {
    self.file_meta_information.as_ref()
  }

  /// Returns the final data set constructed by a data set builder from the
  /// DICOM P10 parts it has been fed, or an error if it has not yet been fully
  /// read. The File Meta Information data elements are merged into the
  /// returned data set.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn final_data_set(&mut self) -> Result<DataSet, ()> {
    let (file_meta_information, mut data_set) = self.final_data_sets()?;

    data_set.merge(file_meta_information);

    Ok(data_set)
  }

  /// Returns the File Meta Information and main data set constructed by a
  /// data set builder as separate data sets, or an error if it has not yet
  /// been fully read.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn final_data_sets(&mut self) -> Result<(DataSet, DataSet), ()> {
    let data_set = match (self.is_complete, self.location.as_mut_slice()) {
      (true, [BuilderLocation::RootDataSet { data_set }]) => {
        std::mem::take(data_set)
      }
      _ => return Err(()),
    };

    let file_meta_information =
      self.file_meta_information.take().unwrap_or_default();

    Ok((file_meta_information, data_set))
  }

  /// Takes a data set builder that isn't yet complete, e.g. because an error
  /// was encountered reading the source of the P10 parts it was being built
  /// from, and adds the necessary delimiter and end parts so that it is
  /// considered complete and can have its final data set read out.
  ///
  /// This allows a partially built data set to be retrieved in its current
  /// state. This should never be needed when reading or constructing valid and
  /// complete DICOM P10 data.
  ///
  pub fn force_end(&mut self) {
    if self.is_complete {
      return;
    }

    self.pending_data_element = None;

    while let Some(location) = self.location.last() {
      let part = match location {
        BuilderLocation::Sequence { .. }
        | BuilderLocation::EncapsulatedPixelDataSequence { .. } => {
          P10Part::SequenceDelimiter
        }
        BuilderLocation::SequenceItem { .. } => P10Part::SequenceItemDelimiter,
        BuilderLocation::RootDataSet { .. } => P10Part::End,
      };

      // These parts always match the current location so can't fail
      if self.add_part(&part).is_err() || part == P10Part::End {
        return;
      }
    }
  }

  /// Adds a new DICOM P10 part to a data set builder. This function is
  /// responsible for progressively constructing a data set from the parts
  /// received, and also checks that the parts being received are in a valid
  /// order.
  ///
  pub fn add_part(&mut self, part: &P10Part) -> Result<(), P10Error> {
    if self.is_complete {
      return Err(P10Error::PartStreamInvalid {
        when: "Building data set".to_string(),
        details: "Part received after the part stream has ended".to_string(),
        part: part.clone(),
      });
    }

    // If there's a pending data element then it needs to be dealt with first as
    // the incoming part must be a DataElementValueBytes
    if let Some(pending_data_element) = self.pending_data_element.take() {
      return self.add_part_in_pending_data_element(part, pending_data_element);
    }

    match (part, self.location.last()) {
      (P10Part::FilePreambleAndDICMPrefix { preamble }, _) => {
        self.file_preamble = Some(preamble.clone());
        Ok(())
      }

      (P10Part::FileMetaInformation { data_set }, _) => {
        self.file_meta_information = Some(data_set.clone());
        Ok(())
      }

      // If a sequence is being read then add this part to it
      (part, Some(BuilderLocation::Sequence { .. })) => {
        self.add_part_in_sequence(part)
      }

      // If an encapsulated pixel data sequence is being read then add this part
      // to it
      (part, Some(BuilderLocation::EncapsulatedPixelDataSequence { vr, .. })) => {
        let vr = *vr;
        self.add_part_in_encapsulated_pixel_data_sequence(part, vr)
      }

      // Add this part to the current data set, which will be either the root
      // data set or an item in a sequence
      (part, _) => self.add_part_in_data_set(part),
    }
  }

  /// Ingests the next part when the data set builder's current location
  /// specifies a sequence.
  ///
  fn add_part_in_sequence(&mut self, part: &P10Part) -> Result<(), P10Error> {
    match part {
      P10Part::SequenceItemStart => {
        self.location.push(BuilderLocation::SequenceItem {
          data_set: DataSet::new(),
        });

        Ok(())
      }

      P10Part::SequenceDelimiter => {
        if let Some(BuilderLocation::Sequence { tag, items }) =
          self.location.pop()
        {
          let value = DataElementValue::new_sequence(items);
          self.insert_data_element_at_current_location(tag, value);
        }

        Ok(())
      }

      part => self.unexpected_part_error(part),
    }
  }

  /// Ingests the next part when the data set builder's current location
  /// specifies an encapsulated pixel data sequence.
  ///
  fn add_part_in_encapsulated_pixel_data_sequence(
    &mut self,
    part: &P10Part,
    vr: ValueRepresentation,
  ) -> Result<(), P10Error> {
    match part {
      P10Part::PixelDataItem { .. } => {
        self.pending_data_element = Some(PendingDataElement {
          tag: dictionary::ITEM.tag,
          vr,
          data: vec![],
        });

        Ok(())
      }

      P10Part::SequenceDelimiter => {
        if let Some(BuilderLocation::EncapsulatedPixelDataSequence {
          vr,
          items,
        }) = self.location.pop()
        {
          self.insert_data_element_at_current_location(
            dictionary::PIXEL_DATA.tag,
            DataElementValue::new_encapsulated_pixel_data_unchecked(vr, items),
          );
        }

        Ok(())
      }

      part => self.unexpected_part_error(part),
    }
  }

  /// Ingests the next part when the data set builder's current location is in
  /// either the root data set or in an item that's part of a sequence.
  ///
  fn add_part_in_data_set(&mut self, part: &P10Part) -> Result<(), P10Error> {
    match part {
      // If this part is the start of a new data element then create a new
      // pending data element that will have its data filled in by subsequent
      // DataElementValueBytes parts
      P10Part::DataElementHeader { tag, vr, .. } => {
        self.pending_data_element = Some(PendingDataElement {
          tag: *tag,
          vr: *vr,
          data: vec![],
        });

        Ok(())
      }

      // If this part indicates the start of a new sequence then update the
      // current location accordingly
      P10Part::SequenceStart { tag, vr } => {
        let new_location = match vr {
          ValueRepresentation::OtherByteString
          | ValueRepresentation::OtherWordString => {
            BuilderLocation::EncapsulatedPixelDataSequence {
              vr: *vr,
              items: vec![],
            }
          }

          _ => BuilderLocation::Sequence {
            tag: *tag,
            items: vec![],
          },
        };

        self.location.push(new_location);

        Ok(())
      }

      // If this part indicates the end of the current item then move the item
      // into its sequence
      P10Part::SequenceItemDelimiter => match self.location.as_slice() {
        [.., BuilderLocation::Sequence { .. }, BuilderLocation::SequenceItem { .. }] =>
        {
          if let Some(BuilderLocation::SequenceItem { data_set }) =
            self.location.pop()
          {
            if let Some(BuilderLocation::Sequence { items, .. }) =
              self.location.last_mut()
            {
              items.push(data_set);
            }
          }

          Ok(())
        }

        _ => Err(P10Error::PartStreamInvalid {
          when: "Building data set".to_string(),
          details: "Received sequence item delimiter part outside of an item"
            .to_string(),
          part: part.clone(),
        }),
      },

      // If this part indicates the end of the DICOM P10 parts then mark the
      // builder as complete, so long as it's currently located in the root
      // data set
      P10Part::End => match self.location.as_slice() {
        [BuilderLocation::RootDataSet { .. }] => {
          self.is_complete = true;

          Ok(())
        }

        _ => Err(P10Error::PartStreamInvalid {
          when: "Building data set".to_string(),
          details: "Received end part outside of the root data set".to_string(),
          part: part.clone(),
        }),
      },

      part => self.unexpected_part_error(part),
    }
  }

  /// Ingests the next part when the data set builder has a pending data element
  /// that is expecting value bytes parts containing its data.
  ///
  fn add_part_in_pending_data_element(
    &mut self,
    part: &P10Part,
    mut pending_data_element: PendingDataElement,
  ) -> Result<(), P10Error> {
    match part {
      P10Part::DataElementValueBytes {
        data,
        bytes_remaining,
        ..
      } => {
        pending_data_element.data.push(data.clone());

        if *bytes_remaining == 0 {
          let PendingDataElement { tag, vr, data } = pending_data_element;

          let bytes = data.iter().flat_map(|c| c.iter().copied()).collect();
          let value =
            DataElementValue::new_binary_unchecked(vr, Rc::new(bytes));

          self.insert_data_element_at_current_location(tag, value);
        } else {
          self.pending_data_element = Some(pending_data_element);
        }

        Ok(())
      }

      part => {
        self.pending_data_element = Some(pending_data_element);
        self.unexpected_part_error(part)
      }
    }
  }

  /// Inserts a new data element into the data set or encapsulated pixel data
  /// sequence at the head of the builder's location.
  ///
  fn insert_data_element_at_current_location(
    &mut self,
    tag: DataElementTag,
    value: DataElementValue,
  ) {
    match (self.location.as_mut_slice(), value.bytes()) {
      // Insert new data element into the root data set or current sequence item
      ([BuilderLocation::RootDataSet { ref mut data_set }], _)
      | ([.., BuilderLocation::SequenceItem { ref mut data_set }], _) => {
        data_set.insert(tag, value);
      }

      // Insert new data element into the current encapsulated pixel data
      // sequence
      (
        [.., BuilderLocation::EncapsulatedPixelDataSequence { items, .. }],
        Ok(bytes),
      ) => items.push(bytes.clone()),

      // Other locations aren't valid for insertion of a data element. This case
      // is not expected to be logically possible.
      _ => unreachable!(),
    };
  }

  /// The error returned when an unexpected DICOM P10 part is received.
  ///
  fn unexpected_part_error(&self, part: &P10Part) -> Result<(), P10Error> {
    Err(P10Error::PartStreamInvalid {
      when: "Building data set".to_string(),
      details: format!(
        "Received unexpected P10 part at location: {}",
        location_to_string(&self.location),
      ),
      part: part.clone(),
    })
  }
}

impl P10PartListener for DataSetBuilder {
  fn add_part(&mut self, part: &P10Part) -> Result<(), P10Error> {
    DataSetBuilder::add_part(self, part)
  }
}

/// Converts a data set location to a human-readable string for error reporting
/// and debugging purposes.
///
fn location_to_string(location: &[BuilderLocation]) -> String {
  location
    .iter()
    .map(|item| match item {
      BuilderLocation::RootDataSet { .. } => "RootDataSet".to_string(),
      BuilderLocation::Sequence { tag, .. } => format!("Sequence{}", tag),
      BuilderLocation::SequenceItem { .. } => "SequenceItem".to_string(),
      BuilderLocation::EncapsulatedPixelDataSequence { .. } => {
        "EncapsulatedPixelDataSequence".to_string()
      }
    })
    .collect::<Vec<String>>()
    .join(".")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn patient_id_parts(value: &[u8]) -> Vec<P10Part> {
    vec![
      P10Part::DataElementHeader {
        tag: dictionary::PATIENT_ID.tag,
        vr: ValueRepresentation::LongString,
        length: value.len() as u32,
      },
      P10Part::DataElementValueBytes {
        vr: ValueRepresentation::LongString,
        data: Rc::new(value.to_vec()),
        bytes_remaining: 0,
      },
    ]
  }

  #[test]
  fn build_nested_data_set_test() {
    let mut builder = DataSetBuilder::new();

    let mut parts = vec![
      P10Part::FilePreambleAndDICMPrefix {
        preamble: Box::new([1; 128]),
      },
      P10Part::SequenceStart {
        tag: dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag,
        vr: ValueRepresentation::Sequence,
      },
      P10Part::SequenceItemStart,
    ];
    parts.extend(patient_id_parts(b"AB"));
    parts.extend([
      P10Part::SequenceItemDelimiter,
      P10Part::SequenceDelimiter,
      P10Part::End,
    ]);

    for part in parts.iter() {
      builder.add_part(part).unwrap();
    }

    assert!(builder.is_complete());
    assert_eq!(builder.file_preamble(), Some(&[1; 128]));

    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::PATIENT_ID, &["AB"])
      .unwrap();

    let mut expected = DataSet::new();
    expected.insert(
      dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item]),
    );

    assert_eq!(builder.final_data_set(), Ok(expected));
  }

  #[test]
  fn chunked_value_bytes_test() {
    let mut builder = DataSetBuilder::new();

    builder
      .add_part(&P10Part::DataElementHeader {
        tag: dictionary::PATIENT_ID.tag,
        vr: ValueRepresentation::LongString,
        length: 4,
      })
      .unwrap();

    for (data, bytes_remaining) in [(b"AB", 2), (b"CD", 0)] {
      builder
        .add_part(&P10Part::DataElementValueBytes {
          vr: ValueRepresentation::LongString,
          data: Rc::new(data.to_vec()),
          bytes_remaining,
        })
        .unwrap();
    }

    builder.add_part(&P10Part::End).unwrap();

    assert_eq!(
      builder
        .final_data_set()
        .unwrap()
        .get_string(dictionary::PATIENT_ID.tag),
      Ok("ABCD")
    );
  }

  #[test]
  fn unexpected_part_test() {
    let mut builder = DataSetBuilder::new();

    assert!(matches!(
      builder.add_part(&P10Part::SequenceItemDelimiter),
      Err(P10Error::PartStreamInvalid { .. })
    ));

    builder.add_part(&P10Part::End).unwrap();

    assert!(matches!(
      builder.add_part(&P10Part::End),
      Err(P10Error::PartStreamInvalid { .. })
    ));
  }

  #[test]
  fn force_end_test() {
    let mut builder = DataSetBuilder::new();

    builder
      .add_part(&P10Part::SequenceStart {
        tag: dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag,
        vr: ValueRepresentation::Sequence,
      })
      .unwrap();
    builder.add_part(&P10Part::SequenceItemStart).unwrap();

    for part in patient_id_parts(b"AB") {
      builder.add_part(&part).unwrap();
    }

    assert_eq!(builder.final_data_set(), Err(()));

    builder.force_end();

    let data_set = builder.final_data_set().unwrap();
    assert_eq!(
      data_set
        .get_value(dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag)
        .unwrap()
        .sequence_items()
        .unwrap()
        .len(),
      1
    );
  }
}
