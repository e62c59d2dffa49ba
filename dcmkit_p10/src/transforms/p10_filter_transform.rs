use dcmkit_core::{dictionary, DataElementTag, ValueRepresentation};

use crate::{P10Error, P10Part, P10PartListener, P10Transform};

/// Transform that applies a data element filter to a stream of DICOM P10 parts.
/// Data elements rejected by the predicate are dropped along with everything
/// nested inside them.
///
pub struct P10FilterTransform {
  predicate: Box<PredicateFunction>,
  location: Vec<LocationEntry>,
}

/// An entry in the filter's location stack. The predicate receives the stack
/// of enclosing data elements so it can make decisions based on nesting.
///
#[derive(Clone, Debug, PartialEq)]
pub struct LocationEntry {
  pub tag: DataElementTag,
  pub filter_result: bool,
}

type PredicateFunction =
  dyn FnMut(DataElementTag, ValueRepresentation, &[LocationEntry]) -> bool;

impl P10FilterTransform {
  /// Creates a new filter transform for filtering a stream of DICOM P10 parts.
  ///
  /// The predicate function is called as parts are added to the transform, and
  /// only those data elements that return `true` from the predicate function
  /// will pass through this filter transform.
  ///
  pub fn new(predicate: Box<PredicateFunction>) -> Self {
    Self {
      predicate,
      location: vec![],
    }
  }

  /// Returns whether the current position of the filter transform is the root
  /// data set, i.e. there are no nested sequences currently active.
  ///
  pub fn is_at_root(&self) -> bool {
    self.location.is_empty()
  }

  /// Adds the next part to the filter transform and returns whether it should
  /// be included in the filtered part stream or not.
  ///
  pub fn filter_part(&mut self, part: &P10Part) -> bool {
    match part {
      // If this is a new sequence or data element then run the predicate
      // function to see if it passes the filter, then add it to the location
      P10Part::SequenceStart { tag, vr }
      | P10Part::DataElementHeader { tag, vr, .. } => {
        // The predicate function is skipped if a parent has already been
        // filtered out
        let filter_result = if self.current_filter_result() {
          (self.predicate)(*tag, *vr, &self.location)
        } else {
          false
        };

        self.location.push(LocationEntry {
          tag: *tag,
          filter_result,
        });

        filter_result
      }

      // Pixel data items take the result of their encapsulated sequence
      P10Part::PixelDataItem { .. } => {
        let filter_result = self.current_filter_result();

        self.location.push(LocationEntry {
          tag: dictionary::ITEM.tag,
          filter_result,
        });

        filter_result
      }

      // Detect the end of the entry at the head of the location and pop it off
      P10Part::SequenceDelimiter
      | P10Part::DataElementValueBytes {
        bytes_remaining: 0, ..
      } => {
        let filter_result = self.current_filter_result();

        self.location.pop();

        filter_result
      }

      _ => self.current_filter_result(),
    }
  }

  fn current_filter_result(&self) -> bool {
    match self.location.last() {
      Some(LocationEntry { filter_result, .. }) => *filter_result,
      None => true,
    }
  }
}

impl P10Transform for P10FilterTransform {
  fn add_part(
    &mut self,
    part: &P10Part,
    next: &mut dyn P10PartListener,
  ) -> Result<(), P10Error> {
    if self.filter_part(part) {
      next.add_part(part)
    } else {
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use dcmkit_core::{DataElementValue, DataSet};

  use super::*;
  use crate::p10_part;

  fn parts_for_data_set(data_set: &DataSet) -> Vec<P10Part> {
    let mut parts = vec![];

    p10_part::data_elements_to_parts::<()>(data_set, &mut |part| {
      parts.push(part.clone());
      Ok(())
    })
    .unwrap();

    parts.push(P10Part::End);

    parts
  }

  #[test]
  fn filter_nested_data_elements_test() {
    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::PATIENT_ID, &["123"])
      .unwrap();
    item
      .insert_string_value(&dictionary::PATIENT_NAME, &["Doe^Jane"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["Doe^John"])
      .unwrap();
    data_set.insert(
      dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item.clone()]),
    );
    data_set.insert(
      dictionary::PIXEL_DATA.tag,
      DataElementValue::new_encapsulated_pixel_data(
        ValueRepresentation::OtherByteString,
        vec![Rc::new(vec![1, 2])],
      )
      .unwrap(),
    );

    let mut filter = P10FilterTransform::new(Box::new(|tag, _vr, _location| {
      tag != dictionary::PATIENT_NAME.tag && tag != dictionary::PIXEL_DATA.tag
    }));

    let mut output = vec![];
    for part in parts_for_data_set(&data_set) {
      filter.add_part(&part, &mut output).unwrap();
    }

    item.delete(dictionary::PATIENT_NAME.tag);

    let mut expected = DataSet::new();
    expected.insert(
      dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item]),
    );

    assert_eq!(output, parts_for_data_set(&expected));
    assert!(filter.is_at_root());
  }

  #[test]
  fn filter_whole_sequence_test() {
    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![DataSet::new(), DataSet::new()]),
    );

    let mut filter = P10FilterTransform::new(Box::new(|tag, _vr, location| {
      assert!(location.is_empty());
      tag != dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag
    }));

    let mut output = vec![];
    for part in parts_for_data_set(&data_set) {
      filter.add_part(&part, &mut output).unwrap();
    }

    assert_eq!(output, vec![P10Part::End]);
  }
}
