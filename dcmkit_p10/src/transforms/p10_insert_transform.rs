use dcmkit_core::{DataElementTag, DataElementValue, DataSet};

use crate::{
  p10_part, P10Error, P10FilterTransform, P10Part, P10PartListener,
  P10Transform,
};

/// Transform that inserts data elements into the root data set of a stream of
/// DICOM P10 parts. Any existing data elements with the same tags are replaced.
///
pub struct P10InsertTransform {
  data_elements_to_insert: Vec<(DataElementTag, DataElementValue)>,
  filter_transform: P10FilterTransform,
}

impl P10InsertTransform {
  /// Creates a new transform for inserting data elements into the root data set
  /// of a stream of DICOM P10 parts.
  ///
  pub fn new(data_elements_to_insert: DataSet) -> Self {
    let tags_to_insert = data_elements_to_insert.tags();

    // Filter out the data elements that are going to be inserted so there are
    // no duplicates in the resulting part stream
    let filter_transform =
      P10FilterTransform::new(Box::new(move |tag, _vr, location| {
        !location.is_empty() || !tags_to_insert.contains(&tag)
      }));

    Self {
      data_elements_to_insert: data_elements_to_insert
        .into_iter()
        .rev()
        .collect(),
      filter_transform,
    }
  }

  /// Emits the parts for all pending data elements whose tag is below the given
  /// limit, or all of them when there's no limit.
  ///
  fn insert_data_elements_before(
    &mut self,
    limit: Option<DataElementTag>,
    next: &mut dyn P10PartListener,
  ) -> Result<(), P10Error> {
    while let Some((tag, value)) = self.data_elements_to_insert.pop() {
      if limit.is_some_and(|limit| tag >= limit) {
        self.data_elements_to_insert.push((tag, value));
        break;
      }

      p10_part::data_element_to_parts(tag, &value, &mut |part: &P10Part| {
        next.add_part(part)
      })?;
    }

    Ok(())
  }
}

impl P10Transform for P10InsertTransform {
  fn add_part(
    &mut self,
    part: &P10Part,
    next: &mut dyn P10PartListener,
  ) -> Result<(), P10Error> {
    // If there are no more data elements to be inserted then pass the part
    // straight through
    if self.data_elements_to_insert.is_empty() {
      return next.add_part(part);
    }

    let is_at_root = self.filter_transform.is_at_root();

    if !self.filter_transform.filter_part(part) {
      return Ok(());
    }

    // Insertion only happens in the root data set
    if !is_at_root {
      return next.add_part(part);
    }

    match part {
      P10Part::SequenceStart { tag, .. }
      | P10Part::DataElementHeader { tag, .. } => {
        self.insert_data_elements_before(Some(*tag), next)?;
      }

      P10Part::End => self.insert_data_elements_before(None, next)?,

      _ => (),
    };

    next.add_part(part)
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use dcmkit_core::ValueRepresentation;

  use super::*;

  #[test]
  fn add_parts_test() {
    let data_elements_to_insert: DataSet = [0, 1, 3, 4, 6]
      .into_iter()
      .map(|group| (DataElementTag::new(group, 0), long_text(group)))
      .collect();

    let mut insert_transform = P10InsertTransform::new(data_elements_to_insert);

    let input_parts: Vec<P10Part> = vec![
      parts_for_tag(DataElementTag::new(2, 0)),
      parts_for_tag(DataElementTag::new(3, 0)),
      parts_for_tag(DataElementTag::new(5, 0)),
      vec![P10Part::End],
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut output_parts = vec![];
    for part in input_parts {
      insert_transform.add_part(&part, &mut output_parts).unwrap();
    }

    assert_eq!(
      output_parts,
      [0, 1, 2, 3, 4, 5, 6]
        .into_iter()
        .flat_map(|group| parts_for_tag(DataElementTag::new(group, 0)))
        .chain([P10Part::End])
        .collect::<Vec<P10Part>>()
    );
  }

  fn long_text(group: u16) -> DataElementValue {
    DataElementValue::new_text(
      ValueRepresentation::LongText,
      &[&group.to_string()],
    )
    .unwrap()
  }

  fn parts_for_tag(tag: DataElementTag) -> Vec<P10Part> {
    let value_bytes = format!("{} ", tag.group).into_bytes();

    vec![
      P10Part::DataElementHeader {
        tag,
        vr: ValueRepresentation::LongText,
        length: value_bytes.len() as u32,
      },
      P10Part::DataElementValueBytes {
        vr: ValueRepresentation::LongText,
        data: Rc::new(value_bytes),
        bytes_remaining: 0,
      },
    ]
  }
}
