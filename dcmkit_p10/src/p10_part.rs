//! Defines the parts of DICOM P10 data that are emitted by a read context and
//! consumed by listeners, transforms, and write contexts.

use std::rc::Rc;

use dcmkit_core::{
  dictionary, DataElementTag, DataElementValue, DataSet, ValueRepresentation,
};

/// A DICOM P10 part is the smallest piece of structured DICOM P10 data. A
/// stream of parts is the result of progressively reading raw DICOM P10 bytes,
/// or of converting a data set for serialization.
///
#[derive(Clone, Debug, PartialEq)]
pub enum P10Part {
  /// The 128-byte File Preamble that precedes the "DICM" prefix. Its content is
  /// application-defined and is commonly all zeros.
  FilePreambleAndDICMPrefix { preamble: Box<[u8; 128]> },

  /// The File Meta Information data set, i.e. the group 0x0002 data elements.
  FileMetaInformation { data_set: DataSet },

  /// The start of a data element that has a value. This part is always
  /// followed by one or more [`P10Part::DataElementValueBytes`] parts.
  DataElementHeader {
    tag: DataElementTag,
    vr: ValueRepresentation,
    length: u32,
  },

  /// Raw little endian bytes for the value of the current data element or
  /// pixel data item. Values longer than the maximum part size are split
  /// across several of these parts, the last of which has no bytes remaining.
  DataElementValueBytes {
    vr: ValueRepresentation,
    data: Rc<Vec<u8>>,
    bytes_remaining: u32,
  },

  /// The start of a new sequence. For encapsulated pixel data the VR is
  /// [`ValueRepresentation::OtherByteString`] or
  /// [`ValueRepresentation::OtherWordString`], otherwise it is
  /// [`ValueRepresentation::Sequence`].
  SequenceStart {
    tag: DataElementTag,
    vr: ValueRepresentation,
  },

  /// The end of the current sequence.
  SequenceDelimiter,

  /// The start of a new item in the current sequence.
  SequenceItemStart,

  /// The end of the current sequence item.
  SequenceItemDelimiter,

  /// The start of a new fragment in the current encapsulated pixel data
  /// sequence. Its data follows in [`P10Part::DataElementValueBytes`] parts.
  PixelDataItem { length: u32 },

  /// The end of the DICOM P10 data.
  End,
}

impl std::fmt::Display for P10Part {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      P10Part::FilePreambleAndDICMPrefix { .. } => {
        write!(f, "FilePreambleAndDICMPrefix")
      }

      P10Part::FileMetaInformation { data_set } => write!(
        f,
        "FileMetaInformation: {}",
        data_set
          .iter()
          .map(|(tag, value)| format!(
            "{} {}",
            dictionary::tag_with_name(*tag, None),
            value.value_representation()
          ))
          .collect::<Vec<String>>()
          .join(", ")
      ),

      P10Part::DataElementHeader { tag, vr, length } => write!(
        f,
        "DataElementHeader: {}, name: {}, vr: {}, length: {} bytes",
        tag,
        dictionary::tag_name(*tag, None),
        vr,
        length
      ),

      P10Part::DataElementValueBytes {
        data,
        bytes_remaining,
        ..
      } => write!(
        f,
        "DataElementValueBytes: {} bytes of data, {} bytes remaining",
        data.len(),
        bytes_remaining
      ),

      P10Part::SequenceStart { tag, vr } => write!(
        f,
        "SequenceStart: {}, name: {}, vr: {}",
        tag,
        dictionary::tag_name(*tag, None),
        vr
      ),

      P10Part::SequenceDelimiter => write!(f, "SequenceDelimiter"),
      P10Part::SequenceItemStart => write!(f, "SequenceItemStart"),
      P10Part::SequenceItemDelimiter => write!(f, "SequenceItemDelimiter"),

      P10Part::PixelDataItem { length } => {
        write!(f, "PixelDataItem: {} bytes", length)
      }

      P10Part::End => write!(f, "End"),
    }
  }
}

/// Converts the data elements in a data set to DICOM P10 parts, which are
/// passed to a callback in order.
///
pub fn data_elements_to_parts<E>(
  data_set: &DataSet,
  part_callback: &mut impl FnMut(&P10Part) -> Result<(), E>,
) -> Result<(), E> {
  for (tag, value) in data_set.iter() {
    data_element_to_parts(*tag, value, part_callback)?;
  }

  Ok(())
}

/// Converts a single data element to DICOM P10 parts, which are passed to a
/// callback in order.
///
pub fn data_element_to_parts<E>(
  tag: DataElementTag,
  value: &DataElementValue,
  part_callback: &mut impl FnMut(&P10Part) -> Result<(), E>,
) -> Result<(), E> {
  let vr = value.value_representation();

  if let Ok(bytes) = value.bytes() {
    part_callback(&P10Part::DataElementHeader {
      tag,
      vr,
      length: bytes.len() as u32,
    })?;

    return part_callback(&P10Part::DataElementValueBytes {
      vr,
      data: bytes.clone(),
      bytes_remaining: 0,
    });
  }

  if let Ok(items) = value.encapsulated_pixel_data() {
    part_callback(&P10Part::SequenceStart { tag, vr })?;

    for item in items {
      part_callback(&P10Part::PixelDataItem {
        length: item.len() as u32,
      })?;

      part_callback(&P10Part::DataElementValueBytes {
        vr,
        data: item.clone(),
        bytes_remaining: 0,
      })?;
    }

    return part_callback(&P10Part::SequenceDelimiter);
  }

  if let Ok(items) = value.sequence_items() {
    part_callback(&P10Part::SequenceStart { tag, vr })?;

    for item in items {
      part_callback(&P10Part::SequenceItemStart)?;
      data_elements_to_parts(item, part_callback)?;
      part_callback(&P10Part::SequenceItemDelimiter)?;
    }

    return part_callback(&P10Part::SequenceDelimiter);
  }

  // A value is always one of the three kinds handled above
  unreachable!();
}

#[cfg(test)]
mod tests {
  use super::*;

  fn collect_parts(
    tag: DataElementTag,
    value: &DataElementValue,
  ) -> Vec<P10Part> {
    let mut parts = vec![];

    data_element_to_parts::<()>(tag, value, &mut |part| {
      parts.push(part.clone());
      Ok(())
    })
    .unwrap();

    parts
  }

  #[test]
  fn data_element_to_parts_test() {
    let value = DataElementValue::new_unsigned_short(&[16]).unwrap();

    assert_eq!(
      collect_parts(dictionary::BITS_ALLOCATED.tag, &value),
      vec![
        P10Part::DataElementHeader {
          tag: dictionary::BITS_ALLOCATED.tag,
          vr: ValueRepresentation::UnsignedShort,
          length: 2,
        },
        P10Part::DataElementValueBytes {
          vr: ValueRepresentation::UnsignedShort,
          data: Rc::new(vec![16, 0]),
          bytes_remaining: 0,
        },
      ]
    );
  }

  #[test]
  fn sequence_to_parts_test() {
    let value = DataElementValue::new_sequence(vec![DataSet::new()]);

    assert_eq!(
      collect_parts(dictionary::REFERENCED_IMAGE_SEQUENCE.tag, &value),
      vec![
        P10Part::SequenceStart {
          tag: dictionary::REFERENCED_IMAGE_SEQUENCE.tag,
          vr: ValueRepresentation::Sequence,
        },
        P10Part::SequenceItemStart,
        P10Part::SequenceItemDelimiter,
        P10Part::SequenceDelimiter,
      ]
    );
  }

  #[test]
  fn encapsulated_pixel_data_to_parts_test() {
    let value = DataElementValue::new_encapsulated_pixel_data(
      ValueRepresentation::OtherByteString,
      vec![Rc::new(vec![]), Rc::new(vec![1, 2])],
    )
    .unwrap();

    assert_eq!(
      collect_parts(dictionary::PIXEL_DATA.tag, &value),
      vec![
        P10Part::SequenceStart {
          tag: dictionary::PIXEL_DATA.tag,
          vr: ValueRepresentation::OtherByteString,
        },
        P10Part::PixelDataItem { length: 0 },
        P10Part::DataElementValueBytes {
          vr: ValueRepresentation::OtherByteString,
          data: Rc::new(vec![]),
          bytes_remaining: 0,
        },
        P10Part::PixelDataItem { length: 2 },
        P10Part::DataElementValueBytes {
          vr: ValueRepresentation::OtherByteString,
          data: Rc::new(vec![1, 2]),
          bytes_remaining: 0,
        },
        P10Part::SequenceDelimiter,
      ]
    );
  }

  #[test]
  fn to_string_test() {
    assert_eq!(
      P10Part::SequenceStart {
        tag: dictionary::REFERENCED_IMAGE_SEQUENCE.tag,
        vr: ValueRepresentation::Sequence,
      }
      .to_string(),
      "SequenceStart: (0008,1140), name: ReferencedImageSequence, vr: SQ"
    );
  }
}
