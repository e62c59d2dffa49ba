//! The frame stack used by a read context to track where in the hierarchy of
//! sequences and items the read is up to.
//!
//! Each frame records the end offset of a defined-length sequence or item, so
//! that delimiters can be synthesized when that offset is reached. Root and
//! item frames also hold the data elements needed to interpret later data
//! elements in the same data set:
//!
//! 1. Private creator values, which select the private dictionary block used
//!    to resolve the VR of private tags under an implicit VR transfer syntax.
//!
//! 2. *'(0028,0103) PixelRepresentation'*, which decides between `US` and `SS`
//!    for pixel value data elements under an implicit VR transfer syntax.

use std::collections::HashMap;

use dcmkit_core::{dictionary, DataElementTag, ValueRepresentation as VR};

use crate::P10Part;

pub struct P10Location {
  entries: Vec<LocationEntry>,
}

enum LocationEntry {
  RootDataSet {
    clarifying_data_elements: ClarifyingDataElements,
  },
  Sequence {
    is_implicit_vr: bool,
    ends_at: Option<u64>,
    item_count: usize,
  },
  Item {
    clarifying_data_elements: ClarifyingDataElements,
    ends_at: Option<u64>,
  },
}

#[derive(Clone, Default)]
struct ClarifyingDataElements {
  pixel_representation: Option<u16>,
  private_creators: HashMap<DataElementTag, String>,
}

/// Returns whether a data element must be read in full so its value can be
/// added to the location with [`P10Location::add_clarifying_data_element()`].
///
pub fn is_clarifying_data_element(tag: DataElementTag) -> bool {
  tag == dictionary::PIXEL_REPRESENTATION.tag || tag.is_private_creator()
}

impl P10Location {
  /// Creates a new location holding just the root data set.
  ///
  pub fn new() -> Self {
    Self {
      entries: vec![LocationEntry::RootDataSet {
        clarifying_data_elements: ClarifyingDataElements::default(),
      }],
    }
  }

  /// Returns whether a sequence in the location has forced the use of
  /// 'Implicit VR Little Endian'. This happens for an explicit VR of `UN` with
  /// an undefined length.
  ///
  pub fn is_implicit_vr_forced(&self) -> bool {
    self.entries.iter().any(|entry| {
      matches!(
        entry,
        LocationEntry::Sequence {
          is_implicit_vr: true,
          ..
        }
      )
    })
  }

  /// Returns the number of sequences in the location.
  ///
  pub fn sequence_depth(&self) -> usize {
    self
      .entries
      .iter()
      .filter(|entry| matches!(entry, LocationEntry::Sequence { .. }))
      .count()
  }

  /// Pops the innermost defined-length sequence or item if `bytes_read` has
  /// reached its end, and returns the delimiter part that ends it.
  ///
  pub fn next_delimiter_part(&mut self, bytes_read: u64) -> Option<P10Part> {
    let part = match self.entries.last() {
      Some(LocationEntry::Sequence {
        ends_at: Some(ends_at),
        ..
      }) if *ends_at <= bytes_read => P10Part::SequenceDelimiter,

      Some(LocationEntry::Item {
        ends_at: Some(ends_at),
        ..
      }) if *ends_at <= bytes_read => P10Part::SequenceItemDelimiter,

      _ => return None,
    };

    self.entries.pop();

    Some(part)
  }

  /// Returns whether every sequence and item has been closed, leaving just the
  /// root data set.
  ///
  pub fn is_at_root(&self) -> bool {
    matches!(self.entries.as_slice(), [LocationEntry::RootDataSet { .. }])
  }

  pub fn add_sequence(
    &mut self,
    tag: DataElementTag,
    is_implicit_vr: bool,
    ends_at: Option<u64>,
  ) -> Result<(), String> {
    match self.entries.last() {
      Some(LocationEntry::RootDataSet { .. })
      | Some(LocationEntry::Item { .. }) => {
        self.entries.push(LocationEntry::Sequence {
          is_implicit_vr,
          ends_at,
          item_count: 0,
        });

        Ok(())
      }

      _ => Err(format!(
        "Sequence '{}' encountered outside of the root data set or an item",
        dictionary::tag_with_name(tag, self.private_creator_for_tag(tag))
      )),
    }
  }

  pub fn end_sequence(&mut self) -> Result<(), String> {
    match self.entries.last() {
      Some(LocationEntry::Sequence { .. }) => {
        self.entries.pop();
        Ok(())
      }

      _ => {
        Err("Sequence delimiter encountered outside of a sequence".to_string())
      }
    }
  }

  /// Returns the number of items that have been added to the current sequence.
  ///
  pub fn sequence_item_count(&self) -> Option<usize> {
    match self.entries.last() {
      Some(LocationEntry::Sequence { item_count, .. }) => Some(*item_count),
      _ => None,
    }
  }

  /// Adds a new item to the current sequence. Returns whether the item's
  /// defined length runs past the end of the sequence's defined length.
  ///
  pub fn add_item(&mut self, ends_at: Option<u64>) -> Result<bool, String> {
    let clarifying_data_elements =
      self.active_clarifying_data_elements().clone();

    match self.entries.last_mut() {
      Some(LocationEntry::Sequence {
        item_count,
        ends_at: sequence_ends_at,
        ..
      }) => {
        *item_count += 1;

        let overruns = match (ends_at, *sequence_ends_at) {
          (Some(ends_at), Some(sequence_ends_at)) => {
            ends_at > sequence_ends_at
          }
          _ => false,
        };

        self.entries.push(LocationEntry::Item {
          clarifying_data_elements,
          ends_at,
        });

        Ok(overruns)
      }

      _ => Err("Item encountered outside of a sequence".to_string()),
    }
  }

  /// Ends the current item. Returns whether the item ended past the end of the
  /// sequence's defined length.
  ///
  pub fn end_item(&mut self, bytes_read: u64) -> Result<bool, String> {
    match self.entries.last() {
      Some(LocationEntry::Item { .. }) => {
        self.entries.pop();

        Ok(matches!(
          self.entries.last(),
          Some(LocationEntry::Sequence {
            ends_at: Some(ends_at),
            ..
          }) if *ends_at < bytes_read
        ))
      }

      _ => Err("Item delimiter encountered outside of an item".to_string()),
    }
  }

  /// Returns the clarifying data elements of the innermost root or item
  /// frame.
  ///
  fn active_clarifying_data_elements(&self) -> &ClarifyingDataElements {
    for entry in self.entries.iter().rev() {
      match entry {
        LocationEntry::RootDataSet {
          clarifying_data_elements,
        }
        | LocationEntry::Item {
          clarifying_data_elements,
          ..
        } => return clarifying_data_elements,

        LocationEntry::Sequence { .. } => (),
      }
    }

    unreachable!();
  }

  fn active_clarifying_data_elements_mut(
    &mut self,
  ) -> &mut ClarifyingDataElements {
    for entry in self.entries.iter_mut().rev() {
      match entry {
        LocationEntry::RootDataSet {
          clarifying_data_elements,
        }
        | LocationEntry::Item {
          clarifying_data_elements,
          ..
        } => return clarifying_data_elements,

        LocationEntry::Sequence { .. } => (),
      }
    }

    unreachable!();
  }

  /// Records the value of a clarifying data element in the current data set.
  ///
  pub fn add_clarifying_data_element(
    &mut self,
    tag: DataElementTag,
    vr: VR,
    value_bytes: &[u8],
  ) {
    let clarifying_data_elements = self.active_clarifying_data_elements_mut();

    if tag == dictionary::PIXEL_REPRESENTATION.tag && vr == VR::UnsignedShort {
      if let Ok(bytes) = <[u8; 2]>::try_from(value_bytes) {
        clarifying_data_elements.pixel_representation =
          Some(u16::from_le_bytes(bytes));
      }
    } else if tag.is_private_creator() {
      if let Ok(value) = std::str::from_utf8(value_bytes) {
        let private_creator = value.trim_end_matches([' ', '\0']).to_string();

        clarifying_data_elements
          .private_creators
          .insert(tag, private_creator);
      }
    }
  }

  /// Returns the private creator that reserves the block holding a private tag
  /// in the current data set.
  ///
  pub fn private_creator_for_tag(&self, tag: DataElementTag) -> Option<&str> {
    let creator_tag = tag.private_creator_tag()?;

    self
      .active_clarifying_data_elements()
      .private_creators
      .get(&creator_tag)
      .map(|s| s.as_str())
  }

  /// Looks up a tag in the dictionary using the private creators recorded for
  /// the current data set.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn find_entry(
    &self,
    tag: DataElementTag,
  ) -> Result<dictionary::Entry<'static>, ()> {
    dictionary::find(tag, self.private_creator_for_tag(tag))
  }

  /// Returns the VR for a data element read under an implicit VR transfer
  /// syntax. Errors if the tag isn't in the dictionary.
  ///
  /// Tags with a single allowed VR use it. Where several VRs are allowed the
  /// choice is made as follows:
  ///
  /// - `US` or `SS` uses *'(0028,0103) PixelRepresentation'*, with signed
  ///   chosen unless the pixel representation is zero.
  ///
  /// - `OB` or `OW` and `US` or `OW` resolve to `OW`, which is the only one
  ///   of these permitted under 'Implicit VR Little Endian'.
  ///
  /// Anything else falls back to `UN`.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn infer_vr_for_tag(&self, tag: DataElementTag) -> Result<VR, ()> {
    let entry = self.find_entry(tag)?;

    let vr = match entry.vrs {
      [vr] => *vr,

      [VR::UnsignedShort, VR::SignedShort] => {
        match self.active_clarifying_data_elements().pixel_representation {
          Some(0) => VR::UnsignedShort,
          _ => VR::SignedShort,
        }
      }

      [VR::OtherByteString, VR::OtherWordString]
      | [VR::UnsignedShort, VR::OtherWordString] => VR::OtherWordString,

      _ => VR::Unknown,
    };

    Ok(vr)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defined_length_delimiters_test() {
    let mut location = P10Location::new();
    let tag = dictionary::REFERENCED_IMAGE_SEQUENCE.tag;

    location.add_sequence(tag, false, Some(100)).unwrap();
    assert_eq!(location.add_item(Some(50)), Ok(false));
    assert_eq!(location.sequence_depth(), 1);

    assert_eq!(location.next_delimiter_part(49), None);
    assert_eq!(
      location.next_delimiter_part(50),
      Some(P10Part::SequenceItemDelimiter)
    );
    assert_eq!(location.sequence_item_count(), Some(1));
    assert_eq!(
      location.next_delimiter_part(100),
      Some(P10Part::SequenceDelimiter)
    );
    assert!(location.is_at_root());
  }

  #[test]
  fn item_overrun_test() {
    let mut location = P10Location::new();
    let tag = dictionary::REFERENCED_IMAGE_SEQUENCE.tag;

    location.add_sequence(tag, false, Some(20)).unwrap();
    assert_eq!(location.add_item(Some(30)), Ok(true));
    assert_eq!(location.next_delimiter_part(20), None);

    location.next_delimiter_part(30);
    assert_eq!(location.add_item(None), Ok(false));
    assert_eq!(location.end_item(40), Ok(true));
  }

  #[test]
  fn structure_errors_test() {
    let mut location = P10Location::new();

    assert!(location.add_item(None).is_err());
    assert!(location.end_item(0).is_err());
    assert!(location.end_sequence().is_err());

    location
      .add_sequence(dictionary::REFERENCED_IMAGE_SEQUENCE.tag, false, None)
      .unwrap();
    assert!(location
      .add_sequence(dictionary::SOURCE_IMAGE_SEQUENCE.tag, false, None)
      .is_err());

    assert!(!location.is_at_root());
  }

  #[test]
  fn infer_vr_for_tag_test() {
    let mut location = P10Location::new();

    assert_eq!(
      location.infer_vr_for_tag(dictionary::PATIENT_NAME.tag),
      Ok(VR::PersonName)
    );
    assert_eq!(
      location.infer_vr_for_tag(dictionary::PIXEL_DATA.tag),
      Ok(VR::OtherWordString)
    );
    assert_eq!(
      location.infer_vr_for_tag(dictionary::SMALLEST_IMAGE_PIXEL_VALUE.tag),
      Ok(VR::SignedShort)
    );
    assert_eq!(
      location.infer_vr_for_tag(DataElementTag::new(0x0011, 0x1001)),
      Err(())
    );

    location.add_clarifying_data_element(
      dictionary::PIXEL_REPRESENTATION.tag,
      VR::UnsignedShort,
      &[0, 0],
    );
    assert_eq!(
      location.infer_vr_for_tag(dictionary::SMALLEST_IMAGE_PIXEL_VALUE.tag),
      Ok(VR::UnsignedShort)
    );
  }

  #[test]
  fn private_creator_test() {
    let mut location = P10Location::new();

    location.add_clarifying_data_element(
      DataElementTag::new(0x0019, 0x0010),
      VR::LongString,
      b"SIEMENS MR HEADER ",
    );

    assert_eq!(
      location.private_creator_for_tag(DataElementTag::new(0x0019, 0x100C)),
      Some("SIEMENS MR HEADER")
    );
    assert_eq!(
      location.infer_vr_for_tag(DataElementTag::new(0x0019, 0x100C)),
      Ok(VR::IntegerString)
    );

    // Private creators in an item apply only to that item
    location
      .add_sequence(dictionary::REFERENCED_IMAGE_SEQUENCE.tag, false, None)
      .unwrap();
    location.add_item(None).unwrap();
    location.add_clarifying_data_element(
      DataElementTag::new(0x0019, 0x0010),
      VR::LongString,
      b"GEMS_ACQU_01",
    );
    assert_eq!(
      location.infer_vr_for_tag(DataElementTag::new(0x0019, 0x1023)),
      Ok(VR::DecimalString)
    );

    location.end_item(0).unwrap();
    assert_eq!(
      location.private_creator_for_tag(DataElementTag::new(0x0019, 0x1023)),
      Some("SIEMENS MR HEADER")
    );
  }
}
