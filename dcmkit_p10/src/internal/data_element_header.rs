use dcmkit_core::{dictionary, DataElementTag, ValueRepresentation};

use crate::internal::value_length::ValueLength;

/// The header of a single data element as read off the wire: its tag, VR, and
/// length. The VR is `None` for items and delimiters, which never carry one.
///
#[derive(Debug, PartialEq)]
pub struct DataElementHeader {
  pub tag: DataElementTag,
  pub vr: Option<ValueRepresentation>,
  pub length: ValueLength,
}

impl DataElementHeader {
  /// Returns whether a tag is one of the item or delimitation tags that are
  /// always encoded with an implicit VR.
  ///
  pub fn is_item_or_delimiter(tag: DataElementTag) -> bool {
    tag == dictionary::ITEM.tag
      || tag == dictionary::ITEM_DELIMITATION_ITEM.tag
      || tag == dictionary::SEQUENCE_DELIMITATION_ITEM.tag
  }
}

impl std::fmt::Display for DataElementHeader {
  /// Formats a header as `"(GGGG,EEEE) VR Name"`, e.g.
  /// `"(0008,0020) DA StudyDate"`.
  ///
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let tag_name = dictionary::tag_name(self.tag, None);

    match self.vr {
      Some(vr) => write!(f, "{} {} {}", self.tag, vr, tag_name),
      None => write!(f, "{} {}", self.tag, tag_name),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_string_test() {
    assert_eq!(
      DataElementHeader {
        tag: dictionary::PATIENT_SEX.tag,
        vr: Some(ValueRepresentation::CodeString),
        length: ValueLength::ZERO,
      }
      .to_string(),
      "(0010,0040) CS PatientSex"
    );

    assert_eq!(
      DataElementHeader {
        tag: dictionary::ITEM.tag,
        vr: None,
        length: ValueLength::Undefined,
      }
      .to_string(),
      "(FFFE,E000) Item"
    );
  }

  #[test]
  fn is_item_or_delimiter_test() {
    assert!(DataElementHeader::is_item_or_delimiter(dictionary::ITEM.tag));
    assert!(DataElementHeader::is_item_or_delimiter(
      dictionary::SEQUENCE_DELIMITATION_ITEM.tag
    ));
    assert!(!DataElementHeader::is_item_or_delimiter(
      dictionary::PIXEL_DATA.tag
    ));
  }
}
