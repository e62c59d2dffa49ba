//! Mapping between data element tags and the keys used in natural data sets.

use dcmkit_core::{dictionary, DataElementTag, ValueRepresentation};

/// Returns the natural key for a tag. This is its standard dictionary name if
/// that name maps back to the same tag, and its `"(GGGG,EEEE)"` form
/// otherwise.
///
pub fn natural_key(tag: DataElementTag) -> String {
  if !tag.is_private() {
    if let Some(entry) = dictionary::find_standard(tag) {
      if dictionary::find_by_name(entry.name) == Some(tag) {
        return entry.name.to_string();
      }
    }
  }

  tag.to_string()
}

/// Returns the tag for a natural key, which is either a standard dictionary
/// name or a tag in `"(GGGG,EEEE)"` form.
///
#[allow(clippy::result_unit_err)]
pub fn parse_natural_key(key: &str) -> Result<DataElementTag, ()> {
  if key.starts_with('(') {
    DataElementTag::from_bracketed_string(key)
  } else {
    dictionary::find_by_name(key).ok_or(())
  }
}

/// Returns the VR a data element is assumed to have when a natural data set
/// has no VR map entry for it.
///
pub fn default_vr(tag: DataElementTag) -> Option<ValueRepresentation> {
  dictionary::find(tag, None)
    .ok()
    .and_then(|entry| entry.vrs.first().copied())
}

/// Returns whether a data element needs an entry in a natural data set's VR
/// map. Private data elements always get one.
///
pub fn needs_vr_map_entry(
  tag: DataElementTag,
  vr: ValueRepresentation,
) -> bool {
  tag.is_private() || default_vr(tag) != Some(vr)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn natural_key_test() {
    assert_eq!(natural_key(dictionary::PATIENT_NAME.tag), "PatientName");
    assert_eq!(
      natural_key(DataElementTag::new(0x0009, 0x1001)),
      "(0009,1001)"
    );
    assert_eq!(
      natural_key(DataElementTag::new(0x0010, 0xFFF0)),
      "(0010,FFF0)"
    );
  }

  #[test]
  fn parse_natural_key_test() {
    assert_eq!(
      parse_natural_key("PatientName"),
      Ok(dictionary::PATIENT_NAME.tag)
    );
    assert_eq!(
      parse_natural_key("(0009,1001)"),
      Ok(DataElementTag::new(0x0009, 0x1001))
    );
    assert_eq!(parse_natural_key("NotADictionaryName"), Err(()));
    assert_eq!(parse_natural_key("(0009,10)"), Err(()));
  }

  #[test]
  fn needs_vr_map_entry_test() {
    assert!(!needs_vr_map_entry(
      dictionary::ROWS.tag,
      ValueRepresentation::UnsignedShort
    ));
    assert!(needs_vr_map_entry(
      dictionary::ROWS.tag,
      ValueRepresentation::SignedShort
    ));
    assert!(needs_vr_map_entry(
      DataElementTag::new(0x0009, 0x0010),
      ValueRepresentation::LongString
    ));
    assert!(needs_vr_map_entry(
      DataElementTag::new(0x0010, 0xFFF0),
      ValueRepresentation::LongString
    ));
  }
}
