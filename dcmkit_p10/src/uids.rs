//! Defines dcmkit's root UID prefix and the implementation details that are
//! stored into the File Meta Information of the DICOM P10 data it serializes.

use dcmkit_core::data_element_value::unique_identifier;

/// dcmkit's root UID prefix. UIDs under `2.25` are derived from UUIDs so don't
/// need a registered organization root.
///
pub const DCMKIT_ROOT_UID_PREFIX: &str = "2.25";

/// dcmkit's implementation class UID that is included in the File Meta
/// Information header of DICOM P10 data it serializes.
///
pub const DCMKIT_IMPLEMENTATION_CLASS_UID: &str =
  "2.25.250119482716053984021467551736189406741";

/// dcmkit's implementation version name that is included in the File Meta
/// Information header of DICOM P10 data it serializes.
///
pub static DCMKIT_IMPLEMENTATION_VERSION_NAME: std::sync::LazyLock<String> =
  std::sync::LazyLock::new(|| format!("dcmkit {}", env!("CARGO_PKG_VERSION")));

/// Generates a new random 64 character UID under dcmkit's root UID prefix.
///
pub fn new_uid() -> String {
  match unique_identifier::new(DCMKIT_ROOT_UID_PREFIX) {
    Ok(uid) => uid,

    // The prefix is a valid UID so generation can't fail
    Err(()) => unreachable!(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn implementation_class_uid_test() {
    assert!(unique_identifier::is_valid(DCMKIT_IMPLEMENTATION_CLASS_UID));
    assert!(DCMKIT_IMPLEMENTATION_VERSION_NAME.len() <= 16);
  }

  #[test]
  fn new_uid_test() {
    let uid = new_uid();

    assert_eq!(uid.len(), 64);
    assert!(uid.starts_with("2.25."));
    assert!(unique_identifier::is_valid(&uid));
    assert_ne!(uid, new_uid());
  }
}
