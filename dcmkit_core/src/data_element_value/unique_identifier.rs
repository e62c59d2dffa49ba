//! Validation, encoding, and generation of `UniqueIdentifier` values.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::DataError;

static UID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new("^(0|[1-9][0-9]*)(\\.(0|[1-9][0-9]*))*$").unwrap()
});

/// Returns whether a string is a valid UID: 1-64 characters made up of
/// period-separated components of digits, where a component only starts with
/// a zero if it is exactly `"0"`.
///
pub fn is_valid(uid: &str) -> bool {
  (1..=64).contains(&uid.len()) && UID_REGEX.is_match(uid)
}

/// Encodes UIDs as a `UniqueIdentifier` value, padded to even length with a
/// NUL byte.
///
pub fn to_bytes(uids: &[&str]) -> Result<Vec<u8>, DataError> {
  if let Some(uid) = uids.iter().find(|uid| !is_valid(uid)) {
    return Err(DataError::new_value_invalid(format!(
      "UniqueIdentifier is invalid: '{}'",
      uid
    )));
  }

  let mut bytes = uids.join("\\").into_bytes();
  if bytes.len() % 2 == 1 {
    bytes.push(0);
  }

  Ok(bytes)
}

/// Generates a random 64 character UID under the given prefix, which must be
/// empty or a valid UID of at most 60 characters.
///
#[allow(clippy::result_unit_err)]
pub fn new(prefix: &str) -> Result<String, ()> {
  if prefix.len() > 60 || (!prefix.is_empty() && !is_valid(prefix)) {
    return Err(());
  }

  let mut rng = rand::thread_rng();

  let mut uid = String::with_capacity(64);
  uid.push_str(prefix);
  if !prefix.is_empty() {
    uid.push('.');
  }

  // The first digit of the new component must be non-zero
  uid.push(char::from(b'0' + rng.gen_range(1..10)));
  while uid.len() < 64 {
    uid.push(char::from(b'0' + rng.gen_range(0..10)));
  }

  Ok(uid)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn is_valid_test() {
    assert!(is_valid("0"));
    assert!(is_valid("1.2.840.10008.1.2.1"));
    assert!(!is_valid(""));
    assert!(!is_valid("1.02"));
    assert!(!is_valid("1..2"));
    assert!(!is_valid("1.2."));
    assert!(!is_valid(&"1".repeat(65)));
  }

  #[test]
  fn to_bytes_test() {
    assert_eq!(to_bytes(&[]), Ok(vec![]));
    assert_eq!(to_bytes(&["1.2"]), Ok(b"1.2\0".to_vec()));
    assert_eq!(to_bytes(&["1.2", "3.45"]), Ok(b"1.2\\3.45".to_vec()));

    assert_eq!(
      to_bytes(&["1.2", "1.00"]),
      Err(DataError::new_value_invalid(
        "UniqueIdentifier is invalid: '1.00'".to_string()
      ))
    );
  }

  #[test]
  fn new_test() {
    for _ in 0..200 {
      let uid = new("").unwrap();
      assert!(is_valid(&uid));
      assert_eq!(uid.len(), 64);

      let uid = new("1.2.826").unwrap();
      assert!(is_valid(&uid));
      assert!(uid.starts_with("1.2.826."));
      assert_eq!(uid.len(), 64);
    }

    assert!(new(&"1".repeat(60)).is_ok());
    assert_eq!(new(&"1".repeat(61)), Err(()));
    assert_eq!(new("1."), Err(()));
  }
}
