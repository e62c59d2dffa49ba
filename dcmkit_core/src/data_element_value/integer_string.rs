//! Encoding of `IntegerString` values, which hold backslash-separated decimal
//! integers.

use crate::{utils, DataError};

pub fn from_bytes(bytes: &[u8]) -> Result<Vec<i32>, DataError> {
  let s = std::str::from_utf8(bytes).map_err(|_| {
    DataError::new_value_invalid(format!(
      "IntegerString is invalid UTF-8: {}",
      utils::inspect_u8_slice(bytes, 16)
    ))
  })?;

  utils::trim_end_padding(s)
    .split('\\')
    .map(str::trim)
    .filter(|value| !value.is_empty())
    .map(|value| {
      value.parse::<i32>().map_err(|_| {
        DataError::new_value_invalid(format!(
          "IntegerString is invalid: '{}'",
          value
        ))
      })
    })
    .collect()
}

pub fn to_bytes(values: &[i32]) -> Vec<u8> {
  let mut bytes = values
    .iter()
    .map(i32::to_string)
    .collect::<Vec<_>>()
    .join("\\")
    .into_bytes();

  if bytes.len() % 2 == 1 {
    bytes.push(b' ');
  }

  bytes
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_bytes_test() {
    assert_eq!(from_bytes(b""), Ok(vec![]));
    assert_eq!(from_bytes(b"  "), Ok(vec![]));
    assert_eq!(from_bytes(b"+4\\ -16 "), Ok(vec![4, -16]));

    assert_eq!(
      from_bytes(b"1.5"),
      Err(DataError::new_value_invalid(
        "IntegerString is invalid: '1.5'".to_string()
      ))
    );
  }

  #[test]
  fn to_bytes_test() {
    assert_eq!(to_bytes(&[]), b"".to_vec());
    assert_eq!(to_bytes(&[42]), b"42".to_vec());
    assert_eq!(to_bytes(&[-1, 100]), b"-1\\100 ".to_vec());
  }
}
