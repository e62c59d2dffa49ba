//! Encoding of `DecimalString` values, which hold backslash-separated decimal
//! numbers of at most 16 characters each.

use crate::{utils, DataError};

/// Parses a `DecimalString` value. Surrounding whitespace on each number is
/// ignored, as are empty values.
///
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<f64>, DataError> {
  let s = std::str::from_utf8(bytes).map_err(|_| {
    DataError::new_value_invalid(format!(
      "DecimalString is invalid UTF-8: {}",
      utils::inspect_u8_slice(bytes, 16)
    ))
  })?;

  let s = utils::trim_end_padding(s);

  s.split('\\')
    .map(str::trim)
    .filter(|value| !value.is_empty())
    .map(|value| {
      value.parse::<f64>().map_err(|_| {
        DataError::new_value_invalid(format!(
          "DecimalString is invalid: '{}'",
          value
        ))
      })
    })
    .collect()
}

/// Formats numbers as a `DecimalString` value, padded to even length. Each
/// number uses plain notation when it fits in 16 characters, and otherwise
/// exponential notation. Numbers too precise for either are rounded to fit.
///
pub fn to_bytes(values: &[f64]) -> Vec<u8> {
  let mut bytes = values
    .iter()
    .map(|value| format_decimal(*value))
    .collect::<Vec<_>>()
    .join("\\")
    .into_bytes();

  if bytes.len() % 2 == 1 {
    bytes.push(b' ');
  }

  bytes
}

/// The maximum length of a single number in a `DecimalString` value.
const MAX_NUMBER_LENGTH: usize = 16;

fn format_decimal(value: f64) -> String {
  let plain = value.to_string();
  if plain.len() <= MAX_NUMBER_LENGTH {
    return plain;
  }

  let exponential = format!("{:e}", value);
  if exponential.len() <= MAX_NUMBER_LENGTH {
    return exponential;
  }

  // Cut digits from the plain form when that keeps the leading significant
  // digits, and otherwise lower the precision of the exponential form
  if value.abs() >= 1e-3 {
    if let Some(dot) = plain.find('.') {
      if dot < MAX_NUMBER_LENGTH {
        return plain[..MAX_NUMBER_LENGTH]
          .trim_end_matches('0')
          .trim_end_matches('.')
          .to_string();
      }
    }
  }

  (0..MAX_NUMBER_LENGTH)
    .rev()
    .map(|precision| format!("{:.*e}", precision, value))
    .find(|s| s.len() <= MAX_NUMBER_LENGTH)
    .unwrap_or(exponential)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_bytes_test() {
    assert_eq!(from_bytes(b""), Ok(vec![]));
    assert_eq!(from_bytes(b" 0.5 "), Ok(vec![0.5]));
    assert_eq!(from_bytes(b"10.\\-3"), Ok(vec![10.0, -3.0]));
    assert_eq!(from_bytes(b"2.5e-7\0"), Ok(vec![2.5e-7]));

    assert_eq!(
      from_bytes(b"1\\x"),
      Err(DataError::new_value_invalid(
        "DecimalString is invalid: 'x'".to_string()
      ))
    );

    assert!(from_bytes(&[0xFF]).is_err());
  }

  #[test]
  fn to_bytes_test() {
    assert_eq!(to_bytes(&[]), b"".to_vec());
    assert_eq!(to_bytes(&[2.0]), b"2 ".to_vec());
    assert_eq!(to_bytes(&[0.5, -12.25]), b"0.5\\-12.25".to_vec());
    assert_eq!(to_bytes(&[100.0]), b"100 ".to_vec());
    assert_eq!(to_bytes(&[1000.0, 1.5]), b"1000\\1.5 ".to_vec());
    assert_eq!(to_bytes(&[2.5e-7]), b"0.00000025".to_vec());
    assert_eq!(to_bytes(&[1.25e-20]), b"1.25e-20".to_vec());
    assert_eq!(to_bytes(&[3e21]), b"3e21".to_vec());
    assert_eq!(to_bytes(&[0.333333333333333]), b"0.33333333333333".to_vec());
    assert_eq!(
      to_bytes(&[1.234567890123e-10]),
      b"1.2345678901e-10".to_vec()
    );
  }
}
