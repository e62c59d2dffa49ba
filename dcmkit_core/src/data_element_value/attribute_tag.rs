//! Encoding of `AttributeTag` values, which store each tag as a little endian
//! group followed by a little endian element.

use byteorder::{ByteOrder, LittleEndian};

use crate::{DataElementTag, DataError};

pub fn from_bytes(bytes: &[u8]) -> Result<Vec<DataElementTag>, DataError> {
  if bytes.len() % 4 != 0 {
    return Err(DataError::new_value_invalid(format!(
      "AttributeTag length {} is not a multiple of 4",
      bytes.len()
    )));
  }

  Ok(
    bytes
      .chunks_exact(4)
      .map(|chunk| {
        DataElementTag::new(
          LittleEndian::read_u16(&chunk[0..2]),
          LittleEndian::read_u16(&chunk[2..4]),
        )
      })
      .collect(),
  )
}

pub fn to_bytes(tags: &[DataElementTag]) -> Vec<u8> {
  tags
    .iter()
    .flat_map(|tag| {
      let [g0, g1] = tag.group.to_le_bytes();
      let [e0, e1] = tag.element.to_le_bytes();

      [g0, g1, e0, e1]
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_bytes_test() {
    assert_eq!(from_bytes(&[]), Ok(vec![]));

    assert_eq!(
      from_bytes(&[0x28, 0x00, 0x09, 0x00, 0xE0, 0x7F, 0x10, 0x00]),
      Ok(vec![
        DataElementTag::new(0x0028, 0x0009),
        DataElementTag::new(0x7FE0, 0x0010),
      ])
    );

    assert_eq!(
      from_bytes(&[0x28, 0x00]),
      Err(DataError::new_value_invalid(
        "AttributeTag length 2 is not a multiple of 4".to_string()
      ))
    );
  }

  #[test]
  fn to_bytes_test() {
    assert_eq!(to_bytes(&[]), Vec::<u8>::new());

    assert_eq!(
      to_bytes(&[DataElementTag::new(0x0054, 0x0080)]),
      vec![0x54, 0x00, 0x80, 0x00]
    );
  }
}
