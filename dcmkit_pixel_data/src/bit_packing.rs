//! Packing and unpacking of one-bit-per-sample data, such as segmentation
//! masks stored with a *'(0028,0100) Bits Allocated'* of one.
//!
//! Samples are packed least significant bit first, so sample `i` is stored in
//! bit `i % 8` of byte `i / 8`.

use std::rc::Rc;

use dcmkit_core::{DataElementValue, DataError, ValueRepresentation};

/// The value that [`unpack()`] gives set bits.
///
pub const UNPACKED_ON_VALUE: u8 = 255;

/// Packs samples into bits, treating any non-zero sample as set. The result
/// has a length of `ceil(samples.len() / 8)` bytes, and unused bits in the
/// final byte are zero.
///
pub fn pack(samples: &[u8]) -> Vec<u8> {
  let mut bytes = vec![0u8; samples.len().div_ceil(8)];

  for (i, sample) in samples.iter().enumerate() {
    if *sample != 0 {
      bytes[i / 8] |= 1 << (i % 8);
    }
  }

  bytes
}

/// Packs boolean samples into bits. See [`pack()`].
///
pub fn pack_bools(samples: &[bool]) -> Vec<u8> {
  let mut bytes = vec![0u8; samples.len().div_ceil(8)];

  for (i, _) in samples.iter().enumerate().filter(|(_, sample)| **sample) {
    bytes[i / 8] |= 1 << (i % 8);
  }

  bytes
}

/// Unpacks bits into one sample per bit. The result always has eight samples
/// per input byte, so callers that know the true sample count need to
/// truncate it. Set bits become [`UNPACKED_ON_VALUE`] and clear bits become
/// zero.
///
pub fn unpack(bytes: &[u8]) -> Vec<u8> {
  bytes
    .iter()
    .flat_map(|byte| {
      (0..8).map(move |bit| {
        if byte & (1 << bit) != 0 {
          UNPACKED_ON_VALUE
        } else {
          0
        }
      })
    })
    .collect()
}

/// Packs samples into an `OtherByteString` value suitable for storing in
/// *'(7FE0,0010) Pixel Data'*. The packed bytes are padded to even length.
///
pub fn pack_into_value(samples: &[u8]) -> Result<DataElementValue, DataError> {
  let mut bytes = pack(samples);
  ValueRepresentation::OtherByteString.pad_bytes_to_even_length(&mut bytes);

  DataElementValue::new_binary(
    ValueRepresentation::OtherByteString,
    Rc::new(bytes),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pack_test() {
    assert_eq!(pack(&[0, 1, 1, 0, 1, 0, 0, 0]), vec![0x16]);
    assert_eq!(pack(&[]), Vec::<u8>::new());
    assert_eq!(pack(&[7]), vec![0x01]);
    assert_eq!(pack(&[0; 9]), vec![0, 0]);
    assert_eq!(pack(&[1; 9]), vec![0xFF, 0x01]);
  }

  #[test]
  fn pack_bools_test() {
    assert_eq!(
      pack_bools(&[false, true, true, false, true, false, false, false]),
      vec![0x16]
    );
    assert_eq!(pack_bools(&[true; 10]), vec![0xFF, 0x03]);
  }

  #[test]
  fn unpack_test() {
    assert_eq!(unpack(&[0x16]), vec![0, 255, 255, 0, 255, 0, 0, 0]);
    assert_eq!(unpack(&[]), Vec::<u8>::new());
    assert_eq!(unpack(&[0x80, 0x01]).len(), 16);
  }

  #[test]
  fn pack_then_unpack_test() {
    for n in 0usize..=40 {
      let samples: Vec<u8> = (0..n).map(|i| u8::from(i % 3 == 0)).collect();

      let packed = pack(&samples);
      assert_eq!(packed.len(), n.div_ceil(8));

      let unpacked = unpack(&packed);
      assert_eq!(unpacked.len(), packed.len() * 8);

      for (sample, unpacked) in samples.iter().zip(unpacked.iter()) {
        assert_eq!(*sample != 0, *unpacked != 0);
      }

      // Bits past the end of the samples are always zero
      assert!(unpacked[n..].iter().all(|s| *s == 0));
    }
  }

  #[test]
  fn pack_into_value_test() {
    let value = pack_into_value(&[1, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap();

    assert_eq!(
      value.value_representation(),
      ValueRepresentation::OtherByteString
    );
    assert_eq!(value.bytes().unwrap().as_slice(), &[0x01, 0x01]);
  }
}
