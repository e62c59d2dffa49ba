//! DICOM value representations (VRs).
//!
//! See [section 6.2](https://dicom.nema.org/medical/dicom/current/output/chtml/part05/sect_6.2.html)
//! of the DICOM specification for VR definitions.

/// All DICOM value representations (VRs).
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueRepresentation {
  AgeString,
  ApplicationEntity,
  AttributeTag,
  CodeString,
  Date,
  DateTime,
  DecimalString,
  FloatingPointDouble,
  FloatingPointSingle,
  IntegerString,
  LongString,
  LongText,
  OtherByteString,
  OtherDoubleString,
  OtherFloatString,
  OtherLongString,
  OtherVeryLongString,
  OtherWordString,
  PersonName,
  Sequence,
  ShortString,
  ShortText,
  SignedLong,
  SignedShort,
  SignedVeryLong,
  Time,
  UniqueIdentifier,
  UniversalResourceIdentifier,
  Unknown,
  UnlimitedCharacters,
  UnlimitedText,
  UnsignedLong,
  UnsignedShort,
  UnsignedVeryLong,
}

use ValueRepresentation as VR;

/// Every value representation along with its two-character code and name.
///
pub const ALL: [(ValueRepresentation, &[u8; 2], &str); 34] = [
  (VR::AgeString, b"AS", "AgeString"),
  (VR::ApplicationEntity, b"AE", "ApplicationEntity"),
  (VR::AttributeTag, b"AT", "AttributeTag"),
  (VR::CodeString, b"CS", "CodeString"),
  (VR::Date, b"DA", "Date"),
  (VR::DateTime, b"DT", "DateTime"),
  (VR::DecimalString, b"DS", "DecimalString"),
  (VR::FloatingPointDouble, b"FD", "FloatingPointDouble"),
  (VR::FloatingPointSingle, b"FL", "FloatingPointSingle"),
  (VR::IntegerString, b"IS", "IntegerString"),
  (VR::LongString, b"LO", "LongString"),
  (VR::LongText, b"LT", "LongText"),
  (VR::OtherByteString, b"OB", "OtherByteString"),
  (VR::OtherDoubleString, b"OD", "OtherDoubleString"),
  (VR::OtherFloatString, b"OF", "OtherFloatString"),
  (VR::OtherLongString, b"OL", "OtherLongString"),
  (VR::OtherVeryLongString, b"OV", "OtherVeryLongString"),
  (VR::OtherWordString, b"OW", "OtherWordString"),
  (VR::PersonName, b"PN", "PersonName"),
  (VR::Sequence, b"SQ", "Sequence"),
  (VR::ShortString, b"SH", "ShortString"),
  (VR::ShortText, b"ST", "ShortText"),
  (VR::SignedLong, b"SL", "SignedLong"),
  (VR::SignedShort, b"SS", "SignedShort"),
  (VR::SignedVeryLong, b"SV", "SignedVeryLong"),
  (VR::Time, b"TM", "Time"),
  (VR::UniqueIdentifier, b"UI", "UniqueIdentifier"),
  (
    VR::UniversalResourceIdentifier,
    b"UR",
    "UniversalResourceIdentifier",
  ),
  (VR::Unknown, b"UN", "Unknown"),
  (VR::UnlimitedCharacters, b"UC", "UnlimitedCharacters"),
  (VR::UnlimitedText, b"UT", "UnlimitedText"),
  (VR::UnsignedLong, b"UL", "UnsignedLong"),
  (VR::UnsignedShort, b"US", "UnsignedShort"),
  (VR::UnsignedVeryLong, b"UV", "UnsignedVeryLong"),
];

/// The width of the length field that follows a VR in an explicit VR data
/// element header.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthFieldSize {
  /// A 16-bit length immediately after the VR.
  U16,

  /// Two reserved bytes after the VR followed by a 32-bit length.
  U32,
}

/// The restrictions that apply to the length of a value representation's data.
/// These are only enforced when creating new values, so that non-conformant
/// data read from the wire is still passed through.
///
#[derive(Debug, PartialEq)]
pub struct LengthRequirements {
  pub bytes_max: usize,
  pub bytes_multiple_of: Option<usize>,
}

impl std::fmt::Display for ValueRepresentation {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let [a, b] = self.to_bytes();

    write!(f, "{}{}", a as char, b as char)
  }
}

impl ValueRepresentation {
  /// Converts a two-character string, e.g. "DA", into a value representation.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, ()> {
    ALL
      .iter()
      .find(|(_, code, _)| code.as_slice() == bytes)
      .map(|(vr, _, _)| *vr)
      .ok_or(())
  }

  /// Converts a value representation to its two-byte character representation.
  ///
  pub fn to_bytes(&self) -> [u8; 2] {
    *ALL[self.index()].1
  }

  /// Returns the human-readable name of a value representation, e.g.
  /// `CodeString`, `AttributeTag`.
  ///
  pub fn name(&self) -> &'static str {
    ALL[self.index()].2
  }

  fn index(&self) -> usize {
    // The enum's variants are declared in the same order as `ALL`
    *self as usize
  }

  /// Returns whether a value representation stores string data.
  ///
  pub fn is_string(self) -> bool {
    matches!(
      self,
      VR::AgeString
        | VR::ApplicationEntity
        | VR::CodeString
        | VR::Date
        | VR::DateTime
        | VR::DecimalString
        | VR::IntegerString
        | VR::LongString
        | VR::LongText
        | VR::PersonName
        | VR::ShortString
        | VR::ShortText
        | VR::Time
        | VR::UniqueIdentifier
        | VR::UniversalResourceIdentifier
        | VR::UnlimitedCharacters
        | VR::UnlimitedText
    )
  }

  /// Returns whether a value representation stores string data that may use
  /// any Unicode codepoint, as opposed to a restricted ASCII repertoire.
  ///
  pub fn is_encoded_string(self) -> bool {
    matches!(
      self,
      VR::LongString
        | VR::LongText
        | VR::PersonName
        | VR::ShortString
        | VR::ShortText
        | VR::UnlimitedCharacters
        | VR::UnlimitedText
    )
  }

  /// Returns whether a string value representation holds a single value that
  /// is never split on the backslash delimiter.
  ///
  pub fn is_single_valued_string(self) -> bool {
    matches!(
      self,
      VR::LongText
        | VR::ShortText
        | VR::UniversalResourceIdentifier
        | VR::UnlimitedText
    )
  }

  /// Returns the size in bytes of each value for value representations that
  /// store fixed-width binary numbers or tags.
  ///
  pub fn fixed_value_size(self) -> Option<usize> {
    match self {
      VR::SignedShort | VR::UnsignedShort | VR::OtherWordString => Some(2),
      VR::AttributeTag
      | VR::FloatingPointSingle
      | VR::OtherFloatString
      | VR::OtherLongString
      | VR::SignedLong
      | VR::UnsignedLong => Some(4),
      VR::FloatingPointDouble
      | VR::OtherDoubleString
      | VR::OtherVeryLongString
      | VR::SignedVeryLong
      | VR::UnsignedVeryLong => Some(8),
      _ => None,
    }
  }

  /// Returns the width of the length field used by this value representation
  /// in explicit VR data element headers.
  ///
  pub fn length_field_size(self) -> LengthFieldSize {
    match self {
      VR::OtherByteString
      | VR::OtherDoubleString
      | VR::OtherFloatString
      | VR::OtherLongString
      | VR::OtherVeryLongString
      | VR::OtherWordString
      | VR::Sequence
      | VR::SignedVeryLong
      | VR::UniversalResourceIdentifier
      | VR::Unknown
      | VR::UnlimitedCharacters
      | VR::UnlimitedText
      | VR::UnsignedVeryLong => LengthFieldSize::U32,

      _ => LengthFieldSize::U16,
    }
  }

  /// Returns whether a data element with this value representation is allowed
  /// to have an undefined length. This is the case for sequences, for
  /// encapsulated pixel data, and for sequences stored with the `Unknown` VR.
  ///
  pub fn allows_undefined_length(self) -> bool {
    matches!(
      self,
      VR::Sequence | VR::OtherByteString | VR::OtherWordString | VR::Unknown
    )
  }

  /// Appends the correct padding byte for the given value representation if the
  /// bytes are not of even length. Text uses a space, while `UI` and all binary
  /// value representations use a zero byte.
  ///
  pub fn pad_bytes_to_even_length(self, bytes: &mut Vec<u8>) {
    if bytes.len() % 2 == 0 {
      return;
    }

    if self.is_string() && self != VR::UniqueIdentifier {
      bytes.push(b' ');
    } else {
      bytes.push(0);
    }
  }

  /// Returns the length requirements for a value representation. See the
  /// `LengthRequirements` type for details.
  ///
  pub fn length_requirements(self) -> LengthRequirements {
    let bytes_max = match self {
      VR::AgeString => 4,
      VR::Date => 8,
      VR::Time => 14,
      VR::ApplicationEntity => 16,
      VR::DateTime => 26,
      VR::Sequence => 0,
      _ => match self.length_field_size() {
        LengthFieldSize::U16 => 0xFFFE,
        LengthFieldSize::U32 => 0xFFFF_FFFE,
      },
    };

    LengthRequirements {
      bytes_max,
      bytes_multiple_of: self.fixed_value_size(),
    }
  }

  /// Swaps the endianness of data for a value representation. This is a no-op
  /// for VRs that don't store multi-byte numbers.
  ///
  pub fn swap_endianness(self, bytes: &mut [u8]) {
    // `AT` stores pairs of 16-bit values, not 32-bit values
    let word_size = match self {
      VR::AttributeTag => 2,
      _ => match self.fixed_value_size() {
        Some(size) => size,
        None => return,
      },
    };

    for word in bytes.chunks_exact_mut(word_size) {
      word.reverse();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_bytes_test() {
    for (vr, code, _) in ALL {
      assert_eq!(ValueRepresentation::from_bytes(code), Ok(vr));
    }

    assert_eq!(ValueRepresentation::from_bytes(b"XY"), Err(()));
    assert_eq!(ValueRepresentation::from_bytes(b"U"), Err(()));
  }

  #[test]
  fn to_string_test() {
    for (vr, code, _) in ALL {
      assert_eq!(vr.to_string().as_bytes(), code);
    }
  }

  #[test]
  fn name_test() {
    for (vr, _, name) in ALL {
      assert_eq!(vr.name(), name);
    }
  }

  #[test]
  fn length_field_size_test() {
    assert_eq!(VR::UnsignedShort.length_field_size(), LengthFieldSize::U16);
    assert_eq!(VR::PersonName.length_field_size(), LengthFieldSize::U16);
    assert_eq!(VR::Sequence.length_field_size(), LengthFieldSize::U32);
    assert_eq!(VR::OtherByteString.length_field_size(), LengthFieldSize::U32);
    assert_eq!(VR::UnlimitedText.length_field_size(), LengthFieldSize::U32);
  }

  #[test]
  fn pad_bytes_to_even_length_test() {
    let mut bytes = vec![];
    VR::LongText.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![]);

    let mut bytes = vec![0x41];
    VR::LongText.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![0x41, 0x20]);

    let mut bytes = vec![0x41];
    VR::UniqueIdentifier.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![0x41, 0x00]);

    let mut bytes = vec![0x41];
    VR::OtherByteString.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![0x41, 0x00]);

    let mut bytes = vec![0x41, 0x42];
    VR::LongText.pad_bytes_to_even_length(&mut bytes);
    assert_eq!(bytes, vec![0x41, 0x42]);
  }

  #[test]
  fn length_requirements_test() {
    assert_eq!(
      VR::AgeString.length_requirements(),
      LengthRequirements {
        bytes_max: 4,
        bytes_multiple_of: None,
      }
    );

    assert_eq!(
      VR::AttributeTag.length_requirements(),
      LengthRequirements {
        bytes_max: 0xFFFE,
        bytes_multiple_of: Some(4),
      }
    );

    assert_eq!(
      VR::OtherFloatString.length_requirements(),
      LengthRequirements {
        bytes_max: 0xFFFF_FFFE,
        bytes_multiple_of: Some(4),
      }
    );
  }

  #[test]
  fn swap_endianness_test() {
    let mut bytes = [0, 1, 2, 3];
    VR::SignedShort.swap_endianness(&mut bytes);
    assert_eq!(bytes, [1, 0, 3, 2]);

    let mut bytes = [0, 1, 2, 3];
    VR::AttributeTag.swap_endianness(&mut bytes);
    assert_eq!(bytes, [1, 0, 3, 2]);

    let mut bytes = [0, 1, 2, 3, 4, 5, 6, 7];
    VR::SignedLong.swap_endianness(&mut bytes);
    assert_eq!(bytes, [3, 2, 1, 0, 7, 6, 5, 4]);

    let mut bytes = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
    VR::SignedVeryLong.swap_endianness(&mut bytes);
    assert_eq!(bytes, [7, 6, 5, 4, 3, 2, 1, 0, 15, 14, 13, 12, 11, 10, 9, 8]);

    let mut bytes = [0, 1, 2, 3];
    VR::OtherByteString.swap_endianness(&mut bytes);
    assert_eq!(bytes, [0, 1, 2, 3]);
  }
}
