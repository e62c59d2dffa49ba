//! Defines the DICOM transfer syntaxes that can be read and written.

/// The value representation (VR) serialization mode of a transfer syntax. This
/// is either implicit or explicit.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VrSerialization {
  VrImplicit,
  VrExplicit,
}

/// The endianness of a transfer syntax, either little endian or big endian.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Endianness {
  LittleEndian,
  BigEndian,
}

/// Describes a single DICOM transfer syntax, with its name, UID, how it
/// serializes value representations (implicit vs explicit), whether it is zlib
/// deflated, and whether it stores its pixel data as encapsulated.
///
#[derive(Debug, PartialEq)]
pub struct TransferSyntax {
  pub name: &'static str,
  pub uid: &'static str,
  pub vr_serialization: VrSerialization,
  pub endianness: Endianness,
  pub is_deflated: bool,
  pub is_encapsulated: bool,
}

const fn explicit_vr_little_endian(
  name: &'static str,
  uid: &'static str,
  is_encapsulated: bool,
) -> TransferSyntax {
  TransferSyntax {
    name,
    uid,
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated,
  }
}

/// The 'Implicit VR Little Endian' transfer syntax. This is the fallback when
/// no transfer syntax is specified.
///
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
  name: "Implicit VR Little Endian",
  uid: "1.2.840.10008.1.2",
  vr_serialization: VrSerialization::VrImplicit,
  endianness: Endianness::LittleEndian,
  is_deflated: false,
  is_encapsulated: false,
};

/// The 'Explicit VR Little Endian' transfer syntax. The File Meta Information
/// is always encoded with this transfer syntax.
///
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax =
  explicit_vr_little_endian(
    "Explicit VR Little Endian",
    "1.2.840.10008.1.2.1",
    false,
  );

/// The 'Encapsulated Uncompressed Explicit VR Little Endian' transfer syntax.
///
pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax =
  explicit_vr_little_endian(
    "Encapsulated Uncompressed Explicit VR Little Endian",
    "1.2.840.10008.1.2.1.98",
    true,
  );

/// The 'Deflated Explicit VR Little Endian' transfer syntax.
///
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
  name: "Deflated Explicit VR Little Endian",
  uid: "1.2.840.10008.1.2.1.99",
  vr_serialization: VrSerialization::VrExplicit,
  endianness: Endianness::LittleEndian,
  is_deflated: true,
  is_encapsulated: false,
};

/// The 'Explicit VR Big Endian' transfer syntax.
///
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax {
  name: "Explicit VR Big Endian",
  uid: "1.2.840.10008.1.2.2",
  vr_serialization: VrSerialization::VrExplicit,
  endianness: Endianness::BigEndian,
  is_deflated: false,
  is_encapsulated: false,
};

/// The 'JPEG Baseline (Process 1)' transfer syntax.
///
pub const JPEG_BASELINE_8BIT: TransferSyntax = explicit_vr_little_endian(
  "JPEG Baseline (Process 1)",
  "1.2.840.10008.1.2.4.50",
  true,
);

/// The 'JPEG Extended (Process 2 & 4)' transfer syntax.
///
pub const JPEG_EXTENDED_12BIT: TransferSyntax = explicit_vr_little_endian(
  "JPEG Extended (Process 2 & 4)",
  "1.2.840.10008.1.2.4.51",
  true,
);

/// The 'JPEG Lossless, Non-Hierarchical (Process 14)' transfer syntax.
///
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: TransferSyntax =
  explicit_vr_little_endian(
    "JPEG Lossless, Non-Hierarchical (Process 14)",
    "1.2.840.10008.1.2.4.57",
    true,
  );

/// The 'JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14
/// [Selection Value 1])' transfer syntax.
///
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_SV1: TransferSyntax =
  explicit_vr_little_endian(
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 \
     [Selection Value 1])",
    "1.2.840.10008.1.2.4.70",
    true,
  );

/// The 'JPEG-LS Lossless Image Compression' transfer syntax.
///
pub const JPEG_LS_LOSSLESS: TransferSyntax = explicit_vr_little_endian(
  "JPEG-LS Lossless Image Compression",
  "1.2.840.10008.1.2.4.80",
  true,
);

/// The 'JPEG-LS Lossy (Near-Lossless) Image Compression' transfer syntax.
///
pub const JPEG_LS_LOSSY_NEAR_LOSSLESS: TransferSyntax =
  explicit_vr_little_endian(
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
    "1.2.840.10008.1.2.4.81",
    true,
  );

/// The 'JPEG 2000 Image Compression (Lossless Only)' transfer syntax.
///
pub const JPEG_2K_LOSSLESS_ONLY: TransferSyntax = explicit_vr_little_endian(
  "JPEG 2000 Image Compression (Lossless Only)",
  "1.2.840.10008.1.2.4.90",
  true,
);

/// The 'JPEG 2000 Image Compression' transfer syntax.
///
pub const JPEG_2K: TransferSyntax = explicit_vr_little_endian(
  "JPEG 2000 Image Compression",
  "1.2.840.10008.1.2.4.91",
  true,
);

/// The 'RLE Lossless' transfer syntax.
///
pub const RLE_LOSSLESS: TransferSyntax =
  explicit_vr_little_endian("RLE Lossless", "1.2.840.10008.1.2.5", true);

/// A list of all supported transfer syntaxes.
///
pub const ALL: [&TransferSyntax; 14] = [
  &IMPLICIT_VR_LITTLE_ENDIAN,
  &EXPLICIT_VR_LITTLE_ENDIAN,
  &ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
  &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
  &EXPLICIT_VR_BIG_ENDIAN,
  &JPEG_BASELINE_8BIT,
  &JPEG_EXTENDED_12BIT,
  &JPEG_LOSSLESS_NON_HIERARCHICAL,
  &JPEG_LOSSLESS_NON_HIERARCHICAL_SV1,
  &JPEG_LS_LOSSLESS,
  &JPEG_LS_LOSSY_NEAR_LOSSLESS,
  &JPEG_2K_LOSSLESS_ONLY,
  &JPEG_2K,
  &RLE_LOSSLESS,
];

impl TransferSyntax {
  /// Converts a UID to a known transfer syntax. Trailing NUL and space padding
  /// on the UID is ignored.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_uid(uid: &str) -> Result<&'static Self, ()> {
    let uid = uid.trim_end_matches(['\0', ' ']);

    ALL.iter().find(|ts| ts.uid == uid).copied().ok_or(())
  }

  /// Returns whether this transfer syntax stores VRs implicitly, in which case
  /// they are resolved through the data dictionary when reading.
  ///
  pub fn is_implicit_vr(&self) -> bool {
    self.vr_serialization == VrSerialization::VrImplicit
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  pub fn all_test() {
    for ts in ALL {
      assert_eq!(TransferSyntax::from_uid(ts.uid), Ok(ts));
    }
  }

  #[test]
  pub fn from_uid_test() {
    assert_eq!(
      TransferSyntax::from_uid("1.2.840.10008.1.2\0"),
      Ok(&IMPLICIT_VR_LITTLE_ENDIAN)
    );

    assert_eq!(
      TransferSyntax::from_uid("1.2.840.10008.1.2.2"),
      Ok(&EXPLICIT_VR_BIG_ENDIAN)
    );

    assert!(TransferSyntax::from_uid("1.2.3.4").is_err());
  }
}
