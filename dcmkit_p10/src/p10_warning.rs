//! Non-fatal problems found in DICOM P10 data while it is being read. These
//! are recorded on the read context and logged, and the read carries on.

use dcmkit_core::{DataElementTag, DataSetPath, ValueMultiplicity};

/// The kind of problem described by a [`P10Warning`].
///
#[derive(Clone, Debug, PartialEq)]
pub enum P10WarningKind {
  /// A data element in an implicit VR data set has a tag that isn't in the
  /// dictionary, so its VR couldn't be determined. The value is kept as
  /// opaque bytes with the `UN` VR.
  UnknownTag { tag: DataElementTag },

  /// The number of values in a data element doesn't match the multiplicity
  /// defined for it by the dictionary. The value is kept as read.
  MultiplicityMismatch {
    tag: DataElementTag,
    value_count: usize,
    multiplicity: ValueMultiplicity,
  },

  /// A sequence item extends past the end of the defined length of its
  /// sequence. The item is kept.
  ItemOutsideSequenceLength,
}

/// A non-fatal problem found while reading DICOM P10 data, along with where in
/// the data it was found.
///
#[derive(Clone, Debug, PartialEq)]
pub struct P10Warning {
  pub kind: P10WarningKind,
  pub path: DataSetPath,
  pub offset: u64,
}

impl std::fmt::Display for P10WarningKind {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      P10WarningKind::UnknownTag { tag } => {
        write!(f, "Unknown tag {} read as UN", tag)
      }

      P10WarningKind::MultiplicityMismatch {
        tag,
        value_count,
        multiplicity,
      } => write!(
        f,
        "Tag {} has {} values but its multiplicity is {}",
        tag, value_count, multiplicity
      ),

      P10WarningKind::ItemOutsideSequenceLength => {
        write!(f, "Item extends past the end of its sequence")
      }
    }
  }
}

impl std::fmt::Display for P10Warning {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(
      f,
      "{} at {} (offset 0x{:X})",
      self.kind,
      self.path.to_detailed_string(),
      self.offset
    )
  }
}
