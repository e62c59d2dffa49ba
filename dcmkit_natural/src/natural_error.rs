//! Defines the error type returned when converting between data sets and
//! natural data sets.

use dcmkit_core::{DataSetPath, DcmkitError};
use dcmkit_p10::P10Error;

/// An error that occurred when denaturalizing a natural data set, when reading
/// the JSON form of a natural data set, or when reading or writing the DICOM
/// P10 data on either side of a natural conversion.
///
#[derive(Clone, Debug, PartialEq)]
pub enum NaturalError {
  /// The VR of a data element couldn't be determined. This happens when its
  /// key isn't in the dictionary, e.g. a private element, and there is no
  /// entry for it in the natural data set's VR map.
  VrUnresolvable { key: String, path: DataSetPath },

  /// A natural value doesn't match what's expected for its VR, e.g. a string
  /// given for an `US` data element, or an integer that is out of range.
  ValueInvalid {
    key: String,
    details: String,
    path: DataSetPath,
  },

  /// A key is neither a dictionary name nor a tag in `(GGGG,EEEE)` form.
  KeyInvalid { key: String, path: DataSetPath },

  /// The JSON form of a natural data set is malformed.
  JsonInvalid { details: String },

  /// An error occurred reading or writing DICOM P10 data.
  P10Error(P10Error),
}

impl std::fmt::Display for NaturalError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      NaturalError::P10Error(e) => e.fmt(f),
      _ => write!(f, "Natural data set error: {}", self.name()),
    }
  }
}

impl std::error::Error for NaturalError {}

impl From<P10Error> for NaturalError {
  fn from(e: P10Error) -> Self {
    NaturalError::P10Error(e)
  }
}

impl NaturalError {
  /// Returns the name of the error as a human-readable string.
  ///
  pub fn name(&self) -> String {
    match self {
      NaturalError::VrUnresolvable { .. } => "VR unresolvable".to_string(),
      NaturalError::ValueInvalid { .. } => "Invalid value".to_string(),
      NaturalError::KeyInvalid { .. } => "Invalid key".to_string(),
      NaturalError::JsonInvalid { .. } => "Invalid JSON".to_string(),
      NaturalError::P10Error(e) => e.name(),
    }
  }
}

impl DcmkitError for NaturalError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    if let NaturalError::P10Error(e) = self {
      return e.to_lines(task_description);
    }

    let mut lines = vec![
      format!("Natural data set error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    match self {
      NaturalError::VrUnresolvable { key, path }
      | NaturalError::KeyInvalid { key, path } => {
        lines.push(format!("  Key: {}", key));
        lines.push(format!("  Path: {}", path.to_detailed_string()));
      }

      NaturalError::ValueInvalid { key, details, path } => {
        lines.push(format!("  Key: {}", key));
        lines.push(format!("  Details: {}", details));
        lines.push(format!("  Path: {}", path.to_detailed_string()));
      }

      NaturalError::JsonInvalid { details } => {
        lines.push(format!("  Details: {}", details));
      }

      NaturalError::P10Error(_) => (),
    }

    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_lines_test() {
    let error = NaturalError::KeyInvalid {
      key: "NotAName".to_string(),
      path: DataSetPath::new(),
    };

    assert_eq!(
      error.to_lines("denaturalizing"),
      vec![
        "Natural data set error denaturalizing".to_string(),
        "".to_string(),
        "  Error: Invalid key".to_string(),
        "  Key: NotAName".to_string(),
        "  Path: ".to_string(),
      ]
    );
  }

  #[test]
  fn p10_error_lines_test() {
    let error = NaturalError::from(P10Error::TransferSyntaxNotSupported {
      transfer_syntax_uid: "1.2.3".to_string(),
    });

    assert_eq!(error.name(), "Transfer syntax not supported");
    assert_eq!(
      error.to_lines("writing")[0],
      "DICOM P10 error writing".to_string()
    );
  }
}
