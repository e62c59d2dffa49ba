//! Provides the [`DataError`] type, returned when reading or creating data
//! element values fails.

use crate::{dictionary, DataSetPath, ValueRepresentation};

/// An error that occurred when retrieving or creating data elements in data
/// sets. An error can be one of the following types:
///
/// 1. **Tag not present**.
///
///    When retrieving a value, the requested tag was not present in the data
///    set.
///
/// 2. **Value not present**.
///
///    When retrieving a value, the requested type is not present. E.g. tried to
///    retrieve an integer value when the data element value contains a string.
///
/// 3. **Multiplicity mismatch**.
///
///    When retrieving a value, it did not have the required multiplicity. E.g.
///    tried to retrieve a single string value when the data element contained
///    multiple string values.
///
/// 4. **Value invalid**.
///
///    When retrieving a value, there was an error decoding its bytes, e.g. a
///    string value that isn't valid UTF-8. When creating a value, the supplied
///    input was not valid for the VR being created.
///
/// 5. **Value length invalid**.
///
///    When creating a value, the supplied data did not meet the maximum length
///    or length multiple required by its VR.
///
#[derive(Clone, Debug, PartialEq)]
pub struct DataError(RawDataError);

#[derive(Clone, Debug, PartialEq)]
enum RawDataError {
  TagNotPresent {
    path: DataSetPath,
  },
  ValueNotPresent {
    path: Option<DataSetPath>,
  },
  MultiplicityMismatch {
    path: Option<DataSetPath>,
  },
  ValueInvalid {
    details: String,
    path: Option<DataSetPath>,
  },
  ValueLengthInvalid {
    vr: ValueRepresentation,
    length: usize,
    details: String,
    path: Option<DataSetPath>,
  },
}

impl std::fmt::Display for DataError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let location = match self.path() {
      Some(path) => path.to_detailed_string(),
      None => "<unknown>".to_string(),
    };

    match &self.0 {
      RawDataError::ValueInvalid { details, .. }
      | RawDataError::ValueLengthInvalid { details, .. } => write!(
        f,
        "Data error: {} at {}, details: {}",
        self.name(),
        location,
        details
      ),

      _ => write!(f, "Data error: {} at {}", self.name(), location),
    }
  }
}

impl std::error::Error for DataError {}

impl DataError {
  /// Constructs a new 'Tag not present' data error.
  ///
  pub fn new_tag_not_present() -> Self {
    Self(RawDataError::TagNotPresent {
      path: DataSetPath::new(),
    })
  }

  /// Constructs a new 'Value not present' data error.
  ///
  pub fn new_value_not_present() -> Self {
    Self(RawDataError::ValueNotPresent { path: None })
  }

  /// Constructs a new 'Multiplicity mismatch' data error.
  ///
  pub fn new_multiplicity_mismatch() -> Self {
    Self(RawDataError::MultiplicityMismatch { path: None })
  }

  /// Constructs a new 'Value invalid' data error.
  ///
  pub fn new_value_invalid(details: String) -> Self {
    Self(RawDataError::ValueInvalid {
      details,
      path: None,
    })
  }

  /// Constructs a new 'Value length invalid' data error.
  ///
  pub fn new_value_length_invalid(
    vr: ValueRepresentation,
    length: usize,
    details: String,
  ) -> Self {
    Self(RawDataError::ValueLengthInvalid {
      vr,
      length,
      details,
      path: None,
    })
  }

  /// Returns the data set path for a data error, if one has been set.
  ///
  pub fn path(&self) -> Option<&DataSetPath> {
    match &self.0 {
      RawDataError::TagNotPresent { path } => Some(path),
      RawDataError::ValueNotPresent { path }
      | RawDataError::MultiplicityMismatch { path }
      | RawDataError::ValueInvalid { path, .. }
      | RawDataError::ValueLengthInvalid { path, .. } => path.as_ref(),
    }
  }

  pub fn is_tag_not_present(&self) -> bool {
    matches!(self.0, RawDataError::TagNotPresent { .. })
  }

  /// Sets the location in the data set where a data error occurred. This
  /// should be added wherever it is known.
  ///
  pub fn with_path(self, path: &DataSetPath) -> Self {
    let raw = match self.0 {
      RawDataError::TagNotPresent { .. } => {
        RawDataError::TagNotPresent { path: path.clone() }
      }

      RawDataError::ValueNotPresent { .. } => RawDataError::ValueNotPresent {
        path: Some(path.clone()),
      },

      RawDataError::MultiplicityMismatch { .. } => {
        RawDataError::MultiplicityMismatch {
          path: Some(path.clone()),
        }
      }

      RawDataError::ValueInvalid { details, .. } => {
        RawDataError::ValueInvalid {
          details,
          path: Some(path.clone()),
        }
      }

      RawDataError::ValueLengthInvalid {
        vr,
        length,
        details,
        ..
      } => RawDataError::ValueLengthInvalid {
        vr,
        length,
        details,
        path: Some(path.clone()),
      },
    };

    Self(raw)
  }

  /// Returns the name of a data error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match &self.0 {
      RawDataError::TagNotPresent { .. } => "Tag not present",
      RawDataError::ValueNotPresent { .. } => "Value not present",
      RawDataError::MultiplicityMismatch { .. } => "Multiplicity mismatch",
      RawDataError::ValueInvalid { .. } => "Invalid value",
      RawDataError::ValueLengthInvalid { .. } => "Invalid value length",
    }
  }
}

impl crate::DcmkitError for DataError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("Data error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    if let Some(path) = self.path() {
      if let Ok(tag) = path.final_data_element() {
        lines.push(format!("  Tag: {}", tag));
        lines.push(format!("  Name: {}", dictionary::tag_name(tag, None)));
      }

      lines.push(format!("  Path: {}", path.to_detailed_string()));
    }

    match &self.0 {
      RawDataError::ValueInvalid { details, .. } => {
        lines.push(format!("  Details: {}", details))
      }

      RawDataError::ValueLengthInvalid {
        vr,
        length,
        details,
        ..
      } => {
        lines.push(format!("  VR: {}", vr));
        lines.push(format!("  Length: {} bytes", length));
        lines.push(format!("  Details: {}", details));
      }

      _ => (),
    };

    lines
  }
}
