//! Paths that identify a single data element or sequence item inside a nested
//! data set.

use crate::{dictionary, DataElementTag};

/// The location of a data element or sequence item in a data set, given as the
/// chain of data elements and item indexes that lead to it from the root.
///
/// The string form separates entries with a forward slash, e.g.:
///
/// - `""` is the root data set.
/// - `"00100010"` is *'(0010,0010) PatientName'*.
/// - `"00081140/[0]/00081155"` is *'(0008,1155) ReferencedSOPInstanceUID'*
///   inside the first item of *'(0008,1140) ReferencedImageSequence'*.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSetPath(Vec<DataSetPathEntry>);

/// A single step in a [`DataSetPath`].
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataSetPathEntry {
  DataElement { tag: DataElementTag },
  SequenceItem { index: usize },
}

impl DataSetPath {
  /// Returns an empty path, which refers to the root data set.
  ///
  pub fn new() -> Self {
    Self(vec![])
  }

  /// Returns a path to a data element in the root data set.
  ///
  pub fn new_with_data_element(tag: DataElementTag) -> Self {
    Self(vec![DataSetPathEntry::DataElement { tag }])
  }

  pub fn entries(&self) -> &[DataSetPathEntry] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns the number of sequences the path descends into.
  ///
  pub fn sequence_depth(&self) -> usize {
    self
      .0
      .iter()
      .filter(|entry| matches!(entry, DataSetPathEntry::SequenceItem { .. }))
      .count()
  }

  /// Returns the tag at the end of the path, or an error if the path is empty
  /// or ends with a sequence item.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn final_data_element(&self) -> Result<DataElementTag, ()> {
    match self.0.last() {
      Some(DataSetPathEntry::DataElement { tag }) => Ok(*tag),
      _ => Err(()),
    }
  }

  /// Appends a data element to the path. The path must be empty or end with a
  /// sequence item.
  ///
  pub fn add_data_element(
    &mut self,
    tag: DataElementTag,
  ) -> Result<(), String> {
    match self.0.last() {
      None | Some(DataSetPathEntry::SequenceItem { .. }) => {
        self.0.push(DataSetPathEntry::DataElement { tag });
        Ok(())
      }

      Some(DataSetPathEntry::DataElement { .. }) => Err(format!(
        "Data element can't follow a data element in a path: {}",
        tag.to_hex_string()
      )),
    }
  }

  /// Appends a sequence item index to the path. The path must end with a data
  /// element.
  ///
  pub fn add_sequence_item(&mut self, index: usize) -> Result<(), String> {
    match self.0.last() {
      Some(DataSetPathEntry::DataElement { .. }) => {
        self.0.push(DataSetPathEntry::SequenceItem { index });
        Ok(())
      }

      _ => Err(format!(
        "Sequence item must follow a data element in a path: [{}]",
        index
      )),
    }
  }

  /// Removes the last entry of the path, if there is one.
  ///
  pub fn pop(&mut self) {
    self.0.pop();
  }

  /// Parses a path from its string form.
  ///
  pub fn from_string(s: &str) -> Result<Self, String> {
    let mut path = Self::new();

    if s.is_empty() {
      return Ok(path);
    }

    for entry in s.split('/') {
      if let Ok(tag) = DataElementTag::from_hex_string(entry) {
        path.add_data_element(tag)?;
        continue;
      }

      let index = entry
        .strip_prefix('[')
        .and_then(|entry| entry.strip_suffix(']'))
        .and_then(|index| index.parse::<usize>().ok());

      match index {
        Some(index) => path.add_sequence_item(index)?,
        None => return Err(format!("Invalid path entry: {}", entry)),
      }
    }

    Ok(path)
  }

  /// Formats the path for display to a person, naming each data element using
  /// the dictionary, e.g.
  /// `"(0008,1140) ReferencedImageSequence / Item 0 / (0008,1155) ..."`.
  ///
  pub fn to_detailed_string(&self) -> String {
    self
      .0
      .iter()
      .map(|entry| match entry {
        DataSetPathEntry::DataElement { tag } => {
          dictionary::tag_with_name(*tag, None)
        }
        DataSetPathEntry::SequenceItem { index } => format!("Item {}", index),
      })
      .collect::<Vec<_>>()
      .join(" / ")
  }
}

impl std::fmt::Display for DataSetPath {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    for (i, entry) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("/")?;
      }

      match entry {
        DataSetPathEntry::DataElement { tag } => {
          f.write_str(&tag.to_hex_string())?
        }
        DataSetPathEntry::SequenceItem { index } => write!(f, "[{}]", index)?,
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_string_test() {
    let mut path = DataSetPath::new();
    assert_eq!(&path.to_string(), "");

    path
      .add_data_element(DataElementTag::new(0x0008, 0x1140))
      .unwrap();
    assert_eq!(&path.to_string(), "00081140");

    assert!(path
      .add_data_element(DataElementTag::new(0x0008, 0x1140))
      .is_err());

    path.add_sequence_item(3).unwrap();
    assert_eq!(&path.to_string(), "00081140/[3]");
    assert!(path.add_sequence_item(3).is_err());

    path
      .add_data_element(DataElementTag::new(0x0008, 0x1155))
      .unwrap();
    assert_eq!(&path.to_string(), "00081140/[3]/00081155");
    assert_eq!(path.sequence_depth(), 1);

    path.pop();
    path.pop();
    assert_eq!(&path.to_string(), "00081140");
  }

  #[test]
  fn from_string_test() {
    assert_eq!(DataSetPath::from_string(""), Ok(DataSetPath::new()));

    let path = DataSetPath::from_string("00081140/[3]/00081155").unwrap();
    assert_eq!(
      path.entries(),
      &[
        DataSetPathEntry::DataElement {
          tag: DataElementTag::new(0x0008, 0x1140)
        },
        DataSetPathEntry::SequenceItem { index: 3 },
        DataSetPathEntry::DataElement {
          tag: DataElementTag::new(0x0008, 0x1155)
        },
      ]
    );

    assert_eq!(
      DataSetPath::from_string("00081140/x"),
      Err("Invalid path entry: x".to_string())
    );
    assert!(DataSetPath::from_string("[0]").is_err());
  }

  #[test]
  fn to_detailed_string_test() {
    let path = DataSetPath::from_string("00100010").unwrap();
    assert_eq!(path.to_detailed_string(), "(0010,0010) PatientName");

    let path = DataSetPath::from_string("12345678/[1]/11223344").unwrap();
    assert_eq!(
      path.to_detailed_string(),
      "(1234,5678) unknown_tag / Item 1 / (1122,3344) unknown_tag"
    );
  }
}
