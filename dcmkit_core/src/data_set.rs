//! A DICOM data set, defined as a map of data element tags to data element
//! values.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::data_set_path::DataSetPathEntry;
use crate::dictionary::{self, Entry};
use crate::{
  DataElementTag, DataElementValue, DataError, DataSetPath, TransferSyntax,
  ValueRepresentation,
};

use ValueRepresentation as VR;

/// A DICOM data set that maps data element tags to data element values. Tags
/// are kept in ascending order, which is the order they are written in.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet(BTreeMap<DataElementTag, DataElementValue>);

/// What a [`DataSetPath`] refers to in a data set.
///
enum Lookup<'a> {
  Value(&'a DataElementValue),
  DataSet(&'a DataSet),
}

impl DataSet {
  pub fn new() -> Self {
    Self(BTreeMap::new())
  }

  /// Returns the number of data elements in a data set.
  ///
  pub fn size(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn has(&self, tag: DataElementTag) -> bool {
    self.0.contains_key(&tag)
  }

  /// Returns the File Meta Information data elements in this data set, i.e.
  /// those in group 0x0002 that hold binary data.
  ///
  /// *'(0002,0002) MediaStorageSOPClassUID'* and *'(0002,0003)
  /// MediaStorageSOPInstanceUID'* are taken from *'(0008,0016) SOPClassUID'*
  /// and *'(0008,0018) SOPInstanceUID'* when those are present.
  ///
  pub fn file_meta_information(&self) -> DataSet {
    let mut fmi: DataSet = self
      .0
      .range(DataElementTag::new(2, 0)..=DataElementTag::new(2, 0xFFFF))
      .filter(|(_, value)| value.bytes().is_ok())
      .map(|(tag, value)| (*tag, value.clone()))
      .collect();

    for (source, target) in [
      (dictionary::SOP_CLASS_UID, dictionary::MEDIA_STORAGE_SOP_CLASS_UID),
      (
        dictionary::SOP_INSTANCE_UID,
        dictionary::MEDIA_STORAGE_SOP_INSTANCE_UID,
      ),
    ] {
      if let Ok(value) = self.get_value(source.tag) {
        fmi.insert(target.tag, value.clone());
      }
    }

    fmi
  }

  /// Inserts a value, replacing any existing value for the tag.
  ///
  pub fn insert(&mut self, tag: DataElementTag, value: DataElementValue) {
    self.0.insert(tag, value);
  }

  /// Inserts a new binary value. See [`DataElementValue::new_binary()`].
  ///
  pub fn insert_binary_value(
    &mut self,
    tag: DataElementTag,
    vr: ValueRepresentation,
    bytes: Rc<Vec<u8>>,
  ) -> Result<(), DataError> {
    self.insert(tag, DataElementValue::new_binary(vr, bytes)?);

    Ok(())
  }

  /// Inserts a text value for a dictionary entry using the entry's first VR.
  /// The number of values must satisfy the entry's multiplicity.
  ///
  pub fn insert_string_value(
    &mut self,
    entry: &Entry,
    values: &[&str],
  ) -> Result<(), DataError> {
    let path = DataSetPath::new_with_data_element(entry.tag);

    check_multiplicity(entry, values.len()).map_err(|e| e.with_path(&path))?;

    let value = match entry.vrs.first() {
      Some(vr) if vr.is_string() => DataElementValue::new_text(*vr, values),
      _ => invalid_insert_error(entry),
    };

    self.insert(entry.tag, value.map_err(|e| e.with_path(&path))?);

    Ok(())
  }

  /// Inserts an integer value for a dictionary entry using the entry's first
  /// VR, which must be one that stores integers.
  ///
  pub fn insert_int_value(
    &mut self,
    entry: &Entry,
    values: &[i64],
  ) -> Result<(), DataError> {
    let path = DataSetPath::new_with_data_element(entry.tag);

    check_multiplicity(entry, values.len()).map_err(|e| e.with_path(&path))?;

    let value = match entry.vrs.first() {
      Some(VR::IntegerString) => convert::<i32>(values)
        .and_then(|v| DataElementValue::new_integer_string(&v)),
      Some(VR::SignedShort) => convert::<i16>(values)
        .and_then(|v| DataElementValue::new_signed_short(&v)),
      Some(VR::UnsignedShort) => convert::<u16>(values)
        .and_then(|v| DataElementValue::new_unsigned_short(&v)),
      Some(VR::SignedLong) => convert::<i32>(values)
        .and_then(|v| DataElementValue::new_signed_long(&v)),
      Some(VR::UnsignedLong) => convert::<u32>(values)
        .and_then(|v| DataElementValue::new_unsigned_long(&v)),
      Some(VR::SignedVeryLong) => {
        DataElementValue::new_signed_very_long(values)
      }
      Some(VR::UnsignedVeryLong) => convert::<u64>(values)
        .and_then(|v| DataElementValue::new_unsigned_very_long(&v)),
      _ => invalid_insert_error(entry),
    };

    self.insert(entry.tag, value.map_err(|e| e.with_path(&path))?);

    Ok(())
  }

  /// Inserts a floating point value for a dictionary entry using the entry's
  /// first VR, which must be one that stores floats.
  ///
  pub fn insert_float_value(
    &mut self,
    entry: &Entry,
    values: &[f64],
  ) -> Result<(), DataError> {
    let path = DataSetPath::new_with_data_element(entry.tag);

    check_multiplicity(entry, values.len()).map_err(|e| e.with_path(&path))?;

    let singles = || values.iter().map(|f| *f as f32).collect::<Vec<_>>();

    let value = match entry.vrs.first() {
      Some(VR::DecimalString) => DataElementValue::new_decimal_string(values),
      Some(VR::FloatingPointDouble) => {
        DataElementValue::new_floating_point_double(values)
      }
      Some(VR::OtherDoubleString) => {
        DataElementValue::new_other_double_string(values)
      }
      Some(VR::FloatingPointSingle) => {
        DataElementValue::new_floating_point_single(&singles())
      }
      Some(VR::OtherFloatString) => {
        DataElementValue::new_other_float_string(&singles())
      }
      _ => invalid_insert_error(entry),
    };

    self.insert(entry.tag, value.map_err(|e| e.with_path(&path))?);

    Ok(())
  }

  /// Inserts a sequence value for a dictionary entry whose VR is `SQ`.
  ///
  pub fn insert_sequence_value(
    &mut self,
    entry: &Entry,
    items: Vec<DataSet>,
  ) -> Result<(), DataError> {
    if entry.vrs != [VR::Sequence] {
      return invalid_insert_error(entry).map_err(|e: DataError| {
        e.with_path(&DataSetPath::new_with_data_element(entry.tag))
      });
    }

    self.insert(entry.tag, DataElementValue::new_sequence(items));

    Ok(())
  }

  /// Merges another data set into this one. Its data elements replace any
  /// with the same tag.
  ///
  pub fn merge(&mut self, other: Self) {
    self.0.extend(other.0);
  }

  pub fn delete(&mut self, tag: DataElementTag) {
    self.0.remove(&tag);
  }

  /// Returns the tags in a data set in ascending order.
  ///
  pub fn tags(&self) -> Vec<DataElementTag> {
    self.0.keys().copied().collect()
  }

  /// Returns an iterator over a data set's elements in ascending tag order.
  ///
  pub fn iter(
    &self,
  ) -> std::collections::btree_map::Iter<'_, DataElementTag, DataElementValue>
  {
    self.0.iter()
  }

  pub fn iter_mut(
    &mut self,
  ) -> std::collections::btree_map::IterMut<'_, DataElementTag, DataElementValue>
  {
    self.0.iter_mut()
  }

  fn lookup(&self, path: &DataSetPath) -> Option<Lookup> {
    let mut result = Lookup::DataSet(self);

    for entry in path.entries() {
      result = match (result, entry) {
        (Lookup::DataSet(data_set), DataSetPathEntry::DataElement { tag }) => {
          Lookup::Value(data_set.0.get(tag)?)
        }

        (Lookup::Value(value), DataSetPathEntry::SequenceItem { index }) => {
          Lookup::DataSet(value.sequence_items().ok()?.get(*index)?)
        }

        _ => return None,
      };
    }

    Some(result)
  }

  /// Returns the value for a tag in this data set.
  ///
  pub fn get_value(
    &self,
    tag: DataElementTag,
  ) -> Result<&DataElementValue, DataError> {
    self.0.get(&tag).ok_or_else(|| {
      DataError::new_tag_not_present()
        .with_path(&DataSetPath::new_with_data_element(tag))
    })
  }

  /// Returns the value at a path, which must end with a data element.
  ///
  pub fn get_value_at_path(
    &self,
    path: &DataSetPath,
  ) -> Result<&DataElementValue, DataError> {
    match self.lookup(path) {
      Some(Lookup::Value(value)) => Ok(value),
      _ => Err(DataError::new_tag_not_present().with_path(path)),
    }
  }

  /// Returns the data set at a path, which must be empty or end with a
  /// sequence item.
  ///
  pub fn get_data_set_at_path(
    &self,
    path: &DataSetPath,
  ) -> Result<&DataSet, DataError> {
    match self.lookup(path) {
      Some(Lookup::DataSet(data_set)) => Ok(data_set),
      _ => Err(DataError::new_tag_not_present().with_path(path)),
    }
  }

  /// Returns the raw bytes for a tag, which must have the given VR.
  ///
  pub fn get_value_bytes(
    &self,
    tag: DataElementTag,
    vr: ValueRepresentation,
  ) -> Result<&Rc<Vec<u8>>, DataError> {
    let value = self.get_value(tag)?;

    if value.value_representation() != vr {
      return Err(
        DataError::new_value_not_present()
          .with_path(&DataSetPath::new_with_data_element(tag)),
      );
    }

    value
      .bytes()
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// Applies a getter to the value for a tag, attaching the tag's path to any
  /// error.
  ///
  fn get_with<'a, T>(
    &'a self,
    tag: DataElementTag,
    getter: impl FnOnce(&'a DataElementValue) -> Result<T, DataError>,
  ) -> Result<T, DataError> {
    getter(self.get_value(tag)?)
      .map_err(|e| e.with_path(&DataSetPath::new_with_data_element(tag)))
  }

  /// See [`DataElementValue::get_string()`].
  ///
  pub fn get_string(&self, tag: DataElementTag) -> Result<&str, DataError> {
    self.get_with(tag, DataElementValue::get_string)
  }

  /// See [`DataElementValue::get_strings()`].
  ///
  pub fn get_strings(
    &self,
    tag: DataElementTag,
  ) -> Result<Vec<&str>, DataError> {
    self.get_with(tag, DataElementValue::get_strings)
  }

  /// See [`DataElementValue::get_int()`].
  ///
  pub fn get_int(&self, tag: DataElementTag) -> Result<i64, DataError> {
    self.get_with(tag, DataElementValue::get_int)
  }

  pub fn get_ints(&self, tag: DataElementTag) -> Result<Vec<i64>, DataError> {
    self.get_with(tag, DataElementValue::get_ints)
  }

  pub fn get_big_int(&self, tag: DataElementTag) -> Result<i128, DataError> {
    self.get_with(tag, DataElementValue::get_big_int)
  }

  pub fn get_big_ints(
    &self,
    tag: DataElementTag,
  ) -> Result<Vec<i128>, DataError> {
    self.get_with(tag, DataElementValue::get_big_ints)
  }

  /// See [`DataElementValue::get_float()`].
  ///
  pub fn get_float(&self, tag: DataElementTag) -> Result<f64, DataError> {
    self.get_with(tag, DataElementValue::get_float)
  }

  pub fn get_floats(&self, tag: DataElementTag) -> Result<Vec<f64>, DataError> {
    self.get_with(tag, DataElementValue::get_floats)
  }

  pub fn get_attribute_tags(
    &self,
    tag: DataElementTag,
  ) -> Result<Vec<DataElementTag>, DataError> {
    self.get_with(tag, DataElementValue::get_attribute_tags)
  }

  /// Returns the transfer syntax named by *'(0002,0010) TransferSyntaxUID'*.
  /// An error is returned if it is absent or isn't a known transfer syntax.
  ///
  pub fn get_transfer_syntax(
    &self,
  ) -> Result<&'static TransferSyntax, DataError> {
    let uid = self.get_string(dictionary::TRANSFER_SYNTAX_UID.tag)?;

    TransferSyntax::from_uid(uid).map_err(|_| {
      DataError::new_value_invalid(format!(
        "Unrecognized transfer syntax UID: '{}'",
        uid
      ))
      .with_path(&DataSetPath::new_with_data_element(
        dictionary::TRANSFER_SYNTAX_UID.tag,
      ))
    })
  }

  /// Looks up a tag in the dictionary, using this data set's private creator
  /// elements to resolve private tags.
  ///
  pub fn find_entry(
    &self,
    tag: DataElementTag,
  ) -> Result<Entry<'static>, ()> {
    dictionary::find(tag, self.private_creator_for_tag(tag).ok())
  }

  /// Returns the name of a tag, using this data set's private creator elements
  /// to resolve private tags.
  ///
  pub fn tag_name(&self, tag: DataElementTag) -> &'static str {
    dictionary::tag_name(tag, self.private_creator_for_tag(tag).ok())
  }

  /// Formats a tag with its name, e.g. `"(0008,0020) StudyDate"`, using this
  /// data set's private creator elements to resolve private tags.
  ///
  pub fn tag_with_name(&self, tag: DataElementTag) -> String {
    dictionary::tag_with_name(tag, self.private_creator_for_tag(tag).ok())
  }

  /// Returns the value of the *'(gggg,00xx) PrivateCreator'* data element that
  /// reserves the block holding a private tag.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn private_creator_for_tag(
    &self,
    tag: DataElementTag,
  ) -> Result<&str, ()> {
    let creator_tag = tag.private_creator_tag().ok_or(())?;

    self.get_string(creator_tag).map_err(|_| ())
  }

  /// Removes all private data elements, including those inside sequences.
  ///
  pub fn delete_private_elements(&mut self) {
    self.0.retain(|tag, value| {
      if tag.is_private() {
        return false;
      }

      if let Ok(items) = value.sequence_items_mut() {
        items.iter_mut().for_each(DataSet::delete_private_elements);
      }

      true
    })
  }
}

impl FromIterator<(DataElementTag, DataElementValue)> for DataSet {
  fn from_iter<T: IntoIterator<Item = (DataElementTag, DataElementValue)>>(
    iter: T,
  ) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl IntoIterator for DataSet {
  type Item = (DataElementTag, DataElementValue);

  type IntoIter =
    std::collections::btree_map::IntoIter<DataElementTag, DataElementValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a DataSet {
  type Item = (&'a DataElementTag, &'a DataElementValue);

  type IntoIter =
    std::collections::btree_map::Iter<'a, DataElementTag, DataElementValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl Extend<(DataElementTag, DataElementValue)> for DataSet {
  fn extend<T: IntoIterator<Item = (DataElementTag, DataElementValue)>>(
    &mut self,
    iter: T,
  ) {
    self.0.extend(iter);
  }
}

fn check_multiplicity(entry: &Entry, count: usize) -> Result<(), DataError> {
  if entry.multiplicity.contains(count as u32) {
    Ok(())
  } else {
    Err(DataError::new_multiplicity_mismatch())
  }
}

/// Narrows integers to the width stored by a VR, failing if any is out of
/// range.
///
fn convert<T: TryFrom<i64>>(values: &[i64]) -> Result<Vec<T>, DataError> {
  values
    .iter()
    .map(|i| {
      T::try_from(*i).map_err(|_| {
        DataError::new_value_invalid(format!("Integer {} is out of range", i))
      })
    })
    .collect()
}

/// Returns the error for an `insert_*_value` call whose data doesn't suit the
/// entry's VR.
///
fn invalid_insert_error<T>(entry: &Entry) -> Result<T, DataError> {
  let vrs = entry
    .vrs
    .iter()
    .map(|vr| vr.to_string())
    .collect::<Vec<_>>()
    .join(" or ");

  Err(DataError::new_value_invalid(format!(
    "Data element '{}' with VR {} doesn't support the provided data",
    entry.name, vrs
  )))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_data_set() -> DataSet {
    let mut data_set = DataSet::new();

    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["Doe^John"])
      .unwrap();
    data_set
      .insert_string_value(&dictionary::SOP_CLASS_UID, &["1.2.3"])
      .unwrap();
    data_set
      .insert_string_value(
        &dictionary::TRANSFER_SYNTAX_UID,
        &["1.2.840.10008.1.2.1"],
      )
      .unwrap();
    data_set
      .insert_int_value(&dictionary::ROWS, &[512])
      .unwrap();

    data_set
  }

  #[test]
  fn insert_value_test() {
    let data_set = test_data_set();

    assert_eq!(data_set.size(), 4);
    assert_eq!(
      data_set.get_string(dictionary::PATIENT_NAME.tag),
      Ok("Doe^John")
    );
    assert_eq!(data_set.get_int(dictionary::ROWS.tag), Ok(512));

    let mut data_set = DataSet::new();

    assert_eq!(
      data_set.insert_int_value(&dictionary::ROWS, &[1, 2]),
      Err(
        DataError::new_multiplicity_mismatch()
          .with_path(&DataSetPath::new_with_data_element(dictionary::ROWS.tag))
      )
    );

    assert!(data_set.insert_int_value(&dictionary::ROWS, &[-1]).is_err());
    assert!(data_set
      .insert_int_value(&dictionary::PATIENT_NAME, &[1])
      .is_err());
    assert!(data_set
      .insert_float_value(&dictionary::ROWS, &[1.0])
      .is_err());

    data_set
      .insert_float_value(&dictionary::PIXEL_SPACING, &[0.5, 0.5])
      .unwrap();
    assert_eq!(
      data_set.get_floats(dictionary::PIXEL_SPACING.tag),
      Ok(vec![0.5, 0.5])
    );

    data_set
      .insert_sequence_value(
        &dictionary::REFERENCED_IMAGE_SEQUENCE,
        vec![DataSet::new()],
      )
      .unwrap();
    assert!(data_set
      .insert_sequence_value(&dictionary::ROWS, vec![])
      .is_err());
  }

  #[test]
  fn file_meta_information_test() {
    let fmi = test_data_set().file_meta_information();

    assert_eq!(
      fmi.tags(),
      vec![
        dictionary::MEDIA_STORAGE_SOP_CLASS_UID.tag,
        dictionary::TRANSFER_SYNTAX_UID.tag
      ]
    );
    assert_eq!(
      fmi.get_string(dictionary::MEDIA_STORAGE_SOP_CLASS_UID.tag),
      Ok("1.2.3")
    );
  }

  #[test]
  fn get_transfer_syntax_test() {
    assert_eq!(
      test_data_set().get_transfer_syntax(),
      Ok(&crate::transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN)
    );

    assert!(DataSet::new()
      .get_transfer_syntax()
      .unwrap_err()
      .is_tag_not_present());
  }

  #[test]
  fn get_value_at_path_test() {
    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::PATIENT_ID, &["123"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set
      .insert_sequence_value(
        &dictionary::OTHER_PATIENT_IDS_SEQUENCE,
        vec![DataSet::new(), item.clone()],
      )
      .unwrap();

    let path = DataSetPath::from_string("00101002/[1]/00100020").unwrap();
    assert_eq!(
      data_set.get_value_at_path(&path).and_then(|v| v.get_string()),
      Ok("123")
    );

    let path = DataSetPath::from_string("00101002/[1]").unwrap();
    assert_eq!(data_set.get_data_set_at_path(&path), Ok(&item));

    let path = DataSetPath::from_string("00101002/[2]").unwrap();
    assert_eq!(
      data_set.get_data_set_at_path(&path),
      Err(DataError::new_tag_not_present().with_path(&path))
    );

    let path = DataSetPath::from_string("00101002").unwrap();
    assert!(data_set.get_data_set_at_path(&path).is_err());
  }

  #[test]
  fn private_creator_for_tag_test() {
    let mut data_set = DataSet::new();
    data_set.insert(
      DataElementTag::new(0x0029, 0x0011),
      DataElementValue::new_text(VR::LongString, &["SIEMENS CSA HEADER"])
        .unwrap(),
    );

    let tag = DataElementTag::new(0x0029, 0x1110);
    assert_eq!(data_set.private_creator_for_tag(tag), Ok("SIEMENS CSA HEADER"));
    assert_eq!(data_set.tag_name(tag), "CSAImageHeaderInfo");

    assert_eq!(
      data_set.private_creator_for_tag(DataElementTag::new(0x0029, 0x1010)),
      Err(())
    );
    assert_eq!(
      data_set.tag_name(DataElementTag::new(0x0029, 0x1010)),
      "unknown_tag"
    );
  }

  #[test]
  fn delete_private_elements_test() {
    let mut item = DataSet::new();
    item.insert(
      DataElementTag::new(0x0009, 0x0010),
      DataElementValue::new_text(VR::LongString, &["GEMS_IDEN_01"]).unwrap(),
    );

    let mut data_set = test_data_set();
    data_set.insert(
      DataElementTag::new(0x0009, 0x0010),
      DataElementValue::new_text(VR::LongString, &["GEMS_IDEN_01"]).unwrap(),
    );
    data_set
      .insert_sequence_value(&dictionary::SOURCE_IMAGE_SEQUENCE, vec![item])
      .unwrap();

    data_set.delete_private_elements();

    assert!(!data_set.has(DataElementTag::new(0x0009, 0x0010)));
    assert_eq!(
      data_set
        .get_value(dictionary::SOURCE_IMAGE_SEQUENCE.tag)
        .and_then(|v| v.sequence_items())
        .map(|items| items[0].is_empty()),
      Ok(true)
    );
  }
}
