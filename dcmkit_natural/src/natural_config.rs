/// How the values of binary data elements, e.g. those with the `OB` or `OW`
/// VR, are stored in a natural data set.
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BulkDataForm {
  /// Store each binary value as a single [`crate::NaturalValue::Bytes`].
  #[default]
  Inline,

  /// Store each binary value as a [`crate::NaturalValue::List`] of
  /// [`crate::NaturalValue::Bytes`] chunks of the given size. Only the last
  /// chunk of a value can be shorter. A size of zero is treated as one.
  Chunked { chunk_size: usize },
}

/// Config options used when naturalizing a data set.
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NaturalizeConfig {
  /// The form used for the values of binary data elements. Encapsulated pixel
  /// data is unaffected by this option and always becomes a list of its
  /// fragments.
  ///
  pub bulk_data_form: BulkDataForm,
}
