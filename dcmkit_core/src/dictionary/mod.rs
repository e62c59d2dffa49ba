//! The data element dictionary.
//!
//! Standard elements are looked up by group and then by element, private
//! elements by their `(GGGG,"CREATOR",EE)` key, and repeating groups such as
//! overlays and curves through a range table. The lookup tables are built on
//! first use and are read-only afterwards, so they can be shared freely across
//! threads.

mod private_entries;
mod standard_entries;
mod table;

use std::sync::LazyLock;

use crate::{DataElementTag, ValueMultiplicity, ValueRepresentation};

use table::Dictionary;
use ValueRepresentation as VR;

static DICTIONARY: LazyLock<Dictionary> = LazyLock::new(Dictionary::build);

/// A single entry in the data element dictionary.
///
/// `vrs` lists the allowed value representations. It is empty for the item
/// and delimitation tags, which never carry a VR. Where more than one VR is
/// allowed the first is used by default when writing.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<'a> {
  pub tag: DataElementTag,
  pub name: &'a str,
  pub vrs: &'a [ValueRepresentation],
  pub multiplicity: ValueMultiplicity,
}

/// Looks up a tag in the dictionary. Private tags in a reserved block are
/// matched using the value of their private creator element, which must be
/// passed in `private_creator`.
///
/// Private creator elements themselves are always found, as are group length
/// elements in any group.
///
#[allow(clippy::result_unit_err)]
pub fn find(
  tag: DataElementTag,
  private_creator: Option<&str>,
) -> Result<Entry<'static>, ()> {
  if tag.is_private_creator() {
    return Ok(Entry {
      tag,
      name: "PrivateCreator",
      vrs: &[VR::LongString],
      multiplicity: ValueMultiplicity::ONE,
    });
  }

  if tag.is_private() {
    let private_entry = private_creator
      .and_then(|creator| private_tag_key(tag, creator))
      .and_then(|key| find_private(&key));

    if let Some(entry) = private_entry {
      return Ok(Entry { tag, ..entry });
    }

    return find_range(tag).ok_or(());
  }

  find_standard(tag).or_else(|| find_range(tag)).ok_or(())
}

/// Looks up a tag in the standard dictionary only.
///
pub fn find_standard(tag: DataElementTag) -> Option<Entry<'static>> {
  DICTIONARY.find_standard(tag)
}

/// Looks up a private tag by its key text, e.g.
/// `(0029,"SIEMENS CSA HEADER",10)`. The returned entry's tag has the key's
/// group and its one byte element.
///
pub fn find_private(key: &str) -> Option<Entry<'static>> {
  DICTIONARY.find_private(key)
}

/// Looks up a tag in the repeating-group range table, e.g. the overlay data
/// elements in groups `60xx`.
///
pub fn find_range(tag: DataElementTag) -> Option<Entry<'static>> {
  DICTIONARY.find_range(tag)
}

/// Returns the standard tag that has the given name, e.g. `"PatientName"`.
///
pub fn find_by_name(name: &str) -> Option<DataElementTag> {
  DICTIONARY.find_by_name(name)
}

/// Returns every standard entry in ascending tag order.
///
pub fn standard_entries() -> impl Iterator<Item = Entry<'static>> {
  DICTIONARY.standard_entries()
}

/// Returns the key used to look up a private tag in the private dictionary,
/// e.g. `(0029,"SIEMENS CSA HEADER",10)`. Returns `None` if the tag isn't in a
/// reserved private block.
///
pub fn private_tag_key(tag: DataElementTag, creator: &str) -> Option<String> {
  tag.private_creator_tag()?;

  Some(format!(
    "({:04X},\"{}\",{:02X})",
    tag.group,
    creator,
    tag.element & 0xFF
  ))
}

/// Returns the name of a tag, or `"unknown_tag"` if it isn't in the dictionary.
///
pub fn tag_name(
  tag: DataElementTag,
  private_creator: Option<&str>,
) -> &'static str {
  match find(tag, private_creator) {
    Ok(entry) => entry.name,
    Err(()) => "unknown_tag",
  }
}

/// Formats a tag and its name as a string, e.g. `"(0010,0010) PatientName"`.
///
pub fn tag_with_name(
  tag: DataElementTag,
  private_creator: Option<&str>,
) -> String {
  format!("{} {}", tag, tag_name(tag, private_creator))
}

/// Returns whether a tag is a file meta information element, i.e. is in group
/// 0x0002.
///
pub fn is_file_meta_information_tag(tag: DataElementTag) -> bool {
  tag.group == 0x0002
}

pub const FILE_META_INFORMATION_GROUP_LENGTH: Entry = Entry {
  tag: DataElementTag::new(0x0002, 0x0000),
  name: "FileMetaInformationGroupLength",
  vrs: &[VR::UnsignedLong],
  multiplicity: ValueMultiplicity::ONE,
};

pub const FILE_META_INFORMATION_VERSION: Entry = Entry {
  tag: DataElementTag::new(0x0002, 0x0001),
  name: "FileMetaInformationVersion",
  vrs: &[VR::OtherByteString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const MEDIA_STORAGE_SOP_CLASS_UID: Entry = Entry {
  tag: DataElementTag::new(0x0002, 0x0002),
  name: "MediaStorageSOPClassUID",
  vrs: &[VR::UniqueIdentifier],
  multiplicity: ValueMultiplicity::ONE,
};

pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Entry = Entry {
  tag: DataElementTag::new(0x0002, 0x0003),
  name: "MediaStorageSOPInstanceUID",
  vrs: &[VR::UniqueIdentifier],
  multiplicity: ValueMultiplicity::ONE,
};

pub const TRANSFER_SYNTAX_UID: Entry = Entry {
  tag: DataElementTag::new(0x0002, 0x0010),
  name: "TransferSyntaxUID",
  vrs: &[VR::UniqueIdentifier],
  multiplicity: ValueMultiplicity::ONE,
};

pub const IMPLEMENTATION_CLASS_UID: Entry = Entry {
  tag: DataElementTag::new(0x0002, 0x0012),
  name: "ImplementationClassUID",
  vrs: &[VR::UniqueIdentifier],
  multiplicity: ValueMultiplicity::ONE,
};

pub const IMPLEMENTATION_VERSION_NAME: Entry = Entry {
  tag: DataElementTag::new(0x0002, 0x0013),
  name: "ImplementationVersionName",
  vrs: &[VR::ShortString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const SOURCE_APPLICATION_ENTITY_TITLE: Entry = Entry {
  tag: DataElementTag::new(0x0002, 0x0016),
  name: "SourceApplicationEntityTitle",
  vrs: &[VR::ApplicationEntity],
  multiplicity: ValueMultiplicity::ONE,
};

pub const SPECIFIC_CHARACTER_SET: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x0005),
  name: "SpecificCharacterSet",
  vrs: &[VR::CodeString],
  multiplicity: ValueMultiplicity {
    min: 1,
    max: None,
    step: 1,
  },
};

pub const IMAGE_TYPE: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x0008),
  name: "ImageType",
  vrs: &[VR::CodeString],
  multiplicity: ValueMultiplicity {
    min: 2,
    max: None,
    step: 1,
  },
};

pub const SOP_CLASS_UID: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x0016),
  name: "SOPClassUID",
  vrs: &[VR::UniqueIdentifier],
  multiplicity: ValueMultiplicity::ONE,
};

pub const SOP_INSTANCE_UID: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x0018),
  name: "SOPInstanceUID",
  vrs: &[VR::UniqueIdentifier],
  multiplicity: ValueMultiplicity::ONE,
};

pub const STUDY_DATE: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x0020),
  name: "StudyDate",
  vrs: &[VR::Date],
  multiplicity: ValueMultiplicity::ONE,
};

pub const STUDY_TIME: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x0030),
  name: "StudyTime",
  vrs: &[VR::Time],
  multiplicity: ValueMultiplicity::ONE,
};

pub const ACCESSION_NUMBER: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x0050),
  name: "AccessionNumber",
  vrs: &[VR::ShortString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const MODALITY: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x0060),
  name: "Modality",
  vrs: &[VR::CodeString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const REFERENCED_IMAGE_SEQUENCE: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x1140),
  name: "ReferencedImageSequence",
  vrs: &[VR::Sequence],
  multiplicity: ValueMultiplicity::ONE,
};

pub const SOURCE_IMAGE_SEQUENCE: Entry = Entry {
  tag: DataElementTag::new(0x0008, 0x2112),
  name: "SourceImageSequence",
  vrs: &[VR::Sequence],
  multiplicity: ValueMultiplicity::ONE,
};

pub const PATIENT_NAME: Entry = Entry {
  tag: DataElementTag::new(0x0010, 0x0010),
  name: "PatientName",
  vrs: &[VR::PersonName],
  multiplicity: ValueMultiplicity::ONE,
};

pub const PATIENT_ID: Entry = Entry {
  tag: DataElementTag::new(0x0010, 0x0020),
  name: "PatientID",
  vrs: &[VR::LongString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const PATIENT_BIRTH_DATE: Entry = Entry {
  tag: DataElementTag::new(0x0010, 0x0030),
  name: "PatientBirthDate",
  vrs: &[VR::Date],
  multiplicity: ValueMultiplicity::ONE,
};

pub const PATIENT_SEX: Entry = Entry {
  tag: DataElementTag::new(0x0010, 0x0040),
  name: "PatientSex",
  vrs: &[VR::CodeString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const OTHER_PATIENT_IDS_SEQUENCE: Entry = Entry {
  tag: DataElementTag::new(0x0010, 0x1002),
  name: "OtherPatientIDsSequence",
  vrs: &[VR::Sequence],
  multiplicity: ValueMultiplicity::ONE,
};

pub const STUDY_INSTANCE_UID: Entry = Entry {
  tag: DataElementTag::new(0x0020, 0x000D),
  name: "StudyInstanceUID",
  vrs: &[VR::UniqueIdentifier],
  multiplicity: ValueMultiplicity::ONE,
};

pub const SERIES_INSTANCE_UID: Entry = Entry {
  tag: DataElementTag::new(0x0020, 0x000E),
  name: "SeriesInstanceUID",
  vrs: &[VR::UniqueIdentifier],
  multiplicity: ValueMultiplicity::ONE,
};

pub const INSTANCE_NUMBER: Entry = Entry {
  tag: DataElementTag::new(0x0020, 0x0013),
  name: "InstanceNumber",
  vrs: &[VR::IntegerString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const SAMPLES_PER_PIXEL: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0002),
  name: "SamplesPerPixel",
  vrs: &[VR::UnsignedShort],
  multiplicity: ValueMultiplicity::ONE,
};

pub const PHOTOMETRIC_INTERPRETATION: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0004),
  name: "PhotometricInterpretation",
  vrs: &[VR::CodeString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const NUMBER_OF_FRAMES: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0008),
  name: "NumberOfFrames",
  vrs: &[VR::IntegerString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const ROWS: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0010),
  name: "Rows",
  vrs: &[VR::UnsignedShort],
  multiplicity: ValueMultiplicity::ONE,
};

pub const COLUMNS: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0011),
  name: "Columns",
  vrs: &[VR::UnsignedShort],
  multiplicity: ValueMultiplicity::ONE,
};

pub const PIXEL_SPACING: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0030),
  name: "PixelSpacing",
  vrs: &[VR::DecimalString],
  multiplicity: ValueMultiplicity {
    min: 2,
    max: Some(2),
    step: 1,
  },
};

pub const BITS_ALLOCATED: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0100),
  name: "BitsAllocated",
  vrs: &[VR::UnsignedShort],
  multiplicity: ValueMultiplicity::ONE,
};

pub const BITS_STORED: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0101),
  name: "BitsStored",
  vrs: &[VR::UnsignedShort],
  multiplicity: ValueMultiplicity::ONE,
};

pub const HIGH_BIT: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0102),
  name: "HighBit",
  vrs: &[VR::UnsignedShort],
  multiplicity: ValueMultiplicity::ONE,
};

pub const PIXEL_REPRESENTATION: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0103),
  name: "PixelRepresentation",
  vrs: &[VR::UnsignedShort],
  multiplicity: ValueMultiplicity::ONE,
};

pub const SMALLEST_IMAGE_PIXEL_VALUE: Entry = Entry {
  tag: DataElementTag::new(0x0028, 0x0106),
  name: "SmallestImagePixelValue",
  vrs: &[VR::UnsignedShort, VR::SignedShort],
  multiplicity: ValueMultiplicity::ONE,
};

pub const EXTENDED_OFFSET_TABLE: Entry = Entry {
  tag: DataElementTag::new(0x7FE0, 0x0001),
  name: "ExtendedOffsetTable",
  vrs: &[VR::OtherVeryLongString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const EXTENDED_OFFSET_TABLE_LENGTHS: Entry = Entry {
  tag: DataElementTag::new(0x7FE0, 0x0002),
  name: "ExtendedOffsetTableLengths",
  vrs: &[VR::OtherVeryLongString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const PIXEL_DATA: Entry = Entry {
  tag: DataElementTag::new(0x7FE0, 0x0010),
  name: "PixelData",
  vrs: &[VR::OtherByteString, VR::OtherWordString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const DATA_SET_TRAILING_PADDING: Entry = Entry {
  tag: DataElementTag::new(0xFFFC, 0xFFFC),
  name: "DataSetTrailingPadding",
  vrs: &[VR::OtherByteString],
  multiplicity: ValueMultiplicity::ONE,
};

pub const ITEM: Entry = Entry {
  tag: DataElementTag::new(0xFFFE, 0xE000),
  name: "Item",
  vrs: &[],
  multiplicity: ValueMultiplicity::ONE,
};

pub const ITEM_DELIMITATION_ITEM: Entry = Entry {
  tag: DataElementTag::new(0xFFFE, 0xE00D),
  name: "ItemDelimitationItem",
  vrs: &[],
  multiplicity: ValueMultiplicity::ONE,
};

pub const SEQUENCE_DELIMITATION_ITEM: Entry = Entry {
  tag: DataElementTag::new(0xFFFE, 0xE0DD),
  name: "SequenceDelimitationItem",
  vrs: &[],
  multiplicity: ValueMultiplicity::ONE,
};

#[cfg(test)]
mod tests {
  use super::standard_entries::STANDARD_ENTRIES;
  use super::*;

  #[test]
  fn find_every_standard_entry_test() {
    for (group, element, _, vm, name) in STANDARD_ENTRIES {
      let tag = DataElementTag::new(*group, *element);
      let entry = find(tag, None).unwrap();

      assert_eq!(entry.tag, tag);
      assert_eq!(entry.name, *name);
      assert_eq!(entry.multiplicity.to_string(), *vm);

      let next = DataElementTag::new(*group, element.wrapping_add(1));
      if !STANDARD_ENTRIES
        .iter()
        .any(|(g, e, ..)| *g == next.group && *e == next.element)
      {
        assert_eq!(find_standard(next), None);
      }
    }
  }

  #[test]
  fn find_test() {
    assert_eq!(find(PATIENT_NAME.tag, None), Ok(PATIENT_NAME));
    assert_eq!(find(PIXEL_DATA.tag, None), Ok(PIXEL_DATA));
    assert_eq!(find(ITEM.tag, None).map(|e| e.vrs.len()), Ok(0));

    assert_eq!(find(DataElementTag::new(0x0010, 0x0011), None), Err(()));
    assert_eq!(find(DataElementTag::new(0x1234, 0x5678), None), Err(()));
  }

  #[test]
  fn find_range_test() {
    let entry = find(DataElementTag::new(0x6002, 0x3000), None).unwrap();
    assert_eq!(entry.name, "OverlayData");
    assert_eq!(entry.tag, DataElementTag::new(0x6002, 0x3000));
    assert_eq!(entry.vrs, &[VR::OtherByteString, VR::OtherWordString]);

    assert_eq!(find(DataElementTag::new(0x6003, 0x3000), None), Err(()));

    assert_eq!(
      find(DataElementTag::new(0x0009, 0x0000), None).map(|e| e.name),
      Ok("GenericGroupLength")
    );

    assert_eq!(
      find(DataElementTag::new(0x1000, 0x0012), None).map(|e| e.name),
      Ok("HuffmanTableSize")
    );
  }

  #[test]
  fn find_private_test() {
    assert_eq!(
      find(DataElementTag::new(0x0029, 0x0010), None).map(|e| e.name),
      Ok("PrivateCreator")
    );

    let entry = find(
      DataElementTag::new(0x0029, 0x1010),
      Some("SIEMENS CSA HEADER"),
    )
    .unwrap();
    assert_eq!(entry.tag, DataElementTag::new(0x0029, 0x1010));
    assert_eq!(entry.name, "CSAImageHeaderInfo");
    assert_eq!(entry.vrs, &[VR::OtherByteString]);

    // The block number in the element doesn't affect the lookup
    assert_eq!(
      find(DataElementTag::new(0x0029, 0x1110), Some("SIEMENS CSA HEADER"))
        .map(|e| e.name),
      Ok("CSAImageHeaderInfo")
    );

    assert_eq!(
      find(DataElementTag::new(0x0029, 0x1010), Some("UNKNOWN")),
      Err(())
    );
    assert_eq!(find(DataElementTag::new(0x0029, 0x1010), None), Err(()));

    let entry =
      find_private("(2005,\"Philips MR Imaging DD 001\",0E)").unwrap();
    assert_eq!(entry.tag, DataElementTag::new(0x2005, 0x000E));
    assert_eq!(entry.name, "ScaleSlope");

    assert_eq!(find_private("(2005,\"Philips MR Imaging DD 001\",FF)"), None);
  }

  #[test]
  fn private_tag_key_test() {
    assert_eq!(
      private_tag_key(DataElementTag::new(0x0019, 0x100A), "SIEMENS MR HEADER"),
      Some("(0019,\"SIEMENS MR HEADER\",0A)".to_string())
    );

    assert_eq!(
      private_tag_key(DataElementTag::new(0x0019, 0x0010), "SIEMENS MR HEADER"),
      None
    );
    assert_eq!(private_tag_key(PATIENT_NAME.tag, "X"), None);
  }

  #[test]
  fn find_by_name_test() {
    assert_eq!(find_by_name("PatientName"), Some(PATIENT_NAME.tag));
    assert_eq!(find_by_name("PixelData"), Some(PIXEL_DATA.tag));
    assert_eq!(
      find_by_name("FileMetaInformationGroupLength"),
      Some(FILE_META_INFORMATION_GROUP_LENGTH.tag)
    );
    assert_eq!(find_by_name("patientname"), None);
    assert_eq!(find_by_name("OverlayData"), None);

    for entry in standard_entries() {
      assert_eq!(find_by_name(entry.name), Some(entry.tag));
    }
  }

  #[test]
  fn find_across_groups_test() {
    let check = |group, element, name, vrs: &[VR], vm| {
      let entry = find(DataElementTag::new(group, element), None).unwrap();

      assert_eq!(entry.name, name);
      assert_eq!(entry.vrs, vrs);
      assert_eq!(entry.multiplicity.to_string(), vm);
    };

    check(0x0004, 0x1220, "DirectoryRecordSequence", &[VR::Sequence], "1");
    check(0x0018, 0x0050, "SliceThickness", &[VR::DecimalString], "1");
    check(0x0018, 0x1210, "ConvolutionKernel", &[VR::ShortString], "1-n");
    check(0x0018, 0x9087, "DiffusionBValue", &[VR::FloatingPointDouble], "1");
    check(0x0020, 0x0037, "ImageOrientationPatient", &[VR::DecimalString], "6");
    check(0x0028, 0x1050, "WindowCenter", &[VR::DecimalString], "1-n");
    check(
      0x0028,
      0x3006,
      "LUTData",
      &[VR::UnsignedShort, VR::OtherWordString],
      "1-n",
    );
    check(0x0040, 0xA730, "ContentSequence", &[VR::Sequence], "1");
    check(0x0048, 0x0006, "TotalPixelMatrixColumns", &[VR::UnsignedLong], "1");
    check(0x0054, 0x1001, "Units", &[VR::CodeString], "1");
    check(0x3004, 0x000C, "GridFrameOffsetVector", &[VR::DecimalString], "2-n");
    check(0x3006, 0x0050, "ContourData", &[VR::DecimalString], "3-3n");
    check(0x300A, 0x00B0, "BeamSequence", &[VR::Sequence], "1");
    check(
      0x5400,
      0x1010,
      "WaveformData",
      &[VR::OtherByteString, VR::OtherWordString],
      "1",
    );

    let entry = find(
      DataElementTag::new(0x2001, 0x1013),
      Some("Philips Imaging DD 001"),
    )
    .unwrap();
    assert_eq!(entry.name, "EPIFactor");
    assert_eq!(entry.vrs, &[VR::SignedLong]);
  }

  #[test]
  fn standard_entries_are_sorted_test() {
    let tags: Vec<_> = standard_entries().map(|e| e.tag).collect();

    assert_eq!(tags.len(), STANDARD_ENTRIES.len());
    assert!(tags.windows(2).all(|w| w[0] < w[1]));
  }

  #[test]
  fn named_constants_match_dictionary_test() {
    for entry in [
      FILE_META_INFORMATION_VERSION,
      TRANSFER_SYNTAX_UID,
      SPECIFIC_CHARACTER_SET,
      OTHER_PATIENT_IDS_SEQUENCE,
      PIXEL_SPACING,
      SMALLEST_IMAGE_PIXEL_VALUE,
      SEQUENCE_DELIMITATION_ITEM,
    ] {
      assert_eq!(find_standard(entry.tag), Some(entry));
    }
  }

  #[test]
  fn tag_name_test() {
    assert_eq!(tag_name(STUDY_DATE.tag, None), "StudyDate");
    assert_eq!(
      tag_name(DataElementTag::new(0x1234, 0x5678), None),
      "unknown_tag"
    );

    assert_eq!(
      tag_with_name(PATIENT_NAME.tag, None),
      "(0010,0010) PatientName"
    );
  }
}
