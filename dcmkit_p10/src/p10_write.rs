//! Serializes data sets and streams of DICOM P10 parts into DICOM P10 bytes.
//!
//! [`data_set_to_bytes()`] writes a complete in-memory data set, and by default
//! gives sequences and items defined lengths because their content is known up
//! front. [`P10WriteContext`] writes a stream of parts as they arrive, so
//! sequences and items it writes always have undefined lengths.

use std::io::Write;
use std::rc::Rc;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use flate2::write::DeflateEncoder;
use flate2::Compression;

use dcmkit_core::transfer_syntax::{self, Endianness, VrSerialization};
use dcmkit_core::value_representation::LengthFieldSize;
use dcmkit_core::{
  dictionary, DataElementTag, DataElementValue, DataSet, DataSetPath,
  TransferSyntax, ValueRepresentation,
};

use crate::internal::data_element_header::DataElementHeader;
use crate::internal::value_length::ValueLength;
use crate::{p10_part, uids, P10Error, P10Part, P10PartListener};

/// How the lengths of sequences and sequence items are written.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SequenceLengthEncoding {
  /// Every sequence and item header states its length in bytes. No delimiters
  /// are written.
  Defined,

  /// Sequences and items are given an undefined length and are terminated by
  /// delimitation items.
  Undefined,
}

/// Configuration used when writing DICOM P10 data.
///
#[derive(Clone, Debug, PartialEq)]
pub struct P10WriteConfig {
  /// The 128-byte File Preamble written at the start of the data. Defaults to
  /// all zeros.
  pub preamble: [u8; 128],

  /// How sequences and items are delimited by [`data_set_to_bytes()`]. Has no
  /// effect on [`P10WriteContext`], which always uses undefined lengths.
  pub sequence_length_encoding: SequenceLengthEncoding,

  /// The zlib compression level used for deflated transfer syntaxes, from 0 to
  /// 9. Defaults to 6.
  pub zlib_compression_level: u32,

  /// The *'(0002,0012) Implementation Class UID'* written when the data set
  /// doesn't already specify one.
  pub implementation_class_uid: String,

  /// The *'(0002,0013) Implementation Version Name'* written when the data set
  /// doesn't already specify one.
  pub implementation_version_name: String,
}

impl Default for P10WriteConfig {
  fn default() -> Self {
    Self {
      preamble: [0; 128],
      sequence_length_encoding: SequenceLengthEncoding::Defined,
      zlib_compression_level: 6,
      implementation_class_uid: uids::DCMKIT_IMPLEMENTATION_CLASS_UID
        .to_string(),
      implementation_version_name: uids::DCMKIT_IMPLEMENTATION_VERSION_NAME
        .clone(),
    }
  }
}

/// Converts a data set to DICOM P10 parts that are passed to the callback in
/// order. The File Meta Information part holds the data set's group 0x0002
/// data elements, which are not repeated in the main body.
///
pub fn data_set_to_parts<E>(
  data_set: &DataSet,
  part_callback: &mut impl FnMut(&P10Part) -> Result<(), E>,
) -> Result<(), E> {
  part_callback(&P10Part::FilePreambleAndDICMPrefix {
    preamble: Box::new([0; 128]),
  })?;

  part_callback(&P10Part::FileMetaInformation {
    data_set: data_set.file_meta_information(),
  })?;

  for (tag, value) in data_set.iter() {
    if is_written_in_body(*tag) {
      p10_part::data_element_to_parts(*tag, value, part_callback)?;
    }
  }

  part_callback(&P10Part::End)
}

/// Converts a data set to DICOM P10 bytes that are passed to the callback in
/// order. The File Meta Information is always written in the 'Explicit VR
/// Little Endian' transfer syntax, and the rest of the data set is written in
/// the transfer syntax it specifies, defaulting to 'Implicit VR Little Endian'.
///
pub fn data_set_to_bytes(
  data_set: &DataSet,
  bytes_callback: &mut impl FnMut(Rc<Vec<u8>>) -> Result<(), P10Error>,
  config: &P10WriteConfig,
) -> Result<(), P10Error> {
  let (file_meta_information, transfer_syntax) =
    prepare_file_meta_information(data_set.file_meta_information(), config)?;

  let mut header = Vec::with_capacity(256);
  header.extend_from_slice(&config.preamble);
  header.extend_from_slice(b"DICM");
  file_meta_information_to_bytes(&file_meta_information, &mut header)?;
  bytes_callback(Rc::new(header))?;

  let mut encoder = DataSetEncoder {
    transfer_syntax,
    sequence_length_encoding: config.sequence_length_encoding,
    path: DataSetPath::new(),
  };

  let mut body = BodyWriter::new(transfer_syntax, config);

  for (tag, value) in data_set.iter() {
    if !is_written_in_body(*tag) {
      continue;
    }

    let mut bytes = vec![];
    encoder.encode_data_element(*tag, value, &mut bytes)?;

    if let Some(bytes) = body.write(bytes)? {
      bytes_callback(bytes)?;
    }
  }

  if let Some(bytes) = body.finish()? {
    bytes_callback(bytes)?;
  }

  Ok(())
}

/// A streaming writer that converts DICOM P10 parts into DICOM P10 bytes. Parts
/// are written with [`Self::write_part()`], and the resulting bytes are taken
/// with [`Self::read_bytes()`].
///
pub struct P10WriteContext {
  config: P10WriteConfig,
  transfer_syntax: &'static TransferSyntax,
  p10_bytes: Vec<Rc<Vec<u8>>>,
  body: Option<BodyWriter>,
  has_written_preamble: bool,
  padding_byte: Option<u8>,
  is_ended: bool,
}

impl Default for P10WriteContext {
  fn default() -> Self {
    Self::new(P10WriteConfig::default())
  }
}

impl P10WriteContext {
  pub fn new(config: P10WriteConfig) -> Self {
    Self {
      config,
      transfer_syntax: &transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN,
      p10_bytes: vec![],
      body: None,
      has_written_preamble: false,
      padding_byte: None,
      is_ended: false,
    }
  }

  /// Returns the DICOM P10 bytes that have been written since the last call,
  /// and clears them from the write context.
  ///
  pub fn read_bytes(&mut self) -> Vec<Rc<Vec<u8>>> {
    std::mem::take(&mut self.p10_bytes)
  }

  /// Returns whether the [`P10Part::End`] part has been written.
  ///
  pub fn is_ended(&self) -> bool {
    self.is_ended
  }

  /// Writes the next DICOM P10 part to the write context.
  ///
  pub fn write_part(&mut self, part: &P10Part) -> Result<(), P10Error> {
    if self.is_ended {
      return Err(self.part_stream_error(
        "Part received after the end of the part stream",
        part,
      ));
    }

    match part {
      P10Part::FilePreambleAndDICMPrefix { preamble } => {
        self.write_preamble(**preamble);
        Ok(())
      }

      P10Part::FileMetaInformation { data_set } => {
        if self.body.is_some() {
          return Err(self.part_stream_error(
            "File Meta Information received more than once",
            part,
          ));
        }

        if !self.has_written_preamble {
          self.write_preamble(self.config.preamble);
        }

        let (file_meta_information, transfer_syntax) =
          prepare_file_meta_information(data_set.clone(), &self.config)?;

        let mut bytes = vec![];
        file_meta_information_to_bytes(&file_meta_information, &mut bytes)?;
        self.p10_bytes.push(Rc::new(bytes));

        tracing::debug!(
          "Writing DICOM P10 body with transfer syntax '{}'",
          transfer_syntax.name
        );

        self.transfer_syntax = transfer_syntax;
        self.body = Some(BodyWriter::new(transfer_syntax, &self.config));

        Ok(())
      }

      P10Part::DataElementHeader { tag, vr, length } => {
        self.padding_byte = None;
        if length % 2 == 1 {
          let mut padding = vec![];
          vr.pad_bytes_to_even_length(&mut padding);
          self.padding_byte = padding.first().copied();
        }

        let header = DataElementHeader {
          tag: *tag,
          vr: Some(*vr),
          length: ValueLength::new(length.saturating_add(length % 2)),
        };

        self.write_header(&header, part)
      }

      P10Part::DataElementValueBytes {
        vr,
        data,
        bytes_remaining,
      } => {
        let mut bytes = data.to_vec();

        if self.transfer_syntax.endianness == Endianness::BigEndian {
          vr.swap_endianness(&mut bytes);
        }

        if *bytes_remaining == 0 {
          if let Some(padding_byte) = self.padding_byte.take() {
            bytes.push(padding_byte);
          }
        }

        self.write_body(bytes, part)
      }

      P10Part::SequenceStart { tag, vr } => {
        let header = DataElementHeader {
          tag: *tag,
          vr: Some(*vr),
          length: ValueLength::Undefined,
        };

        self.write_header(&header, part)
      }

      P10Part::SequenceDelimiter => {
        let header = DataElementHeader {
          tag: dictionary::SEQUENCE_DELIMITATION_ITEM.tag,
          vr: None,
          length: ValueLength::ZERO,
        };

        self.write_header(&header, part)
      }

      P10Part::SequenceItemStart => {
        let header = DataElementHeader {
          tag: dictionary::ITEM.tag,
          vr: None,
          length: ValueLength::Undefined,
        };

        self.write_header(&header, part)
      }

      P10Part::SequenceItemDelimiter => {
        let header = DataElementHeader {
          tag: dictionary::ITEM_DELIMITATION_ITEM.tag,
          vr: None,
          length: ValueLength::ZERO,
        };

        self.write_header(&header, part)
      }

      P10Part::PixelDataItem { length } => {
        self.padding_byte = (length % 2 == 1).then_some(0);

        let header = DataElementHeader {
          tag: dictionary::ITEM.tag,
          vr: None,
          length: ValueLength::new(length.saturating_add(length % 2)),
        };

        self.write_header(&header, part)
      }

      P10Part::End => {
        let body = self.body.take().ok_or_else(|| {
          self.part_stream_error(
            "End received before File Meta Information",
            part,
          )
        })?;

        if let Some(bytes) = body.finish()? {
          self.p10_bytes.push(bytes);
        }

        self.is_ended = true;

        Ok(())
      }
    }
  }

  fn write_preamble(&mut self, preamble: [u8; 128]) {
    let mut bytes = Vec::with_capacity(132);
    bytes.extend_from_slice(&preamble);
    bytes.extend_from_slice(b"DICM");

    self.p10_bytes.push(Rc::new(bytes));
    self.has_written_preamble = true;
  }

  fn write_header(
    &mut self,
    header: &DataElementHeader,
    part: &P10Part,
  ) -> Result<(), P10Error> {
    let mut bytes = Vec::with_capacity(12);

    data_element_header_to_bytes(header, self.transfer_syntax, &mut bytes)
      .map_err(|details| P10Error::DataInvalid {
        when: "Serializing data element header".to_string(),
        details,
        path: Some(DataSetPath::new_with_data_element(header.tag)),
        offset: None,
      })?;

    self.write_body(bytes, part)
  }

  fn write_body(
    &mut self,
    bytes: Vec<u8>,
    part: &P10Part,
  ) -> Result<(), P10Error> {
    let body = match self.body.as_mut() {
      Some(body) => body,
      None => {
        return Err(self.part_stream_error(
          "Part received before File Meta Information",
          part,
        ))
      }
    };

    if let Some(bytes) = body.write(bytes)? {
      self.p10_bytes.push(bytes);
    }

    Ok(())
  }

  fn part_stream_error(&self, details: &str, part: &P10Part) -> P10Error {
    P10Error::PartStreamInvalid {
      when: "Writing DICOM P10 part".to_string(),
      details: details.to_string(),
      part: part.clone(),
    }
  }
}

impl P10PartListener for P10WriteContext {
  fn add_part(&mut self, part: &P10Part) -> Result<(), P10Error> {
    self.write_part(part)
  }
}

/// Returns whether a data element from a data set is written in the main body,
/// i.e. isn't File Meta Information or a group length.
///
fn is_written_in_body(tag: DataElementTag) -> bool {
  !dictionary::is_file_meta_information_tag(tag) && tag.element != 0x0000
}

/// Fills in the File Meta Information data elements that are required but
/// absent, and resolves the transfer syntax of the main data set.
///
fn prepare_file_meta_information(
  mut file_meta_information: DataSet,
  config: &P10WriteConfig,
) -> Result<(DataSet, &'static TransferSyntax), P10Error> {
  let to_p10_error = |tag: DataElementTag| {
    move |e: dcmkit_core::DataError| P10Error::DataInvalid {
      when: "Preparing File Meta Information".to_string(),
      details: e.to_string(),
      path: Some(DataSetPath::new_with_data_element(tag)),
      offset: None,
    }
  };

  file_meta_information
    .delete(dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag);

  if !file_meta_information.has(dictionary::FILE_META_INFORMATION_VERSION.tag) {
    file_meta_information.insert(
      dictionary::FILE_META_INFORMATION_VERSION.tag,
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::OtherByteString,
        Rc::new(vec![0, 1]),
      ),
    );
  }

  for (entry, uid) in [
    (
      dictionary::TRANSFER_SYNTAX_UID,
      transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN.uid,
    ),
    (
      dictionary::IMPLEMENTATION_CLASS_UID,
      config.implementation_class_uid.as_str(),
    ),
  ] {
    if !file_meta_information.has(entry.tag) {
      let value = DataElementValue::new_unique_identifier(&[uid])
        .map_err(to_p10_error(entry.tag))?;

      file_meta_information.insert(entry.tag, value);
    }
  }

  let version_name_tag = dictionary::IMPLEMENTATION_VERSION_NAME.tag;
  if !file_meta_information.has(version_name_tag) {
    let value = DataElementValue::new_text(
      ValueRepresentation::ShortString,
      &[config.implementation_version_name.as_str()],
    )
    .map_err(to_p10_error(version_name_tag))?;

    file_meta_information.insert(version_name_tag, value);
  }

  let transfer_syntax_uid = file_meta_information
    .get_string(dictionary::TRANSFER_SYNTAX_UID.tag)
    .map_err(to_p10_error(dictionary::TRANSFER_SYNTAX_UID.tag))?;

  let transfer_syntax =
    TransferSyntax::from_uid(transfer_syntax_uid).map_err(|_| {
      P10Error::TransferSyntaxNotSupported {
        transfer_syntax_uid: transfer_syntax_uid.to_string(),
      }
    })?;

  Ok((file_meta_information, transfer_syntax))
}

/// Appends the File Meta Information to the output, preceded by its group
/// length data element. It is always Explicit VR Little Endian.
///
fn file_meta_information_to_bytes(
  file_meta_information: &DataSet,
  bytes: &mut Vec<u8>,
) -> Result<(), P10Error> {
  let mut encoder = DataSetEncoder {
    transfer_syntax: &transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN,
    sequence_length_encoding: SequenceLengthEncoding::Undefined,
    path: DataSetPath::new(),
  };

  let mut elements = vec![];
  for (tag, value) in file_meta_information.iter() {
    encoder.encode_data_element(*tag, value, &mut elements)?;
  }

  let mut group_length = [0u8; 4];
  LittleEndian::write_u32(&mut group_length, elements.len() as u32);

  encoder.encode_data_element(
    dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag,
    &DataElementValue::new_binary_unchecked(
      ValueRepresentation::UnsignedLong,
      Rc::new(group_length.to_vec()),
    ),
    bytes,
  )?;

  bytes.extend_from_slice(&elements);

  Ok(())
}

/// Encodes data elements of an in-memory data set in a given transfer syntax.
///
struct DataSetEncoder {
  transfer_syntax: &'static TransferSyntax,
  sequence_length_encoding: SequenceLengthEncoding,
  path: DataSetPath,
}

impl DataSetEncoder {
  fn encode_data_set(
    &mut self,
    data_set: &DataSet,
    bytes: &mut Vec<u8>,
  ) -> Result<(), P10Error> {
    for (tag, value) in data_set.iter() {
      if tag.element != 0x0000 {
        self.encode_data_element(*tag, value, bytes)?;
      }
    }

    Ok(())
  }

  fn encode_data_element(
    &mut self,
    tag: DataElementTag,
    value: &DataElementValue,
    bytes: &mut Vec<u8>,
  ) -> Result<(), P10Error> {
    self
      .path
      .add_data_element(tag)
      .map_err(|details| self.error(details))?;

    let vr = value.value_representation();

    if let Ok(value_bytes) = value.bytes() {
      let mut data = value_bytes.to_vec();
      vr.pad_bytes_to_even_length(&mut data);

      if self.transfer_syntax.endianness == Endianness::BigEndian {
        vr.swap_endianness(&mut data);
      }

      let length = self.defined_length(data.len())?;
      self.encode_header(tag, Some(vr), length, bytes)?;
      bytes.extend_from_slice(&data);
    } else if let Ok(items) = value.encapsulated_pixel_data() {
      self.encode_header(tag, Some(vr), ValueLength::Undefined, bytes)?;

      for item in items {
        let length = self.defined_length(item.len() + item.len() % 2)?;
        self.encode_header(dictionary::ITEM.tag, None, length, bytes)?;

        bytes.extend_from_slice(item);
        if item.len() % 2 == 1 {
          bytes.push(0);
        }
      }

      self.encode_delimiter(dictionary::SEQUENCE_DELIMITATION_ITEM.tag, bytes)?;
    } else if let Ok(items) = value.sequence_items() {
      self.encode_sequence(tag, items, bytes)?;
    }

    self.path.pop();

    Ok(())
  }

  fn encode_sequence(
    &mut self,
    tag: DataElementTag,
    items: &[DataSet],
    bytes: &mut Vec<u8>,
  ) -> Result<(), P10Error> {
    let vr = Some(ValueRepresentation::Sequence);

    match self.sequence_length_encoding {
      SequenceLengthEncoding::Defined => {
        let mut sequence_bytes = vec![];

        for (index, item) in items.iter().enumerate() {
          let mut item_bytes = vec![];
          self.encode_item(index, item, &mut item_bytes)?;

          let length = self.defined_length(item_bytes.len())?;
          self.encode_header(
            dictionary::ITEM.tag,
            None,
            length,
            &mut sequence_bytes,
          )?;
          sequence_bytes.extend_from_slice(&item_bytes);
        }

        let length = self.defined_length(sequence_bytes.len())?;
        self.encode_header(tag, vr, length, bytes)?;
        bytes.extend_from_slice(&sequence_bytes);
      }

      SequenceLengthEncoding::Undefined => {
        self.encode_header(tag, vr, ValueLength::Undefined, bytes)?;

        for (index, item) in items.iter().enumerate() {
          self.encode_header(
            dictionary::ITEM.tag,
            None,
            ValueLength::Undefined,
            bytes,
          )?;
          self.encode_item(index, item, bytes)?;
          self.encode_delimiter(dictionary::ITEM_DELIMITATION_ITEM.tag, bytes)?;
        }

        self.encode_delimiter(
          dictionary::SEQUENCE_DELIMITATION_ITEM.tag,
          bytes,
        )?;
      }
    }

    Ok(())
  }

  fn encode_item(
    &mut self,
    index: usize,
    item: &DataSet,
    bytes: &mut Vec<u8>,
  ) -> Result<(), P10Error> {
    self
      .path
      .add_sequence_item(index)
      .map_err(|details| self.error(details))?;

    self.encode_data_set(item, bytes)?;

    self.path.pop();

    Ok(())
  }

  fn encode_header(
    &self,
    tag: DataElementTag,
    vr: Option<ValueRepresentation>,
    length: ValueLength,
    bytes: &mut Vec<u8>,
  ) -> Result<(), P10Error> {
    let header = DataElementHeader { tag, vr, length };

    data_element_header_to_bytes(&header, self.transfer_syntax, bytes)
      .map_err(|details| self.error(details))
  }

  fn encode_delimiter(
    &self,
    tag: DataElementTag,
    bytes: &mut Vec<u8>,
  ) -> Result<(), P10Error> {
    self.encode_header(tag, None, ValueLength::ZERO, bytes)
  }

  /// Converts a byte count to a defined length, erroring if it can't be stored
  /// in a 32-bit length field.
  ///
  fn defined_length(&self, length: usize) -> Result<ValueLength, P10Error> {
    match u32::try_from(length) {
      Ok(length) if length != ValueLength::UNDEFINED_U32 => {
        Ok(ValueLength::Defined { length })
      }

      _ => Err(self.error(format!(
        "Length of {} bytes exceeds the 32-bit maximum",
        length
      ))),
    }
  }

  fn error(&self, details: String) -> P10Error {
    P10Error::DataInvalid {
      when: "Serializing data set".to_string(),
      details,
      path: Some(self.path.clone()),
      offset: None,
    }
  }
}

/// Collects the bytes of the main data set, compressing them with raw deflate
/// when the transfer syntax requires it.
///
struct BodyWriter {
  deflate_encoder: Option<DeflateEncoder<Vec<u8>>>,
}

impl BodyWriter {
  fn new(transfer_syntax: &TransferSyntax, config: &P10WriteConfig) -> Self {
    let deflate_encoder = transfer_syntax.is_deflated.then(|| {
      DeflateEncoder::new(
        vec![],
        Compression::new(config.zlib_compression_level.min(9)),
      )
    });

    Self { deflate_encoder }
  }

  /// Adds bytes to the body and returns any output bytes that are ready.
  ///
  fn write(&mut self, bytes: Vec<u8>) -> Result<Option<Rc<Vec<u8>>>, P10Error> {
    let output = match self.deflate_encoder.as_mut() {
      Some(encoder) => {
        encoder.write_all(&bytes).map_err(zlib_error)?;
        std::mem::take(encoder.get_mut())
      }

      None => bytes,
    };

    Ok((!output.is_empty()).then(|| Rc::new(output)))
  }

  /// Completes the body and returns its final output bytes.
  ///
  fn finish(self) -> Result<Option<Rc<Vec<u8>>>, P10Error> {
    match self.deflate_encoder {
      Some(encoder) => {
        let output = encoder.finish().map_err(zlib_error)?;
        Ok((!output.is_empty()).then(|| Rc::new(output)))
      }

      None => Ok(None),
    }
  }
}

fn zlib_error(e: std::io::Error) -> P10Error {
  P10Error::OtherError {
    error_type: "Zlib compression failed".to_string(),
    details: e.to_string(),
  }
}

/// Appends the bytes of a data element header in a transfer syntax. Item and
/// delimitation headers, and all headers in implicit VR transfer syntaxes, are
/// written without a VR.
///
fn data_element_header_to_bytes(
  header: &DataElementHeader,
  transfer_syntax: &TransferSyntax,
  bytes: &mut Vec<u8>,
) -> Result<(), String> {
  let endianness = transfer_syntax.endianness;

  push_u16(bytes, header.tag.group, endianness);
  push_u16(bytes, header.tag.element, endianness);

  let length = match header.length {
    ValueLength::Defined { length } => length,
    ValueLength::Undefined => ValueLength::UNDEFINED_U32,
  };

  let vr = match header.vr {
    Some(vr)
      if transfer_syntax.vr_serialization == VrSerialization::VrExplicit
        && !DataElementHeader::is_item_or_delimiter(header.tag) =>
    {
      vr
    }

    _ => {
      push_u32(bytes, length, endianness);
      return Ok(());
    }
  };

  bytes.extend_from_slice(&vr.to_bytes());

  match vr.length_field_size() {
    LengthFieldSize::U16 => {
      if length > 0xFFFF {
        return Err(format!(
          "Length of {} can't be stored for the '{}' VR",
          header.length, vr
        ));
      }

      push_u16(bytes, length as u16, endianness);
    }

    LengthFieldSize::U32 => {
      bytes.extend_from_slice(&[0, 0]);
      push_u32(bytes, length, endianness);
    }
  }

  Ok(())
}

fn push_u16(bytes: &mut Vec<u8>, value: u16, endianness: Endianness) {
  let mut buffer = [0u8; 2];

  match endianness {
    Endianness::LittleEndian => LittleEndian::write_u16(&mut buffer, value),
    Endianness::BigEndian => BigEndian::write_u16(&mut buffer, value),
  }

  bytes.extend_from_slice(&buffer);
}

fn push_u32(bytes: &mut Vec<u8>, value: u32, endianness: Endianness) {
  let mut buffer = [0u8; 4];

  match endianness {
    Endianness::LittleEndian => LittleEndian::write_u32(&mut buffer, value),
    Endianness::BigEndian => BigEndian::write_u32(&mut buffer, value),
  }

  bytes.extend_from_slice(&buffer);
}

#[cfg(test)]
mod tests {
  use super::*;

  fn to_bytes(data_set: &DataSet, config: &P10WriteConfig) -> Vec<u8> {
    let mut bytes = vec![];

    data_set_to_bytes(
      data_set,
      &mut |chunk: Rc<Vec<u8>>| {
        bytes.extend_from_slice(&chunk);
        Ok(())
      },
      config,
    )
    .unwrap();

    bytes
  }

  fn test_data_set(transfer_syntax: &TransferSyntax) -> DataSet {
    let mut item = DataSet::new();
    item
      .insert_string_value(&dictionary::PATIENT_ID, &["ABC"])
      .unwrap();

    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(
        &dictionary::TRANSFER_SYNTAX_UID,
        &[transfer_syntax.uid],
      )
      .unwrap();
    data_set
      .insert_string_value(&dictionary::PATIENT_NAME, &["Doe^John"])
      .unwrap();
    data_set.insert(
      dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag,
      DataElementValue::new_sequence(vec![item, DataSet::new()]),
    );
    data_set.insert(
      dictionary::ROWS.tag,
      DataElementValue::new_unsigned_short(&[258]).unwrap(),
    );

    data_set
  }

  #[test]
  fn file_meta_information_test() {
    let bytes = to_bytes(&DataSet::new(), &P10WriteConfig::default());

    assert_eq!(&bytes[0..128], &[0; 128]);
    assert_eq!(&bytes[128..132], b"DICM");
    assert_eq!(&bytes[132..140], b"\x02\0\0\0UL\x04\0");

    // The group length covers everything after the group length element
    let group_length = LittleEndian::read_u32(&bytes[140..144]) as usize;
    assert_eq!(bytes.len(), 144 + group_length);

    let data_set = crate::read_bytes(bytes).unwrap();
    assert_eq!(
      data_set.get_string(dictionary::TRANSFER_SYNTAX_UID.tag),
      Ok(transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN.uid)
    );
    assert_eq!(
      data_set.get_string(dictionary::IMPLEMENTATION_CLASS_UID.tag),
      Ok(uids::DCMKIT_IMPLEMENTATION_CLASS_UID)
    );
    assert_eq!(
      data_set
        .get_value(dictionary::FILE_META_INFORMATION_VERSION.tag)
        .unwrap()
        .bytes()
        .unwrap()
        .as_slice(),
      &[0, 1]
    );
  }

  #[test]
  fn sequence_length_encodings_test() {
    let data_set = test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    let defined = to_bytes(&data_set, &P10WriteConfig::default());
    let undefined = to_bytes(
      &data_set,
      &P10WriteConfig {
        sequence_length_encoding: SequenceLengthEncoding::Undefined,
        ..P10WriteConfig::default()
      },
    );

    // Each undefined length sequence and item adds an 8 byte delimiter
    assert_eq!(undefined.len(), defined.len() + 3 * 8);

    let defined = crate::read_bytes(defined).unwrap();
    let undefined = crate::read_bytes(undefined).unwrap();

    assert_eq!(defined, undefined);
    assert_eq!(
      defined.get_value(dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag),
      data_set.get_value(dictionary::OTHER_PATIENT_IDS_SEQUENCE.tag)
    );
  }

  #[test]
  fn padding_test() {
    let mut data_set = DataSet::new();
    data_set.insert(
      dictionary::PATIENT_ID.tag,
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::LongString,
        Rc::new(b"ABC".to_vec()),
      ),
    );
    data_set.insert(
      dictionary::SOP_INSTANCE_UID.tag,
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::UniqueIdentifier,
        Rc::new(b"1.2.3".to_vec()),
      ),
    );

    let bytes = to_bytes(&data_set, &P10WriteConfig::default());

    // Implicit VR little endian body: 8 byte header then the padded value
    let body = &bytes[bytes.len() - 26..];
    assert_eq!(&body[0..8], b"\x08\0\x18\0\x06\0\0\0");
    assert_eq!(&body[8..14], b"1.2.3\0");
    assert_eq!(&body[14..22], b"\x10\0\x20\0\x04\0\0\0");
    assert_eq!(&body[22..26], b"ABC ");
  }

  #[test]
  fn big_endian_test() {
    let data_set = test_data_set(&transfer_syntax::EXPLICIT_VR_BIG_ENDIAN);

    let bytes = to_bytes(&data_set, &P10WriteConfig::default());

    // Rows is the last data element in the body
    assert_eq!(
      &bytes[bytes.len() - 10..],
      &[0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x01, 0x02]
    );

    assert_eq!(
      crate::read_bytes(bytes)
        .unwrap()
        .get_int(dictionary::ROWS.tag),
      Ok(258)
    );
  }

  #[test]
  fn deflated_test() {
    let data_set =
      test_data_set(&transfer_syntax::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN);

    let bytes = to_bytes(&data_set, &P10WriteConfig::default());
    let read_data_set = crate::read_bytes(bytes).unwrap();

    for tag in data_set.tags() {
      assert_eq!(read_data_set.get_value(tag), data_set.get_value(tag));
    }
  }

  #[test]
  fn value_too_long_test() {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(
        &dictionary::TRANSFER_SYNTAX_UID,
        &[transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid],
      )
      .unwrap();
    data_set.insert(
      dictionary::PATIENT_ID.tag,
      DataElementValue::new_binary_unchecked(
        ValueRepresentation::LongString,
        Rc::new(vec![b'A'; 0x10000]),
      ),
    );

    let result = data_set_to_bytes(
      &data_set,
      &mut |_| Ok(()),
      &P10WriteConfig::default(),
    );

    assert!(matches!(
      result,
      Err(P10Error::DataInvalid { path: Some(path), .. })
        if path == DataSetPath::new_with_data_element(dictionary::PATIENT_ID.tag)
    ));
  }

  #[test]
  fn transfer_syntax_not_supported_test() {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(&dictionary::TRANSFER_SYNTAX_UID, &["1.2.3.4"])
      .unwrap();

    assert_eq!(
      data_set_to_bytes(&data_set, &mut |_| Ok(()), &P10WriteConfig::default()),
      Err(P10Error::TransferSyntaxNotSupported {
        transfer_syntax_uid: "1.2.3.4".to_string()
      })
    );
  }

  #[test]
  fn write_context_matches_data_set_to_bytes_test() {
    let data_set = test_data_set(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    let config = P10WriteConfig {
      sequence_length_encoding: SequenceLengthEncoding::Undefined,
      ..P10WriteConfig::default()
    };

    let mut context = P10WriteContext::new(config.clone());
    data_set_to_parts(&data_set, &mut |part| context.write_part(part))
      .unwrap();

    assert!(context.is_ended());

    let streamed: Vec<u8> = context
      .read_bytes()
      .iter()
      .flat_map(|chunk| chunk.iter().copied())
      .collect();

    assert_eq!(streamed, to_bytes(&data_set, &config));
  }

  #[test]
  fn write_context_part_stream_invalid_test() {
    let mut context = P10WriteContext::default();

    assert!(matches!(
      context.write_part(&P10Part::SequenceItemStart),
      Err(P10Error::PartStreamInvalid { .. })
    ));
  }
}
