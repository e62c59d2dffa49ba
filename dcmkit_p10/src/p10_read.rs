//! Converts incoming chunks of binary DICOM P10 data into DICOM P10 parts.
//!
//! This conversion is done in a streaming fashion, where chunks of incoming
//! raw binary data are added to a read context, and DICOM P10 parts are then
//! progressively made available as their data comes in. See the [`P10Part`]
//! type for details on the different parts that are emitted.
//!
//! If DICOM P10 data already exists fully in memory it can be added to a new
//! read context as one complete and final chunk, and then have its DICOM parts
//! read out, i.e. there is no requirement to use a read context in a streaming
//! fashion, and in either scenario a series of DICOM P10 parts will be made
//! available by the read context.
//!
//! Additional configuration for controlling memory usage when reading DICOM
//! P10 data is available via [`P10ReadConfig`].

use std::rc::Rc;

use byteorder::ByteOrder;

use dcmkit_core::{
  data_element_value, dictionary,
  transfer_syntax::{self, Endianness, VrSerialization},
  value_representation::LengthFieldSize,
  DataElementTag, DataElementValue, DataSet, DataSetPath, TransferSyntax,
  ValueRepresentation,
};

use crate::internal::byte_stream::{ByteStream, ByteStreamError};
use crate::internal::data_element_header::DataElementHeader;
use crate::internal::p10_location::{self, P10Location};
use crate::internal::value_length::ValueLength;
use crate::{CancellationToken, P10Error, P10Part, P10Warning, P10WarningKind};

/// Configuration used when reading DICOM P10 data.
///
#[derive(Clone, Copy, Debug)]
pub struct P10ReadConfig {
  /// The maximum size in bytes of a DICOM P10 part emitted by a read context.
  /// This can be used to control memory usage during a streaming read, and must
  /// be a multiple of 8.
  ///
  /// The maximum part size is relevant to two specific parts:
  ///
  /// 1. [`P10Part::FileMetaInformation`], where it sets the maximum size in
  ///    bytes of the File Meta Information. If this size is exceeded an error
  ///    will occur when reading the DICOM P10 data.
  ///
  /// 2. [`P10Part::DataElementValueBytes`], where it sets the maximum size in
  ///    bytes of its `data`, with the exception of string data, see
  ///    [`P10ReadConfig::max_string_size`]. Data element values with a length
  ///    exceeding this size will be split across multiple
  ///    [`P10Part::DataElementValueBytes`] parts.
  ///
  /// By default there is no limit on the maximum part size, that is, each data
  /// element will have its value bytes emitted in exactly one
  /// [`P10Part::DataElementValueBytes`] part.
  ///
  pub max_part_size: u32,

  /// The maximum size in bytes of string values that can be read by a read
  /// context. String values are always read whole so that their multiplicity
  /// can be checked, and values larger than this size result in an error.
  ///
  /// The maximum string size can be set larger than the maximum part size to
  /// allow more leniency in regard to the size of string data that can be
  /// parsed, while keeping part sizes smaller for other common cases such as
  /// image data.
  ///
  /// By default there is no limit on the maximum string size.
  ///
  pub max_string_size: u32,

  /// The maximum sequence depth that can be read by a read context. This can be
  /// used to control memory usage during a streaming read, as well as to reject
  /// malformed or malicious DICOM P10 data.
  ///
  /// By default the maximum sequence depth is set to ten thousand, i.e. no
  /// meaningful maximum is enforced.
  ///
  pub max_sequence_depth: u32,

  /// The transfer syntax used to read the main data set when the File Meta
  /// Information doesn't contain a *'(0002,0010) TransferSyntaxUID'* data
  /// element.
  ///
  /// The default is `None`, which makes a missing transfer syntax an error.
  ///
  pub default_transfer_syntax: Option<&'static TransferSyntax>,
}

impl Default for P10ReadConfig {
  fn default() -> Self {
    Self {
      max_part_size: 0xFFFFFFFE,
      max_string_size: 0xFFFFFFFE,
      max_sequence_depth: 10_000,
      default_transfer_syntax: None,
    }
  }
}

/// The framing state of a read context, which advances as the File Preamble,
/// "DICM" prefix, File Meta Information, and main data set are read.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReadState {
  Start,
  PreambleSkipped,
  MagicVerified,
  MetadataParsing,
  MetadataComplete,
  BodyParsing,
  Done,
}

/// A read context holds the current state of an in-progress DICOM P10 read. Raw
/// DICOM P10 data is added to a read context with [`Self::write_bytes`], and
/// DICOM P10 parts are then read out with [`Self::read_parts`].
///
pub struct P10ReadContext {
  config: P10ReadConfig,
  stream: ByteStream,
  state: ReadState,
  next_action: NextAction,
  transfer_syntax: &'static TransferSyntax,
  path: DataSetPath,
  location: P10Location,
  pixel_data_item_count: usize,
  warnings: Vec<P10Warning>,
  cancellation_token: Option<CancellationToken>,
}

/// The next action specifies what will be attempted to be read next from a read
/// context by `read_parts`.
///
#[allow(clippy::enum_variant_names)]
enum NextAction {
  ReadFilePreamble,
  ReadDicmPrefix {
    preamble: Box<[u8; 128]>,
  },
  ReadFileMetaInformation {
    starts_at: u64,
    ends_at: Option<u64>,
    size: u64,
    data_set: DataSet,
  },
  ReadDataElementHeader,
  ReadDataElementValueBytes {
    tag: DataElementTag,
    vr: ValueRepresentation,
    length: u32,
    bytes_remaining: u32,
    emit_parts: bool,
  },
  ReadPixelDataItem {
    vr: ValueRepresentation,
  },
  Done,
}

impl P10ReadContext {
  /// Creates a new read context for reading DICOM P10 data.
  ///
  pub fn new() -> P10ReadContext {
    let config = P10ReadConfig::default();

    P10ReadContext {
      config,
      stream: ByteStream::new(max_read_size(&config)),
      state: ReadState::Start,
      next_action: NextAction::ReadFilePreamble,
      transfer_syntax: initial_transfer_syntax(&config),
      path: DataSetPath::new(),
      location: P10Location::new(),
      pixel_data_item_count: 0,
      warnings: vec![],
      cancellation_token: None,
    }
  }

  /// Updates the config for a read context. This should be done prior to
  /// reading any DICOM P10 parts from the read context.
  ///
  pub fn set_config(&mut self, config: &P10ReadConfig) {
    // Round max part size to a multiple of 8
    let max_part_size = { config.max_part_size / 8 } * 8;
    let max_string_size = std::cmp::max(config.max_string_size, max_part_size);

    self.config = P10ReadConfig {
      max_part_size,
      max_string_size,
      ..*config
    };

    self.stream.set_max_read_size(max_read_size(&self.config));
    self.transfer_syntax = initial_transfer_syntax(&self.config);
  }

  /// Sets the token that retires this read context when it is waiting on more
  /// data. Once the token is cancelled, calls to [`Self::read_parts()`] that
  /// would return [`P10Error::DataRequired`] return [`P10Error::Cancelled`]
  /// instead.
  ///
  pub fn set_cancellation_token(&mut self, token: CancellationToken) {
    self.cancellation_token = Some(token);
  }

  /// Returns the framing state of the read context.
  ///
  pub fn state(&self) -> ReadState {
    self.state
  }

  /// Returns the transfer syntax for a P10 read context. This is the configured
  /// default transfer syntax until it is read from the File Meta Information.
  ///
  pub fn transfer_syntax(&self) -> &'static TransferSyntax {
    self.transfer_syntax
  }

  /// Returns the non-fatal problems found in the data read so far.
  ///
  pub fn warnings(&self) -> &[P10Warning] {
    &self.warnings
  }

  /// Writes raw DICOM P10 bytes to a read context that will be parsed into
  /// DICOM P10 parts by subsequent calls to [`Self::read_parts()`]. If `done`
  /// is true this indicates the end of the incoming DICOM P10 data to be
  /// parsed, after which any further calls to this function will error.
  ///
  pub fn write_bytes(
    &mut self,
    bytes: Vec<u8>,
    done: bool,
  ) -> Result<(), P10Error> {
    self.stream.write(bytes, done).map_err(|e| {
      self.map_byte_stream_error(e, "Writing data to DICOM P10 read context")
    })
  }

  /// Reads the next DICOM P10 parts from a read context. On success, zero or
  /// more parts are returned and the function can be called again to read
  /// further parts. Once [`P10Part::End`] has been returned, subsequent calls
  /// return no parts.
  ///
  /// On error, a value of [`P10Error::DataRequired`] means the read context
  /// does not have enough data to return the next part, i.e. further calls to
  /// [`Self::write_bytes`] are required before the next part is able to be
  /// read. Reading then resumes at the same position.
  ///
  pub fn read_parts(&mut self) -> Result<Vec<P10Part>, P10Error> {
    match self.read_next_parts() {
      Err(P10Error::DataRequired { when }) if self.is_cancelled() => {
        tracing::debug!("Read cancelled while waiting for data");

        Err(P10Error::Cancelled { when })
      }

      result => result,
    }
  }

  fn is_cancelled(&self) -> bool {
    self
      .cancellation_token
      .as_ref()
      .is_some_and(|token| token.is_cancelled())
  }

  fn read_next_parts(&mut self) -> Result<Vec<P10Part>, P10Error> {
    match self.next_action {
      NextAction::ReadFilePreamble => self.read_file_preamble(),

      NextAction::ReadDicmPrefix { .. } => {
        self.read_file_preamble_and_dicm_prefix_part()
      }

      NextAction::ReadFileMetaInformation { .. } => {
        self.read_file_meta_information_part()
      }

      NextAction::ReadDataElementHeader => {
        if self.state == ReadState::MetadataComplete {
          self.set_state(ReadState::BodyParsing);
        }

        // If there is a delimiter part for a defined-length sequence or item
        // that needs to be emitted then return that as the next part
        if let Some(part) = self.next_delimiter_part() {
          return Ok(vec![part]);
        }

        // Detect the end of the DICOM data. Data that ends inside a sequence
        // or item is truncated, even when it ends on a data element boundary.
        let is_fully_consumed =
          self.stream.is_fully_consumed().map_err(|e| {
            self.map_byte_stream_error(e, "Reading data element header")
          })?;

        if is_fully_consumed {
          if !self.location.is_at_root() {
            return Err(P10Error::DataEndedUnexpectedly {
              when: "Reading data element header".to_string(),
              path: self.path.clone(),
              offset: self.stream.bytes_read(),
            });
          }

          self.next_action = NextAction::Done;
          self.set_state(ReadState::Done);

          Ok(vec![P10Part::End])
        } else {
          self.read_data_element_header_part()
        }
      }

      NextAction::ReadDataElementValueBytes {
        tag,
        vr,
        length,
        bytes_remaining,
        emit_parts,
      } => self.read_data_element_value_bytes_part(
        tag,
        vr,
        length,
        bytes_remaining,
        emit_parts,
      ),

      NextAction::ReadPixelDataItem { vr } => {
        self.read_pixel_data_item_part(vr)
      }

      NextAction::Done => Ok(vec![]),
    }
  }

  fn set_state(&mut self, state: ReadState) {
    tracing::debug!("DICOM P10 read state: {:?} -> {:?}", self.state, state);

    self.state = state;
  }

  /// Checks whether there is a delimiter part that needs to be emitted, and if
  /// so then returns it.
  ///
  fn next_delimiter_part(&mut self) -> Option<P10Part> {
    let part = self.location.next_delimiter_part(self.stream.bytes_read())?;

    self.path.pop();

    Some(part)
  }

  /// Reads the 128-byte File Preamble. Its content isn't interpreted.
  ///
  fn read_file_preamble(&mut self) -> Result<Vec<P10Part>, P10Error> {
    let data = self
      .stream
      .read(128)
      .map_err(|e| self.map_byte_stream_error(e, "Reading File Preamble"))?;

    let mut preamble = Box::new([0u8; 128]);
    preamble.copy_from_slice(&data);

    self.next_action = NextAction::ReadDicmPrefix { preamble };
    self.set_state(ReadState::PreambleSkipped);

    Ok(vec![])
  }

  /// Reads the 4-byte "DICM" prefix that follows the File Preamble. Data that
  /// doesn't have this prefix is rejected.
  ///
  fn read_file_preamble_and_dicm_prefix_part(
    &mut self,
  ) -> Result<Vec<P10Part>, P10Error> {
    let prefix = self
      .stream
      .peek(4)
      .map_err(|e| self.map_byte_stream_error(e, "Reading 'DICM' prefix"))?;

    if prefix != b"DICM" {
      return Err(P10Error::DicmPrefixMissing { received: prefix });
    }

    self
      .stream
      .read(4)
      .map_err(|e| self.map_byte_stream_error(e, "Reading 'DICM' prefix"))?;

    let preamble = match std::mem::replace(
      &mut self.next_action,
      NextAction::ReadFileMetaInformation {
        starts_at: self.stream.bytes_read(),
        ends_at: None,
        size: 0,
        data_set: DataSet::new(),
      },
    ) {
      NextAction::ReadDicmPrefix { preamble } => preamble,
      _ => unreachable!(),
    };

    self.set_state(ReadState::MagicVerified);

    Ok(vec![P10Part::FilePreambleAndDICMPrefix { preamble }])
  }

  /// Reads the File Meta Information into a data set and returns the relevant
  /// P10 part once complete. If there is a *'(0002,0000) File Meta Information
  /// Group Length'* data element present then it is used to specify where the
  /// File Meta Information ends. If it is not present then data elements are
  /// read until one with a group other than 0x0002 is encountered.
  ///
  fn read_file_meta_information_part(
    &mut self,
  ) -> Result<Vec<P10Part>, P10Error> {
    if self.state == ReadState::MagicVerified {
      self.set_state(ReadState::MetadataParsing);
    }

    if let NextAction::ReadFileMetaInformation {
      starts_at,
      ends_at,
      size,
      data_set: fmi_data_set,
    } = &mut self.next_action
    {
      loop {
        // Check if the end of the File Meta Information has been reached
        match ends_at {
          Some(ends_at) => {
            if self.stream.bytes_read() >= *ends_at {
              break;
            }
          }

          None => {
            let is_fully_consumed =
              self.stream.is_fully_consumed().map_err(|e| {
                map_byte_stream_error(
                  e,
                  "Reading File Meta Information",
                  self.stream.bytes_read(),
                  &self.path,
                )
              })?;

            if is_fully_consumed {
              break;
            }
          }
        }

        // Each data element is read in full or not at all, so that reading
        // can resume from its start when more data is required
        self.stream.mark();

        let element = read_file_meta_information_data_element(
          &mut self.stream,
          ends_at.is_some(),
          *size,
          self.config.max_part_size,
        );

        let (tag, value, element_size) = match element {
          Ok(Some(element)) => {
            self.stream.clear_mark();
            element
          }

          // A data element outside group 0x0002 ends the File Meta
          // Information when its length isn't known
          Ok(None) => {
            self.stream.reset();
            break;
          }

          Err(e) => {
            self.stream.reset();
            return Err(e);
          }
        };

        *size += element_size;

        // If this data element specifies the File Meta Information group's
        // length then use it to calculate its end offset
        if tag == dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag {
          if ends_at.is_none() && fmi_data_set.is_empty() {
            match value.get_int() {
              Ok(i) => *ends_at = Some(*starts_at + 12 + i as u64),
              Err(e) => {
                return Err(P10Error::DataInvalid {
                  when: "Reading File Meta Information".to_string(),
                  details: format!("Group length is invalid: {}", e),
                  path: Some(DataSetPath::new_with_data_element(tag)),
                  offset: Some(self.stream.bytes_read()),
                })
              }
            }
          }

          continue;
        }

        fmi_data_set.insert(tag, value);
      }

      // Resolve the transfer syntax of the main data set
      self.transfer_syntax =
        match fmi_data_set.get_value(dictionary::TRANSFER_SYNTAX_UID.tag) {
          Ok(value) => {
            let uid = value.get_string().map_err(|e| P10Error::DataInvalid {
              when: "Reading File Meta Information".to_string(),
              details: format!("Transfer syntax UID is invalid: {}", e),
              path: Some(DataSetPath::new_with_data_element(
                dictionary::TRANSFER_SYNTAX_UID.tag,
              )),
              offset: Some(self.stream.bytes_read()),
            })?;

            TransferSyntax::from_uid(uid).map_err(|_| {
              P10Error::TransferSyntaxNotSupported {
                transfer_syntax_uid: uid.to_string(),
              }
            })?
          }

          Err(_) => match self.config.default_transfer_syntax {
            Some(ts) => {
              tracing::debug!(
                "No transfer syntax in File Meta Information, using '{}'",
                ts.name
              );

              ts
            }

            None => {
              return Err(P10Error::DataInvalid {
                when: "Reading File Meta Information".to_string(),
                details: "Transfer syntax UID is missing".to_string(),
                path: Some(DataSetPath::new_with_data_element(
                  dictionary::TRANSFER_SYNTAX_UID.tag,
                )),
                offset: Some(self.stream.bytes_read()),
              })
            }
          },
        };

      tracing::debug!("Transfer syntax is '{}'", self.transfer_syntax.name);

      // If the transfer syntax is deflated then all data following the File
      // Meta Information needs to passed through zlib inflate before reading
      if self.transfer_syntax.is_deflated {
        self.stream.start_zlib_inflate().map_err(|_| {
          P10Error::DataInvalid {
            when: "Starting zlib decompression for deflated transfer syntax"
              .to_string(),
            details: "Zlib data is invalid".to_string(),
            path: None,
            offset: Some(self.stream.bytes_read()),
          }
        })?;
      }

      let part = P10Part::FileMetaInformation {
        data_set: std::mem::take(fmi_data_set),
      };

      self.next_action = NextAction::ReadDataElementHeader;
      self.set_state(ReadState::MetadataComplete);

      Ok(vec![part])
    } else {
      unreachable!();
    }
  }

  fn read_data_element_header_part(
    &mut self,
  ) -> Result<Vec<P10Part>, P10Error> {
    let header = self.read_data_element_header()?;

    tracing::trace!("Read data element header {}", header);

    match (header.tag, header.vr, header.length) {
      // If this is the start of a new sequence then add it to the location
      (tag, Some(ValueRepresentation::Sequence), _)
      | (tag, Some(ValueRepresentation::Unknown), ValueLength::Undefined) => {
        let part = P10Part::SequenceStart {
          tag,
          vr: ValueRepresentation::Sequence,
        };

        let ends_at = match header.length {
          ValueLength::Defined { length } => {
            Some(self.stream.bytes_read() + length as u64)
          }
          ValueLength::Undefined => None,
        };

        // When the VR is unknown and the length is undefined, as per DICOM
        // Correction Proposal CP-246 the 'Implicit VR Little Endian' transfer
        // syntax must be used to read the sequence's data.
        // Ref: https://dicom.nema.org/dicom/cp/cp246_01.pdf.
        let is_implicit_vr = header.vr == Some(ValueRepresentation::Unknown);

        // Check that the maximum sequence depth hasn't been reached
        if self.location.sequence_depth()
          >= self.config.max_sequence_depth as usize
        {
          return Err(P10Error::MaximumExceeded {
            details: "Maximum allowed sequence depth reached".to_string(),
            path: self.path.clone(),
            offset: self.stream.bytes_read(),
          });
        }

        self
          .location
          .add_sequence(tag, is_implicit_vr, ends_at)
          .map_err(|details| self.data_invalid_error(details))?;

        self
          .path
          .add_data_element(tag)
          .map_err(|details| self.data_invalid_error(details))?;

        Ok(vec![part])
      }

      // If this is the start of a new sequence item then add it to the location
      (tag, None, _) if tag == dictionary::ITEM.tag => {
        let ends_at = match header.length {
          ValueLength::Defined { length } => {
            Some(self.stream.bytes_read() + length as u64)
          }
          ValueLength::Undefined => None,
        };

        let overruns_sequence = self
          .location
          .add_item(ends_at)
          .map_err(|details| self.data_invalid_error(details))?;

        let item_count = self.location.sequence_item_count().unwrap_or(1);
        self
          .path
          .add_sequence_item(item_count - 1)
          .map_err(|details| self.data_invalid_error(details))?;

        if overruns_sequence {
          self.add_warning(P10WarningKind::ItemOutsideSequenceLength);
        }

        Ok(vec![P10Part::SequenceItemStart])
      }

      // If this is an encapsulated pixel data sequence then add it to the
      // current location and update the next action to read its items
      (tag, Some(vr), ValueLength::Undefined)
        if tag == dictionary::PIXEL_DATA.tag
          && (vr == ValueRepresentation::OtherByteString
            || vr == ValueRepresentation::OtherWordString) =>
      {
        self
          .location
          .add_sequence(tag, false, None)
          .map_err(|details| self.data_invalid_error(details))?;

        self
          .path
          .add_data_element(tag)
          .map_err(|details| self.data_invalid_error(details))?;

        self.pixel_data_item_count = 0;
        self.next_action = NextAction::ReadPixelDataItem { vr };

        Ok(vec![P10Part::SequenceStart { tag, vr }])
      }

      // If this is a sequence delimitation item then remove the current
      // sequence from the current location
      (tag, None, ValueLength::ZERO)
        if tag == dictionary::SEQUENCE_DELIMITATION_ITEM.tag =>
      {
        let parts = match self.location.end_sequence() {
          Ok(()) => {
            self.path.pop();

            vec![P10Part::SequenceDelimiter]
          }

          // A sequence delimiter outside of a sequence is ignored. Such rogue
          // delimiters have been observed in DICOM P10 data in the wild.
          Err(_) => vec![],
        };

        Ok(parts)
      }

      // If this is an item delimitation item then remove the latest item from
      // the location
      (tag, None, ValueLength::ZERO)
        if tag == dictionary::ITEM_DELIMITATION_ITEM.tag =>
      {
        let overran_sequence = self
          .location
          .end_item(self.stream.bytes_read())
          .map_err(|details| self.data_invalid_error(details))?;

        if overran_sequence {
          self.add_warning(P10WarningKind::ItemOutsideSequenceLength);
        }

        self.path.pop();

        Ok(vec![P10Part::SequenceItemDelimiter])
      }

      (tag, Some(vr), ValueLength::Undefined) => {
        let private_creator = self.location.private_creator_for_tag(tag);

        Err(self.data_invalid_error(format!(
          "Undefined length is not allowed for '{}' with VR {}",
          dictionary::tag_with_name(tag, private_creator),
          vr
        )))
      }

      // For all other cases this is a standard data element that needs to have
      // its value bytes read
      (tag, Some(vr), ValueLength::Defined { length }) => {
        let materialized_value_required =
          is_materialized_value_required(tag, vr);

        // If this data element needs to be fully materialized then check it
        // doesn't exceed the max string size
        if materialized_value_required && length > self.config.max_string_size {
          return Err(P10Error::MaximumExceeded {
            details: format!(
              "Value for '{}' with VR {} and length {} bytes exceeds the \
              maximum allowed string size of {} bytes",
              dictionary::tag_with_name(tag, None),
              vr,
              length,
              self.config.max_string_size
            ),
            path: self.path.clone(),
            offset: self.stream.bytes_read(),
          });
        }

        // Swallow the '(FFFC,FFFC) Data Set Trailing Padding' data element. No
        // parts for it are emitted. Ref: PS3.10 7.2.
        // Also swallow group length tags that have an element of 0x0000.
        // Ref: PS3.5 7.2.
        let emit_parts = tag != dictionary::DATA_SET_TRAILING_PADDING.tag
          && tag.element != 0x0000;

        self
          .path
          .add_data_element(tag)
          .map_err(|details| self.data_invalid_error(details))?;

        // Values that aren't materialized have their multiplicity checked now,
        // as their bytes may be split across several parts
        if emit_parts && !materialized_value_required {
          let value_count =
            data_element_value::binary_value_count(vr, length as usize);
          self.check_multiplicity(tag, vr, value_count);
        }

        let parts = if emit_parts {
          vec![P10Part::DataElementHeader { tag, vr, length }]
        } else {
          vec![]
        };

        self.next_action = NextAction::ReadDataElementValueBytes {
          tag,
          vr,
          length,
          bytes_remaining: length,
          emit_parts,
        };

        Ok(parts)
      }

      (_, _, _) => Err(
        self.data_invalid_error(format!("Invalid data element '{}'", header)),
      ),
    }
  }

  /// Reads a data element header. Depending on the transfer syntax and the
  /// specific VR (for explicit VR transfer syntaxes), this reads either 8 or 12
  /// bytes in total.
  ///
  fn read_data_element_header(
    &mut self,
  ) -> Result<DataElementHeader, P10Error> {
    let transfer_syntax = self.active_transfer_syntax();

    // Peek the 4 bytes containing the tag
    let data = self.stream.peek(4).map_err(|e| {
      self.map_byte_stream_error(e, "Reading data element header")
    })?;

    let tag = match transfer_syntax.endianness {
      Endianness::LittleEndian => DataElementTag::new(
        byteorder::LittleEndian::read_u16(&data[0..2]),
        byteorder::LittleEndian::read_u16(&data[2..4]),
      ),

      Endianness::BigEndian => DataElementTag::new(
        byteorder::BigEndian::read_u16(&data[0..2]),
        byteorder::BigEndian::read_u16(&data[2..4]),
      ),
    };

    // The item and delimitation tags always use implicit VRs
    let vr_serialization = if DataElementHeader::is_item_or_delimiter(tag) {
      VrSerialization::VrImplicit
    } else {
      transfer_syntax.vr_serialization
    };

    match vr_serialization {
      VrSerialization::VrExplicit => self.read_explicit_vr_and_length(tag),
      VrSerialization::VrImplicit => self.read_implicit_vr_and_length(tag),
    }
  }

  /// Returns the transfer syntax that should be used to decode the current
  /// data. This will always be the transfer syntax specified in the File Meta
  /// Information, except in the case of 'Implicit VR Little Endian' being
  /// forced by an explicit VR of `UN` (Unknown) that has an undefined length.
  ///
  /// Ref: DICOM Correction Proposal CP-246.
  ///
  fn active_transfer_syntax(&self) -> &'static TransferSyntax {
    if self.location.is_implicit_vr_forced() {
      &transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN
    } else {
      self.transfer_syntax
    }
  }

  /// Reads the value length following a data element tag when the transfer
  /// syntax uses implicit VRs. The VR comes from the dictionary and never from
  /// the data itself.
  ///
  fn read_implicit_vr_and_length(
    &mut self,
    tag: DataElementTag,
  ) -> Result<DataElementHeader, P10Error> {
    let data = self.stream.read(8).map_err(|e| {
      self.map_byte_stream_error(e, "Reading data element header")
    })?;

    let value_length = match self.active_transfer_syntax().endianness {
      Endianness::LittleEndian => {
        byteorder::LittleEndian::read_u32(&data[4..8])
      }
      Endianness::BigEndian => byteorder::BigEndian::read_u32(&data[4..8]),
    };

    // Items and delimiters don't have a VR
    let vr = if DataElementHeader::is_item_or_delimiter(tag) {
      None
    } else {
      Some(self.infer_vr_for_tag(tag))
    };

    Ok(DataElementHeader {
      tag,
      vr,
      length: ValueLength::new(value_length),
    })
  }

  /// Looks up the VR of a tag in the dictionary. Tags that aren't found are
  /// given the `UN` VR and a warning is recorded.
  ///
  fn infer_vr_for_tag(&mut self, tag: DataElementTag) -> ValueRepresentation {
    match self.location.infer_vr_for_tag(tag) {
      Ok(vr) => vr,

      Err(()) => {
        self.add_warning_for_tag(tag, P10WarningKind::UnknownTag { tag });

        ValueRepresentation::Unknown
      }
    }
  }

  /// Reads the explicit VR and value length following a data element tag when
  /// the transfer syntax uses explicit VRs.
  ///
  fn read_explicit_vr_and_length(
    &mut self,
    tag: DataElementTag,
  ) -> Result<DataElementHeader, P10Error> {
    // Peek and validate the explicit VR
    let data = self.stream.peek(6).map_err(|e| {
      self.map_byte_stream_error(e, "Reading explicit VR data element header")
    })?;

    let vr_bytes = &data[4..6];

    let vr = match ValueRepresentation::from_bytes(vr_bytes) {
      Ok(vr) => vr,

      // If the explicit VR is two spaces then treat it as implicit VR and
      // look up the VR in the dictionary. Such data has been observed in the
      // wild.
      Err(()) if vr_bytes == [0x20, 0x20] => self.infer_vr_for_tag(tag),

      Err(()) => {
        return Err(self.data_invalid_error(format!(
          "Unrecognized VR {:?} for tag '{}'",
          vr_bytes,
          dictionary::tag_with_name(tag, None)
        )))
      }
    };

    // The total size of the header in bytes varies by VR
    let header_size = match vr.length_field_size() {
      LengthFieldSize::U32 => 12,
      LengthFieldSize::U16 => 8,
    };

    let data = self.stream.read(header_size).map_err(|e| {
      self.map_byte_stream_error(e, "Reading explicit VR data element header")
    })?;

    let endianness = self.active_transfer_syntax().endianness;

    let length = match (header_size, endianness) {
      (12, Endianness::LittleEndian) => {
        byteorder::LittleEndian::read_u32(&data[8..12])
      }
      (12, Endianness::BigEndian) => {
        byteorder::BigEndian::read_u32(&data[8..12])
      }
      (_, Endianness::LittleEndian) => {
        byteorder::LittleEndian::read_u16(&data[6..8]) as u32
      }
      (_, Endianness::BigEndian) => {
        byteorder::BigEndian::read_u16(&data[6..8]) as u32
      }
    };

    Ok(DataElementHeader {
      tag,
      vr: Some(vr),
      length: ValueLength::new(length),
    })
  }

  fn read_data_element_value_bytes_part(
    &mut self,
    tag: DataElementTag,
    vr: ValueRepresentation,
    value_length: u32,
    bytes_remaining: u32,
    emit_parts: bool,
  ) -> Result<Vec<P10Part>, P10Error> {
    let materialized_value_required =
      tag != dictionary::ITEM.tag && is_materialized_value_required(tag, vr);

    // If this data element value is being fully materialized then it needs to
    // be read as a whole, so use its full length as the number of bytes to
    // read. Otherwise, read up to the max part size.
    let bytes_to_read = if materialized_value_required {
      value_length
    } else {
      std::cmp::min(bytes_remaining, self.config.max_part_size)
    };

    let mut data = self.stream.read(bytes_to_read as usize).map_err(|e| {
      let when = format!(
        "Reading {} data element value bytes, VR: {}",
        bytes_to_read, vr
      );

      self.map_byte_stream_error(e, &when)
    })?;

    // Data element values are always returned in little endian, so if this is
    // a big endian transfer syntax then convert to little endian
    if self.active_transfer_syntax().endianness == Endianness::BigEndian {
      vr.swap_endianness(&mut data);
    }

    let bytes_remaining = bytes_remaining - bytes_to_read;

    if materialized_value_required {
      // This only does something when this is a clarifying data element
      self.location.add_clarifying_data_element(tag, vr, &data);

      if emit_parts {
        let value_count = data_element_value::value_count(vr, &data);
        self.check_multiplicity(tag, vr, value_count);
      }
    }

    let parts = if emit_parts {
      vec![P10Part::DataElementValueBytes {
        vr,
        data: Rc::new(data),
        bytes_remaining,
      }]
    } else {
      vec![]
    };

    self.next_action = if bytes_remaining == 0 {
      self.path.pop();

      // This data element is complete, so the next action is either to read
      // the next pixel data item if currently reading pixel data items, or to
      // read the header for the next data element
      if tag == dictionary::ITEM.tag {
        NextAction::ReadPixelDataItem { vr }
      } else {
        NextAction::ReadDataElementHeader
      }
    } else {
      NextAction::ReadDataElementValueBytes {
        tag,
        vr,
        length: value_length,
        bytes_remaining,
        emit_parts,
      }
    };

    Ok(parts)
  }

  fn read_pixel_data_item_part(
    &mut self,
    vr: ValueRepresentation,
  ) -> Result<Vec<P10Part>, P10Error> {
    let header = self.read_data_element_header()?;

    match header {
      // Pixel data items must have no VR and a defined length
      DataElementHeader {
        tag,
        vr: None,
        length: ValueLength::Defined { length },
      } if tag == dictionary::ITEM.tag => {
        self.next_action = NextAction::ReadDataElementValueBytes {
          tag: dictionary::ITEM.tag,
          vr,
          length,
          bytes_remaining: length,
          emit_parts: true,
        };

        self
          .path
          .add_sequence_item(self.pixel_data_item_count)
          .map_err(|details| self.data_invalid_error(details))?;

        self.pixel_data_item_count += 1;

        Ok(vec![P10Part::PixelDataItem { length }])
      }

      DataElementHeader {
        tag,
        vr: None,
        length: ValueLength::ZERO,
      } if tag == dictionary::SEQUENCE_DELIMITATION_ITEM.tag => {
        self
          .location
          .end_sequence()
          .map_err(|details| self.data_invalid_error(details))?;

        self.path.pop();

        self.next_action = NextAction::ReadDataElementHeader;

        Ok(vec![P10Part::SequenceDelimiter])
      }

      _ => Err(P10Error::DataInvalid {
        when: "Reading encapsulated pixel data item".to_string(),
        details: format!("Invalid data element '{}'", header),
        path: Some(self.path.clone()),
        offset: Some(self.stream.bytes_read()),
      }),
    }
  }

  /// Records a warning if the number of values in a data element isn't
  /// allowed by its multiplicity in the dictionary. Empty values, and values
  /// whose VR isn't one the dictionary allows for the tag, aren't checked.
  ///
  fn check_multiplicity(
    &mut self,
    tag: DataElementTag,
    vr: ValueRepresentation,
    value_count: usize,
  ) {
    if value_count == 0
      || vr == ValueRepresentation::Unknown
      || vr == ValueRepresentation::Sequence
    {
      return;
    }

    let Ok(entry) = self.location.find_entry(tag) else {
      return;
    };

    if entry.vrs.contains(&vr)
      && !entry.multiplicity.contains(value_count as u32)
    {
      self.add_warning(P10WarningKind::MultiplicityMismatch {
        tag,
        value_count,
        multiplicity: entry.multiplicity,
      });
    }
  }

  /// Records a warning at the current path.
  ///
  fn add_warning(&mut self, kind: P10WarningKind) {
    let warning = P10Warning {
      kind,
      path: self.path.clone(),
      offset: self.stream.bytes_read(),
    };

    tracing::warn!("{}", warning);

    self.warnings.push(warning);
  }

  /// Records a warning for a data element whose tag hasn't been added to the
  /// current path yet.
  ///
  fn add_warning_for_tag(
    &mut self,
    tag: DataElementTag,
    kind: P10WarningKind,
  ) {
    let mut path = self.path.clone();
    if path.add_data_element(tag).is_err() {
      path = self.path.clone();
    }

    let warning = P10Warning {
      kind,
      path,
      offset: self.stream.bytes_read(),
    };

    tracing::warn!("{}", warning);

    self.warnings.push(warning);
  }

  fn data_invalid_error(&self, details: String) -> P10Error {
    P10Error::DataInvalid {
      when: "Reading data element header".to_string(),
      details,
      path: Some(self.path.clone()),
      offset: Some(self.stream.bytes_read()),
    }
  }

  /// Takes an error from the byte stream and maps it through to a P10 error.
  ///
  fn map_byte_stream_error(
    &self,
    error: ByteStreamError,
    when: &str,
  ) -> P10Error {
    map_byte_stream_error(error, when, self.stream.bytes_read(), &self.path)
  }
}

impl Default for P10ReadContext {
  fn default() -> Self {
    Self::new()
  }
}

/// Returns the largest single read a read context makes from its byte stream,
/// which is a whole materialized value or File Meta Information data element.
///
fn max_read_size(config: &P10ReadConfig) -> usize {
  (std::cmp::max(config.max_part_size, config.max_string_size) as usize)
    .saturating_add(12)
}

/// Returns the transfer syntax a read context reports before the File Meta
/// Information has been read.
///
fn initial_transfer_syntax(config: &P10ReadConfig) -> &'static TransferSyntax {
  config
    .default_transfer_syntax
    .unwrap_or(&transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN)
}

/// Returns whether a data element's value must be read in full before it is
/// emitted. This is the case for string values, so their multiplicity can be
/// checked, and for clarifying data elements that are needed to read later
/// data elements.
///
fn is_materialized_value_required(
  tag: DataElementTag,
  vr: ValueRepresentation,
) -> bool {
  vr.is_string() || p10_location::is_clarifying_data_element(tag)
}

/// Reads a single File Meta Information data element, which is always encoded
/// as explicit VR little endian. Returns `None` if the data element isn't in
/// group 0x0002 and the File Meta Information length isn't known, as this
/// marks its end.
///
/// On error the stream is left part way through the data element, and the
/// caller is responsible for resetting it.
///
#[allow(clippy::type_complexity)]
fn read_file_meta_information_data_element(
  stream: &mut ByteStream,
  has_known_length: bool,
  fmi_size: u64,
  max_part_size: u32,
) -> Result<Option<(DataElementTag, DataElementValue, u64)>, P10Error> {
  let when = "Reading File Meta Information";
  let offset = stream.bytes_read();
  let root_path = DataSetPath::new();

  let group = stream
    .read_u16(Endianness::LittleEndian)
    .map_err(|e| map_byte_stream_error(e, when, offset, &root_path))?;
  let element = stream
    .read_u16(Endianness::LittleEndian)
    .map_err(|e| map_byte_stream_error(e, when, offset, &root_path))?;

  let tag = DataElementTag::new(group, element);

  if tag.group != 0x0002 {
    if !has_known_length {
      return Ok(None);
    }

    return Err(P10Error::DataInvalid {
      when: when.to_string(),
      details: "Data element in File Meta Information does not have the \
        group 0x0002"
        .to_string(),
      path: Some(DataSetPath::new_with_data_element(tag)),
      offset: Some(offset),
    });
  }

  let path = DataSetPath::new_with_data_element(tag);

  let vr_bytes = stream
    .read(2)
    .map_err(|e| map_byte_stream_error(e, when, offset, &path))?;

  let vr = ValueRepresentation::from_bytes(&vr_bytes).map_err(|_| {
    P10Error::DataInvalid {
      when: when.to_string(),
      details: "Data element has invalid VR".to_string(),
      path: Some(path.clone()),
      offset: Some(offset),
    }
  })?;

  // Sequences aren't allowed in the File Meta Information
  if vr == ValueRepresentation::Sequence {
    return Err(P10Error::DataInvalid {
      when: when.to_string(),
      details: "Data element in File Meta Information is a sequence"
        .to_string(),
      path: Some(path),
      offset: Some(offset),
    });
  }

  let length = match vr.length_field_size() {
    LengthFieldSize::U16 => stream
      .read_u16(Endianness::LittleEndian)
      .map(u32::from),

    LengthFieldSize::U32 => stream
      .read(2)
      .and_then(|_| stream.read_u32(Endianness::LittleEndian)),
  }
  .map_err(|e| map_byte_stream_error(e, when, offset, &path))?;

  let element_size = stream.bytes_read() - offset + length as u64;

  // Check that the File Meta Information remains under the max part size
  if fmi_size + element_size > max_part_size as u64 {
    return Err(P10Error::MaximumExceeded {
      details: format!(
        "File Meta Information exceeds the max part size of {} bytes",
        max_part_size
      ),
      path,
      offset,
    });
  }

  let data = stream
    .read(length as usize)
    .map_err(|e| map_byte_stream_error(e, when, offset, &path))?;

  let value = DataElementValue::new_binary_unchecked(vr, Rc::new(data));

  Ok(Some((tag, value, element_size)))
}

/// Takes an error from the byte stream and maps it through to a P10 error.
///
fn map_byte_stream_error(
  error: ByteStreamError,
  when: &str,
  offset: u64,
  path: &DataSetPath,
) -> P10Error {
  match error {
    ByteStreamError::DataRequired => P10Error::DataRequired {
      when: when.to_string(),
    },

    ByteStreamError::DataEnd => P10Error::DataEndedUnexpectedly {
      when: when.to_string(),
      path: path.clone(),
      offset,
    },

    ByteStreamError::ReadOversized => P10Error::MaximumExceeded {
      details: format!("{} exceeded the maximum read size", when),
      path: path.clone(),
      offset,
    },

    ByteStreamError::ZlibDataError => P10Error::DataInvalid {
      when: when.to_string(),
      details: "Zlib data is invalid".to_string(),
      path: Some(path.clone()),
      offset: Some(offset),
    },

    ByteStreamError::WriteAfterCompletion => P10Error::WriteAfterCompletion,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn p10_header_with_uid(transfer_syntax_uid: &str) -> Vec<u8> {
    let mut uid = transfer_syntax_uid.as_bytes().to_vec();
    if uid.len() % 2 == 1 {
      uid.push(0);
    }

    let mut bytes = vec![0; 128];
    bytes.extend_from_slice(b"DICM");

    bytes.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, b'U', b'L', 4, 0]);
    bytes.extend_from_slice(&(uid.len() as u32 + 8).to_le_bytes());

    bytes.extend_from_slice(&[0x02, 0x00, 0x10, 0x00, b'U', b'I']);
    bytes.extend_from_slice(&(uid.len() as u16).to_le_bytes());
    bytes.extend_from_slice(&uid);

    bytes
  }

  fn p10_header(transfer_syntax: &TransferSyntax) -> Vec<u8> {
    p10_header_with_uid(transfer_syntax.uid)
  }

  fn read_all_parts(context: &mut P10ReadContext) -> Vec<P10Part> {
    let mut parts = vec![];

    loop {
      let new_parts = context.read_parts().unwrap();
      let is_done = new_parts.last() == Some(&P10Part::End);

      parts.extend(new_parts);

      if is_done {
        return parts;
      }
    }
  }

  #[test]
  fn state_transitions_test() {
    let mut bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    bytes.extend_from_slice(&[0x10, 0x00, 0x40, 0x00, b'C', b'S', 2, 0]);
    bytes.extend_from_slice(b"M ");

    let mut context = P10ReadContext::new();
    assert_eq!(context.state(), ReadState::Start);

    context.write_bytes(bytes, true).unwrap();

    assert_eq!(context.read_parts().unwrap(), vec![]);
    assert_eq!(context.state(), ReadState::PreambleSkipped);

    assert!(matches!(
      context.read_parts().unwrap().as_slice(),
      [P10Part::FilePreambleAndDICMPrefix { .. }]
    ));
    assert_eq!(context.state(), ReadState::MagicVerified);

    assert!(matches!(
      context.read_parts().unwrap().as_slice(),
      [P10Part::FileMetaInformation { .. }]
    ));
    assert_eq!(context.state(), ReadState::MetadataComplete);
    assert_eq!(
      context.transfer_syntax(),
      &transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN
    );

    assert_eq!(
      context.read_parts().unwrap(),
      vec![P10Part::DataElementHeader {
        tag: dictionary::PATIENT_SEX.tag,
        vr: ValueRepresentation::CodeString,
        length: 2,
      }]
    );
    assert_eq!(context.state(), ReadState::BodyParsing);

    assert_eq!(
      read_all_parts(&mut context),
      vec![
        P10Part::DataElementValueBytes {
          vr: ValueRepresentation::CodeString,
          data: Rc::new(b"M ".to_vec()),
          bytes_remaining: 0,
        },
        P10Part::End
      ]
    );
    assert_eq!(context.state(), ReadState::Done);
    assert_eq!(context.read_parts(), Ok(vec![]));
  }

  #[test]
  fn dicm_prefix_missing_test() {
    let mut bytes = vec![0; 128];
    bytes.extend_from_slice(b"DICN");

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    context.read_parts().unwrap();

    assert_eq!(
      context.read_parts(),
      Err(P10Error::DicmPrefixMissing {
        received: b"DICN".to_vec()
      })
    );
  }

  #[test]
  fn transfer_syntax_not_supported_test() {
    let bytes = p10_header_with_uid("1.2.3.4");

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    context.read_parts().unwrap();
    context.read_parts().unwrap();

    assert_eq!(
      context.read_parts(),
      Err(P10Error::TransferSyntaxNotSupported {
        transfer_syntax_uid: "1.2.3.4".to_string()
      })
    );
  }

  #[test]
  fn transfer_syntax_missing_test() {
    let mut bytes = vec![0; 128];
    bytes.extend_from_slice(b"DICM");

    // (0002,0001) FileMetaInformationVersion and (0002,0002)
    // MediaStorageSOPClassUID, with no transfer syntax
    bytes.extend_from_slice(&[0x02, 0x00, 0x01, 0x00, b'O', b'B', 0, 0]);
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&[0, 1]);
    bytes.extend_from_slice(&[0x02, 0x00, 0x02, 0x00, b'U', b'I', 2, 0]);
    bytes.extend_from_slice(b"1\0");

    // (0010,0040) PatientSex, implicit VR
    bytes.extend_from_slice(&[0x10, 0x00, 0x40, 0x00, 2, 0, 0, 0]);
    bytes.extend_from_slice(b"M ");

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes.clone(), true).unwrap();

    context.read_parts().unwrap();
    context.read_parts().unwrap();

    assert_eq!(
      context.read_parts(),
      Err(P10Error::DataInvalid {
        when: "Reading File Meta Information".to_string(),
        details: "Transfer syntax UID is missing".to_string(),
        path: Some(DataSetPath::new_with_data_element(
          dictionary::TRANSFER_SYNTAX_UID.tag
        )),
        offset: Some(156),
      })
    );

    // A configured default transfer syntax is used instead
    let mut context = P10ReadContext::new();
    context.set_config(&P10ReadConfig {
      default_transfer_syntax: Some(
        &transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN,
      ),
      ..P10ReadConfig::default()
    });
    context.write_bytes(bytes, true).unwrap();

    let parts = read_all_parts(&mut context);

    assert_eq!(
      parts[2],
      P10Part::DataElementHeader {
        tag: dictionary::PATIENT_SEX.tag,
        vr: ValueRepresentation::CodeString,
        length: 2,
      }
    );
  }

  #[test]
  fn implicit_vr_from_dictionary_test() {
    let mut bytes = p10_header(&transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN);

    // (0028,0010) Rows, with bytes that would be read as an explicit VR of
    // "OB" if the VR were taken from the data
    bytes.extend_from_slice(&[0x28, 0x00, 0x10, 0x00, 2, 0, 0, 0, b'O', b'B']);

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    let parts = read_all_parts(&mut context);

    assert_eq!(
      parts[2],
      P10Part::DataElementHeader {
        tag: dictionary::ROWS.tag,
        vr: ValueRepresentation::UnsignedShort,
        length: 2,
      }
    );
    assert!(context.warnings().is_empty());
  }

  #[test]
  fn implicit_vr_acquisition_tags_test() {
    let mut bytes = p10_header(&transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN);

    // (0018,0050) SliceThickness and (0018,1210) ConvolutionKernel
    bytes.extend_from_slice(&[0x18, 0x00, 0x50, 0x00, 4, 0, 0, 0]);
    bytes.extend_from_slice(b"1.25");
    bytes.extend_from_slice(&[0x18, 0x00, 0x10, 0x12, 6, 0, 0, 0]);
    bytes.extend_from_slice(b"B30f\\D");

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    let parts = read_all_parts(&mut context);

    assert_eq!(
      parts[2],
      P10Part::DataElementHeader {
        tag: DataElementTag::new(0x0018, 0x0050),
        vr: ValueRepresentation::DecimalString,
        length: 4,
      }
    );
    assert_eq!(
      parts[4],
      P10Part::DataElementHeader {
        tag: DataElementTag::new(0x0018, 0x1210),
        vr: ValueRepresentation::ShortString,
        length: 6,
      }
    );
    assert!(context.warnings().is_empty());
  }

  #[test]
  fn implicit_vr_unknown_tag_test() {
    let mut bytes = p10_header(&transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN);
    bytes.extend_from_slice(&[0x09, 0x00, 0x10, 0x10, 2, 0, 0, 0, 1, 2]);

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    let parts = read_all_parts(&mut context);
    let tag = DataElementTag::new(0x0009, 0x1010);

    assert_eq!(
      parts[2],
      P10Part::DataElementHeader {
        tag,
        vr: ValueRepresentation::Unknown,
        length: 2,
      }
    );

    assert_eq!(
      context.warnings(),
      &[P10Warning {
        kind: P10WarningKind::UnknownTag { tag },
        path: DataSetPath::new_with_data_element(tag),
        offset: 178,
      }]
    );
  }

  #[test]
  fn undefined_length_not_allowed_test() {
    let mut bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    bytes.extend_from_slice(&[0x10, 0x00, 0x10, 0x00, b'U', b'T', 0, 0]);
    bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    for _ in 0..3 {
      context.read_parts().unwrap();
    }

    assert!(matches!(
      context.read_parts(),
      Err(P10Error::DataInvalid { .. })
    ));
  }

  #[test]
  fn multiplicity_mismatch_test() {
    let mut bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    // (0010,0040) PatientSex has a multiplicity of 1
    bytes.extend_from_slice(&[0x10, 0x00, 0x40, 0x00, b'C', b'S', 4, 0]);
    bytes.extend_from_slice(b"M\\F ");

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    read_all_parts(&mut context);

    assert_eq!(context.warnings().len(), 1);
    assert_eq!(
      context.warnings()[0].kind,
      P10WarningKind::MultiplicityMismatch {
        tag: dictionary::PATIENT_SEX.tag,
        value_count: 2,
        multiplicity: dcmkit_core::ValueMultiplicity::ONE,
      }
    );
  }

  #[test]
  fn data_required_and_cancelled_test() {
    let bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    let mut context = P10ReadContext::new();
    let token = CancellationToken::new();
    context.set_cancellation_token(token.clone());

    context.write_bytes(bytes[0..100].to_vec(), false).unwrap();
    assert!(matches!(
      context.read_parts(),
      Err(P10Error::DataRequired { .. })
    ));

    context.write_bytes(bytes[100..].to_vec(), false).unwrap();
    context.read_parts().unwrap();
    context.read_parts().unwrap();
    context.read_parts().unwrap();

    token.cancel();

    assert!(matches!(
      context.read_parts(),
      Err(P10Error::Cancelled { .. })
    ));
  }

  #[test]
  fn file_meta_information_resumes_test() {
    let bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    let mut context = P10ReadContext::new();

    // Stop part way through the transfer syntax data element
    context.write_bytes(bytes[0..150].to_vec(), false).unwrap();
    context.read_parts().unwrap();
    context.read_parts().unwrap();

    assert!(matches!(
      context.read_parts(),
      Err(P10Error::DataRequired { .. })
    ));
    assert_eq!(context.state(), ReadState::MetadataParsing);

    context.write_bytes(bytes[150..].to_vec(), true).unwrap();

    match context.read_parts().unwrap().as_slice() {
      [P10Part::FileMetaInformation { data_set }] => {
        assert_eq!(
          data_set.get_string(dictionary::TRANSFER_SYNTAX_UID.tag),
          Ok(transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid)
        );
      }
      parts => panic!("Unexpected parts: {:?}", parts),
    }
  }

  #[test]
  fn defined_length_sequence_test() {
    let mut bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    // (0008,1140) ReferencedImageSequence with one defined-length item
    // holding (0008,1150) ReferencedSOPClassUID
    bytes.extend_from_slice(&[0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0, 0]);
    bytes.extend_from_slice(&18u32.to_le_bytes());
    bytes.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0]);
    bytes.extend_from_slice(&10u32.to_le_bytes());
    bytes.extend_from_slice(&[0x08, 0x00, 0x50, 0x11, b'U', b'I', 2, 0]);
    bytes.extend_from_slice(b"1\0");

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    let parts = read_all_parts(&mut context);

    assert_eq!(
      parts[2..],
      [
        P10Part::SequenceStart {
          tag: dictionary::REFERENCED_IMAGE_SEQUENCE.tag,
          vr: ValueRepresentation::Sequence,
        },
        P10Part::SequenceItemStart,
        P10Part::DataElementHeader {
          tag: DataElementTag::new(0x0008, 0x1150),
          vr: ValueRepresentation::UniqueIdentifier,
          length: 2,
        },
        P10Part::DataElementValueBytes {
          vr: ValueRepresentation::UniqueIdentifier,
          data: Rc::new(b"1\0".to_vec()),
          bytes_remaining: 0,
        },
        P10Part::SequenceItemDelimiter,
        P10Part::SequenceDelimiter,
        P10Part::End,
      ]
    );
  }

  #[test]
  fn truncated_in_defined_length_sequence_test() {
    let mut bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    // A sequence of 100 bytes holding an item of 90 bytes, where the data
    // ends after the item's first data element
    bytes.extend_from_slice(&[0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0, 0]);
    bytes.extend_from_slice(&100u32.to_le_bytes());
    bytes.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0]);
    bytes.extend_from_slice(&90u32.to_le_bytes());
    bytes.extend_from_slice(&[0x08, 0x00, 0x50, 0x11, b'U', b'I', 2, 0]);
    bytes.extend_from_slice(b"1\0");

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    let error = loop {
      match context.read_parts() {
        Ok(parts) => assert!(!parts.contains(&P10Part::End)),
        Err(e) => break e,
      }
    };

    assert_eq!(
      error,
      P10Error::DataEndedUnexpectedly {
        when: "Reading data element header".to_string(),
        path: DataSetPath::from_string("00081140/[0]").unwrap(),
        offset: 202,
      }
    );
  }

  #[test]
  fn truncated_in_undefined_length_sequence_test() {
    let mut bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    bytes.extend_from_slice(&[0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0, 0]);
    bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    let error = loop {
      match context.read_parts() {
        Ok(parts) => assert!(!parts.contains(&P10Part::End)),
        Err(e) => break e,
      }
    };

    assert!(matches!(error, P10Error::DataEndedUnexpectedly { .. }));
  }

  #[test]
  fn item_outside_sequence_length_test() {
    let mut bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);

    // A sequence with a defined length of 8 bytes that holds an item of 10
    // bytes
    bytes.extend_from_slice(&[0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0, 0]);
    bytes.extend_from_slice(&8u32.to_le_bytes());
    bytes.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0]);
    bytes.extend_from_slice(&10u32.to_le_bytes());
    bytes.extend_from_slice(&[0x08, 0x00, 0x50, 0x11, b'U', b'I', 2, 0]);
    bytes.extend_from_slice(b"1\0");

    let mut context = P10ReadContext::new();
    context.write_bytes(bytes, true).unwrap();

    let parts = read_all_parts(&mut context);

    assert!(parts.contains(&P10Part::DataElementValueBytes {
      vr: ValueRepresentation::UniqueIdentifier,
      data: Rc::new(b"1\0".to_vec()),
      bytes_remaining: 0,
    }));
    assert_eq!(
      context.warnings()[0].kind,
      P10WarningKind::ItemOutsideSequenceLength
    );
  }

  #[test]
  fn max_part_size_test() {
    let mut bytes = p10_header(&transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN);
    bytes.extend_from_slice(&[0x09, 0x00, 0x10, 0x10, b'O', b'B', 0, 0]);
    bytes.extend_from_slice(&100u32.to_le_bytes());
    bytes.extend_from_slice(&[7; 100]);

    // The File Meta Information is 40 bytes, so this is the smallest allowed
    // max part size
    let mut context = P10ReadContext::new();
    context.set_config(&P10ReadConfig {
      max_part_size: 40,
      max_string_size: 64,
      ..P10ReadConfig::default()
    });
    context.write_bytes(bytes, true).unwrap();

    let parts = read_all_parts(&mut context);

    let remaining: Vec<u32> = parts
      .iter()
      .filter_map(|part| match part {
        P10Part::DataElementValueBytes {
          bytes_remaining, ..
        } => Some(*bytes_remaining),
        _ => None,
      })
      .collect();

    assert_eq!(remaining, vec![60, 20, 0]);
  }
}
