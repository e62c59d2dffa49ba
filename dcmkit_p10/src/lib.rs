//! Reads and writes the DICOM Part 10 (P10) binary format used to store and
//! transmit DICOM-based medical imaging information.
//!
//! Reading is incremental: bytes are written to a [`P10ReadContext`] as they
//! become available and [`P10Part`]s are read back out. Parts are usually fed
//! into a [`P10PartListener`], either directly or through a [`P10Pipeline`] of
//! transforms.

pub mod cancellation_token;
pub mod data_set_builder;
pub mod p10_error;
pub mod p10_part;
pub mod p10_pipeline;
pub mod p10_read;
pub mod p10_warning;
pub mod p10_write;
pub mod transforms;
pub mod uids;

mod internal;

use std::fs::File;
use std::io::Read;
use std::rc::Rc;

use dcmkit_core::DataSet;

pub use cancellation_token::CancellationToken;
pub use data_set_builder::DataSetBuilder;
pub use p10_error::P10Error;
pub use p10_part::P10Part;
pub use p10_pipeline::{P10PartListener, P10Pipeline, P10Transform};
pub use p10_read::{P10ReadConfig, P10ReadContext, ReadState};
pub use p10_warning::{P10Warning, P10WarningKind};
pub use p10_write::{
  data_set_to_parts, P10WriteConfig, P10WriteContext, SequenceLengthEncoding,
};
pub use transforms::p10_chunk_transform::P10ChunkTransform;
pub use transforms::p10_filter_transform::P10FilterTransform;
pub use transforms::p10_insert_transform::P10InsertTransform;

/// Returns whether a file contains DICOM P10 data by checking for the presence
/// of the DICOM P10 header and the start of a File Meta Information Group
/// Length data element.
///
pub fn is_valid_file(filename: &str) -> bool {
  match File::open(filename) {
    Ok(mut file) => {
      let mut buffer = vec![0u8; 138];
      match file.read_exact(&mut buffer) {
        Ok(_) => is_valid_bytes(&buffer),
        Err(_) => false,
      }
    }
    Err(_) => false,
  }
}

/// Returns whether the given bytes contain DICOM P10 data by checking for the
/// presence of the DICOM P10 header and the start of a File Meta Information
/// Group Length data element.
///
pub fn is_valid_bytes(bytes: &[u8]) -> bool {
  if bytes.len() < 138 {
    return false;
  }

  bytes[128..138] == *b"DICM\x02\0\0\0UL".as_slice()
}

/// Reads DICOM P10 data from a file into an in-memory data set.
///
pub fn read_file(filename: &str) -> Result<DataSet, P10Error> {
  match read_file_returning_builder_on_error(filename) {
    Ok(data_set) => Ok(data_set),
    Err((e, _)) => Err(e),
  }
}

/// Reads DICOM P10 data from a file into an in-memory data set. In the case of
/// an error occurring during the read both the error and the data set builder
/// at the time of the error are returned.
///
/// This allows for the data that was successfully read prior to the error to be
/// converted into a partially-complete data set.
///
pub fn read_file_returning_builder_on_error(
  filename: &str,
) -> Result<DataSet, (P10Error, Box<DataSetBuilder>)> {
  match File::open(filename) {
    Ok(mut file) => read_stream(&mut file),
    Err(e) => Err((
      P10Error::FileError {
        when: "Opening file".to_string(),
        details: e.to_string(),
      },
      Box::new(DataSetBuilder::new()),
    )),
  }
}

/// Reads DICOM P10 data from a read stream into an in-memory data set. This
/// will attempt to consume all data available in the read stream.
///
pub fn read_stream(
  stream: &mut dyn std::io::Read,
) -> Result<DataSet, (P10Error, Box<DataSetBuilder>)> {
  let mut context = P10ReadContext::new();
  let mut builder = Box::new(DataSetBuilder::new());

  loop {
    let parts = match read_parts_from_stream(stream, &mut context) {
      Ok(parts) => parts,
      Err(e) => return Err((e, builder)),
    };

    for part in parts {
      if let Err(e) = builder.add_part(&part) {
        return Err((e, builder));
      }
    }

    if let Ok(final_data_set) = builder.final_data_set() {
      return Ok(final_data_set);
    }
  }
}

/// Reads the next DICOM P10 parts from a read stream. This repeatedly reads
/// bytes from the read stream in 256 KiB chunks until at least one DICOM P10
/// part is made available by the read context or an error occurs.
///
pub fn read_parts_from_stream(
  stream: &mut dyn std::io::Read,
  context: &mut P10ReadContext,
) -> Result<Vec<P10Part>, P10Error> {
  loop {
    match context.read_parts() {
      Ok(parts) => {
        if !parts.is_empty() {
          return Ok(parts);
        }
      }

      // If the read context needs more data then read bytes from the stream,
      // write them to the read context, and try again
      Err(P10Error::DataRequired { .. }) => {
        let mut buffer = vec![0u8; 256 * 1024];
        match stream.read(&mut buffer) {
          Ok(0) => context.write_bytes(vec![], true)?,

          Ok(bytes_count) => {
            buffer.truncate(bytes_count);
            context.write_bytes(buffer, false)?;
          }

          Err(e) => {
            return Err(P10Error::FileError {
              when: "Reading from stream".to_string(),
              details: e.to_string(),
            })
          }
        }
      }

      Err(e) => return Err(e),
    }
  }
}

/// Reads DICOM P10 data from an in-memory vector of bytes into an in-memory
/// data set.
///
pub fn read_bytes(
  bytes: Vec<u8>,
) -> Result<DataSet, (P10Error, Box<DataSetBuilder>)> {
  read_bytes_with_warnings(bytes, &P10ReadConfig::default())
    .map(|(data_set, _)| data_set)
}

/// Reads DICOM P10 data from an in-memory vector of bytes using the given read
/// config, and returns the resulting data set along with the non-fatal
/// warnings that were raised while reading it.
///
#[allow(clippy::type_complexity)]
pub fn read_bytes_with_warnings(
  bytes: Vec<u8>,
  config: &P10ReadConfig,
) -> Result<(DataSet, Vec<P10Warning>), (P10Error, Box<DataSetBuilder>)> {
  let mut context = P10ReadContext::new();
  context.set_config(config);

  let mut builder = Box::new(DataSetBuilder::new());

  if let Err(e) = context.write_bytes(bytes, true) {
    return Err((e, builder));
  }

  loop {
    let parts = match context.read_parts() {
      Ok(parts) => parts,
      Err(e) => return Err((e, builder)),
    };

    for part in parts.iter() {
      if let Err(e) = builder.add_part(part) {
        return Err((e, builder));
      }
    }

    if let Ok(final_data_set) = builder.final_data_set() {
      return Ok((final_data_set, context.warnings().to_vec()));
    }
  }
}

/// Writes a data set to a DICOM P10 file. This will overwrite any existing file
/// with the given name.
///
pub fn write_file(
  filename: &str,
  data_set: &DataSet,
  config: Option<P10WriteConfig>,
) -> Result<(), P10Error> {
  match File::create(filename) {
    Ok(mut file) => write_stream(&mut file, data_set, config),
    Err(e) => Err(P10Error::FileError {
      when: "Opening file".to_string(),
      details: e.to_string(),
    }),
  }
}

/// Writes a data set as DICOM P10 bytes directly to a write stream.
///
pub fn write_stream(
  stream: &mut dyn std::io::Write,
  data_set: &DataSet,
  config: Option<P10WriteConfig>,
) -> Result<(), P10Error> {
  let mut bytes_callback = |p10_bytes: Rc<Vec<u8>>| -> Result<(), P10Error> {
    stream
      .write_all(&p10_bytes)
      .map_err(|e| P10Error::FileError {
        when: "Writing DICOM P10 data to stream".to_string(),
        details: e.to_string(),
      })
  };

  let config = config.unwrap_or_default();

  p10_write::data_set_to_bytes(data_set, &mut bytes_callback, &config)?;

  stream.flush().map_err(|e| P10Error::FileError {
    when: "Writing DICOM P10 data to stream".to_string(),
    details: e.to_string(),
  })
}

/// Writes a data set to an in-memory vector of DICOM P10 bytes.
///
pub fn write_bytes(
  data_set: &DataSet,
  config: Option<P10WriteConfig>,
) -> Result<Vec<u8>, P10Error> {
  let mut bytes = vec![];

  p10_write::data_set_to_bytes(
    data_set,
    &mut |p10_bytes: Rc<Vec<u8>>| {
      bytes.extend_from_slice(&p10_bytes);
      Ok(())
    },
    &config.unwrap_or_default(),
  )?;

  Ok(bytes)
}

/// Writes the specified DICOM P10 parts to an output stream using the given
/// write context. Returns whether a [`P10Part::End`] part was present in the
/// parts.
///
pub fn write_parts_to_stream(
  parts: &[P10Part],
  stream: &mut dyn std::io::Write,
  context: &mut P10WriteContext,
) -> Result<bool, P10Error> {
  for part in parts.iter() {
    context.write_part(part)?;
  }

  for bytes in context.read_bytes() {
    stream.write_all(&bytes).map_err(|e| P10Error::FileError {
      when: "Writing to output stream".to_string(),
      details: e.to_string(),
    })?;
  }

  if context.is_ended() {
    stream.flush().map_err(|e| P10Error::FileError {
      when: "Writing to output stream".to_string(),
      details: e.to_string(),
    })?;
  }

  Ok(context.is_ended())
}

/// Adds functions to [`DataSet`] for converting to and from the DICOM P10
/// format.
///
pub trait DataSetP10Extensions
where
  Self: Sized,
{
  /// Reads DICOM P10 data from a file into an in-memory data set.
  ///
  fn read_p10_file(filename: &str) -> Result<Self, P10Error>;

  /// Reads DICOM P10 data from a read stream into an in-memory data set. This
  /// will attempt to consume all data available in the read stream.
  ///
  fn read_p10_stream(stream: &mut dyn std::io::Read) -> Result<Self, P10Error>;

  /// Reads DICOM P10 data from an in-memory vector of bytes.
  ///
  fn read_p10_bytes(bytes: Vec<u8>) -> Result<Self, P10Error>;

  /// Writes a data set to a DICOM P10 file. This will overwrite any existing
  /// file with the given name.
  ///
  fn write_p10_file(
    &self,
    filename: &str,
    config: Option<P10WriteConfig>,
  ) -> Result<(), P10Error>;

  /// Writes a data set as DICOM P10 bytes directly to a write stream.
  ///
  fn write_p10_stream(
    &self,
    stream: &mut dyn std::io::Write,
    config: Option<P10WriteConfig>,
  ) -> Result<(), P10Error>;

  /// Converts a data set to DICOM P10 parts that are returned via the passed
  /// callback.
  ///
  fn to_p10_parts<E>(
    &self,
    part_callback: &mut impl FnMut(&P10Part) -> Result<(), E>,
  ) -> Result<(), E>;

  /// Converts a data set to DICOM P10 bytes that are returned via the passed
  /// callback.
  ///
  fn to_p10_bytes(
    &self,
    bytes_callback: &mut impl FnMut(Rc<Vec<u8>>) -> Result<(), P10Error>,
    config: &P10WriteConfig,
  ) -> Result<(), P10Error>;
}

impl DataSetP10Extensions for DataSet {
  fn read_p10_file(filename: &str) -> Result<Self, P10Error> {
    read_file(filename)
  }

  fn read_p10_stream(stream: &mut dyn std::io::Read) -> Result<Self, P10Error> {
    read_stream(stream).map_err(|e| e.0)
  }

  fn read_p10_bytes(bytes: Vec<u8>) -> Result<Self, P10Error> {
    read_bytes(bytes).map_err(|e| e.0)
  }

  fn write_p10_file(
    &self,
    filename: &str,
    config: Option<P10WriteConfig>,
  ) -> Result<(), P10Error> {
    write_file(filename, self, config)
  }

  fn write_p10_stream(
    &self,
    stream: &mut dyn std::io::Write,
    config: Option<P10WriteConfig>,
  ) -> Result<(), P10Error> {
    write_stream(stream, self, config)
  }

  fn to_p10_parts<E>(
    &self,
    part_callback: &mut impl FnMut(&P10Part) -> Result<(), E>,
  ) -> Result<(), E> {
    p10_write::data_set_to_parts(self, part_callback)
  }

  fn to_p10_bytes(
    &self,
    bytes_callback: &mut impl FnMut(Rc<Vec<u8>>) -> Result<(), P10Error>,
    config: &P10WriteConfig,
  ) -> Result<(), P10Error> {
    p10_write::data_set_to_bytes(self, bytes_callback, config)
  }
}

#[cfg(test)]
mod tests {
  use dcmkit_core::{dictionary, transfer_syntax};

  use super::*;

  fn test_data_set() -> DataSet {
    let mut data_set = DataSet::new();
    data_set
      .insert_string_value(
        &dictionary::TRANSFER_SYNTAX_UID,
        &[transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN.uid],
      )
      .unwrap();
    data_set
      .insert_string_value(&dictionary::PATIENT_ID, &["12345"])
      .unwrap();

    data_set
  }

  #[test]
  fn is_valid_bytes_test() {
    let bytes = write_bytes(&test_data_set(), None).unwrap();

    assert!(is_valid_bytes(&bytes));
    assert!(!is_valid_bytes(&bytes[0..137]));
    assert!(!is_valid_bytes(&[0; 200]));
  }

  #[test]
  fn read_stream_test() {
    let data_set = test_data_set();
    let bytes = write_bytes(&data_set, None).unwrap();

    let mut cursor = std::io::Cursor::new(bytes.clone());
    let read_data_set = DataSet::read_p10_stream(&mut cursor).unwrap();

    assert_eq!(read_data_set, DataSet::read_p10_bytes(bytes).unwrap());
    assert_eq!(
      read_data_set.get_string(dictionary::PATIENT_ID.tag),
      Ok("12345")
    );
  }

  #[test]
  fn read_bytes_returns_builder_on_error_test() {
    let mut bytes = write_bytes(&test_data_set(), None).unwrap();

    // Truncate part way through the PatientID value
    bytes.truncate(bytes.len() - 2);

    let (error, mut builder) = read_bytes(bytes).unwrap_err();
    assert!(matches!(error, P10Error::DataEndedUnexpectedly { .. }));

    builder.force_end();
    assert!(builder.final_data_set().is_ok());
  }

  #[test]
  fn write_parts_to_stream_test() {
    let data_set = test_data_set();

    let mut parts = vec![];
    data_set
      .to_p10_parts::<()>(&mut |part| {
        parts.push(part.clone());
        Ok(())
      })
      .unwrap();

    let mut context = P10WriteContext::default();
    let mut output = vec![];

    let (head, tail) = parts.split_at(3);
    assert!(!write_parts_to_stream(head, &mut output, &mut context).unwrap());
    assert!(write_parts_to_stream(tail, &mut output, &mut context).unwrap());

    assert_eq!(
      DataSet::read_p10_bytes(output).unwrap(),
      DataSet::read_p10_bytes(write_bytes(&data_set, None).unwrap()).unwrap()
    );
  }
}
