use std::collections::VecDeque;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use dcmkit_core::transfer_syntax::Endianness;

/// A cursor over incoming binary data. Chunks of any size are written to the
/// stream and can then be read and peeked as if they were one contiguous
/// buffer.
///
/// A read past the bytes written so far fails with
/// [`ByteStreamError::DataRequired`] until the final chunk has been written,
/// after which it fails with [`ByteStreamError::DataEnd`].
///
/// A mark can be placed at the current position and later returned to, which
/// lets a multi-step read be retried from the same position once more data
/// arrives.
///
/// Incoming bytes can optionally be passed through zlib inflate prior to being
/// made available for reading.
///
#[derive(Debug)]
pub struct ByteStream {
  bytes_queue: VecDeque<QueueItem>,
  bytes_queue_size: u64,
  bytes_read: u64,
  max_read_size: usize,
  is_writing_finished: bool,
  mark: Option<Mark>,
  zlib_stream: Option<flate2::Decompress>,
  zlib_input_queue: VecDeque<QueueItem>,
  zlib_inflate_complete: bool,
}

#[derive(Debug)]
struct QueueItem {
  data: Vec<u8>,
  bytes_read: usize,
}

/// A saved read position along with every byte consumed since it was saved.
#[derive(Debug)]
struct Mark {
  bytes_read: u64,
  consumed: Vec<u8>,
}

#[derive(Debug, PartialEq)]
pub enum ByteStreamError {
  /// Data was not read because the byte stream does not have the number of
  /// bytes requested available and needs more bytes to be written to it first.
  DataRequired,

  /// Data was not read because it would go past the end of the byte stream.
  DataEnd,

  /// Data was not read because the read is larger than the stream's maximum
  /// read size.
  ReadOversized,

  /// Data written to a byte stream that has zlib inflate active was not valid
  /// zlib data.
  ZlibDataError,

  /// Data was written to a byte stream after its final bytes have already been
  /// written.
  WriteAfterCompletion,
}

/// Zlib data is inflated into chunks of at most this size to protect against
/// zlib bombs.
///
const ZLIB_INFLATE_CHUNK_SIZE: usize = 64 * 1024;

impl ByteStream {
  /// Creates a new empty byte stream in append mode. Reads larger than
  /// `max_read_size` are rejected.
  ///
  pub fn new(max_read_size: usize) -> ByteStream {
    ByteStream {
      bytes_queue: VecDeque::new(),
      bytes_queue_size: 0,
      bytes_read: 0,
      max_read_size,
      is_writing_finished: false,
      mark: None,
      zlib_stream: None,
      zlib_input_queue: VecDeque::new(),
      zlib_inflate_complete: false,
    }
  }

  pub fn set_max_read_size(&mut self, max_read_size: usize) {
    self.max_read_size = max_read_size;
  }

  /// Returns the total number of bytes that have been successfully read out of
  /// a byte stream.
  ///
  pub fn bytes_read(&self) -> u64 {
    self.bytes_read
  }

  /// Returns whether the byte stream is fully consumed, i.e. no bytes are
  /// unread and the end of the stream has been reached.
  ///
  /// When zlib inflate is active, input that is still queued once writing has
  /// finished is inflated first. This input may hold nothing but the end of
  /// the zlib stream.
  ///
  pub fn is_fully_consumed(&mut self) -> Result<bool, ByteStreamError> {
    if self.bytes_queue_size > 0 || !self.is_writing_finished {
      return Ok(false);
    }

    if self.zlib_stream.is_none() {
      return Ok(true);
    }

    if !self.zlib_inflate_complete {
      self.inflate_up_to_read_size(1)?;
    }

    Ok(self.bytes_queue_size == 0 && self.zlib_inflate_complete)
  }

  /// Writes bytes to a byte stream so they are available to be read by
  /// subsequent calls to `read`. If `done` is true then this signals that no
  /// more bytes will be written to the byte stream, and any further calls to
  /// `write` will error.
  ///
  /// If the byte stream has zlib inflate enabled then the given bytes will be
  /// passed through zlib inflate and the output made available to be read.
  ///
  pub fn write(
    &mut self,
    data: Vec<u8>,
    done: bool,
  ) -> Result<(), ByteStreamError> {
    if self.is_writing_finished {
      return Err(ByteStreamError::WriteAfterCompletion);
    }

    self.is_writing_finished = done;

    if data.is_empty() {
      return Ok(());
    }

    if self.zlib_stream.is_some() {
      self.zlib_input_queue.push_back(QueueItem {
        data,
        bytes_read: 0,
      });
    } else {
      self.bytes_queue_size += data.len() as u64;
      self.bytes_queue.push_back(QueueItem {
        data,
        bytes_read: 0,
      });
    };

    Ok(())
  }

  /// Reads bytes out of a byte stream.
  ///
  pub fn read(
    &mut self,
    byte_count: usize,
  ) -> Result<Vec<u8>, ByteStreamError> {
    let result = self.peek(byte_count)?;

    let mut remaining = byte_count;
    while remaining > 0 {
      let Some(queue_item) = self.bytes_queue.front_mut() else {
        break;
      };

      let available = queue_item.data.len() - queue_item.bytes_read;
      let consumed = std::cmp::min(available, remaining);

      queue_item.bytes_read += consumed;
      remaining -= consumed;

      if queue_item.bytes_read == queue_item.data.len() {
        self.bytes_queue.pop_front();
      }
    }

    self.bytes_queue_size -= byte_count as u64;
    self.bytes_read += byte_count as u64;

    if let Some(mark) = self.mark.as_mut() {
      mark.consumed.extend_from_slice(&result);
    }

    Ok(result)
  }

  /// Peeks at the next bytes that will be read out of a byte stream without
  /// actually consuming them.
  ///
  pub fn peek(
    &mut self,
    byte_count: usize,
  ) -> Result<Vec<u8>, ByteStreamError> {
    if byte_count == 0 {
      return Ok(vec![]);
    }

    if byte_count > self.max_read_size {
      return Err(ByteStreamError::ReadOversized);
    }

    self.inflate_up_to_read_size(byte_count)?;

    if byte_count as u64 > self.bytes_queue_size {
      if self.is_writing_finished {
        return Err(ByteStreamError::DataEnd);
      } else {
        return Err(ByteStreamError::DataRequired);
      }
    }

    let mut result = Vec::with_capacity(byte_count);

    for queue_item in self.bytes_queue.iter() {
      let start = queue_item.bytes_read;
      let end = start
        + std::cmp::min(
          queue_item.data.len() - start,
          byte_count - result.len(),
        );
      result.extend_from_slice(&queue_item.data[start..end]);

      if result.len() >= byte_count {
        break;
      }
    }

    Ok(result)
  }

  /// Reads a `u16` with the given endianness.
  ///
  pub fn read_u16(
    &mut self,
    endianness: Endianness,
  ) -> Result<u16, ByteStreamError> {
    let data = self.read(2)?;

    Ok(match endianness {
      Endianness::LittleEndian => LittleEndian::read_u16(&data),
      Endianness::BigEndian => BigEndian::read_u16(&data),
    })
  }

  /// Reads a `u32` with the given endianness.
  ///
  pub fn read_u32(
    &mut self,
    endianness: Endianness,
  ) -> Result<u32, ByteStreamError> {
    let data = self.read(4)?;

    Ok(match endianness {
      Endianness::LittleEndian => LittleEndian::read_u32(&data),
      Endianness::BigEndian => BigEndian::read_u32(&data),
    })
  }

  /// Saves the current read position. A subsequent call to [`Self::reset()`]
  /// returns the stream to this position. Any previous mark is replaced.
  ///
  pub fn mark(&mut self) {
    self.mark = Some(Mark {
      bytes_read: self.bytes_read,
      consumed: vec![],
    });
  }

  /// Returns the stream to the position saved by the last call to
  /// [`Self::mark()`] so the bytes read since then are read again. Does
  /// nothing if there is no mark.
  ///
  pub fn reset(&mut self) {
    let Some(mark) = self.mark.take() else {
      return;
    };

    if mark.consumed.is_empty() {
      return;
    }

    self.bytes_queue_size += mark.consumed.len() as u64;
    self.bytes_read = mark.bytes_read;
    self.bytes_queue.push_front(QueueItem {
      data: mark.consumed,
      bytes_read: 0,
    });
  }

  /// Discards the current mark, if there is one.
  ///
  pub fn clear_mark(&mut self) {
    self.mark = None;
  }

  /// Converts an uncompressed byte stream to a zlib deflated stream. All
  /// currently unread bytes, and all subsequently written bytes, will be passed
  /// through streaming zlib decompression and the result made available to be
  /// read out.
  ///
  pub fn start_zlib_inflate(&mut self) -> Result<(), ByteStreamError> {
    let bytes_queue: Vec<QueueItem> = self.bytes_queue.drain(..).collect();
    let is_writing_finished = self.is_writing_finished;

    self.bytes_queue_size = 0;
    self.is_writing_finished = false;
    self.mark = None;
    self.zlib_stream = Some(flate2::Decompress::new(false));

    for queue_item in bytes_queue.into_iter() {
      self.write(queue_item.data[queue_item.bytes_read..].to_vec(), false)?;
    }

    self.is_writing_finished = is_writing_finished;

    Ok(())
  }

  /// When zlib inflate is enabled, this function reads pending inflated data
  /// from the zlib stream until at least `read_size` bytes are available or
  /// the input runs out.
  ///
  /// Inflation stops as soon as enough bytes are available, which caps the
  /// memory used by a stream regardless of the compression ratio of its input.
  ///
  fn inflate_up_to_read_size(
    &mut self,
    read_size: usize,
  ) -> Result<(), ByteStreamError> {
    let Some(zlib_stream) = self.zlib_stream.as_mut() else {
      return Ok(());
    };

    while self.bytes_queue_size < read_size as u64 {
      let Some(queue_item) = self.zlib_input_queue.pop_front() else {
        return Ok(());
      };

      let initial_total_in = zlib_stream.total_in();
      let initial_total_out = zlib_stream.total_out();

      let mut output_buffer = vec![0u8; ZLIB_INFLATE_CHUNK_SIZE];

      let input_slice = &queue_item.data[queue_item.bytes_read..];

      let status = zlib_stream
        .decompress(
          input_slice,
          output_buffer.as_mut_slice(),
          flate2::FlushDecompress::None,
        )
        .map_err(|_| ByteStreamError::ZlibDataError)?;

      let bytes_consumed = zlib_stream.total_in() - initial_total_in;
      let bytes_produced = zlib_stream.total_out() - initial_total_out;

      // Unconsumed input goes back on the front of the queue for the next
      // decompression call. A full output buffer may also leave inflated
      // bytes pending inside the zlib stream.
      let is_output_full = bytes_produced as usize == ZLIB_INFLATE_CHUNK_SIZE;
      if (bytes_consumed < input_slice.len() as u64 || is_output_full)
        && status != flate2::Status::StreamEnd
      {
        self.zlib_input_queue.push_front(QueueItem {
          data: queue_item.data,
          bytes_read: queue_item.bytes_read + bytes_consumed as usize,
        });
      }

      if bytes_produced > 0 {
        output_buffer.truncate(bytes_produced as usize);
        self.bytes_queue.push_back(QueueItem {
          data: output_buffer,
          bytes_read: 0,
        });
        self.bytes_queue_size += bytes_produced;
      }

      if status == flate2::Status::StreamEnd {
        self.zlib_inflate_complete = true;
        self.zlib_input_queue.clear();
        return Ok(());
      }

      if bytes_produced == 0 && bytes_consumed == 0 {
        break;
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn complete_buffer_test() {
    let mut stream = ByteStream::new(1024);
    stream.write(vec![1, 2, 3, 4, 5], true).unwrap();

    assert_eq!(stream.peek(2), Ok(vec![1, 2]));
    assert_eq!(stream.read(2), Ok(vec![1, 2]));
    assert_eq!(stream.bytes_read(), 2);
    assert_eq!(stream.read(4), Err(ByteStreamError::DataEnd));
    assert_eq!(stream.read(3), Ok(vec![3, 4, 5]));
    assert_eq!(stream.is_fully_consumed(), Ok(true));
    assert_eq!(
      stream.write(vec![6], true),
      Err(ByteStreamError::WriteAfterCompletion)
    );
  }

  #[test]
  fn append_mode_test() {
    let mut stream = ByteStream::new(1024);

    stream.write(vec![1, 2], false).unwrap();
    assert_eq!(stream.read(3), Err(ByteStreamError::DataRequired));
    assert_eq!(stream.bytes_read(), 0);

    stream.write(vec![3], false).unwrap();
    assert_eq!(stream.read(3), Ok(vec![1, 2, 3]));

    stream.write(vec![4], true).unwrap();
    assert_eq!(stream.read(2), Err(ByteStreamError::DataEnd));
    assert_eq!(stream.read(1), Ok(vec![4]));
    assert_eq!(stream.is_fully_consumed(), Ok(true));
  }

  #[test]
  fn typed_reads_test() {
    let mut stream = ByteStream::new(1024);
    stream
      .write(vec![0x01, 0x02, 0x01, 0x02, 0x03, 0x04], true)
      .unwrap();

    assert_eq!(stream.read_u16(Endianness::LittleEndian), Ok(0x0201));
    assert_eq!(stream.read_u32(Endianness::BigEndian), Ok(0x01020304));
  }

  #[test]
  fn mark_and_reset_test() {
    let mut stream = ByteStream::new(1024);
    stream.write(vec![1, 2, 3], false).unwrap();
    stream.write(vec![4, 5], false).unwrap();

    stream.mark();
    assert_eq!(stream.read(2), Ok(vec![1, 2]));
    assert_eq!(stream.read(2), Ok(vec![3, 4]));
    assert_eq!(stream.read(2), Err(ByteStreamError::DataRequired));

    stream.reset();
    assert_eq!(stream.bytes_read(), 0);
    assert_eq!(stream.read(5), Ok(vec![1, 2, 3, 4, 5]));

    stream.mark();
    stream.clear_mark();
    stream.reset();
    assert_eq!(stream.bytes_read(), 5);
  }

  #[test]
  fn read_oversized_test() {
    let mut stream = ByteStream::new(4);
    stream.write(vec![0; 8], true).unwrap();

    assert_eq!(stream.read(5), Err(ByteStreamError::ReadOversized));
    assert_eq!(stream.read(4), Ok(vec![0; 4]));
  }

  #[test]
  fn zlib_inflate_test() {
    let mut encoder = flate2::write::DeflateEncoder::new(
      vec![],
      flate2::Compression::default(),
    );
    encoder.write_all(&[7u8; 100_000]).unwrap();
    let deflated = encoder.finish().unwrap();

    let mut stream = ByteStream::new(usize::MAX);
    stream.write(vec![9, 9], false).unwrap();
    assert_eq!(stream.read(2), Ok(vec![9, 9]));

    stream.write(deflated[0..10].to_vec(), false).unwrap();
    stream.start_zlib_inflate().unwrap();
    stream.write(deflated[10..].to_vec(), true).unwrap();

    assert_eq!(stream.read(100_000), Ok(vec![7u8; 100_000]));
    assert_eq!(stream.read(1), Err(ByteStreamError::DataEnd));
  }

  #[test]
  fn zlib_stream_end_written_last_test() {
    let mut encoder = flate2::write::DeflateEncoder::new(
      vec![],
      flate2::Compression::default(),
    );
    encoder.write_all(b"DICOM data").unwrap();
    let deflated = encoder.finish().unwrap();

    let mut stream = ByteStream::new(usize::MAX);
    stream.start_zlib_inflate().unwrap();

    // Write one byte at a time, reading out all inflated bytes as soon as
    // they're available
    let mut inflated = vec![];
    for (i, byte) in deflated.iter().enumerate() {
      stream.write(vec![*byte], i == deflated.len() - 1).unwrap();

      while inflated.len() < 10 {
        match stream.read(1) {
          Ok(data) => inflated.extend(data),
          Err(_) => break,
        }
      }

      if i < deflated.len() - 1 {
        assert_eq!(stream.is_fully_consumed(), Ok(false));
      }
    }

    assert_eq!(inflated, b"DICOM data".to_vec());
    assert_eq!(stream.is_fully_consumed(), Ok(true));
  }

  #[test]
  fn zlib_invalid_data_test() {
    let mut stream = ByteStream::new(usize::MAX);
    stream.start_zlib_inflate().unwrap();
    stream.write(vec![0xFF; 16], true).unwrap();

    assert_eq!(
      stream.is_fully_consumed(),
      Err(ByteStreamError::ZlibDataError)
    );
  }
}
