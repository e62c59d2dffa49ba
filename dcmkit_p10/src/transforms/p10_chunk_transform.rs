use std::rc::Rc;

use dcmkit_core::ValueRepresentation;

use crate::{P10Error, P10Part, P10PartListener, P10Transform};

/// Transform that rewrites the value bytes parts in a stream of DICOM P10
/// parts so that every value arrives in chunks of a fixed size. Only the last
/// chunk of a value can be shorter. All other parts pass through unchanged.
///
/// This makes downstream output independent of how the source data happened to
/// be fragmented when it was read.
///
pub struct P10ChunkTransform {
  chunk_size: usize,
  buffer: Vec<u8>,
}

impl P10ChunkTransform {
  /// Creates a new chunk transform. A chunk size of zero is treated as one.
  ///
  pub fn new(chunk_size: usize) -> Self {
    Self {
      chunk_size: chunk_size.max(1),
      buffer: vec![],
    }
  }

  fn emit_chunk(
    vr: ValueRepresentation,
    data: &[u8],
    bytes_remaining: u32,
    next: &mut dyn P10PartListener,
  ) -> Result<(), P10Error> {
    next.add_part(&P10Part::DataElementValueBytes {
      vr,
      data: Rc::new(data.to_vec()),
      bytes_remaining,
    })
  }
}

impl P10Transform for P10ChunkTransform {
  fn add_part(
    &mut self,
    part: &P10Part,
    next: &mut dyn P10PartListener,
  ) -> Result<(), P10Error> {
    let (vr, data, bytes_remaining) = match part {
      P10Part::DataElementValueBytes {
        vr,
        data,
        bytes_remaining,
      } => (*vr, data, *bytes_remaining),

      part => return next.add_part(part),
    };

    self.buffer.extend_from_slice(data);

    let mut offset = 0;
    let mut is_value_complete = false;

    while self.buffer.len() - offset >= self.chunk_size {
      let end = offset + self.chunk_size;
      let remaining = (self.buffer.len() - end) as u32 + bytes_remaining;

      Self::emit_chunk(vr, &self.buffer[offset..end], remaining, next)?;

      offset = end;

      if remaining == 0 {
        is_value_complete = true;
        break;
      }
    }

    self.buffer.drain(..offset);

    // Flush whatever is left once the source value has ended. This is also
    // what emits the single empty part for a zero-length value.
    if bytes_remaining == 0 && !is_value_complete {
      Self::emit_chunk(vr, &self.buffer, 0, next)?;
      self.buffer.clear();
    }

    Ok(())
  }
}
