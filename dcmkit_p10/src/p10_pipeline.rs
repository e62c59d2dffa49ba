//! Listeners that consume a stream of DICOM P10 parts, and the pipeline that
//! routes parts through an ordered chain of transforms before they reach a
//! listener.
//!
//! A transform sees each part along with the next stage of the chain, and may
//! pass the part on unchanged, drop it, replace it, or emit extra parts. The
//! chain is fixed when the pipeline is created.

use crate::{P10Error, P10Part};

/// A consumer of DICOM P10 parts, e.g. a data set builder or a write context.
///
pub trait P10PartListener {
  fn add_part(&mut self, part: &P10Part) -> Result<(), P10Error>;
}

/// A stage in a [`P10Pipeline`] that receives each part before the rest of the
/// pipeline does. Parts are forwarded by calling `next.add_part()` zero or
/// more times.
///
pub trait P10Transform {
  fn add_part(
    &mut self,
    part: &P10Part,
    next: &mut dyn P10PartListener,
  ) -> Result<(), P10Error>;
}

/// Routes DICOM P10 parts through an ordered list of transforms and then on to
/// a final listener. A pipeline is itself a listener, so it can be fed directly
/// from a read context.
///
pub struct P10Pipeline<L: P10PartListener> {
  transforms: Vec<Box<dyn P10Transform>>,
  listener: L,
}

impl<L: P10PartListener> P10Pipeline<L> {
  /// Creates a new pipeline. Parts pass through the transforms in the order
  /// given.
  ///
  pub fn new(transforms: Vec<Box<dyn P10Transform>>, listener: L) -> Self {
    Self {
      transforms,
      listener,
    }
  }

  pub fn listener(&self) -> &L {
    &self.listener
  }

  pub fn listener_mut(&mut self) -> &mut L {
    &mut self.listener
  }

  /// Consumes the pipeline and returns its final listener.
  ///
  pub fn into_listener(self) -> L {
    self.listener
  }
}

impl<L: P10PartListener> P10PartListener for P10Pipeline<L> {
  fn add_part(&mut self, part: &P10Part) -> Result<(), P10Error> {
    Chain {
      transforms: &mut self.transforms,
      listener: &mut self.listener,
    }
    .add_part(part)
  }
}

/// The remainder of a pipeline from a given transform onwards.
///
struct Chain<'a, L: P10PartListener> {
  transforms: &'a mut [Box<dyn P10Transform>],
  listener: &'a mut L,
}

impl<L: P10PartListener> P10PartListener for Chain<'_, L> {
  fn add_part(&mut self, part: &P10Part) -> Result<(), P10Error> {
    match self.transforms.split_first_mut() {
      Some((transform, rest)) => transform.add_part(
        part,
        &mut Chain {
          transforms: rest,
          listener: &mut *self.listener,
        },
      ),

      None => self.listener.add_part(part),
    }
  }
}

/// Collects parts into a vector.
///
impl P10PartListener for Vec<P10Part> {
  fn add_part(&mut self, part: &P10Part) -> Result<(), P10Error> {
    self.push(part.clone());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Emits every part twice.
  struct DuplicateTransform;

  impl P10Transform for DuplicateTransform {
    fn add_part(
      &mut self,
      part: &P10Part,
      next: &mut dyn P10PartListener,
    ) -> Result<(), P10Error> {
      next.add_part(part)?;
      next.add_part(part)
    }
  }

  /// Drops sequence delimiters.
  struct DropDelimitersTransform;

  impl P10Transform for DropDelimitersTransform {
    fn add_part(
      &mut self,
      part: &P10Part,
      next: &mut dyn P10PartListener,
    ) -> Result<(), P10Error> {
      match part {
        P10Part::SequenceDelimiter => Ok(()),
        part => next.add_part(part),
      }
    }
  }

  #[test]
  fn pipeline_order_test() {
    let transforms: Vec<Box<dyn P10Transform>> =
      vec![Box::new(DropDelimitersTransform), Box::new(DuplicateTransform)];

    let mut pipeline = P10Pipeline::new(transforms, Vec::<P10Part>::new());

    pipeline.add_part(&P10Part::SequenceItemStart).unwrap();
    pipeline.add_part(&P10Part::SequenceDelimiter).unwrap();
    pipeline.add_part(&P10Part::End).unwrap();

    assert_eq!(
      pipeline.into_listener(),
      vec![
        P10Part::SequenceItemStart,
        P10Part::SequenceItemStart,
        P10Part::End,
        P10Part::End
      ]
    );
  }

  #[test]
  fn empty_pipeline_test() {
    let mut pipeline = P10Pipeline::new(vec![], Vec::<P10Part>::new());

    pipeline.add_part(&P10Part::End).unwrap();

    assert_eq!(pipeline.listener(), &vec![P10Part::End]);
  }
}
