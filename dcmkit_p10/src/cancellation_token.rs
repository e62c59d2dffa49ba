//! A token used to retire a DICOM P10 read that is waiting for more data.

use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

/// A cloneable flag shared between a DICOM P10 read context and whatever is
/// supplying it with data, possibly on another thread. Once cancelled, a read
/// context that would otherwise report [`crate::P10Error::DataRequired`]
/// reports [`crate::P10Error::Cancelled`] instead.
///
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
  pub fn new() -> Self {
    Self::default()
  }

  /// Cancels this token and every clone of it. This can't be undone.
  ///
  pub fn cancel(&self) {
    self.0.store(true, Ordering::Release);
  }

  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cancel_test() {
    let token = CancellationToken::new();
    let clone = token.clone();

    assert!(!clone.is_cancelled());

    std::thread::spawn(move || token.cancel()).join().unwrap();

    assert!(clone.is_cancelled());
  }
}
