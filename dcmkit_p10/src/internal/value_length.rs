/// A value length as stored in a data element header. `0xFFFFFFFF` on the wire
/// is an undefined length, every other value is a defined length in bytes.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueLength {
  Defined { length: u32 },
  Undefined,
}

impl ValueLength {
  pub const ZERO: ValueLength = ValueLength::Defined { length: 0 };

  pub const UNDEFINED_U32: u32 = 0xFFFFFFFF;

  pub fn new(length: u32) -> Self {
    match length {
      Self::UNDEFINED_U32 => Self::Undefined,
      _ => Self::Defined { length },
    }
  }
}

impl std::fmt::Display for ValueLength {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::Defined { length } => write!(f, "{} bytes", length),
      Self::Undefined => write!(f, "undefined"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_test() {
    assert_eq!(ValueLength::new(0), ValueLength::ZERO);
    assert_eq!(ValueLength::new(0xFFFFFFFF), ValueLength::Undefined);
    assert_eq!(
      ValueLength::new(0xFFFFFFFE).to_string(),
      "4294967294 bytes"
    );
  }
}
