//! DICOM value multiplicity.

/// Describes DICOM value multiplicity, where the multiplicity is the number of
/// values that are allowed to be present in a data element. The `min` value is
/// always at least 1, and the maximum (if applicable) will always be greater
/// than or equal to `min`. Multiplicities such as `2-2n` are stored with a
/// `step` of 2, meaning the number of values must be a multiple of two.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValueMultiplicity {
  pub min: u32,
  pub max: Option<u32>,
  pub step: u32,
}

impl ValueMultiplicity {
  /// A multiplicity of exactly one value.
  ///
  pub const ONE: ValueMultiplicity = ValueMultiplicity {
    min: 1,
    max: Some(1),
    step: 1,
  };

  /// Parses a multiplicity string as used in the data dictionary, e.g. `"1"`,
  /// `"1-3"`, `"1-n"`, `"2-2n"`.
  ///
  #[allow(clippy::result_unit_err, clippy::should_implement_trait)]
  pub fn from_str(s: &str) -> Result<Self, ()> {
    let parse = |s: &str| s.parse::<u32>().map_err(|_| ());

    let (min, max) = match s.split_once('-') {
      None => {
        let n = parse(s)?;
        return Ok(Self {
          min: n,
          max: Some(n),
          step: 1,
        });
      }
      Some(pair) => pair,
    };

    let min = parse(min)?;

    if max == "n" {
      return Ok(Self {
        min,
        max: None,
        step: 1,
      });
    }

    if let Some(step) = max.strip_suffix('n') {
      return Ok(Self {
        min,
        max: None,
        step: parse(step)?,
      });
    }

    Ok(Self {
      min,
      max: Some(parse(max)?),
      step: 1,
    })
  }

  /// Returns whether the given number of values satisfies this multiplicity.
  ///
  pub fn contains(&self, count: u32) -> bool {
    count >= self.min
      && self.max.map(|max| count <= max).unwrap_or(true)
      && count % self.step.max(1) == 0
  }
}

impl std::fmt::Display for ValueMultiplicity {
  /// Returns a value multiplicity as a human-readable string, e.g. "1-3", or
  /// "2-2n".
  ///
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self.max {
      Some(max) if max == self.min => write!(f, "{}", max),
      Some(max) => write!(f, "{}-{}", self.min, max),
      None if self.step > 1 => write!(f, "{}-{}n", self.min, self.step),
      None => write!(f, "{}-n", self.min),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_str_test() {
    assert_eq!(ValueMultiplicity::from_str("1"), Ok(ValueMultiplicity::ONE));

    assert_eq!(
      ValueMultiplicity::from_str("1-3"),
      Ok(ValueMultiplicity {
        min: 1,
        max: Some(3),
        step: 1
      })
    );

    assert_eq!(
      ValueMultiplicity::from_str("2-2n"),
      Ok(ValueMultiplicity {
        min: 2,
        max: None,
        step: 2
      })
    );

    assert_eq!(ValueMultiplicity::from_str("x"), Err(()));
    assert_eq!(ValueMultiplicity::from_str("1-"), Err(()));
  }

  #[test]
  fn contains_test() {
    let vm = ValueMultiplicity::from_str("2-2n").unwrap();
    assert!(!vm.contains(1));
    assert!(vm.contains(2));
    assert!(!vm.contains(3));
    assert!(vm.contains(6));

    let vm = ValueMultiplicity::from_str("1-3").unwrap();
    assert!(!vm.contains(0));
    assert!(vm.contains(3));
    assert!(!vm.contains(4));
  }

  #[test]
  fn to_string_test() {
    for s in ["1", "6", "1-3", "1-n", "2-2n", "3-3n"] {
      assert_eq!(ValueMultiplicity::from_str(s).unwrap().to_string(), s);
    }
  }
}
