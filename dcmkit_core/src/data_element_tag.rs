//! A data element tag, defined as 16-bit `group` and `element` values.

/// A data element tag that is defined by `group` and `element` values, each of
/// which is a 16-bit unsigned integer. Tags are ordered by group and then by
/// element, which is also the order they appear in on the wire.
///
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DataElementTag {
  pub group: u16,
  pub element: u16,
}

static HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

impl std::fmt::Display for DataElementTag {
  /// Formats a data element tag as `"(GGGG,EEEE)"`, e.g.`"(0008,0020)"`.
  ///
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let hex = self.to_hex_string();

    write!(f, "({},{})", &hex[0..4], &hex[4..8])
  }
}

impl DataElementTag {
  /// Creates a new data element tag with the given group and element values.
  ///
  pub const fn new(group: u16, element: u16) -> Self {
    Self { group, element }
  }

  /// Returns whether the tag is private, which is determined by the group
  /// number being odd.
  ///
  pub fn is_private(&self) -> bool {
    self.group & 1 == 1
  }

  /// Returns whether the tag is for a private creator, which is determined by
  /// the group number being odd and the element being between 0x10 and 0xFF.
  ///
  pub fn is_private_creator(&self) -> bool {
    self.is_private() && (0x10..=0xFF).contains(&self.element)
  }

  /// For a private tag in a reserved block, returns the tag of the
  /// *'(gggg,00xx) Private Creator'* data element that reserves its block.
  /// Returns `None` for non-private tags and for tags that aren't in a
  /// reserved block.
  ///
  pub fn private_creator_tag(&self) -> Option<DataElementTag> {
    if !self.is_private() || self.element < 0x1000 {
      return None;
    }

    Some(DataElementTag::new(self.group, self.element >> 8))
  }

  /// Converts a tag to a single 32-bit integer where the group is in the high
  /// 16 bits and the element is in the low 16 bits.
  ///
  pub fn to_int(&self) -> u32 {
    ((self.group as u32) << 16) | self.element as u32
  }

  /// Formats a data element tag as `"GGGGEEEE"`, e.g.`"0008002D"`.
  ///
  pub fn to_hex_string(&self) -> String {
    self.to_hex_digits().iter().map(|b| *b as char).collect()
  }

  /// Returns the eight hexadecimal digits for this data element tag's group
  /// and element values.
  ///
  pub fn to_hex_digits(&self) -> [u8; 8] {
    let n = self.to_int();

    std::array::from_fn(|i| HEX_DIGITS[((n >> (28 - i * 4)) & 0xF) as usize])
  }

  /// Creates a data element tag from a hex string formatted as
  /// `"GGGGEEEE"`, e.g.`"0008002D"`.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_hex_string(tag: &str) -> Result<Self, ()> {
    if tag.len() != 8 || !tag.is_ascii() {
      return Err(());
    }

    let group = u16::from_str_radix(&tag[0..4], 16).map_err(|_| ())?;
    let element = u16::from_str_radix(&tag[4..8], 16).map_err(|_| ())?;

    Ok(Self { group, element })
  }

  /// Creates a data element tag from its bracketed form `"(GGGG,EEEE)"`, which
  /// is the inverse of this type's `Display` implementation.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_bracketed_string(tag: &str) -> Result<Self, ()> {
    let inner = tag
      .strip_prefix('(')
      .and_then(|s| s.strip_suffix(')'))
      .ok_or(())?;

    match inner.split_once(',') {
      Some((group, element)) if group.len() == 4 && element.len() == 4 => {
        Self::from_hex_string(&format!("{}{}", group, element))
      }
      _ => Err(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn is_private_test() {
    assert!(DataElementTag::new(0x0001, 0).is_private());

    assert!(!DataElementTag::new(0x0002, 1).is_private());
  }

  #[test]
  fn is_private_creator_test() {
    assert!(DataElementTag::new(0x0001, 0x0010).is_private_creator());

    assert!(DataElementTag::new(0x0001, 0x00FF).is_private_creator());

    assert!(!DataElementTag::new(0x0001, 0x000F).is_private_creator());
  }

  #[test]
  fn private_creator_tag_test() {
    assert_eq!(
      DataElementTag::new(0x0029, 0x1010).private_creator_tag(),
      Some(DataElementTag::new(0x0029, 0x0010))
    );

    assert_eq!(
      DataElementTag::new(0x0029, 0x0010).private_creator_tag(),
      None
    );

    assert_eq!(
      DataElementTag::new(0x0028, 0x1010).private_creator_tag(),
      None
    );
  }

  #[test]
  fn ordering_test() {
    assert!(
      DataElementTag::new(0x0008, 0xFFFF) < DataElementTag::new(0x0010, 0)
    );
    assert!(DataElementTag::new(0x0010, 1) < DataElementTag::new(0x0010, 2));
  }

  #[test]
  fn to_int_test() {
    assert_eq!(DataElementTag::new(0x1122, 0x3344).to_int(), 0x11223344);
  }

  #[test]
  fn to_string_test() {
    assert_eq!(
      DataElementTag::new(0x1122, 0xAABB).to_string(),
      "(1122,AABB)"
    );
  }

  #[test]
  fn to_hex_digits_test() {
    assert_eq!(
      DataElementTag::new(0x1122, 0xAABB).to_hex_digits(),
      "1122AABB".as_bytes()
    );
  }

  #[test]
  fn from_hex_string_test() {
    assert_eq!(
      DataElementTag::from_hex_string("11223344"),
      Ok(DataElementTag::new(0x1122, 0x3344))
    );

    assert_eq!(DataElementTag::from_hex_string("1122334"), Err(()));
  }

  #[test]
  fn from_bracketed_string_test() {
    assert_eq!(
      DataElementTag::from_bracketed_string("(0019,10AB)"),
      Ok(DataElementTag::new(0x0019, 0x10AB))
    );

    assert_eq!(DataElementTag::from_bracketed_string("0019,10AB"), Err(()));
    assert_eq!(DataElementTag::from_bracketed_string("(019,010AB)"), Err(()));
    assert_eq!(DataElementTag::from_bracketed_string("(0019,10AX)"), Err(()));
  }
}
