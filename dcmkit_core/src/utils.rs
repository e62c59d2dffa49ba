/// Inspects a byte slice in hexadecimal, e.g. `[1A 2B 3C 4D]`. If the number of
/// bytes in the slice exceeds `max_length` then only the first `max_length`
/// bytes are shown, followed by an ellipsis, e.g. `[1A 2B ...]`.
///
pub fn inspect_u8_slice(bytes: &[u8], max_length: usize) -> String {
  let shown = &bytes[..bytes.len().min(max_length)];

  let mut s = shown
    .iter()
    .map(|byte| format!("{:02X}", byte))
    .collect::<Vec<_>>()
    .join(" ");

  if shown.len() < bytes.len() {
    s.push_str(" ...");
  }

  format!("[{}]", s)
}

/// Removes the trailing space and NUL padding that text values carry.
///
pub fn trim_end_padding(s: &str) -> &str {
  s.trim_end_matches([' ', '\0'])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inspect_u8_slice_test() {
    assert_eq!(inspect_u8_slice(&[], 4), "[]");
    assert_eq!(inspect_u8_slice(&[0xD1, 0x96, 0x33], 100), "[D1 96 33]");
    assert_eq!(
      inspect_u8_slice(&[0xD1, 0x96, 0x33, 0x44], 3),
      "[D1 96 33 ...]"
    );
  }

  #[test]
  fn trim_end_padding_test() {
    assert_eq!(trim_end_padding("1.2.3\0"), "1.2.3");
    assert_eq!(trim_end_padding(" A  "), " A");
    assert_eq!(trim_end_padding("\0 \0"), "");
  }
}
