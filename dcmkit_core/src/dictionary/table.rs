//! Compact in-memory layout of the data dictionary.
//!
//! The source rows are converted once into flat tables: a de-duplicated list of
//! `(VRs, multiplicity)` codes that rows refer to by index, a single string
//! holding every name, a group index over the sorted standard elements, the
//! sorted private keys, and the compiled repeating-group masks.

use std::collections::HashMap;

use super::private_entries::PRIVATE_ENTRIES;
use super::standard_entries::{RANGE_ENTRIES, STANDARD_ENTRIES};
use super::Entry;
use crate::{DataElementTag, ValueMultiplicity, ValueRepresentation};

pub(super) struct Dictionary {
  codes: Vec<Code>,
  names: String,

  groups: Vec<GroupRange>,
  elements: Vec<u16>,
  standard_rows: Vec<Row>,
  names_index: Vec<u32>,

  private_keys: Vec<(&'static str, Row)>,

  ranges: Vec<RangeRow>,
}

struct Code {
  vrs: Vec<ValueRepresentation>,
  multiplicity: ValueMultiplicity,
}

#[derive(Clone, Copy)]
struct Row {
  code: u16,
  name_offset: u32,
  name_length: u16,
}

/// The contiguous span of `elements` and `standard_rows` for one group.
struct GroupRange {
  group: u16,
  start: u32,
  end: u32,
}

struct RangeRow {
  mask: u32,
  value: u32,
  row: Row,
}

/// Accumulates the shared code table and names blob while the dictionary is
/// being built.
#[derive(Default)]
struct Builder {
  codes: Vec<Code>,
  code_indexes: HashMap<(&'static str, &'static str), u16>,
  names: String,
}

impl Builder {
  fn add_row(
    &mut self,
    vr: &'static str,
    vm: &'static str,
    name: &str,
  ) -> Option<Row> {
    let code = match self.code_indexes.get(&(vr, vm)) {
      Some(code) => *code,
      None => {
        let code = Code {
          vrs: parse_vrs(vr)?,
          multiplicity: ValueMultiplicity::from_str(vm).ok()?,
        };

        let index = u16::try_from(self.codes.len()).ok()?;
        self.codes.push(code);
        self.code_indexes.insert((vr, vm), index);

        index
      }
    };

    let name_offset = u32::try_from(self.names.len()).ok()?;
    let name_length = u16::try_from(name.len()).ok()?;
    self.names.push_str(name);

    Some(Row {
      code,
      name_offset,
      name_length,
    })
  }
}

fn parse_vrs(s: &str) -> Option<Vec<ValueRepresentation>> {
  if s.is_empty() {
    return Some(vec![]);
  }

  s.split(" or ")
    .map(|vr| ValueRepresentation::from_bytes(vr.as_bytes()).ok())
    .collect()
}

/// Compiles an eight digit pattern such as `"60xx3000"` into a mask and value
/// that a tag's 32-bit integer form can be tested against.
///
fn parse_range_pattern(pattern: &str) -> Option<(u32, u32)> {
  if pattern.len() != 8 {
    return None;
  }

  let mut mask = 0u32;
  let mut value = 0u32;

  for c in pattern.chars() {
    mask <<= 4;
    value <<= 4;

    if c != 'x' {
      mask |= 0xF;
      value |= c.to_digit(16)?;
    }
  }

  // Repeating groups only cover even group numbers. A fully wildcarded group
  // also matches private groups.
  let group_pattern = &pattern[0..4];
  if group_pattern.contains('x') && group_pattern != "xxxx" {
    mask |= 0x0001_0000;
  }

  Some((mask, value))
}

/// Splits a private tag key of the form `(GGGG,"CREATOR",EE)` into its group,
/// private creator, and element byte.
///
pub(super) fn parse_private_tag_key(key: &str) -> Option<(u16, &str, u8)> {
  let inner = key.strip_prefix('(')?.strip_suffix(')')?;

  let (group, rest) = inner.split_once(",\"")?;
  let (creator, element) = rest.rsplit_once("\",")?;

  if group.len() != 4 || element.len() != 2 {
    return None;
  }

  Some((
    u16::from_str_radix(group, 16).ok()?,
    creator,
    u8::from_str_radix(element, 16).ok()?,
  ))
}

impl Dictionary {
  /// Builds the dictionary from its source rows. Rows that fail to parse are
  /// left out.
  ///
  pub(super) fn build() -> Self {
    let mut builder = Builder::default();

    let mut standard_source = STANDARD_ENTRIES.to_vec();
    standard_source.sort_by_key(|(group, element, ..)| (*group, *element));
    standard_source.dedup_by_key(|(group, element, ..)| (*group, *element));

    let mut groups = Vec::<GroupRange>::new();
    let mut elements = Vec::with_capacity(standard_source.len());
    let mut standard_rows = Vec::with_capacity(standard_source.len());

    for (group, element, vr, vm, name) in standard_source {
      let Some(row) = builder.add_row(vr, vm, name) else {
        continue;
      };

      let index = elements.len() as u32;

      match groups.last_mut() {
        Some(range) if range.group == group => range.end = index + 1,
        _ => groups.push(GroupRange {
          group,
          start: index,
          end: index + 1,
        }),
      }

      elements.push(element);
      standard_rows.push(row);
    }

    let mut private_keys: Vec<(&'static str, Row)> = PRIVATE_ENTRIES
      .iter()
      .filter(|(key, ..)| parse_private_tag_key(key).is_some())
      .filter_map(|(key, vr, vm, name)| {
        builder.add_row(vr, vm, name).map(|row| (*key, row))
      })
      .collect();
    private_keys.sort_by(|a, b| a.0.cmp(b.0));

    let ranges = RANGE_ENTRIES
      .iter()
      .filter_map(|(pattern, vr, vm, name)| {
        let (mask, value) = parse_range_pattern(pattern)?;
        let row = builder.add_row(vr, vm, name)?;

        Some(RangeRow { mask, value, row })
      })
      .collect();

    let mut dictionary = Self {
      codes: builder.codes,
      names: builder.names,
      groups,
      elements,
      standard_rows,
      names_index: vec![],
      private_keys,
      ranges,
    };

    let mut names_index: Vec<u32> =
      (0..dictionary.standard_rows.len() as u32).collect();
    names_index
      .sort_by(|a, b| dictionary.row_name(*a).cmp(dictionary.row_name(*b)));
    dictionary.names_index = names_index;

    dictionary
  }

  fn name(&self, row: Row) -> &str {
    let start = row.name_offset as usize;

    &self.names[start..start + row.name_length as usize]
  }

  fn row_name(&self, index: u32) -> &str {
    self.name(self.standard_rows[index as usize])
  }

  fn entry(&self, tag: DataElementTag, row: Row) -> Entry<'_> {
    let code = &self.codes[row.code as usize];

    Entry {
      tag,
      name: self.name(row),
      vrs: &code.vrs,
      multiplicity: code.multiplicity,
    }
  }

  /// Returns every standard entry in ascending tag order.
  ///
  pub(super) fn standard_entries(&self) -> impl Iterator<Item = Entry<'_>> {
    self.groups.iter().flat_map(move |range| {
      (range.start..range.end).map(move |i| {
        let i = i as usize;
        let tag = DataElementTag::new(range.group, self.elements[i]);

        self.entry(tag, self.standard_rows[i])
      })
    })
  }

  /// Looks up a standard tag with a binary search over the distinct groups
  /// followed by a binary search over the elements in the matching group.
  ///
  pub(super) fn find_standard(&self, tag: DataElementTag) -> Option<Entry<'_>> {
    let group_index = self
      .groups
      .binary_search_by_key(&tag.group, |range| range.group)
      .ok()?;

    let range = &self.groups[group_index];
    let start = range.start as usize;
    let end = range.end as usize;

    let index = self.elements[start..end].binary_search(&tag.element).ok()?;

    Some(self.entry(tag, self.standard_rows[start + index]))
  }

  pub(super) fn find_private(&self, key: &str) -> Option<Entry<'_>> {
    let index = self
      .private_keys
      .binary_search_by(|(k, _)| (*k).cmp(key))
      .ok()?;

    let (key, row) = self.private_keys[index];
    let (group, _, element) = parse_private_tag_key(key)?;

    Some(self.entry(DataElementTag::new(group, element as u16), row))
  }

  pub(super) fn find_range(&self, tag: DataElementTag) -> Option<Entry<'_>> {
    let n = tag.to_int();

    self
      .ranges
      .iter()
      .find(|range| n & range.mask == range.value)
      .map(|range| self.entry(tag, range.row))
  }

  pub(super) fn find_by_name(&self, name: &str) -> Option<DataElementTag> {
    let index = self
      .names_index
      .binary_search_by(|i| self.row_name(*i).cmp(name))
      .ok()?;

    let i = self.names_index[index] as usize;
    let group = self
      .groups
      .iter()
      .find(|range| (range.start as usize..range.end as usize).contains(&i))?
      .group;

    Some(DataElementTag::new(group, self.elements[i]))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_range_pattern_test() {
    assert_eq!(
      parse_range_pattern("60xx3000"),
      Some((0xFF01_FFFF, 0x6000_3000))
    );

    assert_eq!(
      parse_range_pattern("xxxx0000"),
      Some((0x0000_FFFF, 0x0000_0000))
    );

    assert_eq!(parse_range_pattern("60xx300"), None);
    assert_eq!(parse_range_pattern("60xx300G"), None);
  }

  #[test]
  fn parse_private_tag_key_test() {
    assert_eq!(
      parse_private_tag_key("(0029,\"SIEMENS CSA HEADER\",10)"),
      Some((0x0029, "SIEMENS CSA HEADER", 0x10))
    );

    assert_eq!(
      parse_private_tag_key("(0029,\"A,\"B\",0A)"),
      Some((0x0029, "A,\"B", 0x0A))
    );

    assert_eq!(parse_private_tag_key("(0029,SIEMENS,10)"), None);
    assert_eq!(parse_private_tag_key("(0029,\"X\",100)"), None);
  }

  #[test]
  fn codes_are_shared_test() {
    let dictionary = Dictionary::build();

    assert!(dictionary.codes.len() < 100);
    assert!(dictionary.codes.len() < dictionary.standard_rows.len() / 4);
  }

  #[test]
  fn all_source_rows_are_built_test() {
    let dictionary = Dictionary::build();

    assert_eq!(dictionary.standard_rows.len(), STANDARD_ENTRIES.len());
    assert_eq!(dictionary.private_keys.len(), PRIVATE_ENTRIES.len());
    assert_eq!(dictionary.ranges.len(), RANGE_ENTRIES.len());
  }

  #[test]
  fn names_are_unique_test() {
    let dictionary = Dictionary::build();

    let mut names: Vec<&str> =
      dictionary.standard_entries().map(|e| e.name).collect();
    let count = names.len();
    names.sort();
    names.dedup();

    assert_eq!(names.len(), count);
  }
}
