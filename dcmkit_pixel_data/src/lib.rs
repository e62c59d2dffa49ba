//! Helpers for working with pixel data. Currently this covers the packing of
//! one-bit-per-sample data.

pub mod bit_packing;

pub use bit_packing::{
  pack, pack_bools, pack_into_value, unpack, UNPACKED_ON_VALUE,
};
