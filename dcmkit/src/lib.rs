//! dcmkit is a collection of libraries for reading, writing, and naturalizing
//! DICOM P10 data, the file format used to store and transmit medical images
//! and related information.

/// Provides core DICOM concepts including data sets, data elements, value
/// representations, transfer syntaxes, and a dictionary of the data elements
/// defined in DICOM Part 6.
///
pub mod core {
  pub use dcmkit_core::*;
}

/// Converts data sets to and from natural form, in which data elements are
/// keyed by name and hold plain values.
///
pub mod natural {
  pub use dcmkit_natural::*;
}

/// Reads and writes the DICOM Part 10 (P10) binary format used to store and
/// transmit DICOM-based medical imaging information.
///
pub mod p10 {
  pub use dcmkit_p10::*;
}

/// Packs and unpacks 1-bit pixel data samples.
///
pub mod pixel_data {
  pub use dcmkit_pixel_data::*;
}

mod integration_tests;
