//! Transforms that sit in a [`crate::P10Pipeline`] and alter the stream of
//! DICOM P10 parts on its way to a listener.

pub mod p10_chunk_transform;
pub mod p10_filter_transform;
pub mod p10_insert_transform;
