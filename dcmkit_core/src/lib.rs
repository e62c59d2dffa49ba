//! Core types for working with DICOM data: tags, value representations, the
//! data dictionary, data element values, and data sets.

pub mod data_element_tag;
pub mod data_element_value;
pub mod data_error;
pub mod data_set;
pub mod data_set_path;
pub mod dictionary;
pub mod error;
pub mod transfer_syntax;
pub mod utils;
pub mod value_multiplicity;
pub mod value_representation;

pub use data_element_tag::DataElementTag;
pub use data_element_value::DataElementValue;
pub use data_error::DataError;
pub use data_set::DataSet;
pub use data_set_path::{DataSetPath, DataSetPathEntry};
pub use error::DcmkitError;
pub use transfer_syntax::TransferSyntax;
pub use value_multiplicity::ValueMultiplicity;
pub use value_representation::ValueRepresentation;
