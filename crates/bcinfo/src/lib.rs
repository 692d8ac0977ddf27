#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Metadata extraction for compiled script modules.
//!
//! A compiler front end records load-time facts in reserved named-metadata
//! tables: exported variables and functions, foreach kernels with their
//! signature bitmasks, pragmas, object slots needing teardown, and the
//! compiler version / optimization level / float precision contract.
//!
//! [`MetadataExtractor`] reads those tables from any [`MetadataSource`],
//! checks them against each other, and commits the decoded result as a unit.

pub mod colors;
pub mod constants;
mod decode;
pub mod dump;
mod error;
mod extractor;
mod metadata;
pub mod signature;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod signature_tests;
#[cfg(test)]
mod test_utils;

pub use bcinfo_ir::{LoadConfig, MetadataSource, Module, ModuleError, Operand};
pub use colors::Colors;
pub use dump::dump;
pub use error::ExtractError;
pub use extractor::{MetadataExtractor, ModuleHandle};
pub use metadata::{ExtractedMetadata, FloatPrecision};
pub use signature::{
    has_for_each_signature_in, has_for_each_signature_kernel, has_for_each_signature_out,
    has_for_each_signature_usr_data, has_for_each_signature_x, has_for_each_signature_y,
};
