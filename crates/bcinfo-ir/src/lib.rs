#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named-metadata module model for bcinfo.
//!
//! This crate contains:
//! - The operand/row/table model (`Operand`, `MetadataNode`, `NamedMetadata`)
//! - The `MetadataSource` capability consumed by the extractor
//! - An in-memory `Module` with a binary container format and a JSON fixture form

pub mod container;
mod json;
mod module;
mod operand;
mod source;

#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod module_tests;

pub use container::{Header, LoadConfig, MAGIC, ModuleError, SECTION_ALIGN, VERSION};
pub use module::Module;
pub use operand::{MetadataNode, NamedMetadata, Operand, OperandKind};
pub use source::MetadataSource;
