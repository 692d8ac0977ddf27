//! Binary container format for named-metadata modules.
//!
//! Little-endian throughout. Every section starts on a 64-byte boundary and
//! section offsets are derived from the counts in the [`Header`]:
//!
//! Header → StringBlob → StringTable → Tables → Nodes → Operands

mod emit;
mod header;
mod load;


pub use header::{Header, SectionOffsets};
pub use load::{LoadConfig, ModuleError};

/// Magic bytes identifying a bcinfo container.
pub const MAGIC: [u8; 4] = *b"BCMD";

/// Current container format version.
pub const VERSION: u32 = 1;

/// Section alignment in bytes.
pub const SECTION_ALIGN: usize = 64;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 64;

/// Table entry: name string id, first node, node count, padding.
pub const TABLE_ENTRY_SIZE: usize = 16;

/// Node entry: first operand, operand count.
pub const NODE_ENTRY_SIZE: usize = 8;

/// Operand entry: tag byte, 7 padding bytes, u64 payload.
pub const OPERAND_ENTRY_SIZE: usize = 16;

/// Operand tag for string operands (payload is a string id).
pub const OPERAND_TAG_STRING: u8 = 0;

/// Operand tag for integer operands (payload is the value).
pub const OPERAND_TAG_INT: u8 = 1;
