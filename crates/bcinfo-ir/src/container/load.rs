//! Container loading.

use std::collections::HashSet;

use log::debug;

use super::header::{Header, SectionOffsets, read_u32_le};
use super::{
    HEADER_SIZE, NODE_ENTRY_SIZE, OPERAND_ENTRY_SIZE, OPERAND_TAG_INT, OPERAND_TAG_STRING,
    TABLE_ENTRY_SIZE, VERSION,
};
use crate::module::Module;
use crate::operand::Operand;

/// Module load error.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("invalid magic: expected BCMD")]
    InvalidMagic,
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u32),
    #[error("file too small: {0} bytes (minimum 64)")]
    FileTooSmall(usize),
    #[error("size mismatch: header says {header} bytes, got {actual}")]
    SizeMismatch { header: u32, actual: usize },
    #[error("checksum mismatch: header says {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("sections end at byte {end}, past the {size}-byte file")]
    SectionsOutOfBounds { end: u64, size: usize },
    #[error("string {index}: range {start}..{end} outside the {blob_size}-byte blob")]
    InvalidStringRange {
        index: u32,
        start: u32,
        end: u32,
        blob_size: u32,
    },
    #[error("string {0}: invalid UTF-8")]
    InvalidUtf8(u32),
    #[error("string id {id} out of range ({count} strings)")]
    InvalidStringId { id: u64, count: u32 },
    #[error("table `{table}`: nodes {first}..{first}+{count} out of range")]
    NodeRangeOutOfBounds { table: String, first: u32, count: u32 },
    #[error("node {node}: operands {first}..{first}+{count} out of range")]
    OperandRangeOutOfBounds { node: u32, first: u32, count: u32 },
    #[error("operand {index}: invalid tag {tag}")]
    InvalidOperandTag { index: u32, tag: u8 },
    #[error("duplicate table name `{0}`")]
    DuplicateTable(String),
    #[error("invalid JSON module: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loader configuration.
#[derive(Clone, Debug)]
pub struct LoadConfig {
    pub(crate) verify_checksum: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            verify_checksum: true,
        }
    }
}

impl LoadConfig {
    /// Create a new LoadConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the CRC32 over the section data is checked.
    pub fn verify_checksum(mut self, value: bool) -> Self {
        self.verify_checksum = value;
        self
    }
}

/// Read a little-endian u64 from bytes at the given offset.
#[inline]
fn read_u64_le(bytes: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(buf)
}

impl Module {
    /// Load a module from container bytes, verifying the checksum.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModuleError> {
        Self::from_bytes_with(bytes, &LoadConfig::default())
    }

    /// Load a module from container bytes.
    ///
    /// Every count and index is bounds-checked; malformed input is reported
    /// as a [`ModuleError`], never a panic.
    pub fn from_bytes_with(bytes: &[u8], config: &LoadConfig) -> Result<Self, ModuleError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ModuleError::FileTooSmall(bytes.len()));
        }

        let header = Header::from_bytes(&bytes[..HEADER_SIZE]);

        if !header.validate_magic() {
            return Err(ModuleError::InvalidMagic);
        }
        if !header.validate_version() {
            return Err(ModuleError::UnsupportedVersion(header.version));
        }
        if header.total_size as usize != bytes.len() {
            return Err(ModuleError::SizeMismatch {
                header: header.total_size,
                actual: bytes.len(),
            });
        }
        if config.verify_checksum {
            let actual = crc32fast::hash(&bytes[HEADER_SIZE..]);
            if actual != header.checksum {
                return Err(ModuleError::ChecksumMismatch {
                    expected: header.checksum,
                    actual,
                });
            }
        }

        let offsets = header.compute_offsets();
        if offsets.end > bytes.len() as u64 {
            return Err(ModuleError::SectionsOutOfBounds {
                end: offsets.end,
                size: bytes.len(),
            });
        }

        let reader = Reader {
            bytes,
            header,
            offsets,
        };
        let strings = reader.strings()?;
        let module = reader.module(&strings)?;

        debug!(
            "loaded module: {} tables, {} nodes, {} operands",
            header.tables_count, header.nodes_count, header.operands_count
        );
        Ok(module)
    }
}

/// Section decoding over a buffer whose section extents are already checked.
struct Reader<'a> {
    bytes: &'a [u8],
    header: Header,
    offsets: SectionOffsets,
}

impl Reader<'_> {
    /// Decode the string table. It has count+1 entries (sentinel for the last length).
    fn strings(&self) -> Result<Vec<String>, ModuleError> {
        let blob_start = self.offsets.str_blob as usize;
        let blob_size = self.header.str_blob_size;
        let blob = &self.bytes[blob_start..blob_start + blob_size as usize];
        let table = self.offsets.str_table as usize;

        (0..self.header.str_table_count)
            .map(|index| {
                let at = table + index as usize * 4;
                let start = read_u32_le(self.bytes, at);
                let end = read_u32_le(self.bytes, at + 4);
                if start > end || end > blob_size {
                    return Err(ModuleError::InvalidStringRange {
                        index,
                        start,
                        end,
                        blob_size,
                    });
                }
                std::str::from_utf8(&blob[start as usize..end as usize])
                    .map(str::to_owned)
                    .map_err(|_| ModuleError::InvalidUtf8(index))
            })
            .collect()
    }

    fn string<'s>(&self, strings: &'s [String], id: u64) -> Result<&'s str, ModuleError> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| strings.get(idx))
            .map(String::as_str)
            .ok_or(ModuleError::InvalidStringId {
                id,
                count: self.header.str_table_count,
            })
    }

    fn operand(&self, strings: &[String], index: u32) -> Result<Operand, ModuleError> {
        let at = self.offsets.operands as usize + index as usize * OPERAND_ENTRY_SIZE;
        let tag = self.bytes[at];
        let payload = read_u64_le(self.bytes, at + 8);
        match tag {
            OPERAND_TAG_STRING => Ok(Operand::String(
                self.string(strings, payload)?.to_owned(),
            )),
            OPERAND_TAG_INT => Ok(Operand::Int(payload)),
            _ => Err(ModuleError::InvalidOperandTag { index, tag }),
        }
    }

    fn node_operands(&self, strings: &[String], node: u32) -> Result<Vec<Operand>, ModuleError> {
        let at = self.offsets.nodes as usize + node as usize * NODE_ENTRY_SIZE;
        let first = read_u32_le(self.bytes, at);
        let count = read_u32_le(self.bytes, at + 4);
        let in_range =
            u64::from(first) + u64::from(count) <= u64::from(self.header.operands_count);
        if !in_range {
            return Err(ModuleError::OperandRangeOutOfBounds { node, first, count });
        }
        (first..first + count)
            .map(|index| self.operand(strings, index))
            .collect()
    }

    fn module(&self, strings: &[String]) -> Result<Module, ModuleError> {
        let mut module = Module::new();
        let mut seen = HashSet::new();

        for table_idx in 0..self.header.tables_count {
            let at = self.offsets.tables as usize + table_idx as usize * TABLE_ENTRY_SIZE;
            let name = self.string(strings, u64::from(read_u32_le(self.bytes, at)))?;
            let first = read_u32_le(self.bytes, at + 4);
            let count = read_u32_le(self.bytes, at + 8);

            if !seen.insert(name) {
                return Err(ModuleError::DuplicateTable(name.to_owned()));
            }
            let in_range =
                u64::from(first) + u64::from(count) <= u64::from(self.header.nodes_count);
            if !in_range {
                return Err(ModuleError::NodeRangeOutOfBounds {
                    table: name.to_owned(),
                    first,
                    count,
                });
            }

            module.insert_table(name);
            for node in first..first + count {
                let operands = self.node_operands(strings, node)?;
                module.add_node(name, operands);
            }
        }

        Ok(module)
    }
}
