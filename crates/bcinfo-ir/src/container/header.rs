//! Container header (64 bytes).

use super::{
    HEADER_SIZE, MAGIC, NODE_ENTRY_SIZE, OPERAND_ENTRY_SIZE, SECTION_ALIGN, TABLE_ENTRY_SIZE,
    VERSION,
};

/// File header - first 64 bytes of the container.
///
/// - 0-19: identity and sizes (magic, version, checksum, total_size, str_blob_size)
/// - 20-35: counts (4 × u32), order matches section order
/// - 36-63: reserved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Magic bytes: b"BCMD"
    pub magic: [u8; 4],
    /// Format version (currently 1)
    pub version: u32,
    /// CRC32 checksum of everything after the header
    pub checksum: u32,
    /// Total file size in bytes
    pub total_size: u32,
    /// Size of the string blob in bytes.
    pub str_blob_size: u32,

    pub str_table_count: u32,
    pub tables_count: u32,
    pub nodes_count: u32,
    pub operands_count: u32,

    pub _reserved: [u8; 28],
}

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            checksum: 0,
            total_size: 0,
            str_blob_size: 0,
            str_table_count: 0,
            tables_count: 0,
            nodes_count: 0,
            operands_count: 0,
            _reserved: [0; 28],
        }
    }
}

/// Section offsets derived from header counts.
///
/// Kept as u64 so hostile counts cannot overflow the arithmetic; the loader
/// bounds-checks `end` against the buffer before slicing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionOffsets {
    pub str_blob: u64,
    pub str_table: u64,
    pub tables: u64,
    pub nodes: u64,
    pub operands: u64,
    /// One past the last section, rounded up to the section alignment.
    pub end: u64,
}

/// Read a little-endian u32 from bytes at the given offset.
#[inline]
pub(super) fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl Header {
    /// Decode header from 64 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= HEADER_SIZE, "header too short");

        let mut reserved = [0u8; 28];
        reserved.copy_from_slice(&bytes[36..64]);

        Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: read_u32_le(bytes, 4),
            checksum: read_u32_le(bytes, 8),
            total_size: read_u32_le(bytes, 12),
            str_blob_size: read_u32_le(bytes, 16),
            str_table_count: read_u32_le(bytes, 20),
            tables_count: read_u32_le(bytes, 24),
            nodes_count: read_u32_le(bytes, 28),
            operands_count: read_u32_le(bytes, 32),
            _reserved: reserved,
        }
    }

    /// Encode header to 64 bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.checksum.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.total_size.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.str_blob_size.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.str_table_count.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.tables_count.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.nodes_count.to_le_bytes());
        bytes[32..36].copy_from_slice(&self.operands_count.to_le_bytes());
        bytes[36..64].copy_from_slice(&self._reserved);
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }

    /// Compute section offsets from counts and blob size.
    pub fn compute_offsets(&self) -> SectionOffsets {
        let align = SECTION_ALIGN as u64;

        let str_blob = HEADER_SIZE as u64;
        let str_table = align_up(str_blob + u64::from(self.str_blob_size), align);
        let str_table_size = (u64::from(self.str_table_count) + 1) * 4;

        let tables = align_up(str_table + str_table_size, align);
        let tables_size = u64::from(self.tables_count) * TABLE_ENTRY_SIZE as u64;

        let nodes = align_up(tables + tables_size, align);
        let nodes_size = u64::from(self.nodes_count) * NODE_ENTRY_SIZE as u64;

        let operands = align_up(nodes + nodes_size, align);
        let operands_size = u64::from(self.operands_count) * OPERAND_ENTRY_SIZE as u64;

        let end = align_up(operands + operands_size, align);

        SectionOffsets {
            str_blob,
            str_table,
            tables,
            nodes,
            operands,
            end,
        }
    }
}

/// Round up to the next multiple of `align`.
fn align_up(value: u64, align: u64) -> u64 {
    (value + align - 1) & !(align - 1)
}
