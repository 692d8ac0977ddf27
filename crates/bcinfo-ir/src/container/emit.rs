//! Container emission.

use std::collections::HashMap;

use super::header::Header;
use super::{HEADER_SIZE, OPERAND_TAG_INT, OPERAND_TAG_STRING, SECTION_ALIGN};
use crate::module::Module;
use crate::operand::Operand;

/// Deduplicating string table, emitted as blob + offsets.
#[derive(Debug, Default)]
struct StringTableBuilder {
    map: HashMap<String, u32>,
    strings: Vec<String>,
}

impl StringTableBuilder {
    fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.map.get(s) {
            return id;
        }

        let id = self.strings.len() as u32;
        self.strings.push(s.to_owned());
        self.map.insert(s.to_owned(), id);
        id
    }

    fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns (concatenated UTF-8 bytes, offset table with trailing sentinel).
    fn emit(&self) -> (Vec<u8>, Vec<u8>) {
        let mut blob = Vec::new();
        let mut table = Vec::with_capacity((self.strings.len() + 1) * 4);

        for s in &self.strings {
            table.extend_from_slice(&(blob.len() as u32).to_le_bytes());
            blob.extend_from_slice(s.as_bytes());
        }
        table.extend_from_slice(&(blob.len() as u32).to_le_bytes());

        (blob, table)
    }
}

impl Module {
    /// Serialize into the binary container format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut strings = StringTableBuilder::default();
        let mut tables_bytes = Vec::new();
        let mut nodes_bytes = Vec::new();
        let mut operands_bytes = Vec::new();
        let mut nodes_count = 0u32;
        let mut operands_count = 0u32;

        for table in self.tables() {
            let name = strings.intern(table.name());
            tables_bytes.extend_from_slice(&name.to_le_bytes());
            tables_bytes.extend_from_slice(&nodes_count.to_le_bytes());
            tables_bytes.extend_from_slice(&(table.len() as u32).to_le_bytes());
            tables_bytes.extend_from_slice(&0u32.to_le_bytes());

            for node in table {
                nodes_bytes.extend_from_slice(&operands_count.to_le_bytes());
                nodes_bytes.extend_from_slice(&(node.len() as u32).to_le_bytes());
                nodes_count += 1;

                for operand in node.operands() {
                    let (tag, payload) = match operand {
                        Operand::String(s) => {
                            (OPERAND_TAG_STRING, u64::from(strings.intern(s)))
                        }
                        Operand::Int(v) => (OPERAND_TAG_INT, *v),
                    };
                    operands_bytes.push(tag);
                    operands_bytes.extend_from_slice(&[0u8; 7]);
                    operands_bytes.extend_from_slice(&payload.to_le_bytes());
                    operands_count += 1;
                }
            }
        }

        let (str_blob, str_table) = strings.emit();

        let mut output = vec![0u8; HEADER_SIZE];
        let str_blob_offset = emit_section(&mut output, &str_blob);
        let str_table_offset = emit_section(&mut output, &str_table);
        let tables_offset = emit_section(&mut output, &tables_bytes);
        let nodes_offset = emit_section(&mut output, &nodes_bytes);
        let operands_offset = emit_section(&mut output, &operands_bytes);
        pad_to_section(&mut output);

        let mut header = Header {
            total_size: output.len() as u32,
            str_blob_size: str_blob.len() as u32,
            str_table_count: strings.len() as u32,
            tables_count: self.len() as u32,
            nodes_count,
            operands_count,
            ..Default::default()
        };

        // The loader derives offsets from counts; emission must agree.
        let offsets = header.compute_offsets();
        debug_assert_eq!(offsets.str_blob, u64::from(str_blob_offset));
        debug_assert_eq!(offsets.str_table, u64::from(str_table_offset));
        debug_assert_eq!(offsets.tables, u64::from(tables_offset));
        debug_assert_eq!(offsets.nodes, u64::from(nodes_offset));
        debug_assert_eq!(offsets.operands, u64::from(operands_offset));
        debug_assert_eq!(offsets.end, output.len() as u64);

        header.checksum = crc32fast::hash(&output[HEADER_SIZE..]);
        output[..HEADER_SIZE].copy_from_slice(&header.to_bytes());

        output
    }
}

fn pad_to_section(buf: &mut Vec<u8>) {
    let rem = buf.len() % SECTION_ALIGN;
    if rem != 0 {
        let padding = SECTION_ALIGN - rem;
        buf.resize(buf.len() + padding, 0);
    }
}

fn emit_section(output: &mut Vec<u8>, data: &[u8]) -> u32 {
    pad_to_section(output);
    let offset = output.len() as u32;
    output.extend_from_slice(data);
    offset
}
