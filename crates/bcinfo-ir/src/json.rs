//! JSON fixture form of a module.
//!
//! A JSON object mapping table name to rows, each row an array of operands:
//!
//! ```json
//! { "#rs_export_var": [["a"], ["b"]], "#rs_object_slots": [[2], [5]] }
//! ```
//!
//! Strings become string operands, non-negative integers integer operands.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::container::ModuleError;
use crate::module::Module;
use crate::operand::Operand;
use crate::source::MetadataSource;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOperand {
    String(String),
    Int(u64),
}

impl From<RawOperand> for Operand {
    fn from(raw: RawOperand) -> Self {
        match raw {
            RawOperand::String(s) => Self::String(s),
            RawOperand::Int(v) => Self::Int(v),
        }
    }
}

type RawRows = Vec<Vec<RawOperand>>;

/// Tables in document order. Unlike a map, keeps repeated keys so they can
/// be rejected.
struct RawTables(Vec<(String, RawRows)>);

impl<'de> Deserialize<'de> for RawTables {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TablesVisitor;

        impl<'de> Visitor<'de> for TablesVisitor {
            type Value = RawTables;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping table names to rows")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawTables, A::Error> {
                let mut tables = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, RawRows>()? {
                    tables.push(entry);
                }
                Ok(RawTables(tables))
            }
        }

        deserializer.deserialize_map(TablesVisitor)
    }
}

impl Module {
    /// Parse a module from its JSON fixture form. Table order is preserved;
    /// a table name given twice is rejected.
    pub fn from_json(json: &str) -> Result<Self, ModuleError> {
        let RawTables(raw) = serde_json::from_str(json)?;

        let mut module = Module::new();
        for (name, rows) in raw {
            if module.named_metadata(&name).is_some() {
                return Err(ModuleError::DuplicateTable(name));
            }
            module.insert_table(name.as_str());
            for row in rows {
                module.add_node(name.as_str(), row.into_iter().map(Into::into).collect());
            }
        }
        Ok(module)
    }
}
