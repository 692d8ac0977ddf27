//! In-memory module holding named metadata tables.

use indexmap::IndexMap;

use crate::operand::{MetadataNode, NamedMetadata, Operand};
use crate::source::MetadataSource;

/// A parsed module: named metadata tables in declaration order.
///
/// Table names are unique. Loading from the binary container goes through
/// [`Module::from_bytes`], test fixtures through [`Module::from_json`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module {
    tables: IndexMap<String, Vec<MetadataNode>>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a table without rows. No-op if it already exists.
    pub fn insert_table(&mut self, name: impl Into<String>) {
        self.tables.entry(name.into()).or_default();
    }

    /// Append a row to a table, creating the table on first use.
    pub fn add_node(&mut self, name: impl Into<String>, operands: Vec<Operand>) {
        self.tables
            .entry(name.into())
            .or_default()
            .push(MetadataNode::new(operands));
    }

    /// Builder form: append all `rows` to table `name`.
    pub fn with_table<I, R>(mut self, name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<MetadataNode>,
    {
        let table = self.tables.entry(name.into()).or_default();
        table.extend(rows.into_iter().map(Into::into));
        self
    }

    /// Drop a table, returning its rows.
    pub fn remove_table(&mut self, name: &str) -> Option<Vec<MetadataNode>> {
        self.tables.shift_remove(name)
    }

    /// Table names in declaration order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Iterate tables in declaration order.
    pub fn tables(&self) -> impl Iterator<Item = NamedMetadata<'_>> {
        self.tables
            .iter()
            .map(|(name, nodes)| NamedMetadata::new(name, nodes))
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl MetadataSource for Module {
    fn named_metadata(&self, name: &str) -> Option<NamedMetadata<'_>> {
        self.tables
            .get_key_value(name)
            .map(|(name, nodes)| NamedMetadata::new(name, nodes))
    }
}
