//! Operand, row and table views.

use std::fmt;

/// A single typed operand of a metadata row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    String(String),
    Int(u64),
}

/// Operand type tag, used for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandKind {
    String,
    Int,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Int => f.write_str("integer"),
        }
    }
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Self::String(_) => OperandKind::String,
            Self::Int(_) => OperandKind::Int,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::String(_) => None,
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

/// One row of a named metadata table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataNode {
    operands: Vec<Operand>,
}

impl MetadataNode {
    pub fn new(operands: Vec<Operand>) -> Self {
        Self { operands }
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn operand(&self, idx: usize) -> Option<&Operand> {
        self.operands.get(idx)
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

impl From<Vec<Operand>> for MetadataNode {
    fn from(operands: Vec<Operand>) -> Self {
        Self::new(operands)
    }
}

/// Borrowed view of a named metadata table.
///
/// Row order is significant: sibling tables correlate by position.
#[derive(Clone, Copy, Debug)]
pub struct NamedMetadata<'a> {
    name: &'a str,
    nodes: &'a [MetadataNode],
}

impl<'a> NamedMetadata<'a> {
    pub fn new(name: &'a str, nodes: &'a [MetadataNode]) -> Self {
        Self { name, nodes }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Get a row by index.
    pub fn node(&self, idx: usize) -> Option<&'a MetadataNode> {
        self.nodes.get(idx)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate rows in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'a, MetadataNode> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for NamedMetadata<'a> {
    type Item = &'a MetadataNode;
    type IntoIter = std::slice::Iter<'a, MetadataNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
