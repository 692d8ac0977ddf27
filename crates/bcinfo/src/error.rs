//! Extraction errors.

use std::sync::Arc;

use bcinfo_ir::{ModuleError, OperandKind};

/// Why an extraction was rejected.
///
/// Any of these fails the whole extraction; nothing is partially committed.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("module failed to load")]
    Load(#[from] Arc<ModuleError>),
    #[error("table `{table}` row {row}: expected {expected} operand(s), found {found}")]
    Arity {
        table: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("table `{table}` row {row} operand {operand}: expected {expected}, found {found}")]
    OperandType {
        table: String,
        row: usize,
        operand: usize,
        expected: OperandKind,
        found: OperandKind,
    },
    #[error("table `{table}` row {row}: value {value} does not fit in 32 bits")]
    IntegerOverflow { table: String, row: usize, value: u64 },
    #[error("table `{table}`: expected exactly one row, found {found}")]
    ScalarRowCount { table: String, found: usize },
    #[error("foreach names ({names}) and signatures ({signatures}) differ in count")]
    ForEachCountMismatch { names: usize, signatures: usize },
}
