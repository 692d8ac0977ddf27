//! Per-table decoders.
//!
//! Each decoder validates every row it reads and rejects the whole table on
//! the first malformed one. A missing table decodes to its default.
//!
//! The threadable flag, build checksum and debug-info tables are advisory:
//! a malformed one is logged and decodes to its default instead of failing.

use bcinfo_ir::{MetadataNode, NamedMetadata, Operand, OperandKind};
use log::{debug, warn};

use crate::error::ExtractError;
use crate::metadata::FloatPrecision;

type Result<T> = std::result::Result<T, ExtractError>;

/// Check a row has exactly `expected` operands.
fn expect_arity<'a>(
    table: &NamedMetadata<'_>,
    row: usize,
    node: &'a MetadataNode,
    expected: usize,
) -> Result<&'a [Operand]> {
    if node.len() != expected {
        return Err(ExtractError::Arity {
            table: table.name().to_owned(),
            row,
            expected,
            found: node.len(),
        });
    }
    Ok(node.operands())
}

fn expect_string<'a>(
    table: &NamedMetadata<'_>,
    row: usize,
    operand: usize,
    value: &'a Operand,
) -> Result<&'a str> {
    value.as_str().ok_or_else(|| ExtractError::OperandType {
        table: table.name().to_owned(),
        row,
        operand,
        expected: OperandKind::String,
        found: value.kind(),
    })
}

fn expect_u32(
    table: &NamedMetadata<'_>,
    row: usize,
    operand: usize,
    value: &Operand,
) -> Result<u32> {
    let Some(wide) = value.as_int() else {
        return Err(ExtractError::OperandType {
            table: table.name().to_owned(),
            row,
            operand,
            expected: OperandKind::Int,
            found: value.kind(),
        });
    };
    u32::try_from(wide).map_err(|_| ExtractError::IntegerOverflow {
        table: table.name().to_owned(),
        row,
        value: wide,
    })
}

/// Decode a table whose rows are each a single operand.
fn single_operand_rows<T>(
    table: Option<NamedMetadata<'_>>,
    mut decode: impl FnMut(&NamedMetadata<'_>, usize, &Operand) -> Result<T>,
) -> Result<Vec<T>> {
    let Some(table) = table else {
        return Ok(Vec::new());
    };

    let values = table
        .iter()
        .enumerate()
        .map(|(row, node)| {
            let operands = expect_arity(&table, row, node, 1)?;
            decode(&table, row, &operands[0])
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("decoded `{}`: {} rows", table.name(), values.len());
    Ok(values)
}

/// Rows of one string each (exported variables, exported functions).
pub(crate) fn string_list(table: Option<NamedMetadata<'_>>) -> Result<Vec<String>> {
    single_operand_rows(table, |table, row, value| {
        expect_string(table, row, 0, value).map(str::to_owned)
    })
}

/// Rows of one 32-bit integer each (object slots).
pub(crate) fn integer_list(table: Option<NamedMetadata<'_>>) -> Result<Vec<u32>> {
    single_operand_rows(table, |table, row, value| expect_u32(table, row, 0, value))
}

/// Foreach names and signatures, decoded independently then paired by position.
///
/// Signature bits above the defined mask are kept as declared.
pub(crate) fn for_each(
    names: Option<NamedMetadata<'_>>,
    signatures: Option<NamedMetadata<'_>>,
) -> Result<(Vec<String>, Vec<u32>)> {
    let names = string_list(names)?;
    let signatures = integer_list(signatures)?;

    if names.len() != signatures.len() {
        return Err(ExtractError::ForEachCountMismatch {
            names: names.len(),
            signatures: signatures.len(),
        });
    }
    Ok((names, signatures))
}

/// Pragma rows: a (key, value) string pair each. Order and duplicates kept.
pub(crate) fn pragmas(table: Option<NamedMetadata<'_>>) -> Result<(Vec<String>, Vec<String>)> {
    let Some(table) = table else {
        return Ok((Vec::new(), Vec::new()));
    };

    let mut keys = Vec::with_capacity(table.len());
    let mut values = Vec::with_capacity(table.len());
    for (row, node) in table.iter().enumerate() {
        let operands = expect_arity(&table, row, node, 2)?;
        keys.push(expect_string(&table, row, 0, &operands[0])?.to_owned());
        values.push(expect_string(&table, row, 1, &operands[1])?.to_owned());
    }

    debug!("decoded `{}`: {} pragmas", table.name(), keys.len());
    Ok((keys, values))
}

/// The operand of a single-row, single-operand table, if the table exists.
fn scalar_operand<'a>(
    table: Option<NamedMetadata<'a>>,
) -> Result<Option<(NamedMetadata<'a>, &'a Operand)>> {
    let Some(table) = table else {
        return Ok(None);
    };
    let Some(node) = table.node(0).filter(|_| table.len() == 1) else {
        return Err(ExtractError::ScalarRowCount {
            table: table.name().to_owned(),
            found: table.len(),
        });
    };
    let operands = expect_arity(&table, 0, node, 1)?;
    Ok(Some((table, &operands[0])))
}

/// Single integer (compiler version, optimization level). Absent is 0.
pub(crate) fn scalar_u32(table: Option<NamedMetadata<'_>>) -> Result<u32> {
    match scalar_operand(table)? {
        Some((table, value)) => expect_u32(&table, 0, 0, value),
        None => Ok(0),
    }
}

/// Single precision value. Absent or unrecognized is [`FloatPrecision::Full`].
pub(crate) fn float_precision(table: Option<NamedMetadata<'_>>) -> Result<FloatPrecision> {
    let Some((table, value)) = scalar_operand(table)? else {
        return Ok(FloatPrecision::Full);
    };
    let raw = expect_u32(&table, 0, 0, value)?;
    Ok(FloatPrecision::from_u32(raw).unwrap_or_else(|| {
        warn!("`{}`: unrecognized precision {raw}, using full", table.name());
        FloatPrecision::Full
    }))
}

/// Log a rejected advisory table and fall back to its default.
fn advisory<T>(decoded: Result<T>, default: T) -> T {
    decoded.unwrap_or_else(|err| {
        warn!("ignoring advisory table: {err}");
        default
    })
}

fn threadable_flag(table: Option<NamedMetadata<'_>>) -> Result<bool> {
    let Some((table, value)) = scalar_operand(table)? else {
        return Ok(true);
    };
    match expect_string(&table, 0, 0, value)? {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => {
            warn!("`{}`: unrecognized flag `{other}`, assuming threadable", table.name());
            Ok(true)
        }
    }
}

/// Single `"yes"`/`"no"` string. Absent or malformed means threadable.
pub(crate) fn threadable(table: Option<NamedMetadata<'_>>) -> bool {
    advisory(threadable_flag(table), true)
}

fn checksum_string(table: Option<NamedMetadata<'_>>) -> Result<Option<String>> {
    match scalar_operand(table)? {
        Some((table, value)) => expect_string(&table, 0, 0, value).map(|s| Some(s.to_owned())),
        None => Ok(None),
    }
}

/// Single string. Absent or malformed is `None`.
pub(crate) fn build_checksum(table: Option<NamedMetadata<'_>>) -> Option<String> {
    advisory(checksum_string(table), None)
}

/// Debug info counts as present when its table has at least one row.
pub(crate) fn has_rows(table: Option<NamedMetadata<'_>>) -> bool {
    table.is_some_and(|table| !table.is_empty())
}
