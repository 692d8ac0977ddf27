//! Shared fixtures.

use bcinfo_ir::{Module, Operand};

use crate::constants::*;

/// The module from the round-trip scenario: two variables, one function,
/// two kernels, two object slots and a relaxed-precision pragma.
pub fn sample_module() -> Module {
    Module::new()
        .with_table(EXPORT_VAR_METADATA, [vec![Operand::from("a")], vec!["b".into()]])
        .with_table(EXPORT_FUNC_METADATA, [vec![Operand::from("f")]])
        .with_table(
            EXPORT_FOREACH_NAME_METADATA,
            [vec![Operand::from("k0")], vec!["k1".into()]],
        )
        .with_table(
            EXPORT_FOREACH_METADATA,
            [vec![Operand::Int(0x29)], vec![Operand::Int(0x02)]],
        )
        .with_table(OBJECT_SLOT_METADATA, [vec![Operand::Int(2)], vec![Operand::Int(5)]])
        .with_table(
            PRAGMA_METADATA,
            [vec![Operand::from("rs_fp_relaxed"), Operand::from("")]],
        )
}

/// Build a module from `(table, rows)` pairs.
pub fn module_with(tables: &[(&str, Vec<Vec<Operand>>)]) -> Module {
    tables
        .iter()
        .fold(Module::new(), |module, (name, rows)| {
            module.with_table(*name, rows.iter().cloned())
        })
}

pub fn strs(values: &[&str]) -> Vec<Vec<Operand>> {
    values.iter().map(|v| vec![Operand::from(*v)]).collect()
}

pub fn ints(values: &[u64]) -> Vec<Vec<Operand>> {
    values.iter().map(|v| vec![Operand::Int(*v)]).collect()
}

pub fn pairs(values: &[(&str, &str)]) -> Vec<Vec<Operand>> {
    values
        .iter()
        .map(|(k, v)| vec![Operand::from(*k), Operand::from(*v)])
        .collect()
}
