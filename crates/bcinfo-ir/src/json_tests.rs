use indoc::indoc;

use crate::{MetadataSource, Module, ModuleError, Operand};

#[test]
fn parse_tables_in_order() {
    let json = indoc! {r##"
        {
            "#rs_export_var": [["a"], ["b"]],
            "#rs_export_foreach": [[41], [2]],
            "#pragma": [["rs_fp_relaxed", ""]]
        }
    "##};

    let module = Module::from_json(json).unwrap();
    let names: Vec<_> = module.table_names().collect();
    assert_eq!(names, ["#rs_export_var", "#rs_export_foreach", "#pragma"]);

    let sigs = module.named_metadata("#rs_export_foreach").unwrap();
    assert_eq!(sigs.node(0).unwrap().operands(), &[Operand::Int(41)]);

    let pragmas = module.named_metadata("#pragma").unwrap();
    assert_eq!(
        pragmas.node(0).unwrap().operands(),
        &[Operand::from("rs_fp_relaxed"), Operand::from("")]
    );
}

#[test]
fn empty_table_is_present() {
    let module = Module::from_json(r##"{ "#rs_object_slots": [] }"##).unwrap();
    let table = module.named_metadata("#rs_object_slots").unwrap();
    assert!(table.is_empty());
}

#[test]
fn mixed_operand_row() {
    let module = Module::from_json(r#"{ "t": [["k", 3, "v"]] }"#).unwrap();
    let row = module.named_metadata("t").unwrap().node(0).unwrap().clone();
    assert_eq!(row.len(), 3);
    assert_eq!(row.operand(1), Some(&Operand::Int(3)));
}

#[test]
fn negative_integer_rejected() {
    let err = Module::from_json(r#"{ "t": [[-1]] }"#).unwrap_err();
    assert!(matches!(err, ModuleError::Json(_)));
}

#[test]
fn float_rejected() {
    let err = Module::from_json(r#"{ "t": [[1.5]] }"#).unwrap_err();
    assert!(matches!(err, ModuleError::Json(_)));
}

#[test]
fn non_object_rejected() {
    let err = Module::from_json("[]").unwrap_err();
    assert!(err.to_string().starts_with("invalid JSON module:"));
}

#[test]
fn json_and_container_agree() {
    let module = Module::from_json(r#"{ "a": [["x", 1]], "b": [] }"#).unwrap();
    let decoded = Module::from_bytes(&module.to_bytes()).unwrap();
    assert_eq!(decoded, module);
}

#[test]
fn duplicate_table_rejected() {
    let json = indoc! {r##"
        {
            "#rs_export_var": [["a"]],
            "#pragma": [],
            "#rs_export_var": [["b"]]
        }
    "##};

    let err = Module::from_json(json).unwrap_err();
    assert!(matches!(err, ModuleError::DuplicateTable(ref name) if name == "#rs_export_var"));
}
