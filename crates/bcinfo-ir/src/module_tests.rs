use crate::{MetadataNode, MetadataSource, Module, Operand, OperandKind};

#[test]
fn missing_table_is_none() {
    let module = Module::new();
    assert!(module.named_metadata("#pragma").is_none());
    assert!(module.is_empty());
}

#[test]
fn add_node_appends_in_order() {
    let mut module = Module::new();
    module.add_node("#rs_export_var", vec!["a".into()]);
    module.add_node("#rs_export_var", vec!["b".into()]);

    let table = module.named_metadata("#rs_export_var").unwrap();
    assert_eq!(table.name(), "#rs_export_var");
    assert_eq!(table.len(), 2);
    assert_eq!(table.node(0).unwrap().operands(), &[Operand::from("a")]);
    assert_eq!(table.node(1).unwrap().operands(), &[Operand::from("b")]);
    assert!(table.node(2).is_none());
}

#[test]
fn insert_table_declares_empty_table() {
    let mut module = Module::new();
    module.insert_table("#pragma");

    let table = module.named_metadata("#pragma").unwrap();
    assert!(table.is_empty());
    assert_eq!(module.len(), 1);
}

#[test]
fn with_table_preserves_declaration_order() {
    let module = Module::new()
        .with_table("b", [vec![Operand::Int(1)]])
        .with_table("a", [vec![Operand::Int(2)]]);

    let names: Vec<_> = module.table_names().collect();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn remove_table() {
    let mut module = Module::new().with_table("x", [vec![Operand::Int(7)]]);
    let rows = module.remove_table("x").unwrap();

    assert_eq!(rows, vec![MetadataNode::new(vec![Operand::Int(7)])]);
    assert!(module.named_metadata("x").is_none());
}

#[test]
fn borrowed_and_boxed_sources() {
    let module = Module::new().with_table("t", [vec![Operand::Int(1)]]);

    let by_ref: &dyn MetadataSource = &module;
    assert_eq!(by_ref.named_metadata("t").unwrap().len(), 1);

    let boxed: Box<dyn MetadataSource> = Box::new(module.clone());
    assert_eq!(boxed.named_metadata("t").unwrap().len(), 1);
}

#[test]
fn operand_accessors() {
    let s = Operand::from("key");
    let i = Operand::from(42u32);

    assert_eq!(s.kind(), OperandKind::String);
    assert_eq!(s.as_str(), Some("key"));
    assert_eq!(s.as_int(), None);

    assert_eq!(i.kind(), OperandKind::Int);
    assert_eq!(i.as_int(), Some(42));
    assert_eq!(i.as_str(), None);

    assert_eq!(OperandKind::String.to_string(), "string");
    assert_eq!(OperandKind::Int.to_string(), "integer");
}

#[test]
fn u32_operand_widens() {
    assert_eq!(Operand::from(u32::MAX), Operand::Int(0xFFFF_FFFF));
    assert_eq!(Operand::from(u32::MAX).as_int(), Some(u64::from(u32::MAX)));
}
