use crate::constants::*;
use crate::test_utils::{ints, module_with, sample_module, strs};
use crate::{Colors, ExtractedMetadata, MetadataExtractor, dump};

fn extract_and_dump(module: &bcinfo_ir::Module) -> String {
    let mut extractor = MetadataExtractor::from_module(module);
    assert!(extractor.extract());
    dump(extractor.metadata(), Colors::OFF)
}

#[test]
fn dump_sample() {
    let res = extract_and_dump(&sample_module());

    insta::assert_snapshot!(res, @r#"
    [module]
    compiler_version = 0
    optimization_level = 0
    float_precision = full
    threadable = true
    debug_info = false

    [export.vars]
    V0 "a"
    V1 "b"

    [export.funcs]
    F0 "f"

    [export.foreach]
    K0 "k0" 0x29  ; in|x|kernel
    K1 "k1" 0x02  ; out

    [pragmas]
    P0 "rs_fp_relaxed" = ""

    [object_slots]
    S0 2
    S1 5
    "#);
}

#[test]
fn dump_empty() {
    let res = dump(&ExtractedMetadata::default(), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    [module]
    compiler_version = 0
    optimization_level = 0
    float_precision = full
    threadable = true
    debug_info = false
    ");
}

#[test]
fn dump_scalars() {
    let module = module_with(&[
        (COMPILER_VERSION_METADATA, ints(&[23])),
        (OPTIMIZATION_LEVEL_METADATA, ints(&[3])),
        (FLOAT_PRECISION_METADATA, ints(&[1])),
        (THREADABLE_METADATA, strs(&["no"])),
        (BUILD_CHECKSUM_METADATA, strs(&["1f2e3d"])),
        (DEBUG_INFO_METADATA, ints(&[0])),
    ]);
    let res = extract_and_dump(&module);

    insta::assert_snapshot!(res, @r#"
    [module]
    compiler_version = 23
    optimization_level = 3
    float_precision = relaxed
    threadable = false
    build_checksum = "1f2e3d"
    debug_info = true
    "#);
}

#[test]
fn dump_signature_with_unknown_bits() {
    let module = module_with(&[
        (EXPORT_FOREACH_NAME_METADATA, strs(&["root", "noop"])),
        (EXPORT_FOREACH_METADATA, ints(&[0x13f, 0])),
    ]);
    let res = extract_and_dump(&module);

    insta::assert_snapshot!(res, @r#"
    [module]
    compiler_version = 0
    optimization_level = 0
    float_precision = full
    threadable = true
    debug_info = false

    [export.foreach]
    K0 "root" 0x13f  ; in|out|usr_data|x|y|kernel|+0x100
    K1 "noop" 0x00  ; none
    "#);
}

#[test]
fn dump_pads_indices() {
    let slots: Vec<u64> = (0..11).collect();
    let module = module_with(&[(OBJECT_SLOT_METADATA, ints(&slots))]);
    let res = extract_and_dump(&module);

    insta::assert_snapshot!(res, @r"
    [module]
    compiler_version = 0
    optimization_level = 0
    float_precision = full
    threadable = true
    debug_info = false

    [object_slots]
    S00 0
    S01 1
    S02 2
    S03 3
    S04 4
    S05 5
    S06 6
    S07 7
    S08 8
    S09 9
    S10 10
    ");
}

#[test]
fn dump_escapes_strings() {
    let module = module_with(&[(EXPORT_VAR_METADATA, strs(&["say \"hi\""]))]);
    let res = extract_and_dump(&module);

    assert!(res.contains(r#"V0 "say \"hi\"""#));
}

#[test]
fn dump_with_colors() {
    let res = dump(&ExtractedMetadata::default(), Colors::ON);

    assert!(res.starts_with("\x1b[1;34m[module]\x1b[0m\n"));
    assert!(res.contains("threadable = true\n"));
}
