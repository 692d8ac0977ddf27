//! Human-readable dump of extracted metadata.

use std::fmt::Write as _;

use crate::colors::Colors;
use crate::metadata::ExtractedMetadata;
use crate::signature::describe_signature;

/// Render an extraction result as sectioned text.
///
/// `[module]` is always present; list sections are omitted when empty.
pub fn dump(metadata: &ExtractedMetadata, colors: Colors) -> String {
    let mut out = String::new();

    dump_module(&mut out, metadata, colors);
    dump_names(&mut out, "export.vars", 'V', metadata.export_var_names(), colors);
    dump_names(&mut out, "export.funcs", 'F', metadata.export_func_names(), colors);
    dump_for_each(&mut out, metadata, colors);
    dump_pragmas(&mut out, metadata, colors);
    dump_object_slots(&mut out, metadata, colors);

    out
}

/// Calculate the minimum width needed to display numbers up to `count - 1`.
fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).ilog10() as usize + 1
    }
}

fn section(out: &mut String, name: &str, c: Colors) {
    writeln!(out, "{}", c.section(format_args!("[{name}]"))).unwrap();
}

fn dump_module(out: &mut String, metadata: &ExtractedMetadata, c: Colors) {
    section(out, "module", c);
    writeln!(out, "compiler_version = {}", metadata.compiler_version()).unwrap();
    writeln!(out, "optimization_level = {}", metadata.optimization_level()).unwrap();
    writeln!(out, "float_precision = {}", metadata.float_precision()).unwrap();
    writeln!(out, "threadable = {}", metadata.is_threadable()).unwrap();
    if let Some(checksum) = metadata.build_checksum() {
        writeln!(out, "build_checksum = {}", c.value(format_args!("{checksum:?}"))).unwrap();
    }
    writeln!(out, "debug_info = {}", metadata.has_debug_info()).unwrap();
    out.push('\n');
}

fn dump_names(out: &mut String, name: &str, prefix: char, names: &[String], c: Colors) {
    if names.is_empty() {
        return;
    }

    let w = width_for_count(names.len());
    section(out, name, c);
    for (i, s) in names.iter().enumerate() {
        writeln!(
            out,
            "{} {}",
            c.label(format_args!("{prefix}{i:0w$}")),
            c.value(format_args!("{s:?}")),
        )
        .unwrap();
    }
    out.push('\n');
}

fn dump_for_each(out: &mut String, metadata: &ExtractedMetadata, c: Colors) {
    let count = metadata.export_for_each_signature_count();
    if count == 0 {
        return;
    }

    let w = width_for_count(count);
    section(out, "export.foreach", c);
    for (i, (name, sig)) in metadata.export_for_each().enumerate() {
        let flags = describe_signature(sig);
        writeln!(
            out,
            "{} {} {sig:#04x}  {}",
            c.label(format_args!("K{i:0w$}")),
            c.value(format_args!("{name:?}")),
            c.label(format_args!("; {flags}")),
        )
        .unwrap();
    }
    out.push('\n');
}

fn dump_pragmas(out: &mut String, metadata: &ExtractedMetadata, c: Colors) {
    let count = metadata.pragma_count();
    if count == 0 {
        return;
    }

    let w = width_for_count(count);
    section(out, "pragmas", c);
    for (i, (key, value)) in metadata.pragmas().enumerate() {
        writeln!(
            out,
            "{} {} = {}",
            c.label(format_args!("P{i:0w$}")),
            c.value(format_args!("{key:?}")),
            c.value(format_args!("{value:?}")),
        )
        .unwrap();
    }
    out.push('\n');
}

fn dump_object_slots(out: &mut String, metadata: &ExtractedMetadata, c: Colors) {
    let slots = metadata.object_slots();
    if slots.is_empty() {
        return;
    }

    let w = width_for_count(slots.len());
    section(out, "object_slots", c);
    for (i, slot) in slots.iter().enumerate() {
        writeln!(out, "{} {slot}", c.label(format_args!("S{i:0w$}"))).unwrap();
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::width_for_count;

    #[test]
    fn index_width() {
        assert_eq!(width_for_count(0), 1);
        assert_eq!(width_for_count(1), 1);
        assert_eq!(width_for_count(10), 1);
        assert_eq!(width_for_count(11), 2);
        assert_eq!(width_for_count(101), 3);
    }
}
