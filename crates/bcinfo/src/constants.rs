//! Reserved table names and signature bits.
//!
//! Both are a versioned contract with the producing compiler: renaming a
//! table or changing its row shape is a breaking change.

/// Exported global variable names, one string per row.
pub const EXPORT_VAR_METADATA: &str = "#rs_export_var";

/// Exported function names, one string per row.
pub const EXPORT_FUNC_METADATA: &str = "#rs_export_func";

/// Foreach kernel names, one string per row. Positionally paired with
/// [`EXPORT_FOREACH_METADATA`].
pub const EXPORT_FOREACH_NAME_METADATA: &str = "#rs_export_foreach_name";

/// Foreach kernel signatures, one integer per row.
pub const EXPORT_FOREACH_METADATA: &str = "#rs_export_foreach";

/// Pragmas, a (key, value) string pair per row.
pub const PRAGMA_METADATA: &str = "#pragma";

/// Object slots released on teardown, one integer per row.
pub const OBJECT_SLOT_METADATA: &str = "#rs_object_slots";

/// Compiler version, single integer.
pub const COMPILER_VERSION_METADATA: &str = "#rs_compiler_version";

/// Optimization level, single integer.
pub const OPTIMIZATION_LEVEL_METADATA: &str = "#rs_optimization_level";

/// Float precision, single integer (0 = full, 1 = relaxed).
pub const FLOAT_PRECISION_METADATA: &str = "#rs_float_precision";

/// Threadable flag, single string `"yes"` or `"no"`.
pub const THREADABLE_METADATA: &str = "#rs_is_threadable";

/// Build checksum, single string.
pub const BUILD_CHECKSUM_METADATA: &str = "#rs_build_checksum";

/// Debug compile units. Only presence is observed.
pub const DEBUG_INFO_METADATA: &str = "llvm.dbg.cu";

/// All reserved table names, in extraction order.
pub const RESERVED_METADATA: [&str; 12] = [
    COMPILER_VERSION_METADATA,
    OPTIMIZATION_LEVEL_METADATA,
    FLOAT_PRECISION_METADATA,
    EXPORT_VAR_METADATA,
    EXPORT_FUNC_METADATA,
    EXPORT_FOREACH_NAME_METADATA,
    EXPORT_FOREACH_METADATA,
    PRAGMA_METADATA,
    OBJECT_SLOT_METADATA,
    THREADABLE_METADATA,
    BUILD_CHECKSUM_METADATA,
    DEBUG_INFO_METADATA,
];

/// Kernel takes an input buffer.
pub const SIGNATURE_IN: u32 = 0x01;

/// Kernel takes an output buffer.
pub const SIGNATURE_OUT: u32 = 0x02;

/// Kernel takes a user-data parameter.
pub const SIGNATURE_USR_DATA: u32 = 0x04;

/// Kernel takes an X coordinate.
pub const SIGNATURE_X: u32 = 0x08;

/// Kernel takes a Y coordinate.
pub const SIGNATURE_Y: u32 = 0x10;

/// Pass-by-value kernel (as opposed to the pointer-based legacy form).
pub const SIGNATURE_KERNEL: u32 = 0x20;

/// Every bit with a defined meaning. Bits above it are carried verbatim.
pub const SIGNATURE_MASK: u32 = 0x3F;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_are_unique() {
        let mut names = RESERVED_METADATA.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RESERVED_METADATA.len());
    }

    #[test]
    fn signature_bits_fill_mask() {
        let bits = [
            SIGNATURE_IN,
            SIGNATURE_OUT,
            SIGNATURE_USR_DATA,
            SIGNATURE_X,
            SIGNATURE_Y,
            SIGNATURE_KERNEL,
        ];
        assert_eq!(bits.iter().fold(0, |acc, bit| acc | bit), SIGNATURE_MASK);
        assert!(bits.iter().all(|bit| bit.is_power_of_two()));
    }
}
