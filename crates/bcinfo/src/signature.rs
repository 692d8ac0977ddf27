//! Foreach signature bit tests.
//!
//! Pure predicates over a raw signature. Any integer is accepted, including
//! ones carrying bits above [`SIGNATURE_MASK`]; those never affect the
//! defined bits.

use crate::constants::{
    SIGNATURE_IN, SIGNATURE_KERNEL, SIGNATURE_MASK, SIGNATURE_OUT, SIGNATURE_USR_DATA,
    SIGNATURE_X, SIGNATURE_Y,
};

/// Whether the kernel has an input buffer parameter.
#[inline]
pub fn has_for_each_signature_in(sig: u32) -> bool {
    sig & SIGNATURE_IN != 0
}

/// Whether the kernel has an output buffer parameter.
#[inline]
pub fn has_for_each_signature_out(sig: u32) -> bool {
    sig & SIGNATURE_OUT != 0
}

/// Whether the kernel has a user-data parameter.
#[inline]
pub fn has_for_each_signature_usr_data(sig: u32) -> bool {
    sig & SIGNATURE_USR_DATA != 0
}

/// Whether the kernel has an X coordinate parameter.
#[inline]
pub fn has_for_each_signature_x(sig: u32) -> bool {
    sig & SIGNATURE_X != 0
}

/// Whether the kernel has a Y coordinate parameter.
#[inline]
pub fn has_for_each_signature_y(sig: u32) -> bool {
    sig & SIGNATURE_Y != 0
}

/// Whether the kernel is pass-by-value.
#[inline]
pub fn has_for_each_signature_kernel(sig: u32) -> bool {
    sig & SIGNATURE_KERNEL != 0
}

/// Render the set bits as `in|out|usr_data|x|y|kernel`.
///
/// Bits outside the defined mask are appended as `+0x..`; an all-zero
/// signature renders as `none`.
pub fn describe_signature(sig: u32) -> String {
    let flags = [
        (has_for_each_signature_in(sig), "in"),
        (has_for_each_signature_out(sig), "out"),
        (has_for_each_signature_usr_data(sig), "usr_data"),
        (has_for_each_signature_x(sig), "x"),
        (has_for_each_signature_y(sig), "y"),
        (has_for_each_signature_kernel(sig), "kernel"),
    ];

    let mut parts: Vec<String> = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| (*name).to_string())
        .collect();

    let unknown = sig & !SIGNATURE_MASK;
    if unknown != 0 {
        parts.push(format!("+{unknown:#x}"));
    }

    if parts.is_empty() {
        return "none".to_string();
    }
    parts.join("|")
}
