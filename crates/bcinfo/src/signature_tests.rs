use crate::constants::SIGNATURE_MASK;
use crate::signature::*;

fn flags(sig: u32) -> [bool; 6] {
    [
        has_for_each_signature_in(sig),
        has_for_each_signature_out(sig),
        has_for_each_signature_usr_data(sig),
        has_for_each_signature_x(sig),
        has_for_each_signature_y(sig),
        has_for_each_signature_kernel(sig),
    ]
}

#[test]
fn input_only() {
    assert_eq!(flags(0x01), [true, false, false, false, false, false]);
}

#[test]
fn every_bit() {
    assert_eq!(flags(0x3F), [true; 6]);
}

#[test]
fn no_bits() {
    assert_eq!(flags(0x00), [false; 6]);
}

#[test]
fn each_bit_is_independent() {
    for bit in 0..6 {
        let expected: [bool; 6] = std::array::from_fn(|i| i == bit);
        assert_eq!(flags(1 << bit), expected, "bit {bit}");
    }
}

#[test]
fn upper_bits_are_ignored() {
    assert_eq!(flags(0xFFFF_FFC0), [false; 6]);
    assert_eq!(flags(0x8000_0029), flags(0x29));
    assert_eq!(flags(u32::MAX), [true; 6]);
    assert_eq!(u32::MAX & SIGNATURE_MASK, 0x3F);
}

#[test]
fn kernel_scenario() {
    let sig = 0x29;
    assert!(has_for_each_signature_kernel(sig));
    assert!(has_for_each_signature_in(sig));
    assert!(has_for_each_signature_x(sig));
    assert!(!has_for_each_signature_out(sig));
    assert!(!has_for_each_signature_y(sig));
}

#[test]
fn describe() {
    assert_eq!(describe_signature(0x00), "none");
    assert_eq!(describe_signature(0x29), "in|x|kernel");
    assert_eq!(describe_signature(0x3F), "in|out|usr_data|x|y|kernel");
    assert_eq!(describe_signature(0x40), "+0x40");
    assert_eq!(describe_signature(0x102), "out|+0x100");
}
