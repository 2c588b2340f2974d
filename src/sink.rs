//! Opaque use-sites for values that must survive optimization.

use core::hint::black_box;

/// Consumes `value` without doing anything with it.
///
/// Exported unmangled so harnesses written in C can link against it directly.
/// The body hands the argument to `black_box`, which keeps the optimizer from
/// inferring that the call is free of side effects, even across LTO.
#[unsafe(no_mangle)]
#[inline(never)]
pub extern "C" fn verification_use_u32(value: u32) {
    black_box(value);
}

unsafe extern "C" {
    #[link_name = "verification_use_u32"]
    fn opaque_use_u32(value: u32);
}

/// Opaque function that can be used to prevent a value or path from being optimized
/// away by the Rust compiler.
pub fn verifier_use_u32(value: u32) {
    // Safety: the symbol is defined above with a matching signature and has no preconditions.
    unsafe { opaque_use_u32(value) }
}

/// Split exploration into two cases: one satisfying `x`, one not.
///
/// The `true` branch calls the sink so it cannot be folded away.
pub fn case_split(x: bool) {
    if x {
        // dummy call so the branch keeps an observable effect
        verifier_use_u32(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_values() {
        verifier_use_u32(0);
        verifier_use_u32(42);
        verifier_use_u32(u32::MAX);
    }

    #[test]
    fn exported_symbol_is_callable_directly() {
        let sink: extern "C" fn(u32) = verification_use_u32;
        sink(0);
        sink(u32::MAX);
    }

    #[test]
    fn repeated_calls_leave_no_state() {
        for value in 0..1_000u32 {
            verifier_use_u32(value.wrapping_mul(2_654_435_761));
        }
        verifier_use_u32(7);
        verifier_use_u32(7);
    }

    #[test]
    fn wrapper_and_export_share_one_symbol() {
        let declared = opaque_use_u32 as unsafe extern "C" fn(u32) as usize;
        let defined = verification_use_u32 as extern "C" fn(u32) as usize;
        assert_eq!(declared, defined);
    }

    #[test]
    fn case_split_takes_both_branches() {
        case_split(true);
        case_split(false);
    }
}
