//! A const-friendly integer conversion library with strict and checked variants.
//!
//! Only the conversions between pointer-sized integers and `u64` are provided, as those are the
//! only conversions whose lossiness depends on the target.
#![no_std]

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("only 32-bit and 64-bit targets are supported");

/// Safely converts `value` to a `u64` relying on compile time code checking.
#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
pub const fn usize_to_u64(value: usize) -> u64 {
    value as u64
}

/// Converts `value` to a `usize`.
///
/// # Panics
///
/// Panics if `value` cannot fit within a `usize`.
#[expect(clippy::cast_possible_truncation)]
pub const fn u64_to_usize_strict(value: u64) -> usize {
    assert!(value <= usize_to_u64(usize::MAX));

    value as usize
}

/// Converts `value` to a `usize`, truncating if it exceeds `usize::MAX`.
#[expect(clippy::cast_possible_truncation)]
pub const fn u64_to_usize_truncating(value: u64) -> usize {
    value as usize
}

/// Attempts to convert `value` to a `usize`.
///
/// Returns `None` if `value` cannot fit within a `usize`.
#[expect(clippy::cast_possible_truncation)]
pub const fn u64_to_usize_checked(value: u64) -> Option<usize> {
    if value <= usize_to_u64(usize::MAX) {
        Some(value as usize)
    } else {
        None
    }
}
