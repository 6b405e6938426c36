//! Platform page sizing and the rounding primitives that apply it.
//!
//! Every rounding operation that moves a value upwards is checked: it returns [`None`] instead of
//! wrapping around the top of the address space.

use conversion::usize_to_u64;

/// The base-2 logarithm of [`PAGE_SIZE`].
pub const PAGE_SHIFT: u32 = 12;

/// The size, in bytes, of a page.
pub const PAGE_SIZE: usize = 1 << PAGE_SHIFT;

/// The base-2 logarithm of [`HUGE_PAGE_SIZE`].
pub const HUGE_PAGE_SHIFT: u32 = 21;

/// The size, in bytes, of a huge page.
pub const HUGE_PAGE_SIZE: usize = 1 << HUGE_PAGE_SHIFT;

const _: () = assert!(PAGE_SIZE.is_power_of_two());
const _: () = assert!(HUGE_PAGE_SIZE.is_power_of_two());
const _: () = assert!(HUGE_PAGE_SIZE % PAGE_SIZE == 0);

/// Rounds `value` down to the nearest multiple of `alignment`.
///
/// `alignment` must be a power of two.
const fn align_down(value: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());

    value & !(alignment - 1)
}

/// Rounds `value` up to the nearest multiple of `alignment`.
///
/// Returns `None` if the result is not representable. `alignment` must be a power of two.
const fn checked_align_up(value: usize, alignment: usize) -> Option<usize> {
    debug_assert!(alignment.is_power_of_two());

    let Some(biased) = value.checked_add(alignment - 1) else {
        return None;
    };

    Some(align_down(biased, alignment))
}

/// Returns the greatest multiple of [`PAGE_SIZE`] that is less than or equal to `value`.
pub const fn page_round_down(value: usize) -> usize {
    align_down(value, PAGE_SIZE)
}

/// Returns the smallest multiple of [`PAGE_SIZE`] that is greater than or equal to `value`.
///
/// Returns `None` if `value` lies in the last page of the address space and is not page aligned.
pub const fn page_round_up(value: usize) -> Option<usize> {
    checked_align_up(value, PAGE_SIZE)
}

/// Returns the greatest multiple of [`HUGE_PAGE_SIZE`] that is less than or equal to `value`.
pub const fn huge_page_round_down(value: usize) -> usize {
    align_down(value, HUGE_PAGE_SIZE)
}

/// Returns the smallest multiple of [`HUGE_PAGE_SIZE`] that is greater than or equal to `value`.
///
/// Returns `None` if `value` lies in the last huge page of the address space and is not huge page
/// aligned.
pub const fn huge_page_round_up(value: usize) -> Option<usize> {
    checked_align_up(value, HUGE_PAGE_SIZE)
}

/// Returns the offset of `value` within its containing page.
pub const fn page_offset(value: usize) -> usize {
    value & (PAGE_SIZE - 1)
}

/// Returns `true` if `value` is a multiple of [`PAGE_SIZE`].
pub const fn is_page_aligned(value: usize) -> bool {
    page_offset(value) == 0
}

/// Returns the number of pages required to hold `bytes` bytes.
pub const fn pages_for(bytes: u64) -> u64 {
    bytes.div_ceil(usize_to_u64(PAGE_SIZE))
}
