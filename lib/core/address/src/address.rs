//! Overflow-checked addresses and half-open address ranges.
//!
//! Lengths are always expressed as `u64`, independent of the width of [`Address`]. Every operation
//! that can leave the address space reports the failure instead of wrapping, except for the
//! explicitly named `wrapping_*` and `strict_*` operations.

use core::{error, fmt};

use conversion::{u64_to_usize_checked, u64_to_usize_truncating, usize_to_u64};

use crate::page;

/// A location in an unspecified address space.
///
/// [`Address`] does not distinguish between virtual and physical address spaces.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address(usize);

impl Address {
    /// The highest representable [`Address`].
    pub const MAX: Self = Self(usize::MAX);

    /// Creates a new address with a value of 0.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Creates a new address with a value of `value`.
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the underlying value for this address.
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns the address `length` bytes above `self`, wrapping around the top of the address
    /// space.
    ///
    /// `length` is truncated to the width of [`Address`] before being added. The result is only
    /// meaningful if [`Address::checked_add_length`] would have succeeded.
    pub const fn wrapping_add_length(self, length: u64) -> Self {
        Self(self.0.wrapping_add(u64_to_usize_truncating(length)))
    }

    /// Returns the address `length` bytes above `self`.
    ///
    /// Returns `None` if `length` is larger than [`Address::MAX`] or if the sum does not fit
    /// within an [`Address`].
    ///
    /// A range reaching the very end of the address space has an exclusive end one past
    /// [`Address::MAX`], so it cannot be described and is reported as an overflow.
    pub const fn checked_add_length(self, length: u64) -> Option<Self> {
        let Some(length) = u64_to_usize_checked(length) else {
            return None;
        };

        let Some(end) = self.0.checked_add(length) else {
            return None;
        };

        Some(Self(end))
    }

    /// Returns the address `count` bytes below `self`.
    ///
    /// Returns `None` if the operation would underflow.
    pub const fn checked_sub(self, count: usize) -> Option<Self> {
        let Some(address) = self.0.checked_sub(count) else {
            return None;
        };

        Some(Self(address))
    }

    /// Returns the half-open range `[self, self + length)`.
    ///
    /// Returns `None` under exactly the same conditions as [`Address::checked_add_length`].
    pub const fn checked_to_range(self, length: u64) -> Option<AddressRange> {
        let Some(end) = self.checked_add_length(length) else {
            return None;
        };

        Some(AddressRange::from_exclusive(self, end))
    }

    /// Returns the greatest page aligned address that is less than or equal to `self`.
    pub const fn round_down(self) -> Self {
        Self(page::page_round_down(self.0))
    }

    /// Returns the smallest page aligned address that is greater than or equal to `self`.
    ///
    /// Returns `None` if `self` is not page aligned and lies within the last page of the address
    /// space.
    pub const fn checked_round_up(self) -> Option<Self> {
        let Some(address) = page::page_round_up(self.0) else {
            return None;
        };

        Some(Self(address))
    }

    /// Returns the smallest page aligned address that is greater than or equal to `self`.
    ///
    /// Only for use where the caller has already established that the rounding cannot overflow.
    ///
    /// # Panics
    ///
    /// Panics if [`Address::checked_round_up`] would return `None`.
    pub const fn strict_round_up(self) -> Self {
        match self.checked_round_up() {
            Some(address) => address,
            None => panic!("page rounding overflowed the address space"),
        }
    }

    /// Returns the greatest huge page aligned address that is less than or equal to `self`.
    pub const fn huge_round_down(self) -> Self {
        Self(page::huge_page_round_down(self.0))
    }

    /// Returns the smallest huge page aligned address that is greater than or equal to `self`.
    ///
    /// Returns `None` if `self` is not huge page aligned and lies within the last huge page of the
    /// address space.
    pub const fn checked_huge_round_up(self) -> Option<Self> {
        let Some(address) = page::huge_page_round_up(self.0) else {
            return None;
        };

        Some(Self(address))
    }

    /// Returns the smallest huge page aligned address that is greater than or equal to `self`.
    ///
    /// Only for use where the caller has already established that the rounding cannot overflow.
    ///
    /// # Panics
    ///
    /// Panics if [`Address::checked_huge_round_up`] would return `None`.
    pub const fn strict_huge_round_up(self) -> Self {
        match self.checked_huge_round_up() {
            Some(address) => address,
            None => panic!("huge page rounding overflowed the address space"),
        }
    }

    /// Returns the offset of `self` within its containing page.
    pub const fn page_offset(self) -> u64 {
        usize_to_u64(page::page_offset(self.0))
    }

    /// Returns `true` if `self` is a multiple of the page size.
    pub const fn is_page_aligned(self) -> bool {
        page::is_page_aligned(self.0)
    }
}

impl TryFrom<u64> for Address {
    type Error = AddressOverflowError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u64_to_usize_checked(value)
            .map(Self)
            .ok_or(AddressOverflowError(value))
    }
}

impl From<Address> for u64 {
    fn from(address: Address) -> Self {
        usize_to_u64(address.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#x})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// A value that does not fit within the width of an [`Address`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct AddressOverflowError(u64);

impl AddressOverflowError {
    /// Returns the value that could not be represented as an [`Address`].
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AddressOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x} does not fit within the address width", self.0)
    }
}

impl error::Error for AddressOverflowError {}

/// A half-open range of [`Address`]es, `[start, end)`.
///
/// Producers are expected to uphold `start <= end`; this is not enforced. Prefer
/// [`Address::checked_to_range`] to construct ranges from a base and a length.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AddressRange {
    /// The inclusive start of the range.
    start: Address,
    /// The exclusive end of the range.
    end: Address,
}

impl AddressRange {
    /// Creates a new address range with an inclusive start of `start` and an exclusive end of
    /// `end`.
    pub const fn from_exclusive(start: Address, end: Address) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start of this range.
    pub const fn start(self) -> Address {
        self.start
    }

    /// Returns the exclusive end of this range.
    pub const fn end(self) -> Address {
        self.end
    }

    /// Returns the number of bytes in this range.
    ///
    /// Ranges that are not well formed have a length of 0.
    pub const fn length(self) -> u64 {
        usize_to_u64(self.end.0.saturating_sub(self.start.0))
    }

    /// Returns `true` if this range contains no addresses.
    pub const fn is_empty(self) -> bool {
        self.length() == 0
    }

    /// Returns `true` if `start <= end`.
    pub const fn is_well_formed(self) -> bool {
        self.start.0 <= self.end.0
    }

    /// Returns `true` if `address` lies within this range.
    pub const fn contains(self, address: Address) -> bool {
        self.start.0 <= address.0 && address.0 < self.end.0
    }

    /// Returns `true` if `self` and `other` share at least one address.
    ///
    /// Empty ranges never overlap anything.
    pub const fn overlaps(self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start.0 < other.end.0
            && other.start.0 < self.end.0
    }

    /// Returns `true` if every address in `other` also lies within `self`.
    pub const fn is_superset_of(self, other: Self) -> bool {
        self.start.0 <= other.start.0 && other.end.0 <= self.end.0
    }

    /// Returns the intersection of `self` and `other`.
    ///
    /// If the two ranges do not overlap, then an empty range starting at the higher of the two
    /// starts is returned.
    pub const fn intersection(self, other: Self) -> Self {
        let start = if self.start.0 >= other.start.0 {
            self.start
        } else {
            other.start
        };

        let end = if self.end.0 <= other.end.0 {
            self.end
        } else {
            other.end
        };

        if end.0 < start.0 {
            Self::from_exclusive(start, start)
        } else {
            Self::from_exclusive(start, end)
        }
    }

    /// Splits this range into `[start, at)` and `[at, end)`.
    ///
    /// Returns `None` if `at` lies outside of `[start, end]`. Either half may be empty.
    pub const fn split_at(self, at: Address) -> Option<(Self, Self)> {
        if at.0 < self.start.0 || at.0 > self.end.0 {
            return None;
        }

        Some((
            Self::from_exclusive(self.start, at),
            Self::from_exclusive(at, self.end),
        ))
    }

    /// Returns `true` if both the start and the end of this range are page aligned.
    pub const fn is_page_aligned(self) -> bool {
        self.start.is_page_aligned() && self.end.is_page_aligned()
    }

    /// Returns the smallest page aligned range that contains `self`.
    ///
    /// Returns `None` if rounding the end up would overflow the address space.
    pub const fn checked_round_out(self) -> Option<Self> {
        let Some(end) = self.end.checked_round_up() else {
            return None;
        };

        Some(Self::from_exclusive(self.start.round_down(), end))
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}, {:#x})", self.start.0, self.end.0)
    }
}
