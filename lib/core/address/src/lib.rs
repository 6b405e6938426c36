//! Overflow-safe address and address range arithmetic.
//!
//! [`Address`] and [`AddressRange`] are plain value types. Every operation that could leave the
//! address space either reports the overflow through its return value or, for the `strict_*`
//! family, panics.
#![no_std]

pub mod address;
pub mod page;

pub use address::{Address, AddressOverflowError, AddressRange};
