/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Cache-Line Padding
//!
//! A layout-only decorator that gives an atomic a cache line of its own, so
//! that two independently updated atomics placed side by side do not
//! generate coherence traffic for each other.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::ops::{
    Deref,
    DerefMut,
};

/// Size in bytes of the cache line [`Padded`] aligns to.
///
/// x86_64 and aarch64 prefetch pairs of 64-byte lines, and powerpc64 uses
/// 128-byte lines, so those targets pad to 128 bytes.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "powerpc64"))]
pub const CACHE_LINE_SIZE: usize = 128;

/// Size in bytes of the cache line [`Padded`] aligns to.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "powerpc64")))]
pub const CACHE_LINE_SIZE: usize = 64;

/// Pads and aligns a cell to a cache line.
///
/// The wrapped cell sits at offset 0 and the size is rounded up to a
/// multiple of [`CACHE_LINE_SIZE`]. Loads, stores and CAS behave exactly as
/// on the bare cell, which is reachable through `Deref`.
///
/// # Example
///
/// ```rust
/// use prism3_ordered_atomic::{AtomicInteger, MemoryOrder, CACHE_LINE_SIZE};
///
/// let hits = AtomicInteger::new_padded(0, MemoryOrder::Relaxed).unwrap();
/// hits.increment();
/// assert_eq!(hits.value(), 1);
/// assert_eq!(std::mem::size_of_val(&hits), CACHE_LINE_SIZE);
/// ```
///
/// # Author
///
/// Haixing Hu
#[cfg_attr(
    any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "powerpc64"),
    repr(C, align(128))
)]
#[cfg_attr(
    not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "powerpc64")),
    repr(C, align(64))
)]
pub struct Padded<C> {
    value: C,
}

impl<C> Padded<C> {
    /// Wraps `value` in its own cache line.
    #[inline]
    pub const fn new(value: C) -> Self {
        Self { value }
    }

    /// Unwraps the cell.
    #[inline]
    pub fn into_inner(self) -> C {
        self.value
    }
}

impl<C> Deref for Padded<C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        &self.value
    }
}

impl<C> DerefMut for Padded<C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut C {
        &mut self.value
    }
}

impl<C: Default> Default for Padded<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> From<C> for Padded<C> {
    fn from(value: C) -> Self {
        Self::new(value)
    }
}

impl<C: fmt::Debug> fmt::Debug for Padded<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Padded").field("value", &self.value).finish()
    }
}

impl<C: fmt::Display> fmt::Display for Padded<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
