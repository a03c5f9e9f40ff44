/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Boolean
//!
//! Provides an atomic boolean with an explicit memory order. The flag is
//! stored in an [`AtomicInteger`] (`true` as 1, `false` as 0) so that it
//! shares the integer's ordering and CAS logic.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::atomic_integer::AtomicInteger;
use crate::atomic::error::Result;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::padded::Padded;
use crate::atomic::traits::{
    Atomic,
    UpdatableAtomic,
};

#[inline]
const fn to_int(value: bool) -> i32 {
    value as i32
}

#[inline]
const fn to_bool(value: i32) -> bool {
    value != 0
}

/// Atomic boolean type.
///
/// # Example
///
/// ```rust
/// use prism3_ordered_atomic::{AtomicBoolean, MemoryOrder};
/// use std::sync::Arc;
/// use std::thread;
///
/// let flag = Arc::new(AtomicBoolean::new(false, MemoryOrder::AcqRel).unwrap());
/// let flag_clone = flag.clone();
///
/// let handle = thread::spawn(move || {
///     flag_clone.set_value(true);
/// });
///
/// handle.join().unwrap();
/// assert!(flag.value());
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicBoolean {
    inner: AtomicInteger,
}

impl AtomicBoolean {
    /// Creates a new atomic boolean.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Acquire`, `Release` and
    /// `Consume`.
    #[inline]
    pub fn new(value: bool, order: MemoryOrder) -> Result<Self> {
        Ok(Self {
            inner: AtomicInteger::new(to_int(value), order)?,
        })
    }

    #[inline]
    pub(crate) fn with_validated_order(value: bool, order: MemoryOrder) -> Self {
        Self {
            inner: AtomicInteger::with_validated_order(to_int(value), order),
        }
    }

    /// Creates a new atomic boolean padded to a full cache line.
    #[inline]
    pub fn new_padded(value: bool, order: MemoryOrder) -> Result<Padded<Self>> {
        Self::new(value, order).map(Padded::new)
    }

    /// Returns the memory order fixed at construction.
    #[inline]
    pub fn order(&self) -> MemoryOrder {
        self.inner.order()
    }

    /// Gets the current value.
    #[inline]
    pub fn value(&self) -> bool {
        to_bool(self.inner.value())
    }

    /// Sets a new value with the visibility of the cell's order.
    #[inline]
    pub fn set_value(&self, value: bool) {
        self.inner.set_value(to_int(value));
    }

    /// Loads the current value with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Release` and `Consume`.
    #[inline]
    pub fn load(&self, order: MemoryOrder) -> Result<bool> {
        self.inner.load(order).map(to_bool)
    }

    /// Stores a value with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Acquire` and `Consume`.
    #[inline]
    pub fn store(&self, value: bool, order: MemoryOrder) -> Result<()> {
        self.inner.store(to_int(value), order)
    }

    #[inline]
    pub(crate) fn load_unchecked(&self, order: MemoryOrder) -> bool {
        to_bool(self.inner.load_unchecked(order))
    }

    #[inline]
    pub(crate) fn store_unchecked(&self, value: bool, order: MemoryOrder) {
        self.inner.store_unchecked(to_int(value), order);
    }

    /// Swaps the current value with a new value, returning the old value.
    #[inline]
    pub fn swap(&self, value: bool) -> bool {
        to_bool(self.inner.swap(to_int(value)))
    }

    /// Replaces the value with `value` if it currently equals `comparand`,
    /// returning the value observed before the operation.
    #[inline]
    pub fn compare_exchange(&self, value: bool, comparand: bool) -> bool {
        to_bool(self.inner.compare_exchange(to_int(value), to_int(comparand)))
    }

    /// Compares and sets the value atomically.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    #[inline]
    pub fn compare_set(&self, current: bool, new: bool) -> std::result::Result<(), bool> {
        self.inner
            .compare_set(to_int(current), to_int(new))
            .map_err(to_bool)
    }

    /// Sets the flag to `new` only if it is currently `false`.
    #[inline]
    pub fn set_if_false(&self, new: bool) -> std::result::Result<(), bool> {
        self.compare_set(false, new)
    }

    /// Sets the flag to `new` only if it is currently `true`.
    #[inline]
    pub fn set_if_true(&self, new: bool) -> std::result::Result<(), bool> {
        self.compare_set(true, new)
    }

    /// Flips the flag, returning the new value.
    #[inline]
    pub fn negate(&self) -> bool {
        !to_bool(self.inner.set(|x| to_int(!to_bool(x))))
    }

    /// Always `true`.
    #[inline]
    pub fn is_lock_free(&self) -> bool {
        self.inner.is_lock_free()
    }

    /// Returns `true` if the current value equals `value`.
    #[inline]
    pub fn equals(&self, value: bool) -> bool {
        self.value() == value
    }

    /// Updates the flag with `setter`, returning the old value.
    #[inline]
    pub fn set<F>(&self, setter: F) -> bool
    where
        F: Fn(bool) -> bool,
    {
        to_bool(self.inner.set(|x| to_int(setter(to_bool(x)))))
    }

    /// Updates the flag with `setter` and `aux`, returning the old value.
    #[inline]
    pub fn set_with<A, F>(&self, aux: &A, setter: F) -> bool
    where
        F: Fn(bool, &A) -> bool,
    {
        self.set(|x| setter(x, aux))
    }
}

impl Atomic for AtomicBoolean {
    type Value = bool;

    #[inline]
    fn new(value: bool, order: MemoryOrder) -> Result<Self> {
        Self::new(value, order)
    }

    #[inline]
    fn order(&self) -> MemoryOrder {
        self.order()
    }

    #[inline]
    fn value(&self) -> bool {
        self.value()
    }

    #[inline]
    fn set_value(&self, value: bool) {
        self.set_value(value);
    }

    #[inline]
    fn load(&self, order: MemoryOrder) -> Result<bool> {
        self.load(order)
    }

    #[inline]
    fn store(&self, value: bool, order: MemoryOrder) -> Result<()> {
        self.store(value, order)
    }

    #[inline]
    fn swap(&self, value: bool) -> bool {
        self.swap(value)
    }

    #[inline]
    fn compare_exchange(&self, value: bool, comparand: bool) -> bool {
        self.compare_exchange(value, comparand)
    }

    #[inline]
    fn is_lock_free(&self) -> bool {
        self.is_lock_free()
    }
}

impl UpdatableAtomic for AtomicBoolean {
    #[inline]
    fn set<F>(&self, setter: F) -> bool
    where
        F: Fn(bool) -> bool,
    {
        self.set(setter)
    }

    #[inline]
    fn set_with<A, F>(&self, aux: &A, setter: F) -> bool
    where
        F: Fn(bool, &A) -> bool,
    {
        self.set_with(aux, setter)
    }
}

impl Default for AtomicBoolean {
    #[inline]
    fn default() -> Self {
        Self {
            inner: AtomicInteger::default(),
        }
    }
}

impl From<bool> for AtomicBoolean {
    /// Creates a `SeqCst` flag holding `value`.
    #[inline]
    fn from(value: bool) -> Self {
        Self {
            inner: AtomicInteger::from(to_int(value)),
        }
    }
}

impl fmt::Debug for AtomicBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicBoolean")
            .field("value", &self.value())
            .field("order", &self.order())
            .finish()
    }
}

impl fmt::Display for AtomicBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
