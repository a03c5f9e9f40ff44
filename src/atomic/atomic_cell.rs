/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cell
//!
//! A generic atomic wrapper for any fixed-layout value. The storage
//! strategy is picked from the value's size when the cell is built; see
//! [`StorageStrategy`].
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use bytemuck::NoUninit;

use crate::atomic::error::Result;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::padded::Padded;
use crate::atomic::platform::{
    platform_capability,
    PlatformCapability,
};
use crate::atomic::storage::{
    bits_eq,
    Slot,
    StorageStrategy,
};
use crate::atomic::traits::{
    Atomic,
    UpdatableAtomic,
};

/// Generic atomic cell.
///
/// `T` must be free of padding bytes ([`bytemuck::NoUninit`]); values are
/// compared bit for bit. `bool`, `i32` and `i64` are delegated to
/// [`AtomicBoolean`](crate::AtomicBoolean),
/// [`AtomicInteger`](crate::AtomicInteger) and
/// [`AtomicLong`](crate::AtomicLong). Other 4- and 8-byte values live in a
/// hardware CAS lane; everything else is guarded by a lock private to the
/// cell.
///
/// # Example
///
/// ```rust
/// use prism3_ordered_atomic::{AtomicCell, MemoryOrder, StorageStrategy};
///
/// let ratio = AtomicCell::new(0.5f32, MemoryOrder::AcqRel).unwrap();
/// assert_eq!(ratio.strategy(), StorageStrategy::InlineCas32);
///
/// let old = ratio.set(|x| x * 2.0);
/// assert_eq!(old, 0.5);
/// assert_eq!(ratio.value(), 1.0);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicCell<T> {
    slot: Slot<T>,
    order: MemoryOrder,
    platform: PlatformCapability,
}

impl<T: NoUninit> AtomicCell<T> {
    /// Creates a new atomic cell.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Acquire`, `Release` and
    /// `Consume`.
    pub fn new(value: T, order: MemoryOrder) -> Result<Self> {
        let order = order.validate_construction()?;
        Ok(Self {
            slot: Slot::new(value, order),
            order,
            platform: platform_capability(),
        })
    }

    /// Creates a new atomic cell padded to a full cache line.
    #[inline]
    pub fn new_padded(value: T, order: MemoryOrder) -> Result<Padded<Self>> {
        Self::new(value, order).map(Padded::new)
    }

    /// Returns the memory order fixed at construction.
    #[inline]
    pub fn order(&self) -> MemoryOrder {
        self.order
    }

    /// Returns the storage strategy chosen at construction.
    #[inline]
    pub fn strategy(&self) -> StorageStrategy {
        self.slot.strategy()
    }

    /// Returns `true` unless the cell is lock-emulated.
    #[inline]
    pub fn is_lock_free(&self) -> bool {
        self.strategy().is_lock_free()
    }

    /// Gets the current value.
    #[inline]
    pub fn value(&self) -> T {
        self.slot.load(self.platform, self.order.getter_order())
    }

    /// Sets a new value.
    ///
    /// Uses a CAS loop unless the cell is `SeqCst`, in which case a single
    /// exchange is performed.
    pub fn set_value(&self, value: T) {
        if self.order == MemoryOrder::SeqCst {
            self.slot.swap(value, MemoryOrder::SeqCst);
            return;
        }
        loop {
            let current = self.value();
            if bits_eq(&self.compare_exchange(value, current), &current) {
                return;
            }
        }
    }

    /// Loads the current value with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Release` and `Consume`.
    #[inline]
    pub fn load(&self, order: MemoryOrder) -> Result<T> {
        let order = order.validate_load()?;
        Ok(self.slot.load(self.platform, order))
    }

    /// Stores a value with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Acquire` and `Consume`.
    #[inline]
    pub fn store(&self, value: T, order: MemoryOrder) -> Result<()> {
        let order = order.validate_store()?;
        self.slot.store(value, self.platform, order);
        Ok(())
    }

    /// Swaps the current value with a new value, returning the old value.
    #[inline]
    pub fn swap(&self, value: T) -> T {
        self.slot.swap(value, self.order)
    }

    /// Replaces the value with `value` if it is bitwise equal to
    /// `comparand`, returning the value observed before the operation.
    #[inline]
    pub fn compare_exchange(&self, value: T, comparand: T) -> T {
        self.slot.compare_exchange(value, comparand, self.order)
    }

    /// Compares and sets the value atomically.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    pub fn compare_set(&self, current: T, new: T) -> std::result::Result<(), T> {
        let prev = self.compare_exchange(new, current);
        if bits_eq(&prev, &current) {
            Ok(())
        } else {
            Err(prev)
        }
    }

    /// Returns `true` if the current value is bitwise equal to `value`.
    #[inline]
    pub fn equals(&self, value: T) -> bool {
        bits_eq(&self.value(), &value)
    }

    /// Updates the value with `setter`, returning the old value.
    pub fn set<F>(&self, setter: F) -> T
    where
        F: Fn(T) -> T,
    {
        let mut current = self.value();
        loop {
            let prev = self.compare_exchange(setter(current), current);
            if bits_eq(&prev, &current) {
                return current;
            }
            current = prev;
        }
    }

    /// Updates the value with `setter` and `aux`, returning the old value.
    #[inline]
    pub fn set_with<A, F>(&self, aux: &A, setter: F) -> T
    where
        F: Fn(T, &A) -> T,
    {
        self.set(|current| setter(current, aux))
    }
}

impl<T: NoUninit> Atomic for AtomicCell<T> {
    type Value = T;

    #[inline]
    fn new(value: T, order: MemoryOrder) -> Result<Self> {
        Self::new(value, order)
    }

    #[inline]
    fn order(&self) -> MemoryOrder {
        self.order()
    }

    #[inline]
    fn value(&self) -> T {
        self.value()
    }

    #[inline]
    fn set_value(&self, value: T) {
        self.set_value(value);
    }

    #[inline]
    fn load(&self, order: MemoryOrder) -> Result<T> {
        self.load(order)
    }

    #[inline]
    fn store(&self, value: T, order: MemoryOrder) -> Result<()> {
        self.store(value, order)
    }

    #[inline]
    fn swap(&self, value: T) -> T {
        self.swap(value)
    }

    #[inline]
    fn compare_exchange(&self, value: T, comparand: T) -> T {
        self.compare_exchange(value, comparand)
    }

    #[inline]
    fn is_lock_free(&self) -> bool {
        self.is_lock_free()
    }
}

impl<T: NoUninit> UpdatableAtomic for AtomicCell<T> {
    #[inline]
    fn set<F>(&self, setter: F) -> T
    where
        F: Fn(T) -> T,
    {
        self.set(setter)
    }

    #[inline]
    fn set_with<A, F>(&self, aux: &A, setter: F) -> T
    where
        F: Fn(T, &A) -> T,
    {
        self.set_with(aux, setter)
    }
}

impl<T: NoUninit + Default> Default for AtomicCell<T> {
    /// Creates a `SeqCst` cell holding `T::default()`.
    fn default() -> Self {
        Self::from(T::default())
    }
}

impl<T: NoUninit> From<T> for AtomicCell<T> {
    /// Creates a `SeqCst` cell holding `value`.
    fn from(value: T) -> Self {
        let order = MemoryOrder::default();
        Self {
            slot: Slot::new(value, order),
            order,
            platform: platform_capability(),
        }
    }
}

impl<T: NoUninit + fmt::Debug> fmt::Debug for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicCell")
            .field("value", &self.value())
            .field("order", &self.order)
            .field("strategy", &self.strategy())
            .finish()
    }
}

impl<T: NoUninit + fmt::Display> fmt::Display for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
