/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic types, providing a unified interface
//! for atomic operations with caller-selected memory orders.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::error::Result;
use crate::atomic::memory_order::MemoryOrder;

/// Common trait for all atomic types.
///
/// Every implementation applies the same [`MemoryOrder`] rules: the order
/// given at construction is fixed for the lifetime of the cell, `load`
/// rejects `Release` and `Consume`, and `store` rejects `Acquire` and
/// `Consume`.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic: Sized {
    /// The value type stored in the atomic.
    type Value;

    /// Creates a new atomic with the given initial value and memory order.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    /// * `order` - The memory order of the cell. Must be `Relaxed`,
    ///   `AcqRel` or `SeqCst`.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::Configuration`](crate::AtomicError) if the
    /// order cannot be attached to a cell.
    fn new(value: Self::Value, order: MemoryOrder) -> Result<Self>;

    /// Returns the memory order fixed at construction.
    fn order(&self) -> MemoryOrder;

    /// Gets the current value.
    ///
    /// Loads with `Acquire`, or with `SeqCst` if the cell is `SeqCst`.
    fn value(&self) -> Self::Value;

    /// Sets a new value with the visibility of the cell's order.
    ///
    /// Cells that are not `SeqCst` upgrade the assignment into a CAS loop;
    /// `SeqCst` cells perform a single exchange.
    fn set_value(&self, value: Self::Value);

    /// Loads the current value with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Release` and `Consume`.
    fn load(&self, order: MemoryOrder) -> Result<Self::Value>;

    /// Stores a value with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Acquire` and `Consume`.
    fn store(&self, value: Self::Value, order: MemoryOrder) -> Result<()>;

    /// Swaps the current value with `value`, returning the old value.
    fn swap(&self, value: Self::Value) -> Self::Value;

    /// Replaces the current value with `value` if it equals `comparand`.
    ///
    /// # Returns
    ///
    /// The value observed before the operation. The exchange happened iff
    /// it equals `comparand`.
    fn compare_exchange(&self, value: Self::Value, comparand: Self::Value) -> Self::Value;

    /// Returns `true` if operations on this atomic never take a lock.
    fn is_lock_free(&self) -> bool;
}

/// Trait for atomic types that support functional updates.
///
/// # Author
///
/// Haixing Hu
pub trait UpdatableAtomic: Atomic {
    /// Updates the value with `setter` in a read-compute-CAS loop.
    ///
    /// The setter may run several times and must not touch the atomic
    /// itself.
    ///
    /// # Returns
    ///
    /// The value observed just before the update became visible, not the
    /// new value.
    fn set<F>(&self, setter: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;

    /// Like [`set`](UpdatableAtomic::set), threading `aux` into the setter
    /// so that it need not capture anything.
    fn set_with<A, F>(&self, aux: &A, setter: F) -> Self::Value
    where
        F: Fn(Self::Value, &A) -> Self::Value;
}

/// Trait for atomic integer types.
///
/// Increment, decrement and addition map onto single fetch-and-add
/// instructions. Multiplication and division have no hardware equivalent
/// and run a CAS loop. All arithmetic wraps on overflow.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicNumber: UpdatableAtomic {
    /// Increments the value by 1, returning the new value.
    fn increment(&self) -> Self::Value;

    /// Decrements the value by 1, returning the new value.
    fn decrement(&self) -> Self::Value;

    /// Adds `delta`, returning the old value.
    fn fetch_add(&self, delta: Self::Value) -> Self::Value;

    /// Subtracts `delta`, returning the old value.
    fn fetch_sub(&self, delta: Self::Value) -> Self::Value;

    /// Multiplies by `factor`, returning the new value.
    fn multiply(&self, factor: Self::Value) -> Self::Value;

    /// Divides by `divisor`, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::Arithmetic`](crate::AtomicError) if
    /// `divisor` is zero. The stored value is left untouched.
    fn divide(&self, divisor: Self::Value) -> Result<Self::Value>;
}
