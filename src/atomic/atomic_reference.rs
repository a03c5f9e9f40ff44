/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Reference
//!
//! Provides an atomic, nullable reference with an explicit memory order.
//! Uses `Arc<T>` for thread-safe reference counting and `arc-swap` for
//! reclamation-safe pointer exchange.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::Arc;

use arc_swap::{
    ArcSwapOption,
    Guard,
};
use parking_lot::Mutex;

use crate::atomic::error::Result;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::padded::Padded;
use crate::atomic::traits::{
    Atomic,
    UpdatableAtomic,
};

/// Returns `true` if both references point to the same allocation, or are
/// both null.
#[inline]
fn same_ref<T>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Atomic reference type.
///
/// Holds an `Option<Arc<T>>`; `None` is the null reference. All
/// comparisons are by pointer identity, never by value.
///
/// # Memory Ordering Strategy
///
/// The underlying exchange primitives are sequentially consistent, so
/// every accepted order is honored (or exceeded). Orders are still
/// validated with the same rules as every other atomic type. For `SeqCst`
/// cells the functional update loop of [`set`](Self::set) runs under a
/// lock private to the cell, so that the whole read-compute-CAS sequence
/// takes a single place in the global order.
///
/// # Example
///
/// ```rust
/// use prism3_ordered_atomic::{AtomicReference, MemoryOrder};
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Config {
///     timeout: u64,
/// }
///
/// let config = AtomicReference::new(
///     Some(Arc::new(Config { timeout: 1000 })),
///     MemoryOrder::AcqRel,
/// )
/// .unwrap();
///
/// let old = config.set(|current| {
///     let timeout = current.map_or(0, |c| c.timeout);
///     Some(Arc::new(Config { timeout: timeout * 2 }))
/// });
/// assert_eq!(old.unwrap().timeout, 1000);
/// assert_eq!(config.value().unwrap().timeout, 2000);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicReference<T> {
    inner: ArcSwapOption<T>,
    order: MemoryOrder,
    lock: Mutex<()>,
}

impl<T> AtomicReference<T> {
    /// Creates a new atomic reference.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Acquire`, `Release` and
    /// `Consume`.
    pub fn new(value: Option<Arc<T>>, order: MemoryOrder) -> Result<Self> {
        Ok(Self::with_validated_order(value, order.validate_construction()?))
    }

    /// Creates a new atomic reference padded to a full cache line.
    #[inline]
    pub fn new_padded(value: Option<Arc<T>>, order: MemoryOrder) -> Result<Padded<Self>> {
        Self::new(value, order).map(Padded::new)
    }

    fn with_validated_order(value: Option<Arc<T>>, order: MemoryOrder) -> Self {
        Self {
            inner: ArcSwapOption::new(value),
            order,
            lock: Mutex::new(()),
        }
    }

    /// Returns the memory order fixed at construction.
    #[inline]
    pub fn order(&self) -> MemoryOrder {
        self.order
    }

    /// Gets the current reference.
    #[inline]
    pub fn value(&self) -> Option<Arc<T>> {
        self.inner.load_full()
    }

    /// Sets a new reference.
    ///
    /// Uses a CAS loop unless the cell is `SeqCst`, in which case a single
    /// exchange is performed.
    pub fn set_value(&self, value: Option<Arc<T>>) {
        if self.order == MemoryOrder::SeqCst {
            self.inner.swap(value);
            return;
        }
        loop {
            let current = self.value();
            let prev = self.compare_exchange(value.clone(), current.clone());
            if same_ref(&prev, &current) {
                return;
            }
        }
    }

    /// Loads the current reference with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Release` and `Consume`.
    #[inline]
    pub fn load(&self, order: MemoryOrder) -> Result<Option<Arc<T>>> {
        order.validate_load()?;
        Ok(self.inner.load_full())
    }

    /// Stores a reference with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Acquire` and `Consume`.
    #[inline]
    pub fn store(&self, value: Option<Arc<T>>, order: MemoryOrder) -> Result<()> {
        order.validate_store()?;
        self.inner.store(value);
        Ok(())
    }

    /// Swaps the current reference with a new one, returning the old one.
    #[inline]
    pub fn swap(&self, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.inner.swap(value)
    }

    /// Replaces the reference with `value` if it currently points to the
    /// same allocation as `comparand`.
    ///
    /// # Returns
    ///
    /// The reference observed before the operation.
    #[inline]
    pub fn compare_exchange(
        &self,
        value: Option<Arc<T>>,
        comparand: Option<Arc<T>>,
    ) -> Option<Arc<T>> {
        Guard::into_inner(self.inner.compare_and_swap(&comparand, value))
    }

    /// Compares and sets the reference atomically.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    pub fn compare_set(
        &self,
        current: &Option<Arc<T>>,
        new: Option<Arc<T>>,
    ) -> std::result::Result<(), Option<Arc<T>>> {
        let prev = Guard::into_inner(self.inner.compare_and_swap(current, new));
        if same_ref(&prev, current) {
            Ok(())
        } else {
            Err(prev)
        }
    }

    /// Returns `true` if the reference is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.inner.load().is_none()
    }

    /// Returns `true` if the current reference points to the same
    /// allocation as `other`.
    #[inline]
    pub fn equals(&self, other: &Option<Arc<T>>) -> bool {
        same_ref(&self.value(), other)
    }

    /// `false` for `SeqCst` cells, whose functional updates take a lock.
    #[inline]
    pub fn is_lock_free(&self) -> bool {
        self.order != MemoryOrder::SeqCst
    }

    /// Updates the reference with `setter` in a read-compute-CAS loop.
    ///
    /// # Memory Ordering
    ///
    /// For `SeqCst` cells the entire loop runs under the cell's private
    /// lock.
    ///
    /// # Returns
    ///
    /// The reference observed just before the update became visible. The
    /// new reference is whatever `setter` returned on the successful
    /// iteration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_ordered_atomic::{AtomicReference, MemoryOrder};
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicReference::new(Some(Arc::new(10)), MemoryOrder::SeqCst).unwrap();
    /// let old = atomic.set(|x| x.map(|v| Arc::new(*v * 2)));
    /// assert_eq!(old.as_deref(), Some(&10));
    /// assert_eq!(atomic.value().as_deref(), Some(&20));
    /// ```
    pub fn set<F>(&self, setter: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        let _guard = (self.order == MemoryOrder::SeqCst).then(|| self.lock.lock());
        let mut current = self.value();
        loop {
            let candidate = setter(current.clone());
            let prev = Guard::into_inner(self.inner.compare_and_swap(&current, candidate));
            if same_ref(&prev, &current) {
                return current;
            }
            current = prev;
        }
    }

    /// Like [`set`](Self::set), passing `aux` to the setter on every
    /// attempt instead of requiring it to be captured.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_ordered_atomic::{AtomicReference, MemoryOrder};
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicReference::<i32>::new(None, MemoryOrder::AcqRel).unwrap();
    /// atomic.set_with(&5, |_, aux| Some(Arc::new(*aux)));
    /// assert_eq!(atomic.value().as_deref(), Some(&5));
    /// ```
    #[inline]
    pub fn set_with<A, F>(&self, aux: &A, setter: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>, &A) -> Option<Arc<T>>,
    {
        self.set(|current| setter(current, aux))
    }
}

impl<T> Atomic for AtomicReference<T> {
    type Value = Option<Arc<T>>;

    #[inline]
    fn new(value: Option<Arc<T>>, order: MemoryOrder) -> Result<Self> {
        Self::new(value, order)
    }

    #[inline]
    fn order(&self) -> MemoryOrder {
        self.order()
    }

    #[inline]
    fn value(&self) -> Option<Arc<T>> {
        self.value()
    }

    #[inline]
    fn set_value(&self, value: Option<Arc<T>>) {
        self.set_value(value);
    }

    #[inline]
    fn load(&self, order: MemoryOrder) -> Result<Option<Arc<T>>> {
        self.load(order)
    }

    #[inline]
    fn store(&self, value: Option<Arc<T>>, order: MemoryOrder) -> Result<()> {
        self.store(value, order)
    }

    #[inline]
    fn swap(&self, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.swap(value)
    }

    #[inline]
    fn compare_exchange(
        &self,
        value: Option<Arc<T>>,
        comparand: Option<Arc<T>>,
    ) -> Option<Arc<T>> {
        self.compare_exchange(value, comparand)
    }

    #[inline]
    fn is_lock_free(&self) -> bool {
        self.is_lock_free()
    }
}

impl<T> UpdatableAtomic for AtomicReference<T> {
    #[inline]
    fn set<F>(&self, setter: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>) -> Option<Arc<T>>,
    {
        self.set(setter)
    }

    #[inline]
    fn set_with<A, F>(&self, aux: &A, setter: F) -> Option<Arc<T>>
    where
        F: Fn(Option<Arc<T>>, &A) -> Option<Arc<T>>,
    {
        self.set_with(aux, setter)
    }
}

impl<T> Default for AtomicReference<T> {
    /// Creates a null `SeqCst` reference.
    fn default() -> Self {
        Self::with_validated_order(None, MemoryOrder::default())
    }
}

impl<T> From<Arc<T>> for AtomicReference<T> {
    /// Creates a `SeqCst` reference to `value`.
    fn from(value: Arc<T>) -> Self {
        Self::with_validated_order(Some(value), MemoryOrder::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicReference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicReference")
            .field("value", &self.value())
            .field("order", &self.order)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for AtomicReference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("null"),
        }
    }
}
