/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Macro
//!
//! Provides a macro to generate atomic integer types with consistent
//! implementations.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate atomic integer types.
///
/// This macro generates a complete atomic integer type with all methods,
/// trait implementations, and documentation.
///
/// # Parameters
///
/// * `$name` - The name of the atomic type (e.g., `AtomicInteger`)
/// * `$inner_type` - The underlying std atomic type (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
macro_rules! impl_atomic_integer {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, " with an explicit memory order.")]
        ///
        /// The memory order is chosen at construction and governs the
        /// `value` getter and setter, CAS and arithmetic. `load` and
        /// `store` take a per-call order validated against the same rules
        /// as every other atomic type.
        ///
        /// # Memory Ordering Strategy
        ///
        /// - **Getter** (`value`): `Acquire`, or `SeqCst` for `SeqCst`
        ///   cells.
        /// - **Setter** (`set_value`): a CAS loop for non-`SeqCst` cells so
        ///   that the write is a full read-modify-write; a single exchange
        ///   for `SeqCst` cells.
        /// - **Read-Modify-Write** (`swap`, CAS, arithmetic): the cell's
        ///   order on success, its load half on failure.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_ordered_atomic::{", stringify!($name), ", MemoryOrder};")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($name), "::new(0, MemoryOrder::AcqRel).unwrap());")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counter = counter.clone();
        ///     let handle = thread::spawn(move || {
        ///         for _ in 0..100 {
        ///             counter.increment();
        ///         }
        ///     });
        ///     handles.push(handle);
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.value(), 1000);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        pub struct $name {
            inner: $inner_type,
            order: MemoryOrder,
            platform: PlatformCapability,
        }

        impl $name {
            /// Creates a new atomic integer.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            /// * `order` - The cell's memory order: `Relaxed`, `AcqRel` or
            ///   `SeqCst`.
            ///
            /// # Errors
            ///
            /// Returns a configuration error for `Acquire`, `Release` and
            /// `Consume`.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordered_atomic::{", stringify!($name), ", MemoryOrder};")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(42, MemoryOrder::SeqCst).unwrap();")]
            /// assert_eq!(atomic.value(), 42);
            /// ```
            #[inline]
            pub fn new(value: $value_type, order: MemoryOrder) -> Result<Self> {
                Ok(Self::with_validated_order(value, order.validate_construction()?))
            }

            /// Creates a new atomic integer padded to a full cache line.
            ///
            /// # Errors
            ///
            /// Same as [`new`](Self::new).
            #[inline]
            pub fn new_padded(value: $value_type, order: MemoryOrder) -> Result<Padded<Self>> {
                Self::new(value, order).map(Padded::new)
            }

            #[inline]
            pub(crate) fn with_validated_order(value: $value_type, order: MemoryOrder) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                    order,
                    platform: platform_capability(),
                }
            }

            /// Returns the memory order fixed at construction.
            #[inline]
            pub fn order(&self) -> MemoryOrder {
                self.order
            }

            /// Gets the current value.
            ///
            /// # Memory Ordering
            ///
            /// Uses `Acquire`, or `SeqCst` if the cell is `SeqCst`.
            #[inline]
            pub fn value(&self) -> $value_type {
                self.load_unchecked(self.order.getter_order())
            }

            /// Sets a new value.
            ///
            /// # Memory Ordering
            ///
            /// For cells that are not `SeqCst` the assignment becomes a
            /// read-modify-write: read the current value, try to exchange
            /// it, and retry until the exchange observed the snapshot. For
            /// `SeqCst` cells a single `SeqCst` exchange is used.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value.
            #[inline]
            pub fn set_value(&self, value: $value_type) {
                if self.order == MemoryOrder::SeqCst {
                    self.inner.swap(value, Ordering::SeqCst);
                    return;
                }
                loop {
                    let current = self.load_unchecked(self.order.getter_order());
                    if self.compare_exchange(value, current) == current {
                        return;
                    }
                }
            }

            /// Loads the current value with an explicit order.
            ///
            /// # Errors
            ///
            /// Returns a configuration error for `Release` and `Consume`.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordered_atomic::{", stringify!($name), ", MemoryOrder};")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(7, MemoryOrder::AcqRel).unwrap();")]
            /// assert_eq!(atomic.load(MemoryOrder::Acquire).unwrap(), 7);
            /// assert!(atomic.load(MemoryOrder::Release).is_err());
            /// ```
            #[inline]
            pub fn load(&self, order: MemoryOrder) -> Result<$value_type> {
                let order = order.validate_load()?;
                Ok(self.load_unchecked(order))
            }

            /// Stores a value with an explicit order.
            ///
            /// # Errors
            ///
            /// Returns a configuration error for `Acquire` and `Consume`.
            #[inline]
            pub fn store(&self, value: $value_type, order: MemoryOrder) -> Result<()> {
                let order = order.validate_store()?;
                self.store_unchecked(value, order);
                Ok(())
            }

            #[inline]
            pub(crate) fn load_unchecked(&self, order: MemoryOrder) -> $value_type {
                self.platform.load(&self.inner, order)
            }

            #[inline]
            pub(crate) fn store_unchecked(&self, value: $value_type, order: MemoryOrder) {
                self.platform.store(&self.inner, value, order);
            }

            /// Swaps the current value with a new value, returning the old
            /// value.
            #[inline]
            pub fn swap(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, self.order.rmw_ordering())
            }

            /// Replaces the value with `value` if it currently equals
            /// `comparand`.
            ///
            /// # Returns
            ///
            /// The value before the operation. If it equals `comparand`,
            /// the exchange happened.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordered_atomic::{", stringify!($name), ", MemoryOrder};")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10, MemoryOrder::SeqCst).unwrap();")]
            /// assert_eq!(atomic.compare_exchange(20, 10), 10);
            /// assert_eq!(atomic.value(), 20);
            /// ```
            #[inline]
            pub fn compare_exchange(
                &self,
                value: $value_type,
                comparand: $value_type,
            ) -> $value_type {
                let (success, failure) = self.order.rmw_orderings();
                match self.inner.compare_exchange(comparand, value, success, failure) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            /// Compares and sets the value atomically.
            ///
            /// # Returns
            ///
            /// `Ok(())` on success, or `Err(actual)` with the value that
            /// was found instead of `current`.
            #[inline]
            pub fn compare_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> std::result::Result<(), $value_type> {
                let prev = self.compare_exchange(new, current);
                if prev == current {
                    Ok(())
                } else {
                    Err(prev)
                }
            }

            /// Always `true`: the value lives in a hardware CAS lane.
            #[inline]
            pub fn is_lock_free(&self) -> bool {
                true
            }

            /// Returns `true` if the current value equals `value`.
            #[inline]
            pub fn equals(&self, value: $value_type) -> bool {
                self.value() == value
            }

            /// Increments the value by 1, returning the new value.
            ///
            /// A single fetch-and-add; never retries.
            #[inline]
            pub fn increment(&self) -> $value_type {
                self.fetch_add(1).wrapping_add(1)
            }

            /// Decrements the value by 1, returning the new value.
            #[inline]
            pub fn decrement(&self) -> $value_type {
                self.fetch_sub(1).wrapping_sub(1)
            }

            /// Adds `delta`, returning the old value.
            #[inline]
            pub fn fetch_add(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_add(delta, self.order.rmw_ordering())
            }

            /// Subtracts `delta`, returning the old value.
            #[inline]
            pub fn fetch_sub(&self, delta: $value_type) -> $value_type {
                self.inner.fetch_sub(delta, self.order.rmw_ordering())
            }

            /// Adds `delta`, returning the new value.
            #[inline]
            pub fn add(&self, delta: $value_type) -> $value_type {
                self.fetch_add(delta).wrapping_add(delta)
            }

            /// Subtracts `delta`, returning the new value.
            #[inline]
            pub fn sub(&self, delta: $value_type) -> $value_type {
                self.fetch_sub(delta).wrapping_sub(delta)
            }

            /// Multiplies by `factor`, returning the new value.
            ///
            /// There is no fetch-and-multiply instruction, so the product
            /// is computed from a snapshot and published with a CAS loop.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordered_atomic::{", stringify!($name), ", MemoryOrder};")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(6, MemoryOrder::SeqCst).unwrap();")]
            /// assert_eq!(atomic.multiply(7), 42);
            /// ```
            #[inline]
            pub fn multiply(&self, factor: $value_type) -> $value_type {
                self.apply(|current| current.wrapping_mul(factor))
            }

            /// Divides by `divisor`, returning the new value.
            ///
            /// # Errors
            ///
            /// Returns an arithmetic error if `divisor` is zero. The check
            /// happens before any CAS, so the stored value is unchanged.
            #[inline]
            pub fn divide(&self, divisor: $value_type) -> Result<$value_type> {
                if divisor == 0 {
                    return Err(AtomicError::Arithmetic("division by zero"));
                }
                Ok(self.apply(|current| current.wrapping_div(divisor)))
            }

            /// Updates the value with `setter`, returning the old value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordered_atomic::{", stringify!($name), ", MemoryOrder};")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10, MemoryOrder::AcqRel).unwrap();")]
            /// let old = atomic.set(|x| x * 2);
            /// assert_eq!(old, 10);
            /// assert_eq!(atomic.value(), 20);
            /// ```
            #[inline]
            pub fn set<F>(&self, setter: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                let mut current = self.value();
                loop {
                    let prev = self.compare_exchange(setter(current), current);
                    if prev == current {
                        return current;
                    }
                    current = prev;
                }
            }

            /// Updates the value with `setter` and `aux`, returning the old
            /// value.
            #[inline]
            pub fn set_with<A, F>(&self, aux: &A, setter: F) -> $value_type
            where
                F: Fn($value_type, &A) -> $value_type,
            {
                self.set(|current| setter(current, aux))
            }

            // Returns the new value, unlike `set`.
            #[inline]
            fn apply<F>(&self, op: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                op(self.set(&op))
            }
        }

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn new(value: $value_type, order: MemoryOrder) -> Result<Self> {
                Self::new(value, order)
            }

            #[inline]
            fn order(&self) -> MemoryOrder {
                self.order()
            }

            #[inline]
            fn value(&self) -> $value_type {
                self.value()
            }

            #[inline]
            fn set_value(&self, value: $value_type) {
                self.set_value(value);
            }

            #[inline]
            fn load(&self, order: MemoryOrder) -> Result<$value_type> {
                self.load(order)
            }

            #[inline]
            fn store(&self, value: $value_type, order: MemoryOrder) -> Result<()> {
                self.store(value, order)
            }

            #[inline]
            fn swap(&self, value: $value_type) -> $value_type {
                self.swap(value)
            }

            #[inline]
            fn compare_exchange(&self, value: $value_type, comparand: $value_type) -> $value_type {
                self.compare_exchange(value, comparand)
            }

            #[inline]
            fn is_lock_free(&self) -> bool {
                self.is_lock_free()
            }
        }

        impl crate::atomic::traits::UpdatableAtomic for $name {
            #[inline]
            fn set<F>(&self, setter: F) -> $value_type
            where
                F: Fn($value_type) -> $value_type,
            {
                self.set(setter)
            }

            #[inline]
            fn set_with<A, F>(&self, aux: &A, setter: F) -> $value_type
            where
                F: Fn($value_type, &A) -> $value_type,
            {
                self.set_with(aux, setter)
            }
        }

        impl crate::atomic::traits::AtomicNumber for $name {
            #[inline]
            fn increment(&self) -> $value_type {
                self.increment()
            }

            #[inline]
            fn decrement(&self) -> $value_type {
                self.decrement()
            }

            #[inline]
            fn fetch_add(&self, delta: $value_type) -> $value_type {
                self.fetch_add(delta)
            }

            #[inline]
            fn fetch_sub(&self, delta: $value_type) -> $value_type {
                self.fetch_sub(delta)
            }

            #[inline]
            fn multiply(&self, factor: $value_type) -> $value_type {
                self.multiply(factor)
            }

            #[inline]
            fn divide(&self, divisor: $value_type) -> Result<$value_type> {
                self.divide(divisor)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::with_validated_order(0, MemoryOrder::default())
            }
        }

        impl From<$value_type> for $name {
            /// Creates a `SeqCst` cell holding `value`.
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::with_validated_order(value, MemoryOrder::default())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.value())
                    .field("order", &self.order)
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.value())
            }
        }
    };
}

pub(crate) use impl_atomic_integer;
