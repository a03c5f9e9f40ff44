/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Arrays
//!
//! Fixed-length arrays of atomics. Every element is a full atomic of its
//! own, so it follows the same storage and ordering rules as a standalone
//! cell.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::slice;

use crate::atomic::atomic_boolean::AtomicBoolean;
use crate::atomic::atomic_cell::AtomicCell;
use crate::atomic::atomic_integer::AtomicInteger;
use crate::atomic::atomic_long::AtomicLong;
use crate::atomic::atomic_reference::AtomicReference;
use crate::atomic::error::{
    AtomicError,
    Result,
};
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::traits::{
    Atomic,
    AtomicNumber,
};

/// Array of `i32` atomics.
pub type AtomicIntegerArray = AtomicArray<AtomicInteger>;

/// Array of `i64` atomics.
pub type AtomicLongArray = AtomicArray<AtomicLong>;

/// Array of boolean atomics.
pub type AtomicBooleanArray = AtomicArray<AtomicBoolean>;

/// Array of generic atomic cells.
pub type AtomicCellArray<T> = AtomicArray<AtomicCell<T>>;

/// Array of atomic references.
pub type AtomicReferenceArray<T> = AtomicArray<AtomicReference<T>>;

/// A fixed-length array of atomics sharing one memory order.
///
/// # Example
///
/// ```rust
/// use prism3_ordered_atomic::{AtomicIntegerArray, MemoryOrder};
///
/// let mut source = vec![1, 0, 2, 0];
/// let counts = AtomicIntegerArray::from_slice(&source, MemoryOrder::AcqRel).unwrap();
/// source[1] = 9;
///
/// assert_eq!(counts.value(1).unwrap(), 0);
/// assert_eq!(counts.increment_at(1).unwrap(), 1);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicArray<A> {
    elements: Box<[A]>,
    order: MemoryOrder,
}

impl<A: Atomic> AtomicArray<A> {
    /// Creates an array of `length` default-valued elements.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `order` cannot be attached to a
    /// cell, or an argument error if `length` is negative. Nothing is
    /// allocated on error.
    pub fn with_length(length: isize, order: MemoryOrder) -> Result<Self>
    where
        A::Value: Default,
    {
        let order = order.validate_construction()?;
        let length = usize::try_from(length).map_err(|_| {
            AtomicError::Argument(format!("array length must not be negative: {}", length))
        })?;
        let elements = (0..length)
            .map(|_| A::new(A::Value::default(), order))
            .collect::<Result<Box<[A]>>>()?;
        Ok(Self { elements, order })
    }

    /// Creates an array holding a copy of every element of `source`.
    ///
    /// Later changes to `source` are not visible through the array and
    /// vice versa.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `order` cannot be attached to a
    /// cell, or an argument error if `source` is `None`.
    pub fn from_source(source: Option<&[A::Value]>, order: MemoryOrder) -> Result<Self>
    where
        A::Value: Clone,
    {
        let order = order.validate_construction()?;
        let source =
            source.ok_or_else(|| AtomicError::Argument("array source must not be null".into()))?;
        let elements = source
            .iter()
            .map(|value| A::new(value.clone(), order))
            .collect::<Result<Box<[A]>>>()?;
        Ok(Self { elements, order })
    }

    /// Creates an array holding a copy of every element of `source`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `order` cannot be attached to a
    /// cell.
    #[inline]
    pub fn from_slice(source: &[A::Value], order: MemoryOrder) -> Result<Self>
    where
        A::Value: Clone,
    {
        Self::from_source(Some(source), order)
    }

    /// Returns the memory order shared by all elements.
    #[inline]
    pub fn order(&self) -> MemoryOrder {
        self.order
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the atomic at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&A> {
        self.elements.get(index)
    }

    /// Iterates over the element atomics.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, A> {
        self.elements.iter()
    }

    /// Gets the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `index` is out of range.
    #[inline]
    pub fn value(&self, index: usize) -> Result<A::Value> {
        self.element(index).map(A::value)
    }

    /// Sets the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `index` is out of range.
    #[inline]
    pub fn set_value(&self, index: usize, value: A::Value) -> Result<()> {
        self.element(index).map(|element| element.set_value(value))
    }

    /// Loads the value at `index` with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Release` and `Consume`, or an
    /// argument error if `index` is out of range.
    #[inline]
    pub fn load(&self, index: usize, order: MemoryOrder) -> Result<A::Value> {
        self.element(index)?.load(order)
    }

    /// Stores the value at `index` with an explicit order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `Acquire` and `Consume`, or an
    /// argument error if `index` is out of range.
    #[inline]
    pub fn store(&self, index: usize, value: A::Value, order: MemoryOrder) -> Result<()> {
        self.element(index)?.store(value, order)
    }

    /// Replaces the value at `index` with `value` if it equals
    /// `comparand`, returning the value observed before.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `index` is out of range.
    #[inline]
    pub fn compare_exchange(
        &self,
        index: usize,
        value: A::Value,
        comparand: A::Value,
    ) -> Result<A::Value> {
        self.element(index)
            .map(|element| element.compare_exchange(value, comparand))
    }

    /// Returns a snapshot of all values.
    ///
    /// Each element is read atomically, the snapshot as a whole is not.
    pub fn to_vec(&self) -> Vec<A::Value> {
        self.elements.iter().map(A::value).collect()
    }

    fn element(&self, index: usize) -> Result<&A> {
        self.elements.get(index).ok_or_else(|| {
            AtomicError::Argument(format!(
                "index {} out of range for array of length {}",
                index,
                self.elements.len()
            ))
        })
    }
}

impl<A: AtomicNumber> AtomicArray<A> {
    /// Increments the value at `index`, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `index` is out of range.
    #[inline]
    pub fn increment_at(&self, index: usize) -> Result<A::Value> {
        self.element(index).map(A::increment)
    }

    /// Decrements the value at `index`, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `index` is out of range.
    #[inline]
    pub fn decrement_at(&self, index: usize) -> Result<A::Value> {
        self.element(index).map(A::decrement)
    }
}

impl<T> AtomicArray<AtomicReference<T>> {
    /// Returns `true` if the reference at `index` is null.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `index` is out of range.
    #[inline]
    pub fn is_null_at(&self, index: usize) -> Result<bool> {
        self.element(index).map(AtomicReference::is_null)
    }
}

impl<'a, A> IntoIterator for &'a AtomicArray<A> {
    type Item = &'a A;
    type IntoIter = slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for AtomicArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicArray")
            .field("elements", &self.elements)
            .field("order", &self.order)
            .finish()
    }
}
