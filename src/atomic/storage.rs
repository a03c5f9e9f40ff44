/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Storage Strategies
//!
//! Chooses how an arbitrary fixed-layout value is kept atomically, based on
//! its byte size:
//!
//! | Value                | Storage                                   |
//! |----------------------|-------------------------------------------|
//! | `bool`, `i32`, `i64` | the matching scalar atomic                |
//! | 4 bytes              | bits overlaid on an `AtomicU32` lane      |
//! | 8 bytes              | bits overlaid on an `AtomicU64` lane      |
//! | 1 to 3 bytes         | widened to a `u32` word behind a lock     |
//! | 5 to 7 bytes         | widened to a `u64` word behind a lock     |
//! | anything else        | the value itself behind a lock            |
//!
//! This module is the only place where values are reinterpreted as raw
//! integer words.
//!
//! # Author
//!
//! Haixing Hu

use std::any::{
    type_name,
    TypeId,
};
use std::mem::size_of;
use std::ptr;
use std::sync::atomic::{
    AtomicU32,
    AtomicU64,
};

use bytemuck::{
    NoUninit,
    Pod,
};
use parking_lot::Mutex;

use crate::atomic::atomic_boolean::AtomicBoolean;
use crate::atomic::atomic_integer::AtomicInteger;
use crate::atomic::atomic_long::AtomicLong;
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::platform::{
    Lane,
    PlatformCapability,
};

/// How an atomic cell keeps its value.
///
/// Resolved once when the cell is constructed and never re-evaluated.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageStrategy {
    /// The value's bits live in a 32-bit hardware CAS lane.
    InlineCas32,
    /// The value's bits live in a 64-bit hardware CAS lane.
    InlineCas64,
    /// The value is guarded by a lock private to the cell.
    LockEmulated,
}

impl StorageStrategy {
    /// Returns the strategy an `AtomicCell<T>` uses.
    pub fn of<T: 'static>() -> Self {
        match NativeScalar::of::<T>() {
            Some(NativeScalar::Boolean | NativeScalar::Integer) => StorageStrategy::InlineCas32,
            Some(NativeScalar::Long) => StorageStrategy::InlineCas64,
            None => match size_of::<T>() {
                4 => StorageStrategy::InlineCas32,
                8 => StorageStrategy::InlineCas64,
                _ => StorageStrategy::LockEmulated,
            },
        }
    }

    /// Returns `true` unless the strategy takes a lock.
    #[inline]
    pub const fn is_lock_free(self) -> bool {
        !matches!(self, StorageStrategy::LockEmulated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NativeScalar {
    Boolean,
    Integer,
    Long,
}

impl NativeScalar {
    fn of<T: 'static>() -> Option<Self> {
        let id = TypeId::of::<T>();
        if id == TypeId::of::<bool>() {
            Some(NativeScalar::Boolean)
        } else if id == TypeId::of::<i32>() {
            Some(NativeScalar::Integer)
        } else if id == TypeId::of::<i64>() {
            Some(NativeScalar::Long)
        } else {
            None
        }
    }
}

/// Copies the bytes of `value` into the leading bytes of a zeroed word.
#[inline]
fn widen<T: NoUninit, W: Pod>(value: T) -> W {
    let mut word = W::zeroed();
    bytemuck::bytes_of_mut(&mut word)[..size_of::<T>()]
        .copy_from_slice(bytemuck::bytes_of(&value));
    word
}

/// Reads a `T` back from the leading bytes of `word`.
///
/// # Safety
///
/// The leading `size_of::<T>()` bytes of `word` must hold a valid `T`,
/// which holds for any word produced by [`widen`] from a `T`.
#[inline]
unsafe fn narrow<T: NoUninit, W: Pod>(word: W) -> T {
    debug_assert!(size_of::<T>() <= size_of::<W>());
    // SAFETY: in bounds per the assertion, valid per the caller. The word
    // may be less aligned than `T`.
    unsafe { ptr::read_unaligned(bytemuck::bytes_of(&word).as_ptr().cast::<T>()) }
}

/// Converts between a cell's value type and the native scalar it delegates
/// to.
///
/// # Safety
///
/// `T` and `U` must be the same type.
#[inline]
unsafe fn recast<T: NoUninit, U: NoUninit>(value: T) -> U {
    debug_assert_eq!(TypeId::of::<T>(), TypeId::of::<U>());
    // SAFETY: identical types, so the widened bytes are a valid `U`.
    unsafe { narrow(widen::<T, u64>(value)) }
}

/// Returns `true` if the two values are equal bit for bit.
#[inline]
pub(crate) fn bits_eq<T: NoUninit>(a: &T, b: &T) -> bool {
    bytemuck::bytes_of(a) == bytemuck::bytes_of(b)
}

/// Storage of one atomic cell.
pub(crate) enum Slot<T> {
    Boolean(AtomicBoolean),
    Integer(AtomicInteger),
    Long(AtomicLong),
    Lane32(AtomicU32),
    Lane64(AtomicU64),
    Widened32(Mutex<u32>),
    Widened64(Mutex<u64>),
    Locked(Mutex<T>),
}

impl<T: NoUninit> Slot<T> {
    /// Builds the storage for `value`.
    ///
    /// `order` must already be validated for construction.
    pub(crate) fn new(value: T, order: MemoryOrder) -> Self {
        let size = size_of::<T>();
        // SAFETY (native arms): `NativeScalar::of` matched `T` exactly.
        let slot = match NativeScalar::of::<T>() {
            Some(NativeScalar::Boolean) => {
                Slot::Boolean(AtomicBoolean::with_validated_order(unsafe { recast(value) }, order))
            }
            Some(NativeScalar::Integer) => {
                Slot::Integer(AtomicInteger::with_validated_order(unsafe { recast(value) }, order))
            }
            Some(NativeScalar::Long) => {
                Slot::Long(AtomicLong::with_validated_order(unsafe { recast(value) }, order))
            }
            None => match size {
                4 => Slot::Lane32(AtomicU32::new(widen(value))),
                8 => Slot::Lane64(AtomicU64::new(widen(value))),
                1..=3 => Slot::Widened32(Mutex::new(widen(value))),
                5..=7 => Slot::Widened64(Mutex::new(widen(value))),
                _ => Slot::Locked(Mutex::new(value)),
            },
        };
        tracing::trace!(
            value_type = type_name::<T>(),
            size,
            strategy = ?slot.strategy(),
            "storage strategy selected"
        );
        slot
    }

    pub(crate) fn strategy(&self) -> StorageStrategy {
        match self {
            Slot::Boolean(_) | Slot::Integer(_) | Slot::Lane32(_) => StorageStrategy::InlineCas32,
            Slot::Long(_) | Slot::Lane64(_) => StorageStrategy::InlineCas64,
            Slot::Widened32(_) | Slot::Widened64(_) | Slot::Locked(_) => {
                StorageStrategy::LockEmulated
            }
        }
    }

    /// Loads with a validated order.
    pub(crate) fn load(&self, platform: PlatformCapability, order: MemoryOrder) -> T {
        // SAFETY (unsafe arms): native arms hold `T` itself; lane arms only
        // ever hold words widened from a `T`.
        match self {
            Slot::Boolean(cell) => {
                let value = cell.load_unchecked(order);
                unsafe { recast(value) }
            }
            Slot::Integer(cell) => {
                let value = cell.load_unchecked(order);
                unsafe { recast(value) }
            }
            Slot::Long(cell) => {
                let value = cell.load_unchecked(order);
                unsafe { recast(value) }
            }
            Slot::Lane32(lane) => {
                let word = platform.load(lane, order);
                unsafe { narrow(word) }
            }
            Slot::Lane64(lane) => {
                let word = platform.load(lane, order);
                unsafe { narrow(word) }
            }
            Slot::Widened32(word) => {
                let word = *word.lock();
                unsafe { narrow(word) }
            }
            Slot::Widened64(word) => {
                let word = *word.lock();
                unsafe { narrow(word) }
            }
            Slot::Locked(value) => *value.lock(),
        }
    }

    /// Stores with a validated order.
    pub(crate) fn store(&self, value: T, platform: PlatformCapability, order: MemoryOrder) {
        // SAFETY (native arms): `T` is the scalar's own type.
        match self {
            Slot::Boolean(cell) => cell.store_unchecked(unsafe { recast(value) }, order),
            Slot::Integer(cell) => cell.store_unchecked(unsafe { recast(value) }, order),
            Slot::Long(cell) => cell.store_unchecked(unsafe { recast(value) }, order),
            Slot::Lane32(lane) => platform.store(lane, widen(value), order),
            Slot::Lane64(lane) => platform.store(lane, widen(value), order),
            Slot::Widened32(word) => *word.lock() = widen(value),
            Slot::Widened64(word) => *word.lock() = widen(value),
            Slot::Locked(slot) => *slot.lock() = value,
        }
    }

    /// Exchanges the value with the read-modify-write ordering of `order`.
    pub(crate) fn swap(&self, value: T, order: MemoryOrder) -> T {
        let rmw = order.rmw_ordering();
        // SAFETY (all unsafe blocks): see `load`.
        match self {
            Slot::Boolean(cell) => unsafe { recast(cell.swap(recast(value))) },
            Slot::Integer(cell) => unsafe { recast(cell.swap(recast(value))) },
            Slot::Long(cell) => unsafe { recast(cell.swap(recast(value))) },
            Slot::Lane32(lane) => {
                let prior = lane.swap(widen(value), rmw);
                unsafe { narrow(prior) }
            }
            Slot::Lane64(lane) => {
                let prior = lane.swap(widen(value), rmw);
                unsafe { narrow(prior) }
            }
            Slot::Widened32(word) => {
                let prior = std::mem::replace(&mut *word.lock(), widen(value));
                unsafe { narrow(prior) }
            }
            Slot::Widened64(word) => {
                let prior = std::mem::replace(&mut *word.lock(), widen(value));
                unsafe { narrow(prior) }
            }
            Slot::Locked(slot) => std::mem::replace(&mut *slot.lock(), value),
        }
    }

    /// Replaces the value with `value` if it is bitwise equal to
    /// `comparand`, returning the value observed before.
    pub(crate) fn compare_exchange(&self, value: T, comparand: T, order: MemoryOrder) -> T {
        // SAFETY (all unsafe blocks): see `load`.
        match self {
            Slot::Boolean(cell) => unsafe {
                recast(cell.compare_exchange(recast(value), recast(comparand)))
            },
            Slot::Integer(cell) => unsafe {
                recast(cell.compare_exchange(recast(value), recast(comparand)))
            },
            Slot::Long(cell) => unsafe {
                recast(cell.compare_exchange(recast(value), recast(comparand)))
            },
            Slot::Lane32(lane) => {
                let prior = cas_lane(lane, widen(value), widen(comparand), order);
                unsafe { narrow(prior) }
            }
            Slot::Lane64(lane) => {
                let prior = cas_lane(lane, widen(value), widen(comparand), order);
                unsafe { narrow(prior) }
            }
            Slot::Widened32(word) => {
                let prior = cas_locked(word, widen(value), widen(comparand));
                unsafe { narrow(prior) }
            }
            Slot::Widened64(word) => {
                let prior = cas_locked(word, widen(value), widen(comparand));
                unsafe { narrow(prior) }
            }
            Slot::Locked(slot) => {
                let mut guard = slot.lock();
                let prior = *guard;
                if bits_eq(&prior, &comparand) {
                    *guard = value;
                }
                prior
            }
        }
    }
}

#[inline]
fn cas_lane<L: Lane>(lane: &L, value: L::Word, comparand: L::Word, order: MemoryOrder) -> L::Word {
    let (success, failure) = order.rmw_orderings();
    match lane.compare_exchange(comparand, value, success, failure) {
        Ok(prior) => prior,
        Err(actual) => actual,
    }
}

#[inline]
fn cas_locked<W: Copy + Eq>(word: &Mutex<W>, value: W, comparand: W) -> W {
    let mut guard = word.lock();
    let prior = *guard;
    if prior == comparand {
        *guard = value;
    }
    prior
}
