/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Atomic types whose memory order is stated explicitly, modeled on the
//! C++11 `memory_order` vocabulary.
//!
//! # Features
//!
//! - One memory order fixed per cell at construction, plus per-call orders
//!   for `load` and `store`, validated by uniform rules
//! - Scalar cells for `bool`, `i32` and `i64` with arithmetic
//! - A generic cell for any fixed-layout value, lock-free when the value
//!   fits a hardware CAS lane
//! - Nullable shared references compared by identity
//! - Fixed-length arrays of any of the above
//! - Cache-line padding for hot cells
//!
//! # Author
//!
//! Haixing Hu

#[macro_use]
mod atomic_integer_macro;

mod atomic_array;
mod atomic_boolean;
mod atomic_cell;
mod atomic_integer;
mod atomic_long;
mod atomic_reference;
mod error;
mod memory_order;
mod padded;
mod platform;
mod storage;
mod traits;

pub use atomic_array::{
    AtomicArray,
    AtomicBooleanArray,
    AtomicCellArray,
    AtomicIntegerArray,
    AtomicLongArray,
    AtomicReferenceArray,
};
pub use atomic_boolean::AtomicBoolean;
pub use atomic_cell::AtomicCell;
pub use atomic_integer::AtomicInteger;
pub use atomic_long::AtomicLong;
pub use atomic_reference::AtomicReference;
pub use error::{
    AtomicError,
    Result,
};
pub use memory_order::MemoryOrder;
pub use padded::{
    Padded,
    CACHE_LINE_SIZE,
};
pub use platform::{
    install_platform_capability,
    platform_capability,
    PlatformCapability,
};
pub use storage::StorageStrategy;
pub use traits::{
    Atomic,
    AtomicNumber,
    UpdatableAtomic,
};
