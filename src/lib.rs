/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-ordered-atomic
//!
//! Atomic variables with explicit, validated memory orders.
//!
//! Every cell carries a memory order chosen when it is built (`Relaxed`,
//! `AcqRel` or `SeqCst`). That order governs the plain getter and setter,
//! compare-and-exchange and arithmetic. `load` and `store` additionally
//! accept a per-call order, checked against the same rules for every type.
//! Orders that make no sense for an operation are rejected with
//! [`AtomicError::Configuration`] before any memory is touched.
//!
//! ## Features
//!
//! - Scalar atomics: `AtomicBoolean`, `AtomicInteger`, `AtomicLong`
//! - Generic atomic: `AtomicCell<T>` for any padding-free `T`
//! - Reference atomic: `AtomicReference<T>` over `Option<Arc<T>>`
//! - Array atomics: `AtomicArray<A>` and its aliases
//! - Cache-line padding: `Padded<C>`
//! - Platform ordering capability, detected or installed once per process
//!
//! ## Example
//!
//! ```rust
//! use prism3_ordered_atomic::{AtomicInteger, MemoryOrder};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicInteger::new(0, MemoryOrder::AcqRel).unwrap());
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.increment();
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.load(MemoryOrder::Acquire).unwrap(), 1000);
//! assert!(counter.load(MemoryOrder::Release).is_err());
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export all atomic types and traits
pub use atomic::{
    install_platform_capability,
    platform_capability,
    Atomic,
    AtomicArray,
    AtomicBoolean,
    AtomicBooleanArray,
    AtomicCell,
    AtomicCellArray,
    AtomicError,
    AtomicInteger,
    AtomicIntegerArray,
    AtomicLong,
    AtomicLongArray,
    AtomicNumber,
    AtomicReference,
    AtomicReferenceArray,
    MemoryOrder,
    Padded,
    PlatformCapability,
    Result,
    StorageStrategy,
    UpdatableAtomic,
    CACHE_LINE_SIZE,
};
