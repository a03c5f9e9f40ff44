/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Order
//!
//! The abstract memory orders accepted by every atomic type, together with
//! the rules deciding which order is legal for which operation.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::error::{
    AtomicError,
    Result,
};

/// Memory ordering constraint of an atomic operation, modeled on C++11
/// `memory_order`.
///
/// The rules are uniform across all atomic types:
///
/// | Operation     | Accepted                          |
/// |---------------|-----------------------------------|
/// | construction  | `Relaxed`, `AcqRel`, `SeqCst`     |
/// | load          | `Relaxed`, `Acquire`, `AcqRel`, `SeqCst` |
/// | store         | `Relaxed`, `Release`, `AcqRel`, `SeqCst` |
///
/// `Consume` is always rejected: no modeled architecture reorders dependent
/// loads.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryOrder {
    /// No ordering constraint, only atomicity.
    Relaxed,
    /// Dependent-load ordering. Never supported.
    Consume,
    /// No later access may be hoisted before a load with this order.
    Acquire,
    /// No earlier access may sink after a store with this order.
    Release,
    /// `Acquire` for the read part, `Release` for the write part.
    AcqRel,
    /// `AcqRel` plus a single total order agreed on by all threads.
    #[default]
    SeqCst,
}

impl MemoryOrder {
    /// Checks that this order may be attached to a cell at construction.
    ///
    /// Acquire-only and Release-only describe asymmetric intents and are
    /// meaningless for a symmetric initial assignment.
    pub fn validate_construction(self) -> Result<Self> {
        match self {
            MemoryOrder::Relaxed | MemoryOrder::AcqRel | MemoryOrder::SeqCst => Ok(self),
            _ => Err(self.reject("construction")),
        }
    }

    /// Checks that this order may be used for a load.
    pub fn validate_load(self) -> Result<Self> {
        match self {
            MemoryOrder::Release | MemoryOrder::Consume => Err(self.reject("load")),
            _ => Ok(self),
        }
    }

    /// Checks that this order may be used for a store.
    pub fn validate_store(self) -> Result<Self> {
        match self {
            MemoryOrder::Acquire | MemoryOrder::Consume => Err(self.reject("store")),
            _ => Ok(self),
        }
    }

    /// The order used by the `value()` getter of a cell configured with
    /// this order.
    #[inline]
    pub fn getter_order(self) -> MemoryOrder {
        if self == MemoryOrder::SeqCst {
            MemoryOrder::SeqCst
        } else {
            MemoryOrder::Acquire
        }
    }

    /// Success and failure orderings for a read-modify-write instruction
    /// issued by a cell configured with this order.
    #[inline]
    pub(crate) fn rmw_orderings(self) -> (Ordering, Ordering) {
        match self {
            MemoryOrder::Relaxed => (Ordering::Relaxed, Ordering::Relaxed),
            MemoryOrder::Consume | MemoryOrder::Acquire => (Ordering::Acquire, Ordering::Acquire),
            MemoryOrder::Release => (Ordering::Release, Ordering::Relaxed),
            MemoryOrder::AcqRel => (Ordering::AcqRel, Ordering::Acquire),
            MemoryOrder::SeqCst => (Ordering::SeqCst, Ordering::SeqCst),
        }
    }

    /// The ordering of a single read-modify-write instruction.
    #[inline]
    pub(crate) fn rmw_ordering(self) -> Ordering {
        self.rmw_orderings().0
    }

    fn reject(self, operation: &'static str) -> AtomicError {
        tracing::debug!(order = ?self, operation, "rejected memory order");
        AtomicError::Configuration {
            order: self,
            operation,
        }
    }
}

impl fmt::Display for MemoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemoryOrder::Relaxed => "relaxed",
            MemoryOrder::Consume => "consume",
            MemoryOrder::Acquire => "acquire",
            MemoryOrder::Release => "release",
            MemoryOrder::AcqRel => "acq_rel",
            MemoryOrder::SeqCst => "seq_cst",
        };
        f.write_str(name)
    }
}
