/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Errors
//!
//! Errors raised synchronously by atomic operations before any storage is
//! touched.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

use crate::atomic::memory_order::MemoryOrder;

/// Errors returned by the atomic types of this crate.
///
/// CAS contention is never reported as an error; contended operations
/// simply retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtomicError {
    /// The memory order is not supported by the attempted operation.
    #[error("memory order {order:?} is not supported for {operation}")]
    Configuration {
        /// The rejected order.
        order: MemoryOrder,
        /// The operation the order was passed to.
        operation: &'static str,
    },

    /// An argument is invalid (null source, negative length, bad index).
    #[error("invalid argument: {0}")]
    Argument(String),

    /// An arithmetic operation cannot be performed.
    #[error("arithmetic error: {0}")]
    Arithmetic(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T, E = AtomicError> = std::result::Result<T, E>;
