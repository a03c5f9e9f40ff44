/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Long
//!
//! Provides an atomic 64-bit signed integer with an explicit, caller-selected memory
//! order.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;
use crate::atomic::error::{
    AtomicError,
    Result,
};
use crate::atomic::memory_order::MemoryOrder;
use crate::atomic::padded::Padded;
use crate::atomic::platform::{
    platform_capability,
    PlatformCapability,
};

impl_atomic_integer!(
    AtomicLong,
    std::sync::atomic::AtomicI64,
    i64,
    "64-bit signed integer"
);
