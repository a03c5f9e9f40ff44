/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer
//!
//! Provides an atomic 32-bit signed integer with an explicit, caller-selected memory
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
    AtomicInteger,
    std::sync::atomic::AtomicI32,
    i32,
    "32-bit signed integer"
);
