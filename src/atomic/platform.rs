/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Platform Operation Set
//!
//! Maps the abstract [`MemoryOrder`] onto concrete load/store/fence
//! sequences. Two operation sets exist: one for strongly ordered hardware,
//! where acquire loads and release stores are plain accesses, and one for
//! weakly ordered hardware, where they need explicit fences. The set is
//! chosen once per process from an injected [`PlatformCapability`].
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    fence,
    AtomicI32,
    AtomicI64,
    AtomicU32,
    AtomicU64,
    Ordering,
};
use std::sync::OnceLock;

use crate::atomic::memory_order::MemoryOrder;

static CAPABILITY: OnceLock<PlatformCapability> = OnceLock::new();

/// Ordering strength of the hardware the process runs on.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformCapability {
    /// Total-store-order hardware (x86, x86_64): acquire and release come
    /// for free with plain accesses.
    Strong,
    /// Weakly ordered hardware (ARM, POWER, RISC-V): acquire and release
    /// need explicit fences.
    Weak,
}

impl PlatformCapability {
    /// Builds a capability from the "strong memory model available" flag.
    #[inline]
    pub const fn from_strong_ordering(strong: bool) -> Self {
        if strong {
            PlatformCapability::Strong
        } else {
            PlatformCapability::Weak
        }
    }

    /// Derives the capability from the compilation target.
    pub const fn detect() -> Self {
        Self::from_strong_ordering(cfg!(any(target_arch = "x86", target_arch = "x86_64")))
    }

    /// Returns `true` for strongly ordered hardware.
    #[inline]
    pub const fn is_strong(self) -> bool {
        matches!(self, PlatformCapability::Strong)
    }

    /// Loads from `lane` with the sequence `order` requires on this
    /// platform.
    ///
    /// The order is expected to have passed
    /// [`MemoryOrder::validate_load`]; invalid orders are treated as
    /// `Acquire`.
    #[inline]
    pub(crate) fn load<L: Lane>(self, lane: &L, order: MemoryOrder) -> L::Word {
        match self {
            PlatformCapability::Strong => load_with::<StrongOrdering, L>(lane, order),
            PlatformCapability::Weak => load_with::<WeakOrdering, L>(lane, order),
        }
    }

    /// Stores into `lane` with the sequence `order` requires on this
    /// platform.
    ///
    /// The order is expected to have passed
    /// [`MemoryOrder::validate_store`]; invalid orders are treated as
    /// `Release`.
    #[inline]
    pub(crate) fn store<L: Lane>(self, lane: &L, word: L::Word, order: MemoryOrder) {
        match self {
            PlatformCapability::Strong => store_with::<StrongOrdering, L>(lane, word, order),
            PlatformCapability::Weak => store_with::<WeakOrdering, L>(lane, word, order),
        }
    }
}

/// Installs the process-wide platform capability.
///
/// Only the first installation takes effect. Re-installing the same value
/// is accepted; installing a different value afterwards returns the
/// capability already in force.
pub fn install_platform_capability(
    capability: PlatformCapability,
) -> Result<(), PlatformCapability> {
    let current = *CAPABILITY.get_or_init(|| {
        tracing::debug!(?capability, "platform capability installed");
        capability
    });
    if current == capability {
        Ok(())
    } else {
        Err(current)
    }
}

/// Returns the process-wide platform capability, detecting it from the
/// target if none was installed.
#[inline]
pub fn platform_capability() -> PlatformCapability {
    *CAPABILITY.get_or_init(|| {
        let detected = PlatformCapability::detect();
        tracing::debug!(capability = ?detected, "platform capability detected");
        detected
    })
}

/// An atomic word that the platform operation set can act on.
pub(crate) trait Lane: Send + Sync {
    type Word: Copy + Eq;

    fn load(&self, order: Ordering) -> Self::Word;

    fn store(&self, word: Self::Word, order: Ordering);

    fn swap(&self, word: Self::Word, order: Ordering) -> Self::Word;

    fn compare_exchange(
        &self,
        current: Self::Word,
        new: Self::Word,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Word, Self::Word>;
}

macro_rules! impl_lane {
    ($($lane:ty => $word:ty),* $(,)?) => {
        $(
            impl Lane for $lane {
                type Word = $word;

                #[inline]
                fn load(&self, order: Ordering) -> $word {
                    <$lane>::load(self, order)
                }

                #[inline]
                fn store(&self, word: $word, order: Ordering) {
                    <$lane>::store(self, word, order);
                }

                #[inline]
                fn swap(&self, word: $word, order: Ordering) -> $word {
                    <$lane>::swap(self, word, order)
                }

                #[inline]
                fn compare_exchange(
                    &self,
                    current: $word,
                    new: $word,
                    success: Ordering,
                    failure: Ordering,
                ) -> Result<$word, $word> {
                    <$lane>::compare_exchange(self, current, new, success, failure)
                }
            }
        )*
    };
}

impl_lane!(
    AtomicI32 => i32,
    AtomicI64 => i64,
    AtomicU32 => u32,
    AtomicU64 => u64,
);

/// The minimal primitive set every memory order is expressed with.
trait OrderingOps {
    #[inline]
    fn read<L: Lane>(lane: &L) -> L::Word {
        lane.load(Ordering::Relaxed)
    }

    fn read_acquire<L: Lane>(lane: &L) -> L::Word;

    #[inline]
    fn read_seqcst<L: Lane>(lane: &L) -> L::Word {
        fence(Ordering::SeqCst);
        let word = lane.load(Ordering::SeqCst);
        fence(Ordering::SeqCst);
        word
    }

    #[inline]
    fn write<L: Lane>(lane: &L, word: L::Word) {
        lane.store(word, Ordering::Relaxed);
    }

    fn write_release<L: Lane>(lane: &L, word: L::Word);

    fn write_seqcst<L: Lane>(lane: &L, word: L::Word);
}

/// Operation set for total-store-order hardware.
struct StrongOrdering;

impl OrderingOps for StrongOrdering {
    #[inline]
    fn read_acquire<L: Lane>(lane: &L) -> L::Word {
        // Compiles to a plain load on TSO targets.
        lane.load(Ordering::Acquire)
    }

    #[inline]
    fn write_release<L: Lane>(lane: &L, word: L::Word) {
        lane.store(word, Ordering::Release);
    }

    #[inline]
    fn write_seqcst<L: Lane>(lane: &L, word: L::Word) {
        // A locked exchange is a full barrier; a plain store would only be
        // a release.
        lane.swap(word, Ordering::SeqCst);
    }
}

/// Operation set for weakly ordered hardware.
struct WeakOrdering;

impl OrderingOps for WeakOrdering {
    #[inline]
    fn read_acquire<L: Lane>(lane: &L) -> L::Word {
        let word = lane.load(Ordering::Relaxed);
        fence(Ordering::Acquire);
        word
    }

    #[inline]
    fn write_release<L: Lane>(lane: &L, word: L::Word) {
        fence(Ordering::Release);
        lane.store(word, Ordering::Relaxed);
    }

    #[inline]
    fn write_seqcst<L: Lane>(lane: &L, word: L::Word) {
        fence(Ordering::SeqCst);
        lane.store(word, Ordering::SeqCst);
        fence(Ordering::SeqCst);
    }
}

#[inline]
fn load_with<P: OrderingOps, L: Lane>(lane: &L, order: MemoryOrder) -> L::Word {
    match order {
        MemoryOrder::Relaxed => P::read(lane),
        MemoryOrder::SeqCst => P::read_seqcst(lane),
        _ => P::read_acquire(lane),
    }
}

#[inline]
fn store_with<P: OrderingOps, L: Lane>(lane: &L, word: L::Word, order: MemoryOrder) {
    match order {
        MemoryOrder::Relaxed => P::write(lane, word),
        MemoryOrder::SeqCst => P::write_seqcst(lane, word),
        _ => P::write_release(lane, word),
    }
}
