/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordered_atomic::{
    install_platform_capability,
    platform_capability,
    AtomicInteger,
    MemoryOrder,
    PlatformCapability,
};

#[test]
fn test_detected_capability_matches_target() {
    let expected = cfg!(any(target_arch = "x86", target_arch = "x86_64"));
    assert_eq!(PlatformCapability::detect().is_strong(), expected);
}

#[test]
fn test_capability_is_chosen_once() {
    let first = platform_capability();
    assert_eq!(platform_capability(), first);
    assert_eq!(install_platform_capability(first), Ok(()));

    let other = PlatformCapability::from_strong_ordering(!first.is_strong());
    assert_eq!(install_platform_capability(other), Err(first));

    // Cells built afterwards keep working under the capability in force.
    let atomic = AtomicInteger::new(1, MemoryOrder::AcqRel).unwrap();
    atomic.store(2, MemoryOrder::Release).unwrap();
    assert_eq!(atomic.load(MemoryOrder::Acquire).unwrap(), 2);
}
