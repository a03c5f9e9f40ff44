/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordered_atomic::{
    AtomicBoolean,
    AtomicError,
    MemoryOrder,
};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
#[case(MemoryOrder::Relaxed)]
#[case(MemoryOrder::AcqRel)]
#[case(MemoryOrder::SeqCst)]
fn test_new(#[case] order: MemoryOrder) {
    let flag = AtomicBoolean::new(true, order).unwrap();
    assert!(flag.value());
    assert_eq!(flag.order(), order);
}

#[rstest]
#[case(MemoryOrder::Acquire)]
#[case(MemoryOrder::Release)]
#[case(MemoryOrder::Consume)]
fn test_new_rejects_order(#[case] order: MemoryOrder) {
    assert!(matches!(
        AtomicBoolean::new(false, order),
        Err(AtomicError::Configuration { operation: "construction", .. })
    ));
}

#[test]
fn test_default_and_from() {
    assert!(!AtomicBoolean::default().value());
    let flag = AtomicBoolean::from(true);
    assert!(flag.value());
    assert_eq!(flag.order(), MemoryOrder::SeqCst);
}

#[rstest]
#[case(MemoryOrder::Relaxed)]
#[case(MemoryOrder::AcqRel)]
#[case(MemoryOrder::SeqCst)]
fn test_set_value(#[case] order: MemoryOrder) {
    let flag = AtomicBoolean::new(false, order).unwrap();
    flag.set_value(true);
    assert!(flag.value());
    flag.set_value(false);
    assert!(!flag.value());
}

#[rstest]
fn test_store_then_load(
    #[values(MemoryOrder::Relaxed, MemoryOrder::Release, MemoryOrder::AcqRel, MemoryOrder::SeqCst)]
    store_order: MemoryOrder,
    #[values(MemoryOrder::Relaxed, MemoryOrder::Acquire, MemoryOrder::AcqRel, MemoryOrder::SeqCst)]
    load_order: MemoryOrder,
) {
    let flag = AtomicBoolean::new(false, MemoryOrder::AcqRel).unwrap();
    flag.store(true, store_order).unwrap();
    assert!(flag.load(load_order).unwrap());
}

#[test]
fn test_invalid_load_and_store_orders() {
    let flag = AtomicBoolean::new(false, MemoryOrder::SeqCst).unwrap();
    assert!(flag.load(MemoryOrder::Release).is_err());
    assert!(flag.load(MemoryOrder::Consume).is_err());
    assert!(flag.store(true, MemoryOrder::Acquire).is_err());
    assert!(flag.store(true, MemoryOrder::Consume).is_err());
    assert!(!flag.value());
}

#[test]
fn test_swap() {
    let flag = AtomicBoolean::new(false, MemoryOrder::AcqRel).unwrap();
    assert!(!flag.swap(true));
    assert!(flag.swap(true));
    assert!(flag.value());
}

#[test]
fn test_compare_exchange() {
    let flag = AtomicBoolean::new(false, MemoryOrder::AcqRel).unwrap();
    assert!(!flag.compare_exchange(true, false));
    assert!(flag.value());
    assert!(flag.compare_exchange(false, false));
    assert!(flag.value());
}

#[test]
fn test_compare_set() {
    let flag = AtomicBoolean::new(false, MemoryOrder::SeqCst).unwrap();
    assert!(flag.compare_set(false, true).is_ok());
    assert_eq!(flag.compare_set(false, true), Err(true));
}

#[test]
fn test_set_if_false_and_set_if_true() {
    let flag = AtomicBoolean::new(false, MemoryOrder::AcqRel).unwrap();
    assert!(flag.set_if_false(true).is_ok());
    assert!(flag.set_if_false(true).is_err());
    assert!(flag.set_if_true(false).is_ok());
    assert!(!flag.value());
}

#[test]
fn test_negate() {
    let flag = AtomicBoolean::new(false, MemoryOrder::Relaxed).unwrap();
    assert!(flag.negate());
    assert!(!flag.negate());
    assert!(!flag.value());
}

#[test]
fn test_set_returns_old_value() {
    let flag = AtomicBoolean::new(true, MemoryOrder::SeqCst).unwrap();
    assert!(flag.set(|x| !x));
    assert!(!flag.value());
    assert!(!flag.set_with(&true, |x, aux| x || *aux));
    assert!(flag.value());
}

#[test]
fn test_equals_and_lock_free() {
    let flag = AtomicBoolean::new(true, MemoryOrder::AcqRel).unwrap();
    assert!(flag.equals(true));
    assert!(!flag.equals(false));
    assert!(flag.is_lock_free());
}

#[test]
fn test_display_and_debug() {
    let flag = AtomicBoolean::new(true, MemoryOrder::Relaxed).unwrap();
    assert_eq!(flag.to_string(), "true");
    assert!(format!("{:?}", flag).contains("AtomicBoolean"));
}

#[test]
fn test_concurrent_negate_is_even() {
    let flag = Arc::new(AtomicBoolean::new(false, MemoryOrder::AcqRel).unwrap());
    let mut handles = vec![];

    for _ in 0..4 {
        let flag = flag.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..1000 {
                flag.negate();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(!flag.value());
}

#[test]
fn test_only_one_thread_wins_the_flag() {
    let flag = Arc::new(AtomicBoolean::new(false, MemoryOrder::SeqCst).unwrap());
    let mut handles = vec![];

    for _ in 0..10 {
        let flag = flag.clone();
        handles.push(thread::spawn(move || flag.set_if_false(true).is_ok()));
    }

    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
}
