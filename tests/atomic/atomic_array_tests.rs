/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordered_atomic::{
    AtomicBooleanArray,
    AtomicCellArray,
    AtomicError,
    AtomicIntegerArray,
    AtomicLongArray,
    AtomicReferenceArray,
    MemoryOrder,
};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[test]
fn test_with_length_defaults() {
    let ints = AtomicIntegerArray::with_length(4, MemoryOrder::AcqRel).unwrap();
    assert_eq!(ints.len(), 4);
    assert_eq!(ints.to_vec(), vec![0; 4]);

    let flags = AtomicBooleanArray::with_length(2, MemoryOrder::Relaxed).unwrap();
    assert_eq!(flags.to_vec(), vec![false, false]);

    let refs = AtomicReferenceArray::<String>::with_length(3, MemoryOrder::SeqCst).unwrap();
    assert!((0..3).all(|i| refs.is_null_at(i).unwrap()));
}

#[test]
fn test_with_length_zero_is_empty() {
    let longs = AtomicLongArray::with_length(0, MemoryOrder::SeqCst).unwrap();
    assert!(longs.is_empty());
    assert!(longs.to_vec().is_empty());
}

#[test]
fn test_negative_length_is_argument_error() {
    assert!(matches!(
        AtomicIntegerArray::with_length(-1, MemoryOrder::SeqCst),
        Err(AtomicError::Argument(_))
    ));
}

#[rstest]
#[case(MemoryOrder::Acquire)]
#[case(MemoryOrder::Release)]
#[case(MemoryOrder::Consume)]
fn test_construction_rejects_order(#[case] order: MemoryOrder) {
    assert!(matches!(
        AtomicLongArray::with_length(2, order),
        Err(AtomicError::Configuration { .. })
    ));
    assert!(matches!(
        AtomicLongArray::from_slice(&[1, 2], order),
        Err(AtomicError::Configuration { .. })
    ));
}

#[test]
fn test_null_source_is_argument_error() {
    assert!(matches!(
        AtomicIntegerArray::from_source(None, MemoryOrder::AcqRel),
        Err(AtomicError::Argument(_))
    ));
}

#[test]
fn test_source_is_copied() {
    let mut source = vec![1, 0, 2, 0];
    let array = AtomicIntegerArray::from_slice(&source, MemoryOrder::AcqRel).unwrap();

    source[1] = 5;
    assert_eq!(array.value(1).unwrap(), 0);

    array.set_value(3, 7).unwrap();
    assert_eq!(source[3], 0);
    assert_eq!(array.to_vec(), vec![1, 0, 2, 7]);
}

#[test]
fn test_out_of_range_index() {
    let array = AtomicLongArray::from_slice(&[1, 2], MemoryOrder::AcqRel).unwrap();
    assert!(matches!(array.value(2), Err(AtomicError::Argument(_))));
    assert!(matches!(array.set_value(5, 1), Err(AtomicError::Argument(_))));
    assert!(matches!(array.increment_at(9), Err(AtomicError::Argument(_))));
    assert!(array.get(2).is_none());
}

#[rstest]
fn test_store_then_load(
    #[values(MemoryOrder::Relaxed, MemoryOrder::Release, MemoryOrder::AcqRel, MemoryOrder::SeqCst)]
    store_order: MemoryOrder,
    #[values(MemoryOrder::Relaxed, MemoryOrder::Acquire, MemoryOrder::AcqRel, MemoryOrder::SeqCst)]
    load_order: MemoryOrder,
) {
    let array = AtomicCellArray::<f64>::with_length(3, MemoryOrder::AcqRel).unwrap();
    array.store(1, 2.5, store_order).unwrap();
    assert_eq!(array.load(1, load_order).unwrap(), 2.5);
    assert_eq!(array.load(0, load_order).unwrap(), 0.0);
}

#[test]
fn test_invalid_per_call_orders() {
    let array = AtomicIntegerArray::from_slice(&[1], MemoryOrder::SeqCst).unwrap();
    assert!(matches!(
        array.load(0, MemoryOrder::Release),
        Err(AtomicError::Configuration { operation: "load", .. })
    ));
    assert!(matches!(
        array.store(0, 2, MemoryOrder::Acquire),
        Err(AtomicError::Configuration { operation: "store", .. })
    ));
    assert_eq!(array.value(0).unwrap(), 1);
}

#[test]
fn test_compare_exchange_per_element() {
    let array = AtomicIntegerArray::from_slice(&[10, 20], MemoryOrder::AcqRel).unwrap();
    assert_eq!(array.compare_exchange(0, 11, 10).unwrap(), 10);
    assert_eq!(array.compare_exchange(1, 21, 10).unwrap(), 20);
    assert_eq!(array.to_vec(), vec![11, 20]);
}

#[test]
fn test_elements_share_order() {
    let array = AtomicLongArray::with_length(3, MemoryOrder::Relaxed).unwrap();
    assert_eq!(array.order(), MemoryOrder::Relaxed);
    assert!(array.iter().all(|e| e.order() == MemoryOrder::Relaxed));
    assert_eq!((&array).into_iter().count(), 3);
}

#[test]
fn test_reference_array() {
    let shared = Arc::new("x".to_string());
    let array =
        AtomicReferenceArray::from_slice(&[None, Some(shared.clone())], MemoryOrder::AcqRel)
            .unwrap();
    assert!(array.is_null_at(0).unwrap());
    assert!(!array.is_null_at(1).unwrap());
    assert!(Arc::ptr_eq(&array.value(1).unwrap().unwrap(), &shared));
}

#[test]
fn test_concurrent_increment_at() {
    let array = Arc::new(AtomicIntegerArray::with_length(4, MemoryOrder::AcqRel).unwrap());
    let mut handles = vec![];

    for t in 0..8 {
        let array = array.clone();
        handles.push(thread::spawn(move || {
            for i in 0..1000 {
                array.increment_at((t + i) % 4).unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(array.to_vec(), vec![2000; 4]);
}
