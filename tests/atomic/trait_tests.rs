/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordered_atomic::{
    Atomic,
    AtomicArray,
    AtomicBoolean,
    AtomicCell,
    AtomicError,
    AtomicInteger,
    AtomicLong,
    AtomicNumber,
    AtomicReference,
    MemoryOrder,
    UpdatableAtomic,
};
use std::fmt::Debug;
use std::sync::Arc;

const ALL_ORDERS: [MemoryOrder; 6] = [
    MemoryOrder::Relaxed,
    MemoryOrder::Consume,
    MemoryOrder::Acquire,
    MemoryOrder::Release,
    MemoryOrder::AcqRel,
    MemoryOrder::SeqCst,
];

// The same order rules hold for every atomic type.
fn check_order_rules<T>(a: T::Value, b: T::Value)
where
    T: Atomic,
    T::Value: Clone,
{
    for order in ALL_ORDERS {
        let expected = matches!(
            order,
            MemoryOrder::Relaxed | MemoryOrder::AcqRel | MemoryOrder::SeqCst
        );
        assert_eq!(T::new(a.clone(), order).is_ok(), expected, "new {:?}", order);
    }

    let atomic = T::new(a, MemoryOrder::AcqRel).unwrap();
    for order in ALL_ORDERS {
        let load_ok = !matches!(order, MemoryOrder::Release | MemoryOrder::Consume);
        assert_eq!(atomic.load(order).is_ok(), load_ok, "load {:?}", order);

        let store_ok = !matches!(order, MemoryOrder::Acquire | MemoryOrder::Consume);
        assert_eq!(atomic.store(b.clone(), order).is_ok(), store_ok, "store {:?}", order);
    }
}

#[test]
fn test_order_rules_are_uniform() {
    check_order_rules::<AtomicBoolean>(false, true);
    check_order_rules::<AtomicInteger>(1, 2);
    check_order_rules::<AtomicLong>(1, 2);
    check_order_rules::<AtomicCell<f64>>(1.0, 2.0);
    check_order_rules::<AtomicCell<[u8; 3]>>([1; 3], [2; 3]);
    check_order_rules::<AtomicReference<i32>>(None, Some(Arc::new(1)));
}

fn check_atomic<T>(a: T::Value, b: T::Value)
where
    T: UpdatableAtomic,
    T::Value: Clone + PartialEq + Debug,
{
    let atomic = T::new(a.clone(), MemoryOrder::SeqCst).unwrap();
    atomic.set_value(b.clone());
    assert_eq!(atomic.value(), b);

    let old = atomic.swap(a.clone());
    assert_eq!(old, b);

    let prev = atomic.compare_exchange(b.clone(), a.clone());
    assert_eq!(prev, a);
    assert_eq!(atomic.value(), b);

    let b_for_setter = b.clone();
    let a_for_setter = a.clone();
    let old = atomic.set(move |current| {
        if current == b_for_setter {
            a_for_setter.clone()
        } else {
            b_for_setter.clone()
        }
    });
    assert_eq!(old, b);
    assert_eq!(atomic.value(), a);

    let old = atomic.set_with(&b, |_, aux| aux.clone());
    assert_eq!(old, a);
    assert_eq!(atomic.value(), b);
}

#[test]
fn test_updatable_atomic_trait() {
    check_atomic::<AtomicBoolean>(false, true);
    check_atomic::<AtomicInteger>(1, 2);
    check_atomic::<AtomicLong>(-1, i64::MAX);
    check_atomic::<AtomicCell<f32>>(0.5, 1.5);
    check_atomic::<AtomicCell<[u16; 5]>>([1; 5], [2; 5]);
}

#[test]
fn test_updatable_reference_trait() {
    let first = Arc::new(1);
    let second = Arc::new(2);
    let atomic: AtomicReference<i32> =
        Atomic::new(Some(first.clone()), MemoryOrder::AcqRel).unwrap();

    let old = UpdatableAtomic::set(&atomic, |_| Some(second.clone()));
    assert!(Arc::ptr_eq(&old.unwrap(), &first));
    assert!(atomic.equals(&Some(second)));
}

fn check_number<T>()
where
    T: AtomicNumber,
    T::Value: From<i8> + PartialEq + Debug,
{
    let v = |n: i8| <T::Value>::from(n);
    let atomic = T::new(v(10), MemoryOrder::AcqRel).unwrap();
    assert_eq!(atomic.increment(), v(11));
    assert_eq!(atomic.decrement(), v(10));
    assert_eq!(atomic.fetch_add(v(5)), v(10));
    assert_eq!(atomic.fetch_sub(v(3)), v(15));
    assert_eq!(atomic.multiply(v(2)), v(24));
    assert_eq!(atomic.divide(v(4)).unwrap(), v(6));
    assert!(matches!(atomic.divide(v(0)), Err(AtomicError::Arithmetic(_))));
    assert_eq!(atomic.value(), v(6));
}

#[test]
fn test_atomic_number_trait() {
    check_number::<AtomicInteger>();
    check_number::<AtomicLong>();
}

#[test]
fn test_generic_array_over_trait() {
    fn sum<A: Atomic<Value = i64>>(array: &AtomicArray<A>) -> i64 {
        array.iter().map(Atomic::value).sum()
    }

    let array = AtomicArray::<AtomicLong>::from_slice(&[1, 2, 3], MemoryOrder::Relaxed).unwrap();
    assert_eq!(sum(&array), 6);
}

#[test]
fn test_lock_freedom_reporting() {
    assert!(Atomic::is_lock_free(&AtomicInteger::default()));
    assert!(Atomic::is_lock_free(&AtomicCell::<u64>::default()));
    assert!(!Atomic::is_lock_free(&AtomicCell::<[u8; 16]>::default()));
    assert!(!Atomic::is_lock_free(&AtomicReference::<i32>::default()));
}
