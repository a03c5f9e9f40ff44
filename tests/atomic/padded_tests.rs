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
    AtomicCell,
    AtomicInteger,
    AtomicLong,
    MemoryOrder,
    Padded,
    CACHE_LINE_SIZE,
};
use std::mem::{
    align_of,
    size_of,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_padded_cells_fill_a_line() {
    assert_eq!(size_of::<Padded<AtomicInteger>>(), CACHE_LINE_SIZE);
    assert_eq!(size_of::<Padded<AtomicLong>>(), CACHE_LINE_SIZE);
    assert_eq!(size_of::<Padded<AtomicBoolean>>(), CACHE_LINE_SIZE);
    assert_eq!(align_of::<Padded<AtomicCell<f64>>>(), CACHE_LINE_SIZE);
}

#[test]
fn test_padded_array_elements_on_distinct_lines() {
    let counters: Vec<Padded<AtomicLong>> = (0..4)
        .map(|_| AtomicLong::new_padded(0, MemoryOrder::Relaxed).unwrap())
        .collect();
    let lines: Vec<usize> = counters
        .iter()
        .map(|c| (&**c as *const AtomicLong as usize) / CACHE_LINE_SIZE)
        .collect();
    for pair in lines.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_padded_behaves_like_bare_cell() {
    let cell = AtomicCell::new_padded(1.0f32, MemoryOrder::AcqRel).unwrap();
    assert_eq!(cell.compare_exchange(2.0, 1.0), 1.0);
    cell.store(3.0, MemoryOrder::Release).unwrap();
    assert_eq!(cell.load(MemoryOrder::Acquire).unwrap(), 3.0);
    assert_eq!(cell.to_string(), "3");
}

#[test]
fn test_padded_counters_shared_between_threads() {
    let counters: Arc<Vec<Padded<AtomicInteger>>> = Arc::new(
        (0..4)
            .map(|_| AtomicInteger::new_padded(0, MemoryOrder::AcqRel).unwrap())
            .collect(),
    );
    let mut handles = vec![];

    for t in 0..4 {
        let counters = counters.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..1000 {
                counters[t].increment();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(counters.iter().all(|c| c.value() == 1000));
}
