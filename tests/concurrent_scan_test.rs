//! Integration tests for sharing strategies and indexes across threads.

use skipscan::{AccessStrategy, IndexKey, IndexOptions, IndexRange, Order, SkipListIndex};
use std::sync::Arc;
use std::thread;

fn create_index(n: i64) -> SkipListIndex {
    let index = SkipListIndex::new("n", IndexOptions::default());
    for k in 0..n {
        // Two entries per key
        index.insert(IndexKey::from(k), (2 * k) as u64).unwrap();
        index.insert(IndexKey::from(k), (2 * k + 1) as u64).unwrap();
    }
    index
}

/// One strategy value, many threads, each with its own cursor.
#[test]
fn test_concurrent_scans_share_strategy() {
    let index = Arc::new(create_index(500));
    let range = Arc::new(IndexRange::between("n", 100, 199, Order::Descending));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let index = Arc::clone(&index);
            let range = Arc::clone(&range);
            thread::spawn(move || {
                let meta = index.metadata();
                range
                    .execute(index.as_ref(), &meta)
                    .map(|n| n.data())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected: Vec<u64> = (200..400).rev().collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Scans running next to a writer on other keys see a consistent prefix.
#[test]
fn test_scans_alongside_writer() {
    let index = Arc::new(create_index(100));

    let writer = {
        let index = Arc::clone(&index);
        thread::spawn(move || {
            for k in 1_000..1_200 {
                index.insert(IndexKey::from(k), 0).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let strategy = AccessStrategy::range("n", 10, 20, true, false, Order::Ascending);
                for _ in 0..50 {
                    let meta = index.metadata();
                    assert_eq!(strategy.execute(index.as_ref(), &meta).count(), 20);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(index.len(), 400);
}

/// Dropping a half-consumed scan holds nothing: writers proceed at once.
#[test]
fn test_abandoned_scan_holds_no_lock() {
    let index = create_index(10);
    let meta = index.metadata();
    let all = AccessStrategy::all("n", Order::Ascending);

    let mut scan = all.execute(&index, &meta);
    assert!(scan.next().is_some());

    // Would deadlock if the cursor kept a read guard; the new tail entry is seen
    index.insert(IndexKey::from(99), 0).unwrap();
    assert_eq!(scan.count(), 20);
}
