//! Basic usage example for safestore
//!
//! This example demonstrates shared use of both containers across threads,
//! including the upsert path and the delete-on-absent-value map contract.

use safestore::{ConcurrentMap, ConcurrentSequence};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("safestore Basic Usage Example");
    println!("=============================");

    // Sequence operations
    println!("\n1. Sequence Operations:");
    let seq = Arc::new(ConcurrentSequence::new());
    seq.append("alpha");
    seq.append("gamma");
    seq.insert("beta", 1);

    println!("   Contents: {:?}", seq.to_vec());
    println!("   Find 'beta': {:?}", seq.find(&"beta"));

    let removed = seq.remove(&"gamma");
    println!("   Removed 'gamma' from index: {:?}", removed);

    // Out-of-range access is tolerated, never a panic
    println!("   get(100): {:?}", seq.get(100));
    seq.remove_at(100);
    seq.insert("delta", 100); // appends
    println!("   After tolerant ops: {:?}", seq.to_vec());

    // Concurrent appends
    println!("\n2. Concurrent Appends:");
    let shared = Arc::new(ConcurrentSequence::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for j in 0..25 {
                    shared.append(i * 25 + j);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    println!("   8 threads x 25 appends -> len = {}", shared.len());

    // Concurrent upserts of the same value collapse to one element
    println!("\n3. Concurrent Upserts:");
    let registry = Arc::new(ConcurrentSequence::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.upsert("singleton"))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    println!("   8 racing upserts -> len = {}", registry.len());

    // Map operations
    println!("\n4. Map Operations:");
    let map = Arc::new(ConcurrentMap::new());
    map.set("foo", Some("bar"));
    println!("   get(foo): {:?}", map.get(&"foo"));

    map.set("foo", None); // absent value deletes the key
    println!("   After set(foo, None): {:?}", map.get(&"foo"));

    println!("\n5. Concurrent Map Writes:");
    let counters: Arc<ConcurrentMap<String, i32>> = Arc::new(ConcurrentMap::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let counters = Arc::clone(&counters);
            thread::spawn(move || {
                for j in 0..25 {
                    counters.set(format!("key_{}_{}", i, j), Some(j));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    println!("   4 threads x 25 sets -> len = {}", counters.len());
}
