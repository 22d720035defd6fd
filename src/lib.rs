//! # safestore
//!
//! Thread-safe generic storage containers for concurrent programming.
//!
//! ## Features
//!
//! - **ConcurrentSequence**: Ordered, index-addressable storage with insert/remove
//!   by index or by equality predicate
//! - **ConcurrentMap**: Key-value storage where assigning an absent value deletes the key
//!
//! ## Philosophy
//!
//! safestore focuses on providing:
//! - Internal synchronization that never leaks into the public API
//! - Value-semantics access: callers receive owned clones, never references
//!   into shared storage
//! - Predictable no-panic behavior for out-of-range and absent-key access
//! - Ergonomic APIs that guide users toward correct concurrent usage patterns
//!
//! ## Quick Start
//!
//! ```rust
//! use safestore::{ConcurrentMap, ConcurrentSequence};
//!
//! let seq = ConcurrentSequence::new();
//! seq.append("hello");
//! assert_eq!(seq.get(0), Some("hello"));
//!
//! let map = ConcurrentMap::new();
//! map.set("key", Some(42));
//! assert_eq!(map.get(&"key"), Some(42));
//! map.set("key", None); // absent value deletes the key
//! assert_eq!(map.get(&"key"), None);
//! ```
//!
//! ## Thread Safety
//!
//! Both containers are safe to share across threads behind an `Arc` without any
//! additional synchronization. Reads run concurrently with each other; writes are
//! serialized against all other access. Composite operations such as
//! [`ConcurrentSequence::upsert`] execute as a single critical section, so an
//! index observed during the internal find can never be invalidated by another
//! writer before the mutation lands.
//!
//! ## Concurrency Model
//!
//! Each container instance owns a single [`parking_lot::RwLock`] guarding its
//! backing storage. Writes are synchronous: when a mutating call returns, the
//! mutation is visible to every subsequently issued operation on any thread.
//! Two container instances never share a lock.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod map;
pub mod sequence;

pub use crate::map::ConcurrentMap;
pub use crate::sequence::ConcurrentSequence;
