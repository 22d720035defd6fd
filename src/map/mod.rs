//! Map implementations
//!
//! This module provides concurrent key-value storage.
//!
//! ## Available Maps
//!
//! - [`ConcurrentMap`]: reader/writer locked map with delete-on-absent-value
//!   assignment
//!
//! ## Choosing a Map
//!
//! - Use `ConcurrentMap` for shared key-value state where the container, not
//!   the call sites, should own the locking
//! - Setting a key to `None` is the delete signal; there is no separate
//!   tombstone state
//! - No find-by-value and no iteration surface; take what you need by key

pub mod concurrent;

pub use self::concurrent::ConcurrentMap;


#[cfg(test)]
mod proptests;
