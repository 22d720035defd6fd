//! Sequence implementations
//!
//! This module provides ordered, index-addressable concurrent storage.
//!
//! ## Available Sequences
//!
//! - [`ConcurrentSequence`]: reader/writer locked sequence with tolerant
//!   out-of-range semantics
//!
//! ## Choosing a Sequence
//!
//! - Use `ConcurrentSequence` when multiple threads share an ordered collection
//!   and you want the container, not the call sites, to own the locking
//! - Prefer the value-based removal path ([`ConcurrentSequence::remove`]) over
//!   blind index removal when elements may move concurrently
//! - Mutation is O(n) worst case due to array-shift semantics; this is an
//!   accepted simplicity/safety tradeoff, not a performance target

pub mod concurrent;

pub use self::concurrent::ConcurrentSequence;


#[cfg(test)]
mod proptests;
