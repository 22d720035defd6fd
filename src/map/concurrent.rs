//! Concurrent Map Implementation
//!
//! This module implements an associative collection that permits many
//! concurrent readers while serializing writers against all other access.
//!
//! ## Design
//!
//! The map uses:
//! - An `fxhash::FxHashMap` as backing storage (fast, non-cryptographic
//!   hashing for in-process keys)
//! - A single `parking_lot::RwLock` as the access coordinator for the instance
//! - A unified `set` operation where an absent value is the delete signal:
//!   `set(key, None)` is equivalent to `remove(key)`
//! - Value-semantics access: readers receive owned clones, never references
//!   into the guarded storage
//!
//! ## Locking Discipline
//!
//! Reads (`get`, `contains_key`, `len`) take the shared read guard; writes
//! (`set`, `insert`, `remove`) take the exclusive write guard. A write is
//! visible to every operation issued after the call returns, on any thread.

use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::hash::Hash;

/// A thread-safe key-value map with internal locking
///
/// Each key maps to at most one value. Multiple threads may read concurrently;
/// writes are serialized against all other access. Setting a key to an absent
/// value removes the key, mirroring subscript assignment of `nil`/`None` in
/// optional-typed APIs.
///
/// Absent keys are not errors: `get` on a missing key returns `None` and
/// `remove` on a missing key is a no-op.
///
/// # Type Parameters
///
/// * `K` - The key type, must implement `Hash + Eq`
/// * `V` - The value type; `get` returns clones, so read paths require
///   `V: Clone`
///
/// # Examples
///
/// ```rust
/// use safestore::ConcurrentMap;
///
/// let map = ConcurrentMap::new();
/// assert_eq!(map.get(&"foo"), None);
///
/// map.set("foo", Some("bar"));
/// assert_eq!(map.get(&"foo"), Some("bar"));
///
/// map.set("foo", None);
/// assert_eq!(map.get(&"foo"), None);
/// ```
#[derive(Debug)]
pub struct ConcurrentMap<K, V> {
    storage: RwLock<FxHashMap<K, V>>,
}

impl<K, V> ConcurrentMap<K, V>
where
    K: Hash + Eq,
{
    /// Create a new, empty map
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentMap;
    ///
    /// let map: ConcurrentMap<String, i32> = ConcurrentMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a new map with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Set `key` to `value`, where an absent value removes the key
    ///
    /// `Some(v)` inserts or overwrites; `None` deletes the key if present and
    /// is a no-op otherwise. This is the subscript-assignment operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// map.set(1, Some("a"));
    /// map.set(1, Some("b")); // overwrite, no duplicate
    /// assert_eq!(map.len(), 1);
    ///
    /// map.set(1, None); // delete
    /// assert!(map.is_empty());
    /// ```
    pub fn set(&self, key: K, value: Option<V>) {
        let mut storage = self.storage.write();
        match value {
            Some(value) => {
                storage.insert(key, value);
            }
            None => {
                storage.remove(&key);
            }
        }
    }

    /// Insert or overwrite the value for `key`
    ///
    /// # Returns
    ///
    /// * `Some(old_value)` if the key existed and was overwritten
    /// * `None` if the key was newly inserted
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// assert_eq!(map.insert(1, "hello"), None);
    /// assert_eq!(map.insert(1, "world"), Some("hello"));
    /// ```
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.storage.write().insert(key, value)
    }

    /// Remove `key` and return its value, if any
    ///
    /// No-op on an absent key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// map.insert("k", 1);
    /// assert_eq!(map.remove(&"k"), Some(1));
    /// assert_eq!(map.remove(&"k"), None);
    /// ```
    pub fn remove(&self, key: &K) -> Option<V> {
        self.storage.write().remove(key)
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.storage.read().contains_key(key)
    }

    /// Get the number of key-value pairs in the map
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.storage.read().is_empty()
    }
}

impl<K, V> ConcurrentMap<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Get a clone of the value for `key`
    ///
    /// Returns `None` if the key is absent; a missing key is not an error.
    /// This is the subscript-read operation: the container never hands out
    /// references into its guarded storage, only owned values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// map.insert("foo", "bar");
    /// assert_eq!(map.get(&"foo"), Some("bar"));
    /// assert_eq!(map.get(&"baz"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<V> {
        self.storage.read().get(key).cloned()
    }
}

impl<K: Hash + Eq, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for ConcurrentMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Produce an independent deep copy with its own lock
    ///
    /// The clone shares no synchronization domain with the original.
    fn clone(&self) -> Self {
        Self {
            storage: RwLock::new(self.storage.read().clone()),
        }
    }
}
