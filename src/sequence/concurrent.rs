//! Concurrent Sequence Implementation
//!
//! This module implements an ordered, index-addressable collection that permits
//! many concurrent readers while serializing writers against all other access.
//!
//! ## Design
//!
//! The sequence uses:
//! - A contiguous `Vec<T>` as backing storage, indices always span `[0, len)`
//! - A single `parking_lot::RwLock` as the access coordinator for the instance
//! - Value-semantics access: readers receive owned clones, never references
//!   into the guarded storage
//! - Tolerant out-of-range policies: `get` past the end is `None`, `remove_at`
//!   past the end is a no-op, `insert` past the end appends
//!
//! ## Locking Discipline
//!
//! - Read operations (`get`, `find`, `len`) take the shared read guard and run
//!   concurrently with each other
//! - Write operations (`append`, `insert`, `remove_at`) take the exclusive
//!   write guard
//! - Composite operations (`upsert`, `remove` by value) hold the exclusive
//!   guard across the whole find-then-mutate sequence, so the index observed by
//!   the find can never go stale before the mutation applies
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost | Guard |
//! |-----------|------|-------|
//! | `get` / `len` | O(1) | shared |
//! | `find` | O(n) | shared |
//! | `append` | O(1) amortized | exclusive |
//! | `insert` / `remove_at` | O(n) | exclusive |
//! | `upsert` / `remove` by value | O(n) | exclusive |

use parking_lot::RwLock;

/// An ordered, thread-safe sequence with internal locking
///
/// Multiple threads may read concurrently; writes are serialized against all
/// other access. All synchronization is internal: no lock or guard ever
/// appears in a public signature, and two instances never share a lock.
///
/// Out-of-range access never panics. `get` past the end returns `None`,
/// `remove_at` past the end does nothing, and `insert` past the end appends.
///
/// # Type Parameters
///
/// * `T` - The element type. Elements are returned by clone, so read paths
///   require `T: Clone`. Equality-based operations either take a caller-supplied
///   predicate or use `T: PartialEq`.
///
/// # Examples
///
/// ```rust
/// use safestore::ConcurrentSequence;
///
/// let seq = ConcurrentSequence::new();
/// seq.append("Value");
/// assert_eq!(seq.len(), 1);
/// assert_eq!(seq.get(0), Some("Value"));
/// assert_eq!(seq.remove(&"Value"), Some(0));
/// assert!(seq.is_empty());
/// ```
#[derive(Debug)]
pub struct ConcurrentSequence<T> {
    storage: RwLock<Vec<T>>,
}

impl<T> ConcurrentSequence<T> {
    /// Create a new, empty sequence
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentSequence;
    ///
    /// let seq: ConcurrentSequence<i32> = ConcurrentSequence::new();
    /// assert!(seq.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(Vec::new()),
        }
    }

    /// Create a new sequence with pre-allocated capacity
    ///
    /// Capacity only affects allocation; the sequence still starts empty.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Append a value at the logical end of the sequence
    ///
    /// Always succeeds; the sequence has no capacity bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentSequence;
    ///
    /// let seq = ConcurrentSequence::new();
    /// seq.append(1);
    /// seq.append(2);
    /// assert_eq!(seq.len(), 2);
    /// ```
    pub fn append(&self, value: T) {
        self.storage.write().push(value);
    }

    /// Insert a value at `index`, shifting later elements one position
    ///
    /// If `index` is at or past the end, the value is appended instead. The
    /// operation never fails on an index that is too large.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to insert
    /// * `index` - The position to insert at
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentSequence;
    ///
    /// let seq = ConcurrentSequence::new();
    /// seq.append('a');
    /// seq.append('c');
    /// seq.insert('b', 1);
    /// assert_eq!(seq.get(1), Some('b'));
    ///
    /// // Out-of-range insert appends
    /// seq.insert('d', 100);
    /// assert_eq!(seq.get(3), Some('d'));
    /// ```
    pub fn insert(&self, value: T, index: usize) {
        let mut storage = self.storage.write();
        if index < storage.len() {
            storage.insert(index, value);
        } else {
            storage.push(value);
        }
    }

    /// Remove the element at `index`, shifting later elements back
    ///
    /// Silently does nothing if `index` is out of bounds. When elements may
    /// move concurrently, prefer [`remove_by`](Self::remove_by), which finds
    /// and removes under one exclusive guard.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentSequence;
    ///
    /// let seq = ConcurrentSequence::new();
    /// seq.append(1);
    /// seq.remove_at(100); // out of bounds, no-op
    /// assert_eq!(seq.len(), 1);
    /// seq.remove_at(0);
    /// assert!(seq.is_empty());
    /// ```
    pub fn remove_at(&self, index: usize) {
        let mut storage = self.storage.write();
        if index < storage.len() {
            storage.remove(index);
        }
    }

    /// Find and remove the first element matching `value` under `eq`
    ///
    /// The find and the removal happen under a single exclusive guard
    /// acquisition, so no other writer can shift elements between the two
    /// steps. This is the thread-safety-correct removal path when elements may
    /// move concurrently.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to match against
    /// * `eq` - Equality predicate; called as `eq(existing, value)`
    ///
    /// # Returns
    ///
    /// * `Some(index)` - the index the element was removed from
    /// * `None` - no element matched; the sequence is unchanged
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentSequence;
    ///
    /// let seq = ConcurrentSequence::new();
    /// seq.append("Value");
    /// assert_eq!(seq.remove_by(&"Value", |a, b| a == b), Some(0));
    /// assert_eq!(seq.remove_by(&"Value", |a, b| a == b), None);
    /// ```
    pub fn remove_by<F>(&self, value: &T, eq: F) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut storage = self.storage.write();
        let index = storage.iter().position(|existing| eq(existing, value))?;
        storage.remove(index);
        Some(index)
    }

    /// Replace the first element matching `value` under `eq`, or append
    ///
    /// If a match exists, the new value takes its place at the same index and
    /// the length is unchanged; otherwise the value is appended. The whole
    /// find-then-mutate sequence runs under one exclusive guard acquisition,
    /// so N threads upserting the same value concurrently leave exactly one
    /// element behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentSequence;
    ///
    /// let seq = ConcurrentSequence::new();
    /// seq.upsert_by("Value", |a, b| a == b);
    /// seq.upsert_by("Value", |a, b| a == b);
    /// assert_eq!(seq.len(), 1);
    /// ```
    pub fn upsert_by<F>(&self, value: T, eq: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut storage = self.storage.write();
        match storage.iter().position(|existing| eq(existing, &value)) {
            Some(index) => storage[index] = value,
            None => storage.push(value),
        }
    }

    /// Find the index of the first element matching `value` under `eq`
    ///
    /// Linear scan under the shared read guard.
    ///
    /// # Returns
    ///
    /// * `Some(index)` - the first matching index
    /// * `None` - no element matched
    pub fn find_by<F>(&self, value: &T, eq: F) -> Option<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        self.storage
            .read()
            .iter()
            .position(|existing| eq(existing, value))
    }

    /// Get the number of elements currently in the sequence
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentSequence;
    ///
    /// let seq = ConcurrentSequence::new();
    /// assert_eq!(seq.len(), 0);
    /// seq.append(1);
    /// assert_eq!(seq.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.storage.read().is_empty()
    }
}

impl<T: Clone> ConcurrentSequence<T> {
    /// Get a clone of the element at `index`
    ///
    /// Returns `None` if `index` is out of bounds; out-of-range access is not
    /// an error. This is the subscript-read operation: the container never
    /// hands out references into its guarded storage, only owned values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safestore::ConcurrentSequence;
    ///
    /// let seq = ConcurrentSequence::new();
    /// seq.append(42);
    /// assert_eq!(seq.get(0), Some(42));
    /// assert_eq!(seq.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<T> {
        self.storage.read().get(index).cloned()
    }

    /// Take an owned snapshot of the current contents
    ///
    /// The snapshot is consistent: it is taken under one shared guard
    /// acquisition. It does not track later mutations.
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.read().clone()
    }
}

impl<T: PartialEq> ConcurrentSequence<T> {
    /// Find the index of the first element equal to `value`
    ///
    /// Equality-free overload of [`find_by`](Self::find_by) for element types
    /// with intrinsic equality.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.find_by(value, |a, b| a == b)
    }

    /// Find and remove the first element equal to `value`
    ///
    /// Equality-free overload of [`remove_by`](Self::remove_by). Returns the
    /// index the element was removed from, or `None` if nothing matched.
    pub fn remove(&self, value: &T) -> Option<usize> {
        self.remove_by(value, |a, b| a == b)
    }

    /// Replace the first element equal to `value`, or append
    ///
    /// Equality-free overload of [`upsert_by`](Self::upsert_by).
    pub fn upsert(&self, value: T) {
        self.upsert_by(value, |a, b| a == b)
    }
}

impl<T> Default for ConcurrentSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ConcurrentSequence<T> {
    /// Produce an independent deep copy with its own lock
    ///
    /// The clone shares no synchronization domain with the original.
    fn clone(&self) -> Self {
        Self {
            storage: RwLock::new(self.storage.read().clone()),
        }
    }
}
