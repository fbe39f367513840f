//! The map wrapper around the root subtree.

use std::fmt;
use std::iter::FromIterator;
use std::mem;

use super::subtree::{Color, Subtree};

// =============================================================================
// RbTreeMap Definition
// =============================================================================

/// An ordered map from `String` keys to values, backed by a left-leaning
/// red-black tree.
///
/// Keys are compared by byte-wise lexicographic order. Values are opaque and
/// never compared by the map.
///
/// The map is mutated in place. `put` requires `&mut self`, so concurrent
/// writers must be serialized by the caller.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get`          | O(log N)          |
/// | `put`          | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `contains_key` | O(log N)          |
/// | `height`       | O(log N)          |
/// | `len`          | O(1)              |
/// | `is_empty`     | O(1)              |
///
/// # Examples
///
/// ```rust
/// use llrb_map::tree::RbTreeMap;
///
/// let mut map = RbTreeMap::new();
/// map.put("b", "2");
/// map.put("a", "1");
/// map.put("c", "3");
///
/// assert_eq!(map.get("a"), Some(&"1"));
/// assert_eq!(map.get("b"), Some(&"2"));
/// assert_eq!(map.get("c"), Some(&"3"));
/// assert_eq!(map.get("d"), None);
/// ```
pub struct RbTreeMap<V> {
    /// Root subtree, the sentinel while the map is empty
    pub(crate) root: Subtree<V>,
    /// Number of distinct keys
    length: usize,
}

static_assertions::assert_impl_all!(RbTreeMap<String>: Send, Sync);

impl<V> RbTreeMap<V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::tree::RbTreeMap;
    ///
    /// let map: RbTreeMap<String> = RbTreeMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.height(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: Subtree::Sentinel,
            length: 0,
        }
    }

    /// Returns the number of distinct keys in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns a reference to the value stored for `key`, or `None` if the
    /// key was never put.
    ///
    /// # Complexity
    ///
    /// O(log N), iterative, no allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::tree::RbTreeMap;
    ///
    /// let mut map = RbTreeMap::new();
    /// map.put("hello", 42);
    ///
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.root.retrieve(key)
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// Only the value changes; the tree shape is left alone.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.root.retrieve_mut(key)
    }

    /// Returns `true` if the map contains a value for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Puts a key-value pair into the map.
    ///
    /// A key seen for the first time enters as a new node. A key already in
    /// the map has its value overwritten and the entry count is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::tree::RbTreeMap;
    ///
    /// let mut map = RbTreeMap::new();
    /// map.put("a", "1");
    /// map.put("a", "9");
    ///
    /// assert_eq!(map.get("a"), Some(&"9"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let _ = self.insert(key, value);
    }

    /// Puts a key-value pair into the map and returns the value it replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::tree::RbTreeMap;
    ///
    /// let mut map = RbTreeMap::new();
    /// assert_eq!(map.insert("k", 1), None);
    /// assert_eq!(map.insert("k", 2), Some(1));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let mut replaced = None;
        self.root = mem::take(&mut self.root).insert(key.into(), value, &mut replaced);
        // The top-level split can leave a red root.
        self.root.paint(Color::Black);
        if replaced.is_none() {
            self.length += 1;
        }
        replaced
    }

    /// Counts the black nodes along the leftmost path from the root.
    ///
    /// Diagnostic only: this inspects a single path and does not verify
    /// black balance across the whole tree. For `n` distinct keys it never
    /// exceeds `ceil(log2(n + 1))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::tree::RbTreeMap;
    ///
    /// let map: RbTreeMap<u32> = (0..1000).map(|index| (format!("{index:04}"), index)).collect();
    /// assert!(map.height() <= 10);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Collects entries in key order.
    pub(crate) fn entries(&self) -> Vec<(&str, &V)> {
        let mut entries = Vec::with_capacity(self.length);
        let mut stack = Vec::new();
        let mut cursor = &self.root;
        loop {
            while let Subtree::Node(node) = cursor {
                stack.push(node);
                cursor = &node.left;
            }
            let Some(node) = stack.pop() else {
                break;
            };
            entries.push((node.key.as_str(), &node.value));
            cursor = &node.right;
        }
        entries
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V> Default for RbTreeMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for RbTreeMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for RbTreeMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for RbTreeMap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries()).finish()
    }
}

impl<V: fmt::Display> fmt::Display for RbTreeMap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self.entries() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}
