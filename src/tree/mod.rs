//! Left-leaning red-black tree map.
//!
//! This module provides [`RbTreeMap`], an ordered map from `String` keys to
//! arbitrary values.
//!
//! # Structure
//!
//! Every subtree is either the sentinel (the empty subtree, always black) or
//! a node that exclusively owns its two children. New keys always enter the
//! tree as red leaves, and on the way back up each node applies three local
//! fixes in a fixed order:
//!
//! 1. **Lean left**: a red right child under a black left child is rotated left
//! 2. **Double red**: two consecutive red left links are rotated right
//! 3. **Split**: two red children are flipped black and the parent turns red
//!
//! After the top-level insert returns, the root is forced black. Together
//! these keep the following invariants after every completed put:
//!
//! - The root is black
//! - No node has a red right child
//! - No red node has a red left child
//! - Every path from a node down to the sentinel crosses the same number of
//!   black nodes
//!
//! # Examples
//!
//! ```rust
//! use llrb_map::tree::RbTreeMap;
//!
//! let mut map = RbTreeMap::new();
//! map.put("a", "1");
//! map.put("a", "9");
//!
//! assert_eq!(map.get("a"), Some(&"9"));
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.height(), 1);
//! ```

mod map;
mod subtree;

#[cfg(test)]
mod proptests;

pub use map::RbTreeMap;
