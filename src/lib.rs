//! # llrb-map
//!
//! An ordered, string-keyed map backed by a left-leaning red-black (LLRB)
//! binary search tree.
//!
//! ## Overview
//!
//! - **Tree**: [`tree::RbTreeMap`], a mutable map whose worst-case height
//!   stays logarithmic through rotations and color flips
//! - **Workload**: the `key,value` file protocol used to load a map and
//!   verify it afterwards (last write wins)
//!
//! ## Feature Flags
//!
//! - `tree`: The LLRB map
//! - `workload`: Workload parsing, loading and verification
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use llrb_map::prelude::*;
//!
//! let mut map = RbTreeMap::new();
//! map.put("b", 2);
//! map.put("a", 1);
//! map.put("c", 3);
//!
//! assert_eq!(map.get("a"), Some(&1));
//! assert_eq!(map.get("z"), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use llrb_map::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "tree")]
    pub use crate::tree::*;

    #[cfg(feature = "workload")]
    pub use crate::workload::*;
}

#[cfg(feature = "tree")]
pub mod tree;

#[cfg(feature = "workload")]
pub mod workload;
